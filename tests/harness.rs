use std::fs;

use anyhow::{bail, Result};

use aoc2025::{
    run_days, run_part, select_days, Answer, Day, InputError, InputKind, InputSource, Part,
    ALL_DAYS,
};

const EXPECTED: [(u8, u64, u64); 9] = [
    (1, 3, 6),
    (2, 1227775554, 4174379265),
    (3, 357, 3121910778619),
    (4, 13, 43),
    (5, 3, 14),
    (6, 4277556, 3263827),
    (7, 21, 40),
    (8, 40, 25272),
    (9, 50, 24),
];

#[test]
fn all_days_solve_their_examples() -> Result<()> {
    let source = InputSource::bundled(InputKind::Test);
    for (number, part1, part2) in EXPECTED {
        let day = &ALL_DAYS[usize::from(number) - 1];
        assert_eq!(day.number, number);
        for (part, expected) in [(Part::One, part1), (Part::Two, part2)] {
            let solver = day
                .runner(part, InputKind::Test)
                .expect("registered solver");
            let input = source.load(&day.input_name(part))?;
            let run = run_part(solver, &input, 2)?;
            assert_eq!(run.answer, Answer::Number(expected), "day {number} part {part}");
        }
    }
    Ok(())
}

#[test]
fn missing_eval_input_is_reported() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::create_dir(dir.path().join("test"))?;
    fs::write(dir.path().join("test").join("d1"), "R50\n")?;

    let test = InputSource::new(dir.path(), InputKind::Test);
    assert_eq!(test.load("d1")?, "R50\n");

    let eval = InputSource::new(dir.path(), InputKind::Eval);
    let err = eval.load("d1").unwrap_err();
    let expected_path = dir.path().join("eval").join("d1");
    match &err {
        InputError::Missing { path } => assert_eq!(path, &expected_path),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains(&expected_path.display().to_string()));
    Ok(())
}

#[test]
fn custom_input_directory_runs_end_to_end() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::create_dir(dir.path().join("eval"))?;
    fs::write(dir.path().join("eval").join("d1"), "R50\nL100\nR1\n")?;

    let source = InputSource::new(dir.path(), InputKind::Eval);
    let report = run_days(select_days(&[1]), &source, 3, false, "Test CPU")?;
    let [row] = report.rows() else {
        panic!("expected a single row, got {}", report.rows().len());
    };
    assert_eq!(row.day, 1);
    assert_eq!(row.part(Part::One).map(|r| &r.answer), Some(&Answer::Number(2)));
    assert_eq!(row.part(Part::Two).map(|r| &r.answer), Some(&Answer::Number(2)));
    assert_eq!(row.part(Part::One).map(|r| r.repeats), Some(3));

    let rendered = report.to_string();
    assert!(rendered.contains("Timings show average of 3 runs. Run on Test CPU."));
    assert!(rendered.contains("│ 1   │ 2      │"));
    Ok(())
}

#[test]
fn selected_days_run_in_calendar_order() -> Result<()> {
    let source = InputSource::bundled(InputKind::Test);
    let report = run_days(select_days(&[3, 1]), &source, 1, false, "CPU")?;
    let days: Vec<u8> = report.rows().iter().map(|row| row.day).collect();
    assert_eq!(days, vec![1, 3]);
    assert_eq!(
        report.rows()[1].part(Part::Two).map(|r| &r.answer),
        Some(&Answer::Number(3121910778619))
    );
    Ok(())
}

#[test]
fn unsolved_days_need_no_input() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let source = InputSource::new(dir.path(), InputKind::Eval);
    let report = run_days(select_days(&[10, 11, 12]), &source, 1, true, "CPU")?;
    assert_eq!(report.rows().len(), 3);
    assert!(report
        .rows()
        .iter()
        .all(|row| Part::BOTH.iter().all(|&part| row.part(part).is_none())));
    Ok(())
}

#[test]
fn missing_input_aborts_the_run() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::create_dir(dir.path().join("eval"))?;
    fs::write(dir.path().join("eval").join("d1"), "R50\n")?;

    let source = InputSource::new(dir.path(), InputKind::Eval);
    let err = run_days(select_days(&[1, 2]), &source, 1, false, "CPU").unwrap_err();
    match err.downcast_ref::<InputError>() {
        Some(InputError::Missing { path }) => {
            assert_eq!(path, &dir.path().join("eval").join("d2"))
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

fn broken(_: &str) -> Result<Answer> {
    bail!("unexpected token")
}

fn fine(_: &str) -> Result<Answer> {
    Ok(Answer::Number(1))
}

#[test]
fn failing_solver_names_day_and_part() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::create_dir(dir.path().join("test"))?;
    fs::write(dir.path().join("test").join("d4"), "@@.\n")?;

    let day = Day::new(4, fine, broken);
    let source = InputSource::new(dir.path(), InputKind::Test);
    let err = run_days([&day], &source, 2, false, "CPU").unwrap_err();
    assert_eq!(err.to_string(), "Day 4 part 2 failed");
    assert_eq!(format!("{err:#}"), "Day 4 part 2 failed: unexpected token");
    Ok(())
}
