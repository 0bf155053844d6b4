//! Locating and loading puzzle input files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

/// Which set of fixtures to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Small hand-crafted examples from the puzzle text
    Test,
    /// Full-size personal puzzle data
    Eval,
}

impl InputKind {
    pub fn from_test_flag(test: bool) -> Self {
        if test {
            InputKind::Test
        } else {
            InputKind::Eval
        }
    }

    pub fn dir_name(self) -> &'static str {
        match self {
            InputKind::Test => "test",
            InputKind::Eval => "eval",
        }
    }
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Please add puzzle data to '{}'", .path.display())]
    Missing { path: PathBuf },

    #[error("Failed to read puzzle data from '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Resolves input names like `d4` to files under `<data_dir>/<test|eval>/`.
#[derive(Debug, Clone)]
pub struct InputSource {
    data_dir: PathBuf,
    kind: InputKind,
}

impl InputSource {
    pub fn new(data_dir: impl Into<PathBuf>, kind: InputKind) -> Self {
        Self {
            data_dir: data_dir.into(),
            kind,
        }
    }

    /// The `data/` directory shipped alongside this crate.
    pub fn bundled(kind: InputKind) -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"), kind)
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.data_dir.join(self.kind.dir_name()).join(name)
    }

    pub fn load(&self, name: &str) -> Result<String, InputError> {
        let path = self.path(name);
        match fs::read_to_string(&path) {
            Ok(input) => {
                debug!(path = %path.display(), bytes = input.len(), "loaded puzzle input");
                Ok(input)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(InputError::Missing {
                path: relative_to_cwd(&path),
            }),
            Err(source) => Err(InputError::Read { path, source }),
        }
    }
}

fn relative_to_cwd(path: &Path) -> PathBuf {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_layout() {
        let source = InputSource::new("data", InputKind::Eval);
        assert_eq!(source.path("d4"), Path::new("data/eval/d4"));
        let source = InputSource::new("data", InputKind::from_test_flag(true));
        assert_eq!(source.path("d4"), Path::new("data/test/d4"));
    }

    #[test]
    fn test_missing_input_names_path() {
        let source = InputSource::new("no-such-dir", InputKind::Test);
        let err = source.load("d1").unwrap_err();
        assert!(matches!(err, InputError::Missing { .. }));
        assert_eq!(
            err.to_string(),
            format!(
                "Please add puzzle data to '{}'",
                Path::new("no-such-dir/test/d1").display()
            )
        );
    }

    #[test]
    fn test_load_bundled() -> anyhow::Result<()> {
        let input = InputSource::bundled(InputKind::Test).load("d1")?;
        assert!(input.starts_with("L68\n"));
        Ok(())
    }
}
