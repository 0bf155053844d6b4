use std::fmt::{self, Display};

/// The result of one puzzle part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Number(u64),
    Text(String),
}

impl Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{n}"),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Answer {
    fn from(value: u64) -> Self {
        Answer::Number(value)
    }
}

impl From<u32> for Answer {
    fn from(value: u32) -> Self {
        Answer::Number(value.into())
    }
}

impl From<usize> for Answer {
    fn from(value: usize) -> Self {
        Answer::Number(value as u64)
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_owned())
    }
}
