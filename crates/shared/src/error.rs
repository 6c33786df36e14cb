use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemesterError {
    #[error("semester must be between 1 and 8, got {0}")]
    OutOfRange(i64),
    #[error("semester must be a number between 1 and 8, got '{0}'")]
    NotANumber(String),
}
