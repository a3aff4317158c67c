use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserRecordError {
  #[error("Missing source record")]
  MissingSource,

  #[error("Unknown role: {0}")]
  UnknownRole(String),
}
