use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PathError {
    #[error("path expression cannot be empty")]
    Empty,

    #[error("path parse error in '{0}': {1}")]
    Parse(String, String),
}
