use thiserror::Error;

/// Validation errors for stored foreign-key path patterns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Path cannot be empty")]
    Empty,

    #[error("Foreign key paths must be absolute (start with /)")]
    NotAbsolute,

    #[error("Invalid array notation in segment: {0}. Use format: name[*]")]
    BadSegment(String),
}
