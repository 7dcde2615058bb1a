use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    InvalidScaleFactor(f32),
    InvalidMaxItemSize(f32),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidScaleFactor(value) => write!(
                f,
                "invalid scale factor {value}: must be finite and greater than 1.0"
            ),
            ModelError::InvalidMaxItemSize(value) => write!(
                f,
                "invalid max item size {value}: must be finite and greater than 0"
            ),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
