use spindle_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("invalid carousel configuration: {0}")]
    InvalidConfiguration(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
