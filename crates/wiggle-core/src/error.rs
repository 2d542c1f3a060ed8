use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WiggleError {
    #[error("Input file does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode animation: {0}")]
    Encode(#[source] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Frame buffer shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, WiggleError>;
