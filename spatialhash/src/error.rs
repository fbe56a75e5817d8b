use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpatialHashError {
    InvalidCellSize { width: f32, height: f32 },
}

pub type SpatialHashResult<T> = Result<T, SpatialHashError>;

impl fmt::Display for SpatialHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpatialHashError::InvalidCellSize { width, height } => {
                write!(
                    f,
                    "cell width/height must be finite and positive (width: {}, height: {})",
                    width, height
                )
            }
        }
    }
}

impl std::error::Error for SpatialHashError {}
