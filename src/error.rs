use thiserror::Error;

/// Reasons a maze cannot be generated
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    #[error("invalid maze dimensions {width}x{height}: width and height must be at least 2 and their product must fit in usize")]
    InvalidDimensions { width: usize, height: usize },
}
