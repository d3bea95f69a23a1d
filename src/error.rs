use thiserror::Error;

pub type QuatUtilResult<T> = Result<T, QuatUtilError>;

/// Failures reported by the batch transforms and the method parser.
///
/// Numerical degeneracies (poles, anti-parallel vectors, angles near 90 deg)
/// are not errors; they propagate as IEEE-754 values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuatUtilError {
    #[error("Invalid method '{0}': expected one of 'shortest', 'keep_z', 'radec'")]
    InvalidMethod(String),

    #[error("Shape mismatch: {left_name} has length {left} but {right_name} has length {right}")]
    ShapeMismatch {
        left_name: &'static str,
        left: usize,
        right_name: &'static str,
        right: usize,
    },

    #[error("Invalid shape: {message}")]
    InvalidShape { message: String },
}

impl QuatUtilError {
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape {
            message: message.into(),
        }
    }

    /// Check that two paired inputs have the same length
    pub(crate) fn check_paired(
        left_name: &'static str,
        left: usize,
        right_name: &'static str,
        right: usize,
    ) -> QuatUtilResult<()> {
        if left == right {
            Ok(())
        } else {
            Err(Self::ShapeMismatch {
                left_name,
                left,
                right_name,
                right,
            })
        }
    }
}
