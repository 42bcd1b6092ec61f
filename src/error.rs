use thiserror::Error;

/// Errors returned by [`Point`](crate::Point) operations
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PointError {
    /// A numeric argument violated its precondition
    #[error("invalid argument `{name}` ({value}): {constraint}")]
    InvalidArgument {
        /// Parameter name as it appears in the method signature
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Human readable constraint that failed
        constraint: &'static str,
    },
    /// The angle between two coincident points is undefined
    #[error("points are at the same location")]
    SameLocation,
}

impl PointError {
    /// True for [`PointError::InvalidArgument`]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PointError::InvalidArgument { .. })
    }
}

/// Reject NaN and infinities, naming the offending argument in the error.
pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64, PointError> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("rejecting {name}={value}: not finite");
        Err(PointError::InvalidArgument {
            name,
            value,
            constraint: "must be a finite number",
        })
    }
}

/// Reject anything that is not a finite number strictly greater than zero.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64, PointError> {
    let value = ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        log::debug!("rejecting {name}={value}: not positive");
        Err(PointError::InvalidArgument {
            name,
            value,
            constraint: "must be greater than zero",
        })
    }
}
