use thiserror::Error;

use crate::model::WallId;

/// Top-level error type for the Panelis engine.
#[derive(Debug, Error)]
pub enum PanelisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric inputs.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to the wall set as a whole.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("wall {0} not found")]
    WallNotFound(WallId),

    #[error("wall {0} appears more than once")]
    DuplicateWall(WallId),
}

/// Errors related to engine operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PanelisError`].
pub type Result<T> = std::result::Result<T, PanelisError>;

/// Rejects non-finite values.
///
/// # Errors
///
/// Returns `GeometryError::NonFinite` if `value` is NaN or infinite.
pub fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { parameter, value }.into())
    }
}

/// Rejects non-finite and non-positive values.
///
/// # Errors
///
/// Returns `GeometryError::NonFinite` or `GeometryError::ParameterOutOfRange`.
pub fn ensure_positive(parameter: &'static str, value: f64) -> Result<f64> {
    ensure_finite(parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_pass() {
        assert!(ensure_finite("x", 3.5).is_ok());
        assert!(ensure_finite("x", f64::NAN).is_err());
        assert!(ensure_finite("x", f64::INFINITY).is_err());
    }

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert!(ensure_positive("width", 1.0).is_ok());
        assert!(matches!(
            ensure_positive("width", 0.0),
            Err(PanelisError::Geometry(GeometryError::ParameterOutOfRange { .. }))
        ));
        assert!(ensure_positive("width", -4.0).is_err());
    }

    #[test]
    fn messages_name_the_parameter() {
        let err = ensure_positive("stock_width", -1.0).unwrap_err();
        assert!(err.to_string().contains("stock_width"));
    }
}
