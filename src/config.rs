use crate::error::{ensure_finite, ensure_positive, GeometryError, Result};

/// Manufactured panel width used when the project does not specify one (mm).
pub const DEFAULT_STOCK_WIDTH: f64 = 1200.0;

/// Remainders narrower than this (mm) are installed as trim panels rather
/// than counted as leftovers, unless they were cut from a reused offcut.
pub const SMALL_PANEL_THRESHOLD: f64 = 200.0;

/// Panelization settings for one calculation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConfig {
    pub stock_width: f64,
    pub small_width_threshold: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            stock_width: DEFAULT_STOCK_WIDTH,
            small_width_threshold: SMALL_PANEL_THRESHOLD,
        }
    }
}

impl PanelConfig {
    /// Sets the stock panel width.
    #[must_use]
    pub fn with_stock_width(mut self, stock_width: f64) -> Self {
        self.stock_width = stock_width;
        self
    }

    /// Sets the small-width reclassification threshold.
    #[must_use]
    pub fn with_small_width_threshold(mut self, threshold: f64) -> Self {
        self.small_width_threshold = threshold;
        self
    }

    /// Rejects non-positive stock widths and negative thresholds.
    ///
    /// # Errors
    ///
    /// Returns a `GeometryError` naming the offending setting.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("stock_width", self.stock_width)?;
        let threshold = ensure_finite("small_width_threshold", self.small_width_threshold)?;
        if threshold < 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "small_width_threshold",
                value: threshold,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = PanelConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.stock_width - DEFAULT_STOCK_WIDTH).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_bad_settings() {
        assert!(PanelConfig::default().with_stock_width(0.0).validate().is_err());
        assert!(PanelConfig::default().with_stock_width(f64::NAN).validate().is_err());
        assert!(PanelConfig::default()
            .with_small_width_threshold(-1.0)
            .validate()
            .is_err());
        assert!(PanelConfig::default()
            .with_small_width_threshold(0.0)
            .validate()
            .is_ok());
    }
}
