use crate::config::SMALL_PANEL_THRESHOLD;
use crate::error::{ensure_finite, ensure_positive, GeometryError, Result};
use crate::math::WIDTH_TOLERANCE;
use crate::model::{JointMethod, Panel, PanelKind, PanelPosition, WallId};
use crate::operations::joints::EndJoints;

use super::ledger::PanelLedger;

/// Cuts a wall run into an ordered list of stock panels.
///
/// Panels are listed from the run's left end to its right end:
///
/// 1. a `Side` trim panel at each butt-jointed end, `stock_width -
///    thickness_adjustment` wide (bevelled ends need no trim);
/// 2. as many `Full` stock panels as fit in what remains;
/// 3. the rest as one `Leftover` piece, reclassified as `Side` when it is
///    narrower than the small-width threshold and was cut from fresh stock.
///
/// If the run is too short for its trim panels, the trims share the run
/// equally. Every piece is booked in the ledger, which may supply it from an
/// offcut left by an earlier run.
#[derive(Debug, Clone)]
pub struct CalculatePanels {
    run_length: f64,
    stock_width: f64,
    joints: EndJoints,
    thickness_adjustment: f64,
    small_width_threshold: f64,
    source_wall: Option<WallId>,
}

impl CalculatePanels {
    /// Creates a new `CalculatePanels` operation.
    #[must_use]
    pub fn new(run_length: f64, stock_width: f64, joints: EndJoints) -> Self {
        Self {
            run_length,
            stock_width,
            joints,
            thickness_adjustment: 0.0,
            small_width_threshold: SMALL_PANEL_THRESHOLD,
            source_wall: None,
        }
    }

    /// Width removed from the stock width for each butt-end trim panel.
    #[must_use]
    pub fn with_thickness_adjustment(mut self, thickness_adjustment: f64) -> Self {
        self.thickness_adjustment = thickness_adjustment;
        self
    }

    /// Overrides the small-width reclassification threshold.
    #[must_use]
    pub fn with_small_width_threshold(mut self, threshold: f64) -> Self {
        self.small_width_threshold = threshold;
        self
    }

    /// Tags every produced panel with the wall it belongs to.
    #[must_use]
    pub fn with_source_wall(mut self, wall: WallId) -> Self {
        self.source_wall = Some(wall);
        self
    }

    /// Executes the operation, booking stock use in `ledger`.
    ///
    /// # Errors
    ///
    /// Returns a `GeometryError` if the run length or stock width is not a
    /// positive finite number, or the thickness adjustment is outside
    /// `[0, stock_width)`.
    pub fn execute(&self, ledger: &mut PanelLedger) -> Result<Vec<Panel>> {
        self.validate()?;
        let stock = self.stock_width;

        let butt_left = self.joints.left == JointMethod::ButtIn;
        let butt_right = self.joints.right == JointMethod::ButtIn;
        let side_count = u8::from(butt_left) + u8::from(butt_right);

        let mut side_width = stock - self.thickness_adjustment;
        if side_count > 0 && f64::from(side_count) * side_width > self.run_length {
            side_width = self.run_length / f64::from(side_count);
        }

        let mut panels = Vec::new();
        if butt_left {
            panels.push(self.cut_side(side_width, PanelPosition::Left, ledger));
        }

        let mut remaining = self.run_length - f64::from(side_count) * side_width;
        while stock <= remaining {
            ledger.record_full(stock);
            panels.push(self.tag(Panel::new(stock, PanelKind::Full, PanelPosition::Middle)));
            remaining -= stock;
        }

        if remaining > WIDTH_TOLERANCE {
            panels.push(self.cut_remainder(remaining, ledger));
        }

        if butt_right {
            panels.push(self.cut_side(side_width, PanelPosition::Right, ledger));
        }

        debug_assert!(
            (crate::model::total_width(&panels) - self.run_length).abs() <= WIDTH_TOLERANCE,
            "panel widths must add up to the run length"
        );
        tracing::debug!(
            wall = ?self.source_wall,
            run_length = self.run_length,
            panels = panels.len(),
            "calculated panels"
        );
        Ok(panels)
    }

    fn validate(&self) -> Result<()> {
        ensure_positive("run_length", self.run_length)?;
        ensure_positive("stock_width", self.stock_width)?;
        let adjustment = ensure_finite("thickness_adjustment", self.thickness_adjustment)?;
        if adjustment < 0.0 || adjustment >= self.stock_width {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "thickness_adjustment",
                value: adjustment,
                min: 0.0,
                max: self.stock_width,
            }
            .into());
        }
        ensure_finite("small_width_threshold", self.small_width_threshold)?;
        Ok(())
    }

    fn cut_side(&self, width: f64, position: PanelPosition, ledger: &mut PanelLedger) -> Panel {
        let from_offcut = ledger.record_cut(width, self.stock_width);
        let mut panel = self.tag(Panel::new(width, PanelKind::Side, position));
        panel.from_offcut = from_offcut;
        panel
    }

    fn cut_remainder(&self, width: f64, ledger: &mut PanelLedger) -> Panel {
        let from_offcut = ledger.record_cut(width, self.stock_width);
        let kind = if width < self.small_width_threshold && !from_offcut {
            PanelKind::Side
        } else {
            ledger.record_leftover();
            PanelKind::Leftover
        };
        let mut panel = self.tag(Panel::new(width, kind, PanelPosition::Middle));
        panel.from_offcut = from_offcut;
        panel
    }

    fn tag(&self, panel: Panel) -> Panel {
        Panel {
            source_wall: self.source_wall,
            ..panel
        }
    }
}
