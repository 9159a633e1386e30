/// Project-wide panel usage, as reported to quantity tables.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OptimizationSummary {
    /// Stock panels installed uncut.
    pub full_panels: u32,
    /// Stock panels opened to cut side or leftover pieces from.
    pub full_panels_used_for_cutting: u32,
    /// Remainder pieces kept as leftovers.
    pub leftover_panels: u32,
    /// Stock length bought but not installed (mm).
    pub total_waste: f64,
    /// 0-100, where 100 means every millimeter of opened stock was installed.
    pub optimization_score: f64,
}

/// Running account of stock use across the walls of one calculation pass.
///
/// Besides the counters, the ledger keeps a pool of offcuts: whenever a piece
/// is trimmed from fresh stock the rest of that stock panel goes into the
/// pool, and later pieces are cut from the pool first.
///
/// Ledgers built independently (e.g. per wall on separate threads) combine
/// with [`PanelLedger::merge`], which is commutative and associative.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelLedger {
    full_panels: u32,
    cut_panels: u32,
    leftover_panels: u32,
    stock_consumed: f64,
    installed: f64,
    /// Reusable offcut widths, ascending.
    offcuts: Vec<f64>,
}

impl PanelLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all counters and the offcut pool.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Records a whole stock panel installed uncut.
    pub fn record_full(&mut self, stock_width: f64) {
        self.full_panels += 1;
        self.stock_consumed += stock_width;
        self.installed += stock_width;
    }

    /// Records a piece of `width` cut for installation.
    ///
    /// Takes the narrowest pooled offcut that fits; otherwise opens a fresh
    /// stock panel and pools its remainder. Returns `true` when the piece came
    /// from an offcut.
    pub fn record_cut(&mut self, width: f64, stock_width: f64) -> bool {
        self.installed += width;

        // Pool is ascending, so the first fit is the best fit.
        if let Some(idx) = self.offcuts.iter().position(|&offcut| width <= offcut) {
            let rest = self.offcuts.remove(idx) - width;
            self.pool(rest);
            return true;
        }

        self.cut_panels += 1;
        self.stock_consumed += stock_width;
        self.pool(stock_width - width);
        false
    }

    /// Records a remainder kept as a leftover panel.
    pub fn record_leftover(&mut self) {
        self.leftover_panels += 1;
    }

    /// Offcut widths currently available for reuse, ascending.
    #[must_use]
    pub fn offcuts(&self) -> &[f64] {
        &self.offcuts
    }

    /// Folds another ledger into this one.
    pub fn merge(&mut self, other: &PanelLedger) {
        self.full_panels += other.full_panels;
        self.cut_panels += other.cut_panels;
        self.leftover_panels += other.leftover_panels;
        self.stock_consumed += other.stock_consumed;
        self.installed += other.installed;
        self.offcuts.extend_from_slice(&other.offcuts);
        self.offcuts.sort_by(f64::total_cmp);
    }

    /// Snapshot of the current totals.
    #[must_use]
    pub fn summary(&self) -> OptimizationSummary {
        let total_waste = (self.stock_consumed - self.installed).max(0.0);
        let optimization_score = if self.stock_consumed > 0.0 {
            (100.0 * self.installed / self.stock_consumed).clamp(0.0, 100.0)
        } else {
            100.0
        };
        OptimizationSummary {
            full_panels: self.full_panels,
            full_panels_used_for_cutting: self.cut_panels,
            leftover_panels: self.leftover_panels,
            total_waste,
            optimization_score,
        }
    }

    fn pool(&mut self, width: f64) {
        if width > 0.0 {
            let idx = self.offcuts.partition_point(|&w| w < width);
            self.offcuts.insert(idx, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn empty_ledger_scores_full_marks() {
        let summary = PanelLedger::new().summary();
        assert_eq!(summary.full_panels, 0);
        assert_relative_eq!(summary.total_waste, 0.0);
        assert_relative_eq!(summary.optimization_score, 100.0);
    }

    #[test]
    fn cut_from_fresh_stock_pools_the_rest() {
        let mut ledger = PanelLedger::new();
        assert!(!ledger.record_cut(1100.0, 1200.0));
        assert_eq!(ledger.offcuts(), &[100.0]);
        let summary = ledger.summary();
        assert_eq!(summary.full_panels_used_for_cutting, 1);
        assert_relative_eq!(summary.total_waste, 100.0);
    }

    #[test]
    fn cut_prefers_the_narrowest_fitting_offcut() {
        let mut ledger = PanelLedger::new();
        ledger.record_cut(600.0, 1200.0);
        ledger.record_cut(900.0, 1200.0);
        assert_eq!(ledger.offcuts(), &[300.0, 600.0]);

        assert!(ledger.record_cut(250.0, 1200.0));
        assert_eq!(ledger.offcuts(), &[50.0, 600.0]);
        assert_eq!(ledger.summary().full_panels_used_for_cutting, 2);
    }

    #[test]
    fn exact_fit_consumes_the_offcut() {
        let mut ledger = PanelLedger::new();
        ledger.record_cut(800.0, 1200.0);
        assert!(ledger.record_cut(400.0, 1200.0));
        assert!(ledger.offcuts().is_empty());
        assert_relative_eq!(ledger.summary().total_waste, 0.0);
        assert_relative_eq!(ledger.summary().optimization_score, 100.0);
    }

    #[test]
    fn waste_equals_pooled_offcuts() {
        let mut ledger = PanelLedger::new();
        ledger.record_full(1200.0);
        ledger.record_cut(700.0, 1200.0);
        ledger.record_cut(1000.0, 1200.0);
        let pooled: f64 = ledger.offcuts().iter().sum();
        let summary = ledger.summary();
        assert_relative_eq!(summary.total_waste, pooled);
        assert_relative_eq!(summary.optimization_score, 100.0 * 2900.0 / 3600.0);
    }

    #[test]
    fn merge_is_order_independent() {
        let mut a = PanelLedger::new();
        a.record_full(1200.0);
        a.record_cut(500.0, 1200.0);
        let mut b = PanelLedger::new();
        b.record_cut(1100.0, 1200.0);
        b.record_leftover();

        let mut ab = a.clone();
        ab.merge(&b);
        let mut ba = b.clone();
        ba.merge(&a);
        assert_eq!(ab, ba);
        assert_eq!(ab.summary().full_panels, 1);
        assert_eq!(ab.summary().full_panels_used_for_cutting, 2);
        assert_eq!(ab.summary().leftover_panels, 1);
        assert_eq!(ab.offcuts(), &[100.0, 700.0]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut ledger = PanelLedger::new();
        ledger.record_cut(500.0, 1200.0);
        ledger.reset();
        assert_eq!(ledger, PanelLedger::new());
    }
}
