mod calculate;
mod ledger;

pub use calculate::CalculatePanels;
pub use ledger::{OptimizationSummary, PanelLedger};
