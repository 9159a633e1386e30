pub mod joints;
pub mod panelize;
mod plan;
pub mod projection;

pub use joints::{ClassifyEnds, EndJoints, ShouldMirror};
pub use panelize::{CalculatePanels, OptimizationSummary, PanelLedger};
pub use plan::{PlanProject, ProjectPlan, WallPlan};
pub use projection::{DivisionLine, ProjectDivisions};
