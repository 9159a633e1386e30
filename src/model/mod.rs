//! Records exchanged with the project data store and the renderer.

mod door;
mod joint;
mod panel;
mod wall;

pub use door::Door;
pub use joint::{JointMethod, JointRecord};
pub use panel::{mirror_panels, total_width, Panel, PanelKind, PanelPosition};
pub use wall::{WallId, WallSegment, DEFAULT_WALL_HEIGHT, DEFAULT_WALL_THICKNESS};
