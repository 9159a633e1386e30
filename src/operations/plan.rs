use rustc_hash::FxHashSet;

use crate::config::PanelConfig;
use crate::error::{OperationError, Result, TopologyError};
use crate::math::Point2;
use crate::model::{mirror_panels, Door, JointRecord, Panel, WallId, WallSegment};
use crate::topology::{build_footprint, Footprint};

use super::joints::orientation::start_is_left;
use super::joints::{find_wall, ClassifyEnds, EndJoints, ShouldMirror};
use super::panelize::{CalculatePanels, OptimizationSummary, PanelLedger};
use super::projection::{DivisionLine, ProjectDivisions};

/// Panelization result for one wall.
#[derive(Debug, Clone, PartialEq)]
pub struct WallPlan {
    pub wall: WallId,
    pub joints: EndJoints,
    pub mirrored: bool,
    /// Cut list in left-to-right order, already mirrored when `mirrored`.
    pub panels: Vec<Panel>,
    /// Boundaries between `panels`, in the same order, offsets from the left end.
    pub divisions: Vec<DivisionLine>,
}

/// Everything the renderer and the quantity report need for one project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectPlan {
    pub footprint: Footprint,
    pub walls: Vec<WallPlan>,
    pub summary: OptimizationSummary,
}

impl ProjectPlan {
    /// Looks up the plan of one wall.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::WallNotFound` if the wall was not planned.
    pub fn wall(&self, id: WallId) -> Result<&WallPlan> {
        self.walls
            .iter()
            .find(|w| w.wall == id)
            .ok_or_else(|| TopologyError::WallNotFound(id).into())
    }
}

/// Runs the whole engine over a project's walls, joints and doors.
///
/// Walls are processed in ascending id order against one shared ledger, so
/// offcut reuse is reproducible regardless of input order. The footprint
/// centroid serves as the interior reference for mirroring; without a
/// footprint no wall is mirrored.
pub struct PlanProject<'a> {
    walls: &'a [WallSegment],
    joints: &'a [JointRecord],
    doors: &'a [Door],
    config: PanelConfig,
}

impl<'a> PlanProject<'a> {
    /// Creates a new `PlanProject` operation with the default configuration.
    #[must_use]
    pub fn new(walls: &'a [WallSegment], joints: &'a [JointRecord], doors: &'a [Door]) -> Self {
        Self {
            walls,
            joints,
            doors,
            config: PanelConfig::default(),
        }
    }

    /// Overrides the panel configuration.
    #[must_use]
    pub fn with_config(mut self, config: PanelConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration, a wall or a door is invalid,
    /// if two walls share an id, or if a wall is thicker than the stock width.
    pub fn execute(&self) -> Result<ProjectPlan> {
        self.validate()?;

        let footprint = build_footprint(self.walls);
        let interior = footprint.centroid();
        if interior.is_none() {
            tracing::debug!("no footprint, walls will not be mirrored");
        }

        let mut order: Vec<&WallSegment> = self.walls.iter().collect();
        order.sort_by_key(|w| w.id);

        let mut ledger = PanelLedger::new();
        let mut walls = Vec::with_capacity(order.len());
        for wall in order {
            walls.push(self.plan_wall(wall, interior, &mut ledger)?);
        }

        let summary = ledger.summary();
        tracing::debug!(
            walls = walls.len(),
            full = summary.full_panels,
            cut = summary.full_panels_used_for_cutting,
            score = summary.optimization_score,
            "planned project"
        );
        Ok(ProjectPlan {
            footprint,
            walls,
            summary,
        })
    }

    fn plan_wall(
        &self,
        wall: &WallSegment,
        interior: Option<Point2>,
        ledger: &mut PanelLedger,
    ) -> Result<WallPlan> {
        let joints = ClassifyEnds::new(wall, self.joints, self.walls).execute();
        let mirrored = interior
            .is_some_and(|c| ShouldMirror::new(wall, self.joints, self.walls, c).execute());

        let panels = CalculatePanels::new(wall.length(), self.config.stock_width, joints)
            .with_thickness_adjustment(wall.thickness)
            .with_small_width_threshold(self.config.small_width_threshold)
            .with_source_wall(wall.id)
            .execute(ledger)?;

        let panels = if mirrored {
            mirror_panels(&panels)
        } else {
            panels
        };

        // Panels read from the wall's left end, which is its geometric end
        // for walls drawn right to left or top to bottom.
        let from_end = !start_is_left(wall);
        let divisions = ProjectDivisions::new(wall, &panels, self.doors, from_end).execute();

        Ok(WallPlan {
            wall: wall.id,
            joints,
            mirrored,
            panels,
            divisions,
        })
    }

    fn validate(&self) -> Result<()> {
        self.config.validate()?;

        let mut seen = FxHashSet::default();
        for wall in self.walls {
            wall.validate()?;
            if wall.thickness >= self.config.stock_width {
                return Err(OperationError::InvalidInput(format!(
                    "wall {} is {} thick, stock is only {} wide",
                    wall.id, wall.thickness, self.config.stock_width
                ))
                .into());
            }
            if !seen.insert(wall.id) {
                return Err(TopologyError::DuplicateWall(wall.id).into());
            }
        }

        for door in self.doors {
            door.validate()?;
            if find_wall(self.walls, door.wall_id).is_none() {
                tracing::warn!(wall = %door.wall_id, "door references a missing wall, ignoring it");
            }
        }
        Ok(())
    }
}
