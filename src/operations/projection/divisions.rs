use crate::math::{Point2, Point3};
use crate::model::{Door, Panel, WallSegment};

/// A vertical panel joint line on a wall face, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivisionLine {
    /// Distance from the (possibly flipped) wall start along the run.
    pub offset: f64,
    pub bottom: Point3,
    pub top: Point3,
    /// The line starts at a door head instead of the floor.
    pub truncated: bool,
}

/// Places the boundaries between consecutive panels on the wall.
///
/// Offsets accumulate panel widths from the wall start, or from the wall end
/// when the wall is mirrored. Lines falling strictly inside a door opening
/// run from the door head to the wall top; all others run floor to top.
///
/// A line inside an opening whose head reaches the wall top has nothing to
/// divide and is left out, so the result can hold fewer than
/// `panels.len() - 1` lines.
pub struct ProjectDivisions<'a> {
    wall: &'a WallSegment,
    panels: &'a [Panel],
    doors: &'a [Door],
    mirrored: bool,
}

impl<'a> ProjectDivisions<'a> {
    /// Creates a new `ProjectDivisions` operation.
    #[must_use]
    pub fn new(
        wall: &'a WallSegment,
        panels: &'a [Panel],
        doors: &'a [Door],
        mirrored: bool,
    ) -> Self {
        Self {
            wall,
            panels,
            doors,
            mirrored,
        }
    }

    /// Executes the projection. Doors on other walls are ignored.
    #[must_use]
    pub fn execute(&self) -> Vec<DivisionLine> {
        let (from, to) = if self.mirrored {
            (self.wall.end, self.wall.start)
        } else {
            (self.wall.start, self.wall.end)
        };
        let run = self.wall.length();
        let cutouts: Vec<(f64, f64, f64)> = self
            .doors
            .iter()
            .filter(|d| d.wall_id == self.wall.id)
            .map(|d| {
                let (start, end) = d.cutout(run, self.mirrored);
                (start, end, d.height)
            })
            .collect();

        let mut lines = Vec::new();
        let mut offset = 0.0;
        for panel in self.panels.iter().take(self.panels.len().saturating_sub(1)) {
            offset += panel.width;
            let at = lerp(&from, &to, (offset / run).clamp(0.0, 1.0));

            let head = cutouts
                .iter()
                .filter(|&&(start, end, _)| start < offset && offset < end)
                .map(|&(_, _, height)| height)
                .reduce(f64::max);

            let (base, truncated) = match head {
                Some(h) if h >= self.wall.height => continue,
                Some(h) => (h, true),
                None => (0.0, false),
            };
            lines.push(DivisionLine {
                offset,
                bottom: Point3::new(at.x, at.y, base),
                top: Point3::new(at.x, at.y, self.wall.height),
                truncated,
            });
        }
        lines
    }
}

fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::model::{PanelKind, PanelPosition, WallId};

    fn wall() -> WallSegment {
        WallSegment::new(WallId(1), Point2::new(0.0, 0.0), Point2::new(4000.0, 0.0))
            .with_height(2700.0)
    }

    fn panels() -> Vec<Panel> {
        vec![
            Panel::new(1100.0, PanelKind::Side, PanelPosition::Left),
            Panel::new(1200.0, PanelKind::Full, PanelPosition::Middle),
            Panel::new(600.0, PanelKind::Leftover, PanelPosition::Middle),
            Panel::new(1100.0, PanelKind::Side, PanelPosition::Right),
        ]
    }

    #[test]
    fn one_line_between_each_pair_of_panels() {
        let lines = ProjectDivisions::new(&wall(), &panels(), &[], false).execute();
        let offsets: Vec<f64> = lines.iter().map(|l| l.offset).collect();
        assert_eq!(offsets, vec![1100.0, 2300.0, 2900.0]);
        assert_relative_eq!(lines[1].bottom, Point3::new(2300.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(lines[1].top, Point3::new(2300.0, 0.0, 2700.0), epsilon = 1e-6);
        assert!(lines.iter().all(|l| !l.truncated));
    }

    #[test]
    fn mirrored_lines_read_from_the_far_end() {
        let lines = ProjectDivisions::new(&wall(), &panels(), &[], true).execute();
        assert_relative_eq!(lines[0].bottom, Point3::new(2900.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(lines[2].bottom, Point3::new(1100.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn lines_inside_a_door_start_at_the_head() {
        // Opening spans 1850..2750 along the run.
        let doors = vec![Door::new(WallId(1), 0.575, 900.0, 2100.0)];
        let lines = ProjectDivisions::new(&wall(), &panels(), &doors, false).execute();
        assert!(!lines[0].truncated);
        assert_relative_eq!(lines[0].bottom.z, 0.0);
        assert!(lines[1].truncated);
        assert_relative_eq!(lines[1].bottom.z, 2100.0);
        assert_relative_eq!(lines[1].top.z, 2700.0);
        assert!(!lines[2].truncated);
    }

    #[test]
    fn lines_on_the_door_jambs_are_not_truncated() {
        // Opening spans exactly 1100..2900.
        let doors = vec![Door::new(WallId(1), 0.5, 1800.0, 2100.0)];
        let lines = ProjectDivisions::new(&wall(), &panels(), &doors, false).execute();
        assert!(!lines[0].truncated);
        assert!(lines[1].truncated);
        assert!(!lines[2].truncated);
    }

    #[test]
    fn mirrored_door_position_is_flipped() {
        // Stored at 0.3: opening 750..1650 from the start, 2350..3250 when mirrored.
        let doors = vec![Door::new(WallId(1), 0.3, 900.0, 2100.0)];
        let plain = ProjectDivisions::new(&wall(), &panels(), &doors, false).execute();
        assert!(plain[0].truncated);
        assert!(!plain[2].truncated);

        let mirrored = ProjectDivisions::new(&wall(), &panels(), &doors, true).execute();
        assert!(!mirrored[0].truncated);
        assert!(mirrored[2].truncated);
        // Both hit the same physical stretch of wall.
        assert_relative_eq!(mirrored[2].bottom, plain[0].bottom, epsilon = 1e-6);
    }

    #[test]
    fn full_height_opening_drops_the_line() {
        let doors = vec![Door::new(WallId(1), 0.575, 900.0, 2700.0)];
        let lines = ProjectDivisions::new(&wall(), &panels(), &doors, false).execute();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn doors_on_other_walls_are_ignored() {
        let doors = vec![Door::new(WallId(2), 0.575, 900.0, 2100.0)];
        let lines = ProjectDivisions::new(&wall(), &panels(), &doors, false).execute();
        assert!(lines.iter().all(|l| !l.truncated));
    }

    #[test]
    fn single_panel_has_no_divisions() {
        let single = vec![Panel::new(4000.0, PanelKind::Leftover, PanelPosition::Middle)];
        assert!(ProjectDivisions::new(&wall(), &single, &[], false).execute().is_empty());
        assert!(ProjectDivisions::new(&wall(), &[], &[], false).execute().is_empty());
    }
}
