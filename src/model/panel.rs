use super::WallId;

/// What a panel is, from a cutting point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    /// Uncut stock panel.
    Full,
    /// Trim panel at a wall end, or a narrow remainder acting as one.
    Side,
    /// Remainder piece narrower than stock.
    Leftover,
}

/// Where a panel sits on its wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelPosition {
    Left,
    Right,
    Middle,
}

impl PanelPosition {
    /// Left becomes right and vice versa.
    #[must_use]
    pub fn swapped(self) -> Self {
        match self {
            PanelPosition::Left => PanelPosition::Right,
            PanelPosition::Right => PanelPosition::Left,
            PanelPosition::Middle => PanelPosition::Middle,
        }
    }
}

/// One panel of a wall's cut list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub width: f64,
    pub kind: PanelKind,
    pub position: PanelPosition,
    pub source_wall: Option<WallId>,
    /// Cut from an offcut left over by an earlier wall rather than fresh stock.
    pub from_offcut: bool,
}

impl Panel {
    /// Creates a panel cut from fresh stock.
    #[must_use]
    pub fn new(width: f64, kind: PanelKind, position: PanelPosition) -> Self {
        Self {
            width,
            kind,
            position,
            source_wall: None,
            from_offcut: false,
        }
    }
}

/// Reverses a cut list and swaps its left/right side panels.
#[must_use]
pub fn mirror_panels(panels: &[Panel]) -> Vec<Panel> {
    panels
        .iter()
        .rev()
        .map(|p| Panel {
            position: p.position.swapped(),
            ..*p
        })
        .collect()
}

/// Sum of panel widths.
#[must_use]
pub fn total_width(panels: &[Panel]) -> f64 {
    panels.iter().map(|p| p.width).sum()
}
