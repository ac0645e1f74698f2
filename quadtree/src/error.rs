use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidRegion {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    InvalidCircleRadius {
        radius: f64,
    },
    AnchorOutOfRegion {
        x: f64,
        y: f64,
    },
    /// The point shares an x or y coordinate with an anchor on its descent
    /// path, so it belongs to no quadrant of that anchor.
    OnSplitAxis {
        x: f64,
        y: f64,
        anchor_x: f64,
        anchor_y: f64,
    },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidRegion { x1, y1, x2, y2 } => {
                write!(
                    f,
                    "region corners must be finite with x1 <= x2 and y1 <= y2 (x1: {}, y1: {}, x2: {}, y2: {})",
                    x1, y1, x2, y2
                )
            }
            QuadtreeError::InvalidCircleRadius { radius } => {
                write!(
                    f,
                    "circle radius must be finite and non-negative (radius: {})",
                    radius
                )
            }
            QuadtreeError::AnchorOutOfRegion { x, y } => {
                write!(f, "anchor must lie within the region (x: {}, y: {})", x, y)
            }
            QuadtreeError::OnSplitAxis {
                x,
                y,
                anchor_x,
                anchor_y,
            } => {
                write!(
                    f,
                    "point lies on a split axis of an existing anchor and belongs to no quadrant (x: {}, y: {}, anchor_x: {}, anchor_y: {})",
                    x, y, anchor_x, anchor_y
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
