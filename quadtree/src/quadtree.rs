mod insert;
mod ownership;
mod quadrant;
mod query_circle;
mod query_rect;
mod traverse;
mod types;

pub use quadrant::Quadrant;
pub use traverse::Iter;
pub use types::{validate_radius, validate_region, QueryStats};

use crate::error::{QuadtreeError, QuadtreeResult};
use crate::shapes::{Point2D, Rectangle};
use types::NodeStack;

/// A point quadtree.
///
/// Every node stores one element (its anchor) and the rectangle that it and
/// all of its descendants are confined to. Children split the parent's region
/// at the anchor, one per quadrant. There is no separate tree type: the root
/// node is the tree, and every subtree is a valid quadtree over its own
/// region.
///
/// `Clone`, `Debug` and `Drop` are written by hand so that none of them
/// recurse; a tree built from sorted input is as deep as it is large.
pub struct PointQuadtree<E> {
    anchor: E,
    region: Rectangle,
    children: [Option<Box<PointQuadtree<E>>>; 4],
}

impl<E: Point2D> PointQuadtree<E> {
    /// Creates a leaf holding `anchor` in `region`. Nothing is checked; the
    /// caller guarantees the anchor lies inside the region.
    pub fn new(anchor: E, region: Rectangle) -> Self {
        Self {
            anchor,
            region,
            children: [None, None, None, None],
        }
    }

    /// Creates a root leaf after validating the region and that the anchor
    /// lies inside it.
    pub fn with_bounds(anchor: E, x1: f64, y1: f64, x2: f64, y2: f64) -> QuadtreeResult<Self> {
        let region = Rectangle::new(x1, y1, x2, y2);
        validate_region(&region)?;
        let (x, y) = (anchor.x(), anchor.y());
        if !region.contains_point(x, y) {
            return Err(QuadtreeError::AnchorOutOfRegion { x, y });
        }
        Ok(Self::new(anchor, region))
    }
}

impl<E> PointQuadtree<E> {
    pub fn anchor(&self) -> &E {
        &self.anchor
    }

    pub fn region(&self) -> &Rectangle {
        &self.region
    }

    pub fn x1(&self) -> f64 {
        self.region.x1
    }

    pub fn y1(&self) -> f64 {
        self.region.y1
    }

    pub fn x2(&self) -> f64 {
        self.region.x2
    }

    pub fn y2(&self) -> f64 {
        self.region.y2
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<&PointQuadtree<E>> {
        self.children[quadrant.index()].as_deref()
    }

    pub fn has_child(&self, quadrant: Quadrant) -> bool {
        self.children[quadrant.index()].is_some()
    }

    /// Present children paired with their quadrant, in quadrant order.
    pub fn children(&self) -> impl Iterator<Item = (Quadrant, &PointQuadtree<E>)> + '_ {
        Quadrant::ALL
            .into_iter()
            .filter_map(move |quadrant| self.child(quadrant).map(|child| (quadrant, child)))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Pushes present children so that popping yields them in quadrant order.
    #[inline(always)]
    fn push_children<'a>(&'a self, stack: &mut NodeStack<'a, E>) {
        for child in self.children.iter().rev().flatten() {
            stack.push(&**child);
        }
    }
}
