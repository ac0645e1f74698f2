use super::*;
use tracing::{debug, trace};

impl<E: Point2D> PointQuadtree<E> {
    /// Inserts `point` below this node and returns the depth of the new leaf
    /// (this node is depth 0).
    ///
    /// The point descends by quadrant until it reaches an empty child slot.
    /// A point that lies on the split axis of any anchor along the way
    /// (including an exact duplicate of a stored position) has no quadrant:
    /// it is rejected with [`QuadtreeError::OnSplitAxis`] and the tree is
    /// left untouched.
    ///
    /// The point is not checked against this node's region. Callers must
    /// only insert points inside the root region; a point outside it still
    /// gets placed, under a region that does not contain it.
    pub fn insert(&mut self, point: E) -> QuadtreeResult<usize> {
        let (px, py) = (point.x(), point.y());
        let mut node = self;
        let mut depth = 0;
        loop {
            let (ax, ay) = (node.anchor.x(), node.anchor.y());
            let Some(quadrant) = Quadrant::classify_raw(ax, ay, px, py) else {
                debug!(
                    x = px,
                    y = py,
                    anchor_x = ax,
                    anchor_y = ay,
                    depth = depth,
                    "point on split axis, not inserted"
                );
                return Err(QuadtreeError::OnSplitAxis {
                    x: px,
                    y: py,
                    anchor_x: ax,
                    anchor_y: ay,
                });
            };
            depth += 1;
            node = match node.children[quadrant.index()] {
                Some(ref mut child) => &mut **child,
                ref mut slot => {
                    let region = quadrant.sub_region(&node.region, ax, ay);
                    *slot = Some(Box::new(PointQuadtree::new(point, region)));
                    trace!(x = px, y = py, quadrant = quadrant.number(), depth = depth, "placed point");
                    return Ok(depth);
                }
            };
        }
    }
}
