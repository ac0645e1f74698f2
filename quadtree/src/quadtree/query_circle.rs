use super::*;
use crate::geometry::{circle_rectangle, point_circle};
use crate::shapes::Circle;
use smallvec::SmallVec;
use tracing::trace;

impl<E: Point2D> PointQuadtree<E> {
    /// Every element within or on the circle centered at `(cx, cy)` with
    /// radius `cr`. Order is unspecified. A negative or NaN radius matches
    /// nothing.
    pub fn find_in_circle(&self, cx: f64, cy: f64, cr: f64) -> Vec<&E> {
        let mut stats = QueryStats::default();
        self.find_in_circle_with_stats(cx, cy, cr, &mut stats)
    }

    pub fn find_in_circle_with_stats(
        &self,
        cx: f64,
        cy: f64,
        cr: f64,
        stats: &mut QueryStats,
    ) -> Vec<&E> {
        let mut found = Vec::new();
        let visits_before = stats.node_visits;
        self.query_circle_with(&Circle::new(cx, cy, cr), stats, &mut |element| found.push(element));
        trace!(
            cx = cx,
            cy = cy,
            cr = cr,
            matches = found.len(),
            node_visits = stats.node_visits - visits_before,
            "circle query"
        );
        found
    }

    pub fn for_each_in_circle<'a, F>(&'a self, cx: f64, cy: f64, cr: f64, mut f: F)
    where
        F: FnMut(&'a E),
    {
        let mut stats = QueryStats::default();
        self.query_circle_with(&Circle::new(cx, cy, cr), &mut stats, &mut f);
    }

    /// Like [`find_in_circle`](Self::find_in_circle), but rejects a circle
    /// whose radius is negative or not finite.
    pub fn find_in(&self, circle: &Circle) -> QuadtreeResult<Vec<&E>> {
        validate_radius(circle.radius)?;
        let mut found = Vec::new();
        let mut stats = QueryStats::default();
        self.query_circle_with(circle, &mut stats, &mut |element| found.push(element));
        Ok(found)
    }

    fn query_circle_with<'a, F>(
        &'a self,
        circle: &Circle,
        stats: &mut QueryStats,
        f: &mut F,
    ) where
        F: FnMut(&'a E),
    {
        stats.query_calls += 1;
        if circle.radius.is_nan() || circle.radius < 0.0 {
            return;
        }

        let mut stack: NodeStack<'a, E> = SmallVec::new();
        stack.push(self);
        while let Some(node) = stack.pop() {
            stats.node_visits += 1;
            // A subtree whose region misses the circle holds nothing inside it.
            if !circle_rectangle(circle, &node.region) {
                continue;
            }
            stats.element_tests += 1;
            if point_circle(node.anchor.x(), node.anchor.y(), circle) {
                f(&node.anchor);
            }
            node.push_children(&mut stack);
        }
    }
}
