use super::*;
use crate::geometry::rectangle_rectangle;
use smallvec::SmallVec;

impl<E: Point2D> PointQuadtree<E> {
    /// Every element inside `rect`, edges included.
    pub fn find_in_rect(&self, rect: &Rectangle) -> Vec<&E> {
        let mut found = Vec::new();
        self.for_each_in_rect(rect, |element| found.push(element));
        found
    }

    pub fn for_each_in_rect<'a, F>(&'a self, rect: &Rectangle, mut f: F)
    where
        F: FnMut(&'a E),
    {
        let mut stack: NodeStack<'a, E> = SmallVec::new();
        stack.push(self);
        while let Some(node) = stack.pop() {
            if !rectangle_rectangle(&node.region, rect) {
                continue;
            }
            if rect.contains_point(node.anchor.x(), node.anchor.y()) {
                f(&node.anchor);
            }
            node.push_children(&mut stack);
        }
    }
}
