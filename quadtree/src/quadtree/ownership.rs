use super::*;
use std::fmt;

impl<E> Drop for PointQuadtree<E> {
    fn drop(&mut self) {
        // Detach every descendant first so each box is freed with empty slots.
        let mut pending: Vec<Box<PointQuadtree<E>>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl<E: Clone> PointQuadtree<E> {
    fn clone_node(&self) -> Self {
        Self {
            anchor: self.anchor.clone(),
            region: self.region,
            children: [None, None, None, None],
        }
    }
}

impl<E: Clone> Clone for PointQuadtree<E> {
    fn clone(&self) -> Self {
        let mut root = self.clone_node();

        // Pre-order list of descendants as (parent position, child slot, source).
        // A parent always sits before its children; `None` means the root.
        let mut order: Vec<(Option<usize>, usize, &PointQuadtree<E>)> = Vec::new();
        let mut stack: Vec<(Option<usize>, usize, &PointQuadtree<E>)> = Vec::new();
        for (slot, child) in self.children.iter().enumerate() {
            if let Some(child) = child {
                stack.push((None, slot, &**child));
            }
        }
        while let Some(entry) = stack.pop() {
            let position = order.len();
            order.push(entry);
            for (slot, child) in entry.2.children.iter().enumerate() {
                if let Some(child) = child {
                    stack.push((Some(position), slot, &**child));
                }
            }
        }

        let mut copies: Vec<Option<PointQuadtree<E>>> = order
            .iter()
            .map(|(_, _, source)| Some(source.clone_node()))
            .collect();
        // Back to front, so every copy is complete before it is attached.
        for (position, (parent, slot, _)) in order.iter().enumerate().rev() {
            let Some(copy) = copies[position].take() else {
                continue;
            };
            let target = match parent {
                Some(parent) => match copies[*parent].as_mut() {
                    Some(parent) => &mut parent.children[*slot],
                    None => continue,
                },
                None => &mut root.children[*slot],
            };
            *target = Some(Box::new(copy));
        }
        root
    }
}

/// Shows this node only; descendants are listed by quadrant.
impl<E: fmt::Debug> fmt::Debug for PointQuadtree<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quadrants: Vec<Quadrant> = self.children().map(|(quadrant, _)| quadrant).collect();
        f.debug_struct("PointQuadtree")
            .field("anchor", &self.anchor)
            .field("region", &self.region)
            .field("quadrants", &quadrants)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Point;

    /// A tree where every node has a single child in the fourth quadrant.
    fn chain(edges: usize) -> PointQuadtree<Point> {
        let end = edges as f64;
        let mut node = PointQuadtree::new(
            Point::new(end, end),
            Rectangle::new(end - 1.0, end - 1.0, end + 1.0, end + 1.0),
        );
        for i in (0..edges).rev() {
            let at = i as f64;
            let mut parent = PointQuadtree::new(
                Point::new(at, at),
                Rectangle::new(at - 1.0, at - 1.0, end + 1.0, end + 1.0),
            );
            parent.children[Quadrant::Fourth.index()] = Some(Box::new(node));
            node = parent;
        }
        node
    }

    #[test]
    fn deep_chain_clones_and_drops() {
        let tree = chain(100_000);
        assert_eq!(tree.depth(), 100_000);

        let copy = tree.clone();
        assert_eq!(copy.size(), 100_001);
        assert_eq!(copy.depth(), 100_000);
        assert!(copy.iter().eq(tree.iter()));

        drop(tree);
        assert_eq!(copy.iter().last(), Some(&Point::new(100_000.0, 100_000.0)));
        drop(copy);
    }

    #[test]
    fn clone_keeps_shape_and_is_independent() {
        let mut tree = PointQuadtree::new(Point::new(50.0, 50.0), Rectangle::new(0.0, 0.0, 100.0, 100.0));
        for (x, y) in [(70.0, 20.0), (30.0, 30.0), (30.0, 80.0), (80.0, 10.0), (20.0, 40.0)] {
            assert!(tree.insert(Point::new(x, y)).is_ok());
        }

        let mut copy = tree.clone();
        let mut original_regions = Vec::new();
        let mut copied_regions = Vec::new();
        tree.all_regions(&mut original_regions);
        copy.all_regions(&mut copied_regions);
        assert_eq!(original_regions, copied_regions);
        assert!(copy.iter().eq(tree.iter()));

        assert!(copy.insert(Point::new(90.0, 90.0)).is_ok());
        assert_eq!(copy.size(), 7);
        assert_eq!(tree.size(), 6);
        assert!(!tree.has_child(Quadrant::Fourth));
    }

    #[test]
    fn debug_shows_one_node() {
        let tree = chain(100_000);
        let text = format!("{:?}", tree);
        assert!(text.starts_with("PointQuadtree { anchor: Point"));
        assert!(text.contains("quadrants: [Fourth]"));
        assert!(text.len() < 256);
    }
}
