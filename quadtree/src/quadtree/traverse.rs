use super::*;
use super::types::QUERY_STACK_INLINE;
use smallvec::{smallvec, SmallVec};

/// Pre-order iterator over every anchor in a subtree.
pub struct Iter<'a, E> {
    stack: NodeStack<'a, E>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        let node = self.stack.pop()?;
        node.push_children(&mut self.stack);
        Some(&node.anchor)
    }
}

impl<'a, E> IntoIterator for &'a PointQuadtree<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Iter<'a, E> {
        self.iter()
    }
}

impl<E> PointQuadtree<E> {
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            stack: smallvec![self],
        }
    }

    /// Number of nodes in the subtree, this one included.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack: NodeStack<'_, E> = smallvec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            node.push_children(&mut stack);
        }
        count
    }

    /// Edges on the longest path down to a leaf; 0 for a lone leaf.
    pub fn depth(&self) -> usize {
        let mut deepest: usize = 0;
        let mut stack: SmallVec<[(&PointQuadtree<E>, usize); QUERY_STACK_INLINE]> =
            smallvec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in node.children.iter().flatten() {
                stack.push((&**child, depth + 1));
            }
        }
        deepest
    }

    /// Every anchor in the subtree, internal nodes included, so the length
    /// always equals [`size`](Self::size).
    pub fn all_points(&self) -> Vec<&E> {
        self.iter().collect()
    }

    /// Anchors of the childless nodes only.
    pub fn leaf_points(&self) -> Vec<&E> {
        let mut leaves = Vec::new();
        let mut stack: NodeStack<'_, E> = smallvec![self];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                leaves.push(&node.anchor);
            } else {
                node.push_children(&mut stack);
            }
        }
        leaves
    }

    pub fn all_regions(&self, regions: &mut Vec<Rectangle>) {
        let mut stack: NodeStack<'_, E> = smallvec![self];
        while let Some(node) = stack.pop() {
            regions.push(node.region);
            node.push_children(&mut stack);
        }
    }
}
