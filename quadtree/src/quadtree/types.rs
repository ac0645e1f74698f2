use super::PointQuadtree;
use crate::error::{QuadtreeError, QuadtreeResult};
use crate::shapes::Rectangle;
use smallvec::SmallVec;

pub(crate) const QUERY_STACK_INLINE: usize = 32;

pub(crate) type NodeStack<'a, E> = SmallVec<[&'a PointQuadtree<E>; QUERY_STACK_INLINE]>;

/// Work counters accumulated by the `*_with_stats` queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryStats {
    pub query_calls: u64,
    /// Nodes whose region was tested against the query shape.
    pub node_visits: u64,
    /// Anchors tested against the query shape.
    pub element_tests: u64,
}

pub fn validate_region(region: &Rectangle) -> QuadtreeResult<()> {
    let finite = region.x1.is_finite()
        && region.y1.is_finite()
        && region.x2.is_finite()
        && region.y2.is_finite();
    if !finite || region.x1 > region.x2 || region.y1 > region.y2 {
        return Err(QuadtreeError::InvalidRegion {
            x1: region.x1,
            y1: region.y1,
            x2: region.x2,
            y2: region.y2,
        });
    }
    Ok(())
}

pub fn validate_radius(radius: f64) -> QuadtreeResult<()> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(QuadtreeError::InvalidCircleRadius { radius });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_validation() {
        assert!(validate_region(&Rectangle::new(0.0, 0.0, 10.0, 10.0)).is_ok());
        assert!(validate_region(&Rectangle::new(5.0, 5.0, 5.0, 5.0)).is_ok());
        assert_eq!(
            validate_region(&Rectangle::new(10.0, 0.0, 0.0, 10.0)),
            Err(QuadtreeError::InvalidRegion {
                x1: 10.0,
                y1: 0.0,
                x2: 0.0,
                y2: 10.0
            })
        );
        assert!(validate_region(&Rectangle::new(0.0, 0.0, f64::INFINITY, 10.0)).is_err());
        assert!(validate_region(&Rectangle::new(0.0, f64::NAN, 10.0, 10.0)).is_err());
    }

    #[test]
    fn radius_validation() {
        assert!(validate_radius(0.0).is_ok());
        assert!(validate_radius(3.5).is_ok());
        assert_eq!(
            validate_radius(-1.0),
            Err(QuadtreeError::InvalidCircleRadius { radius: -1.0 })
        );
        assert!(validate_radius(f64::NAN).is_err());
    }
}
