use crate::shapes::{Point2D, Rectangle};

/// One of the four parts of a node's region around its anchor, numbered
/// 1 to 4 counter-clockwise from the upper right. y grows downward, so
/// "above" means a smaller y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Above and to the right.
    First,
    /// Above and to the left.
    Second,
    /// Below and to the left.
    Third,
    /// Below and to the right.
    Fourth,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::First,
        Quadrant::Second,
        Quadrant::Third,
        Quadrant::Fourth,
    ];

    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Quadrant::First),
            2 => Some(Quadrant::Second),
            3 => Some(Quadrant::Third),
            4 => Some(Quadrant::Fourth),
            _ => None,
        }
    }

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Quadrant of `point` relative to `anchor`, or `None` when the point lies
    /// on either split axis through the anchor.
    pub fn classify<A, P>(anchor: &A, point: &P) -> Option<Self>
    where
        A: Point2D + ?Sized,
        P: Point2D + ?Sized,
    {
        Self::classify_raw(anchor.x(), anchor.y(), point.x(), point.y())
    }

    // Strict comparisons only; NaN coordinates fall through to None.
    #[inline(always)]
    pub(crate) fn classify_raw(ax: f64, ay: f64, px: f64, py: f64) -> Option<Self> {
        if py < ay {
            if px > ax {
                Some(Quadrant::First)
            } else if px < ax {
                Some(Quadrant::Second)
            } else {
                None
            }
        } else if py > ay {
            if px < ax {
                Some(Quadrant::Third)
            } else if px > ax {
                Some(Quadrant::Fourth)
            } else {
                None
            }
        } else {
            None
        }
    }

    /// The part of `region` this quadrant covers once it is split at
    /// `(ax, ay)`.
    #[inline(always)]
    pub fn sub_region(self, region: &Rectangle, ax: f64, ay: f64) -> Rectangle {
        match self {
            Quadrant::First => Rectangle::new(ax, region.y1, region.x2, ay),
            Quadrant::Second => Rectangle::new(region.x1, region.y1, ax, ay),
            Quadrant::Third => Rectangle::new(region.x1, ay, ax, region.y2),
            Quadrant::Fourth => Rectangle::new(ax, ay, region.x2, region.y2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Point;

    #[test]
    fn classify_strict_quadrants() {
        let anchor = Point::new(50.0, 50.0);
        assert_eq!(Quadrant::classify(&anchor, &Point::new(70.0, 20.0)), Some(Quadrant::First));
        assert_eq!(Quadrant::classify(&anchor, &Point::new(30.0, 30.0)), Some(Quadrant::Second));
        assert_eq!(Quadrant::classify(&anchor, &Point::new(30.0, 80.0)), Some(Quadrant::Third));
        assert_eq!(Quadrant::classify(&anchor, &Point::new(70.0, 80.0)), Some(Quadrant::Fourth));
    }

    #[test]
    fn classify_on_axis_is_none() {
        let anchor = Point::new(50.0, 50.0);
        assert_eq!(Quadrant::classify(&anchor, &Point::new(50.0, 20.0)), None);
        assert_eq!(Quadrant::classify(&anchor, &Point::new(20.0, 50.0)), None);
        assert_eq!(Quadrant::classify(&anchor, &Point::new(50.0, 50.0)), None);
        assert_eq!(Quadrant::classify(&anchor, &Point::new(f64::NAN, 20.0)), None);
    }

    #[test]
    fn sub_regions_tile_the_parent() {
        let region = Rectangle::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(
            Quadrant::First.sub_region(&region, 50.0, 40.0),
            Rectangle::new(50.0, 0.0, 100.0, 40.0)
        );
        assert_eq!(
            Quadrant::Second.sub_region(&region, 50.0, 40.0),
            Rectangle::new(0.0, 0.0, 50.0, 40.0)
        );
        assert_eq!(
            Quadrant::Third.sub_region(&region, 50.0, 40.0),
            Rectangle::new(0.0, 40.0, 50.0, 100.0)
        );
        assert_eq!(
            Quadrant::Fourth.sub_region(&region, 50.0, 40.0),
            Rectangle::new(50.0, 40.0, 100.0, 100.0)
        );
        let area: f64 = Quadrant::ALL
            .iter()
            .map(|q| {
                let r = q.sub_region(&region, 50.0, 40.0);
                r.width() * r.height()
            })
            .sum();
        assert_eq!(area, 100.0 * 100.0);
    }

    #[test]
    fn numbering() {
        for (i, quadrant) in Quadrant::ALL.iter().enumerate() {
            assert_eq!(quadrant.number() as usize, i + 1);
            assert_eq!(Quadrant::from_number(quadrant.number()), Some(*quadrant));
        }
        assert_eq!(Quadrant::from_number(0), None);
        assert_eq!(Quadrant::from_number(5), None);
    }
}
