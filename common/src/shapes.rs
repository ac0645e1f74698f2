use rand::Rng;

/// Anything that sits at a single position in the plane.
///
/// The index only ever reads coordinates through this trait, so callers can
/// attach whatever payload they like to a position.
pub trait Point2D {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl<T: Point2D + ?Sized> Point2D for &T {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl Point2D for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Point2D for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }

    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Point2D for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Closed disc test: points on the circumference count as inside.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            radius: 0.0,
        }
    }
}

/// Axis-aligned rectangle stored by its corners, `(x1, y1)` upper-left and
/// `(x2, y2)` bottom-right. y grows downward.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rectangle {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rectangle {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn top_left(&self) -> (f64, f64) {
        (self.x1, self.y1)
    }

    pub fn top_right(&self) -> (f64, f64) {
        (self.x2, self.y1)
    }

    pub fn bottom_left(&self) -> (f64, f64) {
        (self.x1, self.y2)
    }

    pub fn bottom_right(&self) -> (f64, f64) {
        (self.x2, self.y2)
    }

    /// Squared distance from `(x, y)` to the nearest point of the rectangle,
    /// zero when the point is inside.
    pub fn distance_sq_to_point(&self, x: f64, y: f64) -> f64 {
        let dx = f64::max(f64::max(self.x1 - x, 0.0), x - self.x2);
        let dy = f64::max(f64::max(self.y1 - y, 0.0), y - self.y2);
        dx * dx + dy * dy
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    pub fn contains_rectangle(&self, other: &Rectangle) -> bool {
        self.x1 <= other.x1 && self.x2 >= other.x2 && self.y1 <= other.y1 && self.y2 >= other.y2
    }

    /// Overlap test with closed edges, so rectangles sharing a side intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    pub fn get_random_point_inside<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            self._safe_randf64(rng, self.x1, self.x2),
            self._safe_randf64(rng, self.y1, self.y2),
        )
    }

    pub fn get_random_circle_inside<R: Rng>(&self, max_radius: f64, rng: &mut R) -> Circle {
        let center = self.get_random_point_inside(rng);
        let radius = self._safe_randf64(rng, 0.0, max_radius);
        Circle::new(center.x, center.y, radius)
    }

    fn _safe_randf64<R: Rng>(&self, rng: &mut R, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}
