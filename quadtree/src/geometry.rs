use crate::shapes::{Circle, Rectangle};

pub fn rectangle_rectangle(a: &Rectangle, b: &Rectangle) -> bool {
    a.intersects(b)
}

#[inline(always)]
pub fn point_circle_raw(px: f64, py: f64, cx: f64, cy: f64, radius: f64) -> bool {
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy <= radius * radius
}

#[inline(always)]
pub fn point_circle(px: f64, py: f64, circle: &Circle) -> bool {
    point_circle_raw(px, py, circle.x, circle.y, circle.radius)
}

/// True when the closed disc touches the closed rectangle anywhere.
#[inline(always)]
pub fn circle_rectangle_raw(cx: f64, cy: f64, radius: f64, rectangle: &Rectangle) -> bool {
    rectangle.distance_sq_to_point(cx, cy) <= radius * radius
}

#[inline(always)]
pub fn circle_rectangle(circle: &Circle, rectangle: &Rectangle) -> bool {
    circle_rectangle_raw(circle.x, circle.y, circle.radius, rectangle)
}
