//! Plane geometry primitives for card footprints and bowl landmarks.
//!
//! Screen coordinates: x grows to the right, y grows downward. Angles are in
//! degrees and rotate with the usual `(x cos - y sin, x sin + y cos)` matrix.

use serde::{Deserialize, Serialize};

/// Determinant magnitude below which two segments are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-4;

/// A point in bowl coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate, growing rightward.
    pub x: f64,
    /// Vertical coordinate, growing downward.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        distance(self, other)
    }
}

/// A closed line segment from `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point.
    pub a: Point,
    /// End point.
    pub b: Point,
}

impl Segment {
    /// Create a segment from `a` to `b`.
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Squared length of the segment.
    pub fn length_squared(&self) -> f64 {
        let dx = self.b.x - self.a.x;
        let dy = self.b.y - self.a.y;
        dx * dx + dy * dy
    }
}

/// A disc given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center of the disc.
    pub center: Point,
    /// Radius of the disc.
    pub radius: f64,
}

impl Circle {
    /// Create a disc.
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Euclidean distance between two points.
pub fn distance(p: Point, q: Point) -> f64 {
    (q.x - p.x).hypot(q.y - p.y)
}

/// Corners of a `w` x `h` rectangle centered at `center`, rotated by
/// `angle_deg`.
///
/// Winding order starts at the local `(-w/2, -h/2)` corner and proceeds
/// through `(w/2, -h/2)`, `(w/2, h/2)`, `(-w/2, h/2)`.
pub fn rotated_corners(center: Point, w: f64, h: f64, angle_deg: f64) -> [Point; 4] {
    const SIGNS: [(f64, f64); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let hw = w / 2.0;
    let hh = h / 2.0;
    SIGNS.map(|(sx, sy)| {
        let lx = sx * hw;
        let ly = sy * hh;
        Point::new(center.x + lx * cos - ly * sin, center.y + lx * sin + ly * cos)
    })
}

/// The point `reach` units from `center` in the direction of `angle_deg`.
///
/// Uses `(sin, cos)` so that angle 0 points along +y, matching the leaf
/// artwork orientation.
pub fn tip_point(center: Point, reach: f64, angle_deg: f64) -> Point {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Point::new(center.x + reach * sin, center.y + reach * cos)
}

/// Even-odd ray casting. Points exactly on an edge may land on either side.
pub fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };
    let mut inside = false;
    let mut pj = last;
    for &pi in polygon {
        if (pi.y > p.y) != (pj.y > p.y) && p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        pj = pi;
    }
    inside
}

/// Iterate over the closed edges of a polygon.
fn edges(polygon: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| Segment::new(polygon[i], polygon[(i + 1) % n]))
}

/// Parametric segment intersection, endpoints inclusive.
pub fn segments_intersect(s: Segment, t: Segment) -> bool {
    let (x1, y1, x2, y2) = (s.a.x, s.a.y, s.b.x, s.b.y);
    let (x3, y3, x4, y4) = (t.a.x, t.a.y, t.b.x, t.b.y);

    let d = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if d.abs() < PARALLEL_EPSILON {
        return false;
    }

    let u = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / d;
    let v = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / d;

    (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v)
}

/// True if the segment crosses the circle boundary.
///
/// A segment lying strictly inside the disc never crosses the boundary and
/// reports `false`, and so does a zero-length segment.
pub fn segment_intersects_circle(seg: Segment, circle: Circle) -> bool {
    let dx = seg.b.x - seg.a.x;
    let dy = seg.b.y - seg.a.y;
    let fx = seg.a.x - circle.center.x;
    let fy = seg.a.y - circle.center.y;

    let a = dx * dx + dy * dy;
    if a == 0.0 {
        return false;
    }
    let b = 2.0 * (fx * dx + fy * dy);
    let c = fx * fx + fy * fy - circle.radius * circle.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return false;
    }

    let root = discriminant.sqrt();
    let t1 = (-b - root) / (2.0 * a);
    let t2 = (-b + root) / (2.0 * a);
    (0.0..=1.0).contains(&t1) || (0.0..=1.0).contains(&t2)
}

/// True if the circle's center lies in the polygon or any edge meets the
/// circle boundary.
pub fn polygon_intersects_circle(polygon: &[Point], circle: Circle) -> bool {
    point_in_polygon(circle.center, polygon)
        || edges(polygon).any(|edge| segment_intersects_circle(edge, circle))
}

/// True if the segment crosses any polygon edge or starts/ends inside it.
pub fn segment_intersects_polygon(seg: Segment, polygon: &[Point]) -> bool {
    edges(polygon).any(|edge| segments_intersect(seg, edge))
        || point_in_polygon(seg.a, polygon)
        || point_in_polygon(seg.b, polygon)
}

/// True if `p` is strictly closer than `threshold` to the segment.
pub fn point_near_segment(p: Point, seg: Segment, threshold: f64) -> bool {
    let len_sq = seg.length_squared();
    if len_sq == 0.0 {
        return p.distance(seg.a) < threshold;
    }
    let dx = seg.b.x - seg.a.x;
    let dy = seg.b.y - seg.a.y;
    let t = (((p.x - seg.a.x) * dx + (p.y - seg.a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let nearest = Point::new(seg.a.x + t * dx, seg.a.y + t * dy);
    p.distance(nearest) < threshold
}

/// True if `p` is strictly closer than `threshold` to `center`.
pub fn point_near_circle(p: Point, center: Point, threshold: f64) -> bool {
    p.distance(center) < threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn approx(p: Point, q: Point) -> bool {
        (p.x - q.x).abs() < EPS && (p.y - q.y).abs() < EPS
    }

    fn unit_square() -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn corners_at_zero_angle_are_axis_aligned() {
        let c = rotated_corners(Point::new(100.0, 50.0), 40.0, 30.0, 0.0);
        assert!(approx(c[0], Point::new(80.0, 35.0)));
        assert!(approx(c[1], Point::new(120.0, 35.0)));
        assert!(approx(c[2], Point::new(120.0, 65.0)));
        assert!(approx(c[3], Point::new(80.0, 65.0)));
    }

    #[test]
    fn corners_at_quarter_turn_swap_extents() {
        let c = rotated_corners(Point::new(0.0, 0.0), 40.0, 30.0, 90.0);
        // (-20, -15) rotated by 90 degrees lands on (15, -20).
        assert!(approx(c[0], Point::new(15.0, -20.0)));
        let xs: Vec<f64> = c.iter().map(|p| p.x.abs()).collect();
        assert!(xs.iter().all(|x| (x - 15.0).abs() < EPS));
    }

    #[test]
    fn tip_at_zero_angle_points_down_screen() {
        let tip = tip_point(Point::new(10.0, 10.0), 30.0, 0.0);
        assert!(approx(tip, Point::new(10.0, 40.0)));
        let tip = tip_point(Point::new(10.0, 10.0), 30.0, 90.0);
        assert!(approx(tip, Point::new(40.0, 10.0)));
    }

    #[test]
    fn point_in_polygon_basic() {
        let sq = unit_square();
        assert!(point_in_polygon(Point::new(0.5, 0.5), &sq));
        assert!(!point_in_polygon(Point::new(1.5, 0.5), &sq));
        assert!(!point_in_polygon(Point::new(0.5, -0.1), &sq));
        assert!(!point_in_polygon(Point::new(0.5, 0.5), &[]));
    }

    #[test]
    fn crossing_segments_intersect() {
        let s = Segment::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
        let t = Segment::new(Point::new(0.0, 2.0), Point::new(2.0, 0.0));
        assert!(segments_intersect(s, t));
    }

    #[test]
    fn touching_endpoints_intersect() {
        let s = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let t = Segment::new(Point::new(1.0, 0.0), Point::new(1.0, 1.0));
        assert!(segments_intersect(s, t));
    }

    #[test]
    fn parallel_segments_never_intersect() {
        let s = Segment::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0));
        let t = Segment::new(Point::new(1.0, 0.0), Point::new(3.0, 0.0));
        assert!(!segments_intersect(s, t));
    }

    #[test]
    fn disjoint_segments_do_not_intersect() {
        let s = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let t = Segment::new(Point::new(3.0, 0.0), Point::new(2.0, 5.0));
        assert!(!segments_intersect(s, t));
    }

    #[test]
    fn segment_through_circle() {
        let circle = Circle::new(Point::new(0.0, 0.0), 1.0);
        let seg = Segment::new(Point::new(-2.0, 0.0), Point::new(2.0, 0.0));
        assert!(segment_intersects_circle(seg, circle));
        let miss = Segment::new(Point::new(-2.0, 2.0), Point::new(2.0, 2.0));
        assert!(!segment_intersects_circle(miss, circle));
    }

    #[test]
    fn segment_inside_circle_does_not_cross_boundary() {
        let circle = Circle::new(Point::new(0.0, 0.0), 10.0);
        let seg = Segment::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0));
        assert!(!segment_intersects_circle(seg, circle));
    }

    #[test]
    fn degenerate_segment_never_crosses_circle() {
        let circle = Circle::new(Point::new(0.0, 0.0), 1.0);
        let inside = Segment::new(Point::new(0.5, 0.0), Point::new(0.5, 0.0));
        assert!(!segment_intersects_circle(inside, circle));
        let on_rim = Segment::new(Point::new(1.0, 0.0), Point::new(1.0, 0.0));
        assert!(!segment_intersects_circle(on_rim, circle));
        let far = Segment::new(Point::new(5.0, 0.0), Point::new(5.0, 0.0));
        assert!(!segment_intersects_circle(far, circle));
    }

    #[test]
    fn polygon_contains_circle_center() {
        let big = [
            Point::new(-10.0, -10.0),
            Point::new(10.0, -10.0),
            Point::new(10.0, 10.0),
            Point::new(-10.0, 10.0),
        ];
        assert!(polygon_intersects_circle(&big, Circle::new(Point::new(0.0, 0.0), 1.0)));
        assert!(polygon_intersects_circle(&big, Circle::new(Point::new(11.0, 0.0), 2.0)));
        assert!(!polygon_intersects_circle(&big, Circle::new(Point::new(20.0, 0.0), 2.0)));
    }

    #[test]
    fn segment_inside_polygon_counts() {
        let sq = unit_square();
        let inner = Segment::new(Point::new(0.2, 0.2), Point::new(0.8, 0.8));
        assert!(segment_intersects_polygon(inner, &sq));
        let outer = Segment::new(Point::new(2.0, 2.0), Point::new(3.0, 3.0));
        assert!(!segment_intersects_polygon(outer, &sq));
    }

    #[test]
    fn near_segment_clamps_to_endpoints() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!(point_near_segment(Point::new(5.0, 3.0), seg, 4.0));
        assert!(!point_near_segment(Point::new(5.0, 4.0), seg, 4.0));
        assert!(point_near_segment(Point::new(12.0, 0.0), seg, 2.5));
        assert!(!point_near_segment(Point::new(13.0, 0.0), seg, 2.5));
    }

    #[test]
    fn near_zero_length_segment_uses_endpoint() {
        let seg = Segment::new(Point::new(1.0, 1.0), Point::new(1.0, 1.0));
        assert!(point_near_segment(Point::new(1.0, 2.0), seg, 1.5));
        assert!(!point_near_segment(Point::new(1.0, 3.0), seg, 1.5));
    }

    #[test]
    fn near_circle_is_strict() {
        let c = Point::new(0.0, 0.0);
        assert!(point_near_circle(Point::new(2.9, 0.0), c, 3.0));
        assert!(!point_near_circle(Point::new(3.0, 0.0), c, 3.0));
    }

    #[test]
    fn point_distance_is_symmetric() {
        let p = Point::new(1.0, 2.0);
        let q = Point::new(4.0, 6.0);
        assert_eq!(p.distance(q), 5.0);
        assert_eq!(q.distance(p), distance(p, q));
    }

    proptest! {
        #[test]
        fn rotation_is_periodic(
            x in -500.0f64..500.0,
            y in -500.0f64..500.0,
            angle in 0.0f64..360.0,
        ) {
            let center = Point::new(x, y);
            let a = rotated_corners(center, 40.0, 30.0, angle);
            let b = rotated_corners(center, 40.0, 30.0, angle + 360.0);
            for (p, q) in a.iter().zip(b.iter()) {
                prop_assert!((p.x - q.x).abs() < 1e-6);
                prop_assert!((p.y - q.y).abs() < 1e-6);
            }
        }

        #[test]
        fn center_inside_rotated_footprint(
            x in -500.0f64..500.0,
            y in -500.0f64..500.0,
            angle in 0.0f64..360.0,
        ) {
            let center = Point::new(x, y);
            let corners = rotated_corners(center, 40.0, 30.0, angle);
            prop_assert!(point_in_polygon(center, &corners));
        }

        #[test]
        fn tip_is_at_reach_distance(angle in 0.0f64..360.0, reach in 1.0f64..100.0) {
            let center = Point::new(3.0, -7.0);
            let tip = tip_point(center, reach, angle);
            prop_assert!((distance(center, tip) - reach).abs() < 1e-9);
        }
    }
}
