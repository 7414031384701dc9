use thiserror::Error;

use crate::core::data::vertex::Vertex;

/// Relative tolerance used by [`Triangle::contains`] so that points lying
/// on an edge are not rejected because of rounding.
const CONTAINMENT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("triangle vertices must be finite")]
    NonFinite,

    #[error("triangle vertices are collinear: {top:?}, {bottom_left:?}, {bottom_right:?}")]
    Degenerate {
        top: Vertex,
        bottom_left: Vertex,
        bottom_right: Vertex,
    },
}

/// The fixed target shape of a chaos-game run.
///
/// Vertices are kept in the order top, bottom-left, bottom-right. A
/// `Triangle` can only be built from non-collinear, finite vertices.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    top: Vertex,
    bottom_left: Vertex,
    bottom_right: Vertex,
}

impl Triangle {
    pub fn new(
        top: Vertex,
        bottom_left: Vertex,
        bottom_right: Vertex,
    ) -> Result<Self, GeometryError> {
        if !(top.is_finite() && bottom_left.is_finite() && bottom_right.is_finite()) {
            return Err(GeometryError::NonFinite);
        }

        if Self::is_collinear(top, bottom_left, bottom_right) {
            return Err(GeometryError::Degenerate {
                top,
                bottom_left,
                bottom_right,
            });
        }

        Ok(Self {
            top,
            bottom_left,
            bottom_right,
        })
    }

    /// The triangle of a 700x700 canvas: apex at (350, 50), base from
    /// (50, 650) to (650, 650).
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            top: Vertex::new(350.0, 50.0),
            bottom_left: Vertex::new(50.0, 650.0),
            bottom_right: Vertex::new(650.0, 650.0),
        }
    }

    #[must_use]
    pub fn top(&self) -> Vertex {
        self.top
    }

    #[must_use]
    pub fn bottom_left(&self) -> Vertex {
        self.bottom_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Vertex {
        self.bottom_right
    }

    #[must_use]
    pub fn vertices(&self) -> [Vertex; 3] {
        [self.top, self.bottom_left, self.bottom_right]
    }

    /// Twice the signed area; positive when the vertices wind counter-clockwise.
    #[must_use]
    pub fn signed_double_area(&self) -> f64 {
        (self.bottom_left.x - self.top.x) * (self.bottom_right.y - self.top.y)
            - (self.bottom_right.x - self.top.x) * (self.bottom_left.y - self.top.y)
    }

    /// Barycentric weights of `point` relative to top, bottom-left and
    /// bottom-right. The weights always sum to one.
    #[must_use]
    pub fn barycentric(&self, point: Vertex) -> (f64, f64, f64) {
        let (a, b, c) = (self.top, self.bottom_left, self.bottom_right);
        let denominator = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);

        let u = ((b.y - c.y) * (point.x - c.x) + (c.x - b.x) * (point.y - c.y)) / denominator;
        let v = ((c.y - a.y) * (point.x - c.x) + (a.x - c.x) * (point.y - c.y)) / denominator;

        (u, v, 1.0 - u - v)
    }

    /// True when `point` is inside the triangle or on its boundary.
    #[must_use]
    pub fn contains(&self, point: Vertex) -> bool {
        let (u, v, w) = self.barycentric(point);

        u >= -CONTAINMENT_TOLERANCE && v >= -CONTAINMENT_TOLERANCE && w >= -CONTAINMENT_TOLERANCE
    }

    /// Cross product of the two edges leaving `top`, taken on halved and
    /// rescaled edges so that coordinates near `f64::MAX` cannot overflow.
    fn is_collinear(top: Vertex, bottom_left: Vertex, bottom_right: Vertex) -> bool {
        let half_edge = |to: Vertex| (to.x * 0.5 - top.x * 0.5, to.y * 0.5 - top.y * 0.5);
        let (ax, ay) = half_edge(bottom_left);
        let (bx, by) = half_edge(bottom_right);

        let scale = ax.abs().max(ay.abs()).max(bx.abs()).max(by.abs());
        if scale == 0.0 {
            return true;
        }

        let (ax, ay, bx, by) = (ax / scale, ay / scale, bx / scale, by / scale);
        let cross = ax * by - bx * ay;

        !cross.is_finite() || cross.abs() <= f64::EPSILON * ax.hypot(ay) * bx.hypot(by)
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_triangle_vertices() {
        let triangle = Triangle::reference();

        assert_eq!(
            triangle.vertices(),
            [
                Vertex::new(350.0, 50.0),
                Vertex::new(50.0, 650.0),
                Vertex::new(650.0, 650.0),
            ]
        );
    }

    #[test]
    fn test_new_accepts_reference_vertices() {
        let reference = Triangle::reference();
        let triangle = Triangle::new(
            reference.top(),
            reference.bottom_left(),
            reference.bottom_right(),
        );

        assert_eq!(triangle, Ok(reference));
    }

    #[test]
    fn test_new_rejects_collinear_vertices() {
        let result = Triangle::new(
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 1.0),
            Vertex::new(2.0, 2.0),
        );

        assert!(matches!(result, Err(GeometryError::Degenerate { .. })));
    }

    #[test]
    fn test_new_rejects_repeated_vertex() {
        let result = Triangle::new(
            Vertex::new(5.0, 5.0),
            Vertex::new(5.0, 5.0),
            Vertex::new(10.0, 0.0),
        );

        assert!(matches!(result, Err(GeometryError::Degenerate { .. })));
    }

    #[test]
    fn test_new_rejects_non_finite_vertices() {
        let result = Triangle::new(
            Vertex::new(f64::NAN, 0.0),
            Vertex::new(1.0, 1.0),
            Vertex::new(2.0, 0.0),
        );

        assert_eq!(result, Err(GeometryError::NonFinite));
    }

    #[test]
    fn test_barycentric_weights_of_vertices() {
        let triangle = Triangle::reference();

        assert_eq!(triangle.barycentric(triangle.top()), (1.0, 0.0, 0.0));
        assert_eq!(triangle.barycentric(triangle.bottom_left()), (0.0, 1.0, 0.0));
        assert_eq!(triangle.barycentric(triangle.bottom_right()), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_contains_interior_and_boundary_points() {
        let triangle = Triangle::reference();

        assert!(triangle.contains(Vertex::new(350.0, 450.0)));
        assert!(triangle.contains(Vertex::new(350.0, 650.0)));
        assert!(triangle.contains(triangle.top()));
        assert!(triangle.contains(triangle.top().midpoint(triangle.bottom_right())));
    }

    #[test]
    fn test_contains_rejects_outside_points() {
        let triangle = Triangle::reference();

        assert!(!triangle.contains(Vertex::new(0.0, 0.0)));
        assert!(!triangle.contains(Vertex::new(350.0, 651.0)));
        assert!(!triangle.contains(Vertex::new(100.0, 100.0)));
    }

    #[test]
    fn test_huge_collinear_vertices_are_degenerate() {
        let result = Triangle::new(
            Vertex::new(0.0, 0.0),
            Vertex::new(1e200, 1e200),
            Vertex::new(2e200, 2e200),
        );

        assert!(matches!(result, Err(GeometryError::Degenerate { .. })));
    }

    #[test]
    fn test_collinear_vertices_spanning_f64_range_are_degenerate() {
        let result = Triangle::new(
            Vertex::new(-f64::MAX, -f64::MAX),
            Vertex::new(0.0, 0.0),
            Vertex::new(f64::MAX, f64::MAX),
        );

        assert!(matches!(result, Err(GeometryError::Degenerate { .. })));
    }

    #[test]
    fn test_huge_proper_triangle_is_accepted() {
        let result = Triangle::new(
            Vertex::new(0.0, 1e300),
            Vertex::new(-1e300, -1e300),
            Vertex::new(1e300, -1e300),
        );

        assert!(result.is_ok());
    }

    #[test]
    fn test_coincident_vertices_are_degenerate() {
        let point = Vertex::new(3.0, 4.0);

        assert!(matches!(
            Triangle::new(point, point, point),
            Err(GeometryError::Degenerate { .. })
        ));
    }

    #[test]
    fn test_degenerate_error_message_lists_vertices() {
        let error = Triangle::new(
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.0),
            Vertex::new(2.0, 0.0),
        )
        .unwrap_err();

        assert_eq!(
            error.to_string(),
            "triangle vertices are collinear: Vertex { x: 0.0, y: 0.0 }, \
             Vertex { x: 1.0, y: 0.0 }, Vertex { x: 2.0, y: 0.0 }"
        );
    }
}
