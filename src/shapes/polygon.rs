use super::MassData;
use crate::math::vec2::Vec2;

/// A convex polygon defined by its vertices in local space, ordered counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a new polygon from a vector of vertices.
    ///
    /// Panics if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Vec2>) -> Self {
        if vertices.len() < 3 {
            panic!("Polygon must have at least 3 vertices.");
        }
        Polygon { vertices }
    }

    /// Axis-aligned box of the given half extents centered on the origin.
    pub fn rectangle(half_width: f64, half_height: f64) -> Self {
        Polygon::new(vec![
            Vec2::new(-half_width, -half_height),
            Vec2::new(half_width, -half_height),
            Vec2::new(half_width, half_height),
            Vec2::new(-half_width, half_height),
        ])
    }

    fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Area by the shoelace formula.
    pub fn area(&self) -> f64 {
        (self.edges().map(|(v1, v2)| v1.cross(v2)).sum::<f64>() / 2.0).abs()
    }

    /// Area-weighted centroid. Falls back to the vertex average for degenerate polygons.
    pub fn centroid(&self) -> Vec2 {
        let mut centroid = Vec2::ZERO;
        let mut signed_area = 0.0;
        for (v1, v2) in self.edges() {
            let cross = v1.cross(v2);
            signed_area += cross;
            centroid += (v1 + v2) * cross;
        }

        if signed_area.abs() < 1e-10 {
            let sum = self.vertices.iter().fold(Vec2::ZERO, |acc, v| acc + *v);
            sum / self.vertices.len() as f64
        } else {
            // signed_area holds twice the area, hence 3 * 2A = 6A
            centroid / (3.0 * signed_area)
        }
    }

    /// Moment of inertia at unit density about the local origin.
    fn unit_inertia_about_origin(&self) -> f64 {
        let sum: f64 = self
            .edges()
            .map(|(v1, v2)| {
                v1.cross(v2) * (v1.magnitude_squared() + v1.dot(v2) + v2.magnitude_squared())
            })
            .sum();
        (sum / 12.0).abs()
    }

    /// Mass properties for the given density, with inertia taken about the centroid.
    pub fn mass_data(&self, density: f64) -> MassData {
        let density = density.max(0.0);
        let area = self.area();
        let mass = area * density;
        let centroid = self.centroid();
        // Parallel axis theorem moves the origin inertia to the centroid.
        let inertia = (self.unit_inertia_about_origin() * density
            - mass * centroid.magnitude_squared())
        .max(0.0);

        MassData {
            area,
            mass,
            inertia,
            centroid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    #[test]
    #[should_panic]
    fn test_polygon_new_too_few_vertices() {
        Polygon::new(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
    }

    #[test]
    fn test_polygon_area_triangle() {
        let polygon = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        ]);
        assert!((polygon.area() - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_centroid_triangle() {
        let polygon = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(0.0, 3.0),
        ]);
        let centroid = polygon.centroid();
        assert!((centroid.x - 1.0).abs() < EPSILON);
        assert!((centroid.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rectangle_mass_data() {
        // 2 x 1 box, density 3
        let data = Polygon::rectangle(1.0, 0.5).mass_data(3.0);
        assert!((data.area - 2.0).abs() < EPSILON);
        assert!((data.mass - 6.0).abs() < EPSILON);
        // m (w^2 + h^2) / 12
        assert!((data.inertia - 6.0 * (4.0 + 1.0) / 12.0).abs() < EPSILON);
        assert!(data.centroid.magnitude() < EPSILON);
    }

    #[test]
    fn test_offset_square_inertia_is_about_centroid() {
        let offset = Vec2::new(10.0, -5.0);
        let polygon = Polygon::new(vec![
            offset + Vec2::new(-0.5, -0.5),
            offset + Vec2::new(0.5, -0.5),
            offset + Vec2::new(0.5, 0.5),
            offset + Vec2::new(-0.5, 0.5),
        ]);
        let data = polygon.mass_data(2.0);
        assert!((data.centroid.x - offset.x).abs() < EPSILON);
        assert!((data.centroid.y - offset.y).abs() < EPSILON);
        assert!((data.inertia - 2.0 / 6.0).abs() < EPSILON);
    }
}
