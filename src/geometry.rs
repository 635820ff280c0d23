use crate::render::mesh::Vertex;
use glam::Vec3;

/// The bootstrap's demo mesh: an equilateral triangle with a triangular
/// hole, built from the outer corners plus the three edge midpoints.
pub fn triforce() -> (Vec<Vertex>, Vec<u32>) {
    let s3 = 3.0_f32.sqrt();

    let vertices = vec![
        Vertex::new(Vec3::new(-0.5, -0.5 * s3 / 3.0, 0.0)), // lower left corner
        Vertex::new(Vec3::new(0.5, -0.5 * s3 / 3.0, 0.0)),  // lower right corner
        Vertex::new(Vec3::new(0.0, 0.5 * s3 * 2.0 / 3.0, 0.0)), // top corner
        Vertex::new(Vec3::new(-0.25, 0.5 * s3 / 6.0, 0.0)), // left midpoint
        Vertex::new(Vec3::new(0.25, 0.5 * s3 / 6.0, 0.0)),  // right midpoint
        Vertex::new(Vec3::new(0.0, -0.5 * s3 / 3.0, 0.0)),  // bottom midpoint
    ];

    let indices = vec![
        0, 3, 5, // lower left triangle
        3, 2, 4, // upper triangle
        5, 4, 1, // lower right triangle
    ];

    (vertices, indices)
}

/// A single centered triangle, covering the middle of clip space.
pub fn triangle() -> (Vec<Vertex>, Vec<u32>) {
    let vertices = vec![
        Vertex::new(Vec3::new(-0.5, -0.5, 0.0)),
        Vertex::new(Vec3::new(0.5, -0.5, 0.0)),
        Vertex::new(Vec3::new(0.0, 0.5, 0.0)),
    ];

    (vertices, vec![0, 1, 2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_stay_in_bounds() {
        for (vertices, indices) in [triforce(), triangle()] {
            assert_eq!(indices.len() % 3, 0);
            for &index in &indices {
                assert!((index as usize) < vertices.len());
            }
        }
    }

    #[test]
    fn test_triforce_inner_vertices_are_edge_midpoints() {
        let (vertices, _) = triforce();

        let midpoint = |a: usize, b: usize| {
            [
                (vertices[a].position[0] + vertices[b].position[0]) / 2.0,
                (vertices[a].position[1] + vertices[b].position[1]) / 2.0,
                (vertices[a].position[2] + vertices[b].position[2]) / 2.0,
            ]
        };
        let close = |a: [f32; 3], b: [f32; 3]| {
            a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-6)
        };

        assert!(close(vertices[3].position, midpoint(0, 2)));
        assert!(close(vertices[4].position, midpoint(1, 2)));
        assert!(close(vertices[5].position, midpoint(0, 1)));
    }

    #[test]
    fn test_triangle_is_a_single_primitive() {
        let (vertices, indices) = triangle();

        assert_eq!(vertices.len(), 3);
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
