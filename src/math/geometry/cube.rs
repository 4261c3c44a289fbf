/// Inward-visible unit cube for the sky backdrop, 12 triangles without an index buffer.
pub const SKYBOX_VERTICES: [[f32; 3]; 36] = [
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    //
    [-1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    //
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    //
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    //
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
    //
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
];

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn every_face_is_covered_by_two_triangles() {
        for axis in 0..3 {
            for side in [-1.0, 1.0] {
                let on_face = SKYBOX_VERTICES
                    .chunks(3)
                    .filter(|triangle| triangle.iter().all(|v| v[axis] == side))
                    .count();

                assert_eq!(on_face, 2, "axis {} side {}", axis, side);
            }
        }
    }

    #[test]
    fn triangles_are_not_degenerate() {
        for triangle in SKYBOX_VERTICES.chunks(3) {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]].map(Vector3::from);
            assert!((b - a).cross(&(c - a)).norm() > 0.0);
        }
    }
}
