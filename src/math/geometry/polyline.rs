use nalgebra::{Point3, Vector3};

/// Closed unit circle in the XZ plane. The last point repeats the first one so the circle can be
/// drawn as a line strip.
pub fn unit_circle(points: usize) -> Vec<Point3<f32>> {
    if points < 2 {
        return vec![Point3::new(0.0, 0.0, 1.0); points];
    }

    (0..points)
        .map(|i| {
            let angle = 2.0 * std::f32::consts::PI * i as f32 / (points - 1) as f32;
            Point3::new(angle.sin(), 0.0, angle.cos())
        })
        .collect()
}

/// Segment along `axis` sticking out of a sphere of `radius` by half of its radius on both sides.
pub fn axis_segment(axis: &Vector3<f32>, radius: f32) -> Vec<Point3<f32>> {
    let half = axis.try_normalize(f32::EPSILON).unwrap_or_else(Vector3::y) * radius * 1.5;
    vec![Point3::from(-half), Point3::from(half)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn circle_is_closed_and_on_unit_radius() {
        let circle = unit_circle(256);

        assert_eq!(circle.len(), 256);
        assert_relative_eq!(circle[0], circle[255], epsilon = 1e-5);
        for point in &circle {
            assert_relative_eq!(point.coords.norm(), 1.0, epsilon = 1e-5);
            assert_eq!(point.y, 0.0);
        }
    }

    #[test]
    fn circle_starts_on_positive_z() {
        let circle = unit_circle(5);

        assert_relative_eq!(circle[0], Point3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(circle[1], Point3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn axis_segment_is_symmetric_and_scaled() {
        let segment = axis_segment(&Vector3::new(0.0, 2.0, 0.0), 0.5);

        assert_relative_eq!(segment[0], Point3::new(0.0, -0.75, 0.0));
        assert_relative_eq!(segment[1], Point3::new(0.0, 0.75, 0.0));
    }

    #[test]
    fn zero_axis_falls_back_to_up() {
        let segment = axis_segment(&Vector3::zeros(), 1.0);
        assert_relative_eq!(segment[1], Point3::new(0.0, 1.5, 0.0));
    }
}
