pub const FULL_TURN_DEGREES: f32 = 360.0;

/// Wraps an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(FULL_TURN_DEGREES);

    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= FULL_TURN_DEGREES {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn wraps_into_half_open_range() {
        assert_relative_eq!(wrap_degrees(0.0), 0.0);
        assert_relative_eq!(wrap_degrees(360.0), 0.0);
        assert_relative_eq!(wrap_degrees(725.0), 5.0);
        assert_relative_eq!(wrap_degrees(-90.0), 270.0);
        assert_relative_eq!(wrap_degrees(-1e-9), 0.0);
    }

    #[test]
    fn wrapped_angle_is_congruent_to_input() {
        for angle in [-1234.5f32, -360.0, -0.5, 12.25, 359.75, 4000.0] {
            let wrapped = wrap_degrees(angle);

            assert!((0.0..FULL_TURN_DEGREES).contains(&wrapped));
            let turns = (angle - wrapped) / FULL_TURN_DEGREES;
            assert_relative_eq!(turns, turns.round(), epsilon = 1e-4);
        }
    }
}
