use rand::Rng;

/// Normalize an angle in degrees to (-180°, 180°], nudging exact multiples of 90° by +1°
///
/// A ball travelling at exactly 0°, ±90° or 180° has a zero velocity component and
/// could skim a wall forever or never reach a paddle.
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 1.0;
    }

    // In-range values pass through untouched so normalizing twice is exact
    let mut d = degrees;
    if d <= -180.0 || d > 180.0 {
        d = d.rem_euclid(360.0);
        if d > 180.0 {
            d -= 360.0;
        }
    }

    if d % 90.0 == 0.0 {
        d += 1.0;
        // 180° + 1° wraps around to -179°
        if d > 180.0 {
            d -= 360.0;
        }
    }
    d
}

/// Ball direction in degrees: 0° = up, 90° = right, -90° = left, 180° = down
///
/// Positive values travel rightward and negative values leftward, which makes
/// the horizontal heading readable from the sign alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    degrees: f32,
}

impl Direction {
    pub fn new(degrees: f32) -> Self {
        Self {
            degrees: normalize_degrees(degrees),
        }
    }

    /// Random serve direction with magnitude in [min, max] and a coin-flip sign
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min_degrees: f32, max_degrees: f32) -> Self {
        let magnitude = rng.gen_range(min_degrees..=max_degrees);
        let degrees = if rng.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        };
        Self::new(degrees)
    }

    pub fn set_degrees(&mut self, degrees: f32) {
        self.degrees = normalize_degrees(degrees);
    }

    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    /// Standard radians (0 = right, y down) for trigonometry
    pub fn radians(&self) -> f32 {
        (self.degrees - 90.0).to_radians()
    }

    pub fn is_rightward(&self) -> bool {
        self.degrees > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    fn assert_valid(d: f32, input: f32) {
        assert!(
            d > -180.0 && d <= 180.0,
            "{input} normalized to {d}, outside (-180, 180]"
        );
        assert!(d % 90.0 != 0.0, "{input} normalized to multiple of 90: {d}");
    }

    #[test]
    fn test_normalize_range_sweep() {
        let mut input = -1080.0;
        while input <= 1080.0 {
            assert_valid(normalize_degrees(input), input);
            input += 0.5;
        }
    }

    #[test]
    fn test_normalize_nudges_right_angles() {
        assert_eq!(normalize_degrees(0.0), 1.0);
        assert_eq!(normalize_degrees(90.0), 91.0);
        assert_eq!(normalize_degrees(-90.0), -89.0);
        assert_eq!(normalize_degrees(180.0), -179.0);
        assert_eq!(normalize_degrees(-180.0), -179.0);
        assert_eq!(normalize_degrees(360.0), 1.0);
    }

    #[test]
    fn test_normalize_wraps() {
        assert_eq!(normalize_degrees(225.0), -135.0);
        assert_eq!(normalize_degrees(-225.0), 135.0);
        assert_eq!(normalize_degrees(45.0 + 720.0), 45.0);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in [-179.3, -50.3, 0.7, 63.17, 179.9, 400.1, -700.25] {
            let once = normalize_degrees(input);
            assert_eq!(normalize_degrees(once), once, "Second pass changed {input}");
        }
    }

    #[test]
    fn test_normalize_non_finite() {
        assert_valid(normalize_degrees(f32::NAN), f32::NAN);
        assert_valid(normalize_degrees(f32::INFINITY), f32::INFINITY);
        assert_valid(normalize_degrees(1.0e30), 1.0e30);
    }

    #[test]
    fn test_radians_up_is_zero_degrees() {
        let up = Direction::new(1.0);
        // 1° from up: mostly -y (screen up), slightly +x
        assert!(up.radians().sin() < -0.99);
        assert!(up.radians().cos() > 0.0);

        let down_right = Direction::new(135.0);
        assert!(down_right.radians().cos() > 0.0, "Moving right");
        assert!(down_right.radians().sin() > 0.0, "Moving down");
    }

    #[test]
    fn test_random_direction_in_serve_range() {
        let mut rng = GameRng::new(7);
        let mut saw_left = false;
        let mut saw_right = false;
        for _ in 0..200 {
            let dir = Direction::random(&mut rng.0, 30.0, 150.0);
            let magnitude = dir.degrees().abs();
            assert!(
                (30.0..=150.0).contains(&magnitude),
                "Serve magnitude {magnitude} out of range"
            );
            if dir.is_rightward() {
                saw_right = true;
            } else {
                saw_left = true;
            }
        }
        assert!(saw_left && saw_right, "Both serve sides should occur");
    }

    #[test]
    fn test_random_direction_is_reproducible() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..10 {
            assert_eq!(
                Direction::random(&mut a.0, 30.0, 150.0),
                Direction::random(&mut b.0, 30.0, 150.0)
            );
        }
    }
}
