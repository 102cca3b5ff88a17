//! Utility functions for lanerunner

/// Hermite smoothstep over [0, 1]. Input outside the range is clamped.
///
/// Stands in for the hand-authored ease curve the strafe animation was
/// tuned against: gentle start, gentle landing.
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Framerate-independent exponential approach from `current` toward `target`.
pub fn exp_approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let blend = 1.0 - (-rate * dt).exp();
    current + (target - current) * blend
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothstep_endpoints() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(0.5), 0.5);
    }

    #[test]
    fn test_smoothstep_clamps() {
        assert_eq!(smoothstep(-2.0), 0.0);
        assert_eq!(smoothstep(3.0), 1.0);
    }

    #[test]
    fn test_smoothstep_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = smoothstep(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_exp_approach_converges() {
        let mut x = 0.0;
        for _ in 0..200 {
            x = exp_approach(x, 100.0, 5.0, 1.0 / 60.0);
        }
        assert!((x - 100.0).abs() < 1.0);
    }
}
