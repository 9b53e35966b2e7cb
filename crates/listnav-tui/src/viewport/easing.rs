//! Easing curves mapping animation progress [0, 1] onto [0, 1].

pub use listnav_core::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => ease_out(t, 3),
            EasingType::Quintic => ease_out(t, 5),
        }
    }
}

/// Polynomial ease-out: 1 - (1-t)^n
#[inline]
fn ease_out(t: f64, power: i32) -> f64 {
    1.0 - (1.0 - t).powi(power)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 4] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at t=1", easing);
            assert!(easing.apply(0.0).abs() < 1e-9, "{:?} at t=0", easing);
        }
    }

    #[test]
    fn test_ease_out_leads_linear() {
        assert!(EasingType::Cubic.apply(0.5) > EasingType::Linear.apply(0.5));
        assert!(EasingType::Quintic.apply(0.5) > EasingType::Cubic.apply(0.5));
        assert_eq!(EasingType::None.apply(0.99), 0.0);
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(EasingType::Linear.apply(-2.0), 0.0);
        assert_eq!(EasingType::Linear.apply(3.0), 1.0);
    }
}
