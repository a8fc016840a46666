//! Vector helpers
//!
//! `glam::Vec2` is the vector primitive everywhere (it is `Copy`, so values
//! never alias). These helpers cover the few conventions glam does not share.

use glam::Vec2;

/// Unit vector for an angle measured from the +y axis: `(sin θ, cos θ)`
#[inline]
pub fn from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.sin(), angle.cos())
}

/// Componentwise division that leaves `v` untouched if either divisor
/// component is exactly zero
#[inline]
pub fn div_or_keep(v: Vec2, divisor: Vec2) -> Vec2 {
    if divisor.x == 0.0 || divisor.y == 0.0 {
        return v;
    }
    v / divisor
}

/// Normalize, leaving zero-length vectors as they are
#[inline]
pub fn normalize_or_keep(v: Vec2) -> Vec2 {
    let len = v.length();
    if len == 0.0 { v } else { v / len }
}

/// `a * (1 - t) + b * t`, evaluated the same way for every caller
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_from_angle_measures_from_y_axis() {
        let up = from_angle(0.0);
        assert!((up - Vec2::new(0.0, 1.0)).length() < 1e-6);

        let right = from_angle(PI / 2.0);
        assert!((right - Vec2::new(1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_div_or_keep_guards_zero_components() {
        let v = Vec2::new(10.0, 20.0);
        assert_eq!(div_or_keep(v, Vec2::new(0.0, 5.0)), v);
        assert_eq!(div_or_keep(v, Vec2::new(5.0, 0.0)), v);
        assert_eq!(div_or_keep(v, Vec2::new(2.0, 4.0)), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_normalize_or_keep() {
        assert_eq!(normalize_or_keep(Vec2::ZERO), Vec2::ZERO);
        let n = normalize_or_keep(Vec2::new(3.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n - Vec2::new(0.6, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Vec2::new(-4.0, 2.0);
        let b = Vec2::new(6.0, -8.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), Vec2::new(1.0, -3.0));
    }
}
