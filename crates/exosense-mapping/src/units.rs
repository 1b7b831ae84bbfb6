//! Physical constants and angle helpers.

/// Degrees per radian.
pub const RAD_TO_DEG: f64 = 57.2957795;

/// Radians per degree.
pub const DEG_TO_RAD: f64 = 0.01745329252;

/// Standard gravity at the Earth's surface in m/s².
pub const G0: f64 = 9.812865328;

/// Convert radians to degrees.
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

/// Convert degrees to radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}
