//! Joint angle calculation using bearing difference
//!
//! Calculates the unsigned angle at vertex `b` between rays b→a and b→c.

use crate::pose::Keypoint;

/// Calculate joint angle in degrees, in `[0, 180]`
///
/// Uses the difference of `atan2` bearings of BC and BA, reflected
/// into `[0, 180]`:
/// - 90° = right angle (e.g. knee at the bottom of a squat)
/// - 180° = fully straight
pub fn calculate_angle(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    let radians = (c.1 - b.1).atan2(c.0 - b.0) - (a.1 - b.1).atan2(a.0 - b.0);
    let angle = radians.to_degrees().abs();

    if angle > 180.0 {
        (360.0 - angle).max(0.0)
    } else {
        angle
    }
}

/// Joint angle for three keypoints, vertex in the middle
pub fn joint_angle(a: &Keypoint, b: &Keypoint, c: &Keypoint) -> f32 {
    calculate_angle(a.position(), b.position(), c.position())
}
