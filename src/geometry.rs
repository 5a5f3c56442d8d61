//! Circle geometry used to place glyphs on an arc.

use bevy::prelude::*;

/// Point on the unit circle for an angle in degrees.
///
/// Uses the standard math convention (counter-clockwise from +X). Callers that
/// want screen-space placement negate the y component themselves.
pub fn unit_circle_point(angle_degrees: f32) -> Vec2 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    Vec2::new(cos, sin)
}

/// Rotation (in degrees, around Z) that stands a glyph upright on the circle
/// at unit-circle point `point`.
///
/// Glyphs are authored with their baseline horizontal, so a glyph at the top of
/// the circle needs no rotation and every other glyph is turned so its local
/// +Y points away from the centre.
pub fn upright_rotation_degrees(point: Vec2) -> f32 {
    -point.y.atan2(point.x).to_degrees() - 90.0
}

/// Direction from the circle centre to a placed glyph, in placement space.
///
/// Returns `Vec2::ZERO` for a glyph sitting on the centre.
pub fn radial_direction(center: Vec2, position: Vec2) -> Vec2 {
    (position - center).normalize_or_zero()
}
