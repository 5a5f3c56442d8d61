//! Per-character arc placement.

use std::f32::consts::PI;

use bevy::prelude::*;

use crate::geometry::{unit_circle_point, upright_rotation_degrees};

use super::config::{ArcConfig, LetterSpacing};
use super::layout::GlyphLayoutSource;

/// Maximum degrees of arc a single character may consume.
///
/// The fixed-spacing policy returns `f32::INFINITY` (no limit) when the radius
/// or the multiplier is zero.
pub fn letter_degrees(spacing: LetterSpacing, font_size: f32, radius: f32) -> f32 {
    match spacing {
        LetterSpacing::MaxDegrees { degrees } => degrees as f32,
        LetterSpacing::Fixed { multiplier } => {
            let denominator = PI * radius * multiplier;
            if denominator == 0.0 {
                return f32::INFINITY;
            }
            (180.0 * font_size) / denominator
        }
    }
}

/// Arc span the text actually covers.
///
/// Short strings are clamped to `characters per line * letter degrees` so they
/// do not spread across the whole configured span. Returns `None` when there
/// are no characters or no lines.
pub fn effective_arc_degrees(
    config: &ArcConfig,
    character_count: usize,
    line_count: usize,
    font_size: f32,
) -> Option<f32> {
    if character_count == 0 || line_count == 0 {
        return None;
    }
    let per_line = character_count as f32 / line_count as f32;
    let per_letter = letter_degrees(config.letter_spacing, font_size, config.radius);
    Some(config.arc_degrees_span.min(per_line * per_letter))
}

/// Angle, in degrees, of a character at normalized position `zero_to_one_pos`.
pub fn character_angle_degrees(zero_to_one_pos: f32, actual_arc: f32, angular_offset: f32) -> f32 {
    (zero_to_one_pos - 0.5) * actual_arc + angular_offset
}

/// Compute the transform placing character `char_index` on the arc.
///
/// The result is relative to the text origin: translation onto the circle of
/// its line, rotation around Z so the glyph stands upright on the circle, unit
/// scale. Empty layouts and out-of-range indices yield [`Transform::IDENTITY`].
/// A zero radius collapses every glyph onto the circle centre.
pub fn compute_transform(
    zero_to_one_pos: f32,
    char_index: usize,
    layout: &impl GlyphLayoutSource,
    config: &ArcConfig,
) -> Transform {
    let Some(actual_arc) = effective_arc_degrees(
        config,
        layout.character_count(),
        layout.line_count(),
        layout.font_size(),
    ) else {
        return Transform::IDENTITY;
    };

    let Some(line) = layout.line_number(char_index) else {
        return Transform::IDENTITY;
    };

    let angle = character_angle_degrees(zero_to_one_pos, actual_arc, config.angular_offset_degrees);
    let point = unit_circle_point(angle);

    // Each subsequent line nests on a smaller concentric circle
    let radius_for_line = config.radius - layout.max_line_extent() * line as f32;

    // y is flipped: -90 degrees is the top of the circle
    let position = Vec3::new(
        point.x * radius_for_line,
        -point.y * radius_for_line + config.y_offset,
        0.0,
    );
    let rotation = Quat::from_rotation_z(upright_rotation_degrees(point).to_radians());

    Transform {
        translation: position,
        rotation,
        scale: Vec3::ONE,
    }
}
