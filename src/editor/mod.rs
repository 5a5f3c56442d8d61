//! Editor overlay drawing the circles arc texts are bent onto.

use bevy::prelude::*;

use crate::arc::{ArcConfig, ArcTextLayout, GlyphLayoutSource};

/// Settings for the arc guide overlay.
#[derive(Resource, Debug, Clone)]
pub struct ArcGizmoSettings {
    /// Whether guides are drawn.
    pub enabled: bool,
    /// Color of the per-line guide circles.
    pub line_color: Color,
    /// Color of the centre marker.
    pub center_color: Color,
    /// Radius of the centre marker.
    pub center_radius: f32,
}

impl Default for ArcGizmoSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            line_color: Color::srgba(0.5, 0.5, 0.5, 0.6),
            center_color: Color::srgb(1.0, 0.8, 0.2),
            center_radius: 4.0,
        }
    }
}

impl ArcGizmoSettings {
    /// Toggle guide visibility.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

/// Radii of the guide circles, one per line, innermost last.
pub fn line_radii(config: &ArcConfig, layout: &impl GlyphLayoutSource) -> Vec<f32> {
    let extent = layout.max_line_extent();
    (0..layout.line_count())
        .map(|line| config.radius - extent * line as f32)
        .collect()
}

/// Draw guide circles for every arc text.
pub fn draw_arc_guides(
    settings: Res<ArcGizmoSettings>,
    texts: Query<(&ArcConfig, &ArcTextLayout, &GlobalTransform)>,
    mut gizmos: Gizmos,
) {
    if !settings.enabled {
        return;
    }

    for (config, layout, global) in &texts {
        // Rotation and scale of the text entity are ignored by the overlay
        let center = global.transform_point(config.center().extend(0.0)).truncate();

        for radius in line_radii(config, layout) {
            if radius <= 0.0 {
                continue;
            }
            gizmos.circle_2d(Isometry2d::from_translation(center), radius, settings.line_color);
        }
        gizmos.circle_2d(
            Isometry2d::from_translation(center),
            settings.center_radius,
            settings.center_color,
        );
    }
}

/// Plugin that draws arc guides with gizmos.
///
/// Toggle the overlay through the [`ArcGizmoSettings`] resource:
/// ```ignore
/// fn toggle_guides(mut settings: ResMut<ArcGizmoSettings>) {
///     settings.toggle();
/// }
/// ```
pub struct ArcTextEditorPlugin;

impl Plugin for ArcTextEditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArcGizmoSettings>()
            .add_systems(Update, draw_arc_guides);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_radii_nest_inward() {
        let layout = ArcTextLayout::monospace("AB\nCD\nE", 30.0, 10.0, 12.0);
        let radii = line_radii(&ArcConfig::new(100.0), &layout);
        assert_eq!(radii, vec![100.0, 88.0, 76.0]);
    }
}
