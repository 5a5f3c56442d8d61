//! Systems keeping arc text glyphs in place.

use bevy::prelude::*;

use super::{
    ArcChangeTracker, ArcConfig, ArcGlyph, ArcGlyphTransforms, ArcTextLayout, ArcUpdateMode,
    GlyphLayoutSource,
};

/// Derive `y_offset` from `radius` on arcs with compensation enabled.
///
/// Only writes when the value actually differs, so change ticks stay quiet.
pub fn compensate_radius(mut configs: Query<&mut ArcConfig>) {
    for mut config in &mut configs {
        if !config.compensate_radius {
            continue;
        }
        if config.y_offset.to_bits() != config.compensated_y_offset().to_bits() {
            config.apply_radius_compensation();
        }
    }
}

/// Recompute glyph transforms of arc texts that need it.
pub fn update_arc_glyphs(
    mut texts: Query<(
        Entity,
        &ArcConfig,
        Ref<ArcTextLayout>,
        &mut ArcChangeTracker,
        &mut ArcGlyphTransforms,
    )>,
) {
    for (entity, config, layout, mut tracker, mut glyphs) in &mut texts {
        // Always consult the tracker so its snapshot stays current
        let parameters_changed = tracker.check(config);

        let needs_update = config.update_mode == ArcUpdateMode::EveryFrame
            || parameters_changed
            || layout.is_changed()
            || glyphs.len() != layout.character_count();

        if !needs_update {
            continue;
        }

        if layout.is_empty() {
            trace!("arc text {entity}: empty layout, nothing to place");
        }

        glyphs.recompute(&*layout, config);
        debug!(
            "arc text {entity}: recomputed {} glyph transforms",
            glyphs.len()
        );
    }
}

/// Copy computed transforms onto glyph entities.
///
/// A glyph is written when its text was recomputed, or when the glyph marker
/// itself is new or was retargeted.
pub fn apply_arc_glyph_transforms(
    texts: Query<Ref<ArcGlyphTransforms>>,
    mut glyphs: Query<(Ref<ArcGlyph>, &mut Transform)>,
) {
    for (glyph, mut transform) in &mut glyphs {
        let Ok(computed) = texts.get(glyph.text) else {
            continue;
        };

        if !computed.is_changed() && !glyph.is_changed() {
            continue;
        }

        let Some(target) = computed.get(glyph.index) else {
            continue;
        };

        // Keep the glyph's own draw order
        let z = transform.translation.z;
        *transform = *target;
        transform.translation.z = z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc::{ArcTextPlugin, LetterSpacing};

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(ArcTextPlugin);
        app
    }

    fn spawn_text(app: &mut App, text: &str, config: ArcConfig) -> Entity {
        let layout = ArcTextLayout::monospace(text, 30.0, 10.0, 12.0);
        app.world_mut().spawn((config, layout)).id()
    }

    fn scenario_config() -> ArcConfig {
        ArcConfig::new(10.0)
            .with_arc_degrees(90.0)
            .with_letter_spacing(LetterSpacing::MaxDegrees { degrees: 360 })
    }

    #[test]
    fn test_transforms_are_computed_on_first_update() {
        let mut app = test_app();
        let text = spawn_text(&mut app, "ABCD", scenario_config());

        app.update();

        let glyphs = app.world().get::<ArcGlyphTransforms>(text).unwrap();
        assert_eq!(glyphs.len(), 4);
    }

    #[test]
    fn test_glyph_entities_follow_arc() {
        let mut app = test_app();
        // Single character at 0.5 sits on top of the circle
        let text = spawn_text(&mut app, "A", scenario_config());
        let glyph = app
            .world_mut()
            .spawn((ArcGlyph::new(text, 0), Transform::from_xyz(0.0, 0.0, 2.0)))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(glyph).unwrap();
        assert!((transform.translation - Vec3::new(0.0, 10.0, 2.0)).length() < 1e-4);
    }

    #[test]
    fn test_late_glyph_is_placed() {
        let mut app = test_app();
        let text = spawn_text(&mut app, "A", scenario_config());
        app.update();

        let glyph = app
            .world_mut()
            .spawn((ArcGlyph::new(text, 0), Transform::from_xyz(0.0, 0.0, 1.5)))
            .id();
        app.update();

        let transform = app.world().get::<Transform>(glyph).unwrap();
        assert!((transform.translation - Vec3::new(0.0, 10.0, 1.5)).length() < 1e-4);
    }

    #[test]
    fn test_retargeted_glyph_is_moved() {
        let mut app = test_app();
        let text = spawn_text(&mut app, "ABCD", scenario_config());
        let glyph = app
            .world_mut()
            .spawn((ArcGlyph::new(text, 0), Transform::default()))
            .id();
        app.update();

        let first = app.world().get::<Transform>(glyph).unwrap().translation;

        app.world_mut().get_mut::<ArcGlyph>(glyph).unwrap().index = 3;
        app.update();

        let expected = app.world().get::<ArcGlyphTransforms>(text).unwrap().transforms[3];
        let transform = app.world().get::<Transform>(glyph).unwrap();
        assert!((transform.translation - expected.translation).length() < 1e-4);
        assert!((transform.translation - first).length() > 1.0);
    }

    #[test]
    fn test_unchanged_text_is_not_recomputed() {
        let mut app = test_app();
        let text = spawn_text(&mut app, "ABCD", scenario_config());
        app.update();

        // Scribble over the output; an idle frame must leave it alone
        app.world_mut()
            .get_mut::<ArcGlyphTransforms>(text)
            .unwrap()
            .transforms[0] = Transform::from_xyz(99.0, 0.0, 0.0);
        app.update();

        let glyphs = app.world().get::<ArcGlyphTransforms>(text).unwrap();
        assert_eq!(glyphs.transforms[0].translation.x, 99.0);
    }

    #[test]
    fn test_parameter_change_triggers_recompute() {
        let mut app = test_app();
        let text = spawn_text(&mut app, "A", scenario_config());
        app.update();

        app.world_mut().get_mut::<ArcConfig>(text).unwrap().radius = 20.0;
        app.update();

        let glyphs = app.world().get::<ArcGlyphTransforms>(text).unwrap();
        assert!((glyphs.transforms[0].translation.y - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_layout_change_triggers_recompute() {
        let mut app = test_app();
        let text = spawn_text(&mut app, "AB", scenario_config());
        app.update();

        app.world_mut()
            .entity_mut(text)
            .insert(ArcTextLayout::monospace("ABC", 30.0, 10.0, 12.0));
        app.update();

        let glyphs = app.world().get::<ArcGlyphTransforms>(text).unwrap();
        assert_eq!(glyphs.len(), 3);
    }

    #[test]
    fn test_every_frame_mode_always_recomputes() {
        let mut app = test_app();
        let config = scenario_config().with_update_mode(ArcUpdateMode::EveryFrame);
        let text = spawn_text(&mut app, "A", config);
        app.update();

        app.world_mut()
            .get_mut::<ArcGlyphTransforms>(text)
            .unwrap()
            .transforms[0] = Transform::from_xyz(99.0, 0.0, 0.0);
        app.update();

        let glyphs = app.world().get::<ArcGlyphTransforms>(text).unwrap();
        assert!(glyphs.transforms[0].translation.x.abs() < 1e-4);
    }

    #[test]
    fn test_radius_compensation_puts_arc_top_at_origin() {
        let mut app = test_app();
        let text = spawn_text(&mut app, "A", scenario_config().with_radius(25.0));
        app.world_mut()
            .get_mut::<ArcConfig>(text)
            .unwrap()
            .compensate_radius = true;

        app.update();

        let config = app.world().get::<ArcConfig>(text).unwrap();
        assert_eq!(config.y_offset, -25.0);
        let glyphs = app.world().get::<ArcGlyphTransforms>(text).unwrap();
        assert!(glyphs.transforms[0].translation.length() < 1e-4);
    }

    #[test]
    fn test_empty_text_yields_no_transforms() {
        let mut app = test_app();
        let text = spawn_text(&mut app, "", scenario_config());
        app.update();

        let glyphs = app.world().get::<ArcGlyphTransforms>(text).unwrap();
        assert!(glyphs.is_empty());
    }

    #[test]
    fn test_glyph_with_missing_text_is_ignored() {
        let mut app = test_app();
        let glyph = app
            .world_mut()
            .spawn((ArcGlyph::new(Entity::PLACEHOLDER, 0), Transform::from_xyz(1.0, 2.0, 3.0)))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(glyph).unwrap();
        assert_eq!(transform.translation, Vec3::new(1.0, 2.0, 3.0));
    }
}
