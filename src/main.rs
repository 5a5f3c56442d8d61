//! Example arc text application.
//!
//! Run with: `cargo run`

use bevy::prelude::*;
use bevy_arc_text::prelude::*;

const FONT_SIZE: f32 = 36.0;
const ADVANCE: f32 = 24.0;
const LINE_HEIGHT: f32 = 44.0;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins).add_plugins(ArcTextPlugin);

    #[cfg(feature = "editor")]
    app.add_plugins(ArcTextEditorPlugin);

    app.add_systems(Startup, setup)
        .add_systems(Update, (handle_input, show_help))
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);

    let layout = ArcTextLayout::monospace(
        "BENDING TEXT\nAROUND A CIRCLE",
        FONT_SIZE,
        ADVANCE,
        LINE_HEIGHT,
    );
    let characters: Vec<char> = layout.characters.iter().map(|c| c.character).collect();

    let text = commands
        .spawn((
            ArcConfig::new(220.0)
                .with_arc_degrees(200.0)
                .with_letter_spacing(LetterSpacing::MaxDegrees { degrees: 16 }),
            layout,
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    for (index, character) in characters.into_iter().enumerate() {
        commands.spawn((
            Text2d::new(character.to_string()),
            TextFont {
                font_size: FONT_SIZE,
                ..default()
            },
            ArcGlyph::new(text, index),
            Transform::default(),
            ChildOf(text),
        ));
    }
}

fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut configs: Query<(&mut ArcConfig, &mut ArcChangeTracker)>,
) {
    let delta = time.delta_secs();

    for (mut config, mut tracker) in &mut configs {
        if keyboard.pressed(KeyCode::ArrowUp) {
            config.radius += 100.0 * delta;
        }
        if keyboard.pressed(KeyCode::ArrowDown) {
            config.radius = (config.radius - 100.0 * delta).max(0.0);
        }
        if keyboard.pressed(KeyCode::ArrowLeft) {
            config.angular_offset_degrees -= 60.0 * delta;
        }
        if keyboard.pressed(KeyCode::ArrowRight) {
            config.angular_offset_degrees += 60.0 * delta;
        }
        if keyboard.pressed(KeyCode::BracketLeft) {
            config.arc_degrees_span = (config.arc_degrees_span - 60.0 * delta).max(0.0);
        }
        if keyboard.pressed(KeyCode::BracketRight) {
            config.arc_degrees_span = (config.arc_degrees_span + 60.0 * delta).min(360.0);
        }
        if keyboard.just_pressed(KeyCode::KeyC) {
            config.compensate_radius = !config.compensate_radius;
            if !config.compensate_radius {
                config.y_offset = 0.0;
            }
        }
        if keyboard.just_pressed(KeyCode::Tab) {
            config.letter_spacing = config.letter_spacing.next();
        }
        if keyboard.just_pressed(KeyCode::KeyM) {
            config.update_mode.toggle();
            // Force one recompute after switching modes
            tracker.reset();
        }
    }
}

fn show_help(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut shown: Local<bool>,
    configs: Query<&ArcConfig>,
) {
    if !keyboard.just_pressed(KeyCode::KeyH) {
        return;
    }
    *shown = !*shown;
    if !*shown {
        return;
    }

    println!("\n=== Arc Text Help ===");
    for config in &configs {
        println!(
            "Radius: {:.1}  Span: {:.1}  Offset: {:.1}",
            config.radius, config.arc_degrees_span, config.angular_offset_degrees
        );
        println!("Spacing: {}", config.letter_spacing.name());
        println!("Update: {}", config.update_mode.name());
        println!("Compensate radius: {}", if config.compensate_radius { "On" } else { "Off" });
    }
    println!();
    println!("Controls:");
    println!("  H           - Toggle this help");
    println!("  Up/Down     - Grow/shrink radius");
    println!("  Left/Right  - Rotate around the circle");
    println!("  [ / ]       - Narrow/widen arc span");
    println!("  C           - Toggle radius compensation");
    println!("  Tab         - Cycle letter spacing policy");
    println!("  M           - Toggle update mode");
    println!("=====================\n");
}
