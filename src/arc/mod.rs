//! Arc text plugin: bends laid-out glyphs onto a circle.
//!
//! # Example
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use bevy_arc_text::prelude::*;
//!
//! fn setup(mut commands: Commands) {
//!     let layout = ArcTextLayout::monospace("HELLO", 32.0, 20.0, 40.0);
//!     let characters: Vec<char> = layout.characters.iter().map(|c| c.character).collect();
//!
//!     let text = commands
//!         .spawn((
//!             ArcConfig::new(150.0).with_arc_degrees(120.0),
//!             layout,
//!             Transform::default(),
//!             Visibility::default(),
//!         ))
//!         .id();
//!
//!     for (index, character) in characters.into_iter().enumerate() {
//!         commands.spawn((
//!             Text2d::new(character.to_string()),
//!             ArcGlyph::new(text, index),
//!             ChildOf(text),
//!         ));
//!     }
//! }
//! ```

mod change;
mod components;
mod config;
mod layout;
mod systems;
mod transform;

pub use change::{have_parameters_changed, ArcChangeTracker, ArcSnapshot};
pub use components::*;
pub use config::*;
pub use layout::*;
pub use systems::{apply_arc_glyph_transforms, compensate_radius, update_arc_glyphs};
pub use transform::{
    character_angle_degrees, compute_transform, effective_arc_degrees, letter_degrees,
};

use bevy::prelude::*;

/// Plugin that keeps arc text glyph transforms up to date.
///
/// Add [`ArcConfig`] and [`ArcTextLayout`] to an entity, then tag each rendered
/// glyph child with [`ArcGlyph`].
pub struct ArcTextPlugin;

impl Plugin for ArcTextPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ArcConfig>()
            .register_type::<LetterSpacing>()
            .register_type::<ArcUpdateMode>()
            .register_type::<ArcTextLayout>()
            .register_type::<LineMetrics>()
            .register_type::<CharacterLayoutInfo>()
            .register_type::<ArcGlyphTransforms>()
            .register_type::<ArcGlyph>()
            .add_systems(
                Update,
                (
                    systems::compensate_radius,
                    systems::update_arc_glyphs,
                    systems::apply_arc_glyph_transforms,
                )
                    .chain(),
            );
    }
}
