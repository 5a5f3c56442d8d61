//! # bevy_arc_text
//!
//! A Bevy plugin that bends text glyphs onto a circular arc.
//!
//! ## Features
//!
//! - Per-character transforms (position and upright rotation) on a circle
//! - Multi-line text nests on concentric circles
//! - Per-letter arc limit: direct cap or constant spacing from font size
//! - Radius compensation to keep the top of the arc at the text origin
//! - Recomputes only when parameters or layout actually change
//! - Serializable with Bevy's scene system (RON format)
//! - Optional gizmo overlay for the guide circles
//!
//! The plugin does no shaping or font rendering. Describe an already laid-out
//! text with [`ArcTextLayout`](arc::ArcTextLayout) (or your own
//! [`GlyphLayoutSource`](arc::GlyphLayoutSource)) and render each glyph as an
//! entity tagged with [`ArcGlyph`](arc::ArcGlyph).
//!
//! ## Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_arc_text::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(ArcTextPlugin)
//!         .add_plugins(ArcTextEditorPlugin) // Optional: draws guide circles
//!         .add_systems(Startup, setup)
//!         .run();
//! }
//!
//! fn setup(mut commands: Commands) {
//!     commands.spawn(Camera2d);
//!
//!     let layout = ArcTextLayout::monospace("ARC", 32.0, 20.0, 40.0);
//!     let text = commands
//!         .spawn((
//!             ArcConfig::new(120.0),
//!             layout.clone(),
//!             Transform::default(),
//!             Visibility::default(),
//!         ))
//!         .id();
//!
//!     for (index, info) in layout.characters.iter().enumerate() {
//!         commands.spawn((
//!             Text2d::new(info.character.to_string()),
//!             ArcGlyph::new(text, index),
//!             ChildOf(text),
//!         ));
//!     }
//! }
//! ```
//!
//! ## Plugins
//!
//! - [`ArcTextPlugin`]: Arc transform computation and glyph updates (required)
//! - [`ArcTextEditorPlugin`]: Gizmo guide circles (optional, `editor` feature)

pub mod arc;
pub mod geometry;

#[cfg(feature = "editor")]
pub mod editor;

pub use arc::ArcTextPlugin;

#[cfg(feature = "editor")]
pub use editor::ArcTextEditorPlugin;

/// Convenient re-exports of commonly used types.
pub mod prelude {
    pub use crate::arc::{
        compute_transform, ArcChangeTracker, ArcConfig, ArcGlyph, ArcGlyphTransforms,
        ArcTextLayout, ArcTextPlugin, ArcUpdateMode, CharacterLayoutInfo, GlyphLayoutSource,
        LetterSpacing, LineMetrics,
    };

    #[cfg(feature = "editor")]
    pub use crate::editor::{ArcGizmoSettings, ArcTextEditorPlugin};
}
