//! Computed glyph transforms and the glyph-to-text link.

use bevy::prelude::*;

use super::config::ArcConfig;
use super::layout::GlyphLayoutSource;
use super::transform::compute_transform;

/// Computed per-character transforms of an arc text, in layout order.
///
/// Added automatically alongside [`ArcConfig`] and rewritten whenever the arc
/// is recomputed. Transforms are local to the arc text entity.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component, Default)]
pub struct ArcGlyphTransforms {
    /// One transform per character.
    pub transforms: Vec<Transform>,
}

impl ArcGlyphTransforms {
    /// Recompute every character's transform from `layout` and `config`.
    pub fn recompute(&mut self, layout: &impl GlyphLayoutSource, config: &ArcConfig) {
        self.transforms.clear();
        self.transforms.extend((0..layout.character_count()).map(|index| {
            let position = layout.normalized_position(index).unwrap_or(0.5);
            compute_transform(position, index, layout, config)
        }));
    }

    /// Transform of the character at `index`.
    pub fn get(&self, index: usize) -> Option<&Transform> {
        self.transforms.get(index)
    }

    /// Number of computed transforms.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Check if no transforms have been computed.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

/// Marker component for a rendered glyph that follows an arc text.
///
/// The glyph's [`Transform`] is overwritten with the computed transform of
/// character `index`, so the glyph entity should be a child of `text`.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ArcGlyph {
    /// The entity carrying the [`ArcConfig`].
    pub text: Entity,
    /// Index of the character in the layout.
    pub index: usize,
}

impl ArcGlyph {
    /// Create a glyph marker for character `index` of `text`.
    pub fn new(text: Entity, index: usize) -> Self {
        Self { text, index }
    }
}
