//! Text layout input consumed by the arc transform.
//!
//! The arc does no shaping or measuring itself. Whatever lays the text out
//! (a text engine, a font editor, a hand-built monospace grid) describes the
//! result through [`GlyphLayoutSource`], once per layout pass.

use bevy::prelude::*;

/// Read access to a laid-out text, as needed to bend it onto an arc.
pub trait GlyphLayoutSource {
    /// Number of visible characters.
    fn character_count(&self) -> usize;

    /// Number of lines.
    fn line_count(&self) -> usize;

    /// Line the character at `char_index` belongs to.
    fn line_number(&self, char_index: usize) -> Option<usize>;

    /// Largest vertical extent of any line. Each successive line moves inward
    /// by this amount.
    fn max_line_extent(&self) -> f32;

    /// Font size the text was laid out with.
    fn font_size(&self) -> f32;

    /// Horizontal position of the character across the whole text, in [0, 1].
    fn normalized_position(&self, char_index: usize) -> Option<f32>;
}

/// Vertical metrics of one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct LineMetrics {
    /// Baseline height of the line in layout space.
    pub baseline_y: f32,
    /// Vertical extent (height) of the line.
    pub extent_y: f32,
}

/// Placement of a single character as produced by the layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct CharacterLayoutInfo {
    /// The character itself.
    pub character: char,
    /// Index of the line this character is on.
    pub line: usize,
    /// Midpoint of the character on its baseline.
    pub baseline: Vec2,
    /// Horizontal position normalized across the full text width.
    pub normalized_x: f32,
}

/// A finished text layout attached to an arc text entity.
///
/// Replace the component (or mutate it) whenever the text is laid out again;
/// the arc systems pick up the change on the next update.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component, Default)]
pub struct ArcTextLayout {
    /// Font size used for the layout.
    pub font_size: f32,
    /// Per-line metrics.
    pub lines: Vec<LineMetrics>,
    /// Per-character placement, in reading order.
    pub characters: Vec<CharacterLayoutInfo>,
}

impl ArcTextLayout {
    /// Build a layout from characters given as `(character, line, baseline midpoint, advance)`.
    ///
    /// Normalized positions are measured against the horizontal bounds of all
    /// characters together, so the whole text spans [0, 1]. A text with no
    /// width puts every character at 0.5.
    pub fn from_characters(
        font_size: f32,
        lines: Vec<LineMetrics>,
        characters: impl IntoIterator<Item = (char, usize, Vec2, f32)>,
    ) -> Self {
        let placed: Vec<(char, usize, Vec2, f32)> = characters.into_iter().collect();

        let (min_x, max_x) = placed.iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY),
            |(min_x, max_x), &(_, _, baseline, advance)| {
                let half = advance * 0.5;
                (min_x.min(baseline.x - half), max_x.max(baseline.x + half))
            },
        );
        let width = max_x - min_x;

        let characters = placed
            .into_iter()
            .map(|(character, line, baseline, _)| {
                let normalized_x = if width > f32::EPSILON {
                    ((baseline.x - min_x) / width).clamp(0.0, 1.0)
                } else {
                    0.5
                };
                CharacterLayoutInfo {
                    character,
                    line,
                    baseline,
                    normalized_x,
                }
            })
            .collect();

        Self {
            font_size,
            lines,
            characters,
        }
    }

    /// Lay out `text` on a fixed-advance grid, centring each line.
    ///
    /// Newlines start a new line and produce no character.
    pub fn monospace(text: &str, font_size: f32, advance: f32, line_height: f32) -> Self {
        let mut lines = Vec::new();
        let mut characters = Vec::new();

        for (line_index, line) in text.split('\n').enumerate() {
            let baseline_y = -(line_index as f32) * line_height;
            lines.push(LineMetrics {
                baseline_y,
                extent_y: line_height,
            });

            let count = line.chars().count();
            let line_width = count as f32 * advance;
            for (column, character) in line.chars().enumerate() {
                let x = (column as f32 + 0.5) * advance - line_width * 0.5;
                characters.push((character, line_index, Vec2::new(x, baseline_y), advance));
            }
        }

        Self::from_characters(font_size, lines, characters)
    }

    /// Check if there is nothing to place.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty() || self.lines.is_empty()
    }
}

impl GlyphLayoutSource for ArcTextLayout {
    fn character_count(&self) -> usize {
        self.characters.len()
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_number(&self, char_index: usize) -> Option<usize> {
        self.characters.get(char_index).map(|c| c.line)
    }

    fn max_line_extent(&self) -> f32 {
        self.lines
            .iter()
            .map(|line| line.extent_y)
            .fold(0.0, f32::max)
    }

    fn font_size(&self) -> f32 {
        self.font_size
    }

    fn normalized_position(&self, char_index: usize) -> Option<f32> {
        self.characters.get(char_index).map(|c| c.normalized_x)
    }
}
