//! Arc configuration component.

use bevy::prelude::*;

use super::change::ArcChangeTracker;
use super::components::ArcGlyphTransforms;

/// How many degrees of arc each character may consume at most.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum LetterSpacing {
    /// Cap the per-letter step directly.
    MaxDegrees {
        /// Maximum degrees of arc per character.
        degrees: u32,
    },
    /// Derive the per-letter step from font size and radius so that letters keep
    /// a constant spacing along the circumference.
    ///
    /// `degrees = (180 * font_size / multiplier) / (PI * radius)`
    Fixed {
        /// Larger values pack letters tighter.
        multiplier: f32,
    },
}

impl Default for LetterSpacing {
    fn default() -> Self {
        Self::MaxDegrees { degrees: 20 }
    }
}

impl LetterSpacing {
    /// Cycle to the other policy, keeping sensible default values.
    pub fn next(self) -> Self {
        match self {
            Self::MaxDegrees { .. } => Self::Fixed { multiplier: 1.0 },
            Self::Fixed { .. } => Self::default(),
        }
    }

    /// Get the display name for this policy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MaxDegrees { .. } => "Max degrees per letter",
            Self::Fixed { .. } => "Fixed letter spacing",
        }
    }
}

/// When glyph transforms are recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Default)]
pub enum ArcUpdateMode {
    /// Recompute only when the configuration or the layout changed.
    #[default]
    OnChange,
    /// Recompute every frame.
    EveryFrame,
}

impl ArcUpdateMode {
    /// Toggle between update modes.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::OnChange => Self::EveryFrame,
            Self::EveryFrame => Self::OnChange,
        };
    }

    /// Get display name for the current mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OnChange => "On change",
            Self::EveryFrame => "Every frame",
        }
    }
}

/// Bends the glyphs of a text layout onto a circular arc.
///
/// Attach alongside an [`ArcTextLayout`](super::ArcTextLayout). The computed
/// per-glyph transforms land in [`ArcGlyphTransforms`].
/// Fully serializable with Bevy's scene system.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component, Default)]
#[require(ArcChangeTracker, ArcGlyphTransforms)]
pub struct ArcConfig {
    /// Radius of the circle the first line sits on.
    pub radius: f32,

    /// Vertical offset of the circle centre relative to the text origin.
    ///
    /// Overwritten every frame while `compensate_radius` is enabled.
    pub y_offset: f32,

    /// Derive `y_offset` from `radius` so the top of the arc stays at the origin.
    pub compensate_radius: bool,

    /// Largest span of arc, in degrees, the text may cover.
    pub arc_degrees_span: f32,

    /// Angle, in degrees, the text is centred on. `-90` is the top of the circle.
    pub angular_offset_degrees: f32,

    /// Per-letter limit on the arc span.
    pub letter_spacing: LetterSpacing,

    /// When transforms are recomputed. Not a geometry parameter.
    pub update_mode: ArcUpdateMode,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            radius: 200.0,
            y_offset: 0.0,
            compensate_radius: false,
            arc_degrees_span: 180.0,
            angular_offset_degrees: -90.0,
            letter_spacing: LetterSpacing::default(),
            update_mode: ArcUpdateMode::OnChange,
        }
    }
}

impl ArcConfig {
    /// Create a new arc with the given radius.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            ..default()
        }
    }

    /// Set the radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the vertical offset of the circle centre.
    pub fn with_y_offset(mut self, y_offset: f32) -> Self {
        self.y_offset = y_offset;
        self
    }

    /// Enable or disable radius compensation.
    pub fn with_compensate_radius(mut self, compensate: bool) -> Self {
        self.compensate_radius = compensate;
        self.apply_radius_compensation();
        self
    }

    /// Set the maximum arc span in degrees.
    pub fn with_arc_degrees(mut self, degrees: f32) -> Self {
        self.arc_degrees_span = degrees;
        self
    }

    /// Set the angle the text is centred on, in degrees.
    pub fn with_angular_offset(mut self, degrees: f32) -> Self {
        self.angular_offset_degrees = degrees;
        self
    }

    /// Set the letter spacing policy.
    pub fn with_letter_spacing(mut self, spacing: LetterSpacing) -> Self {
        self.letter_spacing = spacing;
        self
    }

    /// Set the update mode.
    pub fn with_update_mode(mut self, mode: ArcUpdateMode) -> Self {
        self.update_mode = mode;
        self
    }

    /// The `y_offset` radius compensation would produce.
    pub fn compensated_y_offset(&self) -> f32 {
        -self.radius
    }

    /// Overwrite `y_offset` from `radius` when compensation is enabled.
    ///
    /// Returns true if `y_offset` was modified.
    pub fn apply_radius_compensation(&mut self) -> bool {
        if !self.compensate_radius {
            return false;
        }
        let compensated = self.compensated_y_offset();
        if self.y_offset.to_bits() == compensated.to_bits() {
            return false;
        }
        self.y_offset = compensated;
        true
    }

    /// Centre of the circle in the text's local space.
    pub fn center(&self) -> Vec2 {
        Vec2::new(0.0, self.y_offset)
    }
}
