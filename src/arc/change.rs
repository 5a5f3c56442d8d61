//! Edge-triggered change detection for arc parameters.
//!
//! Bevy's own change ticks fire on any mutable access, even when an editor
//! writes back an identical value. The snapshot here compares the geometry
//! parameters themselves, bit for bit.

use bevy::prelude::*;

use super::config::{ArcConfig, LetterSpacing};

/// The geometry parameters of an [`ArcConfig`] at one point in time.
#[derive(Debug, Clone, Copy)]
pub struct ArcSnapshot {
    radius: f32,
    y_offset: f32,
    compensate_radius: bool,
    arc_degrees_span: f32,
    angular_offset_degrees: f32,
    letter_spacing: LetterSpacing,
}

impl ArcSnapshot {
    /// Capture the tracked fields of `config`.
    pub fn capture(config: &ArcConfig) -> Self {
        Self {
            radius: config.radius,
            y_offset: config.y_offset,
            compensate_radius: config.compensate_radius,
            arc_degrees_span: config.arc_degrees_span,
            angular_offset_degrees: config.angular_offset_degrees,
            letter_spacing: config.letter_spacing,
        }
    }
}

impl PartialEq for ArcSnapshot {
    // Bitwise float comparison, no epsilon
    fn eq(&self, other: &Self) -> bool {
        let spacing_eq = match (self.letter_spacing, other.letter_spacing) {
            (LetterSpacing::MaxDegrees { degrees: a }, LetterSpacing::MaxDegrees { degrees: b }) => {
                a == b
            }
            (LetterSpacing::Fixed { multiplier: a }, LetterSpacing::Fixed { multiplier: b }) => {
                a.to_bits() == b.to_bits()
            }
            _ => false,
        };

        spacing_eq
            && self.radius.to_bits() == other.radius.to_bits()
            && self.y_offset.to_bits() == other.y_offset.to_bits()
            && self.compensate_radius == other.compensate_radius
            && self.arc_degrees_span.to_bits() == other.arc_degrees_span.to_bits()
            && self.angular_offset_degrees.to_bits() == other.angular_offset_degrees.to_bits()
    }
}

/// Compare `current` against the previous snapshot.
///
/// Returns whether anything changed together with the snapshot to keep for the
/// next call. The new snapshot is returned regardless of the result. Having no
/// previous snapshot counts as a change.
pub fn have_parameters_changed(
    current: &ArcConfig,
    previous: Option<&ArcSnapshot>,
) -> (bool, ArcSnapshot) {
    let snapshot = ArcSnapshot::capture(current);
    let changed = previous.is_none_or(|previous| *previous != snapshot);
    (changed, snapshot)
}

/// Remembers the last-seen arc parameters of an entity.
///
/// Added automatically alongside [`ArcConfig`].
#[derive(Component, Debug, Clone, Default)]
pub struct ArcChangeTracker {
    previous: Option<ArcSnapshot>,
}

impl ArcChangeTracker {
    /// Check whether `config` differs from the last call, then remember it.
    ///
    /// Consumable once: a second call with the same config returns false.
    pub fn check(&mut self, config: &ArcConfig) -> bool {
        let (changed, snapshot) = have_parameters_changed(config, self.previous.as_ref());
        self.previous = Some(snapshot);
        changed
    }

    /// Forget the stored snapshot so the next check reports a change.
    pub fn reset(&mut self) {
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc::config::ArcUpdateMode;

    #[test]
    fn test_first_check_reports_change() {
        let mut tracker = ArcChangeTracker::default();
        assert!(tracker.check(&ArcConfig::default()));
    }

    #[test]
    fn test_change_is_edge_triggered() {
        let mut tracker = ArcChangeTracker::default();
        let mut config = ArcConfig::default();
        tracker.check(&config);

        config.radius += 1.0;
        assert!(tracker.check(&config));
        assert!(!tracker.check(&config));
    }

    #[test]
    fn test_every_tracked_field_is_compared() {
        let base = ArcConfig::default();
        let (_, snapshot) = have_parameters_changed(&base, None);

        let variants = [
            base.clone().with_radius(base.radius + 1.0),
            base.clone().with_y_offset(1.0),
            ArcConfig {
                compensate_radius: true,
                ..base.clone()
            },
            base.clone().with_arc_degrees(10.0),
            base.clone().with_angular_offset(0.0),
            base.clone().with_letter_spacing(LetterSpacing::MaxDegrees { degrees: 1 }),
            base.clone().with_letter_spacing(LetterSpacing::Fixed { multiplier: 1.0 }),
        ];

        for config in &variants {
            let (changed, _) = have_parameters_changed(config, Some(&snapshot));
            assert!(changed, "{config:?}");
        }
    }

    #[test]
    fn test_update_mode_is_not_tracked() {
        let base = ArcConfig::default();
        let (_, snapshot) = have_parameters_changed(&base, None);

        let config = base.with_update_mode(ArcUpdateMode::EveryFrame);
        let (changed, _) = have_parameters_changed(&config, Some(&snapshot));
        assert!(!changed);
    }

    #[test]
    fn test_float_comparison_has_no_epsilon() {
        let base = ArcConfig::new(1.0);
        let (_, snapshot) = have_parameters_changed(&base, None);

        let nudged = ArcConfig::new(f32::from_bits(1.0_f32.to_bits() + 1));
        assert!(have_parameters_changed(&nudged, Some(&snapshot)).0);
    }

    #[test]
    fn test_reset_forces_change() {
        let mut tracker = ArcChangeTracker::default();
        let config = ArcConfig::default();
        tracker.check(&config);
        tracker.reset();
        assert!(tracker.check(&config));
    }
}
