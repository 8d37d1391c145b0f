//! Severity zone classification for fill fractions.
//!
//! A single constant table maps the fill fraction to one of four ordered
//! severity zones. The same table drives every color decision in the gauge
//! (scale segments, indicator marker, annotation text), so the label bands
//! and the rendered colors cannot drift apart.
//!
//! # Band Boundaries
//!
//! Bands are half-open below and closed only at the very top:
//!
//! | Fraction        | Zone     | Color  |
//! |-----------------|----------|--------|
//! | `[0.00, 0.25)`  | Critical | red    |
//! | `[0.25, 0.50)`  | Moderate | orange |
//! | `[0.50, 0.75)`  | Good     | yellow |
//! | `[0.75, 1.00]`  | High     | green  |
//!
//! So 0.25 is MODERATE, 0.75 is HIGH, and 1.0 stays in the high band.
//!
//! # Endpoint Labels
//!
//! An exactly empty tank reads "EMPTY TANK" (in the critical color) and an
//! exactly full tank reads "FULL TANK" (in the high color). These are label
//! special cases inside their bands, not extra bands.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{ZONE_GREEN, ZONE_ORANGE, ZONE_RED, ZONE_YELLOW};

/// One severity band over the fill fraction range.
///
/// Membership is `lower <= fraction < upper`, except the last band which is
/// closed at `upper` so that a full tank still classifies.
pub struct ColorZone {
    /// Inclusive lower bound of the band.
    pub lower: f32,
    /// Exclusive upper bound (inclusive for the last band).
    pub upper: f32,
    /// Label shown for interior fractions of the band.
    pub label: &'static str,
    /// Color used for every rendering of this band.
    pub color: Rgb565,
}

/// The four severity bands, ordered from empty to full.
pub const COLOR_ZONES: [ColorZone; 4] = [
    ColorZone {
        lower: 0.0,
        upper: 0.25,
        label: "CRITICAL",
        color: ZONE_RED,
    },
    ColorZone {
        lower: 0.25,
        upper: 0.5,
        label: "MODERATE",
        color: ZONE_ORANGE,
    },
    ColorZone {
        lower: 0.5,
        upper: 0.75,
        label: "GOOD",
        color: ZONE_YELLOW,
    },
    ColorZone {
        lower: 0.75,
        upper: 1.0,
        label: "HIGH",
        color: ZONE_GREEN,
    },
];

// Compile-time validation: bands must tile [0, 1] without gaps
const _: () = assert!(COLOR_ZONES[0].lower == 0.0);
const _: () = assert!(COLOR_ZONES[0].upper == COLOR_ZONES[1].lower);
const _: () = assert!(COLOR_ZONES[1].upper == COLOR_ZONES[2].lower);
const _: () = assert!(COLOR_ZONES[2].upper == COLOR_ZONES[3].lower);
const _: () = assert!(COLOR_ZONES[3].upper == 1.0);

/// Result of classifying a fill fraction: the display label (including the
/// EMPTY/FULL endpoint special cases) and the band color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Classification {
    pub label: &'static str,
    pub color: Rgb565,
}

/// Classify a fill fraction into its severity zone.
///
/// Total over all inputs: fractions outside `[0, 1]` are clamped into the
/// nearest band so a buggy caller cannot crash the paint path. `TankState`
/// keeps its fraction in range, so the clamp is unreachable in practice.
pub fn classify(fraction: f32) -> Classification {
    debug_assert!(
        (0.0..=1.0).contains(&fraction),
        "fill fraction {fraction} outside [0, 1]"
    );

    if fraction <= 0.0 {
        return Classification {
            label: "EMPTY TANK",
            color: COLOR_ZONES[0].color,
        };
    }
    if fraction >= 1.0 {
        return Classification {
            label: "FULL TANK",
            color: COLOR_ZONES[3].color,
        };
    }

    for zone in &COLOR_ZONES {
        if fraction >= zone.lower && fraction < zone.upper {
            return Classification {
                label: zone.label,
                color: zone.color,
            };
        }
    }

    // NaN falls through every comparison; treat it as critical
    Classification {
        label: COLOR_ZONES[0].label,
        color: COLOR_ZONES[0].color,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_bands_tile_unit_interval() {
        assert_eq!(COLOR_ZONES[0].lower, 0.0);
        for pair in COLOR_ZONES.windows(2) {
            assert_eq!(
                pair[0].upper, pair[1].lower,
                "zone bands must be contiguous"
            );
        }
        assert_eq!(COLOR_ZONES[3].upper, 1.0);
    }

    #[test]
    fn test_empty_tank_label() {
        let c = classify(0.0);
        assert_eq!(c.label, "EMPTY TANK");
        assert_eq!(c.color, ZONE_RED, "empty tank stays in the critical color");
    }

    #[test]
    fn test_full_tank_label() {
        let c = classify(1.0);
        assert_eq!(c.label, "FULL TANK");
        assert_eq!(c.color, ZONE_GREEN, "full tank stays in the high color");
    }

    #[test]
    fn test_interior_labels() {
        assert_eq!(classify(0.1).label, "CRITICAL");
        assert_eq!(classify(0.3).label, "MODERATE");
        assert_eq!(classify(0.6).label, "GOOD");
        assert_eq!(classify(0.9).label, "HIGH");
    }

    #[test]
    fn test_boundaries_are_half_open() {
        // 0.24999 is still critical, 0.25 belongs to the next band
        assert_eq!(classify(0.24999).label, "CRITICAL");
        assert_eq!(classify(0.25).label, "MODERATE");
        assert_eq!(classify(0.49999).label, "MODERATE");
        assert_eq!(classify(0.5).label, "GOOD");
        assert_eq!(classify(0.74999).label, "GOOD");
        assert_eq!(classify(0.75).label, "HIGH");
    }

    #[test]
    fn test_high_band_closed_at_top() {
        // 0.75 and 1.0 share the high band color even though the labels differ
        assert_eq!(classify(0.75).color, classify(1.0).color);
        assert_eq!(classify(0.75).label, "HIGH");
        assert_eq!(classify(1.0).label, "FULL TANK");
    }

    #[test]
    fn test_endpoint_labels_share_band_colors() {
        assert_eq!(classify(0.0).color, classify(0.1).color);
        assert_eq!(classify(1.0).color, classify(0.9).color);
    }
}
