//! Hydrostatic level computation.
//!
//! Converts a raw pressure sample into liquid height, filled volume, and a
//! normalized fill fraction for a vertical cylindrical tank:
//!
//! ```text
//! liquid_height = pressure / (density * g)
//! volume        = pi * radius^2 * liquid_height
//! capacity      = pi * radius^2 * height
//! fraction      = volume / capacity
//! ```
//!
//! A sample is accepted only when the implied volume lies inside the tank's
//! physical capacity `[0, capacity]`. Anything else - negative pressure, a
//! reading above the full mark, or a non-physical tank description - is a
//! rejection, and the caller must keep its previous state unchanged. Readings
//! are never clamped into range: an implausible sample carries no information
//! about the actual level.

use std::f32::consts::PI;

use thiserror::Error;

/// Standard gravity in m/s^2.
pub const GRAVITY: f32 = 9.81;

/// An accepted level computation result.
///
/// `fraction` and `volume` always describe the same sample; committing them
/// together is what keeps a `TankState` internally consistent.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LevelReading {
    /// Height of the liquid column in meters.
    pub liquid_height: f32,
    /// Filled volume in cubic meters.
    pub volume: f32,
    /// Normalized fill level, 0.0 (empty) to 1.0 (full).
    pub fraction: f32,
}

/// Why a pressure sample did not produce a level reading.
#[derive(Error, Clone, Copy, PartialEq, Debug)]
pub enum LevelError {
    /// The implied volume falls outside the tank's physical capacity.
    /// The previous reading stays on display.
    #[error("implied volume {volume:.3} m3 outside tank capacity [0, {capacity:.3}] m3")]
    RejectedSample { volume: f32, capacity: f32 },

    /// The tank description itself is non-physical, so no volume can be
    /// attributed to the sample at all.
    #[error("non-physical tank: density {density}, radius {radius}, height {height} must all be positive")]
    NonPhysicalTank {
        density: f32,
        radius: f32,
        height: f32,
    },
}

/// Compute the level reading implied by one pressure sample.
///
/// # Parameters
/// - `pressure`: raw sensor reading, unit-consistent with `density * g`
/// - `density`: fluid density, must be positive
/// - `radius`: tank cross-section radius in meters, must be positive
/// - `height`: tank height in meters, must be positive
///
/// # Errors
/// [`LevelError::NonPhysicalTank`] when any of density/radius/height is not
/// positive (this also guards the division by `density * g`), and
/// [`LevelError::RejectedSample`] when the implied volume escapes
/// `[0, capacity]`.
pub fn compute(
    pressure: f32,
    density: f32,
    radius: f32,
    height: f32,
) -> Result<LevelReading, LevelError> {
    if !(density > 0.0) || !(radius > 0.0) || !(height > 0.0) {
        return Err(LevelError::NonPhysicalTank {
            density,
            radius,
            height,
        });
    }

    let liquid_height = pressure / (density * GRAVITY);
    let base_area = PI * radius * radius;
    let capacity = base_area * height;
    let volume = base_area * liquid_height;

    if !(0.0..=capacity).contains(&volume) {
        return Err(LevelError::RejectedSample { volume, capacity });
    }

    Ok(LevelReading {
        liquid_height,
        volume,
        fraction: volume / capacity,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    // Default tank from the settings form: gasoline at 0.74, 1 m radius, 3 m tall
    const DENSITY: f32 = 0.74;
    const RADIUS: f32 = 1.0;
    const HEIGHT: f32 = 3.0;

    /// Pressure that puts the liquid column exactly at the full mark.
    fn full_pressure() -> f32 {
        DENSITY * GRAVITY * HEIGHT
    }

    #[test]
    fn test_zero_pressure_is_empty() {
        let reading = compute(0.0, DENSITY, RADIUS, HEIGHT).expect("zero pressure is a valid sample");
        assert_eq!(reading.liquid_height, 0.0);
        assert_eq!(reading.volume, 0.0);
        assert_eq!(reading.fraction, 0.0);
    }

    #[test]
    fn test_near_full_pressure_is_near_full() {
        // Just under the full mark; the exact mark is float-rounding territory
        // and the model deliberately refuses to clamp
        let reading =
            compute(full_pressure() * 0.999, DENSITY, RADIUS, HEIGHT).expect("just under full mark is valid");
        assert_relative_eq!(reading.liquid_height, HEIGHT * 0.999, max_relative = 1e-5);
        assert_relative_eq!(reading.fraction, 0.999, max_relative = 1e-5);
        assert_relative_eq!(reading.volume, PI * HEIGHT * 0.999, max_relative = 1e-5);
    }

    #[test]
    fn test_fraction_is_volume_over_capacity() {
        // Half the full-mark pressure puts the column at half height
        let reading = compute(full_pressure() / 2.0, DENSITY, RADIUS, HEIGHT).expect("half mark is valid");
        let capacity = PI * RADIUS * RADIUS * HEIGHT;
        assert_relative_eq!(reading.fraction, reading.volume / capacity, max_relative = 1e-6);
        assert_relative_eq!(reading.fraction, 0.5, max_relative = 1e-6);
    }

    #[test]
    fn test_fraction_stays_in_unit_range() {
        for step in 0..20 {
            let pressure = full_pressure() * step as f32 / 20.0;
            let reading = compute(pressure, DENSITY, RADIUS, HEIGHT).expect("in-range pressure");
            assert!(
                (0.0..=1.0).contains(&reading.fraction),
                "fraction {} escaped [0, 1] at pressure {}",
                reading.fraction,
                pressure
            );
        }
    }

    #[test]
    fn test_negative_pressure_rejected() {
        let err = compute(-1.0, DENSITY, RADIUS, HEIGHT).unwrap_err();
        assert!(
            matches!(err, LevelError::RejectedSample { volume, .. } if volume < 0.0),
            "negative pressure implies negative volume: {err}"
        );
    }

    #[test]
    fn test_overfull_pressure_rejected() {
        let err = compute(full_pressure() * 1.5, DENSITY, RADIUS, HEIGHT).unwrap_err();
        assert!(matches!(err, LevelError::RejectedSample { .. }), "got {err}");
    }

    #[test]
    fn test_non_positive_density_rejected() {
        assert!(matches!(
            compute(10.0, 0.0, RADIUS, HEIGHT),
            Err(LevelError::NonPhysicalTank { .. })
        ));
        assert!(matches!(
            compute(10.0, -0.74, RADIUS, HEIGHT),
            Err(LevelError::NonPhysicalTank { .. })
        ));
    }

    #[test]
    fn test_non_positive_geometry_rejected() {
        assert!(matches!(
            compute(10.0, DENSITY, 0.0, HEIGHT),
            Err(LevelError::NonPhysicalTank { .. })
        ));
        assert!(matches!(
            compute(10.0, DENSITY, RADIUS, 0.0),
            Err(LevelError::NonPhysicalTank { .. })
        ));
        assert!(matches!(
            compute(10.0, DENSITY, RADIUS, -3.0),
            Err(LevelError::NonPhysicalTank { .. })
        ));
    }

    #[test]
    fn test_nan_density_rejected() {
        // NaN fails the positivity check rather than poisoning the reading
        assert!(matches!(
            compute(10.0, f32::NAN, RADIUS, HEIGHT),
            Err(LevelError::NonPhysicalTank { .. })
        ));
    }

    #[test]
    fn test_default_tank_full_mark_pressure() {
        // 0.74 * 9.81 * 3 = 21.78 is the full-mark pressure for the default tank
        assert_relative_eq!(full_pressure(), 21.778, max_relative = 1e-3);
        let reading = compute(21.77, DENSITY, RADIUS, HEIGHT).expect("just under the full-mark pressure");
        assert_relative_eq!(reading.fraction, 1.0, max_relative = 1e-3);
    }
}
