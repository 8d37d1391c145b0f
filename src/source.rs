//! Pressure source abstraction and the simulator's synthetic source.
//!
//! The monitor core never talks to sensor hardware directly: it reads
//! through [`PressureSource`], one scalar per channel per tick. A source
//! that cannot produce a reading reports [`SourceUnavailable`], which the
//! tick path treats exactly like an implausible sample - the tank keeps
//! displaying its last good state.

use thiserror::Error;

/// The pressure source could not produce a reading for a channel.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
#[error("pressure source has no reading for channel {channel}")]
pub struct SourceUnavailable {
    pub channel: u8,
}

/// A device yielding one hydrostatic pressure reading per channel.
///
/// Units must be consistent with the `density * g` term of the level model.
/// Implementations may be fallible; failure carries no partial reading.
pub trait PressureSource {
    /// Read the current pressure on `channel`.
    fn pressure(&mut self, channel: u8) -> Result<f32, SourceUnavailable>;
}

// =============================================================================
// Simulated Source
// =============================================================================

/// Synthetic pressure generator for the simulator binary.
///
/// Each channel follows a slow sinusoid between empty and the full mark of
/// the default tank (density 0.74, height 3 m), phase-shifted per channel so
/// the four gauges move independently. The last channel periodically
/// overshoots the full mark, which the level model rejects - the gauge
/// freezes at its last good reading, demonstrating the retention behavior.
pub struct SimulatedPressureSource {
    /// Signal time parameter; advanced by the host between ticks.
    t: f32,
}

/// Full-mark pressure of the default tank: density 0.74 * g * 3 m.
const FULL_MARK: f32 = 0.74 * crate::level::GRAVITY * 3.0;

/// How far past the full mark the overdriven channel peaks.
const OVERDRIVE: f32 = 1.4;

/// Channel that periodically produces out-of-range readings.
const OVERDRIVEN_CHANNEL: u8 = 3;

impl SimulatedPressureSource {
    pub const fn new() -> Self {
        Self { t: 0.0 }
    }

    /// Advance the signal clock by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.t += dt;
    }

    /// Sinusoid between `min` and `max` at `freq` cycles per time unit.
    fn signal(
        &self,
        min: f32,
        max: f32,
        freq: f32,
        phase: f32,
    ) -> f32 {
        let normalized = ((self.t * freq + phase).sin() + 1.0) * 0.5;
        min + normalized * (max - min)
    }
}

impl Default for SimulatedPressureSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PressureSource for SimulatedPressureSource {
    fn pressure(&mut self, channel: u8) -> Result<f32, SourceUnavailable> {
        // Phase-shift channels a quarter cycle apart; slow drift so the
        // 3-second tick cadence shows visible but gradual movement
        let phase = f32::from(channel) * core::f32::consts::FRAC_PI_2;
        let max = if channel == OVERDRIVEN_CHANNEL {
            FULL_MARK * OVERDRIVE
        } else {
            FULL_MARK
        };
        Ok(self.signal(0.0, max, 0.05, phase))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_stays_in_range() {
        let mut source = SimulatedPressureSource::new();
        for _ in 0..200 {
            source.advance(3.0);
            let p = source.pressure(0).expect("simulated source is infallible");
            assert!(
                (0.0..=FULL_MARK * 1.001).contains(&p),
                "channel 0 reading {p} escaped its range"
            );
        }
    }

    #[test]
    fn test_overdriven_channel_exceeds_full_mark() {
        let mut source = SimulatedPressureSource::new();
        let mut peak = 0.0f32;
        for _ in 0..200 {
            source.advance(3.0);
            peak = peak.max(source.pressure(OVERDRIVEN_CHANNEL).unwrap());
        }
        assert!(
            peak > FULL_MARK,
            "overdriven channel should cross the full mark (peak {peak}, full mark {FULL_MARK})"
        );
    }

    #[test]
    fn test_channels_are_phase_shifted() {
        let mut source = SimulatedPressureSource::new();
        source.advance(10.0);
        let a = source.pressure(0).unwrap();
        let b = source.pressure(1).unwrap();
        assert!((a - b).abs() > f32::EPSILON, "adjacent channels should differ");
    }
}
