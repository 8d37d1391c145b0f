//! Per-tank mutable state and its two update paths.
//!
//! One [`TankState`] exists per monitored tank. It changes through exactly
//! two entry points, both driven by the host's single-threaded event loop:
//!
//! - [`TankState::tick`]: the periodic sample path - read the pressure
//!   source, run the level model, commit on acceptance;
//! - [`TankState::apply_config`]: the settings-form save path - commit the
//!   validated configuration, then synchronously take one sample.
//!
//! The derived pair `fill_fraction`/`volume` is only ever written together
//! with the `pressure` that produced it. A rejected or unavailable sample
//! leaves all three untouched, so the gauge keeps showing the last good
//! reading instead of blanking or clamping.

use log::{debug, warn};
use thiserror::Error;

use crate::level::{self, LevelError, LevelReading};
use crate::liquids::Liquid;
use crate::settings::TankConfig;
use crate::source::{PressureSource, SourceUnavailable};

/// Why a tick produced no new reading. Either way the previous state stays
/// on display.
#[derive(Error, Clone, Copy, PartialEq, Debug)]
pub enum TickError {
    #[error(transparent)]
    Source(#[from] SourceUnavailable),
    #[error(transparent)]
    Level(#[from] LevelError),
}

/// Live state of one monitored tank.
pub struct TankState {
    /// Display name, editable through the settings form.
    pub name: String,
    /// Configured liquid; supplies the density and display label.
    pub liquid: Liquid,
    /// Fluid density used by the level model.
    pub density: f32,
    /// Tank cross-section radius in meters.
    pub radius: f32,
    /// Tank height in meters; defines the 100% mark.
    pub height: f32,
    /// Pressure-source channel this tank reads from.
    pub channel: u8,

    /// Last accepted raw pressure reading.
    pressure: f32,
    /// Normalized fill level in [0, 1], derived from `pressure`.
    fill_fraction: f32,
    /// Filled volume in cubic meters, derived from the same sample.
    volume: f32,
}

impl TankState {
    /// Create a tank with the form defaults: unleaded gasoline in a
    /// 1 m radius, 3 m tall cylinder, reading as empty until the first
    /// accepted sample.
    pub fn new(
        name: impl Into<String>,
        channel: u8,
    ) -> Self {
        let liquid = Liquid::default();
        Self {
            name: name.into(),
            liquid,
            density: liquid.density(),
            radius: 1.0,
            height: 3.0,
            channel,
            pressure: 0.0,
            fill_fraction: 0.0,
            volume: 0.0,
        }
    }

    /// Last accepted raw pressure reading.
    #[allow(dead_code)] // Available for hosts that display the raw reading
    pub const fn pressure(&self) -> f32 {
        self.pressure
    }

    /// Normalized fill level, 0.0 (empty) to 1.0 (full).
    pub const fn fill_fraction(&self) -> f32 {
        self.fill_fraction
    }

    /// Filled volume in cubic meters.
    pub const fn volume(&self) -> f32 {
        self.volume
    }

    /// One externally scheduled update: read the source, run the level
    /// model, and commit the reading if it is physically plausible.
    ///
    /// # Errors
    /// [`TickError`] when the source has no reading or the sample was
    /// rejected. State is untouched in both cases; the caller may ignore
    /// the error and keep displaying the retained reading.
    pub fn tick(&mut self, source: &mut dyn PressureSource) -> Result<LevelReading, TickError> {
        let pressure = source.pressure(self.channel).inspect_err(|err| {
            warn!("{}: {err}, keeping last reading", self.name);
        })?;
        let reading = self.apply_sample(pressure).inspect_err(|err| {
            warn!("{}: {err}, keeping last reading", self.name);
        })?;
        debug!(
            "{}: pressure {pressure:.2} -> column {:.2} m, {:.1}% ({:.2} m3)",
            self.name,
            reading.liquid_height,
            reading.fraction * 100.0,
            reading.volume
        );
        Ok(reading)
    }

    /// Apply a validated settings-form save, then synchronously take one
    /// sample so the gauge reflects the new geometry immediately.
    ///
    /// The configuration itself always commits; only the follow-up sample
    /// can fail, in which case the previously displayed reading is retained
    /// (it may now disagree with the new geometry until the next accepted
    /// tick - the same window the periodic path already tolerates).
    pub fn apply_config(
        &mut self,
        config: TankConfig,
        source: &mut dyn PressureSource,
    ) -> Result<LevelReading, TickError> {
        self.name = config.name;
        self.liquid = config.liquid;
        self.density = config.liquid.density();
        self.radius = config.radius;
        self.height = config.height;
        self.tick(source)
    }

    /// Run one pressure sample through the level model and commit the
    /// derived pair together with the pressure that produced it.
    fn apply_sample(&mut self, pressure: f32) -> Result<LevelReading, LevelError> {
        let reading = level::compute(pressure, self.density, self.radius, self.height)?;
        self.pressure = pressure;
        self.fill_fraction = reading.fraction;
        self.volume = reading.volume;
        Ok(reading)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::level::GRAVITY;
    use crate::settings::SettingsForm;

    /// Test source returning a scripted sequence of readings.
    struct ScriptedSource {
        readings: Vec<Result<f32, SourceUnavailable>>,
        next: usize,
    }

    impl ScriptedSource {
        fn new(readings: Vec<Result<f32, SourceUnavailable>>) -> Self {
            Self { readings, next: 0 }
        }
    }

    impl PressureSource for ScriptedSource {
        fn pressure(&mut self, channel: u8) -> Result<f32, SourceUnavailable> {
            let reading = self.readings.get(self.next).copied();
            self.next += 1;
            reading.unwrap_or(Err(SourceUnavailable { channel }))
        }
    }

    /// Pressure putting the default tank (0.74 density, 3 m) at `fraction`.
    fn pressure_for(fraction: f32) -> f32 {
        0.74 * GRAVITY * 3.0 * fraction
    }

    #[test]
    fn test_new_tank_reads_empty() {
        let tank = TankState::new("Tank 1", 0);
        assert_eq!(tank.fill_fraction(), 0.0);
        assert_eq!(tank.volume(), 0.0);
        assert_eq!(tank.pressure(), 0.0);
        assert_eq!(tank.density, 0.74);
        assert_eq!(tank.radius, 1.0);
        assert_eq!(tank.height, 3.0);
    }

    #[test]
    fn test_accepted_tick_commits_all_three_fields() {
        let mut tank = TankState::new("Tank 1", 0);
        let mut source = ScriptedSource::new(vec![Ok(pressure_for(0.5))]);

        let reading = tank.tick(&mut source).expect("plausible sample accepted");
        assert_relative_eq!(reading.fraction, 0.5, max_relative = 1e-6);
        assert_relative_eq!(tank.fill_fraction(), 0.5, max_relative = 1e-6);
        assert_relative_eq!(tank.volume(), reading.volume, max_relative = 1e-6);
        assert_relative_eq!(tank.pressure(), pressure_for(0.5), max_relative = 1e-6);
    }

    #[test]
    fn test_implausible_tick_retains_previous_state() {
        let mut tank = TankState::new("Tank 1", 0);
        let mut source = ScriptedSource::new(vec![
            Ok(pressure_for(0.5)),
            Ok(pressure_for(2.0)), // over capacity
        ]);

        tank.tick(&mut source).expect("first sample accepted");
        let (fraction, volume, pressure) = (tank.fill_fraction(), tank.volume(), tank.pressure());

        let err = tank.tick(&mut source).expect_err("second sample rejected");
        assert!(matches!(err, TickError::Level(LevelError::RejectedSample { .. })));
        assert_eq!(tank.fill_fraction(), fraction, "fraction must not change");
        assert_eq!(tank.volume(), volume, "volume must not change");
        assert_eq!(tank.pressure(), pressure, "pressure must not change");
    }

    #[test]
    fn test_negative_pressure_retains_previous_state() {
        let mut tank = TankState::new("Tank 1", 0);
        let mut source = ScriptedSource::new(vec![Ok(pressure_for(0.25)), Ok(-4.0)]);

        tank.tick(&mut source).expect("first sample accepted");
        let fraction = tank.fill_fraction();

        assert!(tank.tick(&mut source).is_err());
        assert_eq!(tank.fill_fraction(), fraction);
    }

    #[test]
    fn test_unavailable_source_retains_previous_state() {
        let mut tank = TankState::new("Tank 1", 7);
        let mut source = ScriptedSource::new(vec![Ok(pressure_for(0.75))]);
        tank.tick(&mut source).expect("first sample accepted");
        let (fraction, volume) = (tank.fill_fraction(), tank.volume());

        // Source script exhausted: next tick reports SourceUnavailable
        let err = tank.tick(&mut source).expect_err("source exhausted");
        assert!(matches!(
            err,
            TickError::Source(SourceUnavailable { channel: 7 })
        ));
        assert_eq!(tank.fill_fraction(), fraction);
        assert_eq!(tank.volume(), volume);
    }

    #[test]
    fn test_apply_config_commits_and_resamples() {
        let mut tank = TankState::new("Tank 1", 0);
        let mut source = ScriptedSource::new(vec![Ok(0.51 * GRAVITY * 2.0)]); // full for the new tank

        let config = SettingsForm {
            name: "Reserve".to_owned(),
            liquid: "GPL".to_owned(),
            radius: "2".to_owned(),
            height: "2".to_owned(),
        }
        .parse()
        .expect("valid form");

        let reading = tank
            .apply_config(config, &mut source)
            .expect("resample against new geometry accepted");
        assert_eq!(tank.name, "Reserve");
        assert_eq!(tank.liquid, Liquid::Gpl);
        assert_eq!(tank.density, 0.51);
        assert_eq!(tank.radius, 2.0);
        assert_eq!(tank.height, 2.0);
        assert_relative_eq!(reading.fraction, 1.0, max_relative = 1e-5);
    }

    #[test]
    fn test_apply_config_keeps_reading_when_resample_rejected() {
        let mut tank = TankState::new("Tank 1", 0);
        let mut source = ScriptedSource::new(vec![
            Ok(pressure_for(0.5)),
            Ok(pressure_for(0.9)), // over capacity once the tank shrinks
        ]);
        tank.tick(&mut source).expect("first sample accepted");
        let volume = tank.volume();

        let config = SettingsForm {
            name: "Tank 1".to_owned(),
            liquid: "Essence Sans Plomb".to_owned(),
            radius: "1".to_owned(),
            height: "1".to_owned(), // a third of the old height
        }
        .parse()
        .expect("valid form");

        let err = tank
            .apply_config(config, &mut source)
            .expect_err("old-height reading exceeds the shrunken capacity");
        assert!(matches!(err, TickError::Level(LevelError::RejectedSample { .. })));

        // Geometry committed, displayed reading retained
        assert_eq!(tank.height, 1.0, "configuration itself must commit");
        assert_eq!(tank.volume(), volume, "displayed reading is retained");
    }
}
