// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Tank Level Monitoring System.
//!
//! Visualizes the liquid level of four storage tanks from periodic
//! hydrostatic-pressure readings. Each tank gauge shows:
//!
//! - a stadium-shaped tank outline with a geometrically banded liquid fill,
//! - a four-segment severity scale (critical red up to high green),
//! - a level indicator with the current percentage,
//! - the classification label, tank name, liquid type, and filled volume.
//!
//! A pressure sample converts to a level through the hydrostatic relation
//! `h = p / (rho * g)`; implausible samples (negative column, above the full
//! mark, sensor unavailable) are logged and dropped, and the gauge keeps
//! its last good reading.
//!
//! # Architecture
//!
//! ```text
//! timer tick (3 s) -> PressureSource::pressure(channel)
//!                  -> level::compute                      [reject -> retain]
//!                  -> TankState { pressure, fraction, volume }
//! paint            -> zones::classify + fill policy -> draw_tank_gauge
//! ```
//!
//! The tanks own no scheduling: this host loop drives `tick()` and repaints.
//! Simulator mode feeds a synthetic per-channel pressure signal; channel 3
//! is periodically overdriven past the full mark to show the retention
//! behavior (watch the log with `RUST_LOG=debug`).
//!
//! # Controls (Simulator Mode)
//!
//! | Key   | Action                                        |
//! |-------|-----------------------------------------------|
//! | `1-4` | Select a tank                                 |
//! | `L`   | Cycle the selected tank's liquid (form save)  |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.

mod colors;
mod config;
mod fill;
mod level;
mod liquids;
mod settings;
mod source;
mod styles;
mod tank;
mod widgets;
mod zones;

use std::thread;
use std::time::Instant;

use config::{CELL_HEIGHT, CELL_WIDTH, FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, TANK_COUNT, TICK_INTERVAL};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{info, warn};
use settings::SettingsForm;
use source::SimulatedPressureSource;
use tank::TankState;
use widgets::draw_tank_gauge;

fn main() {
    env_logger::init();

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Tank Level Monitoring System", &output_settings);

    let mut source = SimulatedPressureSource::new();
    let mut tanks: Vec<TankState> = (0..TANK_COUNT)
        .map(|i| TankState::new(format!("Tank {}", i + 1), i as u8))
        .collect();

    // Take one sample per tank immediately so the gauges start on live data
    // instead of sitting at EMPTY TANK until the first timer tick
    for tank in &mut tanks {
        tank.tick(&mut source).ok();
    }

    let mut selected = 0usize;
    let mut last_tick = Instant::now();

    draw_all_tanks(&mut display, &tanks);
    window.update(&display);
    info!("monitoring {} tanks, tick interval {:?}", tanks.len(), TICK_INTERVAL);

    loop {
        let frame_start = Instant::now();

        // Handle window events (close, key presses)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Num1 => select_tank(&mut selected, 0, &tanks),
                        Keycode::Num2 => select_tank(&mut selected, 1, &tanks),
                        Keycode::Num3 => select_tank(&mut selected, 2, &tanks),
                        Keycode::Num4 => select_tank(&mut selected, 3, &tanks),
                        // L: cycle the selected tank's liquid through a
                        // settings-form save, like the configuration dialog
                        Keycode::L => cycle_liquid(&mut tanks[selected], &mut source),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Periodic sample path: one source read per tank per interval.
        // Rejected or unavailable samples log inside tick() and the gauge
        // keeps its last good reading.
        if last_tick.elapsed() >= TICK_INTERVAL {
            last_tick = Instant::now();
            source.advance(TICK_INTERVAL.as_secs_f32());
            for tank in &mut tanks {
                tank.tick(&mut source).ok();
            }
        }

        draw_all_tanks(&mut display, &tanks);
        window.update(&display);

        // Sleep to maintain target frame rate (~50 FPS)
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

/// Draw every tank gauge into its cell of the display.
fn draw_all_tanks(
    display: &mut SimulatorDisplay<Rgb565>,
    tanks: &[TankState],
) {
    for (i, tank) in tanks.iter().enumerate() {
        let cell = Rectangle::new(
            Point::new(i as i32 * CELL_WIDTH as i32, 0),
            Size::new(CELL_WIDTH, CELL_HEIGHT),
        );
        let mut cell_target = display.cropped(&cell);
        draw_tank_gauge(&mut cell_target, tank);
    }
}

/// Switch the key-selected tank.
fn select_tank(
    selected: &mut usize,
    index: usize,
    tanks: &[TankState],
) {
    if index < tanks.len() {
        *selected = index;
        info!("selected {}", tanks[index].name);
    }
}

/// Advance the tank to the next liquid via a full settings-form save:
/// build the form strings, parse, apply, resample. Exercises the same path
/// a configuration dialog would.
fn cycle_liquid(
    tank: &mut TankState,
    source: &mut SimulatedPressureSource,
) {
    let form = SettingsForm {
        name: tank.name.clone(),
        liquid: tank.liquid.next().label().to_owned(),
        radius: tank.radius.to_string(),
        height: tank.height.to_string(),
    };
    match form.parse() {
        Ok(config) => {
            info!("{}: switching liquid to {}", tank.name, config.liquid.label());
            // A rejected resample already logged; the gauge retains its reading
            tank.apply_config(config, source).ok();
        }
        Err(err) => warn!("{}: settings rejected: {err}", tank.name),
    }
}
