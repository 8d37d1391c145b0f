//! Application configuration constants.
//!
//! Layout calculations like `CELL_WIDTH * TANK_COUNT` are computed at compile
//! time as `const`, avoiding per-frame arithmetic. The gauge geometry values
//! are the fixed defaults for the tank widget; `GaugeLayout` derives the
//! per-canvas positions from them and the live canvas size.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Number of monitored tanks shown side by side.
pub const TANK_COUNT: u32 = 4;

/// Width of one tank gauge cell in pixels.
pub const CELL_WIDTH: u32 = 170;

/// Height of one tank gauge cell in pixels.
pub const CELL_HEIGHT: u32 = 260;

/// Simulator window width (one column per tank).
pub const SCREEN_WIDTH: u32 = CELL_WIDTH * TANK_COUNT;

/// Simulator window height.
pub const SCREEN_HEIGHT: u32 = CELL_HEIGHT;

// =============================================================================
// Tank Geometry
// =============================================================================

/// Width of the tank outline in pixels.
pub const TANK_WIDTH: u32 = 60;

/// Height of the tank outline in pixels. Represents 100% fill.
pub const TANK_HEIGHT: u32 = 100;

/// Height of each elliptical end cap of the stadium outline.
pub const TANK_CAP_HEIGHT: u32 = TANK_WIDTH / 2;

/// Horizontal shift of the tank left of canvas center, making room for the
/// zone scale and percentage text on the right.
pub const TANK_LEFT_OFFSET: i32 = 25;

// Caps must leave room for the body rectangle between them
const _: () = assert!(2 * TANK_CAP_HEIGHT < TANK_HEIGHT);

// =============================================================================
// Zone Scale and Level Indicator
// =============================================================================

/// Horizontal gap between the tank's right edge and the zone scale line.
pub const SCALE_GAP: i32 = 20;

/// Stroke width of each zone scale segment.
pub const SCALE_STROKE: u32 = 8;

/// Horizontal gap between the tank's right edge and the indicator marker.
pub const INDICATOR_GAP: i32 = 10;

/// Width of the level indicator marker.
pub const INDICATOR_WIDTH: u32 = 20;

/// Height of the level indicator marker.
pub const INDICATOR_HEIGHT: u32 = 5;

/// Percentage text offset right of the scale line.
pub const PERCENT_TEXT_GAP: i32 = 15;

/// X offset of the "0%" / "100%" scale labels from the scale line.
pub const SCALE_LABEL_DX: i32 = 3;

/// "0%" label baseline distance below the tank bottom.
pub const SCALE_MIN_LABEL_DROP: i32 = 25;

/// "100%" label baseline distance above the tank top.
pub const SCALE_MAX_LABEL_RAISE: i32 = 13;

// The indicator marker sits between the tank and the scale line
const _: () = assert!(INDICATOR_GAP < SCALE_GAP);

// =============================================================================
// Annotation Text Layout
// =============================================================================

/// X offset of the level/status lines from the tank's left edge.
pub const STATUS_TEXT_DX: i32 = -3;

/// "Tank Level={p}%" baseline distance above the tank top.
pub const LEVEL_TEXT_RAISE: i32 = 40;

/// Classification label baseline distance above the tank top.
pub const STATUS_TEXT_RAISE: i32 = 20;

/// Tank name x offset from the tank's left edge.
pub const NAME_TEXT_DX: i32 = 23;

/// Tank name baseline distance below the tank bottom.
pub const NAME_TEXT_DROP: i32 = 40;

/// Liquid label baseline distance below the tank bottom. The x position
/// additionally applies the per-liquid offset table in [`crate::liquids`].
pub const LIQUID_TEXT_DROP: i32 = 60;

/// Volume readout baseline distance below the tank bottom.
pub const VOLUME_TEXT_DROP: i32 = 75;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Interval between pressure source reads per tank.
pub const TICK_INTERVAL: Duration = Duration::from_secs(3);

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);
