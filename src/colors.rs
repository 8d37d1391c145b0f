//! Color constants for the tank level monitor.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! The zone and chrome colors below are the monitor's fixed palette,
//! quantized from their 24-bit values by dropping the low bits
//! (`r >> 3`, `g >> 2`, `b >> 3`).

use embedded_graphics::pixelcolor::Rgb565;

// =============================================================================
// Zone Colors
// =============================================================================

/// Critical zone red (#BA1301). Fill fraction below 25%.
pub const ZONE_RED: Rgb565 = Rgb565::new(23, 4, 0);

/// Moderate zone orange (#E4670B). Fill fraction 25-50%.
pub const ZONE_ORANGE: Rgb565 = Rgb565::new(28, 25, 1);

/// Good zone yellow (#EBA104). Fill fraction 50-75%.
pub const ZONE_YELLOW: Rgb565 = Rgb565::new(29, 40, 0);

/// High zone green (#94C816). Fill fraction 75-100%.
pub const ZONE_GREEN: Rgb565 = Rgb565::new(18, 50, 2);

// =============================================================================
// Gauge Chrome Colors
// =============================================================================

/// Deep navy widget background (#040C24).
pub const BACKGROUND: Rgb565 = Rgb565::new(0, 3, 4);

/// Light gray tank shell and liquid fill (165, 165, 165).
pub const TANK_SHELL: Rgb565 = Rgb565::new(20, 41, 20);

/// Pale blue annotation text (#C2DDE4). Used for the scale labels,
/// tank name, and liquid label.
pub const TEXT_LIGHT: Rgb565 = Rgb565::new(24, 55, 28);
