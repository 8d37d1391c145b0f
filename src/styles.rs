//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle` construction is `const` in embedded-graphics 0.8, so every
//! fixed-color style used by the gauge is computed at compile time. Zone-colored
//! text (the level line, classification label, percentage marker, and volume
//! readout) changes color with the classification, so those styles are built
//! at draw time from the exposed font references with just the color varying.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
};
use profont::{PROFONT_9_POINT, PROFONT_10_POINT};

use crate::colors::TEXT_LIGHT;

// =============================================================================
// Font References (for dynamic zone-colored styles)
// =============================================================================

/// Font for the "Tank Level={p}%" line and the classification label.
/// Usage: `MonoTextStyle::new(STATUS_FONT, zone_color)`
pub const STATUS_FONT: &MonoFont = &PROFONT_10_POINT;

/// Font for the volume readout and the indicator percentage marker.
/// Usage: `MonoTextStyle::new(DETAIL_FONT, zone_color)`
pub const DETAIL_FONT: &MonoFont = &PROFONT_9_POINT;

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Small light text for the "0%" / "100%" scale endpoint labels.
pub const SCALE_LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, TEXT_LIGHT);

/// Light text for the tank name below the gauge.
pub const NAME_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_10_POINT, TEXT_LIGHT);

/// Slightly smaller light text for the liquid label below the tank name.
pub const LIQUID_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_9_POINT, TEXT_LIGHT);
