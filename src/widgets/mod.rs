//! Widget components for the tank level display.
//!
//! - [`gauge`]: the complete per-tank gauge (outline, scale, indicator,
//!   annotations, fill)
//! - [`primitives`]: shared low-level drawing utilities
//!
//! All drawing is generic over `DrawTarget<Color = Rgb565>`, so the same
//! widgets render into the simulator window, a cropped sub-region of it, or
//! a plain framebuffer in tests. Shape policy lives in [`crate::fill`];
//! colors and labels come from [`crate::zones`]. The widgets only place and
//! draw.

mod gauge;
mod primitives;

pub use gauge::{GaugeLayout, draw_tank_gauge};
