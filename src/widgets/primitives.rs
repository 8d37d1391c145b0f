//! Low-level drawing primitives shared across the gauge.
//!
//! These are thin, generic wrappers over embedded-graphics primitives. The
//! geometry they draw is computed by [`crate::fill`]; nothing here decides
//! shape or color. Draw-target errors are swallowed with `.ok()` - a failed
//! primitive leaves a visual glitch for one frame, which the next repaint
//! corrects.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Ellipse, PrimitiveStyle, Rectangle};

use crate::fill::StadiumParts;

/// Fill the ellipse inscribed in `rect`.
///
/// A zero-width or zero-height rectangle draws nothing, which is how the
/// fill geometry degenerates at very small fractions.
pub fn fill_ellipse<D>(
    display: &mut D,
    rect: Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Ellipse::new(rect.top_left, rect.size)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Fill a rectangle.
pub fn fill_rect<D>(
    display: &mut D,
    rect: Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    rect.into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw a three-piece stadium: top cap, body, bottom cap.
///
/// Used for both the tank outline and the filled region; the caller supplies
/// the decomposition from [`crate::fill::stadium_parts`].
pub fn draw_stadium<D>(
    display: &mut D,
    parts: &StadiumParts,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_ellipse(display, parts.top_cap, color);
    fill_rect(display, parts.body, color);
    fill_ellipse(display, parts.bottom_cap, color);
}
