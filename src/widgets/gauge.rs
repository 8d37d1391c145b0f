//! The tank gauge widget.
//!
//! [`draw_tank_gauge`] renders one tank's complete gauge into any draw
//! target: background, stadium outline, four-segment zone scale, level
//! indicator with percentage, the zone-colored annotations, and the filled
//! region selected by the fill policy. Rendering is a pure function of the
//! tank state and the target's size - the same state always produces the
//! same pixels.
//!
//! # Layout
//!
//! ```text
//!   Tank Level=42%          <- zone-colored status lines
//!   MODERATE
//!        ___        100%
//!       /   \        |      <- zone scale (4 segments)
//!      |     |       |
//!      |~~~~~|  <-- 42%     <- indicator marker + percentage
//!      |#####|       |
//!       \___/        |
//!                   0%
//!        Tank 1             <- name, liquid, volume
//!     Essence Sans Plomb
//!     Volume: 3.96 m3
//! ```
//!
//! The tank sits left of the canvas center to make room for the scale and
//! the percentage text; everything else hangs off the tank rectangle.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;

use crate::{
    colors::{BACKGROUND, TANK_SHELL},
    config::{
        INDICATOR_GAP, INDICATOR_HEIGHT, INDICATOR_WIDTH, LEVEL_TEXT_RAISE, LIQUID_TEXT_DROP, NAME_TEXT_DROP,
        NAME_TEXT_DX, PERCENT_TEXT_GAP, SCALE_GAP, SCALE_LABEL_DX, SCALE_MAX_LABEL_RAISE, SCALE_MIN_LABEL_DROP,
        SCALE_STROKE, STATUS_TEXT_DX, STATUS_TEXT_RAISE, TANK_CAP_HEIGHT, TANK_HEIGHT, TANK_LEFT_OFFSET, TANK_WIDTH,
        VOLUME_TEXT_DROP,
    },
    fill::{FillGeometry, fill_geometry, stadium_parts},
    styles::{DETAIL_FONT, LIQUID_STYLE, NAME_STYLE, SCALE_LABEL_STYLE, STATUS_FONT},
    tank::TankState,
    widgets::primitives::{draw_stadium, fill_ellipse, fill_rect},
    zones::{COLOR_ZONES, Classification, classify},
};

// =============================================================================
// Layout
// =============================================================================

/// Positions of the gauge elements for one canvas size.
///
/// Derived once per draw call from the target's bounding box; everything is
/// anchored to the tank rectangle.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GaugeLayout {
    /// The tank outline rectangle.
    pub tank: Rectangle,
    /// X of the zone scale line.
    pub scale_x: i32,
    /// X of the level indicator marker's left edge.
    pub indicator_x: i32,
}

impl GaugeLayout {
    /// Compute the layout for a canvas of `size`.
    pub fn for_canvas(size: Size) -> Self {
        let tank_x = (size.width as i32 - TANK_WIDTH as i32) / 2 - TANK_LEFT_OFFSET;
        let tank_y = (size.height as i32 - TANK_HEIGHT as i32) / 2;
        let tank_right = tank_x + TANK_WIDTH as i32;

        Self {
            tank: Rectangle::new(Point::new(tank_x, tank_y), Size::new(TANK_WIDTH, TANK_HEIGHT)),
            scale_x: tank_right + SCALE_GAP,
            indicator_x: tank_right + INDICATOR_GAP,
        }
    }

    /// Y coordinate of the tank's bottom edge.
    pub fn tank_bottom(&self) -> i32 {
        self.tank.top_left.y + self.tank.size.height as i32
    }

    /// Y coordinate of the level line for a fill fraction: the tank top for
    /// a full tank, the tank bottom for an empty one.
    pub fn level_y(&self, fraction: f32) -> i32 {
        self.tank.top_left.y + (self.tank.size.height as f32 * (1.0 - fraction)) as i32
    }
}

// =============================================================================
// Gauge Rendering
// =============================================================================

/// Draw one tank's gauge over the full canvas of `display`.
///
/// Pure with respect to `state`: no side effects beyond drawing. Queries
/// only the target's current bounding-box size, so the same widget renders
/// correctly into a window, a cropped sub-region, or a test framebuffer.
pub fn draw_tank_gauge<D>(
    display: &mut D,
    state: &TankState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let canvas = display.bounding_box();
    let layout = GaugeLayout::for_canvas(canvas.size);
    let zone = classify(state.fill_fraction());

    fill_rect(display, canvas, BACKGROUND);

    // Tank outline: solid light-gray stadium, liquid drawn over it in the
    // zone color
    draw_stadium(
        display,
        &stadium_parts(layout.tank.top_left, layout.tank.size, TANK_CAP_HEIGHT),
        TANK_SHELL,
    );
    draw_fill(display, &layout, state.fill_fraction(), zone.color);

    draw_zone_scale(display, &layout);
    draw_level_indicator(display, &layout, state.fill_fraction(), zone);
    draw_annotations(display, &layout, state, zone);
}

/// Draw the filled region for the current fraction in the zone color.
fn draw_fill<D>(
    display: &mut D,
    layout: &GaugeLayout,
    fraction: f32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match fill_geometry(fraction, layout.tank, TANK_CAP_HEIGHT) {
        FillGeometry::Empty => {}
        FillGeometry::Ellipse(rect) => fill_ellipse(display, rect, color),
        FillGeometry::Stadium(parts) => draw_stadium(display, &parts, color),
    }
}

/// Draw the four-segment zone scale beside the tank, high zone at the top,
/// with its "0%" / "100%" endpoint labels.
fn draw_zone_scale<D>(
    display: &mut D,
    layout: &GaugeLayout,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for zone in &COLOR_ZONES {
        // Fill fraction grows upward, screen y grows downward
        let top = layout.level_y(zone.upper);
        let bottom = layout.level_y(zone.lower);
        Line::new(Point::new(layout.scale_x, top), Point::new(layout.scale_x, bottom))
            .into_styled(PrimitiveStyle::with_stroke(zone.color, SCALE_STROKE))
            .draw(display)
            .ok();
    }

    let label_x = layout.scale_x + SCALE_LABEL_DX;
    Text::new(
        "0%",
        Point::new(label_x, layout.tank_bottom() + SCALE_MIN_LABEL_DROP),
        SCALE_LABEL_STYLE,
    )
    .draw(display)
    .ok();
    Text::new(
        "100%",
        Point::new(label_x, layout.tank.top_left.y - SCALE_MAX_LABEL_RAISE),
        SCALE_LABEL_STYLE,
    )
    .draw(display)
    .ok();
}

/// Draw the level marker at the current fraction with its percentage text.
fn draw_level_indicator<D>(
    display: &mut D,
    layout: &GaugeLayout,
    fraction: f32,
    zone: Classification,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let level_y = layout.level_y(fraction);
    fill_rect(
        display,
        Rectangle::new(
            Point::new(layout.indicator_x, level_y - INDICATOR_HEIGHT as i32 / 2),
            Size::new(INDICATOR_WIDTH, INDICATOR_HEIGHT),
        ),
        zone.color,
    );

    let mut percent: String<8> = String::new();
    let _ = write!(percent, "{}%", (fraction * 100.0) as i32);
    Text::new(
        &percent,
        Point::new(
            layout.scale_x + PERCENT_TEXT_GAP,
            level_y - INDICATOR_HEIGHT as i32 / 2,
        ),
        MonoTextStyle::new(DETAIL_FONT, zone.color),
    )
    .draw(display)
    .ok();
}

/// Draw the status lines above the tank and the name/liquid/volume block
/// below it.
fn draw_annotations<D>(
    display: &mut D,
    layout: &GaugeLayout,
    state: &TankState,
    zone: Classification,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let tank_x = layout.tank.top_left.x;
    let tank_y = layout.tank.top_left.y;
    let status_style = MonoTextStyle::new(STATUS_FONT, zone.color);

    let mut level_line: String<24> = String::new();
    let _ = write!(level_line, "Tank Level={}%", (state.fill_fraction() * 100.0) as i32);
    Text::new(
        &level_line,
        Point::new(tank_x + STATUS_TEXT_DX, tank_y - LEVEL_TEXT_RAISE),
        status_style,
    )
    .draw(display)
    .ok();
    Text::new(
        zone.label,
        Point::new(tank_x + STATUS_TEXT_DX, tank_y - STATUS_TEXT_RAISE),
        status_style,
    )
    .draw(display)
    .ok();

    Text::new(
        &state.name,
        Point::new(tank_x + NAME_TEXT_DX, layout.tank_bottom() + NAME_TEXT_DROP),
        NAME_STYLE,
    )
    .draw(display)
    .ok();
    Text::new(
        state.liquid.label(),
        Point::new(
            tank_x + state.liquid.label_x_offset(),
            layout.tank_bottom() + LIQUID_TEXT_DROP,
        ),
        LIQUID_STYLE,
    )
    .draw(display)
    .ok();

    let mut volume_line: String<24> = String::new();
    let _ = write!(volume_line, "Volume: {:.2} m3", state.volume());
    Text::new(
        &volume_line,
        Point::new(tank_x + STATUS_TEXT_DX, layout.tank_bottom() + VOLUME_TEXT_DROP),
        MonoTextStyle::new(DETAIL_FONT, zone.color),
    )
    .draw(display)
    .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
