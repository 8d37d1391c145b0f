//! Fill-shape policy for the tank gauge.
//!
//! Linearly shrinking the stadium outline degenerates at low levels: below
//! roughly a cap height the two cap ellipses overlap and invert. Instead the
//! filled region is drawn from one of three strategies selected by an ordered
//! band table over the fill fraction:
//!
//! | Fraction        | Shape                                           |
//! |-----------------|-------------------------------------------------|
//! | `== 0`          | nothing (outline only)                          |
//! | `(0.00, 0.02]`  | centered lens ellipse, 30% of the tank width    |
//! | `(0.02, 0.09]`  | centered lens ellipse, 40% of the tank width    |
//! | `(0.09, 0.19]`  | centered lens ellipse, 75% of the tank width    |
//! | `(0.19, 0.29]`  | full-width ellipse anchored at the tank bottom  |
//! | `(0.29, 1.00]`  | three-piece stadium fill (cap, body, cap)       |
//!
//! Lens and transitional ellipses use height `tank_height * fraction * 1.2`;
//! the factor makes the puddle read at sizes where a to-scale ellipse would
//! be a couple of pixels tall. Bands are half-open below (`lower < f <=
//! upper`) so each boundary fraction belongs to exactly one band.
//!
//! Everything here is pure geometry returning [`Rectangle`]s; the widgets
//! draw whatever this module computes.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Band Table
// =============================================================================

/// Strategy for drawing the filled region.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FillShape {
    /// Single ellipse centered horizontally, `width_ratio` of the tank width.
    Lens { width_ratio: f32 },
    /// Single full-width ellipse anchored at the tank bottom.
    BottomEllipse,
    /// Cap ellipse + body rectangle + cap ellipse over the filled height,
    /// the same decomposition as the tank outline.
    Stadium,
}

/// One entry of the fill policy: `lower < fraction <= upper` selects `shape`.
pub struct FillBand {
    pub lower: f32,
    pub upper: f32,
    pub shape: FillShape,
}

/// The fill policy, ordered from empty to full. Evaluated in order; the
/// bands partition `(0, 1]`.
pub const FILL_BANDS: [FillBand; 5] = [
    FillBand {
        lower: 0.0,
        upper: 0.02,
        shape: FillShape::Lens { width_ratio: 0.3 },
    },
    FillBand {
        lower: 0.02,
        upper: 0.09,
        shape: FillShape::Lens { width_ratio: 0.4 },
    },
    FillBand {
        lower: 0.09,
        upper: 0.19,
        shape: FillShape::Lens { width_ratio: 0.75 },
    },
    FillBand {
        lower: 0.19,
        upper: 0.29,
        shape: FillShape::BottomEllipse,
    },
    FillBand {
        lower: 0.29,
        upper: 1.0,
        shape: FillShape::Stadium,
    },
];

/// Height factor applied to lens and transitional ellipses.
const ELLIPSE_HEIGHT_FACTOR: f32 = 1.2;

// Compile-time validation: bands must tile (0, 1] without gaps
const _: () = assert!(FILL_BANDS[0].lower == 0.0);
const _: () = assert!(FILL_BANDS[0].upper == FILL_BANDS[1].lower);
const _: () = assert!(FILL_BANDS[1].upper == FILL_BANDS[2].lower);
const _: () = assert!(FILL_BANDS[2].upper == FILL_BANDS[3].lower);
const _: () = assert!(FILL_BANDS[3].upper == FILL_BANDS[4].lower);
const _: () = assert!(FILL_BANDS[4].upper == 1.0);

/// Select the fill strategy for a fraction. `None` for an empty tank.
pub fn fill_shape_for(fraction: f32) -> Option<FillShape> {
    FILL_BANDS
        .iter()
        .find(|band| fraction > band.lower && fraction <= band.upper)
        .map(|band| band.shape)
}

// =============================================================================
// Stadium Decomposition
// =============================================================================

/// The three pieces of a stadium: two elliptical caps and a body rectangle.
///
/// Each cap ellipse is inscribed in its rectangle. The body rectangle is
/// inset half a cap from the top so the pieces overlap into a smooth
/// outline; its height saturates at zero when the stadium is shorter than
/// one cap, in which case the bottom cap simply pokes above the top edge
/// while its bottom edge stays put.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StadiumParts {
    pub top_cap: Rectangle,
    pub body: Rectangle,
    pub bottom_cap: Rectangle,
}

/// Decompose a stadium of `size` at `top_left` into its three pieces.
///
/// Used for both the tank outline and the three-piece fill so the two can
/// never disagree about the shape.
pub fn stadium_parts(
    top_left: Point,
    size: Size,
    cap_height: u32,
) -> StadiumParts {
    let cap_size = Size::new(size.width, cap_height);
    let bottom_cap_y = top_left.y + size.height as i32 - cap_height as i32;

    StadiumParts {
        top_cap: Rectangle::new(top_left, cap_size),
        body: Rectangle::new(
            Point::new(top_left.x, top_left.y + (cap_height / 2) as i32),
            Size::new(size.width, size.height.saturating_sub(cap_height)),
        ),
        bottom_cap: Rectangle::new(Point::new(top_left.x, bottom_cap_y), cap_size),
    }
}

// =============================================================================
// Fill Geometry
// =============================================================================

/// Concrete geometry of the filled region inside a tank outline.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FillGeometry {
    /// Empty tank: nothing to draw.
    Empty,
    /// Single ellipse inscribed in the rectangle.
    Ellipse(Rectangle),
    /// Three-piece stadium fill.
    Stadium(StadiumParts),
}

/// Compute the filled region for `fraction` of a tank outline at `tank`
/// with caps of `cap_height`.
pub fn fill_geometry(
    fraction: f32,
    tank: Rectangle,
    cap_height: u32,
) -> FillGeometry {
    let Some(shape) = fill_shape_for(fraction) else {
        return FillGeometry::Empty;
    };

    let tank_bottom = tank.top_left.y + tank.size.height as i32;

    match shape {
        FillShape::Lens { width_ratio } => {
            let width = (tank.size.width as f32 * width_ratio) as i32;
            let height = scaled_ellipse_height(fraction, tank.size.height);
            let x = tank.top_left.x + (tank.size.width as i32 - width) / 2;
            FillGeometry::Ellipse(Rectangle::new(
                Point::new(x, tank_bottom - height),
                Size::new(width as u32, height as u32),
            ))
        }
        FillShape::BottomEllipse => {
            let height = scaled_ellipse_height(fraction, tank.size.height);
            FillGeometry::Ellipse(Rectangle::new(
                Point::new(tank.top_left.x, tank_bottom - height),
                Size::new(tank.size.width, height as u32),
            ))
        }
        FillShape::Stadium => {
            let mut fill_height = (tank.size.height as f32 * fraction) as i32;
            let fill_top = tank_bottom - fill_height;
            // Keep the fill inside the tank's bottom boundary
            if fill_top + fill_height > tank_bottom {
                fill_height = tank_bottom - fill_top;
            }
            FillGeometry::Stadium(stadium_parts(
                Point::new(tank.top_left.x, fill_top),
                Size::new(tank.size.width, fill_height as u32),
                cap_height,
            ))
        }
    }
}

/// Ellipse height for the lens and transitional bands, visually boosted by
/// [`ELLIPSE_HEIGHT_FACTOR`] and capped at the tank height.
fn scaled_ellipse_height(
    fraction: f32,
    tank_height: u32,
) -> i32 {
    let height = (tank_height as f32 * fraction * ELLIPSE_HEIGHT_FACTOR) as i32;
    height.min(tank_height as i32)
}

// =============================================================================
// Unit Tests
// =============================================================================
