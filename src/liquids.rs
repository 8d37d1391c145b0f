//! The fixed set of liquids a tank can be configured to hold.
//!
//! Each liquid carries its display label, its density (what the settings
//! form feeds into the level model), and a fixed horizontal offset for the
//! liquid annotation under the gauge. The offsets visually center the
//! differing label lengths; they are a tuned per-label table, not a
//! computed layout.

/// Liquid types selectable in the tank settings form.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Liquid {
    /// Unleaded gasoline, density 0.74. The default for new tanks.
    #[default]
    EssenceSansPlomb,

    /// Diesel, density 0.85.
    Gasoil,

    /// Low-sulfur diesel, density 0.85.
    Gasoil50,

    /// Liquefied petroleum gas, density 0.51.
    Gpl,
}

impl Liquid {
    /// Display label, as shown in the settings form and under the gauge.
    pub const fn label(self) -> &'static str {
        match self {
            Self::EssenceSansPlomb => "Essence Sans Plomb",
            Self::Gasoil => "Gasoil (Diesel)",
            Self::Gasoil50 => "Gasoil 50",
            Self::Gpl => "GPL",
        }
    }

    /// Density paired with the liquid in the settings form.
    pub const fn density(self) -> f32 {
        match self {
            Self::EssenceSansPlomb => 0.74,
            Self::Gasoil | Self::Gasoil50 => 0.85,
            Self::Gpl => 0.51,
        }
    }

    /// Horizontal offset of the liquid annotation from the tank's left edge.
    /// Tuned per label so short names sit under the tank rather than at its
    /// left corner.
    pub const fn label_x_offset(self) -> i32 {
        match self {
            Self::EssenceSansPlomb => -4,
            Self::Gasoil => 0,
            Self::Gasoil50 => 20,
            Self::Gpl => 30,
        }
    }

    /// Cycle to the next liquid in form order. Used by the simulator's
    /// liquid-toggle key to exercise the settings path.
    pub const fn next(self) -> Self {
        match self {
            Self::EssenceSansPlomb => Self::Gasoil,
            Self::Gasoil => Self::Gasoil50,
            Self::Gasoil50 => Self::Gpl,
            Self::Gpl => Self::EssenceSansPlomb,
        }
    }

    /// Look a liquid up by its display label, as the settings form submits it.
    pub fn from_label(label: &str) -> Option<Self> {
        [Self::EssenceSansPlomb, Self::Gasoil, Self::Gasoil50, Self::Gpl]
            .into_iter()
            .find(|liquid| liquid.label() == label)
    }
}
