//! Tank configuration form handling.
//!
//! The settings form hands the core raw strings (what a text-entry UI has),
//! and [`SettingsForm::parse`] turns them into a validated [`TankConfig`]
//! or a [`SettingsError`]. Parsing is all-or-nothing: a failure surfaces to
//! the form and no tank state is touched, so a typo in the radius field can
//! never corrupt a live gauge.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::liquids::Liquid;

/// Raw field values as submitted by the configuration form.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SettingsForm {
    pub name: String,
    /// Display label of the selected liquid; determines the density.
    pub liquid: String,
    /// Tank radius in meters, as typed.
    pub radius: String,
    /// Tank height in meters, as typed.
    pub height: String,
}

/// A validated tank configuration, ready to apply.
#[derive(Clone, PartialEq, Debug)]
pub struct TankConfig {
    pub name: String,
    pub liquid: Liquid,
    pub radius: f32,
    pub height: f32,
}

/// Why a settings form submission was refused.
#[derive(Error, Clone, PartialEq, Debug)]
pub enum SettingsError {
    /// The liquid label is not in the configured set.
    #[error("unknown liquid type {0:?}")]
    UnknownLiquid(String),

    /// A numeric field did not parse as a float.
    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// A dimension parsed but is not a positive finite number.
    #[error("{field} must be a positive number, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}

impl SettingsForm {
    /// Validate the form into a [`TankConfig`].
    ///
    /// # Errors
    /// Reports the first offending field; the caller shows the message next
    /// to the form and leaves the tank untouched.
    pub fn parse(&self) -> Result<TankConfig, SettingsError> {
        let liquid = Liquid::from_label(&self.liquid)
            .ok_or_else(|| SettingsError::UnknownLiquid(self.liquid.clone()))?;
        let radius = parse_dimension("radius", &self.radius)?;
        let height = parse_dimension("height", &self.height)?;

        Ok(TankConfig {
            name: self.name.clone(),
            liquid,
            radius,
            height,
        })
    }
}

/// Parse one dimension field and require it to be positive and finite.
fn parse_dimension(
    field: &'static str,
    value: &str,
) -> Result<f32, SettingsError> {
    let parsed: f32 = value.trim().parse().map_err(|source| SettingsError::InvalidNumber {
        field,
        value: value.to_owned(),
        source,
    })?;
    if !(parsed > 0.0) || !parsed.is_finite() {
        return Err(SettingsError::NonPositive { field, value: parsed });
    }
    Ok(parsed)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SettingsForm {
        SettingsForm {
            name: "Tank 1".to_owned(),
            liquid: "GPL".to_owned(),
            radius: "1.5".to_owned(),
            height: "3".to_owned(),
        }
    }

    #[test]
    fn test_valid_form_parses() {
        let config = valid_form().parse().expect("valid form should parse");
        assert_eq!(config.name, "Tank 1");
        assert_eq!(config.liquid, Liquid::Gpl);
        assert_eq!(config.radius, 1.5);
        assert_eq!(config.height, 3.0);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut form = valid_form();
        form.radius = " 2.0 ".to_owned();
        assert_eq!(form.parse().expect("padded number parses").radius, 2.0);
    }

    #[test]
    fn test_unknown_liquid_refused() {
        let mut form = valid_form();
        form.liquid = "Mercury".to_owned();
        assert!(matches!(form.parse(), Err(SettingsError::UnknownLiquid(label)) if label == "Mercury"));
    }

    #[test]
    fn test_non_numeric_radius_refused() {
        let mut form = valid_form();
        form.radius = "one point five".to_owned();
        assert!(matches!(
            form.parse(),
            Err(SettingsError::InvalidNumber { field: "radius", .. })
        ));
    }

    #[test]
    fn test_non_numeric_height_refused() {
        let mut form = valid_form();
        form.height = String::new();
        assert!(matches!(
            form.parse(),
            Err(SettingsError::InvalidNumber { field: "height", .. })
        ));
    }

    #[test]
    fn test_zero_and_negative_dimensions_refused() {
        let mut form = valid_form();
        form.radius = "0".to_owned();
        assert!(matches!(
            form.parse(),
            Err(SettingsError::NonPositive { field: "radius", .. })
        ));

        let mut form = valid_form();
        form.height = "-3".to_owned();
        assert!(matches!(
            form.parse(),
            Err(SettingsError::NonPositive { field: "height", .. })
        ));
    }

    #[test]
    fn test_infinite_dimension_refused() {
        let mut form = valid_form();
        form.height = "inf".to_owned();
        assert!(matches!(
            form.parse(),
            Err(SettingsError::NonPositive { field: "height", .. })
        ));
    }

    #[test]
    fn test_density_comes_from_liquid_table() {
        let config = valid_form().parse().unwrap();
        assert_eq!(config.liquid.density(), 0.51, "GPL maps to density 0.51");
    }
}
