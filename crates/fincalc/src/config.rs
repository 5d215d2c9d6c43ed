//! Calculator configuration.
//!
//! Controls how formula results are rounded before they are returned. The
//! defaults (two decimals, half-to-even) are what the free functions use.

use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::rounding::{round_to, RoundingMode, DEFAULT_DECIMAL_PLACES};

/// Largest precision a configuration may request.
pub const MAX_DECIMAL_PLACES: u32 = 12;

// =============================================================================
// CALCULATOR CONFIGURATION
// =============================================================================

/// Rounding configuration for formula results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Decimal places results are rounded to.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,

    /// Midpoint rule used when rounding.
    #[serde(default)]
    pub rounding_mode: RoundingMode,
}

fn default_decimal_places() -> u32 {
    DEFAULT_DECIMAL_PLACES
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            decimal_places: default_decimal_places(),
            rounding_mode: RoundingMode::default(),
        }
    }
}

impl CalculatorConfig {
    /// Sets the number of decimal places.
    #[must_use]
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Sets the rounding mode.
    #[must_use]
    pub fn with_rounding_mode(mut self, rounding_mode: RoundingMode) -> Self {
        self.rounding_mode = rounding_mode;
        self
    }

    /// Parses and validates a configuration from JSON.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> FinanceResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Rounds a value according to this configuration.
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        round_to(value, self.decimal_places, self.rounding_mode)
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Returns a list of validation errors, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns the first error if invalid.
    fn validate_or_error(&self) -> FinanceResult<()> {
        match self.validate().into_iter().next() {
            None => Ok(()),
            Some(err) => Err(FinanceError::config(err.field, err.message)),
        }
    }
}

impl Validate for CalculatorConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.decimal_places > MAX_DECIMAL_PLACES {
            errors.push(ValidationError::new(
                "decimal_places",
                format!(
                    "Decimal places {} exceeds maximum of {}",
                    self.decimal_places, MAX_DECIMAL_PLACES
                ),
            ));
        }

        errors
    }
}
