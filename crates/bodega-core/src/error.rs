//! # Error Types
//!
//! Domain-specific error types for bodega-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bodega-core errors (this file)                                        │
//! │  ├── ConversionError  - Dimensionally impossible unit conversions      │
//! │  ├── CapacityError    - Recipe capacity failures (missing product...)  │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  └── CoreError        - Umbrella type wrapping the above               │
//! │                                                                         │
//! │  Flow: ValidationError / ConversionError / CapacityError               │
//! │            → CoreError → caller-facing message                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (unit names, material index, id)
//! 3. Errors are enum variants, never String
//! 4. Degenerate-but-valid inputs (zero cost, zero stock, empty facet
//!    values) are NOT errors; they have defined results documented on the
//!    functions that produce them

use thiserror::Error;

use crate::units::Dimension;

// =============================================================================
// Conversion Error
// =============================================================================

/// Unit conversion failures.
///
/// Raised when a physical quantity cannot be re-expressed in the requested
/// unit. Never silently coerced: a recipe asking for grams of something
/// stocked in litres is a data problem the caller must see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The unit symbol is not present in the conversion table.
    #[error("unknown unit: '{unit}'")]
    UnknownUnit { unit: String },

    /// The two units measure different physical dimensions.
    ///
    /// ## When This Occurs
    /// - A material's recipe unit is volume but the product is stocked by
    ///   mass (e.g. `ml` vs `kg`)
    /// - A discrete count unit is mixed with a physical one (`pcs` vs `g`)
    #[error("cannot convert '{from}' ({from_dimension}) to '{to}' ({to_dimension})")]
    IncompatibleDimensions {
        from: String,
        from_dimension: Dimension,
        to: String,
        to_dimension: Dimension,
    },
}

// =============================================================================
// Capacity Error
// =============================================================================

/// Recipe capacity calculation failures.
///
/// Every variant names the offending material so the caller can point the
/// user at the exact row in the recipe editor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// A material references a product that could not be resolved.
    ///
    /// Skipping the material instead would overstate how much the recipe
    /// can produce, so this is always an error, never a silent skip.
    #[error("material #{index} references a missing product")]
    MissingProduct {
        /// Zero-based position of the material in the recipe.
        index: usize,
    },

    /// A material's recipe quantity is zero or negative.
    #[error("material #{index} has non-positive quantity {quantity}")]
    InvalidMaterialQuantity { index: usize, quantity: String },

    /// A unit conversion between the stocking unit and recipe unit failed.
    #[error("material #{index}: {source}")]
    Conversion {
        index: usize,
        source: ConversionError,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before the engine runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate facet value, duplicate variant).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// Two variants carry the same facet-value assignments.
    ///
    /// Surfaced as a rejection, never auto-deduplicated: the user edited
    /// the variant list by hand and must resolve the collision themselves.
    #[error("duplicate variant combination: '{name}'")]
    DuplicateVariant { name: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Umbrella error for the whole engine.
///
/// Callers that don't care which subsystem failed can match on this;
/// callers that do can use the individual error types directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("capacity error: {0}")]
    Capacity(#[from] CapacityError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_messages() {
        let err = ConversionError::UnknownUnit {
            unit: "stone".to_string(),
        };
        assert_eq!(err.to_string(), "unknown unit: 'stone'");

        let err = ConversionError::IncompatibleDimensions {
            from: "g".to_string(),
            from_dimension: Dimension::Mass,
            to: "ml".to_string(),
            to_dimension: Dimension::Volume,
        };
        assert_eq!(err.to_string(), "cannot convert 'g' (mass) to 'ml' (volume)");
    }

    #[test]
    fn test_capacity_error_messages() {
        let err = CapacityError::MissingProduct { index: 2 };
        assert_eq!(err.to_string(), "material #2 references a missing product");

        let err = CapacityError::InvalidMaterialQuantity {
            index: 0,
            quantity: "0".to_string(),
        };
        assert_eq!(err.to_string(), "material #0 has non-positive quantity 0");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "option".to_string(),
        };
        assert_eq!(err.to_string(), "option is required");

        let err = ValidationError::DuplicateVariant {
            name: "small/latte".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate variant combination: 'small/latte'");
    }

    #[test]
    fn test_errors_convert_to_core_error() {
        let conversion = ConversionError::UnknownUnit {
            unit: "x".to_string(),
        };
        let core: CoreError = conversion.into();
        assert!(matches!(core, CoreError::Conversion(_)));

        let validation = ValidationError::Required {
            field: "name".to_string(),
        };
        let core: CoreError = validation.into();
        assert!(matches!(core, CoreError::Validation(_)));
    }
}
