//! # Validation Module
//!
//! Input validation rules applied before the engine runs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront forms (out of scope)                              │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - engine input rules                             │
//! │  ├── Facet shape (named, values unique within facet)                   │
//! │  ├── Material quantities strictly positive                             │
//! │  └── Pricing figures non-negative                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend persistence (out of scope)                           │
//! │                                                                         │
//! │  Defense in depth: each layer catches different mistakes               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::types::{Material, OptionFacet, Pricing};
use crate::MAX_FACET_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Facet Validators
// =============================================================================

/// Validates one option facet.
///
/// ## Rules
/// - `option` must be non-empty (after trimming) and at most 100 chars
/// - every value must be non-empty
/// - values must be unique within the facet
///
/// An empty `values` list is allowed: the generator skips such facets.
pub fn validate_facet(facet: &OptionFacet) -> ValidationResult<()> {
    let option = facet.option.trim();

    if option.is_empty() {
        return Err(ValidationError::Required {
            field: "option".to_string(),
        });
    }

    if option.len() > MAX_FACET_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "option".to_string(),
            max: MAX_FACET_NAME_LENGTH,
        });
    }

    let mut seen = std::collections::HashSet::with_capacity(facet.values.len());
    for value in &facet.values {
        if value.trim().is_empty() {
            return Err(ValidationError::Required {
                field: format!("{option} value"),
            });
        }
        if !seen.insert(value.as_str()) {
            return Err(ValidationError::Duplicate {
                field: format!("{option} value"),
                value: value.clone(),
            });
        }
    }

    Ok(())
}

/// Validates an ordered facet list, naming the first offending facet.
pub fn validate_facets(facets: &[OptionFacet]) -> ValidationResult<()> {
    for facet in facets {
        validate_facet(facet)?;
    }
    Ok(())
}

// =============================================================================
// Material Validators
// =============================================================================

/// Validates a recipe material's own fields.
///
/// Product resolution is NOT checked here - a dangling reference is the
/// capacity calculator's error, with the material index attached.
pub fn validate_material(material: &Material) -> ValidationResult<()> {
    if material.quantity <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if material.unit.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "unit".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Pricing Validators
// =============================================================================

/// Validates user-entered pricing figures.
///
/// ## Rules
/// - cost must not be negative (zero is allowed: free-to-make items)
/// - price must not be negative (zero is allowed: giveaways)
///
/// Profit figures may be negative; selling below cost is a business
/// decision, not a validation failure.
pub fn validate_pricing(pricing: &Pricing) -> ValidationResult<()> {
    if pricing.cost < Decimal::ZERO {
        return Err(ValidationError::MustNotBeNegative {
            field: "cost".to_string(),
        });
    }

    if pricing.price < Decimal::ZERO {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// ## Example
/// ```rust
/// use bodega_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
