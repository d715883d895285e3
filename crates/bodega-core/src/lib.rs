//! # bodega-core: Derived Commerce Computation Engine
//!
//! This crate is the **heart** of Bodega POS. It holds the three pure
//! computations every storefront screen leans on, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bodega POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront Frontend (React)                     │   │
//! │  │   Product editor ──► Variant list ──► Recipe view ──► Pricing   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ REST + client-side query cache         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bodega-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ variants  │  │   units   │  │  recipe   │  │  pricing  │  │   │
//! │  │   │ Cartesian │  │ g↔kg↔lb   │  │ capacity  │  │ cost/price│  │   │
//! │  │   │ expansion │  │ ml↔l↔cup  │  │ floor/min │  │ profit %  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            Inventory / persistence backend (external)           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (OptionFacet, Material, Pricing, ...)
//! - [`variants`] - Facet expansion and variant uniqueness
//! - [`units`] - Measurement dimensions and the conversion table
//! - [`recipe`] - Recipe capacity from current stock
//! - [`pricing`] - Cost/price/profit consistency
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic - same input = same output, in the
//!    same order
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Decimal Arithmetic**: quantities and money are `rust_decimal`
//!    values, never binary floats; rounding happens only at display time
//! 4. **Explicit Errors**: dimensional mismatches and dangling product
//!    references are typed errors, never silent coercions or skips
//!
//! ## Example Usage
//!
//! ```rust
//! use bodega_core::types::OptionFacet;
//! use bodega_core::variants::generate_variants;
//!
//! let facets = vec![
//!     OptionFacet::new("size", vec!["small".into(), "medium".into()]),
//!     OptionFacet::new("type", vec!["espresso".into(), "latte".into()]),
//! ];
//!
//! let variants = generate_variants(&facets);
//! assert_eq!(variants.len(), 4);
//! assert_eq!(variants[0].name, "small/espresso");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pricing;
pub mod recipe;
pub mod types;
pub mod units;
pub mod validation;
pub mod variants;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bodega_core::ConversionTable` instead of
// `use bodega_core::units::ConversionTable`

pub use error::{CapacityError, ConversionError, CoreError, CoreResult, ValidationError};
pub use pricing::ProfitIndicator;
pub use recipe::RecipeCapacityCalculator;
pub use types::*;
pub use units::{ConversionTable, Dimension};
pub use variants::{generate_variants, validate_unique_variants, variant_combinations_unique};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Separator between facet values in a generated variant name
/// ("small/espresso").
///
/// ## Why a constant?
/// The name format is part of the persistence payload the storefront
/// submits; frontend and backend must split on the same character.
pub const VARIANT_NAME_SEPARATOR: &str = "/";

/// Decimal places money figures are rounded to for display.
///
/// ## Business Reason
/// Two minor-unit digits covers the supported currencies. Rounding is a
/// display concern only - stored pricing figures keep full precision.
pub const PRICE_DISPLAY_DECIMALS: u32 = 2;

/// Maximum length of a facet name.
///
/// ## Business Reason
/// Facet names label columns in the variant editor; anything longer than
/// this is a data entry mistake.
pub const MAX_FACET_NAME_LENGTH: usize = 100;
