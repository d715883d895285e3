//! # Variant Generation
//!
//! Expands a product's option facets into the full set of purchasable
//! variants (the Cartesian product of facet values), plus the uniqueness
//! check applied when a variant list is submitted after manual edits.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product editor                                                         │
//! │                                                                         │
//! │  size: [small, medium]    type: [espresso, latte]                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  generate_variants(...) ← THIS MODULE                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  small/espresso  small/latte  medium/espresso  medium/latte             │
//! │       │                                                                 │
//! │       ▼ user tweaks rows, hits Save                                     │
//! │  validate_unique_variants(...) ← THIS MODULE                            │
//! │       │                                                                 │
//! │       └── duplicate assignment? → reject with the variant's name        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Growth Hazard
//! Output size is the product of every non-empty facet's value count —
//! exponential in the number of facets. The engine deliberately has no
//! artificial cap; limiting facet counts is an upstream (form-level)
//! concern.

use std::collections::HashSet;

use tracing::debug;

use crate::error::ValidationError;
use crate::types::{OptionFacet, ProductVariant, VariantPair};
use crate::VARIANT_NAME_SEPARATOR;

// =============================================================================
// Generation
// =============================================================================

/// Expands ordered facets into one [`ProductVariant`] per combination of
/// facet values.
///
/// ## Rules
/// - Facet order is preserved in both the pair list and the `/`-joined name.
/// - A facet with **empty** `values` contributes nothing: it is skipped,
///   not treated as a "no value" branch, so it never zeroes out the
///   combination count and never appears in names or pairs.
/// - Zero facets (or all facets empty) yield a single variant with an
///   empty pair list and an empty name - the degenerate base product.
///
/// ## Example
/// ```rust
/// use bodega_core::types::OptionFacet;
/// use bodega_core::variants::generate_variants;
///
/// let facets = vec![
///     OptionFacet::new("size", vec!["small".into(), "medium".into()]),
///     OptionFacet::new("type", vec!["espresso".into(), "latte".into()]),
/// ];
///
/// let variants = generate_variants(&facets);
/// assert_eq!(variants.len(), 4);
/// assert_eq!(variants[0].name, "small/espresso");
/// ```
pub fn generate_variants(facets: &[OptionFacet]) -> Vec<ProductVariant> {
    // Explicit accumulator instead of recursion: each pass multiplies the
    // partial combinations by the current facet's values, so the depth of
    // the facet list never touches the call stack.
    let mut combinations: Vec<Vec<VariantPair>> = vec![Vec::new()];

    for facet in facets {
        if facet.values.is_empty() {
            // Absent values are omitted entirely (documented contract).
            continue;
        }

        let mut next = Vec::with_capacity(combinations.len() * facet.values.len());
        for partial in &combinations {
            for value in &facet.values {
                let mut extended = partial.clone();
                extended.push(VariantPair {
                    option: facet.option.clone(),
                    value: value.clone(),
                });
                next.push(extended);
            }
        }
        combinations = next;
    }

    let variants: Vec<ProductVariant> = combinations
        .into_iter()
        .map(|pairs| ProductVariant {
            name: variant_name(&pairs),
            variant: pairs,
        })
        .collect();

    debug!(
        facets = facets.len(),
        variants = variants.len(),
        "generated product variants"
    );

    variants
}

/// The canonical display name for a combination: values joined by `/` in
/// facet order.
fn variant_name(pairs: &[VariantPair]) -> String {
    pairs
        .iter()
        .map(|pair| pair.value.as_str())
        .collect::<Vec<_>>()
        .join(VARIANT_NAME_SEPARATOR)
}

// =============================================================================
// Uniqueness
// =============================================================================

/// The order-insensitive identity of a variant: its pairs as a sorted set.
///
/// Two variants with the same assignments in different order are the same
/// purchasable thing, so comparison must ignore pair order.
fn combination_key(variant: &ProductVariant) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = variant
        .variant
        .iter()
        .map(|pair| (pair.option.clone(), pair.value.clone()))
        .collect();
    key.sort();
    key
}

/// Whether no two variants share the same facet-value assignments.
///
/// Generator output always satisfies this; the check exists for variant
/// lists that were edited by hand before submission.
pub fn variant_combinations_unique(variants: &[ProductVariant]) -> bool {
    let mut seen = HashSet::with_capacity(variants.len());
    variants
        .iter()
        .all(|variant| seen.insert(combination_key(variant)))
}

/// Rejects a variant list containing duplicate facet-value assignments.
///
/// The error names the first duplicate so the caller can point at the
/// offending row. Duplicates are never silently removed.
pub fn validate_unique_variants(variants: &[ProductVariant]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(variants.len());
    for variant in variants {
        if !seen.insert(combination_key(variant)) {
            return Err(ValidationError::DuplicateVariant {
                name: variant.name.clone(),
            });
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
