//! # Domain Types
//!
//! Core domain types for the derived-commerce engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   OptionFacet   │   │    Material     │   │     Pricing     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  option "size"  │   │  quantity 18    │   │  cost           │       │
//! │  │  values [s,m,l] │   │  unit "g"       │   │  price          │       │
//! │  └───────┬─────────┘   │  product ───────┼─┐ │  profit_amount  │       │
//! │          │ expand      └─────────────────┘ │ │  profit_pct     │       │
//! │          ▼                                 │ └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐ │                           │
//! │  │ ProductVariant  │   │ MaterialProduct │◄┘  weak reference:          │
//! │  │  ─────────────  │   │  ─────────────  │    snapshot of the stocked  │
//! │  │  name "s/latte" │   │  id (UUID)      │    product, resolved by an  │
//! │  │  variant pairs  │   │  quantity 1     │    out-of-scope inventory   │
//! │  └─────────────────┘   │  measurement kg │    lookup                   │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Aggregates carry:
//! - `id`: UUID v4 string - immutable, used for relations
//! - Business ID: (sku, name) - human-readable, potentially mutable

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Option Facets
// =============================================================================

/// A named axis of product variation, e.g. `size: [small, medium, large]`.
///
/// A product carries an **ordered** list of facets; the order is
/// significant because it defines the canonical variant naming order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OptionFacet {
    /// Facet name, e.g. "size".
    pub option: String,
    /// Selectable values, ordered, unique within the facet.
    ///
    /// May be empty: an empty facet is skipped during variant expansion
    /// (it never multiplies the combination count by zero).
    pub values: Vec<String>,
}

impl OptionFacet {
    /// Convenience constructor, mostly for tests and seed data.
    pub fn new(option: impl Into<String>, values: Vec<String>) -> Self {
        OptionFacet {
            option: option.into(),
            values,
        }
    }
}

/// One facet-value assignment inside a variant, e.g. `size = small`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VariantPair {
    pub option: String,
    pub value: String,
}

/// One concrete purchasable combination of facet values.
///
/// ## Lifecycle
/// Variants are regenerated wholesale whenever the facet list changes;
/// they are never incrementally patched, so `name` and `variant` always
/// agree with each other and with the facet order at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductVariant {
    /// Facet values joined by `/` in facet order, e.g. "small/latte".
    pub name: String,
    /// One pair per non-empty facet, in facet order.
    pub variant: Vec<VariantPair>,
}

// =============================================================================
// Recipes & Materials
// =============================================================================

/// Snapshot of the stocked product a material draws from.
///
/// Resolution (id → product) happens in the out-of-scope inventory layer;
/// the engine only sees the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MaterialProduct {
    /// Product id (UUID v4).
    pub id: String,
    /// Stock on hand, in the product's own stocking unit.
    #[ts(as = "String")]
    pub quantity: Decimal,
    /// The product's stocking unit, e.g. "kg".
    pub measurement: String,
}

/// A recipe's reference to a quantity of a stocked product.
///
/// The recipe `unit` and the product's stocking `measurement` may differ;
/// the capacity calculator converts between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Material {
    /// Amount of the product one recipe batch consumes. Must be > 0.
    #[ts(as = "String")]
    pub quantity: Decimal,
    /// Unit the recipe is written in, e.g. "g".
    pub unit: String,
    /// The referenced product, if the inventory layer could resolve it.
    /// `None` is a hard error during capacity calculation, never a skip.
    pub product: Option<MaterialProduct>,
}

/// A recipe: an ordered list of materials producing one sellable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    /// At least one material; owned by the recipe aggregate.
    pub materials: Vec<Material>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Pricing
// =============================================================================

/// Mutually consistent cost / price / profit figures for one product.
///
/// ## Invariants (when `cost > 0`)
/// - `profit_amount = price - cost`
/// - `profit_percentage = profit_amount / cost * 100`
///
/// When `cost == 0` the percentage is 0 by convention (division-by-zero
/// guard), not an error. Construct through the derivation functions in
/// [`crate::pricing`] so the invariants hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pricing {
    #[ts(as = "String")]
    pub cost: Decimal,
    #[ts(as = "String")]
    pub price: Decimal,
    #[ts(as = "String")]
    pub profit_amount: Decimal,
    #[ts(as = "String")]
    pub profit_percentage: Decimal,
}

// =============================================================================
// Product
// =============================================================================

/// A stocked, sellable product tying the engine's inputs together.
///
/// The surrounding application persists and edits this; the engine only
/// reads `facets` (variant expansion), `quantity`/`measurement` (capacity)
/// and `pricing` (consistency).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Display name shown in the storefront.
    pub name: String,

    /// Ordered variation axes; order defines variant naming order.
    pub facets: Vec<OptionFacet>,

    /// Variants last generated from `facets`. Regenerated wholesale on
    /// every facet edit.
    pub variants: Vec<ProductVariant>,

    /// Cost/price/profit figures, kept consistent by the pricing module.
    pub pricing: Pricing,

    /// Stock on hand, in `measurement` units.
    #[ts(as = "String")]
    pub quantity: Decimal,

    /// Stocking unit, e.g. "kg".
    pub measurement: String,

    /// Whether product is active (soft delete).
    pub is_active: bool,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// The material-product snapshot a recipe material stores for this
    /// product.
    pub fn as_material_product(&self) -> MaterialProduct {
        MaterialProduct {
            id: self.id.clone(),
            quantity: self.quantity,
            measurement: self.measurement.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::RecipeCapacityCalculator;
    use crate::units::ConversionTable;
    use chrono::Utc;

    #[test]
    fn test_product_snapshot_flows_into_recipe_capacity() {
        // The editor stores a snapshot of the stocked product on each
        // material; the capacity calculator must see the same stock the
        // product aggregate carries.
        let now = Utc::now();
        let beans = Product {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            sku: "BEANS-1KG".to_string(),
            name: "Espresso beans".to_string(),
            facets: vec![],
            variants: vec![],
            pricing: Pricing::zero(),
            quantity: Decimal::ONE,
            measurement: "kg".to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let snapshot = beans.as_material_product();
        assert_eq!(snapshot.id, beans.id);
        assert_eq!(snapshot.quantity, beans.quantity);
        assert_eq!(snapshot.measurement, beans.measurement);

        let recipe = Recipe {
            id: "6fa459ea-ee8a-3ca4-894e-db77e160355e".to_string(),
            name: "Latte".to_string(),
            materials: vec![Material {
                quantity: Decimal::TWO, // 2 g per batch
                unit: "g".to_string(),
                product: Some(snapshot),
            }],
            created_at: now,
            updated_at: now,
        };

        let calculator = RecipeCapacityCalculator::new(ConversionTable::standard());
        assert_eq!(
            calculator.max_producible_quantity(&recipe.materials).unwrap(),
            500
        );
    }

    #[test]
    fn test_facet_constructor() {
        let facet = OptionFacet::new("size", vec!["small".into(), "medium".into()]);
        assert_eq!(facet.option, "size");
        assert_eq!(facet.values.len(), 2);
    }

    #[test]
    fn test_material_serde_round_trip() {
        let material = Material {
            quantity: Decimal::new(185, 1), // 18.5
            unit: "g".to_string(),
            product: Some(MaterialProduct {
                id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
                quantity: Decimal::ONE,
                measurement: "kg".to_string(),
            }),
        };

        let json = serde_json::to_string(&material).unwrap();
        let back: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(back, material);
    }

    #[test]
    fn test_decimal_quantities_serialize_as_strings() {
        // The UI layer receives decimals as strings so it never touches
        // binary floats.
        let product = MaterialProduct {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            quantity: Decimal::new(5, 1), // 0.5
            measurement: "l".to_string(),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["quantity"], serde_json::json!("0.5"));
    }
}
