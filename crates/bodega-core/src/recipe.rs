//! # Recipe Capacity
//!
//! Computes how many whole batches of a recipe current product stock can
//! support, converting between stocking units and recipe units on the way.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Recipe: "Latte" (makes 1 cup)                                          │
//! │                                                                         │
//! │  Material          Recipe needs     Stock on hand      Capacity         │
//! │  ───────────       ────────────     ─────────────      ────────         │
//! │  Espresso beans    18 g             1 kg (= 1000 g)    55.5 batches     │
//! │  Whole milk        200 ml           5 l  (= 5000 ml)   25 batches       │
//! │                                                        ────────         │
//! │  max_producible_quantity = floor(min(55.5, 25)) =      25 lattes        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The scarcest material always wins, and a missing product reference is a
//! hard error - skipping it would overstate capacity.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::error::CapacityError;
use crate::types::Material;
use crate::units::ConversionTable;

// =============================================================================
// Calculator
// =============================================================================

/// Capacity calculator owning its unit-conversion table.
///
/// The table is plain immutable data, so a single calculator can be shared
/// freely across threads; every call allocates only locals.
///
/// ## Usage
/// ```rust
/// use rust_decimal::Decimal;
/// use bodega_core::recipe::RecipeCapacityCalculator;
/// use bodega_core::types::{Material, MaterialProduct};
/// use bodega_core::units::ConversionTable;
///
/// let calculator = RecipeCapacityCalculator::new(ConversionTable::standard());
/// let materials = vec![Material {
///     quantity: Decimal::TWO, // 2 g per batch
///     unit: "g".to_string(),
///     product: Some(MaterialProduct {
///         id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
///         quantity: Decimal::ONE, // 1 kg in stock
///         measurement: "kg".to_string(),
///     }),
/// }];
///
/// assert_eq!(calculator.max_producible_quantity(&materials).unwrap(), 500);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecipeCapacityCalculator {
    table: ConversionTable,
}

impl RecipeCapacityCalculator {
    /// Creates a calculator around an explicit conversion table.
    pub fn new(table: ConversionTable) -> Self {
        RecipeCapacityCalculator { table }
    }

    /// The conversion table this calculator uses.
    pub fn table(&self) -> &ConversionTable {
        &self.table
    }

    /// Maximum whole number of recipe batches producible from stock.
    ///
    /// Per material: stock is converted from the product's stocking
    /// `measurement` into the material's recipe `unit`, then divided by
    /// the per-batch quantity. The result is `floor(min(...))` over all
    /// materials.
    ///
    /// ## Edge Cases
    /// - A single material degenerates to its own ratio.
    /// - Zero stock on any material forces the result to 0; the material
    ///   is still part of the minimum, never excluded.
    /// - An empty material list yields 0: nothing can be produced from no
    ///   inputs.
    /// - A ratio larger than `u64::MAX` saturates to `u64::MAX` instead of
    ///   collapsing to 0; negative stock clamps to 0.
    ///
    /// ## Errors
    /// - [`CapacityError::MissingProduct`] when a material's product
    ///   reference did not resolve (`product: None`)
    /// - [`CapacityError::InvalidMaterialQuantity`] when a per-batch
    ///   quantity is zero or negative
    /// - [`CapacityError::Conversion`] when stocking and recipe units are
    ///   unknown or dimensionally incompatible
    pub fn max_producible_quantity(&self, materials: &[Material]) -> Result<u64, CapacityError> {
        if materials.is_empty() {
            return Ok(0);
        }

        let mut min_capacity: Option<Decimal> = None;

        for (index, material) in materials.iter().enumerate() {
            let capacity = self.material_capacity(index, material)?;
            trace!(index, %capacity, "material batch capacity");

            min_capacity = Some(match min_capacity {
                Some(current) if current <= capacity => current,
                _ => capacity,
            });
        }

        let min_capacity = min_capacity.unwrap_or_default();

        // A ratio beyond u64 range means "more batches than anyone can
        // count", so it saturates; collapsing it to 0 would report the
        // exact opposite of the truth. Negative stock still clamps to 0.
        let batches = if min_capacity <= Decimal::ZERO {
            0
        } else {
            min_capacity.floor().to_u64().unwrap_or(u64::MAX)
        };

        debug!(
            materials = materials.len(),
            batches, "computed recipe capacity"
        );
        Ok(batches)
    }

    /// How many batches one material's stock supports (fractional).
    fn material_capacity(
        &self,
        index: usize,
        material: &Material,
    ) -> Result<Decimal, CapacityError> {
        let product = material
            .product
            .as_ref()
            .ok_or(CapacityError::MissingProduct { index })?;

        if material.quantity <= Decimal::ZERO {
            return Err(CapacityError::InvalidMaterialQuantity {
                index,
                quantity: material.quantity.to_string(),
            });
        }

        let stock_in_recipe_units = self
            .table
            .convert(product.quantity, &product.measurement, &material.unit)
            .map_err(|source| CapacityError::Conversion { index, source })?;

        Ok(stock_in_recipe_units / material.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
