//! # Measurement Units
//!
//! Unit conversion across the measurement systems a storefront actually
//! stocks in: metric mass, imperial mass, metric volume, US kitchen volume,
//! and discrete counts.
//!
//! ## Why a Conversion Table?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Recipes and stock rarely agree on units                               │
//! │                                                                         │
//! │    Product:  "Espresso beans", stocked as 1 kg                          │
//! │    Recipe:   "Latte" needs 18 g per cup                                 │
//! │                                                                         │
//! │    1 kg ──convert──► 1000 g ──divide──► 55 lattes from current stock   │
//! │                                                                         │
//! │  Converting across DIMENSIONS is never meaningful:                     │
//! │    "How many ml is 500 g?" has no answer without a density — so it    │
//! │    is a ConversionError, never a silently wrong number.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Decisions
//! - The table is an explicitly constructed, immutable value — no global
//!   mutable registry. Callers build one (usually [`ConversionTable::standard`])
//!   and hand it to the capacity calculator.
//! - Factors are exact `Decimal` constants to the definition of each unit
//!   (1 lb = 453.59237 g, 1 gal = 3785.411784 ml), so round trips within a
//!   dimension stay drift-free.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ConversionError;

// =============================================================================
// Dimension
// =============================================================================

/// The physical dimension a unit measures.
///
/// Two units are convertible if and only if they share a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Weight units: g, kg, oz, lb.
    Mass,
    /// Liquid units: ml, l, tsp, tbsp, fl oz, cup, pt, qt, gal.
    Volume,
    /// Discrete units: pcs, dz.
    Count,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Mass => "mass",
            Dimension::Volume => "volume",
            Dimension::Count => "count",
        };
        write!(f, "{name}")
    }
}

// =============================================================================
// Conversion Table
// =============================================================================

/// One row of the table: the unit's dimension plus its size expressed in
/// that dimension's base unit (g for mass, ml for volume, pcs for count).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UnitEntry {
    dimension: Dimension,
    /// How many base units one of this unit is worth.
    to_base: Decimal,
}

/// Immutable unit-conversion lookup.
///
/// ## Usage
/// ```rust
/// use rust_decimal::Decimal;
/// use bodega_core::units::ConversionTable;
///
/// let table = ConversionTable::standard();
/// let grams = table.convert(Decimal::ONE, "kg", "g").unwrap();
/// assert_eq!(grams, Decimal::from(1000));
/// ```
#[derive(Debug, Clone)]
pub struct ConversionTable {
    entries: HashMap<&'static str, UnitEntry>,
}

impl ConversionTable {
    /// Builds the standard table covering the units Bodega stocks in.
    ///
    /// ## Covered Units
    /// | Dimension | Units                                          |
    /// |-----------|------------------------------------------------|
    /// | Mass      | g, kg, oz, lb                                  |
    /// | Volume    | ml, l, tsp, tbsp, fl oz, cup, pt, qt, gal      |
    /// | Count     | pcs, dz                                        |
    ///
    /// Imperial factors follow the international yard-and-pound and US
    /// liquid-gallon definitions, which are exact in decimal.
    pub fn standard() -> Self {
        use Dimension::{Count, Mass, Volume};

        let mut entries = HashMap::new();
        let mut insert = |symbol: &'static str, dimension: Dimension, to_base: Decimal| {
            entries.insert(symbol, UnitEntry { dimension, to_base });
        };

        // Mass, base unit: gram
        insert("g", Mass, Decimal::ONE);
        insert("kg", Mass, Decimal::new(1000, 0));
        insert("oz", Mass, Decimal::new(28_349_523_125, 9)); // 28.349523125 g
        insert("lb", Mass, Decimal::new(45_359_237, 5)); // 453.59237 g

        // Volume, base unit: millilitre
        insert("ml", Volume, Decimal::ONE);
        insert("l", Volume, Decimal::new(1000, 0));
        insert("tsp", Volume, Decimal::new(492_892_159_375, 11)); // 4.92892159375 ml
        insert("tbsp", Volume, Decimal::new(1_478_676_478_125, 11)); // 14.78676478125 ml
        insert("fl oz", Volume, Decimal::new(295_735_295_625, 10)); // 29.5735295625 ml
        insert("cup", Volume, Decimal::new(2_365_882_365, 7)); // 236.5882365 ml
        insert("pt", Volume, Decimal::new(473_176_473, 6)); // 473.176473 ml
        insert("qt", Volume, Decimal::new(946_352_946, 6)); // 946.352946 ml
        insert("gal", Volume, Decimal::new(3_785_411_784, 6)); // 3785.411784 ml

        // Count, base unit: piece
        insert("pcs", Count, Decimal::ONE);
        insert("dz", Count, Decimal::new(12, 0));

        ConversionTable { entries }
    }

    /// Looks up a unit's dimension.
    pub fn dimension_of(&self, unit: &str) -> Result<Dimension, ConversionError> {
        self.lookup(unit).map(|entry| entry.dimension)
    }

    /// Whether the table knows this unit symbol.
    pub fn contains(&self, unit: &str) -> bool {
        self.entries.contains_key(unit)
    }

    /// Converts `amount` from one unit into another.
    ///
    /// ## Errors
    /// - [`ConversionError::UnknownUnit`] when either symbol is not in the
    ///   table
    /// - [`ConversionError::IncompatibleDimensions`] when the units measure
    ///   different dimensions (mass vs volume vs count)
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use bodega_core::units::ConversionTable;
    ///
    /// let table = ConversionTable::standard();
    ///
    /// // 2 lb of flour in grams
    /// let grams = table.convert(Decimal::TWO, "lb", "g").unwrap();
    /// assert_eq!(grams, Decimal::new(90_718_474, 5)); // 907.18474 g
    ///
    /// // Mass to volume is undefined
    /// assert!(table.convert(Decimal::ONE, "g", "ml").is_err());
    /// ```
    pub fn convert(
        &self,
        amount: Decimal,
        from: &str,
        to: &str,
    ) -> Result<Decimal, ConversionError> {
        let from_entry = self.lookup(from)?;
        let to_entry = self.lookup(to)?;

        if from_entry.dimension != to_entry.dimension {
            return Err(ConversionError::IncompatibleDimensions {
                from: from.to_string(),
                from_dimension: from_entry.dimension,
                to: to.to_string(),
                to_dimension: to_entry.dimension,
            });
        }

        // Identity conversions short-circuit so no precision is spent.
        if from_entry.to_base == to_entry.to_base {
            return Ok(amount);
        }

        Ok(amount * from_entry.to_base / to_entry.to_base)
    }

    fn lookup(&self, unit: &str) -> Result<UnitEntry, ConversionError> {
        self.entries
            .get(unit)
            .copied()
            .ok_or_else(|| ConversionError::UnknownUnit {
                unit: unit.to_string(),
            })
    }
}

impl Default for ConversionTable {
    fn default() -> Self {
        ConversionTable::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ConversionTable {
        ConversionTable::standard()
    }

    #[test]
    fn test_grams_to_kilograms() {
        let result = table()
            .convert(Decimal::from(1000), "g", "kg")
            .unwrap();
        assert_eq!(result, Decimal::ONE);
    }

    #[test]
    fn test_kilograms_to_grams() {
        let result = table().convert(Decimal::ONE, "kg", "g").unwrap();
        assert_eq!(result, Decimal::from(1000));
    }

    #[test]
    fn test_identity_conversion() {
        let half = Decimal::new(5, 1); // 0.5
        let result = table().convert(half, "cup", "cup").unwrap();
        assert_eq!(result, half);
    }

    #[test]
    fn test_pounds_to_ounces() {
        // 1 lb = 16 oz exactly
        let result = table().convert(Decimal::ONE, "lb", "oz").unwrap();
        assert_eq!(result, Decimal::from(16));
    }

    #[test]
    fn test_gallons_to_quarts() {
        // 1 gal = 4 qt exactly
        let result = table().convert(Decimal::ONE, "gal", "qt").unwrap();
        assert_eq!(result, Decimal::from(4));
    }

    #[test]
    fn test_tablespoon_is_three_teaspoons() {
        let result = table().convert(Decimal::ONE, "tbsp", "tsp").unwrap();
        assert_eq!(result, Decimal::from(3));
    }

    #[test]
    fn test_dozen_to_pieces() {
        let result = table().convert(Decimal::TWO, "dz", "pcs").unwrap();
        assert_eq!(result, Decimal::from(24));
    }

    #[test]
    fn test_mass_to_volume_is_incompatible() {
        let err = table().convert(Decimal::ONE, "g", "ml").unwrap_err();
        assert_eq!(
            err,
            ConversionError::IncompatibleDimensions {
                from: "g".to_string(),
                from_dimension: Dimension::Mass,
                to: "ml".to_string(),
                to_dimension: Dimension::Volume,
            }
        );
    }

    #[test]
    fn test_count_to_mass_is_incompatible() {
        let err = table().convert(Decimal::ONE, "pcs", "kg").unwrap_err();
        assert!(matches!(
            err,
            ConversionError::IncompatibleDimensions { .. }
        ));
    }

    #[test]
    fn test_unknown_unit() {
        let err = table().convert(Decimal::ONE, "stone", "kg").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                unit: "stone".to_string()
            }
        );
    }

    #[test]
    fn test_dimension_lookup() {
        assert_eq!(table().dimension_of("fl oz").unwrap(), Dimension::Volume);
        assert_eq!(table().dimension_of("lb").unwrap(), Dimension::Mass);
        assert_eq!(table().dimension_of("dz").unwrap(), Dimension::Count);
        assert!(table().dimension_of("furlong").is_err());
    }
}
