//! Catalog data types.

use crate::error::CatalogError;
use crate::ga::Chromosome;

/// A single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub weight: f64,
    pub volume: f64,
    pub value: f64,
}

impl Item {
    pub fn new(weight: f64, volume: f64, value: f64) -> Self {
        Self {
            weight,
            volume,
            value,
        }
    }
}

/// Totals of a packed subset of the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Packing {
    pub weight: f64,
    pub volume: f64,
    pub value: f64,
}

impl Packing {
    /// Returns `true` if the packing respects both caps of `catalog`.
    pub fn fits(&self, catalog: &Catalog) -> bool {
        self.weight <= catalog.max_weight() && self.volume <= catalog.max_volume()
    }
}

/// Immutable item catalog with weight and volume caps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    items: Vec<Item>,
    max_weight: f64,
    max_volume: f64,
}

impl Catalog {
    /// Creates a catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError`] if a cap or an item field is negative,
    /// infinite or NaN.
    pub fn new(items: Vec<Item>, max_weight: f64, max_volume: f64) -> Result<Self, CatalogError> {
        check_capacity("max_weight", max_weight)?;
        check_capacity("max_volume", max_volume)?;

        for (index, item) in items.iter().enumerate() {
            for (field, value) in [
                ("weight", item.weight),
                ("volume", item.volume),
                ("value", item.value),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(CatalogError::InvalidItem {
                        index,
                        field,
                        value,
                    });
                }
            }
        }

        Ok(Self {
            items,
            max_weight,
            max_volume,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items, which is also the chromosome length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    pub fn max_volume(&self) -> f64 {
        self.max_volume
    }

    /// Iterates over `(index, item)` for every item selected by `chromosome`.
    pub fn selected_items<'a>(
        &'a self,
        chromosome: &'a Chromosome,
    ) -> impl Iterator<Item = (usize, &'a Item)> + 'a {
        self.items
            .iter()
            .enumerate()
            .zip(chromosome.genes())
            .filter(|(_, selected)| **selected)
            .map(|(entry, _)| entry)
    }

    /// Sums weight, volume and value of the items selected by `chromosome`.
    pub fn pack(&self, chromosome: &Chromosome) -> Packing {
        self.selected_items(chromosome)
            .fold(Packing::default(), |acc, (_, item)| Packing {
                weight: acc.weight + item.weight,
                volume: acc.volume + item.volume,
                value: acc.value + item.value,
            })
    }
}

fn check_capacity(name: &'static str, value: f64) -> Result<(), CatalogError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidCapacity { name, value })
    }
}

/// Standard fitness: total value of the packed items, or `0.0` if the
/// packing exceeds either cap.
pub fn knapsack_fitness(chromosome: &Chromosome, catalog: &Catalog) -> f64 {
    let packing = catalog.pack(chromosome);
    if packing.fits(catalog) {
        packing.value
    } else {
        0.0
    }
}
