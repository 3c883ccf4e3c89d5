use super::component::{Component, COMPONENT_COUNT};
use super::validation::validate_weights;
use crate::error::Result;

/// Published coefficients of the standard model, in hundredths, in
/// `Component::ALL` order. They total 105, so a perfect profile sums to 10.5
/// before the engine clamps it.
pub const STANDARD_WEIGHTS: [u32; COMPONENT_COUNT] = [15, 10, 15, 15, 15, 15, 20];

/// Immutable component weights.
///
/// Coefficients are held as whole hundredths so weighted sums of whole ratings
/// come back exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    hundredths: [u32; COMPONENT_COUNT],
    total: u32,
}

impl WeightTable {
    /// Build a table from per-component coefficients. Every coefficient must be positive.
    pub fn new(hundredths: [u32; COMPONENT_COUNT]) -> Result<Self> {
        validate_weights(&hundredths)?;
        Ok(Self::from_valid(hundredths))
    }

    pub fn standard() -> Self {
        Self::from_valid(STANDARD_WEIGHTS)
    }

    fn from_valid(hundredths: [u32; COMPONENT_COUNT]) -> Self {
        Self {
            hundredths,
            total: hundredths.iter().sum(),
        }
    }

    /// Weight of `component` as a plain coefficient (15 hundredths -> 0.15).
    pub fn weight(&self, component: Component) -> f64 {
        f64::from(self.hundredths(component)) / 100.0
    }

    /// Coefficient of `component` as published.
    pub fn hundredths(&self, component: Component) -> u32 {
        self.hundredths[component.index()]
    }

    /// Sum of all coefficients, in hundredths.
    pub fn total_hundredths(&self) -> u32 {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        Component::ALL.into_iter().map(move |c| (c, self.weight(c)))
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::standard()
    }
}
