use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::component::{Component, COMPONENT_COUNT};
use super::validation::clamp_value;
use crate::error::{Error, Result};

/// One rating per component.
///
/// Holds exactly the seven components by construction; range checks happen in
/// `ScoreEngine::compute`, so a `ValueSet` may carry out-of-range input from a
/// collector that does not clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueSet {
    values: [f64; COMPONENT_COUNT],
}

impl ValueSet {
    /// Values in `Component::ALL` order.
    pub fn new(values: [f64; COMPONENT_COUNT]) -> Self {
        Self { values }
    }

    /// Every component set to `value`.
    pub fn uniform(value: f64) -> Self {
        Self {
            values: [value; COMPONENT_COUNT],
        }
    }

    /// Build from a map that must name every component.
    pub fn from_map(map: &HashMap<Component, f64>) -> Result<Self> {
        let mut values = [0.0; COMPONENT_COUNT];
        for component in Component::ALL {
            let value = map
                .get(&component)
                .ok_or(Error::MissingComponent(component))?;
            values[component.index()] = *value;
        }
        Ok(Self { values })
    }

    pub fn get(&self, component: Component) -> f64 {
        self.values[component.index()]
    }

    pub fn set(&mut self, component: Component, value: f64) {
        self.values[component.index()] = value;
    }

    /// Copy with every value clamped to 0-10.
    pub fn clamped(&self) -> Self {
        Self {
            values: self.values.map(clamp_value),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        Component::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl Serialize for ValueSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(COMPONENT_COUNT))?;
        for (component, value) in self.iter() {
            map.serialize_entry(component.key(), &value)?;
        }
        map.end()
    }
}

/// Source of a complete `ValueSet`: CLI flags, TUI sliders, or anything else a
/// front end wires up.
pub trait Collector {
    fn collect(&mut self) -> Result<ValueSet>;
}

impl Collector for ValueSet {
    fn collect(&mut self) -> Result<ValueSet> {
        Ok(*self)
    }
}
