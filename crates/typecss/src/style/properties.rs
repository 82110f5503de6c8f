//! Typed property assignments for a rule.

use std::collections::BTreeMap;

use crate::schema::PropertySlot;
use crate::types::Value;

/// Set of typed property assignments.
///
/// Assignments are kept in canonical slot order, so iteration order (and
/// therefore emission order) does not depend on the order slots were set in.
/// Setting a slot twice replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    values: BTreeMap<PropertySlot, Value>,
}

impl Props {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a value to a slot, returning the previous value if any.
    pub fn set(&mut self, slot: PropertySlot, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(slot, value.into())
    }

    /// Get the value assigned to a slot.
    pub fn get(&self, slot: PropertySlot) -> Option<&Value> {
        self.values.get(&slot)
    }

    /// Remove a slot's assignment.
    pub fn remove(&mut self, slot: PropertySlot) -> Option<Value> {
        self.values.remove(&slot)
    }

    /// Check if a slot is assigned.
    pub fn contains(&self, slot: PropertySlot) -> bool {
        self.values.contains_key(&slot)
    }

    /// Number of assigned slots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no slot is assigned.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over assignments in canonical slot order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertySlot, &Value)> {
        self.values.iter().map(|(slot, value)| (*slot, value))
    }

    /// Merge another set of properties into this one.
    ///
    /// Slots assigned in `other` overwrite the same slots here.
    pub fn merge(&mut self, other: &Props) {
        for (slot, value) in other.iter() {
            self.values.insert(slot, value.clone());
        }
    }
}

impl<V: Into<Value>> FromIterator<(PropertySlot, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (PropertySlot, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (slot, value) in iter {
            props.set(slot, value);
        }
        props
    }
}
