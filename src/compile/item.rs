//! Item state trigger compilation.
//!
//! Item triggers follow the same expansion discipline as channel triggers:
//! scalar-or-sequence inputs, a deterministic cross product, one descriptor
//! per combination. State values are opaque strings here — coercion to the
//! item's type system is the engine's concern.

use std::collections::BTreeMap;

use tracing::trace;

use super::spec::OneOrMany;
use crate::errors::CompileError;
use crate::types::{TriggerDescriptor, TriggerKind};

fn flatten_items(items: &OneOrMany<String>) -> Result<Vec<String>, CompileError> {
    let items = items.clone().flatten();
    if items.is_empty() {
        return Err(CompileError::NoItems);
    }
    if let Some(index) = items.iter().position(|i| i.trim().is_empty()) {
        return Err(CompileError::BlankItem { index });
    }
    Ok(items)
}

/// Flatten an optional state filter; an empty filter means "any state" and
/// contributes a single absent element to the cross product.
fn flatten_states(states: &OneOrMany<String>) -> Vec<Option<String>> {
    let flat = states.clone().flatten();
    if flat.is_empty() {
        vec![None]
    } else {
        flat.into_iter().map(Some).collect()
    }
}

/// A state-change trigger statement: fire when any of the named items
/// changes, optionally filtered by previous and/or new state.
#[derive(Debug, Clone)]
pub struct ItemChangedSpec {
    items: OneOrMany<String>,
    from: OneOrMany<String>,
    to: OneOrMany<String>,
}

impl ItemChangedSpec {
    pub fn new(items: impl Into<OneOrMany<String>>) -> Self {
        ItemChangedSpec {
            items: items.into(),
            from: OneOrMany::none(),
            to: OneOrMany::none(),
        }
    }

    pub fn from(mut self, states: impl Into<OneOrMany<String>>) -> Self {
        self.from = states.into();
        self
    }

    pub fn to(mut self, states: impl Into<OneOrMany<String>>) -> Self {
        self.to = states.into();
        self
    }

    /// Expand item-major, then from-state, then to-state.
    pub fn compile(&self) -> Result<Vec<TriggerDescriptor>, CompileError> {
        let items = flatten_items(&self.items)?;
        let from = flatten_states(&self.from);
        let to = flatten_states(&self.to);

        let mut descriptors = Vec::with_capacity(items.len() * from.len() * to.len());
        for item in &items {
            for previous in &from {
                for state in &to {
                    trace!(item = %item, from = ?previous, to = ?state, "expanding changed trigger");
                    let mut config = BTreeMap::new();
                    config.insert("itemName".to_string(), item.clone());
                    if let Some(previous) = previous {
                        config.insert("previousState".to_string(), previous.clone());
                    }
                    if let Some(state) = state {
                        config.insert("state".to_string(), state.clone());
                    }
                    descriptors
                        .push(TriggerDescriptor::new(TriggerKind::ItemStateChange, config)?);
                }
            }
        }
        Ok(descriptors)
    }
}

/// A state-update trigger statement: fire when any of the named items
/// receives an update, optionally filtered by the updated state.
#[derive(Debug, Clone)]
pub struct ItemUpdatedSpec {
    items: OneOrMany<String>,
    to: OneOrMany<String>,
}

impl ItemUpdatedSpec {
    pub fn new(items: impl Into<OneOrMany<String>>) -> Self {
        ItemUpdatedSpec {
            items: items.into(),
            to: OneOrMany::none(),
        }
    }

    pub fn to(mut self, states: impl Into<OneOrMany<String>>) -> Self {
        self.to = states.into();
        self
    }

    pub fn compile(&self) -> Result<Vec<TriggerDescriptor>, CompileError> {
        let items = flatten_items(&self.items)?;
        let to = flatten_states(&self.to);

        let mut descriptors = Vec::with_capacity(items.len() * to.len());
        for item in &items {
            for state in &to {
                trace!(item = %item, to = ?state, "expanding updated trigger");
                let mut config = BTreeMap::new();
                config.insert("itemName".to_string(), item.clone());
                if let Some(state) = state {
                    config.insert("state".to_string(), state.clone());
                }
                descriptors.push(TriggerDescriptor::new(TriggerKind::ItemStateUpdate, config)?);
            }
        }
        Ok(descriptors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_cross_product_covers_items_and_states() {
        let descriptors = ItemChangedSpec::new(vec!["Porch_Light", "Garage_Light"])
            .from("OFF")
            .to(vec!["ON", "DIMMED"])
            .compile()
            .expect("compiles");
        assert_eq!(descriptors.len(), 4);
        assert_eq!(descriptors[0].get("itemName"), Some("Porch_Light"));
        assert_eq!(descriptors[0].get("previousState"), Some("OFF"));
        assert_eq!(descriptors[0].get("state"), Some("ON"));
        assert_eq!(descriptors[1].get("state"), Some("DIMMED"));
        assert_eq!(descriptors[2].get("itemName"), Some("Garage_Light"));
    }

    #[test]
    fn changed_without_state_filters_has_only_item_name() {
        let descriptors = ItemChangedSpec::new("Front_Door").compile().expect("compiles");
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].get("previousState"), None);
        assert_eq!(descriptors[0].get("state"), None);
    }

    #[test]
    fn updated_expands_items_by_states() {
        let descriptors = ItemUpdatedSpec::new("Thermostat")
            .to(vec!["HEAT", "COOL"])
            .compile()
            .expect("compiles");
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].kind(), TriggerKind::ItemStateUpdate);
        assert_eq!(descriptors[1].get("state"), Some("COOL"));
    }

    #[test]
    fn empty_item_list_is_a_shape_error() {
        let err = ItemUpdatedSpec::new(OneOrMany::none()).compile().unwrap_err();
        assert!(matches!(err, CompileError::NoItems));
    }

    #[test]
    fn blank_item_is_a_shape_error() {
        let err = ItemChangedSpec::new(vec!["Light", ""]).compile().unwrap_err();
        assert!(matches!(err, CompileError::BlankItem { index: 1 }));
    }
}
