//! Rule assembly — accumulating compiled triggers into a rule definition.
//!
//! The builder owns the trigger list for one rule under construction. Spec
//! compilation happens per statement; the builder appends the resulting
//! descriptors in generation order and assigns ids at append time. Each
//! builder owns its list outright, so compiling rules concurrently on
//! separate builders needs no synchronization.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compile::{ChannelTriggerSpec, CronTriggerSpec, ItemChangedSpec, ItemUpdatedSpec};
use crate::errors::CompileError;
use crate::types::{Trigger, TriggerDescriptor};

/// A finished rule definition: the name and trigger list handed to the host
/// engine for activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDef {
    pub name: String,
    pub triggers: Vec<Trigger>,
}

/// Builder for one rule's trigger list.
pub struct RuleBuilder {
    name: String,
    triggers: Vec<Trigger>,
    next_id: u32,
}

impl RuleBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        RuleBuilder {
            name: name.into(),
            triggers: Vec::new(),
            next_id: 1,
        }
    }

    /// Append the descriptors a channel trigger statement compiles to.
    ///
    /// A compile error appends nothing: a statement takes effect in full or
    /// not at all, so the rule never carries a subset of its intended
    /// triggers.
    pub fn when_channel(&mut self, spec: ChannelTriggerSpec) -> Result<&mut Self, CompileError> {
        let descriptors = spec.compile()?;
        self.append_all(descriptors);
        Ok(self)
    }

    pub fn when_cron(&mut self, spec: CronTriggerSpec) -> Result<&mut Self, CompileError> {
        let descriptors = spec.compile()?;
        self.append_all(descriptors);
        Ok(self)
    }

    pub fn when_item_changed(&mut self, spec: ItemChangedSpec) -> Result<&mut Self, CompileError> {
        let descriptors = spec.compile()?;
        self.append_all(descriptors);
        Ok(self)
    }

    pub fn when_item_updated(&mut self, spec: ItemUpdatedSpec) -> Result<&mut Self, CompileError> {
        let descriptors = spec.compile()?;
        self.append_all(descriptors);
        Ok(self)
    }

    fn append_all(&mut self, descriptors: Vec<TriggerDescriptor>) {
        for descriptor in descriptors {
            let id = self.next_id.to_string();
            self.next_id += 1;
            debug!(rule = %self.name, id = %id, kind = %descriptor.kind(), "appending trigger");
            self.triggers.push(Trigger { id, descriptor });
        }
    }

    /// The triggers accumulated so far, in append order.
    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    pub fn build(self) -> RuleDef {
        RuleDef {
            name: self.name,
            triggers: self.triggers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TriggerKind;

    #[test]
    fn ids_are_sequential_across_statements() {
        let mut builder = RuleBuilder::new("porch lights");
        builder
            .when_channel(
                ChannelTriggerSpec::new(vec!["power", "battery"])
                    .thing("zigbee:device:x")
                    .triggered(vec!["CHANGED", "REMOVED"]),
            )
            .expect("compiles");
        builder
            .when_cron(CronTriggerSpec::new("0 0 * * *"))
            .expect("compiles");

        let ids: Vec<&str> = builder.triggers().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(builder.triggers()[4].descriptor.kind(), TriggerKind::Cron);
    }

    #[test]
    fn failed_statement_appends_nothing() {
        let mut builder = RuleBuilder::new("door alerts");
        builder
            .when_channel(ChannelTriggerSpec::new("a:b:c#d"))
            .expect("compiles");

        let err = builder.when_channel(ChannelTriggerSpec::new(vec!["e:f:g#h", ""]));
        assert!(err.is_err());
        assert_eq!(builder.triggers().len(), 1);
    }

    #[test]
    fn build_hands_over_the_accumulated_list() {
        let mut builder = RuleBuilder::new("thermostat");
        builder
            .when_item_updated(ItemUpdatedSpec::new("Thermostat").to("HEAT"))
            .expect("compiles");
        builder
            .when_item_changed(ItemChangedSpec::new("Mode").from("AWAY"))
            .expect("compiles");

        let rule = builder.build();
        assert_eq!(rule.name, "thermostat");
        assert_eq!(rule.triggers.len(), 2);
        assert_eq!(rule.triggers[0].descriptor.get("state"), Some("HEAT"));
        assert_eq!(rule.triggers[1].descriptor.get("previousState"), Some("AWAY"));
    }
}
