//! Trigger descriptors — the contract between the compiler and the engine.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DescriptorError;
use crate::validate;

/// Engine trigger-handler types.
///
/// Each kind maps to the module-type id of a trigger handler registered with
/// the host engine; a descriptor of an unknown kind is a rule-activation
/// failure on the engine side. Serializes as the engine id string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TriggerKind {
    #[serde(rename = "core.ChannelEventTrigger")]
    ChannelEvent,
    #[serde(rename = "timer.GenericCronTrigger")]
    Cron,
    #[serde(rename = "core.ItemStateChangeTrigger")]
    ItemStateChange,
    #[serde(rename = "core.ItemStateUpdateTrigger")]
    ItemStateUpdate,
    #[serde(rename = "core.GenericEventTrigger")]
    GenericEvent,
}

impl TriggerKind {
    /// The engine module-type id this kind compiles to.
    pub fn type_id(&self) -> &'static str {
        match self {
            TriggerKind::ChannelEvent => "core.ChannelEventTrigger",
            TriggerKind::Cron => "timer.GenericCronTrigger",
            TriggerKind::ItemStateChange => "core.ItemStateChangeTrigger",
            TriggerKind::ItemStateUpdate => "core.ItemStateUpdateTrigger",
            TriggerKind::GenericEvent => "core.GenericEventTrigger",
        }
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_id())
    }
}

/// One canonical trigger: a kind plus its string-to-string config.
///
/// Immutable once constructed, equality by value, no behavior beyond read
/// access. Construction goes through [`TriggerDescriptor::new`], which
/// enforces the kind's mandatory config keys, so a structurally invalid
/// descriptor cannot exist — the engine treats malformed descriptors as
/// fatal configuration errors, and catching the structural subset here keeps
/// that failure out of the activation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDescriptor")]
pub struct TriggerDescriptor {
    #[serde(rename = "typeUID")]
    kind: TriggerKind,
    #[serde(rename = "configuration")]
    config: BTreeMap<String, String>,
}

impl TriggerDescriptor {
    /// Construct a descriptor, checking that `config` is non-empty and
    /// carries every mandatory key for `kind`.
    pub fn new(
        kind: TriggerKind,
        config: BTreeMap<String, String>,
    ) -> Result<Self, DescriptorError> {
        if config.is_empty() {
            return Err(DescriptorError::EmptyConfig { kind });
        }
        for &key in validate::required_keys(kind) {
            if !config.contains_key(key) {
                return Err(DescriptorError::MissingKey { kind, key });
            }
        }
        Ok(Self { kind, config })
    }

    pub fn kind(&self) -> TriggerKind {
        self.kind
    }

    pub fn config(&self) -> &BTreeMap<String, String> {
        &self.config
    }

    /// Look up a single config value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(String::as_str)
    }
}

/// Deserialization shadow for [`TriggerDescriptor`] — routes incoming data
/// through [`TriggerDescriptor::new`] so the mandatory-key invariant holds
/// for deserialized descriptors too.
#[derive(Deserialize)]
struct RawDescriptor {
    #[serde(rename = "typeUID")]
    kind: TriggerKind,
    #[serde(rename = "configuration")]
    config: BTreeMap<String, String>,
}

impl TryFrom<RawDescriptor> for TriggerDescriptor {
    type Error = DescriptorError;

    fn try_from(raw: RawDescriptor) -> Result<Self, Self::Error> {
        TriggerDescriptor::new(raw.kind, raw.config)
    }
}

/// A descriptor together with the id its owning rule assigned at append
/// time. The compiler never assigns ids — the same descriptor value may be
/// revisited before the rule finalizes, and id uniqueness is a whole-rule
/// property the builder enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub id: String,
    #[serde(flatten)]
    pub descriptor: TriggerDescriptor,
}
