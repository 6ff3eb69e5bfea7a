//! Channel event trigger compilation.
//!
//! A channel trigger statement names one or more channels — fully qualified
//! (`binding:type:thing#channel`) or shorthand (`channel_id`) under a
//! default thing — and zero or more triggering conditions. Compilation
//! expands the statement into one [`TriggerDescriptor`] per
//! (channel, condition) combination, because the engine's descriptor schema
//! has no notion of disjunction within a single trigger.

use std::collections::BTreeMap;

use tracing::trace;

use super::condition::Condition;
use super::spec::OneOrMany;
use crate::errors::CompileError;
use crate::types::{TriggerDescriptor, TriggerKind};

/// One declarative channel trigger statement, before expansion.
#[derive(Debug, Clone)]
pub struct ChannelTriggerSpec {
    channels: OneOrMany<String>,
    thing: Option<String>,
    conditions: OneOrMany<Condition>,
}

impl ChannelTriggerSpec {
    pub fn new(channels: impl Into<OneOrMany<String>>) -> Self {
        ChannelTriggerSpec {
            channels: channels.into(),
            thing: None,
            conditions: OneOrMany::none(),
        }
    }

    /// Default scope: a thing UID prepended to every shorthand channel
    /// identifier. Without it, identifiers are taken verbatim and must
    /// already be fully qualified.
    pub fn thing(mut self, thing: impl Into<String>) -> Self {
        self.thing = Some(thing.into());
        self
    }

    /// Conditions to match. Absent conditions mean "any event on the
    /// channel"; each supplied condition becomes its own descriptor.
    pub fn triggered(mut self, conditions: impl Into<OneOrMany<Condition>>) -> Self {
        self.conditions = conditions.into();
        self
    }

    /// Expand into engine descriptors, channel-major, condition-minor.
    ///
    /// Qualification is plain string concatenation — no UID syntax is
    /// checked here. A malformed or double-qualified UID surfaces as an
    /// engine-side configuration error at rule activation, which keeps this
    /// compiler engine-agnostic.
    pub fn compile(&self) -> Result<Vec<TriggerDescriptor>, CompileError> {
        let channels = self.channels.clone().flatten();
        if channels.is_empty() {
            return Err(CompileError::NoChannels);
        }
        if let Some(index) = channels.iter().position(|c| c.trim().is_empty()) {
            return Err(CompileError::BlankChannel { index });
        }

        let conditions: Vec<Option<Condition>> = {
            let flat = self.conditions.clone().flatten();
            if flat.is_empty() {
                vec![None]
            } else {
                flat.into_iter().map(Some).collect()
            }
        };

        let mut descriptors = Vec::with_capacity(channels.len() * conditions.len());
        for channel in &channels {
            let channel_uid = match &self.thing {
                Some(thing) => format!("{thing}:{channel}"),
                None => channel.clone(),
            };
            for condition in &conditions {
                trace!(
                    channel = %channel_uid,
                    thing = ?self.thing,
                    condition = ?condition,
                    "expanding channel trigger"
                );
                let mut config = BTreeMap::new();
                config.insert("channelUID".to_string(), channel_uid.clone());
                if let Some(condition) = condition {
                    config.insert("event".to_string(), condition.to_string());
                }
                descriptors.push(TriggerDescriptor::new(TriggerKind::ChannelEvent, config)?);
            }
        }
        Ok(descriptors)
    }
}
