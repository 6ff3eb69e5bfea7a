//! Rulegate — trigger compilation for automation rules.
//!
//! This crate turns flexible rule-authoring trigger specifications ("fire
//! when any of these channels changes, or when this thing's channel emits
//! event X") into the canonical, engine-consumable descriptor list attached
//! to a rule under construction. It resolves shorthand vs. fully-qualified
//! channel identifiers, applies an optional default scope, and expands
//! channel/condition sequences into one descriptor per combination.
//!
//! The crate is a pure, synchronous transformation layer: it owns no I/O,
//! no persistence, and no engine state. The host automation engine and the
//! rule lifecycle around it are external collaborators that consume the
//! [`TriggerDescriptor`] values produced here.

pub mod builder;
pub mod compile;
pub mod errors;
pub mod types;
pub mod validate;

// Re-export public types at the crate level.

// builder
pub use builder::{RuleBuilder, RuleDef};

// compile
pub use compile::{
    ChannelTriggerSpec, Condition, CronTriggerSpec, ItemChangedSpec, ItemUpdatedSpec, OneOrMany,
};

// errors
pub use errors::{CompileError, DescriptorError};

// types
pub use types::{Trigger, TriggerDescriptor, TriggerKind};

// validate
pub use validate::{config_schema, optional_keys, required_keys, validate_descriptor};
