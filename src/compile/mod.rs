//! Trigger specification compilers.
//!
//! Each spec type captures one declarative rule-authoring statement and
//! compiles it into the flat list of engine descriptors it stands for. The
//! compilers share one discipline: scalar-or-sequence inputs are flattened
//! once at the entry point ([`OneOrMany`]), expansion is a deterministic
//! cross product, and shape errors fail before anything is produced — a
//! partially compiled statement must never reach the rule builder.

mod channel;
mod condition;
mod cron;
mod item;
mod spec;

pub use channel::ChannelTriggerSpec;
pub use condition::Condition;
pub use cron::CronTriggerSpec;
pub(crate) use cron::normalize_cron_expression;
pub use item::{ItemChangedSpec, ItemUpdatedSpec};
pub use spec::OneOrMany;
