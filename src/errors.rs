//! Error types for descriptor construction and trigger compilation.

use thiserror::Error;

use crate::types::TriggerKind;

/// Errors from [`TriggerDescriptor::new`](crate::types::TriggerDescriptor::new).
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("empty config for trigger kind {kind}")]
    EmptyConfig { kind: TriggerKind },
    #[error("missing mandatory config key '{key}' for trigger kind {kind}")]
    MissingKey { kind: TriggerKind, key: &'static str },
}

/// Errors from compiling a trigger specification.
///
/// These are caller-input shape errors and surface before any descriptor is
/// handed to the rule builder. Semantic errors — a malformed channel UID, an
/// unregistered channel — are deliberately NOT detected here; the host engine
/// reports them as configuration errors at rule activation.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("trigger specification names no channels")]
    NoChannels,
    #[error("blank channel identifier at position {index}")]
    BlankChannel { index: usize },
    #[error("trigger specification names no items")]
    NoItems,
    #[error("blank item name at position {index}")]
    BlankItem { index: usize },
    #[error("invalid cron expression '{expression}': {message}")]
    InvalidCron { expression: String, message: String },
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}
