//! Cron schedule trigger compilation.

use std::collections::BTreeMap;

use cron::Schedule;
use tracing::trace;

use crate::errors::CompileError;
use crate::types::{TriggerDescriptor, TriggerKind};

/// A time-based trigger statement: fire on a cron schedule.
///
/// Unlike channel UIDs, cron syntax is validated at compile time — the
/// expression grammar is not engine-specific, so a bad expression can be
/// caught before it ever reaches the rule.
#[derive(Debug, Clone)]
pub struct CronTriggerSpec {
    expression: String,
}

/// Prepare a cron expression for parsing with the `cron` crate.
///
/// The engine's native grammar is Quartz: `sec min hour dom month dow`
/// with an optional trailing year, both of which the `cron` crate parses
/// as-is. A 5-field standard cron expression (`min hour dom month dow`)
/// gets seconds and year fields added.
pub(crate) fn normalize_cron_expression(expr: &str) -> String {
    let fields: Vec<&str> = expr.split_whitespace().collect();
    match fields.len() {
        5 => format!("0 {expr} *"),
        _ => expr.to_string(),
    }
}

impl CronTriggerSpec {
    pub fn new(expression: impl Into<String>) -> Self {
        CronTriggerSpec {
            expression: expression.into(),
        }
    }

    /// Produce the single descriptor this statement stands for. The config
    /// carries the author's expression verbatim; only validity is checked
    /// here, never rewritten.
    pub fn compile(&self) -> Result<Vec<TriggerDescriptor>, CompileError> {
        let normalized = normalize_cron_expression(&self.expression);
        if let Err(e) = normalized.parse::<Schedule>() {
            return Err(CompileError::InvalidCron {
                expression: self.expression.clone(),
                message: e.to_string(),
            });
        }

        trace!(expression = %self.expression, "expanding cron trigger");
        let mut config = BTreeMap::new();
        config.insert("cronExpression".to_string(), self.expression.clone());
        Ok(vec![TriggerDescriptor::new(TriggerKind::Cron, config)?])
    }
}
