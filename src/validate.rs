//! Structural validation of trigger descriptors.
//!
//! One table maps each [`TriggerKind`] to its config schema: the mandatory
//! keys [`TriggerDescriptor::new`] enforces at construction, the optional
//! keys a kind recognizes, and a JSON schema for tooling. Adding a trigger
//! kind means extending these tables — the spec compilers' expansion logic
//! never changes.

use cron::Schedule;
use serde_json::{json, Value};

use crate::compile::normalize_cron_expression;
use crate::types::{TriggerDescriptor, TriggerKind};

/// Config keys that must be present for a descriptor of this kind.
pub fn required_keys(kind: TriggerKind) -> &'static [&'static str] {
    match kind {
        TriggerKind::ChannelEvent => &["channelUID"],
        TriggerKind::Cron => &["cronExpression"],
        TriggerKind::ItemStateChange | TriggerKind::ItemStateUpdate => &["itemName"],
        TriggerKind::GenericEvent => &["eventTopic", "eventSource", "eventTypes"],
    }
}

/// Config keys a kind recognizes beyond the mandatory ones.
pub fn optional_keys(kind: TriggerKind) -> &'static [&'static str] {
    match kind {
        TriggerKind::ChannelEvent => &["event"],
        TriggerKind::Cron => &[],
        TriggerKind::ItemStateChange => &["previousState", "state"],
        TriggerKind::ItemStateUpdate => &["state"],
        TriggerKind::GenericEvent => &[],
    }
}

/// JSON schema for a kind's config object.
pub fn config_schema(kind: TriggerKind) -> Value {
    let mut properties = serde_json::Map::new();
    for key in required_keys(kind).iter().chain(optional_keys(kind)) {
        properties.insert((*key).to_string(), json!({ "type": "string" }));
    }
    json!({
        "type": "object",
        "properties": Value::Object(properties),
        "required": required_keys(kind),
    })
}

/// Validate a descriptor beyond the construction-time checks: unknown or
/// blank config values and unparsable cron expressions. This is the last
/// gate before a descriptor list is handed to the engine, where the same
/// problems would be fatal activation errors.
///
/// Returns `Ok(())` if the descriptor is valid, or `Err(Vec<String>)` with a
/// list of human-readable validation errors.
pub fn validate_descriptor(descriptor: &TriggerDescriptor) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let kind = descriptor.kind();

    for key in required_keys(kind) {
        match descriptor.get(key) {
            None => errors.push(format!("missing mandatory key '{key}' for {kind}")),
            Some(value) if value.trim().is_empty() => {
                errors.push(format!("blank value for mandatory key '{key}'"));
            }
            Some(_) => {}
        }
    }

    for key in descriptor.config().keys() {
        let known = required_keys(kind).contains(&key.as_str())
            || optional_keys(kind).contains(&key.as_str());
        if !known {
            errors.push(format!("unknown config key '{key}' for {kind}"));
        }
    }

    if kind == TriggerKind::Cron {
        if let Some(expr) = descriptor.get("cronExpression") {
            if normalize_cron_expression(expr).parse::<Schedule>().is_err() {
                errors.push(format!("invalid cron expression: {expr}"));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn descriptor(kind: TriggerKind, pairs: &[(&str, &str)]) -> TriggerDescriptor {
        let config: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TriggerDescriptor::new(kind, config).expect("constructible")
    }

    #[test]
    fn compiled_channel_descriptor_validates() {
        let d = descriptor(
            TriggerKind::ChannelEvent,
            &[("channelUID", "astro:sun:home:rise#event"), ("event", "START")],
        );
        assert!(validate_descriptor(&d).is_ok());
    }

    #[test]
    fn unknown_key_is_flagged() {
        let d = descriptor(
            TriggerKind::ChannelEvent,
            &[("channelUID", "a:b:c#d"), ("evnet", "START")],
        );
        let errors = validate_descriptor(&d).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("unknown config key 'evnet'"));
    }

    #[test]
    fn blank_mandatory_value_is_flagged() {
        let d = descriptor(TriggerKind::ItemStateUpdate, &[("itemName", " ")]);
        assert!(validate_descriptor(&d).is_err());
    }

    #[test]
    fn quartz_six_field_cron_descriptor_validates() {
        let d = descriptor(TriggerKind::Cron, &[("cronExpression", "0 0 12 * * ?")]);
        assert!(validate_descriptor(&d).is_ok());
    }

    #[test]
    fn unparsable_cron_expression_is_flagged() {
        // Constructible (the key is present) but still invalid for the engine.
        let d = descriptor(TriggerKind::Cron, &[("cronExpression", "not a schedule")]);
        let errors = validate_descriptor(&d).unwrap_err();
        assert!(errors[0].contains("invalid cron expression"));
    }

    #[test]
    fn schema_lists_required_keys() {
        let schema = config_schema(TriggerKind::ChannelEvent);
        assert_eq!(schema["required"], serde_json::json!(["channelUID"]));
        assert!(schema["properties"]["event"].is_object());
    }
}
