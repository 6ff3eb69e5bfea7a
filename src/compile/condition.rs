//! Triggering condition values and their conversion surface.

use std::fmt;

use super::spec::OneOrMany;

/// A triggering condition matched against channel events.
///
/// Condition values are binding-defined strings (`"CHANGED"`, `"PRESSED"`,
/// `"START"`, ...); the `Display` form is what lands in the descriptor's
/// `event` config key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition(String);

impl Condition {
    pub fn new(value: impl Into<String>) -> Self {
        Condition(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        Condition::new(value)
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Condition(value)
    }
}

impl From<Condition> for OneOrMany<Condition> {
    fn from(value: Condition) -> Self {
        OneOrMany::One(value)
    }
}

impl From<&str> for OneOrMany<Condition> {
    fn from(value: &str) -> Self {
        OneOrMany::One(Condition::new(value))
    }
}

impl From<String> for OneOrMany<Condition> {
    fn from(value: String) -> Self {
        OneOrMany::One(Condition(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_wire_form() {
        let condition = Condition::new("PRESSED");
        assert_eq!(condition.to_string(), "PRESSED");
        assert_eq!(condition.as_str(), "PRESSED");
    }

    #[test]
    fn scalar_conversions_wrap_to_one() {
        assert_eq!(
            OneOrMany::from("START"),
            OneOrMany::One(Condition::new("START"))
        );
        assert_eq!(
            OneOrMany::from(Condition::new("STOP")).flatten(),
            vec![Condition::new("STOP")]
        );
    }
}
