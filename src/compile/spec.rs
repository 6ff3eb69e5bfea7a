//! Scalar-or-sequence input normalization.

/// A spec parameter that accepts either a single value or an arbitrarily
/// nested sequence of values, always flattened to a flat ordered sequence
/// before the expansion logic sees it.
///
/// Nesting exists purely for call-site convenience — grouping channels by
/// thing, reusing a shared condition list — and carries no meaning:
/// `[["a", "b"], "c"]` compiles identically to `["a", "b", "c"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<OneOrMany<T>>),
}

impl<T> OneOrMany<T> {
    /// An empty sequence; flattens to nothing.
    pub fn none() -> Self {
        OneOrMany::Many(Vec::new())
    }

    /// Depth-first, order-preserving flattening.
    pub fn flatten(self) -> Vec<T> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<T>) {
        match self {
            OneOrMany::One(value) => out.push(value),
            OneOrMany::Many(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::none()
    }
}

impl<T, V> From<Vec<V>> for OneOrMany<T>
where
    V: Into<OneOrMany<T>>,
{
    fn from(values: Vec<V>) -> Self {
        OneOrMany::Many(values.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_flattens_to_one_element() {
        let spec: OneOrMany<String> = "a".into();
        assert_eq!(spec.flatten(), vec!["a".to_string()]);
    }

    #[test]
    fn nested_sequences_flatten_in_order() {
        let spec: OneOrMany<String> = OneOrMany::Many(vec![
            vec!["a", "b"].into(),
            "c".into(),
            OneOrMany::Many(vec![OneOrMany::Many(vec!["d".into()])]),
        ]);
        assert_eq!(
            spec.flatten(),
            vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string()
            ]
        );
    }

    #[test]
    fn none_flattens_to_empty() {
        assert!(OneOrMany::<String>::none().flatten().is_empty());
    }
}
