//! Tri-state field for partial updates.
//!
//! A JSON patch field can be missing, `null`, or carry a value. Plain
//! `Option<T>` collapses the first two; [`Patch`] keeps them apart so the
//! service decides what an explicit `null` means.
//!
//! Fields must be declared with `#[serde(default)]` so that a missing key
//! becomes [`Patch::Absent`]; serde only calls the deserializer for keys
//! that are present.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// The key was not present.
    #[default]
    Absent,
    /// The key was present with an explicit `null`.
    Null,
    /// The key was present with a value.
    Value(T),
}

impl<T> Patch<T> {
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    /// The value to write. Both [`Patch::Absent`] and [`Patch::Null`] leave
    /// the stored field untouched.
    pub fn into_write(self) -> Option<T> {
        match self {
            Patch::Value(v) => Some(v),
            Patch::Absent | Patch::Null => None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        field: Patch<String>,
    }

    fn parse(json: &str) -> Patch<String> {
        serde_json::from_str::<Probe>(json).unwrap().field
    }

    #[test]
    fn missing_key_is_absent() {
        assert_eq!(parse("{}"), Patch::Absent);
    }

    #[test]
    fn explicit_null_is_null() {
        assert_eq!(parse(r#"{"field": null}"#), Patch::Null);
    }

    #[test]
    fn value_is_value() {
        assert_eq!(parse(r#"{"field": "x"}"#), Patch::Value("x".to_string()));
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(serde_json::from_str::<Probe>(r#"{"field": 3}"#).is_err());
    }

    #[test]
    fn only_values_are_written() {
        assert_eq!(Patch::<i32>::Absent.into_write(), None);
        assert_eq!(Patch::<i32>::Null.into_write(), None);
        assert_eq!(Patch::Value(7).into_write(), Some(7));
    }
}
