use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a server-side entity.
///
/// Ids travel through HTML `<select>` values and URL paths as strings, so
/// every id type converts both ways.
pub trait EntityId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}

/// Declares a transparent `i64` id newtype implementing [`EntityId`].
#[macro_export]
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl $crate::domain::common::EntityId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.trim()
                    .parse::<i64>()
                    .map($name)
                    .map_err(|e| format!("Invalid {} '{}': {}", stringify!($name), s, e))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::EntityId;

    crate::entity_id!(
        /// Test-only id
        SampleId
    );

    #[test]
    fn parses_select_values() {
        assert_eq!(SampleId::from_string(" 7 ").unwrap(), SampleId(7));
        assert!(SampleId::from_string("").is_err());
        assert_eq!(SampleId(12).as_string(), "12");
    }

    #[test]
    fn serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&SampleId(3)).unwrap(), "3");
        let id: SampleId = serde_json::from_str("5").unwrap();
        assert_eq!(id, SampleId(5));
    }
}
