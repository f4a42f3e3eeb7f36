use serde::{Deserialize, Serialize};

use crate::shared::search::Searchable;
use crate::shared::validation::ValidationError;

crate::entity_id!(
    /// Unit of measure id
    UomId
);

/// Unit of measure ("kg", "piece", "litre") a product is priced in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Uom {
    pub id: UomId,
    pub name: String,
}

impl Searchable for Uom {
    fn search_text(&self) -> &str {
        &self.name
    }
}

/// Body of `POST /uoms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UomDto {
    pub name: String,
}

impl UomDto {
    /// Build from the raw form input; the name is trimmed and required.
    pub fn from_input(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingUomName);
        }
        Ok(Self {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_required() {
        assert_eq!(UomDto::from_input("  kg ").unwrap().name, "kg");
        assert_eq!(
            UomDto::from_input("   "),
            Err(ValidationError::MissingUomName)
        );
    }

    #[test]
    fn decodes_server_row() {
        let uom: Uom = serde_json::from_str(r#"{"id": 2, "name": "litre"}"#).unwrap();
        assert_eq!(uom.id, UomId(2));
        assert_eq!(uom.name, "litre");
    }
}
