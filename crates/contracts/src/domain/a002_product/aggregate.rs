use serde::{Deserialize, Serialize};

use crate::domain::a001_uom::UomId;
use crate::domain::common::EntityId;
use crate::shared::decimal::de_decimal;
use crate::shared::search::Searchable;
use crate::shared::text::de_string_or_default;
use crate::shared::validation::ValidationError;

crate::entity_id!(
    /// Product id
    ProductId
);

/// Product as listed by `GET /products`.
///
/// `uom_name` is denormalized by the server for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(deserialize_with = "de_decimal")]
    pub price_per_unit: f64,
    pub uom_id: UomId,
    #[serde(default, deserialize_with = "de_string_or_default")]
    pub uom_name: String,
}

impl Product {
    /// Caption used in order line selects: `Rice (₹50.00/kg)`.
    pub fn option_label(&self, formatted_price: &str) -> String {
        format!("{} ({}/{})", self.name, formatted_price, self.uom_name)
    }
}

impl Searchable for Product {
    fn search_text(&self) -> &str {
        &self.name
    }
}

/// Body of `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub price_per_unit: f64,
    pub uom_id: UomId,
}

/// Raw state of the product modal, exactly as typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductForm {
    /// `Some` when editing an existing product.
    pub id: Option<ProductId>,
    pub name: String,
    pub price: String,
    /// Selected `<option>` value; empty when nothing is selected.
    pub uom_id: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            price: product.price_per_unit.to_string(),
            uom_id: product.uom_id.as_string(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Validate required fields and build the request body.
    ///
    /// Name must be non-blank, price a positive number, UOM selected.
    pub fn to_dto(&self) -> Result<ProductDto, ValidationError> {
        let name = self.name.trim();
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0);
        let uom_id = UomId::from_string(&self.uom_id)
            .ok()
            .filter(|id| id.value() != 0);

        match (name.is_empty(), price, uom_id) {
            (false, Some(price_per_unit), Some(uom_id)) => Ok(ProductDto {
                name: name.to_string(),
                price_per_unit,
                uom_id,
            }),
            _ => Err(ValidationError::MissingProductFields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rice() -> Product {
        Product {
            id: ProductId(1),
            name: "Rice".into(),
            price_per_unit: 50.0,
            uom_id: UomId(2),
            uom_name: "kg".into(),
        }
    }

    #[test]
    fn decodes_decimal_price_sent_as_string() {
        let json = r#"{
            "id": 1, "name": "Rice", "price_per_unit": "50.00",
            "uom_id": 2, "uom_name": "kg", "is_active": 1,
            "created_at": "Tue, 15 Oct 2024 10:30:00 GMT"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product, rice());
    }

    #[test]
    fn option_label_shows_price_and_unit() {
        assert_eq!(rice().option_label("₹50.00"), "Rice (₹50.00/kg)");
    }

    #[test]
    fn edit_form_round_trips_to_dto() {
        let form = ProductForm::from_product(&rice());
        assert!(form.is_edit_mode());
        assert_eq!(
            form.to_dto().unwrap(),
            ProductDto {
                name: "Rice".into(),
                price_per_unit: 50.0,
                uom_id: UomId(2),
            }
        );
    }

    #[test]
    fn missing_fields_are_rejected() {
        let base = ProductForm {
            id: None,
            name: "Sugar".into(),
            price: "42.5".into(),
            uom_id: "1".into(),
        };
        assert!(base.to_dto().is_ok());

        for broken in [
            ProductForm { name: "  ".into(), ..base.clone() },
            ProductForm { price: "".into(), ..base.clone() },
            ProductForm { price: "0".into(), ..base.clone() },
            ProductForm { price: "-3".into(), ..base.clone() },
            ProductForm { price: "abc".into(), ..base.clone() },
            ProductForm { uom_id: "".into(), ..base.clone() },
        ] {
            assert_eq!(broken.to_dto(), Err(ValidationError::MissingProductFields));
        }
    }
}
