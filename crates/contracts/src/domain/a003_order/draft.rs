//! Draft order: the line-item editor behind the "Create Order" modal.
//!
//! Lines are keyed by a [`LineId`] generated when the line is added, so
//! removing a row never shifts the meaning of the others. Every mutation
//! recomputes the order total before returning; `total()` always equals the
//! sum of the present lines' totals.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::aggregate::{CreateOrderDto, CreateOrderLineDto};
use crate::domain::a002_product::{Product, ProductId};
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub Uuid);

impl LineId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

/// One editable row of the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftLine {
    pub id: LineId,
    pub product_id: Option<ProductId>,
    /// Unit price of the selected product at selection time.
    pub unit_price: f64,
    pub quantity: f64,
    /// Quantity exactly as typed, so the input keeps its text.
    pub quantity_input: String,
    /// Line total: `unit_price × quantity`.
    pub price: f64,
}

impl DraftLine {
    fn blank() -> Self {
        Self {
            id: LineId::new_v4(),
            product_id: None,
            unit_price: 0.0,
            quantity: 0.0,
            quantity_input: String::new(),
            price: 0.0,
        }
    }

    /// A line is submitted only with a product and a positive quantity.
    pub fn is_valid(&self) -> bool {
        self.product_id.is_some() && self.quantity > 0.0
    }

    fn select(&mut self, product: Option<&Product>) {
        self.product_id = product.map(|p| p.id);
        self.unit_price = product.map(|p| non_negative(p.price_per_unit)).unwrap_or(0.0);
    }

    fn recalculate(&mut self) {
        self.price = non_negative(self.unit_price) * non_negative(self.quantity);
    }
}

/// Missing, negative and non-finite inputs all count as zero.
fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse a quantity input; anything that is not a positive number is 0.
pub fn parse_quantity(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map(non_negative).unwrap_or(0.0)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftOrder {
    pub customer_name: String,
    lines: Vec<DraftLine>,
    total: f64,
}

impl DraftOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh draft as the modal opens it: one blank line.
    pub fn with_blank_line() -> Self {
        let mut draft = Self::new();
        draft.add_item();
        draft
    }

    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> Option<&DraftLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn add_item(&mut self) -> LineId {
        let line = DraftLine::blank();
        let id = line.id;
        self.lines.push(line);
        self.recompute_total();
        id
    }

    /// Remove a line by identity. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        let removed = self.lines.len() != before;
        self.recompute_total();
        removed
    }

    /// Set both product and quantity of a line and recompute.
    pub fn update_item(&mut self, id: LineId, product: Option<&Product>, quantity: f64) -> bool {
        let updated = self.with_line(id, |line| {
            line.select(product);
            line.quantity = non_negative(quantity);
            line.quantity_input = if quantity.is_finite() {
                quantity.to_string()
            } else {
                String::new()
            };
        });
        self.recompute_total();
        updated
    }

    /// Product `<select>` changed.
    pub fn set_product(&mut self, id: LineId, product: Option<&Product>) -> bool {
        let updated = self.with_line(id, |line| line.select(product));
        self.recompute_total();
        updated
    }

    /// Quantity input changed; `raw` is kept verbatim for display.
    pub fn set_quantity(&mut self, id: LineId, raw: &str) -> bool {
        let updated = self.with_line(id, |line| {
            line.quantity = parse_quantity(raw);
            line.quantity_input = raw.to_string();
        });
        self.recompute_total();
        updated
    }

    pub fn valid_lines(&self) -> impl Iterator<Item = &DraftLine> {
        self.lines.iter().filter(|l| l.is_valid())
    }

    /// Validate and build the `POST /orders` body.
    ///
    /// Checks run in order: customer name first, then at least one valid line.
    /// Invalid lines are dropped silently.
    pub fn build_payload(&self) -> Result<CreateOrderDto, ValidationError> {
        let customer_name = self.customer_name.trim();
        if customer_name.is_empty() {
            return Err(ValidationError::MissingCustomer);
        }

        let order_items: Vec<CreateOrderLineDto> = self
            .valid_lines()
            .filter_map(|line| {
                line.product_id.map(|product_id| CreateOrderLineDto {
                    product_id,
                    quantity: line.quantity,
                })
            })
            .collect();

        if order_items.is_empty() {
            return Err(ValidationError::NoValidItems);
        }

        Ok(CreateOrderDto {
            customer_name: customer_name.to_string(),
            order_items,
        })
    }

    fn with_line(&mut self, id: LineId, f: impl FnOnce(&mut DraftLine)) -> bool {
        match self.lines.iter_mut().find(|l| l.id == id) {
            Some(line) => {
                f(line);
                line.recalculate();
                true
            }
            None => false,
        }
    }

    fn recompute_total(&mut self) {
        self.total = self.lines.iter().map(|l| l.price).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_uom::UomId;
    use pretty_assertions::assert_eq;

    fn product(id: i64, price: f64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("P{}", id),
            price_per_unit: price,
            uom_id: UomId(1),
            uom_name: "kg".into(),
        }
    }

    fn sum_of_lines(draft: &DraftOrder) -> f64 {
        draft.lines().iter().map(|l| l.price).sum()
    }

    #[test]
    fn fresh_draft_has_one_blank_line_and_zero_total() {
        let draft = DraftOrder::with_blank_line();
        assert_eq!(draft.len(), 1);
        assert_eq!(draft.total(), 0.0);
        assert!(!draft.lines()[0].is_valid());
    }

    #[test]
    fn line_total_is_price_times_quantity() {
        let rice = product(1, 50.0);
        let mut draft = DraftOrder::with_blank_line();
        let id = draft.lines()[0].id;

        draft.set_product(id, Some(&rice));
        assert_eq!(draft.total(), 0.0);

        draft.set_quantity(id, "3");
        let line = draft.line(id).unwrap();
        assert_eq!(line.price, 150.0);
        assert_eq!(format!("{:.2}", line.price), "150.00");
        assert_eq!(draft.total(), 150.0);
    }

    #[test]
    fn invalid_inputs_count_as_zero() {
        let mut draft = DraftOrder::new();
        let id = draft.add_item();
        draft.set_product(id, Some(&product(1, 10.0)));

        for raw in ["", "abc", "-2", "NaN", "inf"] {
            draft.set_quantity(id, raw);
            assert_eq!(draft.total(), 0.0, "quantity {:?}", raw);
            assert_eq!(draft.line(id).unwrap().quantity_input, raw);
        }

        draft.update_item(id, Some(&product(2, f64::NAN)), 4.0);
        assert_eq!(draft.total(), 0.0);
    }

    #[test]
    fn clearing_the_product_zeroes_the_line() {
        let mut draft = DraftOrder::new();
        let id = draft.add_item();
        draft.update_item(id, Some(&product(1, 20.0)), 2.0);
        assert_eq!(draft.total(), 40.0);

        draft.set_product(id, None);
        assert_eq!(draft.total(), 0.0);
        assert_eq!(draft.line(id).unwrap().quantity, 2.0);
    }

    #[test]
    fn removing_a_middle_line_keeps_the_others_intact() {
        let mut draft = DraftOrder::new();
        let a = draft.add_item();
        let b = draft.add_item();
        let c = draft.add_item();
        draft.update_item(a, Some(&product(1, 1.0)), 1.0);
        draft.update_item(b, Some(&product(2, 10.0)), 1.0);
        draft.update_item(c, Some(&product(3, 100.0)), 1.0);

        assert!(draft.remove_item(b));
        assert_eq!(draft.total(), 101.0);

        // Later edits still land on the right rows.
        draft.set_quantity(c, "2");
        assert_eq!(draft.line(c).unwrap().price, 200.0);
        assert_eq!(draft.line(a).unwrap().price, 1.0);
        assert_eq!(draft.total(), 201.0);

        assert!(!draft.remove_item(b));
        assert_eq!(draft.len(), 2);
    }

    #[test]
    fn add_then_remove_restores_total() {
        let mut draft = DraftOrder::new();
        let a = draft.add_item();
        draft.update_item(a, Some(&product(1, 12.5)), 4.0);
        let before = draft.total();

        let extra = draft.add_item();
        draft.remove_item(extra);
        assert_eq!(draft.total(), before);
    }

    #[test]
    fn total_tracks_any_edit_sequence() {
        let catalogue: Vec<Product> = (1..=5).map(|i| product(i, i as f64 * 7.25)).collect();
        let mut draft = DraftOrder::new();
        // Deterministic LCG so the sequence is reproducible.
        let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
        let mut next = move |bound: usize| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((seed >> 33) as usize) % bound.max(1)
        };

        for _ in 0..500 {
            match next(4) {
                0 => {
                    draft.add_item();
                }
                1 if !draft.is_empty() => {
                    let id = draft.lines()[next(draft.len())].id;
                    draft.remove_item(id);
                }
                2 if !draft.is_empty() => {
                    let id = draft.lines()[next(draft.len())].id;
                    let pick = next(catalogue.len() + 1);
                    draft.set_product(id, catalogue.get(pick));
                }
                _ if !draft.is_empty() => {
                    let id = draft.lines()[next(draft.len())].id;
                    let qty = format!("{}", next(20) as f64 / 2.0);
                    draft.set_quantity(id, &qty);
                }
                _ => {}
            }
            assert!((draft.total() - sum_of_lines(&draft)).abs() < 1e-9);
        }
    }

    #[test]
    fn payload_requires_customer_name() {
        let mut draft = DraftOrder::new();
        let id = draft.add_item();
        draft.update_item(id, Some(&product(1, 50.0)), 3.0);
        draft.customer_name = "   ".into();
        assert_eq!(draft.build_payload(), Err(ValidationError::MissingCustomer));
    }

    #[test]
    fn payload_requires_a_valid_line() {
        let mut draft = DraftOrder::with_blank_line();
        draft.customer_name = "Asha".into();
        assert_eq!(draft.build_payload(), Err(ValidationError::NoValidItems));

        let id = draft.lines()[0].id;
        draft.update_item(id, Some(&product(1, 50.0)), 0.0);
        assert_eq!(draft.build_payload(), Err(ValidationError::NoValidItems));

        let other = draft.add_item();
        draft.set_quantity(other, "5");
        assert_eq!(draft.build_payload(), Err(ValidationError::NoValidItems));
    }

    #[test]
    fn payload_keeps_only_valid_lines_without_prices() {
        let mut draft = DraftOrder::with_blank_line();
        draft.customer_name = "  Asha  ".into();
        let id = draft.lines()[0].id;
        draft.set_product(id, Some(&product(1, 50.0)));
        draft.set_quantity(id, "3");
        draft.add_item();

        let payload = draft.build_payload().unwrap();
        assert_eq!(
            payload,
            CreateOrderDto {
                customer_name: "Asha".into(),
                order_items: vec![CreateOrderLineDto {
                    product_id: ProductId(1),
                    quantity: 3.0,
                }],
            }
        );
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["order_items"][0].get("price").is_none());
        assert!(json["order_items"][0].get("price_per_unit").is_none());
    }
}
