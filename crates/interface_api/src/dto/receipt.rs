//! Receipt DTOs

use std::collections::BTreeMap;

use core_kernel::{MemberId, Money, ReceiptId};
use domain_split::{
    AdditionalCharges, ExtractedReceipt, LineItem, ReceiptRequest, SplitError, SplitMethod,
    SplitRecord, SplitResult, SplitStrategy,
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, Validate)]
pub struct ItemRequest {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i64,
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: f64,
    #[serde(default)]
    pub assigned_to: Option<Vec<String>>,
}

/// Split method and its parameters, shared by every split endpoint
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SplitParams {
    #[serde(default)]
    pub split_method: SplitMethod,
    #[validate(range(
        min = 0,
        max = 1000,
        message = "party_size must be between 0 and 1000"
    ))]
    pub party_size: Option<i64>,
    pub assigned_parties: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProcessReceiptRequest {
    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<ItemRequest>,
    #[serde(default)]
    #[validate(custom(function = "validate_charges"))]
    pub additional_charges: BTreeMap<String, f64>,
    /// Checked separately so violations name the wire field
    #[serde(flatten)]
    pub params: SplitParams,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BreakdownRequest {
    #[validate(nested)]
    pub items: Vec<ItemRequest>,
    #[serde(default)]
    #[validate(custom(function = "validate_charges"))]
    pub additional_charges: BTreeMap<String, f64>,
    #[validate(range(
        min = 0,
        max = 1000,
        message = "party_size must be between 0 and 1000"
    ))]
    pub party_size: Option<i64>,
}

/// Extraction service output plus the split to apply to it
///
/// The receipt itself is checked during conversion, where failures are
/// reported as malformed upstream data.
#[derive(Debug, Deserialize)]
pub struct ExtractedSplitRequest {
    pub receipt: ExtractedReceipt,
    #[serde(flatten)]
    pub params: SplitParams,
}

#[derive(Debug, Serialize)]
pub struct RecordedSplitResponse {
    pub receipt_id: ReceiptId,
    pub split: SplitResult,
    pub records: Vec<SplitRecord>,
}

fn validate_charges(charges: &BTreeMap<String, f64>) -> Result<(), ValidationError> {
    if charges.values().any(|amount| !amount.is_finite() || *amount < 0.0) {
        let mut error = ValidationError::new("range");
        error.message = Some("charges cannot be negative".into());
        return Err(error);
    }
    Ok(())
}

impl SplitParams {
    /// Builds the domain strategy from the wire parameters
    pub fn strategy(&self) -> Result<SplitStrategy, SplitError> {
        match self.split_method {
            SplitMethod::Equal => {
                let party_size = self
                    .party_size
                    .map(|size| {
                        u32::try_from(size).map_err(|_| {
                            SplitError::invalid_input("party_size", "party_size is out of range")
                        })
                    })
                    .transpose()?;
                Ok(SplitStrategy::Equal { party_size })
            }
            SplitMethod::Itemized => {
                let assigned_parties = self
                    .assigned_parties
                    .iter()
                    .flatten()
                    .map(|name| parse_member("assigned_parties", name))
                    .collect::<Result<_, _>>()?;
                Ok(SplitStrategy::Itemized { assigned_parties })
            }
        }
    }
}

impl ItemRequest {
    fn to_line_item(&self, index: usize) -> Result<LineItem, SplitError> {
        let quantity = u32::try_from(self.quantity).map_err(|_| {
            SplitError::invalid_input(format!("items[{index}].quantity"), "quantity is out of range")
        })?;
        let price = Money::from_f64(self.price).map_err(|err| {
            SplitError::invalid_input(format!("items[{index}].price"), err.to_string())
        })?;

        let item = LineItem::new(self.name.clone(), quantity, price);
        match &self.assigned_to {
            Some(names) => {
                let field = format!("items[{index}].assigned_to");
                let members = names
                    .iter()
                    .map(|name| parse_member(&field, name))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(item.assigned_to(members))
            }
            None => Ok(item),
        }
    }
}

fn parse_member(field: &str, name: &str) -> Result<MemberId, SplitError> {
    MemberId::parse(name).map_err(|err| SplitError::invalid_input(field, err.to_string()))
}

fn line_items(items: &[ItemRequest]) -> Result<Vec<LineItem>, SplitError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| item.to_line_item(index))
        .collect()
}

fn charges(charges: &BTreeMap<String, f64>) -> Result<AdditionalCharges, SplitError> {
    charges
        .iter()
        .map(|(name, amount)| {
            let amount = Money::from_f64(*amount).map_err(|err| {
                SplitError::invalid_input(format!("additional_charges.{name}"), err.to_string())
            })?;
            Ok((name.clone(), amount))
        })
        .collect()
}

impl TryFrom<&ProcessReceiptRequest> for ReceiptRequest {
    type Error = SplitError;

    fn try_from(body: &ProcessReceiptRequest) -> Result<Self, Self::Error> {
        ReceiptRequest::new(
            line_items(&body.items)?,
            charges(&body.additional_charges)?,
            body.params.strategy()?,
        )
    }
}

impl BreakdownRequest {
    /// Converts the body into the breakdown inputs
    pub fn to_parts(&self) -> Result<(Vec<LineItem>, AdditionalCharges, Option<u32>), SplitError> {
        let party_size = self
            .party_size
            .map(|size| {
                u32::try_from(size)
                    .map_err(|_| SplitError::invalid_input("party_size", "party_size is out of range"))
            })
            .transpose()?;
        Ok((line_items(&self.items)?, charges(&self.additional_charges)?, party_size))
    }
}

impl TryFrom<ExtractedSplitRequest> for ReceiptRequest {
    type Error = SplitError;

    fn try_from(body: ExtractedSplitRequest) -> Result<Self, Self::Error> {
        let strategy = body.params.strategy()?;
        let (items, charges) = body.receipt.into_parts()?;
        ReceiptRequest::new(items, charges, strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_method_defaults_to_equal() {
        let body: ProcessReceiptRequest = serde_json::from_value(json!({
            "items": [{ "name": "Tea", "quantity": 1, "price": 3.5 }]
        }))
        .unwrap();

        assert!(body.validate().is_ok());
        let request = ReceiptRequest::try_from(&body).unwrap();
        assert_eq!(request.split_method(), SplitMethod::Equal);
    }

    #[test]
    fn test_float_price_becomes_cents() {
        let body: ProcessReceiptRequest = serde_json::from_value(json!({
            "items": [{ "name": "Soda", "quantity": 3, "price": 0.1 }],
            "additional_charges": { "tax": 0.3 }
        }))
        .unwrap();

        let request = ReceiptRequest::try_from(&body).unwrap();
        assert_eq!(request.items[0].unit_price.to_string(), "0.10");
        assert_eq!(request.charges["tax"].to_string(), "0.30");
    }

    #[test]
    fn test_zero_quantity_fails_validation() {
        let body: ProcessReceiptRequest = serde_json::from_value(json!({
            "items": [{ "name": "Tea", "quantity": 0, "price": 3.5 }]
        }))
        .unwrap();

        assert!(body.validate().is_err());
    }

    #[test]
    fn test_negative_charge_fails_validation() {
        let body: ProcessReceiptRequest = serde_json::from_value(json!({
            "items": [],
            "additional_charges": { "discount": -2.0 }
        }))
        .unwrap();

        assert!(body.validate().is_err());
    }

    #[test]
    fn test_oversized_party_fails_validation() {
        let body: ProcessReceiptRequest = serde_json::from_value(json!({
            "items": [{ "name": "Tea", "quantity": 1, "price": 3.5 }],
            "party_size": 4_000_000_000_i64
        }))
        .unwrap();

        let errors = body.params.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("party_size"));
    }

    #[test]
    fn test_wire_bound_matches_record_cap() {
        let body: ProcessReceiptRequest = serde_json::from_value(json!({
            "items": [],
            "party_size": domain_split::MAX_PARTY_SIZE
        }))
        .unwrap();

        assert!(body.params.validate().is_ok());
    }

    #[test]
    fn test_blank_assignee_names_field() {
        let body: ProcessReceiptRequest = serde_json::from_value(json!({
            "items": [{ "name": "Tea", "quantity": 1, "price": 3.5, "assigned_to": [" "] }],
            "split_method": "itemized",
            "assigned_parties": ["Alice"]
        }))
        .unwrap();

        let err = ReceiptRequest::try_from(&body).unwrap_err();
        assert_eq!(err.field(), Some("items[0].assigned_to"));
    }
}
