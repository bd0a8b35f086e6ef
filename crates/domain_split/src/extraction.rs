//! Receipt extraction output
//!
//! The extraction service (OCR plus an LLM pass) returns loosely typed JSON.
//! This module checks its shape and turns it into line items and charges.
//! Floats cross into decimal here through the kernel conversion only.

use std::collections::BTreeMap;

use core_kernel::Money;
use serde::{Deserialize, Serialize};

use crate::error::SplitError;
use crate::model::{AdditionalCharges, LineItem};

/// An item as reported by the extraction service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedItem {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
}

/// A receipt as reported by the extraction service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedReceipt {
    #[serde(default)]
    pub items: Vec<ExtractedItem>,
    pub tax: Option<f64>,
    pub tip: Option<f64>,
    pub misc: Option<f64>,
    /// Any further named charges, e.g. `service_fee`
    #[serde(default)]
    pub fees: BTreeMap<String, f64>,
}

impl ExtractedReceipt {
    /// Converts the extracted data into line items and charges
    ///
    /// # Errors
    ///
    /// `MalformedUpstreamData` naming the first field that is missing,
    /// non-finite, negative, fractional where a count is expected, or a
    /// duplicated charge name.
    pub fn into_parts(self) -> Result<(Vec<LineItem>, AdditionalCharges), SplitError> {
        let items = self
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| convert_item(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        let mut charges = AdditionalCharges::new();
        let named = [("tax", self.tax), ("tip", self.tip), ("misc", self.misc)];
        for (name, amount) in named {
            if let Some(amount) = amount {
                charges.insert(name.to_string(), convert_amount(name, amount)?);
            }
        }
        for (name, amount) in self.fees {
            let field = format!("fees.{name}");
            if name.trim().is_empty() {
                return Err(SplitError::malformed(field, "charge name is empty"));
            }
            let amount = convert_amount(&field, amount)?;
            if charges.insert(name, amount).is_some() {
                return Err(SplitError::malformed(field, "duplicate charge name"));
            }
        }

        Ok((items, charges))
    }
}

fn convert_item(index: usize, item: ExtractedItem) -> Result<LineItem, SplitError> {
    let field = |name: &str| format!("items[{index}].{name}");

    let name = item
        .name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| SplitError::malformed(field("name"), "missing item name"))?;

    let quantity = match item.quantity {
        None => 1,
        Some(q) if q.is_finite() && q.fract() == 0.0 && q >= 1.0 && q <= f64::from(u32::MAX) => {
            q as u32
        }
        Some(q) => {
            return Err(SplitError::malformed(
                field("quantity"),
                format!("expected a positive whole number, got {q}"),
            ))
        }
    };

    let price = item
        .price
        .ok_or_else(|| SplitError::malformed(field("price"), "missing price"))?;
    let unit_price = convert_amount(&field("price"), price)?;

    Ok(LineItem::new(name, quantity, unit_price))
}

fn convert_amount(field: &str, amount: f64) -> Result<Money, SplitError> {
    let money =
        Money::from_f64(amount).map_err(|err| SplitError::malformed(field, err.to_string()))?;
    if money.is_negative() {
        return Err(SplitError::malformed(field, format!("amount cannot be negative, got {amount}")));
    }
    Ok(money)
}
