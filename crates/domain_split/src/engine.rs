//! Split dispatcher

use tracing::{debug, warn};

use crate::equal::split_equally;
use crate::error::SplitError;
use crate::itemized::split_by_item;
use crate::model::{ReceiptRequest, SplitResult, SplitStrategy};

/// Splits a receipt with the calculator matching its strategy
///
/// The request is validated first. Errors from the chosen calculator are
/// returned unmodified.
///
/// # Example
///
/// ```rust
/// use domain_split::{process_receipt, AdditionalCharges, LineItem, ReceiptRequest, SplitStrategy};
/// use core_kernel::Money;
/// use rust_decimal_macros::dec;
///
/// let request = ReceiptRequest::new(
///     vec![LineItem::new("Burger", 1, Money::round(dec!(12.00)))],
///     AdditionalCharges::new(),
///     SplitStrategy::Equal { party_size: Some(2) },
/// ).unwrap();
///
/// let result = process_receipt(&request).unwrap();
/// assert_eq!(result.per_person().unwrap().total.amount(), dec!(6.00));
/// ```
pub fn process_receipt(request: &ReceiptRequest) -> Result<SplitResult, SplitError> {
    debug!(
        split_method = ?request.split_method(),
        items = request.items.len(),
        charges = request.charges.len(),
        "splitting receipt"
    );

    let outcome = request.validate().and_then(|()| match &request.strategy {
        SplitStrategy::Equal { party_size } => {
            split_equally(&request.items, &request.charges, *party_size)
        }
        SplitStrategy::Itemized { assigned_parties } => {
            split_by_item(&request.items, &request.charges, assigned_parties)
        }
    });

    if let Err(err) = &outcome {
        warn!(kind = err.kind(), error = %err, "receipt split rejected");
    }
    outcome
}
