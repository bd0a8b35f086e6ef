//! Split Domain - Receipt Split Engine
//!
//! This crate turns an itemized receipt into a per-person monetary breakdown.
//! The engine is a set of pure functions: no I/O, no shared state, safe to
//! call concurrently for any number of requests.
//!
//! # Split Methods
//!
//! - **Equal**: subtotal, each charge, and the grand total are divided by the
//!   party size, each quotient rounded on its own
//! - **Itemized**: each item is divided among its assignees, and every charge
//!   (tax, tip, fees) is distributed in proportion to each person's item
//!   subtotal
//!
//! # Rounding
//!
//! All amounts are decimal. Every monetary output is rounded half-up to two
//! places by `core_kernel::round_money`. Rounding residue is never
//! redistributed, so per-person amounts may not sum exactly to receipt totals.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_split::{process_receipt, LineItem, ReceiptRequest, SplitStrategy};
//!
//! let request = ReceiptRequest::new(items, charges, SplitStrategy::Itemized {
//!     assigned_parties,
//! })?;
//!
//! let result = process_receipt(&request)?;
//! ```

pub mod model;
pub mod validation;
pub mod distribution;
pub mod equal;
pub mod itemized;
pub mod engine;
pub mod breakdown;
pub mod extraction;
pub mod record;
pub mod ports;
pub mod error;

pub use model::{
    AdditionalCharges, ItemShare, LineItem, PerPersonCharges, PersonTotal, ReceiptRequest,
    SplitBreakdown, SplitMethod, SplitResult, SplitStrategy, MAX_PARTY_SIZE,
};
pub use engine::process_receipt;
pub use equal::split_equally;
pub use itemized::split_by_item;
pub use breakdown::{line_item_breakdown, ItemWithCharges, LineItemBreakdown};
pub use extraction::{ExtractedItem, ExtractedReceipt};
pub use record::SplitRecord;
pub use ports::SplitRepository;
pub use error::SplitError;
