//! Core Kernel - Foundational types and utilities for the split service
//!
//! This crate provides the fundamental building blocks used across the workspace:
//! - Money rounding with precise decimal arithmetic
//! - The single float-to-decimal conversion point for upstream data
//! - Common identifiers and port error types

pub mod money;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::{Money, MoneyError, MONEY_DP, round_money};
pub use identifiers::{MemberId, ReceiptId, SplitId};
pub use error::CoreError;
pub use ports::{DomainPort, PortError};
