//! Request and response bodies

pub mod receipt;
