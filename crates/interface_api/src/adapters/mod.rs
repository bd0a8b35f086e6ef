//! Port implementations used by the server

pub mod in_memory;

pub use in_memory::InMemorySplitRepository;
