//! Converters: row mapping rules and batch driving

pub mod address_map;
pub mod batch;
pub mod key_value;

pub use address_map::{AddressMapExpander, Expansion};
pub use batch::{BatchOptions, BatchReport};
pub use key_value::KeyValueExtractor;
