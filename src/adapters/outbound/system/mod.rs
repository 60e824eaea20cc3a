/// System adapters for clock and random identifiers
mod identifier_generator;

pub use identifier_generator::{FixedIdentifierGenerator, SystemIdentifierGenerator};
