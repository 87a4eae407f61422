//! Domain layer: the enclosure tree and its entities
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading).

pub mod animal;
pub mod builder;
pub mod collection;
pub mod enclosure;
pub mod error;

pub use animal::{Animal, Species, MAX_AGE};
pub use builder::{sample_zoo, ZooBuilder};
pub use collection::{DisplayLine, EnclosureCollection, Lines, Section, DEFAULT_INDENT_WIDTH};
pub use enclosure::Enclosure;
pub use error::{DomainError, DomainResult};
