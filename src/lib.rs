//! zootree: a zoo's enclosure hierarchy as a composite tree.
//!
//! The domain layer models individual [`Enclosure`] leaves and [`Section`]
//! branches joined by the [`EnclosureCollection`] sum type, with a lazy
//! line-based listing instead of print side effects. The CLI layer renders
//! the built-in sample zoo.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use config::Settings;
pub use domain::{
    sample_zoo, Animal, DisplayLine, DomainError, Enclosure, EnclosureCollection, Section,
    Species, ZooBuilder,
};
