//! In-code assembly of zoo hierarchies.

use tracing::instrument;

use crate::domain::animal::Animal;
use crate::domain::collection::Section;
use crate::domain::enclosure::Enclosure;
use crate::domain::error::DomainResult;

enum ChildSpec {
    Section(ZooBuilder),
    Enclosure(String, Vec<Animal>),
}

/// Fluent builder for sections. Name validation is deferred to [`build`],
/// so a whole tree can be declared before the first error surfaces.
///
/// [`build`]: ZooBuilder::build
///
/// ```
/// use zootree::domain::{Animal, ZooBuilder};
///
/// let cats = ZooBuilder::section("Big Cats")
///     .enclosure("Lion Den", vec![Animal::lion("Leo", 5.0)?])
///     .build()?;
/// assert_eq!(cats.child_count(), 1);
/// # Ok::<(), zootree::domain::DomainError>(())
/// ```
pub struct ZooBuilder {
    name: String,
    children: Vec<ChildSpec>,
}

impl ZooBuilder {
    pub fn section(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Add a nested section.
    pub fn child_section(mut self, child: ZooBuilder) -> Self {
        self.children.push(ChildSpec::Section(child));
        self
    }

    /// Add a leaf enclosure with its animals.
    pub fn enclosure(mut self, name: impl Into<String>, animals: Vec<Animal>) -> Self {
        self.children
            .push(ChildSpec::Enclosure(name.into(), animals));
        self
    }

    /// Validate every name and assemble the section tree.
    #[instrument(level = "debug", skip(self), fields(name = %self.name))]
    pub fn build(self) -> DomainResult<Section> {
        let mut section = Section::new(self.name)?;
        for child in self.children {
            match child {
                ChildSpec::Section(builder) => section.add(builder.build()?),
                ChildSpec::Enclosure(name, animals) => {
                    let mut enclosure = Enclosure::new(name)?;
                    for animal in animals {
                        enclosure.add_animal(animal);
                    }
                    section.add(enclosure);
                }
            }
        }
        Ok(section)
    }
}

/// The hard-coded demo zoo the CLI operates on, matching the legacy app's
/// import helper.
pub fn sample_zoo() -> DomainResult<Section> {
    ZooBuilder::section("City Zoo")
        .child_section(
            ZooBuilder::section("Big Cats")
                .enclosure("Lion Den", vec![Animal::lion("Leo", 5.0)?])
                .enclosure("Tiger Woods", vec![Animal::tiger("Tia", 3.0)?]),
        )
        .child_section(
            ZooBuilder::section("Mountain Ridge").enclosure(
                "Cougar Rock",
                vec![Animal::cougar("Cleo", 4.0)?, Animal::cougar("Scar", 6.0)?],
            ),
        )
        .enclosure(
            "Petting Corner",
            vec![Animal::new("Billy", 2.0, crate::domain::Species::Generic)?],
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_builder_with_invalid_nested_name_when_building_then_fails() {
        let result = ZooBuilder::section("Zoo")
            .child_section(ZooBuilder::section("  "))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn given_sample_zoo_when_building_then_contains_expected_counts() {
        let zoo = sample_zoo().unwrap();
        assert_eq!(zoo.name(), "City Zoo");
        assert_eq!(zoo.enclosure_count(), 4);
        assert_eq!(zoo.total_animals(), 5);
    }
}
