//! Individual enclosures: the leaf nodes of the zoo hierarchy.

use crate::domain::animal::{validated_name, Animal};
use crate::domain::error::DomainResult;

/// An individual enclosure holding animals.
///
/// Leaf of the composite hierarchy: it owns its animals exclusively and can
/// never contain sub-collections. Insertion order of animals is preserved and
/// duplicate names are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Enclosure {
    name: String,
    animals: Vec<Animal>,
}

impl Enclosure {
    /// Create an empty enclosure. Fails if the name is empty/whitespace.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            name: validated_name(name.into(), "enclosure")?,
            animals: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the enclosure, re-running name validation.
    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = validated_name(name.into(), "enclosure")?;
        Ok(())
    }

    /// Read-only view of the contained animals, in insertion order.
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// Append an animal. No duplicate check: two animals may share a name.
    pub fn add_animal(&mut self, animal: Animal) {
        self.animals.push(animal);
    }

    /// Remove the first animal whose name matches case-insensitively.
    /// Returns whether a removal occurred.
    pub fn remove_animal(&mut self, name: &str) -> bool {
        match self
            .animals
            .iter()
            .position(|a| a.name().eq_ignore_ascii_case(name))
        {
            Some(idx) => {
                self.animals.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn animal_count(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;

    #[test]
    fn given_valid_name_when_creating_enclosure_then_name_round_trips() {
        let den = Enclosure::new("Lion Den").unwrap();
        assert_eq!(den.name(), "Lion Den");
        assert!(den.is_empty());
    }

    #[test]
    fn given_empty_name_when_creating_enclosure_then_fails() {
        let err = Enclosure::new("").unwrap_err();
        assert_eq!(err, DomainError::EmptyName { kind: "enclosure" });
    }

    #[test]
    fn given_added_animal_when_listing_then_appears_at_end() {
        let mut den = Enclosure::new("Lion Den").unwrap();
        den.add_animal(Animal::lion("Leo", 5.0).unwrap());
        den.add_animal(Animal::lion("Nala", 4.0).unwrap());
        let names: Vec<_> = den.animals().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["Leo", "Nala"]);
    }

    #[test]
    fn given_mixed_case_name_when_removing_animal_then_matches_case_insensitively() {
        let mut den = Enclosure::new("Lion Den").unwrap();
        den.add_animal(Animal::lion("Leo", 5.0).unwrap());
        assert!(den.remove_animal("leo"));
        assert!(den.is_empty());
    }

    #[test]
    fn given_duplicate_names_when_removing_then_only_first_match_goes() {
        let mut den = Enclosure::new("Lion Den").unwrap();
        den.add_animal(Animal::lion("Leo", 5.0).unwrap());
        den.add_animal(Animal::lion("LEO", 9.0).unwrap());
        assert!(den.remove_animal("Leo"));
        assert_eq!(den.animal_count(), 1);
        assert_eq!(den.animals()[0].age(), 9.0);
    }

    #[test]
    fn given_unknown_name_when_removing_then_returns_false_and_list_unchanged() {
        let mut den = Enclosure::new("Lion Den").unwrap();
        den.add_animal(Animal::lion("Leo", 5.0).unwrap());
        assert!(!den.remove_animal("Simba"));
        assert_eq!(den.animal_count(), 1);
    }
}
