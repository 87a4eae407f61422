//! Animal entities kept inside enclosures.

use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// Oldest age the edit dialog of the legacy app accepted.
pub const MAX_AGE: f64 = 200.0;

/// Species tag for an animal. `Generic` covers animals created without an
/// explicit species selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Lion,
    Tiger,
    Cougar,
    Generic,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Species::Lion => "Lion",
            Species::Tiger => "Tiger",
            Species::Cougar => "Cougar",
            Species::Generic => "Animal",
        };
        write!(f, "{}", s)
    }
}

/// An animal with a name, an age in years and a species tag.
///
/// Owned exclusively by the [`Enclosure`](crate::domain::Enclosure) that
/// contains it. Identity is name equality within a container, nothing more.
#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    name: String,
    age: f64,
    species: Species,
}

impl Animal {
    /// Create an animal. Fails if the name is empty/whitespace or the age is
    /// not a finite value in `0.0..=MAX_AGE`.
    pub fn new(name: impl Into<String>, age: f64, species: Species) -> DomainResult<Self> {
        let name = validated_name(name.into(), "animal")?;
        validate_age(age)?;
        Ok(Self { name, age, species })
    }

    pub fn lion(name: impl Into<String>, age: f64) -> DomainResult<Self> {
        Self::new(name, age, Species::Lion)
    }

    pub fn tiger(name: impl Into<String>, age: f64) -> DomainResult<Self> {
        Self::new(name, age, Species::Tiger)
    }

    pub fn cougar(name: impl Into<String>, age: f64) -> DomainResult<Self> {
        Self::new(name, age, Species::Cougar)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn species(&self) -> Species {
        self.species
    }

    /// Rename the animal, re-running name validation.
    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = validated_name(name.into(), "animal")?;
        Ok(())
    }

    /// Update the age, re-running age validation.
    pub fn set_age(&mut self, age: f64) -> DomainResult<()> {
        validate_age(age)?;
        self.age = age;
        Ok(())
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} years)", self.name, self.age)
    }
}

/// Shared name validation for all named tree entities.
pub(crate) fn validated_name(name: String, kind: &'static str) -> DomainResult<String> {
    if name.trim().is_empty() {
        return Err(DomainError::EmptyName { kind });
    }
    Ok(name)
}

fn validate_age(age: f64) -> DomainResult<()> {
    if !age.is_finite() {
        return Err(DomainError::InvalidAge {
            age,
            reason: "must be a finite number",
        });
    }
    if age < 0.0 {
        return Err(DomainError::InvalidAge {
            age,
            reason: "must not be negative",
        });
    }
    if age > MAX_AGE {
        return Err(DomainError::InvalidAge {
            age,
            reason: "exceeds maximum age",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_valid_input_when_creating_animal_then_fields_round_trip() {
        let leo = Animal::lion("Leo", 5.0).unwrap();
        assert_eq!(leo.name(), "Leo");
        assert_eq!(leo.age(), 5.0);
        assert_eq!(leo.species(), Species::Lion);
    }

    #[test]
    fn given_whitespace_name_when_creating_animal_then_fails_with_empty_name() {
        let err = Animal::new("   ", 1.0, Species::Generic).unwrap_err();
        assert_eq!(err, DomainError::EmptyName { kind: "animal" });
    }

    #[test]
    fn given_negative_age_when_creating_animal_then_fails_with_invalid_age() {
        let err = Animal::tiger("Tia", -0.5).unwrap_err();
        assert!(matches!(err, DomainError::InvalidAge { .. }));
    }

    #[test]
    fn given_nan_age_when_creating_animal_then_fails_with_invalid_age() {
        let err = Animal::cougar("Cleo", f64::NAN).unwrap_err();
        assert!(matches!(err, DomainError::InvalidAge { .. }));
    }

    #[test]
    fn given_existing_animal_when_setting_invalid_age_then_age_is_unchanged() {
        let mut leo = Animal::lion("Leo", 5.0).unwrap();
        assert!(leo.set_age(MAX_AGE + 1.0).is_err());
        assert_eq!(leo.age(), 5.0);
    }
}
