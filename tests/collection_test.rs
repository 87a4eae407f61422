//! Tests for the composite: Section child management and the polymorphic
//! EnclosureCollection surface

use zootree::{Animal, DomainError, Enclosure, EnclosureCollection, Section};

fn lion_den() -> EnclosureCollection {
    let mut den = Enclosure::new("Lion Den").unwrap();
    den.add_animal(Animal::lion("Leo", 5.0).unwrap());
    den.into()
}

// ============================================================
// Section Construction Tests
// ============================================================

#[test]
fn given_blank_name_when_creating_section_then_fails() {
    let err = Section::new("  ").unwrap_err();
    assert_eq!(err, DomainError::EmptyName { kind: "section" });
}

// ============================================================
// Child Management Tests
// ============================================================

#[test]
fn given_section_when_adding_child_then_contains_one_more_occurrence() {
    let mut cats = Section::new("Big Cats").unwrap();
    let child = lion_den();

    let before = cats
        .children()
        .iter()
        .filter(|c| *c == &child)
        .count();
    cats.add(child.clone());
    let after = cats
        .children()
        .iter()
        .filter(|c| *c == &child)
        .count();

    assert_eq!(after, before + 1);
}

#[test]
fn given_duplicate_children_when_removing_then_exactly_one_goes() {
    let mut cats = Section::new("Big Cats").unwrap();
    let child = lion_den();
    cats.add(child.clone());
    cats.add(child.clone());

    assert!(cats.remove(&child));

    let remaining = cats
        .children()
        .iter()
        .filter(|c| *c == &child)
        .count();
    assert_eq!(remaining, 1);
}

#[test]
fn given_absent_child_when_removing_then_returns_false() {
    let mut cats = Section::new("Big Cats").unwrap();
    assert!(!cats.remove(&lion_den()));
    assert_eq!(cats.child_count(), 0);
}

#[test]
fn given_nested_sections_when_adding_then_order_is_preserved() {
    let mut zoo = Section::new("Zoo").unwrap();
    zoo.add(Section::new("Big Cats").unwrap());
    zoo.add(lion_den());
    zoo.add(Section::new("Aviary").unwrap());

    let names: Vec<_> = zoo.children().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Big Cats", "Lion Den", "Aviary"]);
}

// ============================================================
// Polymorphic Surface Tests
// ============================================================

#[test]
fn given_branch_node_when_adding_collection_then_child_is_appended() {
    let mut root: EnclosureCollection = Section::new("Big Cats").unwrap().into();
    root.add_collection(lion_den()).unwrap();

    match &root {
        EnclosureCollection::Section(s) => assert_eq!(s.child_count(), 1),
        _ => panic!("root must stay a section"),
    }
}

#[test]
fn given_branch_node_when_removing_absent_child_then_ok_false() {
    let mut root: EnclosureCollection = Section::new("Big Cats").unwrap().into();
    assert_eq!(root.remove_collection(&lion_den()).unwrap(), false);
}

#[test]
fn given_leaf_node_when_adding_collection_then_always_fails() {
    let mut leaf = lion_den();
    let err = leaf.add_collection(lion_den()).unwrap_err();
    assert_eq!(
        err,
        DomainError::LeafMutation {
            name: "Lion Den".to_string(),
            action: "add",
        }
    );
}

#[test]
fn given_leaf_node_when_removing_collection_then_always_fails() {
    let mut leaf = lion_den();
    let err = leaf.remove_collection(&lion_den()).unwrap_err();
    assert_eq!(
        err,
        DomainError::LeafMutation {
            name: "Lion Den".to_string(),
            action: "remove",
        }
    );
}

#[test]
fn given_leaf_mutation_error_when_displaying_then_message_names_enclosure() {
    let mut leaf = lion_den();
    let err = leaf.add_collection(lion_den()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot add a collection on individual enclosure: Lion Den"
    );
}

// ============================================================
// Structural Equality Tests
// ============================================================

#[test]
fn given_structurally_equal_subtrees_when_removing_then_match_succeeds() {
    let mut cats = Section::new("Big Cats").unwrap();
    cats.add(lion_den());

    // Built independently but structurally identical
    assert!(cats.remove(&lion_den()));
    assert_eq!(cats.child_count(), 0);
}

#[test]
fn given_differing_animal_list_when_removing_then_no_match() {
    let mut cats = Section::new("Big Cats").unwrap();
    cats.add(lion_den());

    let empty_den: EnclosureCollection = Enclosure::new("Lion Den").unwrap().into();
    assert!(!cats.remove(&empty_den));
}
