//! The composite hierarchy: sections of the zoo containing enclosures or
//! further sections.
//!
//! The two node shapes are distinct types joined by the
//! [`EnclosureCollection`] sum type. `Section` exposes infallible child
//! mutation; the polymorphic surface on the enum reports a typed error when a
//! leaf is asked to hold children.

use std::fmt;

use itertools::Itertools;
use termtree::Tree;
use tracing::instrument;

use crate::domain::animal::{validated_name, Animal};
use crate::domain::enclosure::Enclosure;
use crate::domain::error::{DomainError, DomainResult};

/// Indent step used by the `Display` impl.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// A named group of enclosures or nested sections (the composite node).
///
/// Children are exclusively owned and kept in insertion order. The name is
/// immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    children: Vec<EnclosureCollection>,
}

impl Section {
    /// Create an empty section. Fails if the name is empty/whitespace.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            name: validated_name(name.into(), "section")?,
            children: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the children, in insertion order.
    pub fn children(&self) -> &[EnclosureCollection] {
        &self.children
    }

    /// Append a child collection to the end of the child list.
    pub fn add(&mut self, child: impl Into<EnclosureCollection>) {
        self.children.push(child.into());
    }

    /// Remove the first structurally-equal child. Returns whether a removal
    /// occurred; absent children are a no-op.
    pub fn remove(&mut self, child: &EnclosureCollection) -> bool {
        match self.children.iter().position(|c| c == child) {
            Some(idx) => {
                self.children.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Number of individual enclosures in the whole subtree.
    pub fn enclosure_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| match c {
                EnclosureCollection::Enclosure(_) => 1,
                EnclosureCollection::Section(s) => s.enclosure_count(),
            })
            .sum()
    }

    /// Number of animals in the whole subtree.
    pub fn total_animals(&self) -> usize {
        self.children
            .iter()
            .map(|c| match c {
                EnclosureCollection::Enclosure(e) => e.animal_count(),
                EnclosureCollection::Section(s) => s.total_animals(),
            })
            .sum()
    }
}

/// Polymorphic node of the zoo hierarchy: an individual enclosure (leaf) or a
/// section (branch).
#[derive(Debug, Clone, PartialEq)]
pub enum EnclosureCollection {
    Enclosure(Enclosure),
    Section(Section),
}

impl From<Enclosure> for EnclosureCollection {
    fn from(e: Enclosure) -> Self {
        EnclosureCollection::Enclosure(e)
    }
}

impl From<Section> for EnclosureCollection {
    fn from(s: Section) -> Self {
        EnclosureCollection::Section(s)
    }
}

impl EnclosureCollection {
    pub fn name(&self) -> &str {
        match self {
            EnclosureCollection::Enclosure(e) => e.name(),
            EnclosureCollection::Section(s) => s.name(),
        }
    }

    pub fn is_section(&self) -> bool {
        matches!(self, EnclosureCollection::Section(_))
    }

    /// Append a child on a section; fails with [`DomainError::LeafMutation`]
    /// on an individual enclosure.
    pub fn add_collection(&mut self, child: EnclosureCollection) -> DomainResult<()> {
        match self {
            EnclosureCollection::Section(s) => {
                s.add(child);
                Ok(())
            }
            EnclosureCollection::Enclosure(e) => Err(DomainError::LeafMutation {
                name: e.name().to_string(),
                action: "add",
            }),
        }
    }

    /// Remove the first structurally-equal child on a section; fails with
    /// [`DomainError::LeafMutation`] on an individual enclosure.
    pub fn remove_collection(&mut self, child: &EnclosureCollection) -> DomainResult<bool> {
        match self {
            EnclosureCollection::Section(s) => Ok(s.remove(child)),
            EnclosureCollection::Enclosure(e) => Err(DomainError::LeafMutation {
                name: e.name().to_string(),
                action: "remove",
            }),
        }
    }

    /// Depth of the subtree rooted at this node (a lone leaf has depth 1).
    pub fn depth(&self) -> usize {
        match self {
            EnclosureCollection::Enclosure(_) => 1,
            EnclosureCollection::Section(s) => {
                1 + s
                    .children
                    .iter()
                    .map(|c| c.depth())
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    /// Collect all leaf enclosures in the subtree, left to right.
    pub fn leaves(&self) -> Vec<&Enclosure> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a Enclosure>) {
        match self {
            EnclosureCollection::Enclosure(e) => leaves.push(e),
            EnclosureCollection::Section(s) => {
                for child in &s.children {
                    child.collect_leaves(leaves);
                }
            }
        }
    }

    /// Lazy, restartable listing of the subtree as `(depth, text)` pairs in
    /// depth-first pre-order. Children appear one level deeper than their
    /// parent, and an enclosure's animals one level deeper still. Rendering is
    /// left to the caller.
    #[instrument(level = "trace", skip(self))]
    pub fn lines(&self) -> Lines<'_> {
        Lines::new(self)
    }

    /// Render the listing with `indent_width` spaces per depth level.
    pub fn render(&self, indent_width: usize) -> String {
        self.lines()
            .map(|line| {
                format!(
                    "{:indent$}{}",
                    "",
                    line.text,
                    indent = line.depth * indent_width
                )
            })
            .join("\n")
    }

    /// Convert to a `termtree` tree for box-drawing display.
    pub fn to_tree(&self) -> Tree<String> {
        match self {
            EnclosureCollection::Enclosure(e) => Tree::new(e.name().to_string()).with_leaves(
                e.animals().iter().map(|a| Tree::new(a.to_string())),
            ),
            EnclosureCollection::Section(s) => Tree::new(s.name().to_string())
                .with_leaves(s.children.iter().map(|c| c.to_tree())),
        }
    }
}

impl fmt::Display for EnclosureCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(DEFAULT_INDENT_WIDTH))
    }
}

/// One line of the recursive listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub depth: usize,
    pub text: String,
}

enum Entry<'a> {
    Node(&'a EnclosureCollection),
    Animal(&'a Animal),
}

/// Iterator behind [`EnclosureCollection::lines`]. Uses an explicit stack
/// instead of recursion.
pub struct Lines<'a> {
    stack: Vec<(usize, Entry<'a>)>,
}

impl<'a> Lines<'a> {
    fn new(root: &'a EnclosureCollection) -> Self {
        Self {
            stack: vec![(0, Entry::Node(root))],
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = DisplayLine;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, entry) = self.stack.pop()?;
        match entry {
            Entry::Animal(animal) => Some(DisplayLine {
                depth,
                text: animal.to_string(),
            }),
            Entry::Node(EnclosureCollection::Enclosure(e)) => {
                // Push in reverse for left-to-right traversal
                for animal in e.animals().iter().rev() {
                    self.stack.push((depth + 1, Entry::Animal(animal)));
                }
                Some(DisplayLine {
                    depth,
                    text: e.name().to_string(),
                })
            }
            Entry::Node(EnclosureCollection::Section(s)) => {
                for child in s.children.iter().rev() {
                    self.stack.push((depth + 1, Entry::Node(child)));
                }
                Some(DisplayLine {
                    depth,
                    text: s.name().to_string(),
                })
            }
        }
    }
}
