//! Containment Rules
//!
//! Typed drag subjects, drop containers and the rule deciding which
//! container may hold which subject.

use crate::domain::{CategoryId, ItemId};

/// The entity picked up by a drag gesture
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DragSubject {
    Item(ItemId),
    Category(CategoryId),
}

/// A sequence that can receive a drop
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Container {
    Root,
    Category(CategoryId),
}

/// Where an item or category currently sits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Index into the root sequence
    Root(usize),
    /// Index into a category's item sequence
    Category { category: CategoryId, index: usize },
}

impl Location {
    pub fn container(&self) -> Container {
        match self {
            Location::Root(_) => Container::Root,
            Location::Category { category, .. } => Container::Category(category.clone()),
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Location::Root(index) => *index,
            Location::Category { index, .. } => *index,
        }
    }
}

/// Why a drop was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// A category was dropped into a category
    NestedCategory,
    /// The target category does not exist
    UnknownContainer,
}

/// Result of a drop attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The subject now sits at this location
    Accepted(Location),
    /// Nothing changed; the subject stays where it was
    Rejected(RejectReason),
    /// No drag was active
    Ignored,
}

impl DropOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, DropOutcome::Accepted(_))
    }
}

/// Categories only live at the root; items may go anywhere.
pub fn can_contain(container: &Container, subject: &DragSubject) -> bool {
    !matches!((container, subject), (Container::Category(_), DragSubject::Category(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containment_rule() {
        let item = DragSubject::Item(ItemId::from(1));
        let category = DragSubject::Category(CategoryId::from(2));
        let other = Container::Category(CategoryId::from(3));

        assert!(can_contain(&Container::Root, &item));
        assert!(can_contain(&Container::Root, &category));
        assert!(can_contain(&other, &item));
        assert!(!can_contain(&other, &category));
    }
}
