//! Hierarchical Order Editor
//!
//! Owns the two-level navigation order for one editing session: root slots
//! holding standalone items or categories, each category holding items.
//! Drag gestures mutate it in memory; `save` flattens and submits it.

mod containment;
mod payload;
#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};

use log::{debug, info, warn};

use crate::api::{OrderApi, SaveError};
use crate::domain::{
    Category, CategoryId, DomainError, DomainResult, Entity, ItemId, NavItem, Slot, Snapshot,
    SnapshotItem, SnapshotSlot,
};

pub use containment::{can_contain, Container, DragSubject, DropOutcome, Location, RejectReason};
pub use payload::{flatten, OrderRecord};

/// Gesture in progress
#[derive(Debug, Clone)]
struct ActiveDrag {
    subject: DragSubject,
    /// Highlighted drop targets; cleared once a drop lands
    candidates: Vec<Container>,
}

/// Payload captured by `begin_save`, tagged with the revision it reflects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTicket {
    pub revision: u64,
    pub records: Vec<OrderRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    /// Another save was still pending; nothing was sent
    AlreadyInFlight,
}

#[derive(Debug, Clone)]
pub struct HierarchicalOrderEditor {
    root: Vec<Slot>,
    items: HashMap<ItemId, NavItem>,
    drag: Option<ActiveDrag>,
    dirty: bool,
    /// Bumped on every accepted drop
    revision: u64,
    /// Revision of the save currently in flight
    saving: Option<u64>,
}

impl HierarchicalOrderEditor {
    /// Build the in-memory model from the server-rendered snapshot
    pub fn from_snapshot(snapshot: Snapshot) -> DomainResult<Self> {
        let mut root = Vec::with_capacity(snapshot.slots.len());
        let mut items = HashMap::new();
        let mut category_ids = HashSet::new();

        let mut register = |entry: SnapshotItem,
                            category: Option<&CategoryId>|
         -> DomainResult<ItemId> {
            let id = entry.id.clone();
            let item = match category {
                Some(category_id) => {
                    NavItem::in_category(entry.id, entry.kind, entry.label, category_id.clone())
                }
                None => NavItem::new(entry.id, entry.kind, entry.label),
            };
            if items.insert(id.clone(), item).is_some() {
                return Err(DomainError::DuplicateItem(id));
            }
            Ok(id)
        };

        for slot in snapshot.slots {
            match slot {
                SnapshotSlot::Item(entry) => root.push(Slot::Item(register(entry, None)?)),
                SnapshotSlot::Category { id, name, items: members } => {
                    if !category_ids.insert(id.clone()) {
                        return Err(DomainError::DuplicateCategory(id));
                    }
                    let mut category = Category::new(id, name);
                    for entry in members {
                        let item_id = register(entry, Some(&category.id))?;
                        category.items.push(item_id);
                    }
                    root.push(Slot::Category(category));
                }
            }
        }

        debug!(
            "[EDITOR] loaded {} root slots, {} items",
            root.len(),
            items.len()
        );

        Ok(Self {
            root,
            items,
            drag: None,
            dirty: false,
            revision: 0,
            saving: None,
        })
    }

    /// Project the current order back to its wire shape
    pub fn snapshot(&self) -> Snapshot {
        let entry = |id: &ItemId| {
            self.items.get(id).map(|item| SnapshotItem {
                id: item.id.clone(),
                kind: item.kind,
                label: item.label.clone(),
            })
        };

        let slots = self
            .root
            .iter()
            .filter_map(|slot| match slot {
                Slot::Item(id) => entry(id).map(SnapshotSlot::Item),
                Slot::Category(category) => Some(SnapshotSlot::Category {
                    id: category.id.clone(),
                    name: category.name.clone(),
                    items: category.items.iter().filter_map(entry).collect(),
                }),
            })
            .collect();
        Snapshot { slots }
    }

    // ========================
    // Queries
    // ========================

    pub fn slots(&self) -> &[Slot] {
        &self.root
    }

    pub fn item(&self, id: &ItemId) -> Option<&NavItem> {
        self.items.get(id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.root
            .iter()
            .filter_map(Slot::as_category)
            .find(|category| category.id() == id)
    }

    fn category_mut(&mut self, id: &CategoryId) -> Option<&mut Category> {
        self.root
            .iter_mut()
            .filter_map(Slot::as_category_mut)
            .find(|category| &category.id == id)
    }

    fn category_slot(&self, id: &CategoryId) -> Option<usize> {
        self.root
            .iter()
            .position(|slot| matches!(slot, Slot::Category(c) if &c.id == id))
    }

    /// Current position of an item
    pub fn location_of(&self, id: &ItemId) -> Option<Location> {
        let item = self.items.get(id)?;
        match &item.category_id {
            None => self
                .root
                .iter()
                .position(|slot| matches!(slot, Slot::Item(i) if i == id))
                .map(Location::Root),
            Some(category_id) => {
                let index = self.category(category_id)?.position_of(id)?;
                Some(Location::Category {
                    category: category_id.clone(),
                    index,
                })
            }
        }
    }

    /// Current position of an item or category
    pub fn subject_location(&self, subject: &DragSubject) -> Option<Location> {
        match subject {
            DragSubject::Item(id) => self.location_of(id),
            DragSubject::Category(id) => self.category_slot(id).map(Location::Root),
        }
    }

    fn contains(&self, subject: &DragSubject) -> bool {
        match subject {
            DragSubject::Item(id) => self.items.contains_key(id),
            DragSubject::Category(id) => self.category_slot(id).is_some(),
        }
    }

    fn container_exists(&self, container: &Container) -> bool {
        match container {
            Container::Root => true,
            Container::Category(id) => self.category_slot(id).is_some(),
        }
    }

    // ========================
    // Drag Lifecycle
    // ========================

    /// Pick up an item or category. Returns false if it does not exist.
    pub fn begin_drag(&mut self, subject: DragSubject) -> bool {
        if self.drag.is_some() {
            debug!("[EDITOR] new drag while one is active, ending the previous one");
            self.end_drag();
        }
        if !self.contains(&subject) {
            warn!("[EDITOR] ignoring drag of unknown {:?}", subject);
            return false;
        }

        let mut candidates = vec![Container::Root];
        if matches!(subject, DragSubject::Item(_)) {
            candidates.extend(
                self.root
                    .iter()
                    .filter_map(Slot::as_category)
                    .map(|category| Container::Category(category.id.clone())),
            );
        }

        debug!("[EDITOR] drag start: {:?}", subject);
        self.drag = Some(ActiveDrag {
            subject,
            candidates,
        });
        true
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn dragged(&self) -> Option<&DragSubject> {
        self.drag.as_ref().map(|drag| &drag.subject)
    }

    /// Containers that may currently be highlighted as drop targets
    pub fn legal_targets(&self) -> &[Container] {
        self.drag
            .as_ref()
            .map(|drag| drag.candidates.as_slice())
            .unwrap_or(&[])
    }

    /// Drop the dragged entity at `position` within `container`.
    /// Positions past the end append.
    pub fn drop_into(&mut self, container: Container, position: usize) -> DropOutcome {
        let subject = match self.drag.as_mut() {
            Some(drag) => {
                drag.candidates.clear();
                drag.subject.clone()
            }
            None => return DropOutcome::Ignored,
        };

        if !can_contain(&container, &subject) {
            debug!("[EDITOR] rejected {:?} into {:?}: nested category", subject, container);
            return DropOutcome::Rejected(RejectReason::NestedCategory);
        }
        if !self.container_exists(&container) {
            warn!("[EDITOR] rejected drop into unknown {:?}", container);
            return DropOutcome::Rejected(RejectReason::UnknownContainer);
        }

        let location = match subject {
            DragSubject::Item(id) => self.move_item(id, container, position),
            DragSubject::Category(id) => self.move_category(id, position),
        };

        match location {
            Some(location) => {
                self.dirty = true;
                self.revision += 1;
                info!("[EDITOR] moved to {:?}", location);
                DropOutcome::Accepted(location)
            }
            None => DropOutcome::Ignored,
        }
    }

    /// Finish the gesture, whether or not a drop landed
    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            debug!("[EDITOR] drag end: {:?}", drag.subject);
        }
    }

    /// Remove from the source sequence, retarget `category_id`, insert into
    /// the destination. All within one call, so position and membership
    /// never disagree once it returns.
    fn move_item(&mut self, id: ItemId, to: Container, position: usize) -> Option<Location> {
        let from = self.location_of(&id)?;

        match &from {
            Location::Root(index) => {
                self.root.remove(*index);
            }
            Location::Category { category, index } => {
                self.category_mut(category)?.items.remove(*index);
            }
        }

        let location = match to {
            Container::Root => {
                let index = position.min(self.root.len());
                self.root.insert(index, Slot::Item(id.clone()));
                Location::Root(index)
            }
            Container::Category(category_id) => {
                let category = self.category_mut(&category_id)?;
                let index = position.min(category.items.len());
                category.items.insert(index, id.clone());
                Location::Category {
                    category: category_id,
                    index,
                }
            }
        };

        if let Some(item) = self.items.get_mut(&id) {
            item.category_id = match &location {
                Location::Root(_) => None,
                Location::Category { category, .. } => Some(category.clone()),
            };
        }
        Some(location)
    }

    /// Reorder a category within the root; its items travel with it
    fn move_category(&mut self, id: CategoryId, position: usize) -> Option<Location> {
        let from = self.category_slot(&id)?;
        let slot = self.root.remove(from);
        let index = position.min(self.root.len());
        self.root.insert(index, slot);
        Some(Location::Root(index))
    }

    // ========================
    // Persistence
    // ========================

    /// One record per item in root-then-category order, weights `0..N-1`
    pub fn compute_save_payload(&self) -> Vec<OrderRecord> {
        flatten(&self.root)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    pub fn is_saving(&self) -> bool {
        self.saving.is_some()
    }

    /// Mark a save as in flight and capture its payload.
    /// Returns None while another save is pending.
    pub fn begin_save(&mut self) -> Option<SaveTicket> {
        if self.saving.is_some() {
            debug!("[EDITOR] save already in flight");
            return None;
        }
        self.saving = Some(self.revision);
        Some(SaveTicket {
            revision: self.revision,
            records: self.compute_save_payload(),
        })
    }

    /// Record the backend's answer for the ticket issued at `revision`
    pub fn finish_save(&mut self, revision: u64, result: Result<(), SaveError>) -> Result<(), SaveError> {
        self.saving = None;
        match result {
            Ok(()) => {
                if revision == self.revision {
                    self.dirty = false;
                } else {
                    info!("[EDITOR] order changed while saving, keeping unsaved flag");
                }
                info!("[EDITOR] saved order at revision {}", revision);
                Ok(())
            }
            Err(e) => {
                warn!("[EDITOR] save failed: {}", e);
                Err(e)
            }
        }
    }

    /// Submit the current order through `api`
    pub async fn save<A>(&mut self, api: &A) -> Result<SaveStatus, SaveError>
    where
        A: OrderApi + ?Sized,
    {
        let Some(ticket) = self.begin_save() else {
            return Ok(SaveStatus::AlreadyInFlight);
        };
        let result = api.submit_order(&ticket.records).await;
        self.finish_save(ticket.revision, result)?;
        Ok(SaveStatus::Saved)
    }
}
