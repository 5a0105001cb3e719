//! Tree Utilities
//!
//! Projection of the editor state into rows for rendering, and translation
//! of a hovered drop zone into the index `drop_into` expects.

use nav_order::{CategoryId, Container, HierarchicalOrderEditor, ItemId, Slot};

/// A gap between two entries of a container (0 = before the first one)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zone {
    pub container: Container,
    pub gap: usize,
}

/// One rendered line of the menu editor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Row {
    Zone(Zone),
    Category { id: CategoryId, name: String, size: usize },
    Item { id: ItemId, label: String, depth: usize },
}

/// Render root slots and nested items in display order,
/// with a drop zone before every entry and after the last one
pub fn flatten_order(editor: &HierarchicalOrderEditor) -> Vec<Row> {
    let label = |id: &ItemId| {
        editor
            .item(id)
            .map(|item| item.label.clone())
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| format!("#{}", id))
    };

    let mut rows = vec![Row::Zone(Zone { container: Container::Root, gap: 0 })];
    for (index, slot) in editor.slots().iter().enumerate() {
        match slot {
            Slot::Item(id) => rows.push(Row::Item { id: id.clone(), label: label(id), depth: 0 }),
            Slot::Category(category) => {
                let inner = Container::Category(category.id.clone());
                rows.push(Row::Category {
                    id: category.id.clone(),
                    name: category.name.clone(),
                    size: category.items.len(),
                });
                rows.push(Row::Zone(Zone { container: inner.clone(), gap: 0 }));
                for (position, id) in category.items.iter().enumerate() {
                    rows.push(Row::Item { id: id.clone(), label: label(id), depth: 1 });
                    rows.push(Row::Zone(Zone { container: inner.clone(), gap: position + 1 }));
                }
            }
        }
        rows.push(Row::Zone(Zone { container: Container::Root, gap: index + 1 }));
    }
    rows
}

/// Zones are numbered before the dragged entry is lifted out; shift by
/// one when moving further down its own container.
pub fn target_index(editor: &HierarchicalOrderEditor, zone: &Zone) -> usize {
    let from = editor
        .dragged()
        .and_then(|subject| editor.subject_location(subject));
    match from {
        Some(location) if location.container() == zone.container && location.index() < zone.gap => {
            zone.gap - 1
        }
        _ => zone.gap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_order::{DragSubject, Snapshot};

    fn make_editor() -> HierarchicalOrderEditor {
        let snapshot = Snapshot::from_json(
            r#"{"slots": [
                {"type": "item", "id": 1, "label": "Wiki"},
                {"type": "category", "id": 10, "name": "Tools",
                 "items": [{"id": 2, "label": "Grafana"}, {"id": 3}]},
                {"type": "item", "id": 4, "label": "Status"}
            ]}"#,
        )
        .unwrap();
        HierarchicalOrderEditor::from_snapshot(snapshot).unwrap()
    }

    fn zone(container: Container, gap: usize) -> Zone {
        Zone { container, gap }
    }

    #[test]
    fn test_flatten_order() {
        let tools = Container::Category(CategoryId::from(10));
        let rows = flatten_order(&make_editor());

        assert_eq!(
            rows,
            vec![
                Row::Zone(zone(Container::Root, 0)),
                Row::Item { id: ItemId::from(1), label: "Wiki".to_string(), depth: 0 },
                Row::Zone(zone(Container::Root, 1)),
                Row::Category { id: CategoryId::from(10), name: "Tools".to_string(), size: 2 },
                Row::Zone(zone(tools.clone(), 0)),
                Row::Item { id: ItemId::from(2), label: "Grafana".to_string(), depth: 1 },
                Row::Zone(zone(tools.clone(), 1)),
                Row::Item { id: ItemId::from(3), label: "#3".to_string(), depth: 1 },
                Row::Zone(zone(tools, 2)),
                Row::Zone(zone(Container::Root, 2)),
                Row::Item { id: ItemId::from(4), label: "Status".to_string(), depth: 0 },
                Row::Zone(zone(Container::Root, 3)),
            ]
        );
    }

    #[test]
    fn test_target_index_shifts_below_origin() {
        let mut editor = make_editor();
        editor.begin_drag(DragSubject::Item(ItemId::from(1)));

        // Gap after "Status" is gap 3; Wiki is lifted out first
        assert_eq!(target_index(&editor, &zone(Container::Root, 3)), 2);
        assert_eq!(target_index(&editor, &zone(Container::Root, 0)), 0);
        // Other containers are unaffected
        let tools = Container::Category(CategoryId::from(10));
        assert_eq!(target_index(&editor, &zone(tools, 2)), 2);

        let position = target_index(&editor, &zone(Container::Root, 3));
        editor.drop_into(Container::Root, position);
        assert_eq!(editor.slots().last(), Some(&Slot::Item(ItemId::from(1))));
    }

    #[test]
    fn test_target_index_for_category() {
        let mut editor = make_editor();
        editor.begin_drag(DragSubject::Category(CategoryId::from(10)));

        assert_eq!(target_index(&editor, &zone(Container::Root, 1)), 1);
        assert_eq!(target_index(&editor, &zone(Container::Root, 3)), 2);
    }
}
