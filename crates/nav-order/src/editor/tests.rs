//! Editor Tests
//!
//! Drag/drop behavior, payload shape and the save lifecycle.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use proptest::prelude::*;

    use crate::api::{OrderApi, SaveError};
    use crate::domain::{CategoryId, DomainError, ItemId, Slot, Snapshot, SnapshotItem, SnapshotSlot};
    use crate::editor::*;

    fn category(id: &str, items: &[(i32, &str)]) -> SnapshotSlot {
        SnapshotSlot::Category {
            id: CategoryId::from(id),
            name: id.to_uppercase(),
            items: items.iter().map(|(id, label)| SnapshotItem::new(*id, label)).collect(),
        }
    }

    fn standalone(id: i32, label: &str) -> SnapshotSlot {
        SnapshotSlot::Item(SnapshotItem::new(id, label))
    }

    /// Root order [A, z, B] with A = [x, y] and B empty
    fn setup_editor() -> HierarchicalOrderEditor {
        let snapshot = Snapshot {
            slots: vec![
                category("a", &[(1, "x"), (2, "y")]),
                standalone(3, "z"),
                category("b", &[]),
            ],
        };
        HierarchicalOrderEditor::from_snapshot(snapshot).expect("valid snapshot")
    }

    fn record(id: i32, weight: u32, category: Option<&str>) -> OrderRecord {
        OrderRecord {
            id: ItemId::from(id),
            weight,
            category: category.map(CategoryId::from),
        }
    }

    fn item_drag(id: i32) -> DragSubject {
        DragSubject::Item(ItemId::from(id))
    }

    fn category_container(id: &str) -> Container {
        Container::Category(CategoryId::from(id))
    }

    /// Every item sits in exactly one place and its category_id agrees.
    fn assert_consistent(editor: &HierarchicalOrderEditor) {
        let mut seen = Vec::new();
        for slot in editor.slots() {
            match slot {
                Slot::Item(id) => {
                    assert_eq!(editor.item(id).unwrap().category_id, None);
                    seen.push(id.clone());
                }
                Slot::Category(category) => {
                    for id in &category.items {
                        assert_eq!(editor.item(id).unwrap().category_id.as_ref(), Some(&category.id));
                        seen.push(id.clone());
                    }
                }
            }
        }
        let total = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), total, "an item appears twice");
        assert_eq!(total, editor.item_count(), "an item went missing");
    }

    #[test]
    fn test_payload_interleaves_levels() {
        let editor = setup_editor();

        assert_eq!(
            editor.compute_save_payload(),
            vec![
                record(1, 0, Some("a")),
                record(2, 1, Some("a")),
                record(3, 2, None),
            ]
        );
    }

    #[test]
    fn test_payload_is_idempotent() {
        let mut editor = setup_editor();
        editor.begin_drag(item_drag(3));
        editor.drop_into(category_container("b"), 0);
        editor.end_drag();

        let first = editor.compute_save_payload();
        let second = editor.compute_save_payload();
        assert_eq!(first, second);
    }

    #[test]
    fn test_move_item_from_category_to_root() {
        let mut editor = setup_editor();
        let x = ItemId::from(1);

        assert!(editor.begin_drag(item_drag(1)));
        let outcome = editor.drop_into(Container::Root, 0);
        editor.end_drag();

        assert_eq!(outcome, DropOutcome::Accepted(Location::Root(0)));
        assert_eq!(editor.item(&x).unwrap().category_id, None);
        assert_eq!(editor.category(&CategoryId::from("a")).unwrap().items, vec![ItemId::from(2)]);
        assert_eq!(editor.slots()[0], Slot::Item(x.clone()));
        assert_eq!(editor.location_of(&x), Some(Location::Root(0)));
        assert_eq!(editor.compute_save_payload()[0], record(1, 0, None));
        assert_consistent(&editor);
    }

    #[test]
    fn test_move_standalone_item_into_category() {
        let mut editor = setup_editor();

        editor.begin_drag(item_drag(3));
        let outcome = editor.drop_into(category_container("a"), 1);
        editor.end_drag();

        assert_eq!(
            outcome,
            DropOutcome::Accepted(Location::Category {
                category: CategoryId::from("a"),
                index: 1,
            })
        );
        assert_eq!(editor.slots().len(), 2);
        assert_eq!(
            editor.compute_save_payload(),
            vec![
                record(1, 0, Some("a")),
                record(3, 1, Some("a")),
                record(2, 2, Some("a")),
            ]
        );
        assert_consistent(&editor);
    }

    #[test]
    fn test_move_between_categories() {
        let mut editor = setup_editor();

        editor.begin_drag(item_drag(2));
        editor.drop_into(category_container("b"), 0);
        editor.end_drag();

        assert_eq!(editor.item(&ItemId::from(2)).unwrap().category_id, Some(CategoryId::from("b")));
        assert_eq!(
            editor.compute_save_payload(),
            vec![
                record(1, 0, Some("a")),
                record(3, 1, None),
                record(2, 2, Some("b")),
            ]
        );
        assert_consistent(&editor);
    }

    #[test]
    fn test_reposition_within_same_category() {
        let mut editor = setup_editor();

        editor.begin_drag(item_drag(1));
        let outcome = editor.drop_into(category_container("a"), 1);
        editor.end_drag();

        assert!(outcome.is_accepted());
        assert_eq!(
            editor.category(&CategoryId::from("a")).unwrap().items,
            vec![ItemId::from(2), ItemId::from(1)]
        );
        assert_eq!(editor.item(&ItemId::from(1)).unwrap().category_id, Some(CategoryId::from("a")));
        assert!(editor.has_unsaved_changes());
    }

    #[test]
    fn test_position_past_end_appends() {
        let mut editor = setup_editor();

        editor.begin_drag(item_drag(1));
        let outcome = editor.drop_into(Container::Root, 99);

        assert_eq!(outcome, DropOutcome::Accepted(Location::Root(3)));
        assert_eq!(editor.slots().last(), Some(&Slot::Item(ItemId::from(1))));
    }

    #[test]
    fn test_category_reorder_carries_items() {
        let mut editor = setup_editor();

        editor.begin_drag(DragSubject::Category(CategoryId::from("a")));
        let outcome = editor.drop_into(Container::Root, 2);
        editor.end_drag();

        assert_eq!(outcome, DropOutcome::Accepted(Location::Root(2)));
        assert_eq!(
            editor.compute_save_payload(),
            vec![
                record(3, 0, None),
                record(1, 1, Some("a")),
                record(2, 2, Some("a")),
            ]
        );
        assert_consistent(&editor);
    }

    #[test]
    fn test_category_into_category_is_rejected() {
        let mut editor = setup_editor();
        let before = editor.slots().to_vec();

        editor.begin_drag(DragSubject::Category(CategoryId::from("b")));
        let outcome = editor.drop_into(category_container("a"), 0);
        editor.end_drag();

        assert_eq!(outcome, DropOutcome::Rejected(RejectReason::NestedCategory));
        assert_eq!(editor.slots(), before.as_slice());
        assert!(!editor.has_unsaved_changes());
    }

    #[test]
    fn test_drop_into_unknown_category_is_rejected() {
        let mut editor = setup_editor();
        let before = editor.snapshot();

        editor.begin_drag(item_drag(3));
        let outcome = editor.drop_into(category_container("missing"), 0);

        assert_eq!(outcome, DropOutcome::Rejected(RejectReason::UnknownContainer));
        assert_eq!(editor.snapshot(), before);
        assert!(!editor.has_unsaved_changes());
    }

    #[test]
    fn test_drop_without_drag_is_ignored() {
        let mut editor = setup_editor();

        assert_eq!(editor.drop_into(Container::Root, 0), DropOutcome::Ignored);
        assert!(!editor.has_unsaved_changes());
    }

    #[test]
    fn test_drag_lifecycle_state() {
        let mut editor = setup_editor();

        assert!(!editor.begin_drag(item_drag(42)));
        assert!(!editor.is_dragging());

        assert!(editor.begin_drag(item_drag(3)));
        assert_eq!(
            editor.legal_targets(),
            &[Container::Root, category_container("a"), category_container("b")]
        );

        // a new gesture replaces the old one
        assert!(editor.begin_drag(DragSubject::Category(CategoryId::from("a"))));
        assert_eq!(editor.dragged(), Some(&DragSubject::Category(CategoryId::from("a"))));
        assert_eq!(editor.legal_targets(), &[Container::Root]);

        editor.drop_into(Container::Root, 1);
        assert!(editor.legal_targets().is_empty());
        assert!(editor.is_dragging());

        editor.end_drag();
        assert!(!editor.is_dragging());
        assert!(editor.has_unsaved_changes());
    }

    #[test]
    fn test_end_drag_without_drop_keeps_clean() {
        let mut editor = setup_editor();

        editor.begin_drag(item_drag(1));
        editor.end_drag();

        assert!(!editor.has_unsaved_changes());
        assert_eq!(editor.snapshot(), setup_editor().snapshot());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let duplicate_item = Snapshot {
            slots: vec![category("a", &[(1, "x")]), standalone(1, "again")],
        };
        assert_eq!(
            HierarchicalOrderEditor::from_snapshot(duplicate_item).unwrap_err(),
            DomainError::DuplicateItem(ItemId::from(1))
        );

        let duplicate_category = Snapshot {
            slots: vec![category("a", &[]), category("a", &[(2, "y")])],
        };
        assert_eq!(
            HierarchicalOrderEditor::from_snapshot(duplicate_category).unwrap_err(),
            DomainError::DuplicateCategory(CategoryId::from("a"))
        );
    }

    // ========================
    // Save lifecycle
    // ========================

    /// Answers submissions from a script and records what it was sent
    #[derive(Default)]
    struct ScriptedApi {
        responses: RefCell<VecDeque<Result<(), SaveError>>>,
        calls: RefCell<Vec<Vec<OrderRecord>>>,
    }

    impl ScriptedApi {
        fn new(responses: Vec<Result<(), SaveError>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                calls: RefCell::default(),
            }
        }
    }

    #[async_trait(?Send)]
    impl OrderApi for ScriptedApi {
        async fn submit_order(&self, records: &[OrderRecord]) -> Result<(), SaveError> {
            self.calls.borrow_mut().push(records.to_vec());
            self.responses.borrow_mut().pop_front().unwrap_or(Ok(()))
        }
    }

    fn make_dirty(editor: &mut HierarchicalOrderEditor) {
        editor.begin_drag(item_drag(1));
        assert!(editor.drop_into(Container::Root, 0).is_accepted());
        editor.end_drag();
    }

    #[tokio::test]
    async fn test_dirty_flag_lifecycle() {
        let mut editor = setup_editor();
        let api = ScriptedApi::new(vec![
            Err(SaveError::Transport("connection reset".to_string())),
            Err(SaveError::Rejected("Stale order".to_string())),
            Ok(()),
        ]);
        assert!(!editor.has_unsaved_changes());

        make_dirty(&mut editor);
        assert!(editor.has_unsaved_changes());
        let edited = editor.snapshot();

        let err = editor.save(&api).await.unwrap_err();
        assert_eq!(err, SaveError::Transport("connection reset".to_string()));
        assert!(editor.has_unsaved_changes());
        assert_eq!(editor.snapshot(), edited);

        let err = editor.save(&api).await.unwrap_err();
        assert_eq!(err.to_string(), "Stale order");
        assert!(editor.has_unsaved_changes());
        assert!(!editor.is_saving());

        assert_eq!(editor.save(&api).await, Ok(SaveStatus::Saved));
        assert!(!editor.has_unsaved_changes());

        let calls = api.calls.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[2], editor.compute_save_payload());
        assert_eq!(calls[2][0], record(1, 0, None));
    }

    #[tokio::test]
    async fn test_second_save_while_in_flight_is_noop() {
        let mut editor = setup_editor();
        let api = ScriptedApi::default();
        make_dirty(&mut editor);

        let ticket = editor.begin_save().expect("first save starts");
        assert!(editor.is_saving());
        assert!(editor.begin_save().is_none());
        assert_eq!(editor.save(&api).await, Ok(SaveStatus::AlreadyInFlight));
        assert!(api.calls.borrow().is_empty());

        editor.finish_save(ticket.revision, Ok(())).unwrap();
        assert!(!editor.is_saving());
        assert!(!editor.has_unsaved_changes());
    }

    #[test]
    fn test_edit_during_save_stays_dirty() {
        let mut editor = setup_editor();
        make_dirty(&mut editor);

        let ticket = editor.begin_save().unwrap();
        editor.begin_drag(item_drag(3));
        editor.drop_into(category_container("b"), 0);
        editor.end_drag();

        editor.finish_save(ticket.revision, Ok(())).unwrap();
        assert!(editor.has_unsaved_changes());
        assert!(editor.begin_save().is_some());
    }

    // ========================
    // Properties
    // ========================

    fn subjects(editor: &HierarchicalOrderEditor) -> Vec<DragSubject> {
        let mut subjects: Vec<DragSubject> = editor
            .compute_save_payload()
            .into_iter()
            .map(|r| DragSubject::Item(r.id))
            .collect();
        subjects.extend(
            editor
                .slots()
                .iter()
                .filter_map(Slot::as_category)
                .map(|c| DragSubject::Category(c.id.clone())),
        );
        subjects
    }

    proptest! {
        #[test]
        fn drops_preserve_structure(
            ops in proptest::collection::vec((0usize..8, 0usize..4, 0usize..6), 1..40)
        ) {
            let mut editor = HierarchicalOrderEditor::from_snapshot(Snapshot {
                slots: vec![
                    category("a", &[(1, "x"), (2, "y")]),
                    standalone(3, "z"),
                    category("b", &[]),
                    category("c", &[(4, "w")]),
                    standalone(5, "v"),
                ],
            }).unwrap();
            let containers = [
                Container::Root,
                category_container("a"),
                category_container("b"),
                category_container("c"),
            ];

            for (subject, container, position) in ops {
                let all = subjects(&editor);
                let subject = all[subject % all.len()].clone();
                let before = editor.snapshot();
                let was_dirty = editor.has_unsaved_changes();

                editor.begin_drag(subject);
                let outcome = editor.drop_into(containers[container].clone(), position);
                editor.end_drag();

                assert_consistent(&editor);
                prop_assert_eq!(editor.slots().iter().filter_map(Slot::as_category).count(), 3);

                let payload = editor.compute_save_payload();
                let weights: Vec<u32> = payload.iter().map(|r| r.weight).collect();
                prop_assert_eq!(weights, (0..5).collect::<Vec<u32>>());

                match outcome {
                    DropOutcome::Accepted(_) => prop_assert!(editor.has_unsaved_changes()),
                    _ => {
                        prop_assert_eq!(editor.snapshot(), before);
                        prop_assert_eq!(editor.has_unsaved_changes(), was_dirty);
                    }
                }
            }
        }
    }
}
