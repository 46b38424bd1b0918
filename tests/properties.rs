//! Property tests for the table reducer's transition laws.

use proptest::prelude::*;
use serde_json::json;
use table_state::{
    reduce_table, Column, FilterChangedPayload, FilterTextChangedPayload, InitializePayload,
    PageChangedPayload, PageSize, PageSizeChangedPayload, Row, RowCheckedChangedPayload,
    SortChangedPayload, SortDirection, TableAction, TableConfig, TablePayload, TableState,
};

const TABLE: &str = "orders";

fn init_action(configs: TableConfig) -> TableAction {
    TableAction::Initialize(InitializePayload {
        table_name: TABLE.to_string(),
        configs: Some(configs),
        columns: Some(vec![Column::primary("id"), Column::new("status")]),
        filter_value: None,
        initial_data: None,
    })
}

fn fresh(configs: TableConfig) -> TableState {
    reduce_table(None, &init_action(configs)).unwrap().unwrap()
}

fn apply(state: &TableState, action: &TableAction) -> TableState {
    reduce_table(Some(state), action).unwrap().unwrap()
}

fn row(id: i64) -> Row {
    json!({"id": id}).as_object().cloned().unwrap()
}

fn check(id: i64) -> TableAction {
    TableAction::RowCheckedChanged(RowCheckedChangedPayload {
        table_name: TABLE.to_string(),
        row: row(id),
    })
}

fn sort(key: &str) -> TableAction {
    TableAction::SortChanged(SortChangedPayload {
        table_name: TABLE.to_string(),
        sort_key: key.to_string(),
    })
}

fn page_size() -> impl Strategy<Value = PageSize> {
    prop_oneof![(1usize..500).prop_map(PageSize::Rows), Just(PageSize::All)]
}

fn configs() -> impl Strategy<Value = TableConfig> {
    (
        proptest::option::of(page_size()),
        proptest::option::of("[a-z]{1,6}"),
        proptest::option::of(prop_oneof![
            Just(SortDirection::Ascending),
            Just(SortDirection::Descending)
        ]),
    )
        .prop_map(|(size, sort_key, direction)| TableConfig {
            default_page_size: size,
            sort_key,
            sort_direction: direction,
            ..TableConfig::default()
        })
}

/// Drive a fresh table through checks, pages and sorts.
fn busy_state(ids: &[i64], page: usize, sort_keys: &[String]) -> TableState {
    let mut state = fresh(TableConfig::default());
    for id in ids {
        state = apply(&state, &check(*id));
    }
    for key in sort_keys {
        state = apply(&state, &sort(key));
    }
    apply(
        &state,
        &TableAction::PageChanged(PageChangedPayload {
            table_name: TABLE.to_string(),
            page,
        }),
    )
}

proptest! {
    #[test]
    fn prop_page_resets(
        ids in prop::collection::vec(0i64..20, 0..10),
        page in 0usize..1000,
        size in page_size(),
        text in proptest::option::of("[a-z ]{0,10}"),
    ) {
        let state = busy_state(&ids, page, &[]);
        let name = TABLE.to_string();

        let actions = [
            TableAction::PageSizeChanged(PageSizeChangedPayload { table_name: name.clone(), page_size: size }),
            TableAction::FilterChanged(FilterChangedPayload { table_name: name.clone(), filter: vec![], action: None }),
            TableAction::FilterTextChanged(FilterTextChangedPayload { table_name: name, filter_text: text }),
        ];
        for action in &actions {
            prop_assert_eq!(apply(&state, action).page, 0);
        }
    }

    #[test]
    fn prop_sort_same_key_twice_restores_direction(
        keys in prop::collection::vec("[a-c]", 0..6),
        key in "[a-c]",
    ) {
        let state = busy_state(&[], 0, &keys);
        let once = apply(&state, &sort(&key));
        let twice = apply(&once, &sort(&key));

        prop_assert_eq!(once.sort_key.as_deref(), Some(key.as_str()));
        if state.sort_key.as_deref() == Some(key.as_str()) {
            prop_assert_eq!(twice.direction, state.direction);
        } else {
            prop_assert_eq!(once.direction, SortDirection::Ascending);
            prop_assert_eq!(twice.direction, SortDirection::Descending);
        }
    }

    #[test]
    fn prop_row_check_is_involution(
        ids in prop::collection::vec(0i64..20, 0..15),
        id in 0i64..25,
        select_all in any::<bool>(),
    ) {
        let mut state = busy_state(&ids, 0, &[]);
        if select_all {
            state = apply(&state, &TableAction::SelectAllChanged(TablePayload { table_name: TABLE.to_string() }));
        }

        let twice = apply(&apply(&state, &check(id)), &check(id));
        prop_assert_eq!(twice.user_selection().len(), state.user_selection().len());
        prop_assert_eq!(twice.is_row_selected(&row(id)), state.is_row_selected(&row(id)));
    }

    #[test]
    fn prop_user_selection_has_no_duplicates(ids in prop::collection::vec(0i64..8, 0..40)) {
        let state = busy_state(&ids, 0, &[]);
        let keys = state.user_selection();
        for (i, key) in keys.iter().enumerate() {
            prop_assert!(!keys[i + 1..].contains(key));
        }
    }

    #[test]
    fn prop_select_all_clears_selection(ids in prop::collection::vec(0i64..20, 0..15)) {
        let state = busy_state(&ids, 0, &[]);
        let next = apply(&state, &TableAction::SelectAllChanged(TablePayload { table_name: TABLE.to_string() }));

        prop_assert!(next.user_selection().is_empty());
        prop_assert_eq!(next.select_all(), !state.select_all());
    }

    #[test]
    fn prop_reinitialize_keeps_config_scalars(
        configs in configs(),
        ids in prop::collection::vec(0i64..20, 0..10),
        sort_keys in prop::collection::vec("[a-c]", 0..4),
        page in 0usize..100,
        drop_columns in any::<bool>(),
    ) {
        let start = fresh(configs.clone());
        let mut reinit = InitializePayload {
            table_name: TABLE.to_string(),
            configs: Some(configs.clone()),
            columns: Some(vec![Column::primary("id"), Column::new("status")]),
            filter_value: None,
            initial_data: None,
        };
        if drop_columns {
            reinit.columns = None;
        }
        let reinit = TableAction::Initialize(reinit);

        prop_assert_eq!(&apply(&start, &reinit), &start);

        let mut busy = start;
        for id in &ids {
            busy = apply(&busy, &check(*id));
        }
        for key in &sort_keys {
            busy = apply(&busy, &sort(key));
        }
        busy = apply(&busy, &TableAction::PageChanged(PageChangedPayload { table_name: TABLE.to_string(), page }));

        let next = apply(&busy, &reinit);
        prop_assert_eq!(next.page_size, busy.page_size);
        prop_assert_eq!(&next.page_sizes, &busy.page_sizes);
        prop_assert_eq!(&next.sort_key, &busy.sort_key);
        prop_assert_eq!(next.direction, busy.direction);
        prop_assert_eq!(&next.configs, &configs);
        prop_assert_eq!(&next.primary_key, "id");
    }

    #[test]
    fn prop_destroy_restores_defaults(
        configs in configs(),
        ids in prop::collection::vec(0i64..20, 0..10),
        page in 0usize..100,
    ) {
        let start = fresh(configs.clone());
        let mut state = start.clone();
        for id in &ids {
            state = apply(&state, &check(*id));
        }
        state = apply(&state, &TableAction::PageChanged(PageChangedPayload { table_name: TABLE.to_string(), page }));

        let destroyed = apply(&state, &TableAction::DestroyState(TablePayload { table_name: TABLE.to_string() }));
        prop_assert_eq!(&destroyed.configs, &configs);
        prop_assert_eq!(destroyed, start);
    }

    #[test]
    fn prop_no_implicit_creation(page in 0usize..100, id in 0i64..10) {
        let actions = [
            check(id),
            sort("status"),
            TableAction::PageChanged(PageChangedPayload { table_name: TABLE.to_string(), page }),
        ];
        for action in &actions {
            prop_assert!(reduce_table(None, action).unwrap().is_none());
        }
    }
}
