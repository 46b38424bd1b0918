//! Per-table state and its reducer.

use crate::actions::{InitializePayload, TableAction};
use crate::error::{Result, TableError};
use crate::state::filters::normalize_filters;
use crate::state::selection::Selection;
use crate::types::{Column, Filter, PageSize, Row, SortDirection, TableConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace, warn};

/// UI state of a single table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableState {
    pub table_name: String,

    /// Zero-based page index.
    pub page: usize,

    pub page_size: PageSize,

    pub page_sizes: Vec<PageSize>,

    /// Applied conjunctively.
    pub filter: Vec<Filter>,

    pub filter_text: Option<String>,

    pub sort_key: Option<String>,

    pub direction: SortDirection,

    #[serde(flatten)]
    pub selection: Selection,

    pub columns: Vec<Column>,

    /// Key of the column flagged as primary key.
    pub primary_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_data: Option<Vec<Row>>,

    /// Configuration supplied at initialization, kept for resets.
    pub configs: TableConfig,
}

impl TableState {
    /// Fresh state for `configs`, with every runtime field at its default.
    pub fn new(
        table_name: impl Into<String>,
        configs: TableConfig,
        columns: Vec<Column>,
        primary_key: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            page: 0,
            page_size: configs.page_size(),
            page_sizes: configs.page_sizes(),
            filter: Vec::new(),
            filter_text: None,
            sort_key: configs.sort_key.clone(),
            direction: configs.direction(),
            selection: Selection::default(),
            columns,
            primary_key: primary_key.into(),
            initial_data: None,
            configs,
        }
    }

    /// Discard runtime UI state, keeping configs, columns and data.
    pub fn reset(&self) -> Self {
        Self {
            initial_data: self.initial_data.clone(),
            ..Self::new(
                self.table_name.clone(),
                self.configs.clone(),
                self.columns.clone(),
                self.primary_key.clone(),
            )
        }
    }

    pub fn select_all(&self) -> bool {
        self.selection.select_all()
    }

    pub fn user_selection(&self) -> &[Value] {
        self.selection.keys()
    }

    /// Whether `row` is selected under the current selection mode.
    pub fn is_row_selected(&self, row: &Row) -> bool {
        self.selection.is_row_selected(row, &self.primary_key)
    }

    /// Primary-key value of `row`; `null` when the row lacks the field.
    pub fn row_key(&self, row: &Row) -> Value {
        match row.get(&self.primary_key) {
            Some(key) => key.clone(),
            None => {
                warn!(
                    table = %self.table_name,
                    primary_key = %self.primary_key,
                    "row has no primary key value"
                );
                Value::Null
            }
        }
    }
}

/// Find the single primary-key column.
fn primary_key_column<'a>(table: &str, columns: &'a [Column]) -> Result<&'a Column> {
    let mut flagged = columns.iter().filter(|c| c.primary_key);
    match (flagged.next(), flagged.count()) {
        (Some(column), 0) => Ok(column),
        (first, rest) => Err(TableError::Configuration {
            table: table.to_string(),
            found: usize::from(first.is_some()) + rest,
        }),
    }
}

/// Overlay defaults, then the existing state, then the payload.
fn initialize(state: Option<&TableState>, payload: &InitializePayload) -> Result<TableState> {
    let table = payload.table_name.as_str();

    let configs = payload
        .configs
        .clone()
        .or_else(|| state.map(|s| s.configs.clone()))
        .unwrap_or_default();
    let columns = payload
        .columns
        .clone()
        .or_else(|| state.map(|s| s.columns.clone()))
        .unwrap_or_default();
    let primary_key = primary_key_column(table, &columns)?.key.clone();

    let base = match state {
        Some(state) => state.clone(),
        None => TableState::new(table, configs.clone(), Vec::new(), String::new()),
    };

    let filter = match &payload.filter_value {
        Some(raw) => normalize_filters(table, raw, &columns),
        None => base.filter.clone(),
    };

    Ok(TableState {
        table_name: payload.table_name.clone(),
        filter,
        columns,
        primary_key,
        initial_data: payload.initial_data.clone().or(base.initial_data.clone()),
        configs,
        ..base
    })
}

/// Reduce one table's state.
///
/// `state` is `None` for a table that has never been initialized. Only
/// Initialize creates state; every other action leaves an absent table
/// absent.
pub fn reduce_table(state: Option<&TableState>, action: &TableAction) -> Result<Option<TableState>> {
    let table = action.table_name();
    let kind = action.kind();

    let next = match (action, state) {
        (TableAction::Initialize(payload), state) => initialize(state, payload)?,

        (_, None) => {
            trace!(table, %kind, "ignoring action for uninitialized table");
            return Ok(None);
        }

        (TableAction::NewData(p), Some(state)) => TableState {
            initial_data: Some(p.data.clone()),
            ..state.clone()
        },

        (TableAction::SetFilter(p), Some(state)) => TableState {
            filter: normalize_filters(table, &p.filter_value, &state.columns),
            ..state.clone()
        },

        (TableAction::PageChanged(p), Some(state)) => TableState {
            page: p.page,
            ..state.clone()
        },

        (TableAction::PageSizeChanged(p), Some(state)) => TableState {
            page: 0,
            page_size: p.page_size,
            ..state.clone()
        },

        (TableAction::SortChanged(p), Some(state)) => {
            if state.sort_key.as_deref() == Some(p.sort_key.as_str()) {
                TableState {
                    direction: state.direction.toggled(),
                    ..state.clone()
                }
            } else {
                TableState {
                    sort_key: Some(p.sort_key.clone()),
                    direction: SortDirection::Ascending,
                    ..state.clone()
                }
            }
        }

        (TableAction::FilterChanged(p), Some(state)) => TableState {
            page: 0,
            filter: p.filter.clone(),
            // keep the in-progress search text when a single value is removed
            filter_text: if p.removes_single_value() {
                state.filter_text.clone()
            } else {
                None
            },
            ..state.clone()
        },

        (TableAction::FilterTextChanged(p), Some(state)) => TableState {
            page: 0,
            filter_text: p.filter_text.clone(),
            ..state.clone()
        },

        (TableAction::SelectAllChanged(_), Some(state)) => TableState {
            selection: state.selection.toggled_mode(),
            ..state.clone()
        },

        (TableAction::RowCheckedChanged(p), Some(state)) => TableState {
            selection: state.selection.toggled_key(state.row_key(&p.row)),
            ..state.clone()
        },

        (TableAction::DestroyState(_), Some(state)) => state.reset(),
    };

    debug!(table, %kind, existing = state.is_some(), page = next.page, "reduced table action");

    Ok(Some(next))
}
