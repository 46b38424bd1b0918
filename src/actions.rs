//! Table actions and their wire format.
//!
//! Every action travels as `{ "type": KIND, "payload": { "tableName": ..., ... } }`.
//! Kinds outside the recognized set decode to [`Action::Foreign`] and are
//! passed through by the root reducer untouched.

use crate::error::{Result, TableError};
use crate::types::{Column, Filter, PageSize, RawFilter, Row, TableConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Filter-change tag that keeps the current filter text.
pub const REMOVE_VALUE_ACTION: &str = "remove-value";

/// The recognized table action kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Initialize,
    NewData,
    SetFilter,
    PageChanged,
    PageSizeChanged,
    SortChanged,
    FilterChanged,
    FilterTextChanged,
    SelectAllChanged,
    RowCheckedChanged,
    DestroyState,
}

impl ActionKind {
    pub const ALL: [ActionKind; 11] = [
        ActionKind::Initialize,
        ActionKind::NewData,
        ActionKind::SetFilter,
        ActionKind::PageChanged,
        ActionKind::PageSizeChanged,
        ActionKind::SortChanged,
        ActionKind::FilterChanged,
        ActionKind::FilterTextChanged,
        ActionKind::SelectAllChanged,
        ActionKind::RowCheckedChanged,
        ActionKind::DestroyState,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Initialize => "TABLE_INITIALIZE",
            ActionKind::NewData => "TABLE_NEW_DATA",
            ActionKind::SetFilter => "TABLE_SET_FILTER",
            ActionKind::PageChanged => "TABLE_PAGE_CHANGED",
            ActionKind::PageSizeChanged => "TABLE_PAGE_SIZE_CHANGED",
            ActionKind::SortChanged => "TABLE_SORT_CHANGED",
            ActionKind::FilterChanged => "TABLE_FILTER_CHANGED",
            ActionKind::FilterTextChanged => "TABLE_FILTER_TEXT_CHANGED",
            ActionKind::SelectAllChanged => "TABLE_SELECT_ALL_CHANGED",
            ActionKind::RowCheckedChanged => "TABLE_ROW_CHECKED_CHANGED",
            ActionKind::DestroyState => "TABLE_DESTROY_STATE",
        }
    }

    /// Look up a kind by its wire name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializePayload {
    pub table_name: String,
    /// Falls back to the table's existing configs, then to the defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configs: Option<TableConfig>,
    /// Falls back to the table's existing columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_value: Option<Vec<RawFilter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_data: Option<Vec<Row>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDataPayload {
    pub table_name: String,
    pub data: Vec<Row>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFilterPayload {
    pub table_name: String,
    pub filter_value: Vec<RawFilter>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageChangedPayload {
    pub table_name: String,
    pub page: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSizeChangedPayload {
    pub table_name: String,
    pub page_size: PageSize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortChangedPayload {
    pub table_name: String,
    pub sort_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterChangedPayload {
    pub table_name: String,
    pub filter: Vec<Filter>,
    /// UI action that produced the change, e.g. [`REMOVE_VALUE_ACTION`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl FilterChangedPayload {
    /// Whether this change removed a single value and should keep the filter text.
    pub fn removes_single_value(&self) -> bool {
        self.action.as_deref() == Some(REMOVE_VALUE_ACTION)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterTextChangedPayload {
    pub table_name: String,
    pub filter_text: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowCheckedChangedPayload {
    pub table_name: String,
    pub row: Row,
}

/// Payload for actions that carry nothing but the table name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePayload {
    pub table_name: String,
}

/// A recognized action addressed to one table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum TableAction {
    #[serde(rename = "TABLE_INITIALIZE")]
    Initialize(InitializePayload),
    #[serde(rename = "TABLE_NEW_DATA")]
    NewData(NewDataPayload),
    #[serde(rename = "TABLE_SET_FILTER")]
    SetFilter(SetFilterPayload),
    #[serde(rename = "TABLE_PAGE_CHANGED")]
    PageChanged(PageChangedPayload),
    #[serde(rename = "TABLE_PAGE_SIZE_CHANGED")]
    PageSizeChanged(PageSizeChangedPayload),
    #[serde(rename = "TABLE_SORT_CHANGED")]
    SortChanged(SortChangedPayload),
    #[serde(rename = "TABLE_FILTER_CHANGED")]
    FilterChanged(FilterChangedPayload),
    #[serde(rename = "TABLE_FILTER_TEXT_CHANGED")]
    FilterTextChanged(FilterTextChangedPayload),
    #[serde(rename = "TABLE_SELECT_ALL_CHANGED")]
    SelectAllChanged(TablePayload),
    #[serde(rename = "TABLE_ROW_CHECKED_CHANGED")]
    RowCheckedChanged(RowCheckedChangedPayload),
    #[serde(rename = "TABLE_DESTROY_STATE")]
    DestroyState(TablePayload),
}

impl TableAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            TableAction::Initialize(_) => ActionKind::Initialize,
            TableAction::NewData(_) => ActionKind::NewData,
            TableAction::SetFilter(_) => ActionKind::SetFilter,
            TableAction::PageChanged(_) => ActionKind::PageChanged,
            TableAction::PageSizeChanged(_) => ActionKind::PageSizeChanged,
            TableAction::SortChanged(_) => ActionKind::SortChanged,
            TableAction::FilterChanged(_) => ActionKind::FilterChanged,
            TableAction::FilterTextChanged(_) => ActionKind::FilterTextChanged,
            TableAction::SelectAllChanged(_) => ActionKind::SelectAllChanged,
            TableAction::RowCheckedChanged(_) => ActionKind::RowCheckedChanged,
            TableAction::DestroyState(_) => ActionKind::DestroyState,
        }
    }

    /// Name of the table this action targets.
    pub fn table_name(&self) -> &str {
        match self {
            TableAction::Initialize(p) => &p.table_name,
            TableAction::NewData(p) => &p.table_name,
            TableAction::SetFilter(p) => &p.table_name,
            TableAction::PageChanged(p) => &p.table_name,
            TableAction::PageSizeChanged(p) => &p.table_name,
            TableAction::SortChanged(p) => &p.table_name,
            TableAction::FilterChanged(p) => &p.table_name,
            TableAction::FilterTextChanged(p) => &p.table_name,
            TableAction::SelectAllChanged(p) => &p.table_name,
            TableAction::RowCheckedChanged(p) => &p.table_name,
            TableAction::DestroyState(p) => &p.table_name,
        }
    }
}

/// Any action reaching the root reducer.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Table(TableAction),
    /// An action of some other part of the application.
    Foreign { kind: String },
}

impl Action {
    /// Decode a wire action.
    ///
    /// A `type` outside the recognized set yields [`Action::Foreign`]; a
    /// recognized `type` with a malformed payload is an error.
    pub fn from_json(value: &Value) -> Result<Self> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| TableError::Deserialization("action has no \"type\"".to_string()))?;

        if ActionKind::parse(kind).is_none() {
            return Ok(Action::Foreign {
                kind: kind.to_string(),
            });
        }

        let action: TableAction = serde_json::from_value(value.clone())?;
        Ok(Action::Table(action))
    }

    /// Decode a wire action from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_json(&value)
    }

    /// Encode to the wire shape.
    pub fn to_json(&self) -> Result<Value> {
        match self {
            Action::Table(action) => serde_json::to_value(action)
                .map_err(|e| TableError::Serialization(e.to_string())),
            Action::Foreign { kind } => Ok(serde_json::json!({ "type": kind })),
        }
    }

    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            Action::Table(action) => Some(action.kind()),
            Action::Foreign { .. } => None,
        }
    }
}

impl From<TableAction> for Action {
    fn from(action: TableAction) -> Self {
        Action::Table(action)
    }
}
