//! Root state: every table's state keyed by table name.

use crate::actions::Action;
use crate::error::{Result, TableError};
use crate::state::table::{reduce_table, TableState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::trace;

/// All table states, keyed by table name.
///
/// Cloning is cheap: the container and each table entry are shared. A
/// reduction that touches one table builds a new container and reuses the
/// other entries as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RootState {
    tables: Arc<BTreeMap<String, Arc<TableState>>>,
}

impl RootState {
    /// Empty state, before any table has initialized.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self, name: &str) -> Option<&TableState> {
        self.tables.get(name).map(Arc::as_ref)
    }

    /// Shared handle to a table's state.
    pub fn table_handle(&self, name: &str) -> Option<&Arc<TableState>> {
        self.tables.get(name)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Whether both values share the same container.
    pub fn ptr_eq(&self, other: &RootState) -> bool {
        Arc::ptr_eq(&self.tables, &other.tables)
    }

    /// Reduce `action` against this state.
    pub fn dispatch(&self, action: &Action) -> Result<RootState> {
        reduce_root(Some(self), action)
    }

    /// Decode a JSON snapshot.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Encode a JSON snapshot.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| TableError::Serialization(e.to_string()))
    }
}

/// Reduce the root state.
///
/// Absent state becomes an empty map. Foreign actions return the same
/// container. A table action replaces only its own table's entry; an
/// action for a table that was never initialized adds nothing.
pub fn reduce_root(state: Option<&RootState>, action: &Action) -> Result<RootState> {
    let Some(state) = state else {
        return Ok(RootState::new());
    };

    let action = match action {
        Action::Table(action) => action,
        Action::Foreign { kind } => {
            trace!(kind = %kind, "passing through foreign action");
            return Ok(state.clone());
        }
    };

    let name = action.table_name();
    let next = reduce_table(state.table(name), action)?;

    let mut tables = BTreeMap::clone(&state.tables);
    if let Some(table) = next {
        tables.insert(name.to_string(), Arc::new(table));
    }

    Ok(RootState {
        tables: Arc::new(tables),
    })
}
