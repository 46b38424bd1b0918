//! # Table State
//!
//! Pure state-transition core for data-table widgets. Each table's UI state
//! (pagination, sorting, filtering, row selection) lives under its table
//! name in a root map, and every action produces a new snapshot.
//!
//! ## Core Concepts
//!
//! - **Actions**: `{type, payload}` events addressed to one table by name
//! - **Table state**: one immutable snapshot per table, seeded from its configs
//! - **Filters**: text or column-bound value filters, applied conjunctively
//! - **Selection**: either "only these rows" or "all rows except these"
//!
//! ## Example
//!
//! ```ignore
//! use table_state::{Action, RootState};
//! use serde_json::json;
//!
//! let state = RootState::new();
//!
//! let state = state.dispatch(&Action::from_json(&json!({
//!     "type": "TABLE_INITIALIZE",
//!     "payload": {
//!         "tableName": "orders",
//!         "configs": {},
//!         "columns": [{"key": "id", "primaryKey": true}, {"key": "status"}]
//!     }
//! }))?)?;
//!
//! let state = state.dispatch(&Action::from_json(&json!({
//!     "type": "TABLE_SORT_CHANGED",
//!     "payload": {"tableName": "orders", "sortKey": "status"}
//! }))?)?;
//!
//! assert_eq!(state.table("orders").unwrap().sort_key.as_deref(), Some("status"));
//! ```

pub mod actions;
pub mod error;
pub mod state;
pub mod types;

// Re-exports
pub use actions::{
    Action, ActionKind, FilterChangedPayload, FilterTextChangedPayload, InitializePayload,
    NewDataPayload, PageChangedPayload, PageSizeChangedPayload, RowCheckedChangedPayload,
    SetFilterPayload, SortChangedPayload, TableAction, TablePayload, REMOVE_VALUE_ACTION,
};
pub use error::{Result, TableError};
pub use state::{normalize_filters, reduce_root, reduce_table, RootState, Selection, TableState};
pub use types::*;
