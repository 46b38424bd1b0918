//! Table state and reducers.
//!
//! The root reducer routes each action to the state of the table it names;
//! the table reducer computes that table's next snapshot. Neither mutates
//! its input.

mod filters;
mod root;
mod selection;
mod table;

pub use filters::normalize_filters;
pub use root::{reduce_root, RootState};
pub use selection::Selection;
pub use table::{reduce_table, TableState};
