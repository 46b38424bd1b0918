//! Row selection with positive and negative modes.

use crate::types::Row;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which rows are selected.
///
/// In `Only` mode the keys are the selected rows. In `AllExcept` mode every
/// row is selected except the listed keys. Keys never repeat.
///
/// Serialized flat as `selectAll` / `userSelection`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "SelectionRepr", into = "SelectionRepr")]
pub enum Selection {
    Only(Vec<Value>),
    AllExcept(Vec<Value>),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Only(Vec::new())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SelectionRepr {
    #[serde(default)]
    select_all: bool,
    #[serde(default)]
    user_selection: Vec<Value>,
}

impl From<SelectionRepr> for Selection {
    fn from(repr: SelectionRepr) -> Self {
        if repr.select_all {
            Selection::AllExcept(repr.user_selection)
        } else {
            Selection::Only(repr.user_selection)
        }
    }
}

impl From<Selection> for SelectionRepr {
    fn from(selection: Selection) -> Self {
        let select_all = selection.select_all();
        let user_selection = match selection {
            Selection::Only(keys) | Selection::AllExcept(keys) => keys,
        };
        SelectionRepr {
            select_all,
            user_selection,
        }
    }
}

impl Selection {
    /// Whether the selection is in "all rows" mode.
    pub fn select_all(&self) -> bool {
        matches!(self, Selection::AllExcept(_))
    }

    /// The user-picked keys: selections in `Only` mode, exceptions in `AllExcept` mode.
    pub fn keys(&self) -> &[Value] {
        match self {
            Selection::Only(keys) | Selection::AllExcept(keys) => keys,
        }
    }

    /// Resolve whether the row with primary-key value `key` is selected.
    pub fn is_selected(&self, key: &Value) -> bool {
        match self {
            Selection::Only(keys) => keys.contains(key),
            Selection::AllExcept(keys) => !keys.contains(key),
        }
    }

    /// Resolve whether `row` is selected, reading its `primary_key` field.
    pub fn is_row_selected(&self, row: &Row, primary_key: &str) -> bool {
        self.is_selected(row.get(primary_key).unwrap_or(&Value::Null))
    }

    /// Flip membership of `key`, keeping the mode.
    ///
    /// An existing key is removed with the remaining order preserved; a new
    /// key is appended.
    pub fn toggled_key(&self, key: Value) -> Self {
        let mut keys = self.keys().to_vec();
        match keys.iter().position(|k| *k == key) {
            Some(idx) => {
                keys.remove(idx);
            }
            None => keys.push(key),
        }
        self.with_keys(keys)
    }

    /// Switch mode and drop all picked keys.
    pub fn toggled_mode(&self) -> Self {
        match self {
            Selection::Only(_) => Selection::AllExcept(Vec::new()),
            Selection::AllExcept(_) => Selection::Only(Vec::new()),
        }
    }

    fn with_keys(&self, keys: Vec<Value>) -> Self {
        match self {
            Selection::Only(_) => Selection::Only(keys),
            Selection::AllExcept(_) => Selection::AllExcept(keys),
        }
    }
}
