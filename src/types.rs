//! Core types for table state.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A data row as supplied by the embedding application.
pub type Row = Map<String, Value>;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: PageSize = PageSize::Rows(5);

/// Default page-size options offered to the user.
pub const DEFAULT_PAGE_SIZES: [PageSize; 7] = [
    PageSize::Rows(5),
    PageSize::Rows(10),
    PageSize::Rows(15),
    PageSize::Rows(20),
    PageSize::Rows(50),
    PageSize::Rows(100),
    PageSize::All,
];

/// Wire label of [`PageSize::All`].
pub const PAGE_SIZE_ALL_VALUE: &str = "all";

/// Number of rows shown per page.
///
/// On the wire this is either a plain number or the string `"all"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PageSizeRepr", into = "PageSizeRepr")]
pub enum PageSize {
    Rows(usize),
    All,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PageSizeRepr {
    Rows(usize),
    Label(String),
}

impl From<PageSize> for PageSizeRepr {
    fn from(size: PageSize) -> Self {
        match size {
            PageSize::Rows(n) => PageSizeRepr::Rows(n),
            PageSize::All => PageSizeRepr::Label(PAGE_SIZE_ALL_VALUE.to_string()),
        }
    }
}

impl TryFrom<PageSizeRepr> for PageSize {
    type Error = String;

    fn try_from(repr: PageSizeRepr) -> Result<Self, Self::Error> {
        match repr {
            PageSizeRepr::Rows(n) => Ok(PageSize::Rows(n)),
            PageSizeRepr::Label(label) if label == PAGE_SIZE_ALL_VALUE => Ok(PageSize::All),
            PageSizeRepr::Label(label) => Err(format!("invalid page size: {label:?}")),
        }
    }
}

impl fmt::Debug for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Rows(n) => write!(f, "PageSize({})", n),
            PageSize::All => write!(f, "PageSize(all)"),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Rows(n) => write!(f, "{}", n),
            PageSize::All => f.write_str(PAGE_SIZE_ALL_VALUE),
        }
    }
}

/// Sort direction of the active sort column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Column descriptor supplied by the embedding application.
///
/// Only `key` and `primaryKey` are interpreted here; any other descriptor
/// properties (labels, renderers, widths) are carried through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub key: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub primary_key: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Column {
    /// Create a plain column.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            primary_key: false,
            extra: Map::new(),
        }
    }

    /// Create a column flagged as the primary key.
    pub fn primary(key: impl Into<String>) -> Self {
        Self {
            primary_key: true,
            ..Self::new(key)
        }
    }

    /// Attach an extra descriptor property.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }
}

/// A normalized filter. Filters in a table's list apply conjunctively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Filter {
    /// Free-text search term.
    Text { text: String },

    /// Match rows whose `column` holds `value`.
    Value { column: Column, value: Value },
}

impl Filter {
    pub fn text(text: impl Into<String>) -> Self {
        Filter::Text { text: text.into() }
    }

    pub fn value(column: Column, value: impl Into<Value>) -> Self {
        Filter::Value {
            column,
            value: value.into(),
        }
    }
}

/// A filter value as supplied from outside, before normalization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawFilter {
    Text(String),
    Column { key: String, value: Value },
}

impl RawFilter {
    pub fn column(key: impl Into<String>, value: impl Into<Value>) -> Self {
        RawFilter::Column {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl From<&str> for RawFilter {
    fn from(text: &str) -> Self {
        RawFilter::Text(text.to_string())
    }
}

/// Per-table configuration supplied at initialization.
///
/// Seeds the default page size, page-size options and sort. Unrecognized
/// keys are kept in `extra` so the object survives a reset unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_page_size: Option<PageSize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_page_sizes: Option<Vec<PageSize>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TableConfig {
    pub fn page_size(&self) -> PageSize {
        self.default_page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn page_sizes(&self) -> Vec<PageSize> {
        self.default_page_sizes
            .clone()
            .unwrap_or_else(|| DEFAULT_PAGE_SIZES.to_vec())
    }

    pub fn direction(&self) -> SortDirection {
        self.sort_direction.unwrap_or_default()
    }

    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.default_page_size = Some(size);
        self
    }

    pub fn with_page_sizes(mut self, sizes: Vec<PageSize>) -> Self {
        self.default_page_sizes = Some(sizes);
        self
    }

    pub fn with_sort(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_key = Some(key.into());
        self.sort_direction = Some(direction);
        self
    }
}
