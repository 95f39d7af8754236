//! Tabular data presentation engine
//!
//! Takes a caller-supplied list of rows and column descriptors and derives
//! what a table shows: search filtering, single-column sorting, row
//! selection, local or caller-driven pagination and expandable detail rows.
//! Rendering is left to the caller through [`view::TableView`]; a plain-text
//! renderer lives in [`text`].

pub mod cell;
pub mod column;
pub mod compare;
pub mod config;
pub mod error;
pub mod events;
pub mod expansion;
pub mod filter;
pub mod json;
pub mod new_rows;
pub mod pagination;
pub mod row;
pub mod selection;
pub mod sort;
pub mod table;
pub mod text;
pub mod view;

pub use error::{Result, TableError};
pub use table::Table;

pub mod prelude {
    pub use crate::cell::{Cell, CustomCell};
    pub use crate::column::{Alignment, Column, ColumnWidth, SortType};
    pub use crate::config::TableOptions;
    pub use crate::error::{Result, TableError};
    pub use crate::events::{Callbacks, EventResult};
    pub use crate::new_rows::{NewRowPicker, PickOption};
    pub use crate::pagination::{ClampPolicy, PageDescriptor, PageTarget, Pagination};
    pub use crate::row::{Row, RowId};
    pub use crate::selection::SelectionMode;
    pub use crate::sort::{SortDirection, SortState};
    pub use crate::table::Table;
    pub use crate::view::TableView;
}
