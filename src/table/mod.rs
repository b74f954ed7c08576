//! # Table Module
//!
//! The state behind the admin table, independent of any terminal.
//!
//! ```text
//!   MemberStore ──▶ Query ──▶ pagination ──▶ TableView
//!        ▲                                      ▲
//!        └────── AdminTable::dispatch ──────────┘
//!              (selection, RowEditor)
//! ```
//!
//! - [`store`] - the owned record set
//! - [`search`] - query compilation and matching
//! - [`pagination`] - page arithmetic
//! - [`editor`] - inline edit state machine
//! - [`state`] - [`AdminTable`] and its transition function
//! - [`view`] - the view model consumed by the renderer

pub mod editor;
pub mod pagination;
pub mod search;
pub mod state;
pub mod store;
pub mod view;

pub use editor::{EditBuffer, EditField, RowEditor};
pub use pagination::{clamp_page, total_pages, visible_slice, PAGE_SIZE};
pub use search::Query;
pub use state::{Action, AdminTable, Outcome};
pub use store::MemberStore;
pub use view::{RowAction, RowCells, RowView, TableView};
