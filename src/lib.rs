//! Roster - a terminal admin table for member lists
//!
//! This library provides the member data source, the table state machine
//! (search, pagination, selection and inline editing), and the TUI on top.

pub mod member;
pub mod table;
pub mod ui;
