//! # UI Module
//!
//! This module provides the terminal user interface for Roster.
//!
//! ## Components
//!
//! - [`App`] - Application state (row cursor, input modes, theme, status line)
//! - [`mod@input`] - Key handling
//! - [`mod@render`] - Rendering functions for drawing the TUI
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  ROSTER  42 members                             │
//! ├─────────────────────────────────────────────────┤
//! │ 🔍 search text                                  │
//! ├─────────────────────────────────────────────────┤
//! │ [ ] Name        Email          Role  Edit  Del  │
//! │ [x] Aaron       aaron@...      admin ✎ edit 🗑  │
//! │ ...                                             │
//! ├─────────────────────────────────────────────────┤
//! │            « 1 [2] 3 … 5 »                      │
//! │ [D] Delete Selected (1)   Saved member 3        │
//! │ key hints                                       │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod input;
pub mod render;
pub mod theme;

pub use app::App;
pub use input::handle_key;
pub use render::render;
