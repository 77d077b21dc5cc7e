//! # Tudo - a simple todo list manager
//!
//! A command-line todo list manager backed by a local SQLite file,
//! with milestones, teams, due dates and a trash bin.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, tag and duplicate tasks
//! - **Flags**: Independent done / urgent / archived markers
//! - **Due Dates**: Tasks turn urgent when their due date arrives
//! - **Trash Bin**: Archiving is a soft delete, nothing is ever lost
//! - **Palettes**: Team and milestone colors stored in the database
//! - **CSV Interchange**: Semicolon-delimited export and import
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudo::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
