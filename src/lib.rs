//! Terminal client for a staffing back office.
//!
//! - [`records`]: generic card renderer for homogeneous record lists
//! - [`lifecycle`]: call controllers with local and global loading state
//! - [`api`]: REST client and typed records
//! - [`ui`]: the ratatui front end built on both

pub mod api;
pub mod config;
pub mod lifecycle;
pub mod logging;
pub mod records;
pub mod ui;
