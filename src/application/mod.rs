//! Application layer: menu rendering, selection dispatch, and services
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod menu;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use menu::{
    render, render_root, Callbacks, LeafEntry, MenuHost, MenuItem, MenuLevel, Selection,
    SelectionHandler, Submenu,
};
