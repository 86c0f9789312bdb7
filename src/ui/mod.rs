//! GTK side: layout composition, window setup and the event loop.

pub mod app;
pub mod layout;
pub mod theme;
pub mod utils;
