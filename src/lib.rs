//! Small GTK utilities for Hyprland: a message dialog that reports the
//! chosen button, and the "Hyprland updated" notification screen.

pub mod config;
pub mod core;
pub mod logging;
pub mod ui;
