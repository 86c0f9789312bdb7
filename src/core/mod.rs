//! Display-independent logic shared by both tools.

pub mod action;
pub mod args;
pub mod geometry;
pub mod process;
pub mod screen;
pub mod text;
