//! Bundled resources and styling.

use crate::config;
use anyhow::{Context, Result};
use gtk4::gio;
use log::{info, warn};

/// Register bundled resources and load the stylesheet for the default
/// display. Failures leave the window with the stock theme.
pub fn setup() {
    if let Err(e) = register_resources() {
        warn!("{e:#}");
        return;
    }

    let Some(display) = gtk4::gdk::Display::default() else {
        warn!("No default display found - UI styling may not work properly");
        return;
    };

    let css_provider = gtk4::CssProvider::new();
    css_provider.load_from_resource(config::resources::CSS);
    gtk4::style_context_add_provider_for_display(
        &display,
        &css_provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
    info!("Stylesheet loaded");
}

fn register_resources() -> Result<()> {
    gio::resources_register_include!("hyprland-guiutils.gresource")
        .context("Failed to register bundled resources")
}
