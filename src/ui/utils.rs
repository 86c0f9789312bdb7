//! Helpers for querying GTK state.

use crate::core::geometry::FontMetrics;
use gtk4::prelude::*;
use gtk4::{Orientation, Widget};

/// Metrics of the desktop text font from `GtkSettings`.
pub fn current_font_metrics() -> FontMetrics {
    gtk4::Settings::default()
        .and_then(|settings| settings.gtk_font_name())
        .map(|name| FontMetrics::from_font_name(&name))
        .unwrap_or_default()
}

/// Natural height of `widget` when laid out `width` pixels wide.
///
/// The widget must already be inside a window so its style is resolved.
pub fn natural_height(widget: &impl IsA<Widget>, width: i32) -> i32 {
    let (minimum, natural, _, _) = widget.measure(Orientation::Vertical, width);
    natural.max(minimum)
}
