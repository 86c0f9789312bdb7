//! Builds the widget tree shared by both tools.
//!
//! ```text
//! root (vertical, background)
//! ├── inner column (85% wide, centered, grows)
//! │   ├── title
//! │   ├── horizontal rule
//! │   └── body
//! └── button row: [spacer ───────] [button] [button] ...
//! ```

use crate::config;
use crate::core::geometry::inner_width;
use crate::core::screen::{Align, Body, Screen};
use gtk4::prelude::*;
use gtk4::{pango, Align as GtkAlign, Box as GtkBox, Button, Justification, Label, Orientation};
use log::debug;

/// Widgets the caller still needs after composition.
pub struct ComposedLayout {
    pub root: GtkBox,
    /// One per [`Screen::buttons`] entry, same order.
    pub buttons: Vec<Button>,
}

/// Compose the layout for a window `width` pixels wide.
pub fn compose(screen: &Screen, width: i32) -> ComposedLayout {
    let column_width = inner_width(width);

    let root = GtkBox::new(Orientation::Vertical, 0);
    root.add_css_class("background");
    root.add_css_class("guiutils-root");
    root.set_margin_top(config::layout::MARGIN);
    root.set_margin_bottom(config::layout::MARGIN);
    root.set_margin_start(config::layout::MARGIN);
    root.set_margin_end(config::layout::MARGIN);

    let inner = GtkBox::new(Orientation::Vertical, 0);
    inner.set_halign(GtkAlign::Center);
    inner.set_vexpand(true);
    inner.set_size_request(column_width, -1);

    let title = Label::new(None);
    set_label_content(&title, &screen.title, true);
    title.add_css_class("title-2");
    title.add_css_class("guiutils-title");
    title.set_wrap(true);
    title.set_wrap_mode(pango::WrapMode::WordChar);
    inner.append(&title);

    let rule = gtk4::Separator::new(Orientation::Horizontal);
    rule.add_css_class("guiutils-hr");
    rule.set_halign(GtkAlign::Center);
    rule.set_size_request(
        (f64::from(column_width) * config::layout::RULE_WIDTH_FRACTION).round() as i32,
        -1,
    );
    inner.append(&rule);

    inner.append(&body_label(&screen.body, column_width));
    root.append(&inner);

    let row = GtkBox::new(Orientation::Horizontal, config::layout::BUTTON_GAP);
    row.add_css_class("guiutils-buttons");

    let spacer = GtkBox::new(Orientation::Horizontal, 0);
    spacer.set_hexpand(true);
    row.append(&spacer);

    let buttons: Vec<Button> = screen
        .buttons
        .iter()
        .map(|spec| {
            let button = Button::with_label(&spec.label);
            row.append(&button);
            button
        })
        .collect();
    root.append(&row);

    ComposedLayout { root, buttons }
}

fn body_label(body: &Body, column_width: i32) -> Label {
    let label = Label::new(None);
    label.add_css_class("guiutils-body");
    label.set_wrap(true);
    label.set_wrap_mode(pango::WrapMode::WordChar);
    label.set_size_request(column_width, -1);

    set_label_content(&label, &body.text, body.markup);

    match body.align {
        Align::Start => {
            label.set_xalign(0.0);
            label.set_justify(Justification::Left);
        }
        Align::Center => {
            label.set_xalign(0.5);
            label.set_justify(Justification::Center);
        }
    }

    label
}

/// Show `text` as Pango markup when `markup` is set and it parses,
/// otherwise literally.
fn set_label_content(label: &Label, text: &str, markup: bool) {
    if markup && pango::parse_markup(text, '\0').is_ok() {
        label.set_markup(text);
    } else {
        if markup {
            debug!("Not valid markup, showing as plain text: {:?}", text);
        }
        label.set_text(text);
    }
}
