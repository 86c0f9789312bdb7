//! Application-wide constants and user configuration.

pub mod user;

/// GResource paths.
pub mod resources {
    pub const CSS: &str = "/org/hyprland/guiutils/style.css";
}

/// Message dialog defaults.
pub mod dialog {
    /// Window class / Wayland app id.
    pub const APP_CLASS: &str = "hyprland-dialog";
    /// Fixed window size used when content-driven sizing is disabled.
    pub const FIXED_WIDTH: i32 = 480;
    pub const FIXED_HEIGHT: i32 = 180;
    /// Window width in multiples of the font point size.
    pub const WIDTH_EM: f64 = 50.0;
}

/// Update notification screen defaults.
pub mod update_screen {
    pub const APP_CLASS: &str = "hyprland-donate-screen";
    pub const APP_TITLE: &str = "Hyprland Updated";
    pub const SUPPORT_URL: &str = "https://hypr.land/support";
    pub const NEWS_URL: &str = "https://hypr.land/news";
    pub const WIDTH_EM: f64 = 90.0;
    pub const HEIGHT_EM: f64 = 30.0;
}

/// Layout proportions shared by both windows.
pub mod layout {
    /// Outer margin around the whole layout.
    pub const MARGIN: i32 = 3;
    /// Inner column width as a fraction of the window width.
    pub const INNER_WIDTH_FRACTION: f64 = 0.85;
    /// Separator width as a fraction of the inner column.
    pub const RULE_WIDTH_FRACTION: f64 = 0.5;
    /// Gap between buttons in the button row.
    pub const BUTTON_GAP: i32 = 3;
    /// Extra height added on top of the measured content.
    pub const CONTENT_PADDING: i32 = 50;
    /// Point size assumed when the desktop font has none.
    pub const DEFAULT_FONT_PT: f64 = 11.0;
}

/// Program used to open URLs unless configured otherwise.
pub const DEFAULT_URL_OPENER: &str = "xdg-open";
