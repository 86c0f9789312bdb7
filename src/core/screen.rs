//! Declarative description of a tool window.
//!
//! A [`Screen`] holds everything needed to build one window. It is built
//! from parsed arguments and user config, then handed to
//! [`crate::ui::app::run`] in a single call.

use crate::config;
use crate::config::user::{Config, DialogSizing};
use crate::core::action::Action;
use crate::core::args::{DialogArgs, UpdateScreenArgs};
use crate::core::geometry::{Sizing, WindowGeometry};

const UPDATE_BODY: &str = r#"Hyprland has been updated! 😄

Please check the release notes, which can be found on GitHub, as well as the news page on hypr.land.

Every release may come with breaking changes, so if you get any config errors, try checking the latest release notes.

If you are using plugins, you will need to rebuild them.

<i>You can disable this screen in your Hyprland config.</i>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Body {
    pub text: String,
    /// Render as Pango markup when the text parses as markup.
    pub markup: bool,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub label: String,
    pub action: Action,
}

impl ButtonSpec {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    /// Window title reported to the compositor.
    pub app_title: String,
    /// Window class / Wayland app id.
    pub app_class: String,
    pub title: String,
    pub body: Body,
    /// Buttons in display order.
    pub buttons: Vec<ButtonSpec>,
    pub sizing: Sizing,
}

impl Screen {
    /// The message dialog: every button reports its own label.
    pub fn dialog(args: &DialogArgs, config: &Config) -> Self {
        let sizing = match config.dialog.sizing {
            DialogSizing::Fixed => Sizing::Fixed(WindowGeometry::new(
                config::dialog::FIXED_WIDTH,
                config::dialog::FIXED_HEIGHT,
            )),
            DialogSizing::FitContent => Sizing::FitContent {
                width_em: config::dialog::WIDTH_EM,
            },
        };

        let buttons = args
            .buttons
            .labels()
            .iter()
            .map(|label| ButtonSpec::new(label.clone(), Action::Select(label.clone())))
            .collect();

        Self {
            app_title: args.app_title.clone(),
            app_class: config::dialog::APP_CLASS.to_string(),
            title: args.title.clone(),
            body: Body {
                text: args.body(),
                markup: true,
                align: Align::Start,
            },
            buttons,
            sizing,
        }
    }

    /// The "Hyprland updated" notice with its three fixed actions.
    pub fn update_notice(args: &UpdateScreenArgs, config: &Config) -> Self {
        let urls = &config.update_screen;

        Self {
            app_title: config::update_screen::APP_TITLE.to_string(),
            app_class: config::update_screen::APP_CLASS.to_string(),
            title: format!("Hyprland updated to {}!", args.new_version),
            body: Body {
                text: UPDATE_BODY.to_string(),
                markup: true,
                align: Align::Center,
            },
            buttons: vec![
                ButtonSpec::new(
                    "💝 Support",
                    Action::OpenUrl {
                        url: urls.support_url.clone(),
                        acknowledgement: "💝 Thank you!".to_string(),
                    },
                ),
                ButtonSpec::new(
                    "🔗 Open news",
                    Action::OpenUrl {
                        url: urls.news_url.clone(),
                        acknowledgement: "🔗 Right away!".to_string(),
                    },
                ),
                ButtonSpec::new("Thanks", Action::Dismiss),
            ],
            sizing: Sizing::FontScaled {
                width_em: config::update_screen::WIDTH_EM,
                height_em: config::update_screen::HEIGHT_EM,
            },
        }
    }
}
