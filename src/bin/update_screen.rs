//! `hyprland-update-screen`: tell the user Hyprland was updated and offer
//! links to the release news and the support page.

use gtk4::glib;
use hyprland_guiutils::config::user::Config;
use hyprland_guiutils::core::args::UpdateScreenArgs;
use hyprland_guiutils::core::process::CommandOpener;
use hyprland_guiutils::core::screen::Screen;
use hyprland_guiutils::{logging, ui};
use log::info;
use std::rc::Rc;

fn main() -> glib::ExitCode {
    logging::init();

    let args = match UpdateScreenArgs::from_env() {
        Ok(args) => args,
        Err(e) => {
            e.report();
            return match e.exit_code() {
                0 => glib::ExitCode::SUCCESS,
                _ => glib::ExitCode::FAILURE,
            };
        }
    };

    let config = Config::load();
    info!("Showing update screen for version {:?}", args.new_version);

    let opener = Rc::new(CommandOpener::new(config.general.url_opener.clone()));
    ui::app::run(Screen::update_notice(&args, &config), opener)
}
