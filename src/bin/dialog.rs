//! `hyprland-dialog`: show a message and print the label of the button the
//! user picked. Closing the window prints nothing.

use gtk4::glib;
use hyprland_guiutils::config::user::Config;
use hyprland_guiutils::core::args::DialogArgs;
use hyprland_guiutils::core::process::CommandOpener;
use hyprland_guiutils::core::screen::Screen;
use hyprland_guiutils::{logging, ui};
use log::info;
use std::rc::Rc;

fn main() -> glib::ExitCode {
    logging::init();

    let args = match DialogArgs::from_env() {
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
    info!("Starting dialog with {} button(s)", args.buttons.labels().len());

    let opener = Rc::new(CommandOpener::new(config.general.url_opener.clone()));
    ui::app::run(Screen::dialog(&args, &config), opener)
}
