//! Logger setup.
//!
//! Everything goes to stderr; stdout is reserved for the dialog result.
//! GLib and GTK diagnostics are routed through the same logger so they
//! follow `RUST_LOG` and stay quiet by default.

use gtk4::glib;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Target used for messages forwarded from GLib.
pub const TOOLKIT_TARGET: &str = "gtk";

/// Initialize logging. Must run before GTK is initialized.
pub fn init() {
    if let Err(e) = SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
    {
        eprintln!("Failed to initialize logger: {e}");
        return;
    }

    glib::log_set_writer_func(|level, fields| {
        let mut domain = None;
        let mut message = None;
        for field in fields {
            match field.key() {
                "GLIB_DOMAIN" => domain = field.value_str(),
                "MESSAGE" => message = field.value_str(),
                _ => {}
            }
        }

        if let Some(message) = message {
            log::log!(
                target: TOOLKIT_TARGET,
                toolkit_level(level),
                "{}: {}",
                domain.unwrap_or("glib"),
                message
            );
        }

        glib::LogWriterOutput::Handled
    });
}

fn toolkit_level(level: glib::LogLevel) -> log::Level {
    match level {
        glib::LogLevel::Error | glib::LogLevel::Critical => log::Level::Error,
        glib::LogLevel::Warning => log::Level::Warn,
        glib::LogLevel::Message | glib::LogLevel::Info => log::Level::Info,
        glib::LogLevel::Debug => log::Level::Debug,
    }
}
