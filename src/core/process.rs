//! Fire-and-forget URL opening.

use gtk4::gio;
use log::{info, warn};
use std::ffi::OsStr;

/// Something that can open a URL without blocking the caller.
pub trait UrlOpener {
    fn open(&self, url: &str);
}

/// Opens URLs by spawning an external program with the URL as its only
/// argument. The child is never waited on; GIO reaps it.
#[derive(Debug, Clone)]
pub struct CommandOpener {
    program: String,
}

impl CommandOpener {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl UrlOpener for CommandOpener {
    fn open(&self, url: &str) {
        info!("Opening {} with {}", url, self.program);

        let argv = [OsStr::new(&self.program), OsStr::new(url)];
        if let Err(e) = gio::Subprocess::newv(&argv, gio::SubprocessFlags::NONE) {
            warn!("Failed to run {} for {}: {}", self.program, url, e);
        }
    }
}
