//! What a button does when clicked.
//!
//! [`Action::perform`] runs the display-independent part and tells the UI
//! what to do next through an [`Outcome`].

use crate::core::process::UrlOpener;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Report the label on stdout and end the session.
    Select(String),
    /// Open a URL and keep the window; the button is relabelled to
    /// acknowledge the click.
    OpenUrl { url: String, acknowledgement: String },
    /// End the session without output.
    Dismiss,
}

/// What the UI does after an action ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Close,
    Relabel(String),
}

impl Action {
    pub fn perform<W>(&self, out: &mut W, opener: &dyn UrlOpener) -> io::Result<Outcome>
    where
        W: Write + ?Sized,
    {
        match self {
            Self::Select(label) => {
                writeln!(out, "{label}")?;
                out.flush()?;
                Ok(Outcome::Close)
            }
            Self::OpenUrl {
                url,
                acknowledgement,
            } => {
                opener.open(url);
                Ok(Outcome::Relabel(acknowledgement.clone()))
            }
            Self::Dismiss => Ok(Outcome::Close),
        }
    }
}
