//! Command-line arguments of both tools.
//!
//! Every flag takes exactly one value, which is taken verbatim even when it
//! starts with a dash. A flag given twice keeps its last value. Clap errors
//! are folded into [`ArgsError`] so callers print one line and exit 1.

use crate::core::text;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

/// Arguments of `hyprland-dialog`.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "hyprland-dialog",
    version,
    about = "Show a message with buttons and print the chosen label",
    args_override_self = true
)]
pub struct DialogArgs {
    /// Heading shown above the separator
    #[arg(long, value_name = "TEXT", default_value = "", allow_hyphen_values = true)]
    pub title: String,

    /// Window title reported to the compositor
    #[arg(
        long = "apptitle",
        value_name = "TEXT",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub app_title: String,

    /// Body text; `<br/>` and `\n` become line breaks
    #[arg(long, value_name = "TEXT", default_value = "", allow_hyphen_values = true)]
    pub text: String,

    /// Button labels separated by `;`, in display order
    #[arg(
        long,
        value_name = "LABELS",
        default_value = "",
        allow_hyphen_values = true,
        value_parser = parse_button_list
    )]
    pub buttons: ButtonList,
}

impl DialogArgs {
    /// Parse from the process arguments.
    pub fn from_env() -> Result<Self, ArgsError> {
        Self::parse_args(std::env::args_os())
    }

    /// Parse from an argument vector whose first element is the program name.
    pub fn parse_args<I, T>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        parse(args)
    }

    /// Body text with line break escapes resolved.
    pub fn body(&self) -> String {
        text::normalize_newlines(&self.text)
    }
}

/// Arguments of `hyprland-update-screen`.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "hyprland-update-screen",
    version,
    about = "Tell the user Hyprland was updated",
    args_override_self = true
)]
pub struct UpdateScreenArgs {
    /// Version Hyprland was updated to
    #[arg(long, value_name = "VERSION", default_value = "", allow_hyphen_values = true)]
    pub new_version: String,
}

impl UpdateScreenArgs {
    pub fn from_env() -> Result<Self, ArgsError> {
        Self::parse_args(std::env::args_os())
    }

    pub fn parse_args<I, T>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        parse(args)
    }
}

/// Ordered button labels; order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonList(pub Vec<String>);

impl ButtonList {
    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn parse<C, I, T>(args: I) -> Result<C, ArgsError>
where
    C: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    reject_end_of_options::<C>(&args)?;
    C::try_parse_from(args).map_err(ArgsError::from)
}

/// Clap reads a bare `--` as the end of options, but neither tool takes
/// positionals, so it is an invalid argument unless it is a flag's value.
fn reject_end_of_options<C: CommandFactory>(args: &[OsString]) -> Result<(), ArgsError> {
    let command = C::command();
    let value_flags: Vec<String> = command
        .get_arguments()
        .filter(|arg| arg.get_action().takes_values())
        .filter_map(|arg| arg.get_long().map(|long| format!("--{long}")))
        .collect();

    let mut tokens = args.iter().skip(1);
    while let Some(token) = tokens.next() {
        if token == "--" {
            return Err(ArgsError::InvalidArg("--".to_string()));
        }
        if value_flags.iter().any(|flag| token == flag.as_str()) {
            tokens.next();
        }
    }

    Ok(())
}

fn parse_button_list(raw: &str) -> Result<ButtonList, std::convert::Infallible> {
    Ok(ButtonList(text::split_buttons(raw)))
}

#[derive(Debug)]
pub enum ArgsError {
    /// A flag was the last argument and has no value.
    MissingValue(String),
    /// A token that is not a known flag.
    InvalidArg(String),
    /// `--help` or `--version` was requested.
    Display(clap::Error),
    Other(clap::Error),
}

impl ArgsError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Display(_) => 0,
            _ => 1,
        }
    }

    /// Print the error the way the tools report it: help and version go to
    /// stdout, everything else is one line on stderr.
    pub fn report(&self) {
        match self {
            Self::Display(e) => {
                if let Err(io) = e.print() {
                    log::error!("Failed to print usage: {io}");
                }
            }
            other => eprintln!("{other}"),
        }
    }
}

impl From<clap::Error> for ArgsError {
    fn from(err: clap::Error) -> Self {
        match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => Self::Display(err),
            ErrorKind::InvalidValue | ErrorKind::TooFewValues | ErrorKind::WrongNumberOfValues => {
                match invalid_arg(&err) {
                    Some(arg) => Self::MissingValue(flag_name(&arg)),
                    None => Self::Other(err),
                }
            }
            ErrorKind::UnknownArgument => match invalid_arg(&err) {
                Some(arg) => Self::InvalidArg(arg),
                None => Self::Other(err),
            },
            _ => Self::Other(err),
        }
    }
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingValue(flag) => write!(f, "{flag} requires a parameter"),
            Self::InvalidArg(token) => write!(f, "invalid arg {token}"),
            Self::Display(e) | Self::Other(e) => write!(f, "{}", e.to_string().trim_end()),
        }
    }
}

impl std::error::Error for ArgsError {}

fn invalid_arg(err: &clap::Error) -> Option<String> {
    match err.get(ContextKind::InvalidArg)? {
        ContextValue::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Clap renders options as `--title <TEXT>`; keep only the flag itself.
fn flag_name(rendered: &str) -> String {
    rendered
        .split([' ', '='])
        .next()
        .unwrap_or(rendered)
        .to_string()
}
