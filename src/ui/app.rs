//! Application setup and the event loop.

use crate::core::action::{Action, Outcome};
use crate::core::geometry::WindowGeometry;
use crate::core::process::UrlOpener;
use crate::core::screen::Screen;
use crate::ui::layout::{self, ComposedLayout};
use crate::ui::{theme, utils};
use adw::prelude::*;
use adw::Application;
use gtk4::glib::{self, WeakRef};
use gtk4::{gio, ApplicationWindow, Button};
use log::{error, info};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Where the label of a selected button is written.
pub type Output = Rc<RefCell<dyn Write>>;

/// The window of a running session and its buttons, in display order.
#[derive(Clone)]
struct SessionWindow {
    window: ApplicationWindow,
    buttons: Vec<Button>,
}

/// Show `screen` and block until its window closes.
pub fn run(screen: Screen, opener: Rc<dyn UrlOpener>) -> glib::ExitCode {
    // The program name becomes the Wayland app id / X11 class since the
    // application itself has no id.
    glib::set_prgname(Some(screen.app_class.as_str()));
    glib::set_application_name(&screen.app_title);

    let output: Output = Rc::new(RefCell::new(std::io::stdout()));
    let app = new_application();
    start_session(&app, screen, opener, output, |_| {});

    // Flags were already consumed by the argument parser.
    app.run_with_args::<&str>(&[])
}

fn new_application() -> Application {
    Application::builder()
        .flags(gio::ApplicationFlags::NON_UNIQUE)
        .build()
}

fn start_session<F>(
    app: &Application,
    screen: Screen,
    opener: Rc<dyn UrlOpener>,
    output: Output,
    on_ready: F,
) where
    F: Fn(&SessionWindow) + 'static,
{
    app.connect_activate(move |app| {
        info!("Building {} window", screen.app_class);
        theme::setup();
        let session = build_window(app, &screen, Rc::clone(&opener), Rc::clone(&output));
        session.window.present();
        info!("Window shown with {} button(s)", session.buttons.len());
        on_ready(&session);
    });
}

fn build_window(
    app: &Application,
    screen: &Screen,
    opener: Rc<dyn UrlOpener>,
    output: Output,
) -> SessionWindow {
    let font = utils::current_font_metrics();
    let width = screen.sizing.width(font);
    let ComposedLayout { root, buttons } = layout::compose(screen, width);

    let window = ApplicationWindow::builder()
        .application(app)
        .title(screen.app_title.as_str())
        .resizable(false)
        .build();
    window.set_child(Some(&root));

    // Attached but not yet shown: measuring now avoids a visible resize.
    let geometry = screen
        .sizing
        .resolve(font, |width| utils::natural_height(&root, width));
    apply_geometry(&window, geometry);
    info!(
        "Window size {}x{} (font {}pt)",
        geometry.width, geometry.height, font.point_size
    );

    for (button, spec) in buttons.iter().zip(&screen.buttons) {
        bind_action(
            button,
            spec.action.clone(),
            &window,
            Rc::clone(&opener),
            Rc::clone(&output),
        );
    }

    // Every way of ending the session ends up here, including the window
    // manager close button.
    window.connect_close_request(|window| {
        info!("Window closed");
        if let Some(app) = window.application() {
            app.quit();
        }
        glib::Propagation::Proceed
    });

    SessionWindow { window, buttons }
}

fn apply_geometry(window: &ApplicationWindow, geometry: WindowGeometry) {
    window.set_default_size(geometry.width, geometry.height);
    window.set_size_request(geometry.width, geometry.height);
}

fn bind_action(
    button: &Button,
    action: Action,
    window: &ApplicationWindow,
    opener: Rc<dyn UrlOpener>,
    output: Output,
) {
    let window: WeakRef<ApplicationWindow> = window.downgrade();

    button.connect_clicked(move |button| {
        info!("Button clicked: {:?}", action);

        let result = action.perform(&mut *output.borrow_mut(), opener.as_ref());
        let outcome = result.unwrap_or_else(|e| {
            error!("Failed to write selection to stdout: {}", e);
            Outcome::Close
        });

        match outcome {
            Outcome::Close => {
                if let Some(window) = window.upgrade() {
                    window.close();
                }
            }
            Outcome::Relabel(label) => button.set_label(&label),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::user::Config;
    use crate::core::args::{DialogArgs, UpdateScreenArgs};
    use gtk4::{Label, Widget};
    use std::cell::Cell;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
    }

    impl UrlOpener for RecordingOpener {
        fn open(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }
    }

    struct SessionResult {
        code: glib::ExitCode,
        output: Vec<u8>,
        timed_out: bool,
        session: Option<SessionWindow>,
    }

    fn dialog_screen(text: &str, buttons: &str) -> Screen {
        let args = DialogArgs::parse_args([
            "hyprland-dialog",
            "--title",
            "Title",
            "--text",
            text,
            "--buttons",
            buttons,
        ])
        .unwrap();
        Screen::dialog(&args, &Config::default())
    }

    /// Run a full session, calling `act` once the window is up.
    fn run_session(
        screen: Screen,
        opener: Rc<dyn UrlOpener>,
        act: fn(&SessionWindow),
    ) -> SessionResult {
        let buffer = Rc::new(RefCell::new(Vec::<u8>::new()));
        let output: Output = buffer.clone();
        let built = Rc::new(RefCell::new(None::<SessionWindow>));
        let timed_out = Rc::new(Cell::new(false));

        let app = new_application();
        {
            let built = Rc::clone(&built);
            start_session(&app, screen, opener, output, move |session| {
                *built.borrow_mut() = Some(session.clone());
                let session = session.clone();
                glib::idle_add_local_once(move || act(&session));
            });
        }
        {
            let timed_out = Rc::clone(&timed_out);
            let app = app.downgrade();
            glib::timeout_add_local_once(Duration::from_secs(10), move || {
                timed_out.set(true);
                if let Some(app) = app.upgrade() {
                    app.quit();
                }
            });
        }

        let code = app.run_with_args::<&str>(&[]);
        let output = buffer.borrow().clone();
        let session = built.borrow_mut().take();
        SessionResult {
            code,
            output,
            timed_out: timed_out.get(),
            session,
        }
    }

    fn check_compose_order() {
        let screen = dialog_screen("body", "One;Two;Three");
        let ComposedLayout { root, buttons } = layout::compose(&screen, 550);

        let labels: Vec<String> = buttons
            .iter()
            .map(|b| b.label().map(|l| l.to_string()).unwrap_or_default())
            .collect();
        assert_eq!(labels, ["One", "Two", "Three"]);

        let row = root.last_child().expect("button row");
        let spacer = row.first_child().expect("leading spacer");
        assert!(!spacer.is::<Button>());
        assert!(spacer.hexpands());

        let mut child = spacer.next_sibling();
        for button in &buttons {
            let widget = child.expect("button in row");
            assert_eq!(&widget, button.upcast_ref::<Widget>());
            child = widget.next_sibling();
        }
        assert!(child.is_none());
    }

    fn check_markup_fallback() {
        let mut screen = dialog_screen("a & b <i>", "OK");
        screen.title = "<b>Bold</b>".to_string();
        let root = layout::compose(&screen, 550).root;

        let inner = root.first_child().expect("inner column");
        let title = inner.first_child().and_downcast::<Label>().expect("title");
        assert_eq!(title.text().as_str(), "Bold");

        let body = title
            .next_sibling()
            .and_then(|rule| rule.next_sibling())
            .and_downcast::<Label>()
            .expect("body");
        assert_eq!(body.text().as_str(), "a & b <i>");
    }

    fn measured_height(lines: usize, width: i32) -> i32 {
        let text = vec!["A line of body text"; lines].join("\n");
        let root = layout::compose(&dialog_screen(&text, "OK"), width).root;
        let window = gtk4::Window::new();
        window.set_child(Some(&root));
        let height = utils::natural_height(&root, width);
        window.destroy();
        height
    }

    fn check_height_grows_with_body() {
        let width = 550;
        let heights: Vec<i32> = [1, 5, 20]
            .iter()
            .map(|&lines| measured_height(lines, width))
            .collect();

        assert_eq!(measured_height(5, width), heights[1]);
        assert!(heights.windows(2).all(|pair| pair[0] <= pair[1]), "{heights:?}");
        assert!(heights[0] < heights[2], "{heights:?}");
    }

    fn check_select_prints_and_quits() {
        let result = run_session(
            dialog_screen("Pick one", "OK;Cancel"),
            Rc::new(RecordingOpener::default()),
            |session| session.buttons[0].emit_clicked(),
        );

        assert!(!result.timed_out);
        assert_eq!(result.code, glib::ExitCode::SUCCESS);
        assert_eq!(result.output, b"OK\n");
    }

    fn check_window_close_is_silent() {
        let result = run_session(
            dialog_screen("Pick one", "OK;Cancel"),
            Rc::new(RecordingOpener::default()),
            |session| session.window.close(),
        );

        assert!(!result.timed_out);
        assert_eq!(result.code, glib::ExitCode::SUCCESS);
        assert!(result.output.is_empty());
    }

    fn check_update_screen_actions() {
        let opener = Rc::new(RecordingOpener::default());
        let args = UpdateScreenArgs {
            new_version: "0.52.0".to_string(),
        };
        let result = run_session(
            Screen::update_notice(&args, &Config::default()),
            opener.clone(),
            |session| {
                session.buttons[0].emit_clicked();
                session.buttons[2].emit_clicked();
            },
        );

        assert!(!result.timed_out);
        assert_eq!(result.code, glib::ExitCode::SUCCESS);
        assert!(result.output.is_empty());
        assert_eq!(*opener.opened.borrow(), ["https://hypr.land/support"]);

        let session = result.session.expect("window was built");
        assert_eq!(session.buttons[0].label().as_deref(), Some("💝 Thank you!"));
    }

    // GTK may only be used from the thread that initialized it, so every
    // widget check runs inside this one test.
    #[test]
    fn test_widgets_and_sessions() {
        if gtk4::init().is_err() {
            eprintln!("No display available, skipping GTK checks");
            return;
        }

        check_compose_order();
        check_markup_fallback();
        check_height_grows_with_body();
        check_select_prints_and_quits();
        check_window_close_is_silent();
        check_update_screen_actions();
    }
}
