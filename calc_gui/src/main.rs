//! # ConCrete Calculator GUI
//!
//! Graphical front-end for the concrete estimator.
//! Built with Iced for desktop (Windows, macOS, Linux) and the browser (WASM).
//!
//! The window is a single form: three dimension inputs with Calculate and
//! Clear on the left, results on the right. All form behaviour lives in
//! [`calc_core::form::EstimateForm`]; this crate only wires messages to it.

mod ui;

use iced::widget::{column, row};
use iced::{Element, Length, Size, Theme};

use calc_core::calculations::DimensionField;
use calc_core::settings::Settings;
use calc_core::EstimateForm;

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// A dimension input was edited
    DimensionChanged(DimensionField, String),
    /// Calculate pressed (or Enter in an input)
    Calculate,
    /// Clear pressed
    Clear,
    /// Light/dark theme toggle
    ToggleDarkMode,
}

/// Application state
pub struct App {
    pub form: EstimateForm,
    pub dark_mode: bool,
    pub status: String,
    settings: Settings,
    #[cfg(not(target_arch = "wasm32"))]
    settings_path: Option<PathBuf>,
}

impl App {
    /// Fresh window using the given preferences
    pub fn with_settings(settings: Settings) -> Self {
        App {
            form: EstimateForm::new(),
            dark_mode: settings.appearance.dark_mode,
            status: "Ready".to_string(),
            settings,
            #[cfg(not(target_arch = "wasm32"))]
            settings_path: None,
        }
    }

    pub fn title(&self) -> String {
        "ConCrete Calculator - Construction Material Estimator".to_string()
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::DimensionChanged(field, text) => {
                self.form.set_field(field, text);
            }
            Message::Calculate => {
                // Rejected input is dropped without touching the results or status
                if self.form.calculate().is_some() {
                    self.status = "Estimate updated".to_string();
                }
            }
            Message::Clear => {
                self.form.clear();
                self.status = "Cleared".to_string();
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                self.settings.appearance.dark_mode = self.dark_mode;
                self.persist_settings();
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header(&self.title(), self.dark_mode);

        let panels = row![
            ui::input_panel::view_input_panel(&self.form),
            ui::results_panel::view_results_panel(self.form.result()),
        ]
        .spacing(15)
        .height(Length::Fill);

        let status_bar = ui::status_bar::view_status_bar(&self.status);

        column![header, panels, status_bar]
            .spacing(10)
            .padding(15)
            .into()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn persist_settings(&mut self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        match calc_core::save_settings(&self.settings, path) {
            Ok(()) => tracing::debug!(path = %path.display(), "theme preference saved"),
            Err(e) => {
                tracing::warn!("could not save settings: {}", e);
                self.status = format!("Could not save settings: {}", e);
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn persist_settings(&mut self) {}
}

#[cfg(not(target_arch = "wasm32"))]
fn boot_app() -> App {
    let path = PathBuf::from(calc_core::settings::DEFAULT_SETTINGS_FILE);
    let (settings, status) = match calc_core::load_settings_or_default(&path) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(format!("Using default settings: {}", e))),
    };

    calc_core::logging::init_logger(false, &settings.logging.filter);
    if let Some(message) = &status {
        tracing::warn!("{}", message);
    }

    let mut app = App::with_settings(settings);
    app.settings_path = Some(path);
    if let Some(message) = status {
        app.status = message;
    }
    app
}

#[cfg(target_arch = "wasm32")]
fn boot_app() -> App {
    console_error_panic_hook::set_once();
    App::with_settings(Settings::default())
}

pub fn main() -> iced::Result {
    iced::application(boot_app, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(Size::new(900.0, 560.0))
        .run()
}
