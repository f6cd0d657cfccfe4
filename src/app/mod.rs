mod frame;
mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::theme::iced_theme;
use iced::{Size, window};
use showcase_core::Catalog;

/// Helper to launch the app with the loaded catalog.
pub fn run_app(catalog: Catalog, config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        min_size: Some(Size::new(320.0, 480.0)),
        ..window::Settings::default()
    };

    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| iced_theme(app.config.theme))
        .run_with(move || App::bootstrap(catalog, config))
}
