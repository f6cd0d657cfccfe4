mod constants;
mod covers;
mod section;

use crate::config::AppConfig;
use iced::{Task, task};
use showcase_core::{Catalog, ViewportMonitor};

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use covers::CoverState;
pub(in crate::app) use section::SectionState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) catalog: Catalog,
    pub(super) viewport: ViewportMonitor,
    /// Set once the real window size has been seen.
    pub(super) viewport_measured: bool,
    pub(super) section: SectionState,
    pub(super) covers: CoverState,
    pub(super) resize_task: Option<task::Handle>,
    pub(super) mounts: u64,
}

impl App {
    pub(super) fn new(catalog: Catalog, config: AppConfig) -> Self {
        let viewport = ViewportMonitor::new(config.window_width, config.compact_threshold);
        let section = SectionState::mount(
            config.start_section,
            1,
            &catalog,
            viewport.class(),
            &config,
        );
        App {
            config,
            catalog,
            viewport,
            viewport_measured: false,
            section,
            covers: CoverState::default(),
            resize_task: None,
            mounts: 1,
        }
    }

    /// Build the initial state and kick off cover loading for the first page.
    pub fn bootstrap(catalog: Catalog, config: AppConfig) -> (App, Task<Message>) {
        let mut app = App::new(catalog, config);
        let effects = app.cover_effects();
        let task = Task::batch(effects.into_iter().map(|effect| app.run_effect(effect)));
        (app, task)
    }

    /// Frame ticks are only needed while a page is sliding in.
    pub(super) fn animating(&self) -> bool {
        self.section.slide.is_some()
    }

    pub fn title(&self) -> String {
        format!("Showcase - {}", self.section.kind)
    }
}
