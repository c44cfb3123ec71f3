// SPDX-License-Identifier: MPL-2.0
//! Application root: the page shell plus the diagnostics collector, driven by
//! native events.
//!
//! The host's iced application forwards [`HostEvent`]s from
//! [`App::subscription`] and its own widget messages through
//! [`App::dispatch`], and renders from [`App::page`].

mod subscription;

pub use subscription::{
    create_clock_subscription, create_frame_subscription, create_pointer_subscription,
    create_subscription, HostEvent,
};

use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticsCollector, ErrorEvent, ErrorType, WarningEvent, WarningType};
use crate::error::{Error, Result};
use crate::ui::shell::{self, Effect, PageShell, Ports};
use iced::Subscription;
use std::path::Path;

pub struct App {
    page: PageShell,
    diagnostics: DiagnosticsCollector,
}

impl App {
    /// Mounts the page with an explicit configuration.
    #[must_use]
    pub fn new(ports: Ports, config: &Config) -> Self {
        let diagnostics = DiagnosticsCollector::new(config.buffer_capacity());
        let page = PageShell::mount(ports, config, Some(diagnostics.handle()));
        Self { page, diagnostics }
    }

    /// Mounts the page with the user's saved configuration. An unreadable
    /// settings file is reported and replaced by the defaults.
    #[must_use]
    pub fn with_saved_config(ports: Ports) -> Self {
        match config::load() {
            Ok(config) => Self::new(ports, &config),
            Err(error) => {
                let mut app = Self::new(ports, &Config::default());
                app.diagnostics.handle().log_warning(WarningEvent::new(
                    WarningType::ConfigurationIssue,
                    error.to_string(),
                ));
                app.diagnostics.process_pending();
                app
            }
        }
    }

    /// Handles one native event.
    pub fn update(&mut self, event: HostEvent) -> Vec<Effect> {
        let messages = event.into_messages(&self.page);
        let effects = messages
            .into_iter()
            .flat_map(|message| self.page.update(message))
            .collect();
        self.diagnostics.process_pending();
        effects
    }

    /// Handles one message from the host's widgets.
    pub fn dispatch(&mut self, message: shell::Message) -> Vec<Effect> {
        let effects = self.page.update(message);
        self.diagnostics.process_pending();
        effects
    }

    #[must_use]
    pub fn subscription(&self) -> Subscription<HostEvent> {
        create_subscription(&self.page)
    }

    #[must_use]
    pub fn page(&self) -> &PageShell {
        &self.page
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Writes the diagnostics report as JSON. A failed export is itself
    /// recorded, so a later export can show it.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn export_diagnostics(&mut self, path: &Path) -> Result<()> {
        let result = self.diagnostics.export_to_path(path);
        if let Err(error) = &result {
            let error_type = match error {
                Error::Io(_) => ErrorType::IoError,
                Error::Config(_) | Error::Export(_) => ErrorType::ExportError,
            };
            self.diagnostics
                .handle()
                .log_error(ErrorEvent::new(error_type, error.to_string()));
            self.diagnostics.process_pending();
        }
        result
    }

    /// Unmounts the page, releasing every host resource.
    pub fn shutdown(&mut self) {
        self.page.unmount();
        self.diagnostics.process_pending();
    }
}
