// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen};
use crate::config;
use crate::ui::outline;
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::theming::AppTheme;
use iced::Task;

/// Processes one top-level message, forwarding component messages and
/// applying the events they emit.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Outline(message) => match outline::update(&mut app.outline, message) {
            outline::Event::None => {}
            outline::Event::OpenSettings => app.screen = Screen::Settings,
        },
        Message::Settings(message) => handle_settings_event(app, settings::update(message)),
        Message::DismissWarning => app.warning = None,
    }
    Task::none()
}

fn handle_settings_event(app: &mut App, event: SettingsEvent) {
    match event {
        SettingsEvent::BackToOutline => app.screen = Screen::Outline,
        SettingsEvent::LanguageSelected(locale) => {
            app.i18n.set_locale(locale.clone());
            app.config.general.language = Some(locale.to_string());
            persist_config(app);
        }
        SettingsEvent::ThemeModeSelected(mode) => {
            app.config.general.theme_mode = mode;
            app.theme = AppTheme::new(mode);
            persist_config(app);
        }
        SettingsEvent::ActivationDistanceChanged(value) => {
            app.config.interaction.activation_distance = Some(value);
            app.outline
                .set_activation_distance(app.config.activation_distance());
            persist_config(app);
        }
        SettingsEvent::IndentWidthChanged(value) => {
            app.config.interaction.indent_width = Some(value);
            persist_config(app);
        }
    }
}

/// Saves the configuration, surfacing failures in the warning banner.
fn persist_config(app: &mut App) {
    if config::save(&app.config).is_err() {
        app.warning = Some("notification-config-save-error".to_string());
    }
}
