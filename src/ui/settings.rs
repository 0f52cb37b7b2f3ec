// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language, theme, and drag interaction tuning.
//!
//! The screen is stateless; values are read from the live configuration and
//! every change is propagated to the application as an [`Event`], which
//! applies and persists it.

use crate::config::{
    Config, MAX_ACTIVATION_DISTANCE, MAX_INDENT_WIDTH, MIN_ACTIVATION_DISTANCE, MIN_INDENT_WIDTH,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, slider, Button, Column, Row, Text};
use iced::{alignment::Horizontal, Element, Length};
use unic_langid::LanguageIdentifier;

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToOutline,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    ActivationDistanceChanged(f32),
    IndentWidthChanged(f32),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    BackToOutline,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    ActivationDistanceChanged(f32),
    IndentWidthChanged(f32),
}

/// Maps a settings message to the event the application applies.
pub fn update(message: Message) -> Event {
    match message {
        Message::BackToOutline => Event::BackToOutline,
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::ThemeModeSelected(mode) => Event::ThemeModeSelected(mode),
        Message::ActivationDistanceChanged(value) => Event::ActivationDistanceChanged(value),
        Message::IndentWidthChanged(value) => Event::IndentWidthChanged(value),
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
}

/// Renders the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back_button = button(
        Text::new(format!("← {}", ctx.i18n.tr("settings-back-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToOutline);

    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let mut language_column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("select-language-label")).size(typography::TITLE_MD));

    for locale in &ctx.i18n.available_locales {
        let display_name = locale.to_string();
        let translated_name = ctx.i18n.tr(&format!("language-name-{}", locale));
        let label = if translated_name.starts_with("MISSING:") {
            display_name.clone()
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let mut language_button =
            Button::new(Text::new(label)).on_press(Message::LanguageSelected(locale.clone()));
        if ctx.i18n.current_locale() == locale {
            language_button = language_button.style(button::primary);
        } else {
            language_button = language_button.style(button::secondary);
        }

        language_column = language_column.push(language_button);
    }

    let mut theme_row = Row::new().spacing(spacing::XS);
    for (mode, key) in [
        (ThemeMode::Light, "theme-mode-light"),
        (ThemeMode::Dark, "theme-mode-dark"),
        (ThemeMode::System, "theme-mode-system"),
    ] {
        let mut theme_button =
            Button::new(Text::new(ctx.i18n.tr(key))).on_press(Message::ThemeModeSelected(mode));
        if ctx.config.general.theme_mode == mode {
            theme_button = theme_button.style(button::primary);
        } else {
            theme_button = theme_button.style(button::secondary);
        }
        theme_row = theme_row.push(theme_button);
    }

    let theme_column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("settings-theme-label")).size(typography::TITLE_MD))
        .push(theme_row);

    let activation = ctx.config.activation_distance();
    let activation_column = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(format!(
                "{}: {:.0}",
                ctx.i18n.tr("settings-activation-distance-label"),
                activation
            ))
            .size(typography::BODY),
        )
        .push(
            slider(
                MIN_ACTIVATION_DISTANCE..=MAX_ACTIVATION_DISTANCE,
                activation,
                Message::ActivationDistanceChanged,
            )
            .step(1.0)
            .width(Length::Fixed(sizing::SLIDER_WIDTH)),
        );

    let indent = ctx.config.indent_width();
    let indent_column = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(format!(
                "{}: {:.0}",
                ctx.i18n.tr("settings-indent-width-label"),
                indent
            ))
            .size(typography::BODY),
        )
        .push(
            slider(
                MIN_INDENT_WIDTH..=MAX_INDENT_WIDTH,
                indent,
                Message::IndentWidthChanged,
            )
            .step(1.0)
            .width(Length::Fixed(sizing::SLIDER_WIDTH)),
        );

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(language_column)
        .push(theme_column)
        .push(activation_column)
        .push(indent_column)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_maps_messages_to_events() {
        assert_eq!(update(Message::BackToOutline), Event::BackToOutline);
        assert_eq!(
            update(Message::ThemeModeSelected(ThemeMode::Dark)),
            Event::ThemeModeSelected(ThemeMode::Dark)
        );
        assert_eq!(
            update(Message::ActivationDistanceChanged(7.0)),
            Event::ActivationDistanceChanged(7.0)
        );
    }

    #[test]
    fn view_renders_without_panicking() {
        let i18n = I18n::default();
        let config = Config::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            config: &config,
        });
    }
}
