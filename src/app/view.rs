// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen based on application state, with an optional
//! warning banner above it.

use super::{Message, Screen};
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::outline;
use crate::ui::settings;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment::Vertical, Background, Border, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub outline: &'a outline::State,
    pub config: &'a Config,
    pub colors: &'a ColorScheme,
    /// i18n key of the warning banner, if one is showing.
    pub warning: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Outline => outline::view(
            ctx.outline,
            outline::ViewContext {
                i18n: ctx.i18n,
                colors: ctx.colors,
                indent_width: ctx.config.indent_width(),
            },
        )
        .map(Message::Outline),
        Screen::Settings => settings::view(settings::ViewContext {
            i18n: ctx.i18n,
            config: ctx.config,
        })
        .map(Message::Settings),
    };

    let mut column = Column::new();
    if let Some(key) = ctx.warning {
        column = column.push(warning_banner(ctx.i18n, ctx.colors, key));
    }
    column
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn warning_banner<'a>(i18n: &'a I18n, colors: &ColorScheme, key: &str) -> Element<'a, Message> {
    let background = colors.warning;
    let banner = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(i18n.tr(key)).size(typography::BODY)).width(Length::Fill),
        )
        .push(
            button(Text::new(i18n.tr("notification-dismiss-button")).size(typography::CAPTION))
                .style(button::text)
                .on_press(Message::DismissWarning),
        );

    Container::new(banner)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            text_color: Some(iced::Color::BLACK),
            ..Default::default()
        })
        .into()
}
