// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the control groups, the time label, the error label
//! and the notice badge.
//!
//! Every style takes the group's animated opacity so the whole group fades
//! together.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, FOREGROUND, SCRIM},
    radius,
};
use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Theme};

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Scrim behind a control group.
pub fn group(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(
            Color {
                a: opacity::SCRIM,
                ..SCRIM
            },
            alpha,
        ))),
        text_color: Some(faded(FOREGROUND, alpha)),
        ..Default::default()
    }
}

/// Round transport button (play/pause, fullscreen, close).
pub fn control_button(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => opacity::BUTTON_HOVER,
            button::Status::Pressed => opacity::BUTTON_PRESSED,
            _ => opacity::BUTTON_IDLE,
        };

        button::Style {
            background: Some(Background::Color(faded(
                Color {
                    a: background,
                    ..SCRIM
                },
                alpha,
            ))),
            text_color: faded(FOREGROUND, alpha),
            border: Border {
                radius: radius::PILL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Flat button wrapping the tappable time label.
pub fn time_label(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match status {
            button::Status::Hovered => palette::ACCENT_HOVER,
            _ => FOREGROUND,
        };
        button::Style {
            background: None,
            text_color: faded(color, alpha),
            ..Default::default()
        }
    }
}

/// Error text shown in place of the spinner.
#[must_use]
pub fn error_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(FOREGROUND),
    }
}

/// Badge behind the error text.
#[must_use]
pub fn error_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::ERROR_BADGE,
            ..palette::ERROR
        })),
        border: Border {
            radius: radius::BADGE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Badge behind a transient notice.
#[must_use]
pub fn notice_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::NOTICE_BADGE,
            ..SCRIM
        })),
        text_color: Some(FOREGROUND),
        border: Border {
            radius: radius::BADGE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
