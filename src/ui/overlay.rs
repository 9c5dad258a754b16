// SPDX-License-Identifier: MPL-2.0
//! Overlay view.
//!
//! Layers, bottom to top: the tap area covering the whole surface, the
//! status layer (spinner or error badge), the notice and the two control
//! groups.
//! Each group slides and fades with its animated frame and only accepts
//! input while the overlay is shown or fading in.

use crate::controls::GroupFrame;
use crate::player::{Message, OverlayViewModel};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::seek_bar::SeekBar;
use crate::ui::styles;
use crate::ui::widgets::LoadingSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length, Padding};
use std::time::Duration;

const PLAY_GLYPH: &str = "▶";
const PAUSE_GLYPH: &str = "❚❚";
const CLOSE_GLYPH: &str = "✕";
const ENTER_FULL_SCREEN_GLYPH: &str = "⛶";
const EXIT_FULL_SCREEN_GLYPH: &str = "⤡";

/// Distance of a group from its screen edge: the safe-area padding plus the
/// animated margin, never negative.
#[must_use]
pub fn edge_offset(padding: f32, frame: GroupFrame) -> f32 {
    (padding + frame.margin).max(0.0)
}

/// Renders the overlay.
///
/// `loading_elapsed` drives the spinner rotation.
#[must_use]
pub fn view(model: &OverlayViewModel, loading_elapsed: Duration) -> Element<'static, Message> {
    let tap_area = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(Message::Tap);

    let controls = Column::new()
        .push(top_group(model))
        .push(Space::new().height(Length::Fill))
        .push(bottom_group(model))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new().push(tap_area);
    if let Some(status) = status_layer(model, loading_elapsed) {
        stack = stack.push(status);
    }
    if let Some(notice) = notice_layer(model) {
        stack = stack.push(notice);
    }
    stack
        .push(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn control_button(
    glyph: &'static str,
    message: Message,
    alpha: f32,
    interactive: bool,
) -> Element<'static, Message> {
    button(
        Text::new(glyph)
            .size(typography::GLYPH)
            .align_x(Horizontal::Center),
    )
    .on_press_maybe(interactive.then_some(message))
    .padding(spacing::XS)
    .height(Length::Fixed(sizing::TRANSPORT_BUTTON))
    .style(styles::overlay::control_button(alpha))
    .into()
}

fn top_group(model: &OverlayViewModel) -> Element<'static, Message> {
    let frame = model.frame.top;
    let mut row = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::SM)
        .push(control_button(
            CLOSE_GLYPH,
            Message::Back,
            frame.opacity,
            model.interactive,
        ))
        .push(Space::new().width(Length::Fill));

    if model.show_full_screen_button {
        let glyph = if model.is_full_screen {
            EXIT_FULL_SCREEN_GLYPH
        } else {
            ENTER_FULL_SCREEN_GLYPH
        };
        row = row.push(control_button(
            glyph,
            Message::ToggleFullScreen,
            frame.opacity,
            model.interactive,
        ));
    }

    Container::new(row)
        .width(Length::Fill)
        .padding(Padding {
            top: edge_offset(model.paddings.top, frame) + spacing::XS,
            bottom: spacing::XS,
            left: spacing::MD,
            right: spacing::MD,
        })
        .style(styles::overlay::group(frame.opacity))
        .into()
}

fn bottom_group(model: &OverlayViewModel) -> Element<'static, Message> {
    let frame = model.frame.bottom;
    let play_glyph = if model.is_playing {
        PAUSE_GLYPH
    } else {
        PLAY_GLYPH
    };

    let time_label = button(
        Text::new(model.time_label.clone())
            .size(typography::LABEL)
            .align_x(Horizontal::Right),
    )
    .on_press_maybe(model.interactive.then_some(Message::ToggleTimeDisplay))
    .width(Length::Fixed(sizing::TIME_LABEL_WIDTH))
    .padding(spacing::XXS)
    .style(styles::overlay::time_label(frame.opacity));

    let seek_bar = SeekBar::new(
        model.progress,
        model.knob_scale,
        frame.opacity,
        model.interactive,
    );

    let row = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::SM)
        .push(control_button(
            play_glyph,
            Message::TogglePlayPause,
            frame.opacity,
            model.interactive,
        ))
        .push(seek_bar.into_element())
        .push(time_label);

    Container::new(row)
        .width(Length::Fill)
        .padding(Padding {
            top: spacing::XS,
            bottom: edge_offset(model.paddings.bottom, frame) + spacing::XS,
            left: spacing::MD,
            right: spacing::MD,
        })
        .style(styles::overlay::group(frame.opacity))
        .into()
}

fn status_layer(
    model: &OverlayViewModel,
    loading_elapsed: Duration,
) -> Option<Element<'static, Message>> {
    let content: Element<'static, Message> = if let Some(label) = &model.error_label {
        Container::new(
            Text::new(label.clone())
                .size(typography::LABEL)
                .style(styles::overlay::error_text),
        )
        .padding(spacing::SM)
        .style(styles::overlay::error_badge)
        .into()
    } else if model.loading {
        LoadingSpinner::new(palette::FOREGROUND, loading_elapsed).into_element()
    } else {
        return None;
    };

    Some(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
    )
}

/// Notice pinned under the top group, visible whether or not controls are.
fn notice_layer(model: &OverlayViewModel) -> Option<Element<'static, Message>> {
    let notice = model.notice.as_ref()?;
    let badge = Container::new(Text::new(notice.clone()).size(typography::LABEL))
        .padding(spacing::SM)
        .style(styles::overlay::notice_badge);

    Some(
        Container::new(badge)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding {
                top: model.paddings.top + sizing::TRANSPORT_BUTTON + spacing::MD,
                ..Padding::ZERO
            })
            .align_x(Horizontal::Center)
            .align_y(Vertical::Top)
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn shown_group_sits_at_padding() {
        let frame = GroupFrame {
            margin: 0.0,
            opacity: 1.0,
        };
        assert_abs_diff_eq!(edge_offset(44.0, frame), 44.0);
    }

    #[test]
    fn hidden_group_never_goes_negative() {
        let frame = GroupFrame {
            margin: crate::config::HIDDEN_MARGIN,
            opacity: 0.0,
        };
        assert_abs_diff_eq!(edge_offset(10.0, frame), 0.0);
    }

    #[test]
    fn mid_animation_offset_is_partial() {
        let frame = GroupFrame {
            margin: -20.0,
            opacity: 0.8,
        };
        assert_abs_diff_eq!(edge_offset(34.0, frame), 14.0);
    }
}
