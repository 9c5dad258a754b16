// SPDX-License-Identifier: MPL-2.0
//! Seek bar canvas.
//!
//! Draws the track, the played portion and the knob, and turns pointer
//! input into [`SeekPointer`] messages in track-local coordinates. The drag
//! protocol itself lives in the player; this widget only reports where the
//! pointer is and how wide the track was when it was measured.

use crate::player::{Message, SeekPointer};
use crate::ui::design_tokens::{opacity, palette, sizing};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::{Action, Canvas};
use iced::{mouse, touch, Color, Element, Event, Length, Point, Rectangle, Renderer, Theme};

/// Horizontal span of the track inside the widget bounds.
///
/// The track is inset by the full knob radius so the knob never clips at
/// either end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub start: f32,
    pub width: f32,
}

impl TrackGeometry {
    #[must_use]
    pub fn new(bounds_width: f32) -> Self {
        let inset = sizing::SEEK_KNOB / 2.0;
        Self {
            start: inset,
            width: (bounds_width - 2.0 * inset).max(0.0),
        }
    }

    /// Converts a widget-local x into track-local x.
    #[must_use]
    pub fn local_x(self, widget_x: f32) -> f32 {
        widget_x - self.start
    }

    /// Widget-local x of the knob center for `progress`.
    #[allow(clippy::cast_possible_truncation)] // progress is in [0, 1]
    #[must_use]
    pub fn knob_x(self, progress: f64) -> f32 {
        self.start + self.width * progress.clamp(0.0, 1.0) as f32
    }
}

/// Drag tracking kept by the canvas between events.
#[derive(Debug, Default)]
pub struct DragState {
    dragging: bool,
}

/// Seek bar rendered from the overlay view model.
#[derive(Debug, Clone, Copy)]
pub struct SeekBar {
    progress: f64,
    knob_scale: f32,
    alpha: f32,
    enabled: bool,
}

impl SeekBar {
    #[must_use]
    pub fn new(progress: f64, knob_scale: f32, alpha: f32, enabled: bool) -> Self {
        Self {
            progress,
            knob_scale,
            alpha,
            enabled,
        }
    }

    pub fn into_element(self) -> Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::SEEK_HIT_HEIGHT))
            .into()
    }

    fn color(&self, color: Color) -> Color {
        Color {
            a: color.a * self.alpha,
            ..color
        }
    }

    fn press(state: &mut DragState, bounds: Rectangle, position: Point) -> Action<Message> {
        let track = TrackGeometry::new(bounds.width);
        state.dragging = true;
        Action::publish(Message::SeekPointer(SeekPointer::Pressed {
            x: track.local_x(position.x),
            width: track.width,
        }))
        .and_capture()
    }

    fn drag(bounds: Rectangle, absolute: Point) -> Action<Message> {
        let track = TrackGeometry::new(bounds.width);
        Action::publish(Message::SeekPointer(SeekPointer::Moved {
            x: track.local_x(absolute.x - bounds.x),
            width: track.width,
        }))
        .and_capture()
    }

    fn finish(state: &mut DragState, pointer: SeekPointer) -> Action<Message> {
        state.dragging = false;
        Action::publish(Message::SeekPointer(pointer)).and_capture()
    }
}

impl canvas::Program<Message> for SeekBar {
    type State = DragState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) if self.enabled => {
                let position = cursor.position_in(bounds)?;
                Some(Self::press(state, bounds, position))
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) if self.enabled => {
                if !bounds.contains(*position) {
                    return None;
                }
                let local = Point::new(position.x - bounds.x, position.y - bounds.y);
                Some(Self::press(state, bounds, local))
            }
            Event::Mouse(mouse::Event::CursorMoved { position })
            | Event::Touch(touch::Event::FingerMoved { position, .. })
                if state.dragging =>
            {
                Some(Self::drag(bounds, *position))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. })
                if state.dragging =>
            {
                Some(Self::finish(state, SeekPointer::Released))
            }
            Event::Mouse(mouse::Event::CursorLeft) | Event::Touch(touch::Event::FingerLost { .. })
                if state.dragging =>
            {
                Some(Self::finish(state, SeekPointer::Left))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let track = TrackGeometry::new(bounds.width);
        let y = bounds.height / 2.0;
        let knob_x = track.knob_x(self.progress);

        let rail = Path::line(
            Point::new(track.start, y),
            Point::new(track.start + track.width, y),
        );
        frame.stroke(
            &rail,
            Stroke::default()
                .with_width(sizing::SEEK_TRACK)
                .with_color(self.color(Color {
                    a: opacity::RAIL,
                    ..palette::FOREGROUND
                }))
                .with_line_cap(canvas::LineCap::Round),
        );

        let played = Path::line(Point::new(track.start, y), Point::new(knob_x, y));
        frame.stroke(
            &played,
            Stroke::default()
                .with_width(sizing::SEEK_TRACK)
                .with_color(self.color(palette::ACCENT))
                .with_line_cap(canvas::LineCap::Round),
        );

        let knob_radius = sizing::SEEK_KNOB / 2.0 * self.knob_scale;
        frame.fill(
            &Path::circle(Point::new(knob_x, y), knob_radius),
            self.color(palette::FOREGROUND),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.dragging {
            mouse::Interaction::Grabbing
        } else if self.enabled && cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
