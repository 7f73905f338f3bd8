// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/overlay.rs
//
// Crop overlay widget: dimmed surround, border, corner handles.
// Inspired by cosmic-viewer (https://codeberg.org/bhh by Bryan Hyland

use cosmic::{
    Element, Renderer,
    iced::{
        Color, Length, Point, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            renderer::{Quad, Renderer as QuadRenderer},
            widget::Tree,
        },
        event::{Event, Status},
        keyboard::{self, Key as IcedKey, key::Named},
        mouse::{self, Button, Cursor},
        touch,
    },
};

use super::selection::{CursorHint, VisualState};
use crate::app::message::{CropMessage, Key};
use crate::constant::HANDLE_SIZE;
use crate::domain::{Corner, Point as CropPoint};

const OVERLAY_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.3);
const HANDLE_COLOR: Color = Color::WHITE;
const HANDLE_BORDER_COLOR: Color = Color::from_rgb(0.463, 0.463, 0.463);
const BORDER_COLOR: Color = Color::WHITE;
const BORDER_WIDTH: f32 = 1.0;

/// Overlay drawn on top of an image laid out at its display size.
///
/// Holds a snapshot of the widget's visual state; every interaction is sent
/// back to the host as a [`CropMessage`].
pub struct CropOverlay<'a, Message> {
    visual: VisualState,
    dragging: bool,
    on_message: Box<dyn Fn(CropMessage) -> Message + 'a>,
}

impl<'a, Message> CropOverlay<'a, Message> {
    pub fn new(
        visual: VisualState,
        dragging: bool,
        on_message: impl Fn(CropMessage) -> Message + 'a,
    ) -> Self {
        Self {
            visual,
            dragging,
            on_message: Box::new(on_message),
        }
    }

    fn selection_bounds(&self, bounds: Rectangle) -> Option<Rectangle> {
        let rect = self.visual.rect?;
        Some(Rectangle::new(
            Point::new(bounds.x + rect.x as f32, bounds.y + rect.y as f32),
            Size::new(rect.width as f32, rect.height as f32),
        ))
    }

    fn draw_surround(&self, renderer: &mut Renderer, bounds: Rectangle, sel: Rectangle) {
        let sel_right = sel.x + sel.width;
        let sel_bottom = sel.y + sel.height;

        // Top
        if sel.y > bounds.y {
            draw_quad(
                renderer,
                Rectangle::new(bounds.position(), Size::new(bounds.width, sel.y - bounds.y)),
                OVERLAY_COLOR,
                0.0,
            );
        }

        // Bottom
        if sel_bottom < bounds.y + bounds.height {
            draw_quad(
                renderer,
                Rectangle::new(
                    Point::new(bounds.x, sel_bottom),
                    Size::new(bounds.width, bounds.y + bounds.height - sel_bottom),
                ),
                OVERLAY_COLOR,
                0.0,
            );
        }

        // Left
        if sel.x > bounds.x {
            draw_quad(
                renderer,
                Rectangle::new(
                    Point::new(bounds.x, sel.y),
                    Size::new(sel.x - bounds.x, sel.height),
                ),
                OVERLAY_COLOR,
                0.0,
            );
        }

        // Right
        if sel_right < bounds.x + bounds.width {
            draw_quad(
                renderer,
                Rectangle::new(
                    Point::new(sel_right, sel.y),
                    Size::new(bounds.x + bounds.width - sel_right, sel.height),
                ),
                OVERLAY_COLOR,
                0.0,
            );
        }
    }

    fn draw_border(&self, renderer: &mut Renderer, sel: Rectangle) {
        let edges = [
            Rectangle::new(sel.position(), Size::new(sel.width, BORDER_WIDTH)),
            Rectangle::new(
                Point::new(sel.x, sel.y + sel.height - BORDER_WIDTH),
                Size::new(sel.width, BORDER_WIDTH),
            ),
            Rectangle::new(sel.position(), Size::new(BORDER_WIDTH, sel.height)),
            Rectangle::new(
                Point::new(sel.x + sel.width - BORDER_WIDTH, sel.y),
                Size::new(BORDER_WIDTH, sel.height),
            ),
        ];
        for edge in edges {
            draw_quad(renderer, edge, BORDER_COLOR, 0.0);
        }
    }

    fn draw_handles(&self, renderer: &mut Renderer, sel: Rectangle) {
        let half = HANDLE_SIZE / 2.0;
        let radius = if self.visual.rounded { half } else { 0.0 };

        for corner in Corner::ALL {
            let (hx, hy) = match corner {
                Corner::TopLeft => (sel.x, sel.y),
                Corner::TopRight => (sel.x + sel.width, sel.y),
                Corner::BottomLeft => (sel.x, sel.y + sel.height),
                Corner::BottomRight => (sel.x + sel.width, sel.y + sel.height),
            };
            renderer.fill_quad(
                Quad {
                    bounds: Rectangle::new(
                        Point::new(hx - half, hy - half),
                        Size::new(HANDLE_SIZE, HANDLE_SIZE),
                    ),
                    border: cosmic::iced::Border {
                        color: HANDLE_BORDER_COLOR,
                        width: 1.0,
                        radius: radius.into(),
                    },
                    ..Quad::default()
                },
                HANDLE_COLOR,
            );
        }
    }

    fn publish(&self, shell: &mut Shell<'_, Message>, message: CropMessage) {
        shell.publish((self.on_message)(message));
    }
}

impl<Message> Widget<Message, cosmic::Theme, Renderer> for CropOverlay<'_, Message> {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &cosmic::iced::advanced::renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        let Some(sel) = self.selection_bounds(bounds) else {
            return;
        };

        self.draw_surround(renderer, bounds, sel);
        if self.visual.rounded {
            draw_quad(renderer, sel, Color::TRANSPARENT, sel.width / 2.0);
        } else {
            self.draw_border(renderer, sel);
        }
        self.draw_handles(renderer, sel);
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) -> Status {
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(Button::Left)) => {
                let Some(pos) = cursor.position() else {
                    return Status::Ignored;
                };
                if !bounds.contains(pos) {
                    self.publish(shell, CropMessage::Focus(false));
                    return Status::Ignored;
                }
                self.publish(shell, CropMessage::Origin(to_crop_point(bounds.position())));
                self.publish(shell, CropMessage::Focus(true));
                self.publish(shell, CropMessage::PointerDown(to_crop_point(pos)));
                return Status::Captured;
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if self.dragging {
                    self.publish(shell, CropMessage::PointerMove(to_crop_point(position)));
                    return Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(Button::Left)) => {
                if self.dragging {
                    self.publish(shell, CropMessage::PointerUp);
                    return Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                if self.dragging {
                    self.publish(shell, CropMessage::PointerLeave);
                }
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if bounds.contains(position) {
                    self.publish(shell, CropMessage::Origin(to_crop_point(bounds.position())));
                    self.publish(shell, CropMessage::TouchStart(vec![to_crop_point(position)]));
                    return Status::Captured;
                }
            }
            Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                if self.dragging {
                    self.publish(shell, CropMessage::TouchMove(vec![to_crop_point(position)]));
                    return Status::Captured;
                }
            }
            Event::Touch(touch::Event::FingerLifted { .. }) => {
                if self.dragging {
                    self.publish(shell, CropMessage::TouchEnd);
                    return Status::Captured;
                }
            }
            Event::Touch(touch::Event::FingerLost { .. }) => {
                if self.dragging {
                    self.publish(shell, CropMessage::TouchCancel);
                }
            }
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                if let Some(key) = map_key(&key) {
                    self.publish(shell, CropMessage::Key(key));
                    return Status::Captured;
                }
            }
            _ => {}
        }

        Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        match self.visual.cursor {
            CursorHint::NwSe => return mouse::Interaction::ResizingDiagonallyDown,
            CursorHint::NeSw => return mouse::Interaction::ResizingDiagonallyUp,
            CursorHint::None => {}
        }

        if self.dragging {
            return mouse::Interaction::Grabbing;
        }

        let bounds = layout.bounds();
        match (cursor.position(), self.selection_bounds(bounds)) {
            (Some(pos), Some(sel)) if sel.contains(pos) => mouse::Interaction::Move,
            _ => mouse::Interaction::default(),
        }
    }
}

impl<'a, Message: 'a> From<CropOverlay<'a, Message>> for Element<'a, Message> {
    fn from(widget: CropOverlay<'a, Message>) -> Self {
        Element::new(widget)
    }
}

fn map_key(key: &IcedKey) -> Option<Key> {
    match key {
        IcedKey::Named(Named::ArrowUp) => Some(Key::ArrowUp),
        IcedKey::Named(Named::ArrowDown) => Some(Key::ArrowDown),
        IcedKey::Named(Named::ArrowLeft) => Some(Key::ArrowLeft),
        IcedKey::Named(Named::ArrowRight) => Some(Key::ArrowRight),
        IcedKey::Named(Named::Escape) => Some(Key::Escape),
        IcedKey::Character(ch) => Key::from_name(ch.as_str()),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_crop_point(point: Point) -> CropPoint {
    CropPoint::new(point.x.round() as i32, point.y.round() as i32)
}

fn draw_quad(renderer: &mut Renderer, bounds: Rectangle, color: Color, radius: f32) {
    let border = if radius > 0.0 {
        cosmic::iced::Border {
            color: BORDER_COLOR,
            width: BORDER_WIDTH,
            radius: radius.into(),
        }
    } else {
        cosmic::iced::Border::default()
    };
    renderer.fill_quad(
        Quad {
            bounds,
            border,
            ..Quad::default()
        },
        color,
    );
}

/// Build the overlay for a widget's current state.
pub fn crop_overlay<'a, Message: 'a>(
    widget: &crate::app::CropWidget,
    on_message: impl Fn(CropMessage) -> Message + 'a,
) -> Element<'a, Message> {
    CropOverlay::new(widget.visual_state(), widget.mode().is_active(), on_message).into()
}
