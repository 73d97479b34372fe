//! Pointer event translation from egui to the tile controller

use egui::{Event, PointerButton as EguiButton};
use scrabble_core::{PointerButton, PointerEvent};

/// Turns raw egui input events into press / drag / release events.
///
/// Moves are only forwarded while a button is held.
#[derive(Debug, Default)]
pub struct PointerInput {
    held: Option<PointerButton>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer events that arrived since the previous frame, in order
    pub fn collect(&mut self, ctx: &egui::Context) -> Vec<PointerEvent> {
        ctx.input(|i| self.translate(&i.events))
    }

    pub fn translate(&mut self, events: &[Event]) -> Vec<PointerEvent> {
        let mut out = Vec::new();

        for event in events {
            match *event {
                Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    ..
                } => {
                    let Some(button) = map_button(button) else {
                        continue;
                    };
                    let pos = super::pos_to_point(pos);
                    if pressed {
                        self.held = Some(button);
                        out.push(PointerEvent::Down { pos, button });
                    } else {
                        self.held = None;
                        out.push(PointerEvent::Up { pos, button });
                    }
                }
                Event::PointerMoved(pos) => {
                    if let Some(button) = self.held {
                        out.push(PointerEvent::Move {
                            pos: super::pos_to_point(pos),
                            button,
                        });
                    }
                }
                _ => {}
            }
        }

        out
    }

    /// Button currently held down, if any
    pub fn held(&self) -> Option<PointerButton> {
        self.held
    }
}

fn map_button(button: EguiButton) -> Option<PointerButton> {
    match button {
        EguiButton::Primary => Some(PointerButton::Primary),
        EguiButton::Middle => Some(PointerButton::Middle),
        EguiButton::Secondary => Some(PointerButton::Secondary),
        _ => None,
    }
}
