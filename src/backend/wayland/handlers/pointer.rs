// Feeds pointer events (motion/buttons) into the per-frame input collector.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::input::MouseButton;
use crate::util::Point;

use super::super::state::WaylandState;

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            let position = Point::from(event.position);
            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!("Pointer entered at ({}, {})", position.x, position.y);
                    self.input.on_pointer_motion(position);
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                }
                PointerEventKind::Motion { .. } => {
                    self.input.on_pointer_motion(position);
                }
                PointerEventKind::Press { button, .. } => {
                    debug!(
                        "Button {} pressed at ({}, {})",
                        button, position.x, position.y
                    );

                    let Some(mb) = map_button(button) else {
                        continue;
                    };
                    self.input.on_button_press(mb, position);
                }
                PointerEventKind::Release { button, .. } => {
                    debug!("Button {} released", button);

                    let Some(mb) = map_button(button) else {
                        continue;
                    };
                    self.input.on_button_release(mb, position);
                }
                PointerEventKind::Axis { .. } => {}
            }
        }
    }
}

fn map_button(button: u32) -> Option<MouseButton> {
    match button {
        BTN_LEFT => Some(MouseButton::Left),
        BTN_MIDDLE => Some(MouseButton::Middle),
        BTN_RIGHT => Some(MouseButton::Right),
        _ => None,
    }
}
