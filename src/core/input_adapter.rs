use std::collections::HashSet;

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Action, Controller};

/// Adapter that bridges winit window events to the [`Controller`] trait.
///
/// Tracks held actions, the Ctrl modifier, the cursor position and an
/// accumulated mouse delta. The delta is consumed once per frame with
/// [`take_mouse_delta`](Self::take_mouse_delta); key state persists until the
/// matching release event.
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    held: HashSet<Action>,
    ctrl: bool,
    cursor: Option<(f32, f32)>,
    mouse_delta: (f32, f32),
}

impl WinitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a winit window event and updates internal state.
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.ctrl = modifiers.state().control_key();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(action) = Self::keycode_to_action(keycode) {
                        match event.state {
                            ElementState::Pressed => {
                                // R only arms a reset while Ctrl is held.
                                if action != Action::ResetPose || self.ctrl {
                                    self.held.insert(action);
                                }
                            }
                            ElementState::Released => {
                                self.held.remove(&action);
                            }
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let new_pos = (position.x as f32, position.y as f32);
                if let Some(old_pos) = self.cursor {
                    self.mouse_delta.0 += new_pos.0 - old_pos.0;
                    self.mouse_delta.1 += new_pos.1 - old_pos.1;
                }
                self.cursor = Some(new_pos);
            }
            _ => {}
        }
    }

    /// Consumes the mouse delta accumulated since the last call.
    pub fn take_mouse_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.mouse_delta)
    }

    /// Current cursor position, if the cursor has entered the window.
    pub fn cursor_position(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    fn keycode_to_action(keycode: KeyCode) -> Option<Action> {
        match keycode {
            KeyCode::KeyW => Some(Action::MoveForward),
            KeyCode::KeyS => Some(Action::MoveBackward),
            KeyCode::KeyA => Some(Action::StrafeLeft),
            KeyCode::KeyD => Some(Action::StrafeRight),
            KeyCode::KeyQ => Some(Action::TurnLeft),
            KeyCode::KeyE => Some(Action::TurnRight),
            KeyCode::KeyR => Some(Action::ResetPose),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, action: Action) -> bool {
        self.held.contains(&action)
    }
}
