use macroquad::prelude::{KeyCode, MouseButton};

/// Input the session reacts to, independent of how the platform reports it.
/// Mouse positions are window pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Window close requested
    Quit,

    KeyDown(KeyCode),

    MouseDown { button: MouseButton, x: f32, y: f32 },

    MouseUp { button: MouseButton },

    MouseMotion { x: f32, y: f32 },
}
