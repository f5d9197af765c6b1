use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::{EventHandler, KeyMods};
use macroquad::prelude::*;

use crate::application::InputEvent;

/// Converts raw miniquad events into `InputEvent`s, one per platform event,
/// in the order the platform delivered them.
#[derive(Default)]
pub struct EventTranslator {
    events: Vec<InputEvent>,
}

impl EventTranslator {
    /// Hand over everything translated so far
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventHandler for EventTranslator {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn mouse_motion_event(&mut self, x: f32, y: f32) {
        self.events.push(InputEvent::MouseMotion { x, y });
    }

    fn mouse_button_down_event(&mut self, button: MouseButton, x: f32, y: f32) {
        self.events.push(InputEvent::MouseDown { button, x, y });
    }

    fn mouse_button_up_event(&mut self, button: MouseButton, _x: f32, _y: f32) {
        self.events.push(InputEvent::MouseUp { button });
    }

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, repeat: bool) {
        // auto-repeat would flip the pause state while the key is held
        if !repeat {
            self.events.push(InputEvent::KeyDown(keycode));
        }
    }
}

/// Collects each frame's input from macroquad's event queue.
/// Must be created after the window exists.
pub struct InputPoller {
    subscriber: usize,
    translator: EventTranslator,
}

impl InputPoller {
    pub fn new() -> Self {
        Self {
            subscriber: register_input_subscriber(),
            translator: EventTranslator::default(),
        }
    }

    /// All events queued since the last call, followed by `Quit` if the
    /// window close button was pressed
    pub fn poll(&mut self) -> Vec<InputEvent> {
        repeat_all_miniquad_input(&mut self.translator, self.subscriber);

        let mut events = self.translator.drain();
        if is_quit_requested() {
            events.push(InputEvent::Quit);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Config, Session};

    const NO_MODS: KeyMods = KeyMods {
        shift: false,
        ctrl: false,
        alt: false,
        logo: false,
    };

    #[test]
    fn test_every_motion_is_kept_in_order() {
        let mut translator = EventTranslator::default();
        translator.mouse_button_down_event(MouseButton::Left, 5.0, 5.0);
        translator.mouse_motion_event(6.0, 5.0);
        translator.mouse_motion_event(7.0, 6.0);
        translator.mouse_button_up_event(MouseButton::Left, 7.0, 6.0);

        assert_eq!(
            translator.drain(),
            vec![
                InputEvent::MouseDown {
                    button: MouseButton::Left,
                    x: 5.0,
                    y: 5.0
                },
                InputEvent::MouseMotion { x: 6.0, y: 5.0 },
                InputEvent::MouseMotion { x: 7.0, y: 6.0 },
                InputEvent::MouseUp {
                    button: MouseButton::Left
                },
            ]
        );
        assert!(translator.drain().is_empty());
    }

    #[test]
    fn test_fast_drag_paints_every_cell_crossed() {
        // a 50px drag delivered within a single frame
        let mut translator = EventTranslator::default();
        translator.mouse_button_down_event(MouseButton::Left, 5.0, 5.0);
        for x in 6..=55 {
            translator.mouse_motion_event(x as f32, 5.0);
        }
        translator.mouse_button_up_event(MouseButton::Left, 55.0, 5.0);

        let mut session = Session::new(Config::default());
        session.handle_all(translator.drain());

        for x in 0..=5 {
            assert_eq!(session.grid().get(x, 0), Some(Cell::Alive), "cell {x}");
        }
        assert_eq!(session.grid().population(), 6);
    }

    #[test]
    fn test_key_repeat_is_dropped() {
        let mut translator = EventTranslator::default();
        translator.key_down_event(KeyCode::P, NO_MODS, false);
        translator.key_down_event(KeyCode::P, NO_MODS, true);

        assert_eq!(translator.drain(), vec![InputEvent::KeyDown(KeyCode::P)]);
    }
}
