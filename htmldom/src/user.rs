//! Simulated user interaction.

use crate::dispatch::{dispatch, Dispatch};
use crate::element::{find_element, Element};
use crate::event::{Event, Key, Modifiers};
use crate::focus::{is_focusable, FocusState};

/// Drives clicks and key presses against a tree, tracking focus the way a
/// browser would.
#[derive(Debug, Default)]
pub struct UserEvent {
    focus: FocusState,
}

impl UserEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// Click an element: focus it if focusable, then activate.
    pub fn click(&mut self, root: &Element, target: &str) -> Dispatch {
        if find_element(root, target).is_some_and(is_focusable) {
            self.focus.focus(target);
        }
        dispatch(root, &Event::click(target))
    }

    /// Press a key at the focused element.
    ///
    /// Tab and BackTab move focus and never reach handlers.
    pub fn keyboard(&mut self, root: &Element, key: Key) -> Dispatch {
        self.focus.validate(root);
        match key {
            Key::Tab => {
                self.focus.focus_next(root);
                Dispatch::Ignored
            }
            Key::BackTab => {
                self.focus.focus_prev(root);
                Dispatch::Ignored
            }
            _ => match self.focus.focused() {
                Some(target) => dispatch(
                    root,
                    &Event::Key {
                        target: target.to_string(),
                        key,
                        modifiers: Modifiers::new(),
                    },
                ),
                None => {
                    log::trace!("[user] {:?} pressed with nothing focused", key);
                    Dispatch::Ignored
                }
            },
        }
    }

    pub fn tab(&mut self, root: &Element) {
        self.keyboard(root, Key::Tab);
    }
}
