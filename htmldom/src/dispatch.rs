//! Event dispatch to element handlers.

use crate::a11y::{role_of, Role};
use crate::element::{find_path, Element};
use crate::event::{Event, Key};

/// Outcome of dispatching an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A handler was invoked exactly once.
    Handled,
    /// The activation target (or an ancestor) is disabled; no handler ran.
    Suppressed,
    /// Nothing in the target's ancestry reacts to the event.
    Ignored,
}

/// Dispatch an event against the tree rooted at `root`.
///
/// Clicks bubble from the target to the nearest element that has a handler
/// or an activatable role. Key events activate the target itself when the
/// key matches its role's activation keys, and are then delivered as a click.
pub fn dispatch(root: &Element, event: &Event) -> Dispatch {
    match event {
        Event::Click { target } => activate(root, target, event),
        Event::Key {
            target,
            key,
            modifiers,
        } => {
            if modifiers.ctrl || modifiers.alt {
                return Dispatch::Ignored;
            }
            let Some(path) = find_path(root, target) else {
                log::debug!("[dispatch] key target {} not in tree", target);
                return Dispatch::Ignored;
            };
            let Some(element) = path.last() else {
                return Dispatch::Ignored;
            };
            if !activates(role_of(element), *key) {
                log::trace!("[dispatch] {:?} does not activate {}", key, target);
                return Dispatch::Ignored;
            }
            activate(root, target, &Event::click(target.clone()))
        }
    }
}

/// Keys that activate an element with the given role.
fn activates(role: Role, key: Key) -> bool {
    match role {
        Role::Button => matches!(key, Key::Enter | Key::SPACE),
        Role::Link => key == Key::Enter,
        _ => false,
    }
}

fn activate(root: &Element, target: &str, event: &Event) -> Dispatch {
    let Some(path) = find_path(root, target) else {
        log::debug!("[dispatch] click target {} not in tree", target);
        return Dispatch::Ignored;
    };

    let Some(index) = path
        .iter()
        .rposition(|el| el.on_click.is_some() || role_of(el).is_activatable())
    else {
        return Dispatch::Ignored;
    };

    if path.iter().any(|el| el.disabled) {
        log::debug!("[dispatch] {} is disabled, suppressing", path[index].key);
        return Dispatch::Suppressed;
    }

    match &path[index].on_click {
        Some(handler) => {
            log::debug!("[dispatch] activating {}", path[index].key);
            handler(event);
            Dispatch::Handled
        }
        None => Dispatch::Ignored,
    }
}
