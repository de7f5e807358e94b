use crate::a11y::is_hidden;
use crate::element::{find_element, Element};

/// Tracks which element is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element key.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by key.
    /// Returns true if focus changed.
    pub fn focus(&mut self, key: &str) -> bool {
        if self.focused.as_deref() == Some(key) {
            return false;
        }
        self.focused = Some(key.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element key if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => match focusable.iter().position(|key| key == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => focusable[0].clone(),
            },
        };

        self.move_to(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element key if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let last = focusable.len() - 1;
        let new_focus = match &self.focused {
            None => focusable[last].clone(),
            Some(current) => match focusable.iter().position(|key| key == current) {
                Some(0) | None => focusable[last].clone(),
                Some(i) => focusable[i - 1].clone(),
            },
        };

        self.move_to(new_focus)
    }

    /// Drop focus if the focused element is no longer focusable in `root`.
    pub fn validate(&mut self, root: &Element) {
        if let Some(current) = &self.focused {
            let still_focusable = find_element(root, current).is_some_and(is_focusable);
            if !still_focusable {
                log::debug!("[focus] {} is gone or no longer focusable", current);
                self.focused = None;
            }
        }
    }

    fn move_to(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() == Some(&new_focus) {
            return None;
        }
        log::debug!("[focus] Changing focus from {:?} to {}", self.focused, new_focus);
        self.focused = Some(new_focus.clone());
        Some(new_focus)
    }
}

/// Whether an element takes part in sequential focus navigation.
pub fn is_focusable(element: &Element) -> bool {
    if element.is_text() || element.disabled || is_hidden(element) {
        return false;
    }

    if let Some(index) = element.get_attr("tabindex") {
        return index.trim().parse::<i32>().is_ok_and(|i| i >= 0);
    }

    match element.tag.as_str() {
        "button" | "input" | "select" | "textarea" => true,
        "a" => element.has_attr("href"),
        _ => false,
    }
}

/// Collect all focusable element keys in document order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(root, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if is_hidden(element) {
        return;
    }
    if is_focusable(element) {
        result.push(element.key.clone());
    }
    for child in element.content.children() {
        collect_focusable_recursive(child, result);
    }
}
