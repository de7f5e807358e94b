//! Role and text queries over an element tree.

use thiserror::Error;

use crate::a11y::{accessible_name, is_hidden, role_of, Role};
use crate::element::Element;

/// Errors from the `get_*` and `query_*` lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("no element with role '{role}'{}", describe_name(.name))]
    NotFound { role: Role, name: Option<String> },

    #[error("found {count} elements with role '{role}'{}", describe_name(.name))]
    Multiple {
        role: Role,
        name: Option<String>,
        count: usize,
    },

    #[error("no element with text '{0}'")]
    TextNotFound(String),
}

fn describe_name(name: &Option<String>) -> String {
    match name {
        Some(name) => format!(" and name '{name}'"),
        None => String::new(),
    }
}

/// All visible elements with `role` (and accessible `name`, if given), in document order.
pub fn get_all_by_role<'a>(root: &'a Element, role: Role, name: Option<&str>) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_role(root, role, name, &mut found);
    found
}

/// The single visible element with `role` (and `name`, if given).
pub fn get_by_role<'a>(
    root: &'a Element,
    role: Role,
    name: Option<&str>,
) -> Result<&'a Element, QueryError> {
    query_by_role(root, role, name)?.ok_or_else(|| QueryError::NotFound {
        role,
        name: name.map(str::to_string),
    })
}

/// Like [`get_by_role`], but a missing element is `Ok(None)`.
pub fn query_by_role<'a>(
    root: &'a Element,
    role: Role,
    name: Option<&str>,
) -> Result<Option<&'a Element>, QueryError> {
    let found = get_all_by_role(root, role, name);
    match found.len() {
        0 => Ok(None),
        1 => Ok(Some(found[0])),
        count => Err(QueryError::Multiple {
            role,
            name: name.map(str::to_string),
            count,
        }),
    }
}

/// The innermost visible element whose text content equals `text`.
pub fn get_by_text<'a>(root: &'a Element, text: &str) -> Result<&'a Element, QueryError> {
    find_by_text(root, text.trim()).ok_or_else(|| QueryError::TextNotFound(text.to_string()))
}

fn collect_by_role<'a>(
    element: &'a Element,
    role: Role,
    name: Option<&str>,
    found: &mut Vec<&'a Element>,
) {
    if element.is_text() || is_hidden(element) {
        return;
    }
    if role_of(element) == role && name.is_none_or(|name| accessible_name(element) == name) {
        found.push(element);
    }
    for child in element.content.children() {
        collect_by_role(child, role, name, found);
    }
}

fn find_by_text<'a>(element: &'a Element, text: &str) -> Option<&'a Element> {
    if element.is_text() || is_hidden(element) {
        return None;
    }
    for child in element.content.children() {
        if let Some(found) = find_by_text(child, text) {
            return Some(found);
        }
    }
    let own = element.inner_text();
    let own = own.split_whitespace().collect::<Vec<_>>().join(" ");
    (own == text).then_some(element)
}
