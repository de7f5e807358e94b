mod class_list;
mod content;
mod node;

pub use class_list::ClassList;
pub use content::Content;
pub use node::{Element, Handler};

/// Find an element by node key in the tree.
pub fn find_element<'a>(root: &'a Element, key: &str) -> Option<&'a Element> {
    if root.key == key {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, key) {
            return Some(found);
        }
    }

    None
}

/// Find the chain of elements from `root` down to the element with `key`.
///
/// The returned path starts at `root` and ends at the target.
pub fn find_path<'a>(root: &'a Element, key: &str) -> Option<Vec<&'a Element>> {
    let mut path = Vec::new();
    if collect_path(root, key, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn collect_path<'a>(element: &'a Element, key: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.key == key {
        return true;
    }

    for child in element.content.children() {
        if collect_path(child, key, path) {
            return true;
        }
    }

    path.pop();
    false
}
