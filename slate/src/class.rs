//! Class token merging.
//!
//! Caller-supplied classes are appended after the resolved ones and evict
//! any resolved token they conflict with, so `h-12` passed by a caller
//! replaces the size's `h-9` instead of racing it in the stylesheet.
//!
//! Two tokens conflict when they share the same modifier prefix
//! (`hover:`, `dark:aria-invalid:` ...) and the same utility group. A
//! wider group also evicts the groups it covers (`p-0` evicts `px-4`,
//! `size-12` evicts `h-9`), while a narrower token placed after a wider
//! one refines it and both are kept. Tokens outside the known groups
//! never conflict.

use std::collections::HashSet;

use htmldom::ClassList;

/// Merge `overrides` onto `resolved`.
///
/// Resolved tokens keep their order, minus those an override conflicts
/// with. Overrides follow; among overrides the last one in a group wins.
pub fn merge(resolved: &ClassList, overrides: &ClassList) -> ClassList {
    let mut seen = HashSet::new();
    let mut kept_overrides: Vec<&str> = Vec::with_capacity(overrides.len());
    for token in overrides.iter().collect::<Vec<_>>().into_iter().rev() {
        let shadowed = match conflict_key(token) {
            Some(key) => {
                let shadowed = is_shadowed(&key, &seen);
                seen.insert(key);
                shadowed
            }
            None => false,
        };
        if !shadowed {
            kept_overrides.push(token);
        }
    }
    kept_overrides.reverse();

    let mut merged: ClassList = resolved
        .iter()
        .filter(|token| conflict_key(token).is_none_or(|key| !is_shadowed(&key, &seen)))
        .collect();
    for token in kept_overrides {
        // A token equal to a surviving resolved one moves to the end
        merged.retain(|existing| existing != token);
        merged.push(token);
    }
    merged
}

/// Join class strings, then merge later parts over earlier ones.
pub fn cn<'a>(parts: impl IntoIterator<Item = &'a str>) -> ClassList {
    parts
        .into_iter()
        .fold(ClassList::new(), |acc, part| merge(&acc, &ClassList::parse(part)))
}

/// Conflict key of a token: its modifier prefix plus utility group.
pub fn conflict_key(token: &str) -> Option<String> {
    let (modifiers, utility) = split_modifiers(token);
    let utility = utility.trim_start_matches('!');
    utility_group(utility).map(|group| format!("{modifiers}|{group}"))
}

/// Whether a token with conflict `key` is overridden by a token already
/// in `seen`: one of the same group, or of a wider group covering it.
fn is_shadowed(key: &str, seen: &HashSet<String>) -> bool {
    if seen.contains(key) {
        return true;
    }
    let Some((modifiers, group)) = key.rsplit_once('|') else {
        return false;
    };
    COVERS
        .iter()
        .filter(|(_, narrower)| narrower.contains(&group))
        .any(|(wider, _)| seen.contains(&format!("{modifiers}|{wider}")))
}

/// Split `a:b:[x:y]:util` into (`a:b:[x:y]`, `util`), ignoring colons
/// inside brackets and parentheses.
fn split_modifiers(token: &str) -> (&str, &str) {
    let mut depth = 0i32;
    let mut split = None;
    for (i, c) in token.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            ':' if depth == 0 => split = Some(i),
            _ => {}
        }
    }
    match split {
        Some(i) => (&token[..i], &token[i + 1..]),
        None => ("", token),
    }
}

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "contents",
    "hidden",
];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const RADII: &[&str] = &["none", "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "full"];

/// Groups that a wider group overrides, e.g. `p-*` over `px-*`.
const COVERS: &[(&str, &[&str])] = &[
    ("p", &["px", "py", "pt", "pr", "pb", "pl"]),
    ("px", &["pr", "pl"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "mt", "mr", "mb", "ml"]),
    ("mx", &["mr", "ml"]),
    ("my", &["mt", "mb"]),
    ("size", &["h", "w"]),
    ("gap", &["gap-x", "gap-y"]),
    (
        "rounded",
        &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-s",
            "rounded-e",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
            "rounded-ss",
            "rounded-se",
            "rounded-ee",
            "rounded-es",
        ],
    ),
    ("rounded-t", &["rounded-tl", "rounded-tr"]),
    ("rounded-r", &["rounded-tr", "rounded-br"]),
    ("rounded-b", &["rounded-br", "rounded-bl"]),
    ("rounded-l", &["rounded-tl", "rounded-bl"]),
    ("rounded-s", &["rounded-ss", "rounded-es"]),
    ("rounded-e", &["rounded-se", "rounded-ee"]),
];

/// Per-side and per-corner radius utilities.
const ROUNDED_SIDES: &[(&str, &str)] = &[
    ("t", "rounded-t"),
    ("r", "rounded-r"),
    ("b", "rounded-b"),
    ("l", "rounded-l"),
    ("s", "rounded-s"),
    ("e", "rounded-e"),
    ("tl", "rounded-tl"),
    ("tr", "rounded-tr"),
    ("br", "rounded-br"),
    ("bl", "rounded-bl"),
    ("ss", "rounded-ss"),
    ("se", "rounded-se"),
    ("ee", "rounded-ee"),
    ("es", "rounded-es"),
];

/// Prefix-to-group table for utilities whose value does not change the group.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("size-", "size"),
    ("h-", "h"),
    ("w-", "w"),
    ("min-h-", "min-h"),
    ("min-w-", "min-w"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("m-", "m"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("bg-", "bg"),
    ("shadow-", "shadow"),
    ("opacity-", "opacity"),
    ("underline-offset-", "underline-offset"),
    ("whitespace-", "whitespace"),
    ("justify-", "justify-content"),
    ("items-", "align-items"),
    ("cursor-", "cursor"),
    ("outline-", "outline"),
    ("pointer-events-", "pointer-events"),
    ("transition", "transition"),
];

fn utility_group(utility: &str) -> Option<&'static str> {
    let utility = utility.strip_prefix('-').unwrap_or(utility);

    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    match utility {
        "border" => return Some("border-w"),
        "rounded" => return Some("rounded"),
        "shadow" => return Some("shadow"),
        "shrink" => return Some("shrink"),
        "ring" => return Some("ring-w"),
        _ => {}
    }

    if let Some(value) = utility.strip_prefix("text-") {
        return Some(if FONT_SIZES.contains(&value) {
            "font-size"
        } else if TEXT_ALIGN.contains(&value) {
            "text-align"
        } else {
            "text-color"
        });
    }
    if let Some(value) = utility.strip_prefix("font-") {
        return FONT_WEIGHTS.contains(&value).then_some("font-weight");
    }
    if let Some(value) = utility.strip_prefix("rounded-") {
        if RADII.contains(&value) || value.starts_with('[') {
            return Some("rounded");
        }
        let side = value.split_once('-').map_or(value, |(side, _)| side);
        return ROUNDED_SIDES
            .iter()
            .find(|(name, _)| *name == side)
            .map(|(_, group)| *group);
    }
    if let Some(value) = utility.strip_prefix("border-") {
        if is_width(value) {
            return Some("border-w");
        }
        // Per-side borders are not tracked
        if matches!(
            value.split('-').next(),
            Some("t" | "r" | "b" | "l" | "x" | "y" | "s" | "e")
        ) {
            return None;
        }
        return Some("border-color");
    }
    if let Some(value) = utility.strip_prefix("ring-") {
        return Some(if is_width(value) || value == "inset" {
            "ring-w"
        } else if value.starts_with("offset-") {
            "ring-offset"
        } else {
            "ring-color"
        });
    }
    if let Some(value) = utility.strip_prefix("shrink-") {
        return value.parse::<u32>().is_ok().then_some("shrink");
    }

    PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, group)| *group)
}

/// Numeric or arbitrary-length value, e.g. `2` or `[3px]`.
fn is_width(value: &str) -> bool {
    if value.parse::<f32>().is_ok() {
        return true;
    }
    value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .is_some_and(|v| ["px", "rem", "em"].iter().any(|unit| v.ends_with(unit)))
}
