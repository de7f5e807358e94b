//! Variant and size style tables.

use std::fmt;
use std::str::FromStr;

use htmldom::ClassList;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Classes present on every button regardless of variant and size.
///
/// Includes the focus-visible ring, the `aria-invalid` ring and the
/// disabled treatment.
pub const BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap \
    rounded-md text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 \
    [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 \
    outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] \
    aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 \
    aria-invalid:border-destructive";

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    /// Colour, border and background classes for this variant.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Destructive => {
                "bg-destructive text-white hover:bg-destructive/90 \
                 focus-visible:ring-destructive/20 dark:focus-visible:ring-destructive/40 \
                 dark:bg-destructive/60"
            }
            Self::Outline => {
                "border bg-background shadow-xs hover:bg-accent hover:text-accent-foreground \
                 dark:bg-input/30 dark:border-input dark:hover:bg-input/50"
            }
            Self::Secondary => "bg-secondary text-secondary-foreground hover:bg-secondary/80",
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground dark:hover:bg-accent/50",
            Self::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

/// Button size.
///
/// The `Icon*` sizes are square and carry no padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
    IconSm,
    IconLg,
}

impl Size {
    pub const ALL: [Size; 6] = [
        Self::Default,
        Self::Sm,
        Self::Lg,
        Self::Icon,
        Self::IconSm,
        Self::IconLg,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
            Self::IconSm => "icon-sm",
            Self::IconLg => "icon-lg",
        }
    }

    pub fn is_icon(self) -> bool {
        matches!(self, Self::Icon | Self::IconSm | Self::IconLg)
    }

    /// Height, width and padding classes for this size.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "h-9 px-4 py-2 has-[>svg]:px-3",
            Self::Sm => "h-8 rounded-md gap-1.5 px-3 has-[>svg]:px-2.5",
            Self::Lg => "h-10 rounded-md px-6 has-[>svg]:px-4",
            Self::Icon => "size-9",
            Self::IconSm => "size-8",
            Self::IconLg => "size-10",
        }
    }
}

/// Resolve the class list for a variant and size.
///
/// Base classes come first, then the variant's, then the size's. Variant
/// and size classes cover disjoint concerns and are concatenated as-is;
/// only exact duplicates are dropped.
pub fn button_variants(variant: Variant, size: Size) -> ClassList {
    let mut classes = ClassList::parse(BASE_CLASSES);
    classes.extend_str(variant.classes());
    classes.extend_str(size.classes());
    classes
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| ParseError::UnknownVariant(s.to_string()))
    }
}

impl FromStr for Size {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ParseError::UnknownSize(s.to_string()))
    }
}
