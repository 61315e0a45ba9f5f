//! Sort and animation modes of a banner.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// How the selected slides are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SortMode {
    /// Authored order of the children.
    #[default]
    Order,
    /// A fresh uniform permutation on every read.
    Random,
}

impl SortMode {
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Order => "Order",
            SortMode::Random => "Random",
        }
    }

    /// Lenient parse: anything that is not `random` sorts by order.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "random" => SortMode::Random,
            "order" | "" => SortMode::Order,
            other => {
                warn!(value = other, "unknown sort mode, using order");
                SortMode::Order
            }
        }
    }
}

impl From<String> for SortMode {
    fn from(value: String) -> Self {
        SortMode::parse(&value)
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Direction of the continuous scroll applied by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum AnimationKind {
    #[default]
    None,
    ScrollLeft,
    ScrollRight,
}

impl AnimationKind {
    pub fn label(&self) -> &'static str {
        match self {
            AnimationKind::None => "None",
            AnimationKind::ScrollLeft => "Scroll Left",
            AnimationKind::ScrollRight => "Scroll Right",
        }
    }

    /// CSS class the wrapper carries for this kind, if any.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            AnimationKind::None => None,
            AnimationKind::ScrollLeft => Some("scroll-left"),
            AnimationKind::ScrollRight => Some("scroll-right"),
        }
    }

    /// Lenient parse: empty or unknown values mean no animation type.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "scroll-left" => AnimationKind::ScrollLeft,
            "scroll-right" => AnimationKind::ScrollRight,
            "" | "none" => AnimationKind::None,
            other => {
                warn!(value = other, "unknown animation type, ignoring");
                AnimationKind::None
            }
        }
    }
}

impl From<String> for AnimationKind {
    fn from(value: String) -> Self {
        AnimationKind::parse(&value)
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
