//! Banner options as they are persisted and edited.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::DEFAULT_ANIMATION_DURATION;
use crate::mode::{AnimationKind, SortMode};

/// Options of one banner.
///
/// Values are stored as authored; accessors such as [`BannerConfig::limit`] normalize them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub sort_by: SortMode,
    /// Maximum number of slides shown. Zero or negative means no limit.
    pub number_of_slides: i64,
    pub animate: bool,
    pub animation_type: AnimationKind,
    /// Length of one scroll cycle in seconds.
    pub animation_duration: u32,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            sort_by: SortMode::Order,
            number_of_slides: 0,
            animate: false,
            animation_type: AnimationKind::None,
            animation_duration: DEFAULT_ANIMATION_DURATION,
        }
    }
}

impl BannerConfig {
    /// Number of slides to keep, or `None` when the selection is unbounded.
    pub fn limit(&self) -> Option<usize> {
        match self.number_of_slides {
            n if n <= 0 => None,
            n => Some(usize::try_from(n).unwrap_or(usize::MAX)),
        }
    }

    /// Rewrite stored values that `limit` would otherwise reinterpret on every
    /// read. Returns whether anything changed.
    pub fn normalize(&mut self) -> bool {
        if self.number_of_slides >= 0 {
            return false;
        }
        warn!(
            number_of_slides = self.number_of_slides,
            "negative slide limit, treating as unbounded"
        );
        self.number_of_slides = 0;
        true
    }

    /// Animation applied by the presentation layer; `None` whenever animation is off.
    pub fn animation_class(&self) -> AnimationKind {
        if self.animate {
            self.animation_type
        } else {
            AnimationKind::None
        }
    }

    /// Cycle duration when the banner animates and a duration is set.
    pub fn cycle_seconds(&self) -> Option<u32> {
        (self.animate && self.animation_duration > 0).then_some(self.animation_duration)
    }

    pub fn with_sort(mut self, sort_by: SortMode) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_limit(mut self, number_of_slides: i64) -> Self {
        self.number_of_slides = number_of_slides;
        self
    }

    pub fn with_animation(mut self, kind: AnimationKind, duration: u32) -> Self {
        self.animate = true;
        self.animation_type = kind;
        self.animation_duration = duration;
        self
    }
}
