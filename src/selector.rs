//! Slide selection: collect enabled slides, order them, apply the limit.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use crate::banner::Banner;
use crate::mode::{AnimationKind, SortMode};
use crate::slide::{EnabledSlideSource, Slide};

/// Run the selection pipeline for `banner`, drawing any shuffle from `rng`.
///
/// Children are flattened in order, then sorted per the banner's sort mode and
/// truncated to its limit. Never fails; no enabled slides yields an empty vector.
pub fn select_slides<'a>(banner: &'a Banner, rng: &mut dyn RngCore) -> Vec<&'a Slide> {
    let mut slides: Vec<&Slide> = Vec::new();
    for source in banner.slides() {
        slides.extend(source.enabled_slides(rng));
    }
    let collected = slides.len();

    if banner.options.sort_by == SortMode::Random {
        slides.shuffle(rng);
    }

    if let Some(limit) = banner.options.limit() {
        slides.truncate(limit);
    }

    debug!(
        banner = banner.id,
        collected,
        selected = slides.len(),
        sort = %banner.options.sort_by,
        "selected slides"
    );
    slides
}

/// Selects slides for banners using an owned random source.
///
/// The source only matters for banners sorted at random; seeded selectors
/// reproduce the same permutations.
pub struct SlideSelector<R: RngCore = StdRng> {
    rng: R,
}

impl SlideSelector<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for SlideSelector<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> SlideSelector<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn select<'a>(&mut self, banner: &'a Banner) -> Vec<&'a Slide> {
        select_slides(banner, &mut self.rng)
    }

    /// Whether `select` would return anything. Leaves the random source untouched.
    pub fn has_slides(&self, banner: &Banner) -> bool {
        banner.enabled_count() > 0
    }

    pub fn animation_class(&self, banner: &Banner) -> AnimationKind {
        banner.options.animation_class()
    }
}
