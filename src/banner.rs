use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::config::BannerConfig;
use crate::constants::{HTML_ID_PREFIX, WRAPPER_ID_SUFFIX};
use crate::selector::select_slides;
use crate::slide::{EnabledSlideSource, Slide, SlideSource};

/// A banner component: configuration plus the slide sources it aggregates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub options: BannerConfig,
    #[serde(default, rename = "slides")]
    pub children: Vec<SlideSource>,

    #[serde(skip)]
    slides_override: Option<Vec<SlideSource>>,
}

impl Banner {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_options(mut self, options: BannerConfig) -> Self {
        self.options = options;
        self
    }

    pub fn with_children(mut self, children: Vec<SlideSource>) -> Self {
        self.children = children;
        self
    }

    pub fn push(&mut self, child: impl Into<SlideSource>) {
        self.children.push(child.into());
    }

    /// Replace the children as the slide source without touching them.
    pub fn set_slides(&mut self, slides: Vec<SlideSource>) {
        self.slides_override = Some(slides);
    }

    pub fn clear_slides(&mut self) {
        self.slides_override = None;
    }

    /// Sources the selection reads from: the override when set, else the children.
    pub fn slides(&self) -> &[SlideSource] {
        self.slides_override.as_deref().unwrap_or(&self.children)
    }

    pub fn html_id(&self) -> String {
        format!("{}_{}", HTML_ID_PREFIX, self.id)
    }

    pub fn wrapper_id(&self) -> String {
        format!("{}{}", self.html_id(), WRAPPER_ID_SUFFIX)
    }

    pub fn wrapper_css_id(&self) -> String {
        format!("#{}", self.wrapper_id())
    }
}

impl EnabledSlideSource for Banner {
    // A nested banner contributes its own selection (own sort and limit).
    fn enabled_slides<'a>(&'a self, rng: &mut dyn RngCore) -> Vec<&'a Slide> {
        select_slides(self, rng)
    }

    fn enabled_count(&self) -> usize {
        let collected: usize = self.slides().iter().map(|source| source.enabled_count()).sum();
        match self.options.limit() {
            Some(limit) => collected.min(limit),
            None => collected,
        }
    }
}
