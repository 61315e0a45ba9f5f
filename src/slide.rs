use std::path::PathBuf;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::banner::Banner;

/// Anything that can answer with the slides it currently shows.
///
/// Implemented by leaf slides, slide groups and nested banners so a banner can
/// aggregate heterogeneous children without knowing their concrete type.
pub trait EnabledSlideSource {
    /// Enabled slides in display order. Random sources draw from `rng`.
    fn enabled_slides<'a>(&'a self, rng: &mut dyn RngCore) -> Vec<&'a Slide>;

    /// Number of slides `enabled_slides` yields. Ordering never changes it,
    /// so no random source is needed.
    fn enabled_count(&self) -> usize;
}

fn enabled_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,

    #[serde(default = "enabled_default")]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    // Intrinsic image size in pixels, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Slide {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            enabled: true,
            image: None,
            caption: None,
            link: None,
            width: None,
            height: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<PathBuf>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Width of the slide once scaled to `strip_height`, keeping its aspect ratio.
    ///
    /// Slides without known dimensions are laid out as square tiles.
    pub fn rendered_width(&self, strip_height: u32) -> u32 {
        match (self.width, self.height) {
            (Some(w), Some(h)) if h > 0 => {
                let scaled = u64::from(w) * u64::from(strip_height) / u64::from(h);
                u32::try_from(scaled).unwrap_or(u32::MAX)
            }
            _ => strip_height,
        }
    }
}

impl EnabledSlideSource for Slide {
    fn enabled_slides<'a>(&'a self, _rng: &mut dyn RngCore) -> Vec<&'a Slide> {
        if self.enabled { vec![self] } else { Vec::new() }
    }

    fn enabled_count(&self) -> usize {
        usize::from(self.enabled)
    }
}

/// A titled group of slide sources, shown inline in the parent's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideGroup {
    pub title: String,

    #[serde(default = "enabled_default")]
    pub enabled: bool,

    #[serde(default)]
    pub slides: Vec<SlideSource>,
}

impl SlideGroup {
    pub fn new(title: impl Into<String>, slides: Vec<SlideSource>) -> Self {
        Self {
            title: title.into(),
            enabled: true,
            slides,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl EnabledSlideSource for SlideGroup {
    fn enabled_slides<'a>(&'a self, rng: &mut dyn RngCore) -> Vec<&'a Slide> {
        if !self.enabled {
            return Vec::new();
        }
        let mut slides = Vec::new();
        for source in &self.slides {
            slides.extend(source.enabled_slides(rng));
        }
        slides
    }

    fn enabled_count(&self) -> usize {
        if !self.enabled {
            return 0;
        }
        self.slides.iter().map(|source| source.enabled_count()).sum()
    }
}

/// A direct child of a banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SlideSource {
    Slide(Slide),
    Group(SlideGroup),
    Banner(Banner),
}

impl EnabledSlideSource for SlideSource {
    fn enabled_slides<'a>(&'a self, rng: &mut dyn RngCore) -> Vec<&'a Slide> {
        match self {
            SlideSource::Slide(slide) => slide.enabled_slides(rng),
            SlideSource::Group(group) => group.enabled_slides(rng),
            SlideSource::Banner(banner) => banner.enabled_slides(rng),
        }
    }

    fn enabled_count(&self) -> usize {
        match self {
            SlideSource::Slide(slide) => slide.enabled_count(),
            SlideSource::Group(group) => group.enabled_count(),
            SlideSource::Banner(banner) => banner.enabled_count(),
        }
    }
}

impl From<Slide> for SlideSource {
    fn from(slide: Slide) -> Self {
        SlideSource::Slide(slide)
    }
}

impl From<SlideGroup> for SlideSource {
    fn from(group: SlideGroup) -> Self {
        SlideSource::Group(group)
    }
}

impl From<Banner> for SlideSource {
    fn from(banner: Banner) -> Self {
        SlideSource::Banner(banner)
    }
}
