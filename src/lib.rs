//! Banner component: picks which slides a banner shows, in what order and how
//! many, and describes the wrapper and scrolling strip the presentation layer
//! renders them into.

pub mod banner;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod mode;
pub mod scan;
pub mod selector;
pub mod slide;
pub mod strip;
pub mod wrapper;

pub use banner::Banner;
pub use config::BannerConfig;
pub use error::{BannerError, Result};
pub use mode::{AnimationKind, SortMode};
pub use selector::{SlideSelector, select_slides};
pub use slide::{EnabledSlideSource, Slide, SlideGroup, SlideSource};
pub use strip::{StripItem, StripPlan};
pub use wrapper::{Attributes, WrapperHooks, component_class_names};
