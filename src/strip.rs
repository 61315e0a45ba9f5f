//! Layout of the horizontal slide strip.
//!
//! An animated banner scrolls its strip forever. To make the loop seamless the
//! strip is measured first, then appended once more right after itself, so
//! when the animation wraps the copy sits exactly where the original started.

use crate::banner::Banner;
use crate::mode::AnimationKind;
use crate::slide::Slide;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripItem {
    /// Position of the slide in the selection.
    pub index: usize,
    pub offset: u64,
    pub width: u32,
    /// True for the appended copy of the strip.
    pub duplicate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripPlan {
    /// Sum of the original slide widths, measured before duplication.
    pub content_width: u64,
    pub items: Vec<StripItem>,
    /// Whether the strip scrolls; an animated strip is laid out twice.
    pub animated: bool,
    pub direction: AnimationKind,
    /// Cycle length, when one is set. Only timing depends on it.
    pub cycle_seconds: Option<u32>,
}

impl StripPlan {
    /// Lay out slides of the given widths.
    pub fn from_widths(
        widths: &[u32],
        animated: bool,
        direction: AnimationKind,
        cycle_seconds: Option<u32>,
    ) -> Self {
        let content_width: u64 = widths.iter().map(|w| u64::from(*w)).sum();

        let copies = if animated { 2 } else { 1 };
        let mut items = Vec::with_capacity(widths.len() * copies);
        let mut offset = 0u64;
        for copy in 0..copies {
            for (index, width) in widths.iter().enumerate() {
                items.push(StripItem {
                    index,
                    offset,
                    width: *width,
                    duplicate: copy > 0,
                });
                offset += u64::from(*width);
            }
        }

        Self {
            content_width,
            items,
            animated,
            direction,
            cycle_seconds,
        }
    }

    /// Plan the strip for `selected` slides of `banner` rendered at `strip_height`.
    pub fn for_selection(banner: &Banner, selected: &[&Slide], strip_height: u32) -> Self {
        let widths: Vec<u32> = selected
            .iter()
            .map(|slide| slide.rendered_width(strip_height))
            .collect();
        let options = &banner.options;
        Self::from_widths(
            &widths,
            options.animate,
            options.animation_class(),
            options.cycle_seconds(),
        )
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Total width of everything laid out, copies included.
    pub fn total_width(&self) -> u64 {
        self.items
            .last()
            .map(|item| item.offset + u64::from(item.width))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BannerConfig;

    #[test]
    fn static_strip_is_not_duplicated() {
        let plan = StripPlan::from_widths(&[100, 50, 25], false, AnimationKind::None, None);
        assert_eq!(plan.content_width, 175);
        assert_eq!(plan.items.len(), 3);
        assert!(plan.items.iter().all(|i| !i.duplicate));
        assert_eq!(plan.items[2].offset, 150);
        assert_eq!(plan.total_width(), 175);
    }

    #[test]
    fn animated_strip_appends_one_copy() {
        let plan = StripPlan::from_widths(&[100, 50, 25], true, AnimationKind::ScrollLeft, Some(20));
        assert_eq!(plan.content_width, 175);
        assert_eq!(plan.items.len(), 6);
        let copy = &plan.items[3..];
        assert!(copy.iter().all(|i| i.duplicate));
        assert_eq!(copy[0].offset, plan.content_width);
        for (original, clone) in plan.items[..3].iter().zip(copy) {
            assert_eq!(clone.index, original.index);
            assert_eq!(clone.offset, original.offset + plan.content_width);
        }
        assert_eq!(plan.total_width(), 350);
    }

    #[test]
    fn empty_selection() {
        let plan = StripPlan::from_widths(&[], true, AnimationKind::ScrollRight, Some(10));
        assert_eq!(plan.content_width, 0);
        assert!(plan.items.is_empty());
        assert_eq!(plan.total_width(), 0);
    }

    #[test]
    fn selection_uses_rendered_widths() {
        let banner = Banner::new(1, "b")
            .with_options(BannerConfig::default().with_animation(AnimationKind::ScrollRight, 15));
        let a = Slide::new("a").with_size(400, 200);
        let b = Slide::new("b");
        let plan = StripPlan::for_selection(&banner, &[&a, &b], 100);
        assert_eq!(plan.content_width, 300);
        assert_eq!(plan.direction, AnimationKind::ScrollRight);
        assert_eq!(plan.cycle_seconds, Some(15));
        assert!(plan.is_animated());
    }

    #[test]
    fn zero_duration_still_loops() {
        let banner = Banner::new(1, "b")
            .with_options(BannerConfig::default().with_animation(AnimationKind::ScrollLeft, 0));
        let only = Slide::new("only").with_size(300, 100);
        let plan = StripPlan::for_selection(&banner, &[&only], 100);
        assert!(plan.is_animated());
        assert_eq!(plan.items.len(), 2);
        assert!(plan.items[1].duplicate);
        assert_eq!(plan.direction, AnimationKind::ScrollLeft);
        assert_eq!(plan.cycle_seconds, None);
    }

    #[test]
    fn animate_off_stays_static() {
        let banner = Banner::new(1, "b").with_options(BannerConfig {
            animation_type: AnimationKind::ScrollRight,
            ..Default::default()
        });
        let only = Slide::new("only");
        let plan = StripPlan::for_selection(&banner, &[&only], 100);
        assert!(!plan.is_animated());
        assert_eq!(plan.items.len(), 1);
        assert_eq!(plan.direction, AnimationKind::None);
    }
}
