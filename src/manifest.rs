//! Banner manifests: one banner described as a TOML document.
//!
//! ```toml
//! id = 1
//! title = "Home"
//!
//! [options]
//! sort_by = "random"
//! number_of_slides = 3
//! animate = true
//! animation_type = "scroll-left"
//!
//! [[slides]]
//! kind = "slide"
//! title = "Harbour"
//! image = "harbour.jpg"
//! ```

use std::fs;
use std::path::Path;

use tracing::info;

use crate::banner::Banner;
use crate::error::{BannerError, Result};
use crate::slide::SlideSource;

pub fn parse_manifest(content: &str, path: &Path) -> Result<Banner> {
    let mut banner: Banner = toml::from_str(content).map_err(|source| BannerError::Manifest {
        path: path.to_path_buf(),
        source,
    })?;
    normalize_options(&mut banner);
    Ok(banner)
}

// Nested banners carry their own options.
fn normalize_options(banner: &mut Banner) {
    banner.options.normalize();
    for child in &mut banner.children {
        normalize_source(child);
    }
}

fn normalize_source(source: &mut SlideSource) {
    match source {
        SlideSource::Slide(_) => {}
        SlideSource::Group(group) => {
            for child in &mut group.slides {
                normalize_source(child);
            }
        }
        SlideSource::Banner(nested) => normalize_options(nested),
    }
}

/// Load a banner from a manifest file.
///
/// Relative slide image paths are resolved against the manifest's directory.
pub fn load_manifest(path: &Path) -> Result<Banner> {
    let content = fs::read_to_string(path).map_err(|e| BannerError::io(path, e))?;
    let mut banner = parse_manifest(&content, path)?;
    if let Some(base) = path.parent() {
        resolve_images(&mut banner, base);
    }
    info!(
        path = %path.display(),
        banner = banner.id,
        children = banner.children.len(),
        "loaded banner manifest"
    );
    Ok(banner)
}

fn resolve_images(banner: &mut Banner, base: &Path) {
    for child in &mut banner.children {
        resolve_source(child, base);
    }
}

fn resolve_source(source: &mut SlideSource, base: &Path) {
    match source {
        SlideSource::Slide(slide) => {
            if let Some(image) = slide.image.as_mut() {
                if image.is_relative() {
                    *image = base.join(&*image);
                }
            }
        }
        SlideSource::Group(group) => {
            for child in &mut group.slides {
                resolve_source(child, base);
            }
        }
        SlideSource::Banner(nested) => resolve_images(nested, base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{AnimationKind, SortMode};
    use std::path::PathBuf;

    const MANIFEST: &str = r#"
id = 7
title = "Partners"

[options]
sort_by = "random"
number_of_slides = 2
animate = true
animation_type = "scroll-right"
animation_duration = 45

[[slides]]
kind = "slide"
title = "First"
image = "first.jpg"
width = 640
height = 320

[[slides]]
kind = "slide"
title = "Hidden"
enabled = false

[[slides]]
kind = "group"
title = "Sponsors"

[[slides.slides]]
kind = "slide"
title = "Sponsor A"

[[slides]]
kind = "banner"
id = 8
title = "Nested"

[slides.options]
number_of_slides = 1

[[slides.slides]]
kind = "slide"
title = "Nested A"
"#;

    #[test]
    fn parses_full_manifest() {
        let banner = parse_manifest(MANIFEST, Path::new("partners.toml")).unwrap();
        assert_eq!(banner.id, 7);
        assert_eq!(banner.options.sort_by, SortMode::Random);
        assert_eq!(banner.options.limit(), Some(2));
        assert_eq!(banner.options.animation_class(), AnimationKind::ScrollRight);
        assert_eq!(banner.options.animation_duration, 45);
        assert_eq!(banner.children.len(), 4);

        match &banner.children[1] {
            SlideSource::Slide(slide) => assert!(!slide.enabled),
            other => panic!("expected slide, got {:?}", other),
        }
        match &banner.children[3] {
            SlideSource::Banner(nested) => {
                assert_eq!(nested.id, 8);
                assert_eq!(nested.options.limit(), Some(1));
                assert_eq!(nested.options.animation_duration, 20);
            }
            other => panic!("expected banner, got {:?}", other),
        }
    }

    #[test]
    fn unknown_values_are_normalized() {
        let banner = parse_manifest(
            r#"
[options]
sort_by = "shuffle"
number_of_slides = -3
animation_type = "fade"
"#,
            Path::new("m.toml"),
        )
        .unwrap();
        assert_eq!(banner.options.sort_by, SortMode::Order);
        assert_eq!(banner.options.number_of_slides, 0);
        assert_eq!(banner.options.limit(), None);
        assert_eq!(banner.options.animation_type, AnimationKind::None);
        assert!(banner.children.is_empty());
    }

    #[test]
    fn nested_negative_limits_are_cleared() {
        let banner = parse_manifest(
            r#"
[[slides]]
kind = "group"
title = "g"

[[slides.slides]]
kind = "banner"
title = "inner"

[slides.slides.options]
number_of_slides = -1
"#,
            Path::new("m.toml"),
        )
        .unwrap();
        let SlideSource::Group(group) = &banner.children[0] else {
            panic!("expected a group");
        };
        let SlideSource::Banner(inner) = &group.slides[0] else {
            panic!("expected a nested banner");
        };
        assert_eq!(inner.options.number_of_slides, 0);
    }

    #[test]
    fn syntax_errors_carry_the_path() {
        let err = parse_manifest("id = = 1", Path::new("broken.toml")).unwrap_err();
        assert!(matches!(err, BannerError::Manifest { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn load_resolves_relative_images() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner.toml");
        fs::write(&path, MANIFEST).unwrap();

        let banner = load_manifest(&path).unwrap();
        match &banner.children[0] {
            SlideSource::Slide(slide) => {
                assert_eq!(slide.image, Some(dir.path().join(PathBuf::from("first.jpg"))))
            }
            other => panic!("expected slide, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_manifest(Path::new("/nonexistent/banner.toml")).unwrap_err();
        assert!(matches!(err, BannerError::Io { .. }));
    }
}
