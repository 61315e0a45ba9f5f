use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag};
use tracing::{debug, info, warn};

use crate::banner::Banner;
use crate::config::BannerConfig;
use crate::constants::IMAGE_EXTENSIONS;
use crate::error::{BannerError, Result};
use crate::slide::Slide;

/// Metadata read from an image file's EXIF block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMeta {
    pub path: PathBuf,
    /// EXIF orientation, 1 when absent.
    pub orientation: u32,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ImageMeta {
    /// Pixel size as displayed, with width and height swapped for 90° rotations.
    pub fn display_size(&self) -> Option<(u32, u32)> {
        let (w, h) = (self.width?, self.height?);
        match self.orientation {
            // 5-8 are transposed or rotated by a quarter turn
            5..=8 => Some((h, w)),
            _ => Some((w, h)),
        }
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

// --- List image files, sorted by file name ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    if !dir_path.is_dir() {
        return Err(BannerError::NotADirectory(dir_path.to_path_buf()));
    }

    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path).map_err(|e| BannerError::io(dir_path, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| BannerError::io(dir_path, e))?;
        let path = entry.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(BannerError::NoImages(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

// --- Read orientation and pixel dimensions from EXIF ---
pub fn read_image_meta(image_path: &Path) -> Result<ImageMeta> {
    let mut meta = ImageMeta {
        path: image_path.to_path_buf(),
        orientation: 1,
        width: None,
        height: None,
    };

    // EXIF is only read reliably from JPEG containers
    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension != "jpg" && extension != "jpeg" {
        return Ok(meta);
    }

    let file_bytes = fs::read(image_path).map_err(|e| BannerError::io(image_path, e))?;
    match Reader::new().read_from_container(&mut Cursor::new(&file_bytes)) {
        Ok(exif) => {
            let uint = |tag| {
                exif.get_field(tag, In::PRIMARY)
                    .and_then(|field| field.value.get_uint(0))
            };
            meta.orientation = uint(Tag::Orientation).unwrap_or(1);
            meta.width = uint(Tag::PixelXDimension);
            meta.height = uint(Tag::PixelYDimension);
            debug!(path = %image_path.display(), ?meta, "read exif");
        }
        Err(e) => {
            // Not fatal: the slide is laid out without known dimensions
            warn!(path = %image_path.display(), error = %e, "could not read EXIF data");
        }
    }
    Ok(meta)
}

pub fn slide_from_image(meta: &ImageMeta) -> Slide {
    let title = meta
        .path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let slide = Slide::new(title).with_image(meta.path.clone());
    match meta.display_size() {
        Some((w, h)) => slide.with_size(w, h),
        None => slide,
    }
}

/// Build a banner whose slides are the images of `dir_path`, in file name order.
pub fn banner_from_dir(dir_path: &Path, options: BannerConfig) -> Result<Banner> {
    let paths = load_sorted_image_paths(dir_path)?;
    let mut banner = Banner::new(0, dir_path.display().to_string()).with_options(options);
    for path in &paths {
        let meta = read_image_meta(path)?;
        banner.push(slide_from_image(&meta));
    }
    info!(dir = %dir_path.display(), slides = paths.len(), "scanned banner images");
    Ok(banner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"not really an image").unwrap();
    }

    #[test]
    fn lists_images_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.PNG");
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "c.gif");
        fs::create_dir(dir.path().join("d.png")).unwrap();

        let names: Vec<_> = load_sorted_image_paths(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.jpg", "b.PNG", "c.gif"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "readme.md");
        assert!(matches!(
            load_sorted_image_paths(dir.path()),
            Err(BannerError::NoImages(_))
        ));
    }

    #[test]
    fn file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.png");
        assert!(matches!(
            load_sorted_image_paths(&dir.path().join("a.png")),
            Err(BannerError::NotADirectory(_))
        ));
    }

    #[test]
    fn unreadable_exif_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "broken.jpg");
        let meta = read_image_meta(&dir.path().join("broken.jpg")).unwrap();
        assert_eq!(meta.orientation, 1);
        assert_eq!(meta.display_size(), None);
    }

    #[test]
    fn rotated_images_swap_dimensions() {
        let meta = ImageMeta {
            path: PathBuf::from("x.jpg"),
            orientation: 6,
            width: Some(400),
            height: Some(300),
        };
        assert_eq!(meta.display_size(), Some((300, 400)));
        let upright = ImageMeta { orientation: 1, ..meta };
        assert_eq!(upright.display_size(), Some((400, 300)));
    }

    #[test]
    fn directory_becomes_enabled_slides() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "02-harbour.png");
        touch(dir.path(), "01-beach.png");

        let banner = banner_from_dir(dir.path(), BannerConfig::default()).unwrap();
        let titles: Vec<_> = banner
            .children
            .iter()
            .map(|child| match child {
                crate::slide::SlideSource::Slide(slide) => {
                    assert!(slide.enabled);
                    slide.title.clone()
                }
                other => panic!("unexpected source {:?}", other),
            })
            .collect();
        assert_eq!(titles, ["01-beach", "02-harbour"]);
    }
}
