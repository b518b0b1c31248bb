//! Plant image loading with a generated fallback.
//!
//! A missing or unreadable image is never fatal: it is logged once and a
//! placeholder drawn in code takes its place.

use std::path::{Path, PathBuf};

use eframe::egui::ColorImage;
use image::imageops::FilterType;
use tracing::warn;

use crate::data::entity::EntityId;
use crate::error::{DashboardError, Result};

/// Decode an image and resize it to `size`×`size`.
pub fn load_plant_image(path: &Path, size: u32) -> Result<ColorImage> {
    let img = image::open(path).map_err(|source| DashboardError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = img.resize_exact(size, size, FilterType::Triangle).to_rgba8();
    let dims = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(dims, rgba.as_raw()))
}

/// A simple drawn plant: a stem with leaves spread (open) or folded (closed).
pub fn placeholder_image(size: u32, open: bool) -> ColorImage {
    let n = size.max(8) as usize;
    let mut rgba = vec![0u8; n * n * 4];
    let c = n as f32 / 2.0;
    let stem_half = (n as f32 / 40.0).max(1.0);
    let leaf_len = n as f32 * 0.32;
    let leaf_width = if open { n as f32 * 0.10 } else { n as f32 * 0.035 };
    let leaf_color: [u8; 4] = if open {
        [70, 170, 70, 255]
    } else {
        [60, 110, 60, 255]
    };

    for y in 0..n {
        for x in 0..n {
            let fx = x as f32 + 0.5;
            let fy = y as f32 + 0.5;
            let on_stem = (fx - c).abs() <= stem_half && fy >= c * 0.5;
            // Leaves are ellipses either side of the stem; folded leaves hug it.
            let dx = (fx - c).abs() - leaf_len * if open { 0.6 } else { 0.15 };
            let dy = fy - c * 0.8;
            let along = if open { leaf_len * 0.6 } else { leaf_width * 1.5 };
            let across = if open { leaf_width } else { leaf_len * 0.5 };
            let on_leaf = (dx / along).powi(2) + (dy / across).powi(2) <= 1.0;
            let px = if on_leaf {
                leaf_color
            } else if on_stem {
                [110, 80, 40, 255]
            } else {
                [0, 0, 0, 0]
            };
            let i = (y * n + x) * 4;
            rgba[i..i + 4].copy_from_slice(&px);
        }
    }
    ColorImage::from_rgba_unmultiplied([n, n], &rgba)
}

/// Open and closed pictures for one plant group.
pub struct PlantImages {
    pub open: ColorImage,
    pub closed: ColorImage,
}

impl PlantImages {
    /// Load `open_<suffix>.png` and `close_<suffix>.png` from `dir`, falling
    /// back to placeholders for whichever file cannot be read.
    pub fn load_or_placeholder(dir: &Path, id: EntityId, size: u32) -> Self {
        let (open_path, closed_path) = Self::paths(dir, id);
        Self {
            open: load_or_warn(&open_path, size, true),
            closed: load_or_warn(&closed_path, size, false),
        }
    }

    pub fn paths(dir: &Path, id: EntityId) -> (PathBuf, PathBuf) {
        let suffix = id.asset_suffix();
        (
            dir.join(format!("open_{suffix}.png")),
            dir.join(format!("close_{suffix}.png")),
        )
    }

    pub fn get(&self, open: bool) -> &ColorImage {
        if open {
            &self.open
        } else {
            &self.closed
        }
    }
}

fn load_or_warn(path: &Path, size: u32, open: bool) -> ColorImage {
    match load_plant_image(path, size) {
        Ok(img) => img,
        Err(e) => {
            warn!("{e}; using placeholder image");
            placeholder_image(size, open)
        }
    }
}
