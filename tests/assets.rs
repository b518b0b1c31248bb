use std::path::Path;

use mimosa_energy::assets::{load_plant_image, placeholder_image, PlantImages};
use mimosa_energy::{DashboardError, EntityId};

#[test]
fn image_paths_follow_group_suffix() {
    let dir = Path::new("images");
    let (open, closed) = PlantImages::paths(dir, EntityId::HundredPlants);
    assert_eq!(open, dir.join("open_100.png"));
    assert_eq!(closed, dir.join("close_100.png"));
    let (open, _) = PlantImages::paths(dir, EntityId::Custom);
    assert_eq!(open, dir.join("open_custom.png"));
}

#[test]
fn missing_image_is_an_error_with_path() {
    let path = Path::new("no/such/dir/open_1.png");
    match load_plant_image(path, 200) {
        Err(DashboardError::Image { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected image error, got {:?}", other.map(|i| i.size)),
    }
}

#[test]
fn missing_images_fall_back_to_placeholders() {
    let images = PlantImages::load_or_placeholder(Path::new("no/such/dir"), EntityId::SinglePlant, 64);
    assert_eq!(images.open.size, [64, 64]);
    assert_eq!(images.closed.size, [64, 64]);
    assert_ne!(images.get(true).pixels, images.get(false).pixels);
}

#[test]
fn placeholder_is_square_and_not_blank() {
    let img = placeholder_image(32, true);
    assert_eq!(img.size, [32, 32]);
    assert!(img.pixels.iter().any(|p| p.a() > 0));
}

#[test]
fn loaded_image_is_resized() {
    let dir = std::env::temp_dir().join(format!("mimosa_energy_assets_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("open_1.png");
    image::RgbaImage::from_pixel(17, 9, image::Rgba([10, 200, 30, 255]))
        .save(&path)
        .unwrap();

    let img = load_plant_image(&path, 200).unwrap();
    let _ = std::fs::remove_dir_all(&dir);
    assert_eq!(img.size, [200, 200]);
}
