//! Gallery manifest generation over a flattened photos directory.

use photo_prep::{manifest, AppConfig, AppError};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_root(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    let dir = std::env::temp_dir().join(format!(
        "photo_prep_{}_{}_{}",
        tag,
        std::process::id(),
        nanos
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn config_for(root: &Path) -> AppConfig {
    AppConfig {
        photos_dir: root.display().to_string(),
        ..AppConfig::default()
    }
}

fn webp_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([40, 90, 160, 255]));
    let config = zenwebp::EncoderConfig::with_preset(zenwebp::Preset::Photo, 95.0);
    zenwebp::EncodeRequest::new(
        &config,
        img.as_raw(),
        zenwebp::PixelLayout::Rgba8,
        width,
        height,
    )
    .encode()
    .unwrap()
}

#[test]
fn build_sorts_by_file_name_and_reads_dimensions() {
    let root = temp_root("manifest_sort");
    fs::write(root.join("b.webp"), webp_bytes(300, 200)).unwrap();
    fs::write(root.join("a.webp"), webp_bytes(120, 80)).unwrap();

    let entries = manifest::build(&config_for(&root)).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].file, "a.webp");
    assert_eq!(entries[0].url, "/photos/a.webp");
    assert_eq!((entries[0].width, entries[0].height), (120, 80));
    assert_eq!(entries[1].file, "b.webp");
    assert_eq!((entries[1].width, entries[1].height), (300, 200));

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn build_ignores_everything_but_top_level_webps() {
    let root = temp_root("manifest_filter");
    fs::create_dir(root.join("nested")).unwrap();
    fs::write(root.join("nested").join("deep.webp"), webp_bytes(10, 10)).unwrap();
    fs::write(root.join("photo.webp"), webp_bytes(10, 10)).unwrap();
    fs::write(root.join("notes.txt"), b"hello").unwrap();
    fs::write(root.join("raw.jpg"), b"not listed").unwrap();

    let entries = manifest::build(&config_for(&root)).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file, "photo.webp");

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn build_joins_urls_without_doubling_slashes() {
    let root = temp_root("manifest_prefix");
    fs::write(root.join("a.webp"), webp_bytes(10, 10)).unwrap();

    let mut config = config_for(&root);
    config.site_prefix = "/gallery/".to_string();
    let entries = manifest::build(&config).unwrap();

    assert_eq!(entries[0].url, "/gallery/a.webp");

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn build_fails_on_a_corrupt_webp() {
    let root = temp_root("manifest_corrupt");
    fs::write(root.join("bad.webp"), b"RIFF but not really a webp").unwrap();

    let err = manifest::build(&config_for(&root)).unwrap_err();
    assert!(matches!(err, AppError::WebpDecode(_)));

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn manifest_serializes_with_the_fields_the_page_reads() {
    let root = temp_root("manifest_json");
    fs::write(root.join("a.webp"), webp_bytes(32, 20)).unwrap();

    let entries = manifest::build(&config_for(&root)).unwrap();
    let json = serde_json::to_value(&entries).unwrap();

    assert_eq!(json[0]["url"], "/photos/a.webp");
    assert_eq!(json[0]["file"], "a.webp");
    assert_eq!(json[0]["width"], 32);
    assert_eq!(json[0]["height"], 20);

    let _ = fs::remove_dir_all(&root);
}
