use std::path::Path;

use image::{ImageBuffer, Rgb};
use photon_core::metadata::{extract_metadata, format_file_size, ImageFormat};

#[test]
fn test_extract_from_real_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.png");
    ImageBuffer::from_pixel(10, 10, Rgb([10u8, 20, 30]))
        .save(&path)
        .unwrap();

    let meta = extract_metadata(&path).unwrap();
    assert_eq!(meta.filename, "sample.png");
    assert_eq!(meta.format, ImageFormat::Png);
    assert_eq!((meta.width, meta.height), (10, 10));
    assert_eq!(meta.bits_per_pixel, 24);
    assert!(meta.file_size > 0);
    assert!(meta.modified.is_some());
    assert!(meta.filepath.ends_with("sample.png"));
}

#[test]
fn test_missing_file_degrades_to_zeroed_fields() {
    let meta = extract_metadata(Path::new("/no/such/dir/ghost.jpeg")).unwrap();
    assert_eq!(meta.filename, "ghost.jpeg");
    assert_eq!(meta.format, ImageFormat::Jpeg);
    assert_eq!((meta.width, meta.height), (0, 0));
    assert_eq!(meta.file_size, 0);
    assert_eq!(meta.bits_per_pixel, 0);
    assert!(meta.created.is_none());
    assert!(meta.modified.is_none());
}

#[test]
fn test_traversal_path_yields_nothing() {
    assert!(extract_metadata(Path::new("../etc/passwd")).is_none());
}

#[test]
fn test_oversized_file_loses_stat_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.bmp");
    let file = std::fs::File::create(&path).unwrap();
    file.set_len(150 * 1024 * 1024).unwrap();

    let meta = extract_metadata(&path).unwrap();
    assert_eq!(meta.format, ImageFormat::Bmp);
    assert_eq!(meta.file_size, 0);
    assert_eq!((meta.width, meta.height), (0, 0));
    assert!(meta.modified.is_none());
}

#[test]
fn test_basename_handles_both_separator_conventions() {
    let meta = extract_metadata(Path::new("some/dir/tree.gif")).unwrap();
    assert_eq!(meta.filename, "tree.gif");

    // A backslash is not a separator on Unix, but basenames still split
    // on it for display purposes.
    let meta = extract_metadata(Path::new("dir\\nested\\leaf.png")).unwrap();
    assert_eq!(meta.filename, "leaf.png");

    let meta = extract_metadata(Path::new("bare.bmp")).unwrap();
    assert_eq!(meta.filename, "bare.bmp");
}

#[test]
fn test_basename_is_sanitized() {
    let meta = extract_metadata(Path::new("dir/we?ird<shot>.png")).unwrap();
    assert_eq!(meta.filename, "we_ird_shot_.png");
}

#[test]
fn test_format_from_extension() {
    assert_eq!(ImageFormat::from_path(Path::new("a.PNG")), ImageFormat::Png);
    assert_eq!(ImageFormat::from_path(Path::new("a.JpG")), ImageFormat::Jpeg);
    assert_eq!(ImageFormat::from_path(Path::new("a.jpeg")), ImageFormat::Jpeg);
    assert_eq!(ImageFormat::from_path(Path::new("a.bmp")), ImageFormat::Bmp);
    assert_eq!(ImageFormat::from_path(Path::new("a.gif")), ImageFormat::Gif);
    assert_eq!(
        ImageFormat::from_path(Path::new("a.tiff")),
        ImageFormat::Unknown
    );
    assert_eq!(
        ImageFormat::from_path(Path::new("noextension")),
        ImageFormat::Unknown
    );
    assert_eq!(
        ImageFormat::from_path(Path::new("a.waytoolongextension")),
        ImageFormat::Unknown
    );
}

#[test]
fn test_format_file_size_units() {
    assert_eq!(format_file_size(0), "0.0 B");
    assert_eq!(format_file_size(512), "512.0 B");
    assert_eq!(format_file_size(2048), "2.0 KB");
    assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
}
