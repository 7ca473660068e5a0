use std::fs::File;
use std::io::Write;
use std::path::Path;

use image::{ImageBuffer, Luma, Rgb};
use photon_core::error::PhotonError;
use photon_core::loader::load_image;

#[test]
fn test_load_small_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tiny.png");
    ImageBuffer::from_pixel(10, 10, Rgb([1u8, 2, 3]))
        .save(&path)
        .unwrap();

    let img = load_image(&path).unwrap();
    assert_eq!((img.width, img.height), (10, 10));
    assert_eq!(img.pixels.len(), 10 * 10 * 4);
    // First pixel survived the RGBA conversion.
    assert_eq!(&img.pixels[..4], &[1, 2, 3, 255]);
}

#[test]
fn test_traversal_rejected_before_any_io() {
    // The file exists, but the path spells it with a `..` component, so
    // the validator fires before the filesystem is ever consulted.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ok.png");
    ImageBuffer::from_pixel(4, 4, Rgb([0u8, 0, 0]))
        .save(&path)
        .unwrap();

    let dodged = dir.path().join("sub/../ok.png");
    assert_eq!(load_image(&dodged).unwrap_err(), PhotonError::AccessDenied);

    assert_eq!(
        load_image(Path::new("../etc/passwd")).unwrap_err(),
        PhotonError::AccessDenied
    );
}

#[test]
fn test_missing_file_is_access_denied() {
    assert_eq!(
        load_image(Path::new("/no/such/dir/ghost.png")).unwrap_err(),
        PhotonError::AccessDenied
    );
}

#[test]
fn test_oversized_file_rejected_before_decode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.png");
    let file = File::create(&path).unwrap();
    // Sparse: the size check fires on the stat, long before any decode.
    file.set_len(150 * 1024 * 1024).unwrap();

    assert_eq!(load_image(&path).unwrap_err(), PhotonError::FileTooLarge);
}

#[test]
fn test_undecodable_bytes_are_access_denied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.png");
    let mut file = File::create(&path).unwrap();
    file.write_all(b"this is not a png").unwrap();

    assert_eq!(load_image(&path).unwrap_err(), PhotonError::AccessDenied);
}

#[test]
fn test_dimension_cap_rejects_extreme_images() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strip.png");
    ImageBuffer::from_pixel(40_000, 1, Luma([128u8]))
        .save(&path)
        .unwrap();

    assert_eq!(load_image(&path).unwrap_err(), PhotonError::InvalidInput);
}
