use ndarray::Array2;

use fraktur_core::color::{pack, Rgb};
use fraktur_core::export::{save_frame, save_png};
use fraktur_core::frame::Frame;

fn test_frame() -> Frame {
    let pixels = Array2::from_shape_fn((4, 6), |(y, x)| {
        pack(Rgb {
            r: (x * 40) as u8,
            g: (y * 60) as u8,
            b: 7,
        })
    });
    Frame::new(pixels)
}

#[test]
fn test_save_png_round_trips_pixels() {
    let frame = test_frame();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");

    save_png(&frame, &path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (6, 4));
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 7, 255]);
    assert_eq!(img.get_pixel(5, 3).0, [200, 180, 7, 255]);
}

#[test]
fn test_save_frame_dispatches_on_extension() {
    let frame = test_frame();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");

    save_frame(&frame, &path).unwrap();
    assert!(path.exists());

    let img = image::open(&path).unwrap();
    assert_eq!(img.width(), 6);
}

#[test]
fn test_rgba_byte_view_matches_packing() {
    let frame = test_frame();
    let bytes = frame.rgba_bytes();
    assert_eq!(bytes.len(), 4 * 6 * 4);
    // First pixel: r=0, g=0, b=7, a=255.
    assert_eq!(&bytes[0..4], &[0, 0, 7, 255]);
}
