use super::*;

fn frame(premultiplied: bool) -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![255, 255, 255, 255, 64, 0, 0, 128],
        premultiplied,
    }
}

#[test]
fn pixel_is_bounds_checked() {
    let f = frame(true);
    assert_eq!(f.pixel(1, 0), Some([64, 0, 0, 128]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 1), None);
}

#[test]
fn straight_alpha_unpremultiplies_partial_pixels() {
    let out = frame(true).to_straight_rgba();
    assert_eq!(&out[..4], &[255, 255, 255, 255]);
    assert_eq!(&out[4..], &[128, 0, 0, 128]);
    assert_eq!(frame(false).to_straight_rgba(), frame(false).data);
}

#[test]
fn write_png_creates_parent_dirs() {
    let dir = std::env::temp_dir().join(format!("charade_frame_{}", std::process::id()));
    let path = dir.join("nested").join("out.png");
    frame(true).write_png(&path).unwrap();
    assert!(path.is_file());
    let _ = std::fs::remove_dir_all(&dir);
}
