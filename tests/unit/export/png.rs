use super::*;

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![255, 0, 0, 255, 64, 0, 0, 128],
        premultiplied: true,
    }
}

#[test]
fn png_decodes_with_straight_alpha() {
    let bytes = encode_png(&frame()).unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    let px = img.get_pixel(1, 0).0;
    assert_eq!(px[3], 128);
    assert!((126..=129).contains(&px[0]), "{px:?}");
}

#[test]
fn mismatched_buffer_is_a_render_error() {
    let mut f = frame();
    f.data.pop();
    let err = encode_png(&f).unwrap_err();
    assert!(err.to_string().starts_with("render error:"));
}

#[test]
fn data_url_round_trips() {
    let url = encode_data_url(&frame()).unwrap();
    assert!(url.starts_with("data:image/png;base64,"));
    let (mime, bytes) = decode_data_url(&url).unwrap();
    assert_eq!(mime, PNG_MIME);
    assert_eq!(bytes, encode_png(&frame()).unwrap());
}

#[test]
fn decode_rejects_non_data_urls() {
    assert!(decode_data_url("https://example.com/a.png").is_err());
    assert!(decode_data_url("data:image/png,abc").is_err());
    assert!(decode_data_url("data:image/png;base64,@@@").is_err());
}
