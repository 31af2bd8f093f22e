use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::foundation::error::{GenartError, GenartResult};
use crate::render::surface::FrameRGBA;

/// MIME type of [`encode_png`] output.
pub const PNG_MIME: &str = "image/png";

/// Encode `frame` as PNG with straight alpha.
pub fn encode_png(frame: &FrameRGBA) -> GenartResult<Vec<u8>> {
    let straight = frame.to_straight();
    let img = image::RgbaImage::from_raw(straight.width, straight.height, straight.data)
        .ok_or_else(|| GenartError::render("frame buffer does not match its dimensions"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| GenartError::render(format!("png encode failed: {e}")))?;
    Ok(buf)
}

/// Encode `frame` as a `data:image/png;base64,...` URL.
pub fn encode_data_url(frame: &FrameRGBA) -> GenartResult<String> {
    Ok(data_url(PNG_MIME, &encode_png(frame)?))
}

/// Wrap `bytes` in a base64 data URL.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Decode the payload of a base64 data URL, returning its MIME type and bytes.
pub fn decode_data_url(url: &str) -> GenartResult<(String, Vec<u8>)> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| GenartError::validation("not a data URL"))?;
    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| GenartError::validation("data URL is not base64 encoded"))?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| GenartError::validation(format!("invalid base64 payload: {e}")))?;
    Ok((mime.to_owned(), bytes))
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
