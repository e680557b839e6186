//! Client-supplied images arrive as data URLs. Oversized ones are
//! downscaled and re-encoded before being sent upstream; everything here
//! fails open, since a failed resize should not block analysis.

use base64::{Engine as _, engine::general_purpose};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use regex::Regex;
use std::io::Cursor;
use std::sync::OnceLock;

const MAX_DIM: u32 = 1600;
const JPEG_QUALITY: u8 = 85;

fn data_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^data:(.*?);base64,(.*)$").unwrap())
}

/// Split a data URL into its mime type and decoded payload.
pub fn parse_data_url(data_url: &str) -> Option<(String, Vec<u8>)> {
    let caps = data_url_regex().captures(data_url)?;
    let mime = caps.get(1)?.as_str().to_string();
    let bytes = general_purpose::STANDARD.decode(caps.get(2)?.as_str()).ok()?;
    Some((mime, bytes))
}

/// The base64 payload of a data URL, or the input itself when it carries
/// no data-URL prefix (already-stripped payloads pass through).
pub fn strip_data_url_prefix(image: &str) -> &str {
    data_url_regex()
        .captures(image)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
        .unwrap_or(image)
}

/// Downscale an oversized image to fit within 1600px on both axes,
/// re-encoded as JPEG quality 85. Images already within bounds are
/// returned byte-identical. Any decode or encode failure returns the
/// original input unchanged.
pub fn resize_if_needed(data_url: &str) -> String {
    match try_resize(data_url) {
        Some(resized) => resized,
        None => data_url.to_string(),
    }
}

fn try_resize(data_url: &str) -> Option<String> {
    let (_, bytes) = parse_data_url(data_url)?;
    let img = image::load_from_memory(&bytes).ok()?;

    let (w, h) = (img.width(), img.height());
    if w <= MAX_DIM && h <= MAX_DIM {
        return Some(data_url.to_string());
    }

    let scale = f64::min(MAX_DIM as f64 / w as f64, MAX_DIM as f64 / h as f64);
    let new_w = (w as f64 * scale).round() as u32;
    let new_h = (h as f64 * scale).round() as u32;

    let resized = img.resize_exact(new_w, new_h, FilterType::Triangle);

    let mut jpeg_bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut jpeg_bytes), JPEG_QUALITY);
    resized.to_rgb8().write_with_encoder(encoder).ok()?;

    Some(format!(
        "data:image/jpeg;base64,{}",
        general_purpose::STANDARD.encode(&jpeg_bytes)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};

    fn png_data_url(width: u32, height: u32) -> String {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([40, 180, 60]),
        ));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(&bytes)
        )
    }

    #[test]
    fn small_images_pass_through_byte_identical() {
        let url = png_data_url(320, 240);
        assert_eq!(resize_if_needed(&url), url);
    }

    #[test]
    fn oversized_images_are_scaled_to_fit() {
        let url = png_data_url(3200, 1600);
        let resized = resize_if_needed(&url);
        assert_ne!(resized, url);
        assert!(resized.starts_with("data:image/jpeg;base64,"));

        let (_, bytes) = parse_data_url(&resized).unwrap();
        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!(img.width(), 1600);
        assert_eq!(img.height(), 800);
    }

    #[test]
    fn aspect_ratio_is_preserved_on_portrait_input() {
        let url = png_data_url(1000, 4000);
        let (_, bytes) = parse_data_url(&resize_if_needed(&url)).unwrap();
        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!(img.width(), 400);
        assert_eq!(img.height(), 1600);
    }

    #[test]
    fn malformed_input_is_returned_unchanged() {
        assert_eq!(resize_if_needed("not a data url"), "not a data url");
        assert_eq!(
            resize_if_needed("data:image/png;base64,@@@@"),
            "data:image/png;base64,@@@@"
        );
    }

    #[test]
    fn undecodable_payload_is_returned_unchanged() {
        let url = "data:image/png;base64,AAAA";
        assert_eq!(resize_if_needed(url), url);
    }

    #[test]
    fn strips_prefix_only_when_present() {
        let url = png_data_url(4, 4);
        assert!(!strip_data_url_prefix(&url).starts_with("data:"));
        assert_eq!(strip_data_url_prefix("abcd"), "abcd");
    }
}
