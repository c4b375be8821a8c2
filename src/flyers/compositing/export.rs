use std::io::Cursor;

use axum::http::StatusCode;
use image::{imageops, RgbaImage};

use crate::{
    app::{models::api_error::ApiError, util::slug::file_slug},
    flyers::models::flyer_file::FlyerFile,
};

pub const MIN_DISPLAY_SCALE: f32 = 0.5;
pub const MAX_DISPLAY_SCALE: f32 = 2.0;

/// Applies the display scale and encodes the canvas as a named PNG download.
pub fn export_flyer(
    canvas: &RgbaImage,
    display_scale: f32,
    event_name: &str,
) -> Result<FlyerFile, ApiError> {
    let scale = display_scale.clamp(MIN_DISPLAY_SCALE, MAX_DISPLAY_SCALE);

    let scaled;
    let output = if scale == 1.0 {
        canvas
    } else {
        let width = ((canvas.width() as f32 * scale).round() as u32).max(1);
        let height = ((canvas.height() as f32 * scale).round() as u32).max(1);
        scaled = imageops::resize(canvas, width, height, imageops::FilterType::Triangle);
        &scaled
    };

    let mut bytes = Vec::new();
    if let Err(e) = output.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png) {
        tracing::error!("export_flyer: {:?}", e);
        return Err(ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Failed to encode the flyer as PNG.".to_string(),
        });
    }

    Ok(FlyerFile {
        file_name: format!("{}-flyer.png", file_slug(event_name)),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]))
    }

    #[test]
    fn names_the_file_after_the_event() {
        let flyer = export_flyer(&canvas(8, 8), 1.0, "NEON NIGHTS").unwrap();
        assert_eq!(flyer.file_name, "neon-nights-flyer.png");
    }

    #[test]
    fn encodes_png() {
        let flyer = export_flyer(&canvas(8, 8), 1.0, "x").unwrap();
        assert_eq!(&flyer.bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&flyer.bytes).unwrap();
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 8);
    }

    #[test]
    fn display_scale_resizes_the_output() {
        let flyer = export_flyer(&canvas(8, 8), 2.0, "x").unwrap();
        let decoded = image::load_from_memory(&flyer.bytes).unwrap();
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 16);
    }

    #[test]
    fn out_of_range_scales_are_clamped() {
        let flyer = export_flyer(&canvas(8, 8), 5.0, "x").unwrap();
        let decoded = image::load_from_memory(&flyer.bytes).unwrap();
        assert_eq!(decoded.width(), 16);

        let flyer = export_flyer(&canvas(8, 8), 0.1, "x").unwrap();
        let decoded = image::load_from_memory(&flyer.bytes).unwrap();
        assert_eq!(decoded.width(), 4);
    }
}
