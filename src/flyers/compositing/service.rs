use axum::http::StatusCode;
use image::RgbaImage;

use crate::{
    app::{models::api_error::ApiError, util::time::format_display_date},
    flyers::{
        config::CanvasPreset,
        dtos::create_flyer_dto::CreateFlyerDto,
        typography::models::genre_typography::{GenreTypography, TextStyle},
    },
};

use super::{
    fonts::LoadedFont,
    text::{rgba_straight_to_image_paint, TextRasterizer},
};

pub const TEXT_INSET_X: f32 = 50.0;
pub const EVENT_NAME_BASELINE_Y: f32 = 100.0;
pub const DATE_BASELINE_Y: f32 = 170.0;
pub const LOCATION_BASELINE_Y: f32 = 220.0;
pub const LINEUP_BASELINE_Y: f32 = 280.0;
pub const LINEUP_LINE_SPACING: f32 = 30.0;

/// One positioned line of overlay text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    pub x: f32,
    pub baseline_y: f32,
    pub style: TextStyle,
}

/// Scale and offset that make the image cover the whole canvas while staying
/// centered. The overflow axis is cropped evenly on both sides.
pub fn cover_fit_transform(
    image_w: u32,
    image_h: u32,
    canvas_w: u32,
    canvas_h: u32,
) -> (f32, f32, f32) {
    let scale = f32::max(
        canvas_w as f32 / image_w as f32,
        canvas_h as f32 / image_h as f32,
    );
    let scaled_w = image_w as f32 * scale;
    let scaled_h = image_h as f32 * scale;
    let x = (canvas_w as f32 - scaled_w) / 2.0;
    let y = (canvas_h as f32 - scaled_h) / 2.0;

    (scale, x, y)
}

/// Expands the request into the fixed four-role text block. The lineup is one
/// line per comma-separated entry; empty entries still advance the baseline.
pub fn layout_text_plan(dto: &CreateFlyerDto, typography: &GenreTypography) -> Vec<TextDraw> {
    let mut draws = vec![
        TextDraw {
            text: dto.event_name.to_uppercase(),
            x: TEXT_INSET_X,
            baseline_y: EVENT_NAME_BASELINE_Y,
            style: typography.event_name,
        },
        TextDraw {
            text: format_display_date(&dto.date),
            x: TEXT_INSET_X,
            baseline_y: DATE_BASELINE_Y,
            style: typography.date,
        },
        TextDraw {
            text: dto.location.to_uppercase(),
            x: TEXT_INSET_X,
            baseline_y: LOCATION_BASELINE_Y,
            style: typography.location,
        },
    ];

    let mut lineup_y = LINEUP_BASELINE_Y;
    for entry in dto.lineup.split(',') {
        draws.push(TextDraw {
            text: entry.trim().to_uppercase(),
            x: TEXT_INSET_X,
            baseline_y: lineup_y,
            style: typography.lineup,
        });
        lineup_y += LINEUP_LINE_SPACING;
    }

    draws
}

fn canvas_context(preset: &CanvasPreset) -> Result<vello_cpu::RenderContext, ApiError> {
    let dimension_error = || ApiError {
        code: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Canvas dimensions are out of range.".to_string(),
    };

    let width: u16 = preset.width.try_into().map_err(|_| dimension_error())?;
    let height: u16 = preset.height.try_into().map_err(|_| dimension_error())?;

    Ok(vello_cpu::RenderContext::new(width, height))
}

/// Black backdrop plus the generated image cover-fitted onto the canvas.
fn draw_background(
    ctx: &mut vello_cpu::RenderContext,
    background: &RgbaImage,
    preset: &CanvasPreset,
) -> Result<(), ApiError> {
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 255));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        preset.width as f64,
        preset.height as f64,
    ));

    let (scale, x, y) = cover_fit_transform(
        background.width(),
        background.height(),
        preset.width,
        preset.height,
    );
    let paint = rgba_straight_to_image_paint(
        background.as_raw(),
        background.width(),
        background.height(),
    )?;

    ctx.set_transform(
        vello_cpu::kurbo::Affine::translate((x as f64, y as f64))
            .pre_scale(scale as f64),
    );
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        background.width() as f64,
        background.height() as f64,
    ));

    Ok(())
}

fn finish_canvas(
    mut ctx: vello_cpu::RenderContext,
    preset: &CanvasPreset,
) -> Result<RgbaImage, ApiError> {
    let dimension_error = || ApiError {
        code: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Canvas dimensions are out of range.".to_string(),
    };

    let width: u16 = preset.width.try_into().map_err(|_| dimension_error())?;
    let height: u16 = preset.height.try_into().map_err(|_| dimension_error())?;

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);

    // The canvas is fully opaque, so premultiplied and straight alpha agree.
    RgbaImage::from_raw(
        preset.width,
        preset.height,
        pixmap.data_as_u8_slice().to_vec(),
    )
    .ok_or(ApiError {
        code: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Rendered canvas buffer has an unexpected size.".to_string(),
    })
}

/// Composites the generated background under the genre-styled text block and
/// returns the finished canvas.
pub fn render_flyer(
    background: &RgbaImage,
    preset: &CanvasPreset,
    dto: &CreateFlyerDto,
    typography: &GenreTypography,
    font: &LoadedFont,
) -> Result<RgbaImage, ApiError> {
    let mut ctx = canvas_context(preset)?;
    draw_background(&mut ctx, background, preset)?;

    let mut rasterizer = TextRasterizer::new(&font.bytes)?;
    for draw in layout_text_plan(dto, typography) {
        rasterizer.draw_line(&mut ctx, &draw.text, draw.x, draw.baseline_y, &draw.style);
    }

    finish_canvas(ctx, preset)
}
