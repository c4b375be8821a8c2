use std::borrow::Cow;
use std::sync::Arc;

use axum::http::StatusCode;

use crate::{
    app::models::api_error::ApiError,
    flyers::typography::models::genre_typography::TextStyle,
};

/// RGBA8 brush color carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Shapes styled single-line text with Parley and draws the glyph runs into a
/// vello_cpu render context. One instance per render keeps the font registered
/// exactly once.
pub struct TextRasterizer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

impl TextRasterizer {
    pub fn new(font_bytes: &[u8]) -> Result<Self, ApiError> {
        let mut font_ctx = parley::FontContext::default();

        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or(ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: "No font families registered from the overlay font.".to_string(),
        })?;

        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Registered overlay font family has no name.".to_string(),
            })?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes.to_vec()),
            0,
        );

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
        })
    }

    fn layout_line(&mut self, text: &str, style: &TextStyle) -> parley::Layout<TextBrushRgba8> {
        let [r, g, b, a] = style.color_rgba8();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.font_size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(style.font_weight as f32),
        ));
        builder.push_default(parley::style::StyleProperty::LetterSpacing(
            style.letter_spacing_px(),
        ));
        builder.push_default(parley::style::StyleProperty::Brush(TextBrushRgba8 {
            r,
            g,
            b,
            a,
        }));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        // Single drawn line; no wrap width.
        layout.break_all_lines(None);
        layout
    }

    /// Draws `text` so its first-line baseline lands on `baseline_y`, starting
    /// at `x` from the canvas left edge.
    pub fn draw_line(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        x: f32,
        baseline_y: f32,
        style: &TextStyle,
    ) {
        let layout = self.layout_line(text, style);

        let Some(first_line) = layout.lines().next()
        else {
            return;
        };
        let baseline_offset = first_line.metrics().baseline;

        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            x as f64,
            (baseline_y - baseline_offset) as f64,
        )));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }
}

/// Converts straight-alpha RGBA bytes into a premultiplied vello_cpu image
/// paint.
pub fn rgba_straight_to_image_paint(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> Result<vello_cpu::Image, ApiError> {
    let dimension_error = || ApiError {
        code: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Image dimensions are out of range.".to_string(),
    };

    let w: u16 = width.try_into().map_err(|_| dimension_error())?;
    let h: u16 = height.try_into().map_err(|_| dimension_error())?;
    if bytes.len() != (width as usize) * (height as usize) * 4 {
        return Err(ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Image byte length does not match its dimensions.".to_string(),
        });
    }

    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        let a = px[3] as u16;
        let premul = |c: u8| -> u8 { ((c as u16 * a + 127) / 255) as u8 };
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            premul(px[0]),
            premul(px[1]),
            premul(px[2]),
            px[3],
        ]));
    }

    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}
