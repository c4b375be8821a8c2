use crate::{
    app::{models::api_error::ApiError, util},
    AppState,
};

use super::{
    apis::replicate,
    compositing,
    config,
    dtos::create_flyer_dto::CreateFlyerDto,
    errors::GenerationApiError,
    models::flyer_file::FlyerFile,
    typography,
};

/// Event details sentence plus fixed art direction, the genre background
/// style, and the optional custom appendix.
pub fn build_prompt(dto: &CreateFlyerDto) -> String {
    let event_details = format!(
        "event called \"{}\" on {} at {} featuring {}",
        dto.event_name, dto.date, dto.location, dto.lineup
    );

    let mut prompt = format!(
        "Create a professional music event flyer for an {}. The image should be suitable for a flyer with ultra-minimalist neo-futuristic style, clean composition, precise details, digital aesthetic inspired by Y2K and modern tech interfaces. No text in the image - leave clean space for text overlay. Use dark backgrounds with selective neon accents, avoid clutter, high contrast, cinematic lighting.",
        event_details
    );

    prompt.push_str(&format!(
        " Background style: {}.",
        config::style_prompt(dto.genre)
    ));

    if let Some(custom_prompt) = &dto.custom_prompt {
        if !custom_prompt.is_empty() {
            prompt.push_str(&format!(" Additional details: {}", custom_prompt));
        }
    }

    prompt
}

/// Full pipeline: generate the background through Replicate, download it,
/// composite the genre-styled text block, then export a named PNG.
pub async fn generate_flyer(
    dto: &CreateFlyerDto,
    state: &AppState,
) -> Result<FlyerFile, ApiError> {
    let dto = dto.sanitized();
    let prompt = build_prompt(&dto);

    tracing::debug!("starting image generation with prompt: {}", prompt);
    let urls = replicate::service::generate_flyer_image(&prompt, state).await?;

    let Some(url) = urls.first()
    else {
        return Err(GenerationApiError::NoImagesGenerated.value());
    };

    let bytes = util::reqwest::get_bytes_with_retry(url).await?;
    let background = match image::load_from_memory(&bytes) {
        Ok(background) => background.to_rgba8(),
        Err(e) => {
            tracing::error!("generate_flyer: {:?}", e);
            return Err(GenerationApiError::InvalidImageData.value());
        }
    };

    let preset = config::preset_for_value(dto.format.as_deref());
    let typography = typography::service::resolve_typography(dto.genre);
    let font = state.fonts.get_or_load().await?;

    let canvas =
        compositing::service::render_flyer(&background, preset, &dto, typography, &font)?;

    compositing::export::export_flyer(
        &canvas,
        dto.display_scale.unwrap_or(1.0),
        &dto.event_name,
    )
}
