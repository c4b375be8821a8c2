use serde::Serialize;
use serde_json::Value;

/// Job submission payload: model version plus the model-specific input object.
#[derive(Debug, Clone, Serialize)]
pub struct InputSpec {
    pub version: String,
    pub input: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputStableDiffusionXl {
    pub prompt: String,
    pub negative_prompt: String,
    pub num_inference_steps: u8,
    pub guidance_scale: f32,
    pub width: u16,
    pub height: u16,
}
