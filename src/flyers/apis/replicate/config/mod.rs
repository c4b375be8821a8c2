pub static NEGATIVE_PROMPT: &str =
    "blurry, distorted text, bad quality, watermark, signature, text, words, letters";

pub const NUM_INFERENCE_STEPS: u8 = 30;
pub const GUIDANCE_SCALE: f32 = 7.5;
pub const OUTPUT_WIDTH: u16 = 768;
pub const OUTPUT_HEIGHT: u16 = 1024;

pub const MAX_POLL_ATTEMPTS: u32 = 60;
pub const POLL_INTERVAL_MS: u64 = 1000;
