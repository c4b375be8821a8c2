use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub port: Option<u16>,

    pub replicate_api_token: Option<String>,

    pub data_dir: Option<String>,
    pub font_path: Option<String>,
    pub font_url: Option<String>,
}
