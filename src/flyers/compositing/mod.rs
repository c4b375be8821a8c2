pub mod export;
pub mod fonts;
pub mod service;
pub mod text;
