pub mod genre_typography;
