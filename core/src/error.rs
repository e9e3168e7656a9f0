use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("failed to decode raster asset")]
    AssetDecode(#[from] image::ImageError),
    #[error("mask raster must have non-zero dimensions")]
    EmptyMask,
    #[error("hidden image raster must have non-zero dimensions")]
    EmptyImage,
}

pub type Result<T> = core::result::Result<T, GameError>;
