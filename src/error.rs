use thiserror::Error;

pub type Result<T> = std::result::Result<T, LifeError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifeError {
    #[error("cell size must be positive")]
    ZeroCellSize,

    #[error("window {width}x{height} cannot hold a single {cell_size}px cell")]
    WindowTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    #[error("window {width}x{height} exceeds the platform limit of {max} pixels per side")]
    WindowTooLarge { width: u32, height: u32, max: i32 },
}
