use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("parameter out of range: {0}")]
    RangeOverflow(String),

    #[error("failed to create {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
