use lumen_core::SceneError;
use lumen_math::MathError;
use thiserror::Error;

/// Errors that abort a render. No partial canvas is ever returned
/// alongside one of these.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Math(#[from] MathError),

    #[error("tile count must be a positive perfect square, got {0}")]
    InvalidTileCount(usize),

    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("invalid render config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
