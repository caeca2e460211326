use lumen_math::MathError;
use thiserror::Error;

use crate::ShapeId;

/// Errors raised while building or querying a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error("shape {0} is a group and has no local geometry")]
    NoLocalGeometry(ShapeId),

    #[error("shape {0} is not a group")]
    NotAGroup(ShapeId),

    #[error("shape {0} does not exist in this scene")]
    UnknownShape(ShapeId),
}

pub type SceneResult<T> = Result<T, SceneError>;
