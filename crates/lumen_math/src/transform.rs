// Transform factories
//
// Every transform matrix used by the renderer is built here; calling code
// never fills matrix entries by hand.

use crate::{Matrix, MathResult, MatrixBackend, Tuple};

/// The 4x4 identity.
pub fn identity() -> Matrix {
    Matrix::identity_of(4)
}

pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
    Matrix::from_rows([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
    Matrix::from_rows([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation around the X axis by `radians` (left-handed).
pub fn rotation_x(radians: f64) -> Matrix {
    let (s, c) = radians.sin_cos();
    Matrix::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation around the Y axis by `radians` (left-handed).
pub fn rotation_y(radians: f64) -> Matrix {
    let (s, c) = radians.sin_cos();
    Matrix::from_rows([
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation around the Z axis by `radians` (left-handed).
pub fn rotation_z(radians: f64) -> Matrix {
    let (s, c) = radians.sin_cos();
    Matrix::from_rows([
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Shear: each argument moves one coordinate in proportion to another,
/// e.g. `xy` moves x in proportion to y.
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix {
    Matrix::from_rows([
        [1.0, xy, xz, 0.0],
        [yx, 1.0, yz, 0.0],
        [zx, zy, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Compose transforms given in the order they should be applied.
///
/// `chain(b, &[a, b, c])` returns `c * b * a`.
pub fn chain(backend: &dyn MatrixBackend, transforms: &[Matrix]) -> MathResult<Matrix> {
    transforms
        .iter()
        .try_fold(identity(), |acc, m| backend.multiply(m, &acc))
}

/// World-to-camera transform for an eye at `from` looking at `to`.
///
/// Fails if `up` is not a vector or `to - from` is undefined.
pub fn view_transform(
    backend: &dyn MatrixBackend,
    from: Tuple,
    to: Tuple,
    up: Tuple,
) -> MathResult<Matrix> {
    let forward = to.try_sub(from)?.normalize();
    let left = forward.cross(&up.normalize())?;
    let true_up = left.cross(&forward)?;
    let orientation = Matrix::from_rows([
        [left.x, left.y, left.z, 0.0],
        [true_up.x, true_up.y, true_up.z, 0.0],
        [-forward.x, -forward.y, -forward.z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    backend.multiply(&orientation, &translation(-from.x, -from.y, -from.z))
}
