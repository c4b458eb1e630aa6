//! Row-major 3x3 rotation matrices.
//!
//! Composition follows matrix multiplication: `(a * b).apply(v) == a.apply(&b.apply(v))`.

use std::ops::Mul;

use crate::vector::Vector3;

/// Proper rotation stored as a row-major 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation3 {
    rows: [[f64; 3]; 3],
}

impl Rotation3 {
    pub const IDENTITY: Rotation3 = Rotation3 {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Counter-clockwise rotation about +X by `angle_rad`.
    pub fn about_x(angle_rad: f64) -> Self {
        let (s, c) = angle_rad.sin_cos();
        Self {
            rows: [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]],
        }
    }

    /// Counter-clockwise rotation about +Z by `angle_rad`.
    pub fn about_z(angle_rad: f64) -> Self {
        let (s, c) = angle_rad.sin_cos();
        Self {
            rows: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Matrix rows.
    pub fn rows(&self) -> [[f64; 3]; 3] {
        self.rows
    }

    /// Inverse rotation.
    pub fn transpose(&self) -> Self {
        let r = &self.rows;
        Self {
            rows: [
                [r[0][0], r[1][0], r[2][0]],
                [r[0][1], r[1][1], r[2][1]],
                [r[0][2], r[1][2], r[2][2]],
            ],
        }
    }

    /// Rotate a vector.
    pub fn apply(&self, v: &Vector3) -> Vector3 {
        let r = &self.rows;
        [
            r[0][0] * v[0] + r[0][1] * v[1] + r[0][2] * v[2],
            r[1][0] * v[0] + r[1][1] * v[1] + r[1][2] * v[2],
            r[2][0] * v[0] + r[2][1] * v[1] + r[2][2] * v[2],
        ]
    }
}

impl Default for Rotation3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Rotation3 {
    type Output = Rotation3;

    fn mul(self, rhs: Rotation3) -> Rotation3 {
        let a = &self.rows;
        let b = &rhs.rows;
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        Rotation3 { rows }
    }
}
