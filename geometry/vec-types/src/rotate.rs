//! Rotation: 2D heading and rotation, 3D axis-angle via quaternions.

use tracing::warn;

use crate::Vector;

impl Vector {
    /// Polar angle of a 2D vector, `atan2(x, y)`.
    ///
    /// The argument order is the historical one (x first), not the textbook
    /// `atan2(y, x)`: the angle is measured from the +Y axis. Non-2D
    /// receivers warn and still compute from `x` and `y`.
    #[must_use]
    pub fn heading(&self) -> f64 {
        if !self.is_2d() {
            warn!("heading() only supports 2D vectors (receiver is {})", self.dimension());
        }
        self.x().atan2(self.y())
    }

    /// Rotate in place by `angle` radians. 2D only.
    ///
    /// Non-2D receivers warn; `x` and `y` are rotated with the standard 2x2
    /// matrix and the remaining components pass through unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use std::f64::consts::FRAC_PI_2;
    /// use vec_types::Vector;
    ///
    /// let mut v = Vector::two(1.0, 0.0);
    /// v.rotate(FRAC_PI_2);
    /// assert!((v.x() - 0.0).abs() < 1e-12);
    /// assert!((v.y() - 1.0).abs() < 1e-12);
    /// ```
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        if !self.is_2d() {
            warn!("rotate() only supports 2D vectors (receiver is {})", self.dimension());
        }
        let (sin, cos) = angle.sin_cos();
        let px = self.x();
        let py = self.y();
        let rx = cos * px - sin * py;
        let ry = sin * px + cos * py;
        match self {
            Self::TwoD { x, y } | Self::ThreeD { x, y, .. } | Self::FourD { x, y, .. } => {
                *x = rx;
                *y = ry;
            }
        }
        self
    }

    /// Rotate in place about the normalized `axis` by `angle` radians.
    ///
    /// The rotation is the quaternion sandwich product `q v q^-1` with the
    /// unit quaternion `(axis * sin(angle / 2), cos(angle / 2))`, built as a
    /// throwaway 4D vector. The axis must be normalized; a non-3D axis
    /// warns and its missing `z` counts as zero.
    ///
    /// # Example
    ///
    /// ```
    /// use std::f64::consts::FRAC_PI_2;
    /// use vec_types::Vector;
    ///
    /// let mut v = Vector::three(1.0, 0.0, 0.0);
    /// v.apply_axis_angle(&Vector::three(0.0, 0.0, 1.0), FRAC_PI_2);
    /// assert!((v.x() - 0.0).abs() < 1e-12);
    /// assert!((v.y() - 1.0).abs() < 1e-12);
    /// ```
    pub fn apply_axis_angle(&mut self, axis: &Self, angle: f64) -> &mut Self {
        if !axis.is_3d() {
            warn!("apply_axis_angle() expects a 3D axis (got {})", axis.dimension());
        }
        let (sin, cos) = (angle / 2.0).sin_cos();
        let q = Self::four(
            axis.x() * sin,
            axis.y() * sin,
            axis.z().unwrap_or(0.0) * sin,
            cos,
        );
        self.apply_quaternion(&q)
    }

    /// Rotate in place by the unit quaternion `q`, a 4D vector `(x, y, z, w)`.
    ///
    /// Uses the optimized sandwich-product expansion; no quaternion type is
    /// involved. A non-4D `q` warns, as does a non-3D receiver: the receiver
    /// is rotated with its missing `z` as zero and only the components it
    /// already carries are written back.
    pub fn apply_quaternion(&mut self, q: &Self) -> &mut Self {
        if !q.is_4d() {
            warn!("apply_quaternion() expects a 4D quaternion vector (got {})", q.dimension());
        }
        if !self.is_3d() {
            warn!("apply_quaternion() only supports 3D receivers (receiver is {})", self.dimension());
        }
        let x = self.x();
        let y = self.y();
        let z = self.z().unwrap_or(0.0);
        let qx = q.x();
        let qy = q.y();
        let qz = q.z().unwrap_or(f64::NAN);
        let qw = q.w().unwrap_or(f64::NAN);

        // q * v
        let ix = qw * x + qy * z - qz * y;
        let iy = qw * y + qz * x - qx * z;
        let iz = qw * z + qx * y - qy * x;
        let iw = -qx * x - qy * y - qz * z;

        // (q * v) * q^-1
        let rx = ix * qw + iw * -qx + iy * -qz - iz * -qy;
        let ry = iy * qw + iw * -qy + iz * -qx - ix * -qz;
        let rz = iz * qw + iw * -qz + ix * -qy - iy * -qx;

        match self {
            Self::TwoD { x, y } => {
                *x = rx;
                *y = ry;
            }
            Self::ThreeD { x, y, z } | Self::FourD { x, y, z, .. } => {
                *x = rx;
                *y = ry;
                *z = rz;
            }
        }
        self
    }

    /// 2D unit vector pointing at `angle` radians, optionally rescaled.
    ///
    /// # Example
    ///
    /// ```
    /// use vec_types::Vector;
    ///
    /// let v = Vector::from_angle_2d(0.0, Some(3.0));
    /// assert!((v.x() - 3.0).abs() < 1e-12);
    /// assert!(v.y().abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_angle_2d(angle: f64, length: Option<f64>) -> Self {
        let mut v = Self::two(angle.cos(), angle.sin());
        if let Some(l) = length {
            v.set_length(l);
        }
        v
    }
}
