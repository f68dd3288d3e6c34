//! Derived geometry: products, distances, lengths, interpolation.

use tracing::warn;

use crate::Vector;

impl Vector {
    /// Dot product.
    ///
    /// Terms are gated on the receiver's active components. A component
    /// present on the receiver but absent on `other` multiplies `NaN`, which
    /// propagates into the sum; operands of mismatched dimension emit a
    /// warning but the computation still runs. This arithmetic-on-missing
    /// hazard is deliberate and documented rather than silently repaired.
    ///
    /// # Example
    ///
    /// ```
    /// use vec_types::Vector;
    ///
    /// let a = Vector::three(1.0, 2.0, 3.0);
    /// let b = Vector::three(4.0, 5.0, 6.0);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        if self.dimension() != other.dimension() {
            warn!(
                "dot() operands have mismatched dimensions ({} vs {})",
                self.dimension(),
                other.dimension()
            );
        }
        let mut sum = self.x() * other.x() + self.y() * other.y();
        if let Some(z) = self.z() {
            sum += z * other.z().unwrap_or(f64::NAN);
        }
        if let Some(w) = self.w() {
            sum += w * other.w().unwrap_or(f64::NAN);
        }
        sum
    }

    /// Cross product. Defined for 3D vectors only.
    ///
    /// Non-3D operands emit a warning; the standard 3D formula is still
    /// evaluated, with a missing `z` contributing `NaN`. The result is
    /// always a 3D vector.
    ///
    /// # Example
    ///
    /// ```
    /// use vec_types::Vector;
    ///
    /// let x = Vector::three(1.0, 0.0, 0.0);
    /// let y = Vector::three(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(&y), Vector::three(0.0, 0.0, 1.0));
    /// ```
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        if !self.is_3d() || !other.is_3d() {
            warn!(
                "cross() only supports 3D vectors ({} x {})",
                self.dimension(),
                other.dimension()
            );
        }
        let az = self.z().unwrap_or(f64::NAN);
        let bz = other.z().unwrap_or(f64::NAN);
        Self::three(
            self.y() * bz - az * other.y(),
            az * other.x() - self.x() * bz,
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    /// Squared Euclidean distance to `to`.
    ///
    /// Components absent on either side count as zero. The squared value is
    /// returned on every call path, vector-valued arguments included.
    #[must_use]
    pub fn dist_squared(&self, to: impl Into<Self>) -> f64 {
        let to = to.into();
        let dx = self.x() - to.x();
        let dy = self.y() - to.y();
        let dz = self.z().unwrap_or(0.0) - to.z().unwrap_or(0.0);
        let dw = self.w().unwrap_or(0.0) - to.w().unwrap_or(0.0);
        dx * dx + dy * dy + dz * dz + dw * dw
    }

    /// Euclidean distance to `to`. Accepts a vector, tuple or array.
    ///
    /// # Example
    ///
    /// ```
    /// use vec_types::Vector;
    ///
    /// assert_eq!(Vector::two(0.0, 0.0).dist((3.0, 4.0)), 5.0);
    /// ```
    #[must_use]
    pub fn dist(&self, to: impl Into<Self>) -> f64 {
        self.dist_squared(to).sqrt()
    }

    /// Alias for [`dist`](Self::dist).
    #[inline]
    #[must_use]
    pub fn distance(&self, to: impl Into<Self>) -> f64 {
        self.dist(to)
    }

    /// Alias for [`dist`](Self::dist).
    #[inline]
    #[must_use]
    pub fn distance_to(&self, to: impl Into<Self>) -> f64 {
        self.dist(to)
    }

    /// Squared distance to the origin.
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        let z = self.z().unwrap_or(0.0);
        let w = self.w().unwrap_or(0.0);
        self.x() * self.x() + self.y() * self.y() + z * z + w * w
    }

    /// Distance to the origin.
    ///
    /// # Example
    ///
    /// ```
    /// use vec_types::Vector;
    ///
    /// assert_eq!(Vector::two(3.0, 4.0).length(), 5.0);
    /// ```
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Alias for [`length`](Self::length).
    #[inline]
    #[must_use]
    pub fn mag(&self) -> f64 {
        self.length()
    }

    /// Rescale in place to exactly length `target`.
    ///
    /// A zero-length receiver warns and is left unchanged; division by zero
    /// is never attempted.
    pub fn set_length(&mut self, target: f64) -> &mut Self {
        let len = self.length();
        if len == 0.0 {
            warn!("set_length() on a zero-length vector is a no-op");
            return self;
        }
        self.mul(target / len)
    }

    /// Alias for [`set_length`](Self::set_length).
    #[inline]
    pub fn set_mag(&mut self, target: f64) -> &mut Self {
        self.set_length(target)
    }

    /// Clamp the length to at most `max`, rescaling in place when exceeded.
    ///
    /// A zero-length receiver warns and is left unchanged.
    pub fn limit(&mut self, max: f64) -> &mut Self {
        let len = self.length();
        if len == 0.0 {
            warn!("limit() on a zero-length vector is a no-op");
            return self;
        }
        if len > max {
            self.mul(max / len);
        }
        self
    }

    /// Rescale in place to unit length.
    ///
    /// A zero-length receiver warns and stays zero instead of producing
    /// `NaN` components.
    ///
    /// # Example
    ///
    /// ```
    /// use vec_types::Vector;
    ///
    /// let mut v = Vector::three(0.0, 3.0, 4.0);
    /// v.normalize();
    /// assert!((v.length() - 1.0).abs() < 1e-12);
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        self.set_length(1.0)
    }

    /// Value-returning counterpart of [`normalize`](Self::normalize).
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut out = *self;
        out.normalize();
        out
    }

    /// Absolute value of every active component, in place.
    pub fn abs(&mut self) -> &mut Self {
        self.apply(f64::abs)
    }

    /// Floor of every active component, in place.
    pub fn floor(&mut self) -> &mut Self {
        self.apply(f64::floor)
    }

    /// Ceiling of every active component, in place.
    pub fn ceil(&mut self) -> &mut Self {
        self.apply(f64::ceil)
    }

    /// Round every active component to the nearest integer, in place.
    pub fn round(&mut self) -> &mut Self {
        self.apply(f64::round)
    }

    /// Signed sum of the active components.
    ///
    /// This is *not* the textbook L1 norm: components are summed with their
    /// sign, not their absolute value. The historical name is kept.
    #[must_use]
    pub fn manhattan_length(&self) -> f64 {
        self.x() + self.y() + self.z().unwrap_or(0.0) + self.w().unwrap_or(0.0)
    }

    /// Interpolate in place toward `toward` by fraction `t`.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate. Components
    /// absent on `toward` but present on the receiver propagate `NaN` (the
    /// same documented hazard as [`dot`](Self::dot)).
    pub fn lerp(&mut self, toward: &Self, t: f64) -> &mut Self {
        match self {
            Self::TwoD { x, y } => {
                *x += (toward.x() - *x) * t;
                *y += (toward.y() - *y) * t;
            }
            Self::ThreeD { x, y, z } => {
                *x += (toward.x() - *x) * t;
                *y += (toward.y() - *y) * t;
                *z += (toward.z().unwrap_or(f64::NAN) - *z) * t;
            }
            Self::FourD { x, y, z, w } => {
                *x += (toward.x() - *x) * t;
                *y += (toward.y() - *y) * t;
                *z += (toward.z().unwrap_or(f64::NAN) - *z) * t;
                *w += (toward.w().unwrap_or(f64::NAN) - *w) * t;
            }
        }
        self
    }

    /// Point halfway between `self` and `other`, as a fresh vector.
    ///
    /// # Example
    ///
    /// ```
    /// use vec_types::Vector;
    ///
    /// let a = Vector::two(0.0, 0.0);
    /// let b = Vector::two(2.0, 4.0);
    /// assert_eq!(a.midpoint(&b), Vector::two(1.0, 2.0));
    /// ```
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        let mut out = *self;
        out.lerp(other, 0.5);
        out
    }

    /// Angle between `self` and `other` in radians.
    #[must_use]
    pub fn angle_between(&self, other: &Self) -> f64 {
        let d = self.dot(other);
        let l = self.length() * other.length();
        (d / l).acos()
    }

    /// Alias for [`angle_between`](Self::angle_between).
    #[inline]
    #[must_use]
    pub fn angle_to(&self, other: &Self) -> f64 {
        self.angle_between(other)
    }
}
