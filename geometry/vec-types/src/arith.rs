//! Component-wise arithmetic with broadcast semantics.

use crate::Vector;

/// Argument accepted by the component-wise arithmetic operations.
///
/// Scalars, vectors, tuples and fixed-size arrays all convert into it, so a
/// single method covers broadcast and per-component call sites:
///
/// ```
/// use vec_types::Vector;
///
/// let mut v = Vector::three(1.0, 2.0, 3.0);
/// v.add(1.0);                       // broadcast to every component
/// v.add((1.0, 1.0, 1.0));           // per-component
/// v.add(&Vector::three(0.0, 0.0, 1.0));
/// assert_eq!(v, Vector::three(3.0, 4.0, 6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// One scalar, broadcast to every active component of the receiver.
    Splat(f64),
    /// Per-component values taken from another vector. Components absent on
    /// the operand default to the operation's identity element; components
    /// absent on the receiver are never created.
    Vector(Vector),
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Self::Splat(s)
    }
}

impl From<Vector> for Operand {
    fn from(v: Vector) -> Self {
        Self::Vector(v)
    }
}

impl From<&Vector> for Operand {
    fn from(v: &Vector) -> Self {
        Self::Vector(*v)
    }
}

impl From<(f64, f64)> for Operand {
    fn from(t: (f64, f64)) -> Self {
        Self::Vector(t.into())
    }
}

impl From<(f64, f64, f64)> for Operand {
    fn from(t: (f64, f64, f64)) -> Self {
        Self::Vector(t.into())
    }
}

impl From<(f64, f64, f64, f64)> for Operand {
    fn from(t: (f64, f64, f64, f64)) -> Self {
        Self::Vector(t.into())
    }
}

impl From<[f64; 2]> for Operand {
    fn from(a: [f64; 2]) -> Self {
        Self::Vector(a.into())
    }
}

impl From<[f64; 3]> for Operand {
    fn from(a: [f64; 3]) -> Self {
        Self::Vector(a.into())
    }
}

impl From<[f64; 4]> for Operand {
    fn from(a: [f64; 4]) -> Self {
        Self::Vector(a.into())
    }
}

impl Vector {
    /// Assign components from `rhs`.
    ///
    /// `set` is the one arithmetic operation that assigns unconditionally: a
    /// vector operand replaces the receiver wholesale and can promote or
    /// demote its dimension. A scalar operand broadcasts to the current
    /// dimension, which stays unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use vec_types::{Dimension, Vector};
    ///
    /// let mut v = Vector::two(1.0, 2.0);
    /// v.set(Vector::three(1.0, 2.0, 3.0));
    /// assert_eq!(v.dimension(), Dimension::ThreeD);
    ///
    /// v.set(7.0);
    /// assert_eq!(v, Vector::three(7.0, 7.0, 7.0));
    /// ```
    pub fn set(&mut self, rhs: impl Into<Operand>) -> &mut Self {
        match rhs.into() {
            Operand::Splat(s) => self.apply(|_| s),
            Operand::Vector(v) => {
                *self = v;
                self
            }
        }
    }

    /// Add `rhs` component-wise.
    ///
    /// A scalar broadcasts; a vector operand adds per component, with
    /// components absent on the operand defaulting to 0 and components
    /// absent on the receiver left non-existent.
    ///
    /// # Example
    ///
    /// ```
    /// use vec_types::Vector;
    ///
    /// let mut v = Vector::two(1.0, 2.0);
    /// v.add(&Vector::three(10.0, 10.0, 10.0)); // z is ignored: receiver is 2D
    /// assert_eq!(v, Vector::two(11.0, 12.0));
    /// ```
    pub fn add(&mut self, rhs: impl Into<Operand>) -> &mut Self {
        match rhs.into() {
            Operand::Splat(s) => self.apply(|c| c + s),
            Operand::Vector(v) => {
                match self {
                    Self::TwoD { x, y } => {
                        *x += v.x();
                        *y += v.y();
                    }
                    Self::ThreeD { x, y, z } => {
                        *x += v.x();
                        *y += v.y();
                        *z += v.z().unwrap_or(0.0);
                    }
                    Self::FourD { x, y, z, w } => {
                        *x += v.x();
                        *y += v.y();
                        *z += v.z().unwrap_or(0.0);
                        *w += v.w().unwrap_or(0.0);
                    }
                }
                self
            }
        }
    }

    /// Subtract `rhs` component-wise. Same operand rules as [`add`](Self::add).
    pub fn sub(&mut self, rhs: impl Into<Operand>) -> &mut Self {
        match rhs.into() {
            Operand::Splat(s) => self.apply(|c| c - s),
            Operand::Vector(v) => {
                match self {
                    Self::TwoD { x, y } => {
                        *x -= v.x();
                        *y -= v.y();
                    }
                    Self::ThreeD { x, y, z } => {
                        *x -= v.x();
                        *y -= v.y();
                        *z -= v.z().unwrap_or(0.0);
                    }
                    Self::FourD { x, y, z, w } => {
                        *x -= v.x();
                        *y -= v.y();
                        *z -= v.z().unwrap_or(0.0);
                        *w -= v.w().unwrap_or(0.0);
                    }
                }
                self
            }
        }
    }

    /// Multiply by `rhs` component-wise.
    ///
    /// Components absent on a vector operand default to 1.
    pub fn mul(&mut self, rhs: impl Into<Operand>) -> &mut Self {
        match rhs.into() {
            Operand::Splat(s) => self.apply(|c| c * s),
            Operand::Vector(v) => {
                match self {
                    Self::TwoD { x, y } => {
                        *x *= v.x();
                        *y *= v.y();
                    }
                    Self::ThreeD { x, y, z } => {
                        *x *= v.x();
                        *y *= v.y();
                        *z *= v.z().unwrap_or(1.0);
                    }
                    Self::FourD { x, y, z, w } => {
                        *x *= v.x();
                        *y *= v.y();
                        *z *= v.z().unwrap_or(1.0);
                        *w *= v.w().unwrap_or(1.0);
                    }
                }
                self
            }
        }
    }

    /// Divide by `rhs` component-wise.
    ///
    /// Components absent on a vector operand default to 1.
    pub fn div(&mut self, rhs: impl Into<Operand>) -> &mut Self {
        match rhs.into() {
            Operand::Splat(s) => self.apply(|c| c / s),
            Operand::Vector(v) => {
                match self {
                    Self::TwoD { x, y } => {
                        *x /= v.x();
                        *y /= v.y();
                    }
                    Self::ThreeD { x, y, z } => {
                        *x /= v.x();
                        *y /= v.y();
                        *z /= v.z().unwrap_or(1.0);
                    }
                    Self::FourD { x, y, z, w } => {
                        *x /= v.x();
                        *y /= v.y();
                        *z /= v.z().unwrap_or(1.0);
                        *w /= v.w().unwrap_or(1.0);
                    }
                }
                self
            }
        }
    }

    /// Value-returning counterpart of a broadcast [`mul`](Self::mul).
    ///
    /// # Example
    ///
    /// ```
    /// use vec_types::Vector;
    ///
    /// let v = Vector::two(1.0, 2.0);
    /// assert_eq!(v.scaled(3.0), Vector::two(3.0, 6.0));
    /// assert_eq!(v, Vector::two(1.0, 2.0)); // receiver untouched
    /// ```
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        let mut out = *self;
        out.mul(factor);
        out
    }
}

impl std::ops::Add for Vector {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        Vector::add(&mut self, rhs);
        self
    }
}

impl std::ops::Sub for Vector {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        Vector::sub(&mut self, rhs);
        self
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        self.scaled(factor)
    }
}

impl std::ops::Neg for Vector {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.apply(|c| -c);
        self
    }
}
