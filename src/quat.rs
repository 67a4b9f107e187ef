use std::fmt::{self, Display};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num::complex::Complex;
use num::traits::{AsPrimitive, Bounded};
use quat_algebra_base::Component;
use serde::{Deserialize, Serialize};

/// A quaternion with real part `re` and imaginary parts `i`, `j`, `k`.
///
/// Any four values of `T` form a valid quaternion; nothing is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quaternion<T> {
    pub(crate) re: T,
    pub(crate) i: T,
    pub(crate) j: T,
    pub(crate) k: T,
}

impl<T> Quaternion<T> {
    #[inline]
    pub const fn new(re: T, i: T, j: T, k: T) -> Self {
        Quaternion { re, i, j, k }
    }
}

impl<T: Component> Quaternion<T> {
    /// The additive identity.
    #[inline]
    pub fn zero() -> Self {
        Quaternion::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Builds a quaternion from four values of possibly different primitive
    /// types. Each value is converted to `T` on its own with `as`, so
    /// `3.7` becomes `3` for an integer `T` and out-of-range values wrap or
    /// saturate as the cast does.
    #[inline]
    pub fn from_components<A, B, C, D>(re: A, i: B, j: C, k: D) -> Self
    where
        A: AsPrimitive<T>,
        B: AsPrimitive<T>,
        C: AsPrimitive<T>,
        D: AsPrimitive<T>,
    {
        Quaternion::new(re.as_(), i.as_(), j.as_(), k.as_())
    }

    #[inline]
    pub fn real(&self) -> T {
        self.re
    }

    #[inline]
    pub fn set_real(&mut self, v: T) {
        self.re = v;
    }

    /// The imaginary components in `i, j, k` order, as a copy.
    #[inline]
    pub fn imag(&self) -> [T; 3] {
        [self.i, self.j, self.k]
    }

    /// Overwrites all three imaginary components.
    #[inline]
    pub fn set_imag(&mut self, v: [T; 3]) {
        let [i, j, k] = v;
        self.i = i;
        self.j = j;
        self.k = k;
    }

    #[inline]
    pub fn components(&self) -> [T; 4] {
        [self.re, self.i, self.j, self.k]
    }

    pub fn from_scalar_vector(value: quaternion::Quaternion<T>) -> Self {
        let (re, [i, j, k]) = value;
        Quaternion::new(re, i, j, k)
    }

    pub fn to_scalar_vector(&self) -> quaternion::Quaternion<T> {
        (self.re, self.imag())
    }
}

impl<T: Component + Bounded> Quaternion<T> {
    /// The largest value a single component can hold.
    pub fn component_max() -> T {
        T::max_value()
    }
}

impl<T: Component> Default for Quaternion<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Component> From<Quaternion<T>> for [T; 4] {
    fn from(value: Quaternion<T>) -> Self {
        value.components()
    }
}

impl<T, A> From<(A,)> for Quaternion<T>
where
    T: Component,
    A: AsPrimitive<T>,
{
    fn from((re,): (A,)) -> Self {
        Quaternion::new(re.as_(), T::zero(), T::zero(), T::zero())
    }
}

impl<T, A, B> From<(A, B)> for Quaternion<T>
where
    T: Component,
    A: AsPrimitive<T>,
    B: AsPrimitive<T>,
{
    fn from((re, i): (A, B)) -> Self {
        Quaternion::new(re.as_(), i.as_(), T::zero(), T::zero())
    }
}

impl<T, A, B, C> From<(A, B, C)> for Quaternion<T>
where
    T: Component,
    A: AsPrimitive<T>,
    B: AsPrimitive<T>,
    C: AsPrimitive<T>,
{
    fn from((re, i, j): (A, B, C)) -> Self {
        Quaternion::new(re.as_(), i.as_(), j.as_(), T::zero())
    }
}

impl<T, A, B, C, D> From<(A, B, C, D)> for Quaternion<T>
where
    T: Component,
    A: AsPrimitive<T>,
    B: AsPrimitive<T>,
    C: AsPrimitive<T>,
    D: AsPrimitive<T>,
{
    fn from((re, i, j, k): (A, B, C, D)) -> Self {
        Quaternion::from_components(re, i, j, k)
    }
}

/// A complex number `re + im·i` embeds as `(re, im, 0, 0)`.
impl<T, U> From<Complex<U>> for Quaternion<T>
where
    T: Component,
    U: AsPrimitive<T>,
{
    fn from(z: Complex<U>) -> Self {
        Quaternion::new(z.re.as_(), z.im.as_(), T::zero(), T::zero())
    }
}

impl<T: Display> Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{},{})", self.re, self.i, self.j, self.k)
    }
}

impl<T: AbsDiffEq> AbsDiffEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.re.abs_diff_eq(&other.re, epsilon)
            && self.i.abs_diff_eq(&other.i, epsilon)
            && self.j.abs_diff_eq(&other.j, epsilon)
            && self.k.abs_diff_eq(&other.k, epsilon)
    }
}

impl<T: RelativeEq> RelativeEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.re.relative_eq(&other.re, epsilon, max_relative)
            && self.i.relative_eq(&other.i, epsilon, max_relative)
            && self.j.relative_eq(&other.j, epsilon, max_relative)
            && self.k.relative_eq(&other.k, epsilon, max_relative)
    }
}

impl<T: UlpsEq> UlpsEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.re.ulps_eq(&other.re, epsilon, max_ulps)
            && self.i.ulps_eq(&other.i, epsilon, max_ulps)
            && self.j.ulps_eq(&other.j, epsilon, max_ulps)
            && self.k.ulps_eq(&other.k, epsilon, max_ulps)
    }
}
