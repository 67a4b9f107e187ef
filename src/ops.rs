use std::iter::Sum;
use std::ops::*;

use quat_algebra_base::{Component, Promote, Promoted};

use crate::Quaternion;

// In place, same component type

impl<T: Component> AddAssign for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.re = self.re.component_add(rhs.re);
        self.i = self.i.component_add(rhs.i);
        self.j = self.j.component_add(rhs.j);
        self.k = self.k.component_add(rhs.k);
    }
}

impl<T: Component> SubAssign for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.re = self.re.component_sub(rhs.re);
        self.i = self.i.component_sub(rhs.i);
        self.j = self.j.component_sub(rhs.j);
        self.k = self.k.component_sub(rhs.k);
    }
}

impl<'a, T: Component> AddAssign<&'a Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: &'a Quaternion<T>) {
        *self += *rhs;
    }
}

impl<'a, T: Component> SubAssign<&'a Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a Quaternion<T>) {
        *self -= *rhs;
    }
}

// Quaternion ⊕ quaternion. Same-type arithmetic is the `T == U` case, where
// the promoted type is `T` itself.

macro_rules! impl_quaternion_op {
    ($trait: ident, $method: ident, $component_op: ident) => {
        impl<T, U> $trait<Quaternion<U>> for Quaternion<T>
        where
            T: Promote<U>,
        {
            type Output = Quaternion<Promoted<T, U>>;

            #[inline]
            fn $method(self, rhs: Quaternion<U>) -> Self::Output {
                Quaternion::new(
                    T::promote(self.re).$component_op(T::promote_rhs(rhs.re)),
                    T::promote(self.i).$component_op(T::promote_rhs(rhs.i)),
                    T::promote(self.j).$component_op(T::promote_rhs(rhs.j)),
                    T::promote(self.k).$component_op(T::promote_rhs(rhs.k)),
                )
            }
        }

        impl<'a, 'b, T, U> $trait<&'b Quaternion<U>> for &'a Quaternion<T>
        where
            T: Promote<U> + Copy,
            U: Copy,
        {
            type Output = Quaternion<Promoted<T, U>>;

            #[inline]
            fn $method(self, rhs: &'b Quaternion<U>) -> Self::Output {
                (*self).$method(*rhs)
            }
        }
    };
}

impl_quaternion_op!(Add, add, component_add);
impl_quaternion_op!(Sub, sub, component_sub);

// Quaternion ⊕ scalar and scalar ⊕ quaternion. The scalar only meets the real
// component. `s - q` keeps the imaginary components of `q` as they are instead
// of negating them, which is the behavior existing callers rely on.

macro_rules! impl_scalar_ops {
    ($($s: ident),*$(,)?) => {
        $(
            impl<T> Add<$s> for Quaternion<T>
            where
                T: Promote<$s>,
            {
                type Output = Quaternion<Promoted<T, $s>>;

                #[inline]
                fn add(self, rhs: $s) -> Self::Output {
                    Quaternion::new(
                        T::promote(self.re).component_add(T::promote_rhs(rhs)),
                        T::promote(self.i),
                        T::promote(self.j),
                        T::promote(self.k),
                    )
                }
            }

            impl<T> Sub<$s> for Quaternion<T>
            where
                T: Promote<$s>,
            {
                type Output = Quaternion<Promoted<T, $s>>;

                #[inline]
                fn sub(self, rhs: $s) -> Self::Output {
                    Quaternion::new(
                        T::promote(self.re).component_sub(T::promote_rhs(rhs)),
                        T::promote(self.i),
                        T::promote(self.j),
                        T::promote(self.k),
                    )
                }
            }

            impl<T> Add<Quaternion<T>> for $s
            where
                $s: Promote<T>,
            {
                type Output = Quaternion<Promoted<$s, T>>;

                #[inline]
                fn add(self, rhs: Quaternion<T>) -> Self::Output {
                    let cast = <$s as Promote<T>>::promote_rhs;
                    Quaternion::new(
                        <$s as Promote<T>>::promote(self).component_add(cast(rhs.re)),
                        cast(rhs.i),
                        cast(rhs.j),
                        cast(rhs.k),
                    )
                }
            }

            impl<T> Sub<Quaternion<T>> for $s
            where
                $s: Promote<T>,
            {
                type Output = Quaternion<Promoted<$s, T>>;

                #[inline]
                fn sub(self, rhs: Quaternion<T>) -> Self::Output {
                    let cast = <$s as Promote<T>>::promote_rhs;
                    Quaternion::new(
                        <$s as Promote<T>>::promote(self).component_sub(cast(rhs.re)),
                        cast(rhs.i),
                        cast(rhs.j),
                        cast(rhs.k),
                    )
                }
            }
        )*
    };
}

impl_scalar_ops!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Pairwise summation: partial sums are merged like the carries of a binary
/// counter, which keeps floating rounding error at `O(log n)`.
fn pairwise_sum<T, I>(xs: I) -> Quaternion<T>
where
    T: Component,
    I: Iterator<Item = Quaternion<T>>,
{
    let mut stack: Vec<Quaternion<T>> = Vec::new();
    for (n, x) in xs.enumerate() {
        let mut s = x;
        for _ in 0..(n + 1).trailing_zeros() {
            if let Some(prev) = stack.pop() {
                s += prev;
            }
        }
        stack.push(s);
    }
    let mut s = Quaternion::zero();
    for x in stack.into_iter().rev() {
        s += x;
    }
    s
}

impl<T: Component> Sum for Quaternion<T> {
    fn sum<I>(xs: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        pairwise_sum(xs)
    }
}

impl<'a, T: Component> Sum<&'a Quaternion<T>> for Quaternion<T> {
    fn sum<I>(xs: I) -> Self
    where
        I: Iterator<Item = &'a Quaternion<T>>,
    {
        pairwise_sum(xs.copied())
    }
}
