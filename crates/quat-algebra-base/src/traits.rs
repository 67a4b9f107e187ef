use std::fmt::{Debug, Display};

use num::Zero;
use quat_algebra_proc_macro::promotion_table;

use crate::impl_component;

/// A numeric type that can be stored in a quaternion component.
///
/// Addition and subtraction never panic: integer types wrap around on
/// overflow in both debug and release builds, floats follow IEEE-754.
pub trait Component: Copy + PartialEq + Debug + Display + Zero + 'static {
    fn component_add(self, rhs: Self) -> Self;
    fn component_sub(self, rhs: Self) -> Self;
}

/// The common type of `Self` and `Rhs` for mixed arithmetic.
///
/// Both operands are converted to `Output` independently with `as`, so a
/// conversion may truncate or lose precision exactly like a cast would.
pub trait Promote<Rhs = Self> {
    type Output: Component;
    fn promote(self) -> Self::Output;
    fn promote_rhs(rhs: Rhs) -> Self::Output;
}

pub type Promoted<T, U> = <T as Promote<U>>::Output;

impl_component!(wrapping: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_component!(float: f32, f64);

promotion_table!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::*;

    fn promoted_is<T, U, O>() -> bool
    where
        T: Promote<U>,
        O: 'static,
    {
        TypeId::of::<Promoted<T, U>>() == TypeId::of::<O>()
    }

    #[test]
    fn integer_components_wrap_on_overflow() {
        assert_eq!(i32::MAX.component_add(1), i32::MIN);
        assert_eq!(0u8.component_sub(1), u8::MAX);
        assert_eq!(i8::MIN.component_sub(1), i8::MAX);
    }

    #[test]
    fn float_components_use_native_arithmetic() {
        assert_eq!(1.5f64.component_add(2.25), 3.75);
        assert_eq!(1.0f32.component_sub(0.5), 0.5);
        assert!(f64::INFINITY.component_sub(f64::INFINITY).is_nan());
    }

    #[test]
    fn promotion_matches_usual_arithmetic_conversions() {
        assert!(promoted_is::<i32, f64, f64>());
        assert!(promoted_is::<f64, i32, f64>());
        assert!(promoted_is::<i64, f32, f32>());
        assert!(promoted_is::<f32, f64, f64>());
        assert!(promoted_is::<i32, i64, i64>());
        assert!(promoted_is::<i32, u32, u32>());
        assert!(promoted_is::<i64, u32, i64>());
        assert!(promoted_is::<u8, i16, i16>());
        assert!(promoted_is::<usize, usize, usize>());
    }

    #[test]
    fn each_operand_is_cast_on_its_own() {
        // -1i32 seen as u32 wraps, 3u32 is kept as is
        assert_eq!(<i32 as Promote<u32>>::promote(-1), u32::MAX);
        assert_eq!(<i32 as Promote<u32>>::promote_rhs(3), 3u32);
        assert_eq!(<f32 as Promote<i64>>::promote_rhs(7), 7.0f32);
        assert_eq!(<i64 as Promote<f64>>::promote(-2), -2.0);
    }
}
