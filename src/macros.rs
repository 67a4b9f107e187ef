/// Builds a quaternion from zero to four components of any primitive types.
/// Missing trailing components are zero.
///
/// ```
/// use quat_algebra::{Quaternion, quat};
///
/// let q = quat!(f64; 1i32, 2i64, 3.5f32);
/// assert_eq!(q, Quaternion::new(1.0, 2.0, 3.5, 0.0));
///
/// let p: Quaternion<i32> = quat!(1, 2);
/// assert_eq!(p, Quaternion::new(1, 2, 0, 0));
/// ```
#[macro_export]
macro_rules! quat {
    ($t: ty;) => {
        $crate::Quaternion::<$t>::zero()
    };
    ($t: ty; $($c: expr),+ $(,)?) => {
        $crate::Quaternion::<$t>::from(($($c,)+))
    };
    () => {
        $crate::Quaternion::zero()
    };
    ($($c: expr),+ $(,)?) => {
        $crate::Quaternion::from(($($c,)+))
    };
}
