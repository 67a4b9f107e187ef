#[macro_export]
macro_rules! impl_component {
    (wrapping: $($t: ty),*$(,)?) => {
        $(impl Component for $t {
            #[inline]
            fn component_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn component_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }
        })*
    };
    (float: $($t: ty),*$(,)?) => {
        $(impl Component for $t {
            #[inline]
            fn component_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn component_sub(self, rhs: Self) -> Self {
                self - rhs
            }
        })*
    };
}
