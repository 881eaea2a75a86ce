/// Type alias for node labels carried on matrix rows and columns
pub type NodeLabel = String;

/// Type alias for common-link counts
pub type LinkCount = u32;

/// A matrix entry that can be read as "edge present" or "edge absent".
///
/// Only presence matters. A weight of 0.3 and a weight of 42 are both
/// an edge. `None` means the entry has no boolean reading (a missing
/// value, or a float NaN) and is reported as a type error.
pub trait Truthy {
    fn truthiness(&self) -> Option<bool>;
}

impl Truthy for bool {
    fn truthiness(&self) -> Option<bool> {
        Some(*self)
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Truthy for $t {
                fn truthiness(&self) -> Option<bool> {
                    Some(*self != 0)
                }
            }
        )*
    };
}

impl_truthy_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Truthy for f32 {
    fn truthiness(&self) -> Option<bool> {
        if self.is_nan() {
            None
        } else {
            Some(*self != 0.0)
        }
    }
}

impl Truthy for f64 {
    fn truthiness(&self) -> Option<bool> {
        if self.is_nan() {
            None
        } else {
            Some(*self != 0.0)
        }
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn truthiness(&self) -> Option<bool> {
        self.as_ref().and_then(Truthy::truthiness)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn truthiness(&self) -> Option<bool> {
        (**self).truthiness()
    }
}
