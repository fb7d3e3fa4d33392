//! Explicit value casts used by [`Outcome::cast`](super::Outcome::cast).

/// Explicit, caller-visible conversion from `Self` into `U`.
///
/// Unlike [`Into`], a cast may be lossy. The primitive numeric
/// implementations follow `as` semantics: floats truncate toward zero and
/// saturate, integers wrap. Nothing checks whether the value fits.
///
/// `bool` and `char` cast to every integer type, and `u8` casts to `char`,
/// as `as` allows. Other types, including identity conversions such as
/// `String` to `String`, go through [`Outcome::convert`](crate::Outcome::convert)
/// and [`Into`].
///
/// Implement it for your own types to make them castable inside an
/// outcome. A missing implementation is a compile error at the call site.
///
/// # Example
///
/// ```rust
/// use outcome::Cast;
///
/// struct Celsius(i32);
///
/// impl Cast<f64> for Celsius {
///     fn cast(self) -> f64 {
///         self.0 as f64
///     }
/// }
///
/// assert_eq!(Cast::<f64>::cast(Celsius(21)), 21.0);
/// assert_eq!(Cast::<u8>::cast(300_i32), 44);
/// ```
pub trait Cast<U> {
    /// Perform the cast.
    fn cast(self) -> U;
}

macro_rules! impl_numeric_casts {
    ($($from:ty),* $(,)?) => {
        $(
            impl_numeric_casts!(@targets $from =>
                i8, i16, i32, i64, i128, isize,
                u8, u16, u32, u64, u128, usize,
                f32, f64
            );
        )*
    };
    (@targets $from:ty => $($to:ty),*) => {
        $(
            impl Cast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )*
    };
}

impl_numeric_casts!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! impl_integer_casts {
    ($($from:ty),* $(,)?) => {
        $(
            impl_numeric_casts!(@targets $from =>
                i8, i16, i32, i64, i128, isize,
                u8, u16, u32, u64, u128, usize
            );
        )*
    };
}

impl_integer_casts!(bool, char);

impl Cast<char> for u8 {
    #[inline]
    fn cast(self) -> char {
        self as char
    }
}

impl Cast<bool> for bool {
    #[inline]
    fn cast(self) -> bool {
        self
    }
}

impl Cast<char> for char {
    #[inline]
    fn cast(self) -> char {
        self
    }
}

impl Cast<()> for () {
    #[inline]
    fn cast(self) {}
}
