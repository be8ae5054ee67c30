use num_traits::Float;

/// Round to the nearest integer, halves towards positive infinity
///
/// `-2.5` rounds to `-2` and `2.5` to `3`, unlike [`f64::round`].
pub fn round_half_up<T: Float>(value: T) -> T {
    let half = T::one() / (T::one() + T::one());
    (value + half).floor()
}

/// Round a computed value into a pixel intensity
///
/// Values beyond the `i32` range saturate and NaN becomes 0.
pub fn to_intensity(value: f64) -> i32 {
    round_half_up(value) as i32
}
