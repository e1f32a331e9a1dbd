use primitive_types::{U256, U512};

/// Integer square root, rounded down.
///
/// Newton's method starting from `ceil(value / 2)`; the estimate decreases
/// monotonically until it reaches `floor(sqrt(value))`.
pub fn isqrt(value: U256) -> U256 {
    if value.is_zero() {
        return U256::zero();
    }
    let two = U256::from(2u8);
    let mut y = value;
    let mut z = value / two + value % two;
    while z < y {
        y = z;
        z = (value / z + z) / two;
    }
    y
}

/// `isqrt` over a 512-bit radicand, used for `amount_a * amount_b`.
///
/// The root of a product of two 256-bit values always fits in 256 bits.
pub(crate) fn isqrt_wide(value: U512) -> U256 {
    if value.is_zero() {
        return U256::zero();
    }
    let two = U512::from(2u8);
    let mut y = value;
    let mut z = value / two + value % two;
    while z < y {
        y = z;
        z = (value / z + z) / two;
    }
    super::narrow(y)
}
