/// Computes `floor(sqrt(value))` with the digit-by-digit method.
///
/// Works from the most significant bit pair downward, accepting one result bit per
/// step, so sizing is bit-identical on every platform. No floating point is involved.
///
/// # Examples
///
/// ```
/// use floodsquare::integer_square_root;
///
/// assert_eq!(integer_square_root(64), 8);
/// assert_eq!(integer_square_root(65), 8);
/// assert_eq!(integer_square_root(u32::MAX), 65535);
/// ```
pub const fn integer_square_root(mut value: u32) -> u32 {
    let mut root = 0u32;
    let mut bit = 0x8000u32;
    let mut shift = 15u32;

    loop {
        // (2 * root + bit) * bit, with bit == 1 << shift. Never exceeds 2^32 - 1.
        let trial = ((root << 1) + bit) << shift;
        if value >= trial {
            root += bit;
            value -= trial;
        }

        bit >>= 1;
        if bit == 0 {
            return root;
        }
        shift -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_floor_sqrt(n: u32) {
        let r = integer_square_root(n) as u64;
        let n = n as u64;
        assert!(r * r <= n, "isqrt({n}) = {r} is too large");
        assert!((r + 1) * (r + 1) > n, "isqrt({n}) = {r} is too small");
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(2, 1)]
    #[case(3, 1)]
    #[case(4, 2)]
    #[case(8, 2)]
    #[case(32, 5)]
    #[case(88, 9)]
    #[case(144, 12)]
    #[case(65535 * 65535, 65535)]
    #[case(u32::MAX, 65535)]
    fn known_values(#[case] input: u32, #[case] expected: u32) {
        assert_eq!(integer_square_root(input), expected);
    }

    #[test]
    fn perfect_squares_and_neighbours() {
        for r in (0u32..=65535).step_by(97).chain([65534, 65535]) {
            let square = r * r;
            assert_eq!(integer_square_root(square), r);
            if square > 0 {
                assert_eq!(integer_square_root(square - 1), r - 1);
            }
            if let Some(next) = square.checked_add(1) {
                assert_floor_sqrt(next);
            }
        }
    }

    #[rstest]
    // Primes just below 2^31 and 2^32.
    #[case(2_147_483_629)]
    #[case(2_147_483_647)]
    #[case(4_294_967_291)]
    fn large_primes(#[case] n: u32) {
        assert_floor_sqrt(n);
    }

    #[test]
    fn small_range_is_exact() {
        for n in 0..100_000 {
            assert_floor_sqrt(n);
        }
    }
}
