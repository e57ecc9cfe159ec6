//! Shared helpers for integration tests.

/// Splitmix64, used to generate reproducible pseudo-random point sets
/// without depending on an external RNG crate.
pub fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// A small deterministic pseudo-random point cloud within `[-bound, bound]`.
pub fn random_points(n: usize, bound: i128, seed: u64) -> Vec<exactgeom::point::Point> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            let x = (splitmix64(&mut state) as i128 % (2 * bound + 1)) - bound;
            let y = (splitmix64(&mut state) as i128 % (2 * bound + 1)) - bound;
            exactgeom::point::Point::new(x, y, 40)
        })
        .collect()
}
