/// Seed used when none (or zero) is supplied
pub const DEFAULT_SEED: u32 = 12345;

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Xorshift has a fixed point at zero; never hand it one.
#[inline]
pub fn sanitize_seed(seed: u32) -> u32 {
    if seed == 0 { DEFAULT_SEED } else { seed }
}

/// `+magnitude` or `-magnitude` with equal odds
#[inline]
pub fn random_sign(state: &mut u32, magnitude: i32) -> i32 {
    if xorshift32(state) & 1 == 0 { magnitude } else { -magnitude }
}

/// Uniform integer in `[lo, hi]` (inclusive). `lo > hi` returns `lo`.
#[inline]
pub fn random_range(state: &mut u32, lo: i32, hi: i32) -> i32 {
    if hi <= lo {
        return lo;
    }
    let span = (i64::from(hi) - i64::from(lo)) as u64 + 1;
    (i64::from(lo) + (u64::from(xorshift32(state)) % span) as i64) as i32
}
