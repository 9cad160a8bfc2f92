use crate::fft::log2_pow2;

/// Reverses the least significant `bits` of the given number `n`.
///
/// Taken and modified from: https://github.com/Plonky3/Plonky3/blob/a374139abead1008f84a439e95bb495e81ea4be5/util/src/lib.rs#L67-L76
pub const fn reverse_bits(n: usize, bits: u32) -> usize {
    // NB: The only reason we need overflowing_shr() here as opposed
    // to plain '>>' is to accommodate the case n == num_bits == 0,
    // which would become `0 >> 64`.
    n.reverse_bits().overflowing_shr(usize::BITS - bits).0
}

/// In-place bit-reversal permutation of a slice.
///
/// Moves the element at index `k` to index `reverse_bits(k, log2(n))`. A DIF transform
/// leaves its output in bit-reversed order, this puts it back in natural order.
///
/// ```text
/// Index  Binary   Reversed   Swapped With
/// -----  -------  ---------  -------------
///   0     000       000           -
///   1     001       100           4
///   2     010       010           -
///   3     011       110           6
///   4     100       001           1
///   5     101       101           -
///   6     110       011           3
///   7     111       111           -
/// ```
///
/// The permutation is its own inverse.
///
/// # Panics
/// Panics if the slice length is not a power of two.
pub fn reverse_bit_order<T>(a: &mut [T]) {
    if a.is_empty() {
        return;
    }

    let n = a.len();
    assert!(n.is_power_of_two(), "n must be a power of two");

    let log_n = log2_pow2(n);
    for k in 0..n {
        let rk = reverse_bits(k, log_n);
        // Each pair is visited twice, only swap on the first visit.
        if rk > k {
            a.swap(rk, k);
        }
    }
}
