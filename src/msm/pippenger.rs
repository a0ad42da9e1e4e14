//! Pippenger's bucket method (spec §4.6, n > 32): decompose every scalar
//! into signed c-bit digits, sort points into 2^(c-1) buckets by digit
//! magnitude per window (negating the point for a negative digit),
//! collapse each window's buckets via the running-sum trick, then combine
//! windows with doubling between. No teacher equivalent exists (its MSM
//! shape tops out at n = 2); this follows the standard construction
//! spec §4.6 describes directly.

use crate::curve::Jacobian;
use crate::field::Field;

/// `c ~ floor(log2 n) + 2`, clamped to `[4, 9]` (spec §4.6).
fn window_size(n: usize) -> usize {
    let mut log2 = 0usize;
    let mut v = n;
    while v > 1 {
        v >>= 1;
        log2 += 1;
    }
    (log2 + 2).clamp(4, 9)
}

/// Signed c-bit digit decomposition of a 256-bit scalar, LSB-first
/// window order: `Σ digits[i] * 2^(i*c) == scalar`, each digit in
/// `[-2^(c-1), 2^(c-1)]`. A carry out of the final window produces one
/// extra (small) trailing digit.
fn signed_window_digits(bytes: &[u8; 32], c: usize) -> Vec<i32> {
    let num_windows = (256 + c - 1) / c;
    let half = 1i32 << (c - 1);
    let window_max = 1i32 << c;
    let mut digits = Vec::with_capacity(num_windows + 1);
    let mut carry = 0i32;
    for w in 0..num_windows {
        let start = w * c;
        let mut d = 0i32;
        for j in 0..c {
            let bit_index = start + j;
            if bit_index < 256 {
                let bit = (bytes[bit_index / 8] >> (bit_index % 8)) & 1;
                d |= (bit as i32) << j;
            }
        }
        d += carry;
        if d >= half {
            d -= window_max;
            carry = 1;
        } else {
            carry = 0;
        }
        digits.push(d);
    }
    if carry != 0 {
        digits.push(carry);
    }
    digits
}

pub fn msm_pippenger<F: Field>(scalars: &[[u8; 32]], points: &[Jacobian<F>]) -> Jacobian<F> {
    let n = points.len();
    let c = window_size(n);
    let digits: Vec<Vec<i32>> = scalars.iter().map(|s| signed_window_digits(s, c)).collect();
    let num_windows = digits.iter().map(|d| d.len()).max().unwrap_or(0);
    let bucket_count = 1usize << (c - 1);

    let mut total = Jacobian::identity();
    for w in (0..num_windows).rev() {
        for _ in 0..c {
            total = total.dbl();
        }
        // Bucket index 0 is unused (it would mean "digit == 0", which
        // contributes nothing and is skipped below).
        let mut buckets = vec![Jacobian::identity(); bucket_count + 1];
        for i in 0..n {
            if let Some(&d) = digits[i].get(w) {
                if d > 0 {
                    buckets[d as usize] = buckets[d as usize] + points[i];
                } else if d < 0 {
                    buckets[(-d) as usize] = buckets[(-d) as usize] + points[i].neg();
                }
            }
        }
        // Running-sum trick: Sigma k*bucket[k] without a per-bucket
        // scalar multiply. `running` accumulates bucket[k] downward;
        // `window_sum` accumulates the running totals, which telescopes
        // to exactly the weighted sum.
        let mut running = Jacobian::identity();
        let mut window_sum = Jacobian::identity();
        for k in (1..=bucket_count).rev() {
            running = running + buckets[k];
            window_sum = window_sum + running;
        }
        total = total + window_sum;
    }
    total
}
