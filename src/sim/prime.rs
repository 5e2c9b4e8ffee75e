//! Prime sequencing for target escalation

/// Trial division up to `floor(sqrt(n))`
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut i: u32 = 2;
    // u64 product so the bound check cannot overflow near u32::MAX
    while (i as u64) * (i as u64) <= n as u64 {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Smallest prime strictly greater than `n`
pub fn next_prime(n: u32) -> u32 {
    let mut candidate = n + 1;
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}
