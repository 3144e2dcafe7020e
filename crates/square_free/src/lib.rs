/// Smallest-prime-factor table for `2..=max_val`, built once by sieving.
pub struct SpfSieve {
    spf: Vec<u32>,
}

impl SpfSieve {
    pub fn new(max_val: u32) -> Self {
        let limit = max_val as usize;
        let mut spf = vec![0_u32; limit + 1];
        for i in 2..=limit {
            if spf[i] == 0 {
                spf[i] = i as u32;
                // Every multiple below i * i was already stamped by a
                // smaller prime.
                let mut j = i * i;
                while j <= limit {
                    if spf[j] == 0 {
                        spf[j] = i as u32;
                    }
                    j += i;
                }
            }
        }
        Self { spf }
    }

    pub fn limit(&self) -> u32 {
        (self.spf.len() - 1) as u32
    }

    /// Smallest prime dividing `x`, for `2 <= x <= limit`.
    pub fn smallest_factor(&self, x: u32) -> u32 {
        self.spf[x as usize]
    }

    /// Product of the primes dividing `x` an odd number of times, for
    /// `1 <= x <= limit`.
    ///
    /// `a * b` is a perfect square iff the square-free parts of `a` and `b`
    /// are equal.
    pub fn square_free_part(&self, mut x: u32) -> u32 {
        let mut part = 1_u32;
        while x > 1 {
            let p = self.spf[x as usize];
            let mut exponent = 0_u32;
            while x % p == 0 {
                x /= p;
                exponent += 1;
            }
            if exponent % 2 == 1 {
                part *= p;
            }
        }
        part
    }
}

/// Square-free part by trial division, no precomputation.
pub fn square_free_part_trial(mut x: u32) -> u32 {
    let mut part = 1_u32;
    let mut p = 2_u32;
    while p as u64 * p as u64 <= x as u64 {
        if x % p == 0 {
            let mut exponent = 0_u32;
            while x % p == 0 {
                x /= p;
                exponent += 1;
            }
            if exponent % 2 == 1 {
                part *= p;
            }
        }
        p += 1;
    }
    // Whatever remains is prime, with exponent one.
    if x > 1 {
        part *= x;
    }
    part
}
