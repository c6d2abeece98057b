//! A lazy, unbounded sequence of primes.

/// Iterator over the primes `2, 3, 5, 7, ...`.
///
/// Each candidate is checked by trial division against the primes found so
/// far, stopping at the square root.
#[derive(Clone, Debug, Default)]
pub struct Primes {
    found: Vec<u64>,
}

impl Primes {
    /// Creates a fresh sequence starting at 2.
    #[must_use]
    pub fn new() -> Self {
        Self { found: Vec::new() }
    }

    fn is_prime(&self, candidate: u64) -> bool {
        self.found
            .iter()
            .take_while(|&&p| p * p <= candidate)
            .all(|&p| candidate % p != 0)
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let mut candidate = match self.found.last() {
            None => 2,
            Some(2) => 3,
            Some(&p) => p + 2,
        };
        while !self.is_prime(candidate) {
            candidate = candidate.checked_add(2)?;
        }
        self.found.push(candidate);
        Some(candidate)
    }
}
