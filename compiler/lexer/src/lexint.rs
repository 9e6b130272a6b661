/// Integer literal value as accumulated by the lexer: two 64-bit limbs,
/// enough for any literal the language accepts. Plain value type, cheap
/// to copy into and out of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexInt {
    low: u64,
    high: u64,
}

impl LexInt {
    pub const ZERO: LexInt = LexInt { low: 0, high: 0 };

    pub fn new(high: u64, low: u64) -> Self {
        Self { low, high }
    }

    pub fn low(self) -> u64 {
        self.low
    }

    pub fn high(self) -> u64 {
        self.high
    }

    pub fn as_u128(self) -> u128 {
        (u128::from(self.high) << 64) | u128::from(self.low)
    }

    /// Folds one digit into the value: `self = self * base + digit`.
    /// Returns `false` when the result no longer fits in 128 bits, leaving
    /// the value unchanged.
    #[must_use]
    pub fn checked_accum(&mut self, base: u64, digit: u64) -> bool {
        let accumulated = self
            .as_u128()
            .checked_mul(u128::from(base))
            .and_then(|v| v.checked_add(u128::from(digit)));

        match accumulated {
            Some(value) => {
                self.low = value as u64;
                self.high = (value >> 64) as u64;
                true
            }
            None => false,
        }
    }
}

impl From<u64> for LexInt {
    fn from(value: u64) -> Self {
        Self {
            low: value,
            high: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accum_decimal_digits() {
        let mut value = LexInt::ZERO;
        for digit in [1, 2, 3, 4] {
            assert!(value.checked_accum(10, digit));
        }

        assert_eq!(value, LexInt::from(1234));
        assert_eq!(value.low(), 1234);
        assert_eq!(value.high(), 0);
    }

    #[test]
    fn accum_carries_into_high_limb() {
        // 2^64 = 18446744073709551616
        let mut value = LexInt::ZERO;
        for b in b"18446744073709551616" {
            assert!(value.checked_accum(10, u64::from(b - b'0')));
        }

        assert_eq!(value.low(), 0);
        assert_eq!(value.high(), 1);
        assert_eq!(value.as_u128(), 1u128 << 64);
    }

    #[test]
    fn accum_overflow_is_detected_and_value_kept() {
        let mut value = LexInt::new(u64::MAX, u64::MAX);
        let before = value;

        assert!(!value.checked_accum(10, 6));
        assert_eq!(value, before);
    }

    #[test]
    fn u128_round_trip() {
        let value = LexInt::new(0xDEAD, 0xBEEF);
        assert_eq!(value.as_u128(), (0xDEADu128 << 64) | 0xBEEF);
    }
}
