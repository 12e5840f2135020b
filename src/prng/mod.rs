pub mod mt19937;

/// A seedable generator of 32-bit words.
///
/// Only `new` and `next_u32` are required; the wider outputs are built from
/// one or two sequential words and add no state of their own.
pub trait Prng {
    fn new(seed: u32) -> Self
    where
        Self: Sized;

    fn next_u32(&mut self) -> u32;

    /// The first word drawn is the high half.
    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    /// A double in `[0.0, 1.0]`, both ends inclusive.
    fn next_f64(&mut self) -> f64 {
        self.next_u64() as f64 / 18446744073709551615.0
    }

    /// A float in `[0.0, 1.0]`, both ends inclusive.
    fn next_f32(&mut self) -> f32 {
        self.next_u32() as f32 / 4294967295.0
    }
}

/// Reinterprets an integer seed as the 32-bit pattern the generator is seeded with.
///
/// Takes the low 32 bits of the two's-complement representation, so negative
/// and oversized seeds are accepted rather than rejected.
pub trait SeedBits {
    fn seed_bits(self) -> u32;
}

macro_rules! impl_seed_bits {
    ($($t:ty),*) => {
        $(
            impl SeedBits for $t {
                #[inline]
                fn seed_bits(self) -> u32 {
                    self as u32
                }
            }
        )*
    };
}

impl_seed_bits!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(u32);

    impl Prng for Counter {
        fn new(seed: u32) -> Self {
            Counter(seed)
        }

        fn next_u32(&mut self) -> u32 {
            let n = self.0;
            self.0 = self.0.wrapping_add(1);
            n
        }
    }

    #[test]
    fn u64_takes_high_word_first() {
        let mut counter = Counter::new(7);
        assert_eq!(counter.next_u64(), (7u64 << 32) | 8);
        assert_eq!(counter.next_u32(), 9);
    }

    #[test]
    fn float_endpoints() {
        assert_eq!(Counter::new(0).next_f32(), 0.0);
        assert_eq!(Counter::new(u32::max_value()).next_f32(), 1.0);
        assert_eq!(Counter::new(0).next_f64(), 0.0);

        // u32::MAX followed by u32::MAX wraps to 0, so build the all-ones u64 directly
        struct Ones;
        impl Prng for Ones {
            fn new(_: u32) -> Self {
                Ones
            }
            fn next_u32(&mut self) -> u32 {
                u32::max_value()
            }
        }
        assert_eq!(Ones::new(0).next_f64(), 1.0);
    }

    #[test]
    fn seed_bits_keeps_low_word() {
        assert_eq!((-1i32).seed_bits(), 0xffff_ffff);
        assert_eq!((-2i64).seed_bits(), 0xffff_fffe);
        assert_eq!(0x1_0000_0005u64.seed_bits(), 5);
        assert_eq!(42u8.seed_bits(), 42);
        assert_eq!(0usize.seed_bits(), 0);
    }
}
