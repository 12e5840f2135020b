//! The 32-bit Mersenne Twister, seeded with the single-integer `init_genrand`
//! recurrence.
//!
//! MT19937 is statistically strong but **not** cryptographically secure: 624
//! consecutive outputs are enough to reconstruct the whole state (see
//! [`recover`]). Never use it for keys, nonces or tokens.

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};

use super::{Prng, SeedBits};
use crate::utils::errors::{Error, Result};

pub mod recover;

pub const W: u32 = 32;
pub const N: usize = 624;
const M: usize = 397;
const F: u32 = 1812433253;
const A: u32 = 0x9908b0df;
pub const C: u32 = 0xefc60000;
pub const B: u32 = 0x9d2c5680;
pub const U: u32 = 11;
pub const S: u32 = 7;
pub const T: u32 = 15;
pub const L: u32 = 18;
const UPPER_MASK: u32 = 0x80000000;
const LOWER_MASK: u32 = 0x7fffffff;

/// MT19937 generator state: the 624-word buffer and a read cursor.
///
/// `mti == 0` means the current generation is used up (or nothing has been
/// read since seeding) and the next read twists first. Otherwise `mti` words
/// of the current generation have been read.
///
/// Every constructor seeds or validates, so there is no way to read from an
/// unseeded buffer. Cloning gives an independent generator that repeats the
/// original's future output. Mutation needs `&mut self`; to share one
/// generator across threads wrap it in a `Mutex`, or better, give each thread
/// its own.
#[derive(Clone)]
pub struct MT19937 {
    mt: [u32; N],
    mti: usize,
}

impl Prng for MT19937 {
    fn new(seed: u32) -> MT19937 {
        let mut generator = MT19937 { mt: [0; N], mti: 0 };
        generator.init_genrand(seed);
        generator
    }

    fn next_u32(&mut self) -> u32 {
        MT19937::next_u32(self)
    }
}

impl MT19937 {
    /// Reads the next tempered word, twisting first if the generation is used up.
    pub fn next_u32(&mut self) -> u32 {
        if self.mti == 0 {
            self.twist();
        }

        let y = self.mt[self.mti];

        self.mti += 1;
        if self.mti == N {
            self.mti = 0;
        }

        temper(y)
    }

    /// Two sequential words, the first one as the high half.
    pub fn next_u64(&mut self) -> u64 {
        Prng::next_u64(self)
    }

    /// A double in `[0.0, 1.0]` from one 64-bit draw.
    pub fn next_f64(&mut self) -> f64 {
        Prng::next_f64(self)
    }

    /// A float in `[0.0, 1.0]` from one 32-bit draw.
    pub fn next_f32(&mut self) -> f32 {
        Prng::next_f32(self)
    }

    /// Creates a generator from any integer seed, keeping its low 32 bits.
    pub fn seeded<V: SeedBits>(seed: V) -> MT19937 {
        <MT19937 as Prng>::new(seed.seed_bits())
    }

    /// Reseeds in place, discarding the current sequence.
    pub fn seed<V: SeedBits>(&mut self, seed: V) {
        self.init_genrand(seed.seed_bits());
    }

    fn init_genrand(&mut self, seed: u32) {
        self.mt[0] = seed;
        for i in 1..N {
            let prev = self.mt[i - 1];
            self.mt[i] = F
                .wrapping_mul(prev ^ (prev >> (W - 2)))
                .wrapping_add(i as u32);
        }
        self.mti = 0;

        log::debug!("MT19937 seeded with {:#010x}", seed);
    }

    /// Regenerates every word in place.
    ///
    /// Indices wrap, so for `i >= N - M` the `i + M` read sees a word already
    /// rewritten earlier in this same pass.
    fn twist(&mut self) {
        for i in 0..N {
            let i1 = (i + 1) % N;
            let im = (i + M) % N;

            let y = (self.mt[i] & UPPER_MASK) | (self.mt[i1] & LOWER_MASK);
            let mut next = self.mt[im] ^ (y >> 1);
            if y & 1 == 1 {
                next ^= A;
            }
            self.mt[i] = next;
        }

        log::trace!("MT19937 twisted, first word now {:#010x}", self.mt[0]);
    }

    /// Rebuilds a generator from a buffer snapshot and cursor.
    ///
    /// A cursor of `N` is accepted and treated as 0: both mean the current
    /// generation has been fully read.
    pub fn from_state(words: &[u32], index: usize) -> Result<MT19937> {
        if words.len() != N {
            return Err(Error::StateLength {
                expected: N,
                found: words.len(),
            });
        }
        if index > N {
            return Err(Error::CursorOutOfRange { cursor: index });
        }

        let mut mt = [0; N];
        mt.copy_from_slice(words);

        log::debug!("MT19937 restored from snapshot at index {}", index);

        Ok(MT19937 {
            mt,
            mti: index % N,
        })
    }

    pub fn state(&self) -> &[u32; N] {
        &self.mt
    }

    pub fn index(&self) -> usize {
        self.mti
    }
}

/// The output tempering transform applied to each raw buffer word.
#[inline]
pub fn temper(mut y: u32) -> u32 {
    y ^= y >> U;
    y ^= (y << S) & B;
    y ^= (y << T) & C;
    y ^= y >> L;

    y
}

impl fmt::Debug for MT19937 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MT19937")
            .field("mti", &self.mti)
            .field("mt", &&self.mt[..])
            .finish()
    }
}

impl rand::RngCore for MT19937 {
    fn next_u32(&mut self) -> u32 {
        MT19937::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        MT19937::next_u64(self)
    }

    /// Little-endian words; the unused bytes of a final partial word are dropped.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = MT19937::next_u32(self);
            if chunk.len() == 4 {
                LittleEndian::write_u32(chunk, word);
            } else {
                let mut buf = [0u8; 4];
                LittleEndian::write_u32(&mut buf, word);
                let len = chunk.len();
                chunk.copy_from_slice(&buf[..len]);
            }
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> ::std::result::Result<(), rand::Error> {
        rand::RngCore::fill_bytes(self, dest);
        Ok(())
    }
}

impl rand::SeedableRng for MT19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: [u8; 4]) -> MT19937 {
        <MT19937 as Prng>::new(LittleEndian::read_u32(&seed))
    }
}
