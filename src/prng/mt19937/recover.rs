//! State recovery from observed output.
//!
//! Tempering is a bijection, so each output word gives back the raw buffer
//! word it came from. A full generation of outputs therefore gives back the
//! whole buffer.

use super::{B, C, L, MT19937, N, S, T, U, W};
use crate::utils::errors::{Error, Result};

// x = y ^ (x >> shift): each pass fixes `shift` more high bits.
fn undo_right_shift_xor(y: u32, shift: u32) -> u32 {
    let mut x = y;
    for _ in 0..(W + shift - 1) / shift {
        x = y ^ (x >> shift);
    }
    x
}

// x = y ^ ((x << shift) & mask): each pass fixes `shift` more low bits.
fn undo_left_shift_xor(y: u32, shift: u32, mask: u32) -> u32 {
    let mut x = y;
    for _ in 0..(W + shift - 1) / shift {
        x = y ^ ((x << shift) & mask);
    }
    x
}

/// Inverts [`temper`](super::temper).
pub fn untemper(y: u32) -> u32 {
    let y = undo_right_shift_xor(y, L);
    let y = undo_left_shift_xor(y, T, C);
    let y = undo_left_shift_xor(y, S, B);
    undo_right_shift_xor(y, U)
}

/// Builds a generator that continues the sequence `outputs` came from.
///
/// `outputs` must start with the first word of a generation, e.g. the first
/// `next_u32` after seeding. Only the first 624 words are used.
pub fn clone_from_outputs(outputs: &[u32]) -> Result<MT19937> {
    if outputs.len() < N {
        return Err(Error::NotEnoughOutputs {
            expected: N,
            found: outputs.len(),
        });
    }

    let state: Vec<u32> = outputs[..N].iter().map(|&y| untemper(y)).collect();

    log::debug!("MT19937 state rebuilt from {} observed outputs", N);

    MT19937::from_state(&state, 0)
}

#[cfg(test)]
mod tests {
    use super::super::{temper, MT19937, N};
    use super::{clone_from_outputs, untemper};
    use crate::prng::Prng;
    use crate::utils::errors::Error;
    use proptest::prelude::*;

    #[test]
    fn untemper_known_words() {
        for &x in &[0u32, 1, 0x8000_0000, 0xffff_ffff, 0xdead_beef, 0x1234_5678] {
            assert_eq!(untemper(temper(x)), x);
        }
    }

    #[test]
    fn cloned_generator_matches_original() {
        let mut original = MT19937::new(0x5eed);

        let observed: Vec<u32> = (0..N).map(|_| original.next_u32()).collect();
        let mut clone = clone_from_outputs(&observed).unwrap();

        for i in 0..2000 {
            assert_eq!(
                clone.next_u32(),
                original.next_u32(),
                "clone diverged at output {}",
                i
            );
        }
    }

    #[test]
    fn clone_ignores_extra_outputs() {
        let mut original = MT19937::new(99);

        let mut observed: Vec<u32> = (0..N).map(|_| original.next_u32()).collect();
        observed.extend_from_slice(&[1, 2, 3]);
        let mut clone = clone_from_outputs(&observed).unwrap();

        assert_eq!(clone.next_u32(), original.next_u32());
    }

    #[test]
    fn clone_needs_a_full_generation() {
        let outputs = vec![0u32; N - 1];
        assert_eq!(
            clone_from_outputs(&outputs).unwrap_err(),
            Error::NotEnoughOutputs {
                expected: N,
                found: N - 1
            }
        );
    }

    proptest! {
        #[test]
        fn untemper_inverts_temper(x in any::<u32>()) {
            prop_assert_eq!(untemper(temper(x)), x);
            prop_assert_eq!(temper(untemper(x)), x);
        }
    }
}
