use std::io::{self, Read};

use byteorder::{ByteOrder, LittleEndian};

use crate::prng::Prng;

/// Byte-at-a-time view of a generator's output.
///
/// Each word is split into its four little-endian bytes, low byte first.
/// Bytes left over from a word are handed out before the next word is drawn,
/// so no output is skipped.
pub struct ByteStream<P: Prng> {
    prng: P,
    word: [u8; 4],
    used: usize,
}

impl<P: Prng> ByteStream<P> {
    pub fn new(prng: P) -> ByteStream<P> {
        ByteStream {
            prng,
            word: [0; 4],
            used: 4,
        }
    }

    pub fn gen_rand_byte(&mut self) -> u8 {
        if self.used == 4 {
            LittleEndian::write_u32(&mut self.word, self.prng.next_u32());
            self.used = 0;
        }

        let byte = self.word[self.used];
        self.used += 1;
        byte
    }

    pub fn get_ref(&self) -> &P {
        &self.prng
    }

    /// Gives back the generator. Unread bytes of the current word are lost.
    pub fn into_inner(self) -> P {
        self.prng
    }
}

impl<P: Prng> Iterator for ByteStream<P> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.gen_rand_byte())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::max_value(), None)
    }
}

impl<P: Prng> Read for ByteStream<P> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // drain the partial word, then whole words straight into buf
        let mut filled = 0;
        while self.used < 4 && filled < buf.len() {
            buf[filled] = self.gen_rand_byte();
            filled += 1;
        }

        let whole = (buf.len() - filled) / 4 * 4;
        for chunk in buf[filled..filled + whole].chunks_mut(4) {
            LittleEndian::write_u32(chunk, self.prng.next_u32());
        }
        filled += whole;

        for byte in &mut buf[filled..] {
            *byte = self.gen_rand_byte();
        }

        Ok(buf.len())
    }
}
