use std::io::{ErrorKind, Read};
use std::slice;

/// Iterates over the bits of everything a `Read` yields, most significant bit first.
///
/// ## Example of usage
/// ```rust
/// use stegafile_core::BitIterator;
///
/// let bits: Vec<bool> = BitIterator::new(&[0b1000_0001u8][..]).collect();
/// assert_eq!(
///     bits,
///     [true, false, false, false, false, false, false, true]
/// );
/// ```
pub struct BitIterator<R> {
    i: u32,
    reader: R,
    byte: Option<u8>,
}

impl<R> BitIterator<R> {
    pub fn new(reader: R) -> Self {
        BitIterator {
            i: 0,
            reader,
            byte: None,
        }
    }
}

impl<R> Iterator for BitIterator<R>
where
    R: Read,
{
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = (self.i % 8) as u8;
        if bit == 0 {
            self.byte = loop {
                let mut b = 0;
                match self.reader.read(slice::from_mut(&mut b)) {
                    Ok(0) => break None,
                    Ok(..) => break Some(b),
                    Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(_) => break None,
                }
            };
        }
        let byte = self.byte?;
        self.i += 1;

        Some((byte >> (7 - bit)) & 1 == 1)
    }
}

/// flattens bytes into bits, 8 per byte, most significant bit first
pub fn to_bits(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    bits.extend(BitIterator::new(bytes));
    bits
}
