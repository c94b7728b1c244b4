//! Arbitrary-base encoding of byte buffers.
//!
//! The input is read as a big-endian unsigned integer and rewritten in the
//! alphabet's base. Leading zero bytes are kept: each one becomes a leading
//! zero symbol, so `[0, 0, 255]` in base 10 encodes to `"00255"`.

use crate::Alphabet;

/// Encodes byte buffers into strings over an [`Alphabet`].
#[derive(Debug, Clone)]
pub struct Codec {
    alphabet: Alphabet,
    /// `ln(256) / ln(base)`, output digits per input byte.
    factor: f64,
}

impl Codec {
    /// Creates a codec for `alphabet`.
    pub fn new(alphabet: Alphabet) -> Self {
        let factor = 256f64.ln() / (alphabet.base() as f64).ln();
        Self { alphabet, factor }
    }

    /// Returns the alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the number of output digits produced per input byte.
    pub fn expansion_factor(&self) -> f64 {
        self.factor
    }

    /// Upper bound on the digits needed for `byte_len` non-zero-prefixed bytes.
    ///
    /// Each leading zero byte adds exactly one symbol on top of this.
    pub fn max_encoded_len(&self, byte_len: usize) -> usize {
        (byte_len as f64 * self.factor) as usize + 1
    }

    /// Encodes `input` as a string over the alphabet.
    ///
    /// # Panics
    ///
    /// Panics if the working buffer overflows, which the logarithmic sizing
    /// rules out.
    pub fn encode(&self, input: &[u8]) -> String {
        if input.is_empty() {
            return String::new();
        }

        let zeroes = input.iter().take_while(|&&b| b == 0).count();
        let rest = &input[zeroes..];

        let size = self.max_encoded_len(rest.len());
        let mut digits = vec![0u8; size];
        let base = self.alphabet.base() as u32;

        // Positions at the tail of `digits` holding significant digits.
        let mut length = 0;
        for &byte in rest {
            // digits = digits * 256 + byte
            let mut carry = u32::from(byte);
            let mut touched = 0;
            for slot in digits.iter_mut().rev() {
                if carry == 0 && touched >= length {
                    break;
                }
                carry += 256 * u32::from(*slot);
                // carry % base < 255
                *slot = (carry % base) as u8;
                carry /= base;
                touched += 1;
            }

            assert!(carry == 0, "non-zero carry: base conversion buffer undersized");
            length = touched;
        }

        let significant = digits[size - length..]
            .iter()
            .skip_while(|&&digit| digit == 0);

        let mut out = String::with_capacity(zeroes + length);
        out.extend(std::iter::repeat_n(self.alphabet.zero(), zeroes));
        out.extend(significant.map(|&digit| self.alphabet.symbol(digit)));
        out
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(Alphabet::default())
    }
}
