use std::collections::HashMap;

use crate::encoders::algorithms::bitpack;
use crate::encoders::algorithms::errors::ConfigError;

/// Character appended to fill the last output block.
pub const PADDING: char = '=';

/// Smallest supported alphabet (4 bits per character).
pub const MIN_ALPHABET_LEN: usize = 16;

/// Largest supported alphabet (7 bits per character).
pub const MAX_ALPHABET_LEN: usize = 128;

pub(crate) const BITS_PER_BYTE: u8 = 8;

/// A base-N codec over a power-of-two alphabet.
///
/// Each character of the alphabet carries `log2(len)` bits; its position in
/// the alphabet is its value. Bytes are read as one MSB-first bit stream and
/// cut into symbols of that width, so the same codec handles Base16 (4 bits),
/// Base32 (5), Base64 (6) and 128-character alphabets (7).
///
/// A `Codec` never changes after construction and can be shared freely
/// between threads.
///
/// # Example
///
/// ```
/// use basen::Codec;
///
/// let base32 = Codec::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567", true).unwrap();
/// assert_eq!(base32.encode(b"foob"), "MZXW6YQ=");
/// assert_eq!(base32.decode("MZXW6YQ="), b"foob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    alphabet: String,
    chars: Vec<char>,
    char_to_index: HashMap<char, u8>,
    bits_per_char: u8,
    leftover_bits: u8,
    padding: bool,
}

impl Codec {
    /// Creates a codec for `alphabet`, padding output with `=` when `padding` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the alphabet is blank, has fewer than 16 or
    /// more than 128 characters, or its length is not a power of two.
    pub fn new(alphabet: &str, padding: bool) -> Result<Self, ConfigError> {
        if alphabet.trim().is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        let chars: Vec<char> = alphabet.chars().collect();
        let length = chars.len();

        if length < MIN_ALPHABET_LEN {
            return Err(ConfigError::AlphabetTooShort { length });
        }
        if length > MAX_ALPHABET_LEN {
            return Err(ConfigError::AlphabetTooLong { length });
        }
        if !length.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo { length });
        }

        let bits_per_char = length.trailing_zeros() as u8;

        // First occurrence wins, like a linear index lookup would.
        let mut char_to_index = HashMap::with_capacity(length);
        for (i, &c) in chars.iter().enumerate() {
            char_to_index.entry(c).or_insert(i as u8);
        }

        log::debug!(
            "built base{} codec ({} bits/char, padding {})",
            length,
            bits_per_char,
            if padding { "on" } else { "off" }
        );

        Ok(Codec {
            alphabet: alphabet.to_string(),
            chars,
            char_to_index,
            bits_per_char,
            leftover_bits: BITS_PER_BYTE - bits_per_char,
            padding,
        })
    }

    /// Starts building a codec. Padding defaults to on.
    pub fn builder() -> CodecBuilder {
        CodecBuilder::new()
    }

    /// Encodes bytes to text. Empty input gives an empty string.
    pub fn encode(&self, data: &[u8]) -> String {
        bitpack::encode_bits(data, self)
    }

    /// Decodes text to bytes. Never fails.
    ///
    /// Trailing `=` are ignored, so padded and unpadded text decode the same.
    /// Characters outside the alphabet are not rejected; they decode as the
    /// value -1, which sets their own bits and, depending on where they fall
    /// in the byte, the bits above them. Run a validator first if the input
    /// is untrusted.
    pub fn decode(&self, text: &str) -> Vec<u8> {
        bitpack::decode_bits(text, self)
    }

    /// The alphabet this codec was built from.
    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    /// Number of characters in the alphabet.
    pub fn base(&self) -> usize {
        self.chars.len()
    }

    pub fn bits_per_char(&self) -> u8 {
        self.bits_per_char
    }

    /// Bits of a byte not covered by its first symbol boundary (`8 - bits_per_char`).
    pub fn leftover_bits(&self) -> u8 {
        self.leftover_bits
    }

    /// Whether encoded output keeps its trailing `=`.
    pub fn has_padding(&self) -> bool {
        self.padding
    }

    /// Characters in the smallest byte-aligned output unit.
    ///
    /// Base16: 2, Base32: 8, Base64: 4, 128-character alphabets: 8.
    pub fn chars_per_block(&self) -> usize {
        usize::from(BITS_PER_BYTE / num_integer::gcd(BITS_PER_BYTE, self.bits_per_char))
    }

    /// Length of the padded encoding of `byte_len` bytes.
    ///
    /// Always a multiple of [`chars_per_block`](Self::chars_per_block). When
    /// padding is off the returned text may be shorter.
    pub fn encoded_len(&self, byte_len: usize) -> usize {
        let chars_per_block = self.chars_per_block();
        let blocks_per_byte = usize::from(BITS_PER_BYTE) / chars_per_block;

        (byte_len * blocks_per_byte).div_ceil(usize::from(self.bits_per_char)) * chars_per_block
    }

    /// Number of bytes `text` decodes to.
    pub fn decoded_len(&self, text: &str) -> usize {
        let symbols = text.trim_end_matches(PADDING).chars().count();
        symbols * usize::from(self.bits_per_char) / usize::from(BITS_PER_BYTE)
    }

    /// Decodes a character back to its digit value.
    ///
    /// Returns `None` if the character is not in the alphabet.
    pub fn decode_char(&self, c: char) -> Option<usize> {
        self.char_to_index.get(&c).map(|&i| usize::from(i))
    }

    pub(crate) fn mask(&self) -> u32 {
        (1u32 << self.bits_per_char) - 1
    }

    /// Symbol for a value already masked to `bits_per_char` bits.
    pub(crate) fn symbol(&self, value: u32) -> char {
        self.chars[value as usize]
    }

    /// Value of `c`, or -1 when `c` is not in the alphabet.
    pub(crate) fn symbol_value(&self, c: char) -> i32 {
        self.decode_char(c).map_or(-1, |i| i as i32)
    }
}

/// Builder for [`Codec`].
#[derive(Debug, Clone)]
pub struct CodecBuilder {
    alphabet: Option<String>,
    padding: bool,
}

impl CodecBuilder {
    pub fn new() -> Self {
        CodecBuilder {
            alphabet: None,
            padding: true,
        }
    }

    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    pub fn padding(mut self, padding: bool) -> Self {
        self.padding = padding;
        self
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAlphabet`] if no alphabet was set, otherwise
    /// whatever [`Codec::new`] reports.
    pub fn build(self) -> Result<Codec, ConfigError> {
        let alphabet = self.alphabet.ok_or(ConfigError::EmptyAlphabet)?;
        Codec::new(&alphabet, self.padding)
    }
}

impl Default for CodecBuilder {
    fn default() -> Self {
        Self::new()
    }
}
