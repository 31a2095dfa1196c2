//! The generic bit-packing codec.
//!
//! Input bytes form one bit stream, most significant bit first. Encoding cuts
//! the stream into `bits_per_char`-wide symbols; decoding glues symbols back
//! together and cuts every 8 bits. Both directions fold over their input
//! with an `(accumulator, bits)` pair and whatever is left in the
//! accumulator at the end never completed an output unit.

use crate::core::codec::{BITS_PER_BYTE, Codec, PADDING};

pub fn encode_bits(data: &[u8], codec: &Codec) -> String {
    if data.is_empty() {
        return String::new();
    }

    let bits_per_char = u32::from(codec.bits_per_char());
    let mask = codec.mask();
    let padded_len = codec.encoded_len(data.len());

    let mut result = String::with_capacity(padded_len);
    let mut emitted = 0usize;

    let (buffer, bits_held) = data.iter().fold((0u32, 0u32), |(buffer, bits_held), &byte| {
        let buffer = (buffer << BITS_PER_BYTE) | u32::from(byte);
        let mut bits_held = bits_held + u32::from(BITS_PER_BYTE);

        while bits_held >= bits_per_char {
            bits_held -= bits_per_char;
            result.push(codec.symbol((buffer >> bits_held) & mask));
            emitted += 1;
        }

        (buffer & ((1 << bits_held) - 1), bits_held)
    });

    // Stream ended mid-symbol: low-order bits are zero-filled
    if bits_held > 0 {
        result.push(codec.symbol((buffer << (bits_per_char - bits_held)) & mask));
        emitted += 1;
    }

    debug_assert!(emitted <= padded_len);
    for _ in emitted..padded_len {
        result.push(PADDING);
    }

    if !codec.has_padding() {
        let unpadded = result.trim_end_matches(PADDING).len();
        result.truncate(unpadded);
    }

    result
}

pub fn decode_bits(text: &str, codec: &Codec) -> Vec<u8> {
    let trimmed = text.trim_end_matches(PADDING);
    if trimmed.is_empty() {
        return Vec::new();
    }

    let bits_per_char = u32::from(codec.bits_per_char());
    let leftover_bits = u32::from(codec.leftover_bits());

    let mut result = Vec::with_capacity(codec.decoded_len(trimmed));

    // The accumulator is a byte window filled from its high end; `bits_free`
    // counts the low bits not yet written. Values are signed so that a
    // character outside the alphabet (-1) sets every bit it is shifted over.
    let (_partial, _bits_free) = trimmed.chars().fold(
        (0u8, u32::from(BITS_PER_BYTE)),
        |(byte, bits_free), c| {
            let value = codec.symbol_value(c);

            if bits_free > bits_per_char {
                let byte = byte | (value << (bits_free - bits_per_char)) as u8;
                (byte, bits_free - bits_per_char)
            } else {
                result.push(byte | (value >> (bits_per_char - bits_free)) as u8);
                // Low bits of the symbol that did not fit start the next byte
                let carry = (value << (leftover_bits + bits_free)) as u8;
                (carry, bits_free + leftover_bits)
            }
        },
    );

    debug_assert_eq!(result.len(), codec.decoded_len(trimmed));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE32: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
    const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    #[test]
    fn test_empty_in_both_directions() {
        let codec = Codec::new(BASE64, true).unwrap();
        assert_eq!(encode_bits(&[], &codec), "");
        assert!(decode_bits("", &codec).is_empty());
        assert!(decode_bits("====", &codec).is_empty());
    }

    #[test]
    fn test_symbols_straddle_byte_boundaries() {
        // 0xFF 0x00 -> 11111 11100 00000 0(0000)
        let codec = Codec::new(BASE32, true).unwrap();
        assert_eq!(encode_bits(&[0xFF, 0x00], &codec), "74AA====");
        assert_eq!(decode_bits("74AA====", &codec), vec![0xFF, 0x00]);
    }

    #[test]
    fn test_padding_is_stripped_when_disabled() {
        let codec = Codec::new(BASE64, false).unwrap();
        assert_eq!(encode_bits(b"f", &codec), "Zg");
        assert_eq!(encode_bits(b"fo", &codec), "Zm8");
        assert_eq!(encode_bits(b"foo", &codec), "Zm9v");
    }

    #[test]
    fn test_decode_accepts_both_padding_forms() {
        let codec = Codec::new(BASE64, true).unwrap();
        assert_eq!(decode_bits("Zm8=", &codec), b"fo");
        assert_eq!(decode_bits("Zm8", &codec), b"fo");
    }

    #[test]
    fn test_leftover_bits_are_discarded() {
        // 'Z' 'n' = 011001 100111: one full byte, four stray bits
        let codec = Codec::new(BASE64, true).unwrap();
        assert_eq!(decode_bits("Zn", &codec), b"f");
        // A single symbol cannot fill a byte
        assert!(decode_bits("Z", &codec).is_empty());
    }

    #[test]
    fn test_unknown_characters_decode_as_minus_one() {
        let codec = Codec::new(BASE64, true).unwrap();
        // Ending a byte: the right shift of -1 leaves every bit set
        assert_eq!(decode_bits("AAA!", &codec), vec![0x00, 0x00, 0xFF]);
        // Straddling a byte: the carried low bits are set as well
        assert_eq!(decode_bits("A!AA", &codec), vec![0xFF, 0xF0, 0x00]);
        // Starting a byte: the left shift sets only the symbol's own bits
        assert_eq!(decode_bits("!AAA", &codec), vec![0xFC, 0x00, 0x00]);
        assert_eq!(decode_bits("!!!!", &codec), vec![0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_unknown_character_spills_into_earlier_symbols() {
        // Base32: '!' lands in the middle of the first byte and overwrites the
        // bits above it, unlike '7' (31) which only sets its own five
        let codec = Codec::new(BASE32, true).unwrap();
        assert_eq!(decode_bits("A7", &codec), vec![0x07]);
        assert_eq!(decode_bits("A!", &codec), vec![0xFF]);
        assert_eq!(decode_bits("!A", &codec), vec![0xF8]);
    }

    #[test]
    fn test_seven_bit_symbols() {
        let alphabet: String = (0u32..128).filter_map(char::from_u32).collect();
        let codec = Codec::new(&alphabet, true).unwrap();

        // 0x80 -> 1000000 0(000000)
        let encoded = encode_bits(&[0x80], &codec);
        assert_eq!(encoded, "\u{40}\u{0}======");
        assert_eq!(decode_bits(&encoded, &codec), vec![0x80]);

        let data: Vec<u8> = (0..=255).collect();
        let encoded = encode_bits(&data, &codec);
        assert_eq!(encoded.chars().count(), codec.encoded_len(data.len()));
        assert_eq!(decode_bits(&encoded, &codec), data);
    }

    #[test]
    fn test_padding_only_counts_characters() {
        // Multi-byte alphabet characters must not shorten the padding
        let alphabet: String = (0x3041u32..0x3041 + 32).filter_map(char::from_u32).collect();
        let codec = Codec::new(&alphabet, true).unwrap();
        let encoded = encode_bits(b"a", &codec);
        assert_eq!(encoded.chars().count(), 8);
        assert!(encoded.ends_with("======"));
        assert_eq!(decode_bits(&encoded, &codec), b"a");
    }
}
