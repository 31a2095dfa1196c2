//! Property tests over every supported alphabet size.

use basen::{Codec, Variant};
use proptest::prelude::*;

/// `len` distinct characters from the Latin Extended blocks.
fn alphabet_of(len: usize) -> String {
    (0x100u32..).filter_map(char::from_u32).take(len).collect()
}

fn codec_strategy() -> impl Strategy<Value = Codec> {
    (prop::sample::select(vec![16usize, 32, 64, 128]), any::<bool>())
        .prop_map(|(len, padding)| Codec::new(&alphabet_of(len), padding).unwrap())
}

fn variant_strategy() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

proptest! {
    #[test]
    fn roundtrip_any_alphabet(codec in codec_strategy(), data in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(codec.decode(&codec.encode(&data)), data);
    }

    #[test]
    fn roundtrip_named_variants(variant in variant_strategy(), data in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(variant.decode(&variant.encode(&data)), data);
    }

    #[test]
    fn padded_length_is_block_aligned(len in prop::sample::select(vec![16usize, 32, 64, 128]), data in prop::collection::vec(any::<u8>(), 0..128)) {
        let codec = Codec::new(&alphabet_of(len), true).unwrap();
        let chars = codec.encode(&data).chars().count();
        prop_assert_eq!(chars % codec.chars_per_block(), 0);
        prop_assert_eq!(chars, codec.encoded_len(data.len()));
    }

    #[test]
    fn decode_accepts_padded_and_stripped(variant in variant_strategy(), data in prop::collection::vec(any::<u8>(), 0..64)) {
        let encoded = variant.encode(&data);
        let stripped = encoded.trim_end_matches('=');
        prop_assert_eq!(variant.decode(&encoded), variant.decode(stripped));
    }

    #[test]
    fn decoded_length_matches_floor(variant in variant_strategy(), text in "[A-Za-z0-9]{0,64}") {
        let codec = variant.codec();
        let expected = text.chars().count() * usize::from(codec.bits_per_char()) / 8;
        prop_assert_eq!(codec.decode(&text).len(), expected);
    }

    #[test]
    fn decode_never_panics(variant in variant_strategy(), text in ".{0,64}") {
        let _ = variant.decode(&text);
    }
}
