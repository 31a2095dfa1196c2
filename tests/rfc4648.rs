//! Test vectors from RFC 4648 section 10, plus the JWS example from RFC 7515.

use basen::{Codec, Variant};

const INPUTS: [&str; 7] = ["", "f", "fo", "foo", "foob", "fooba", "foobar"];

fn check(variant: Variant, expected: [&str; 7]) {
    for (input, output) in INPUTS.iter().zip(expected) {
        assert_eq!(
            variant.encode(input.as_bytes()),
            output,
            "{} encode {:?}",
            variant,
            input
        );
        assert_eq!(
            variant.decode(output),
            input.as_bytes(),
            "{} decode {:?}",
            variant,
            output
        );
    }
}

#[test]
fn test_base16_vectors() {
    check(
        Variant::Base16,
        ["", "66", "666F", "666F6F", "666F6F62", "666F6F6261", "666F6F626172"],
    );
}

#[test]
fn test_base32_vectors() {
    check(
        Variant::Base32,
        [
            "",
            "MY======",
            "MZXQ====",
            "MZXW6===",
            "MZXW6YQ=",
            "MZXW6YTB",
            "MZXW6YTBOI======",
        ],
    );
}

#[test]
fn test_base32_hex_vectors() {
    check(
        Variant::Base32Hex,
        [
            "",
            "CO======",
            "CPNG====",
            "CPNMU===",
            "CPNMUOG=",
            "CPNMUOJ1",
            "CPNMUOJ1E8======",
        ],
    );
}

#[test]
fn test_base64_vectors() {
    check(
        Variant::Base64,
        ["", "Zg==", "Zm8=", "Zm9v", "Zm9vYg==", "Zm9vYmE=", "Zm9vYmFy"],
    );
}

#[test]
fn test_base64_url_vectors() {
    check(
        Variant::Base64Url,
        ["", "Zg==", "Zm8=", "Zm9v", "Zm9vYg==", "Zm9vYmE=", "Zm9vYmFy"],
    );
}

#[test]
fn test_base64_jws_vectors() {
    check(
        Variant::Base64Jws,
        ["", "Zg", "Zm8", "Zm9v", "Zm9vYg", "Zm9vYmE", "Zm9vYmFy"],
    );
}

#[test]
fn test_jws_example_bytes() {
    let bytes = [23u8, 239, 219, 23];
    assert_eq!(Variant::Base64Jws.encode(&bytes), "F-_bFw");
    assert_eq!(Variant::Base64Jws.decode("F-_bFw"), bytes);
}

#[test]
fn test_url_safe_characters() {
    let bytes = [0xFBu8, 0xFF];
    assert_eq!(Variant::Base64.encode(&bytes), "+/8=");
    assert_eq!(Variant::Base64Url.encode(&bytes), "-_8=");
}

#[test]
fn test_base16_agrees_with_hex_crate() {
    let data: Vec<u8> = (0..=255).collect();
    assert_eq!(Variant::Base16.encode(&data), hex::encode_upper(&data));

    let lower = Codec::new("0123456789abcdef", true).unwrap();
    assert_eq!(lower.encode(&data), hex::encode(&data));
    assert_eq!(lower.decode(&hex::encode(&data)), data);
}

#[test]
fn test_decode_ignores_padding_setting() {
    // Decoding is the same whether or not the codec pads
    assert_eq!(Variant::Base64Jws.decode("Zm9vYg=="), b"foob");
    assert_eq!(Variant::Base64Url.decode("Zm9vYg"), b"foob");
    assert_eq!(Variant::Base32.decode("MZXW6YQ"), b"foob");
}

#[test]
fn test_characters_outside_alphabet_decode_as_minus_one() {
    // Not an error: the -1 value sets the symbol's bits and those above it
    assert_eq!(Variant::Base64.decode("AAA!"), vec![0x00, 0x00, 0xFF]);
    assert_eq!(Variant::Base64.decode("A!AA"), vec![0xFF, 0xF0, 0x00]);
    assert_eq!(Variant::Base16.decode("0!"), vec![0xFF]);
    assert_eq!(Variant::Base16.decode("!0"), vec![0xF0]);
    // A lowercase hex digit is outside the RFC Base16 alphabet
    assert_eq!(Variant::Base16.decode("0f"), vec![0xFF]);
}
