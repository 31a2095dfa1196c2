//! The RFC 4648 encodings as named variants of the generic codec.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::core::codec::Codec;

pub const BASE16_ALPHABET: &str = "0123456789ABCDEF";
pub const BASE32_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
pub const BASE32_HEX_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUV";
pub const BASE64_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
pub const BASE64_URL_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// A named base-N encoding.
///
/// Base64-JWS shares the URL-safe alphabet but never emits padding, as
/// required for JSON Web Signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// RFC 4648 section 8: 0-9, A-F
    Base16,
    /// RFC 4648 section 6: A-Z, 2-7
    Base32,
    /// RFC 4648 section 7, extended hex: 0-9, A-V
    Base32Hex,
    /// RFC 4648 section 4: A-Z, a-z, 0-9, +, /
    Base64,
    /// RFC 4648 section 5, URL and filename safe: `-` and `_` replace `+` and `/`
    Base64Url,
    /// URL-safe Base64 without padding
    Base64Jws,
}

macro_rules! static_codec {
    ($name:ident, $alphabet:expr, $padding:expr) => {
        static $name: LazyLock<Codec> = LazyLock::new(|| match Codec::new($alphabet, $padding) {
            Ok(codec) => codec,
            Err(e) => unreachable!("built-in alphabet rejected: {e}"),
        });
    };
}

static_codec!(BASE16, BASE16_ALPHABET, true);
static_codec!(BASE32, BASE32_ALPHABET, true);
static_codec!(BASE32_HEX, BASE32_HEX_ALPHABET, true);
static_codec!(BASE64, BASE64_ALPHABET, true);
static_codec!(BASE64_URL, BASE64_URL_ALPHABET, true);
static_codec!(BASE64_JWS, BASE64_URL_ALPHABET, false);

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Base16,
        Variant::Base32,
        Variant::Base32Hex,
        Variant::Base64,
        Variant::Base64Url,
        Variant::Base64Jws,
    ];

    /// The shared codec for this variant, built on first use.
    pub fn codec(self) -> &'static Codec {
        match self {
            Variant::Base16 => &BASE16,
            Variant::Base32 => &BASE32,
            Variant::Base32Hex => &BASE32_HEX,
            Variant::Base64 => &BASE64,
            Variant::Base64Url => &BASE64_URL,
            Variant::Base64Jws => &BASE64_JWS,
        }
    }

    pub fn alphabet(self) -> &'static str {
        match self {
            Variant::Base16 => BASE16_ALPHABET,
            Variant::Base32 => BASE32_ALPHABET,
            Variant::Base32Hex => BASE32_HEX_ALPHABET,
            Variant::Base64 => BASE64_ALPHABET,
            Variant::Base64Url | Variant::Base64Jws => BASE64_URL_ALPHABET,
        }
    }

    pub fn has_padding(self) -> bool {
        !matches!(self, Variant::Base64Jws)
    }

    /// Registry name, e.g. `base32hex`.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Base16 => "base16",
            Variant::Base32 => "base32",
            Variant::Base32Hex => "base32hex",
            Variant::Base64 => "base64",
            Variant::Base64Url => "base64url",
            Variant::Base64Jws => "base64jws",
        }
    }

    pub fn encode(self, data: &[u8]) -> String {
        self.codec().encode(data)
    }

    pub fn decode(self, text: &str) -> Vec<u8> {
        self.codec().decode(text)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown variant name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant '{}'", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for Variant {
    type Err = UnknownVariant;

    /// Case-insensitive; `-` and `_` are ignored, so `Base64-URL`,
    /// `base64_url` and `base64url` are the same.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        Variant::ALL
            .into_iter()
            .find(|v| v.name() == normalized)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        assert_eq!(Variant::Base16.codec().bits_per_char(), 4);
        assert_eq!(Variant::Base32.codec().chars_per_block(), 8);
        assert_eq!(Variant::Base32Hex.codec().chars_per_block(), 8);
        assert_eq!(Variant::Base64.codec().chars_per_block(), 4);
        assert_eq!(Variant::Base64Url.codec().bits_per_char(), 6);
    }

    #[test]
    fn test_jws_has_no_padding() {
        assert!(!Variant::Base64Jws.has_padding());
        assert!(!Variant::Base64Jws.codec().has_padding());
        assert!(Variant::Base64Url.codec().has_padding());
        assert_eq!(
            Variant::Base64Jws.alphabet(),
            Variant::Base64Url.alphabet()
        );
    }

    #[test]
    fn test_codec_is_shared() {
        assert!(std::ptr::eq(Variant::Base64.codec(), Variant::Base64.codec()));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("base64".parse(), Ok(Variant::Base64));
        assert_eq!("Base64-URL".parse(), Ok(Variant::Base64Url));
        assert_eq!("base32_hex".parse(), Ok(Variant::Base32Hex));
        assert_eq!("BASE64JWS".parse(), Ok(Variant::Base64Jws));
        assert_eq!(
            "base58".parse::<Variant>(),
            Err(UnknownVariant("base58".to_string()))
        );
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse(), Ok(variant));
        }
    }

    #[test]
    fn test_jws_and_url_differ_only_by_padding() {
        let data = [23u8, 239, 219, 23];
        assert_eq!(Variant::Base64Url.encode(&data), "F-_bFw==");
        assert_eq!(Variant::Base64Jws.encode(&data), "F-_bFw");
    }
}
