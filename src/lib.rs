//! Generic RFC 4648 base-N encoding.
//!
//! One bit-packing [`Codec`] handles every power-of-two alphabet from 16 to
//! 128 characters. The named encodings (Base16, Base32, Base32-Hex, Base64,
//! Base64-URL and Base64-JWS) are [`Variant`]s of it.
//!
//! ```
//! use basen::{Codec, Variant};
//!
//! assert_eq!(Variant::Base64.encode(b"foob"), "Zm9vYg==");
//! assert_eq!(Variant::Base64Jws.decode("F-_bFw"), vec![23, 239, 219, 23]);
//!
//! let hex = Codec::new("0123456789abcdef", true).unwrap();
//! assert_eq!(basen::encode(b"\x01\xff", &hex), "01ff");
//! ```

mod core;
mod encoders;
pub mod convenience;
pub mod prelude;
mod value;
mod variants;

pub use crate::core::codec::{Codec, CodecBuilder, MAX_ALPHABET_LEN, MIN_ALPHABET_LEN, PADDING};
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, LoadError, RegistryError, Settings};
pub use crate::encoders::algorithms::{AlphabetNotFoundError, ConfigError, find_closest_alphabet};
pub use crate::value::{BaseN, DecodeFn, EncodeFn};
pub use crate::variants::{
    BASE16_ALPHABET, BASE32_ALPHABET, BASE32_HEX_ALPHABET, BASE64_ALPHABET, BASE64_URL_ALPHABET,
    UnknownVariant, Variant,
};

/// Encodes `data` with `codec`.
pub fn encode(data: &[u8], codec: &Codec) -> String {
    codec.encode(data)
}

/// Decodes `text` with `codec`. Never fails; see [`Codec::decode`].
pub fn decode(text: &str, codec: &Codec) -> Vec<u8> {
    codec.decode(text)
}

/// Like [`encode`], treating a missing buffer as empty.
pub fn encode_opt(data: Option<&[u8]>, codec: &Codec) -> String {
    data.map_or_else(String::new, |data| codec.encode(data))
}

/// Like [`decode`], treating missing text as empty.
pub fn decode_opt(text: Option<&str>, codec: &Codec) -> Vec<u8> {
    text.map_or_else(Vec::new, |text| codec.decode(text))
}
