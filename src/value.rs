//! Values that carry their own encoding.

use std::fmt;

use crate::variants::Variant;

/// Caller-supplied replacement for a variant's encoder.
pub type EncodeFn = fn(&[u8]) -> String;
/// Caller-supplied replacement for a variant's decoder.
pub type DecodeFn = fn(&str) -> Vec<u8>;

#[derive(Debug, Clone)]
enum Source {
    Bytes(Vec<u8>),
    Encoded(String),
}

/// Binary data bound to a [`Variant`].
///
/// A `BaseN` remembers whatever it was created from (bytes or text) and
/// converts on request. Encoding and decoding go through the variant's codec
/// unless an override was installed with [`with_encoder`](Self::with_encoder)
/// or [`with_decoder`](Self::with_decoder). Nothing is cached.
///
/// ```
/// use basen::{BaseN, Variant};
///
/// let value = BaseN::from_bytes(Variant::Base32, b"foobar".to_vec());
/// assert_eq!(value.to_string(), "MZXW6YTBOI======");
/// assert_eq!(value.convert(Variant::Base16).to_string(), "666F6F626172");
/// ```
#[derive(Clone)]
pub struct BaseN {
    variant: Variant,
    source: Source,
    encoder: Option<EncodeFn>,
    decoder: Option<DecodeFn>,
}

impl BaseN {
    /// Wraps raw bytes.
    pub fn from_bytes(variant: Variant, bytes: impl Into<Vec<u8>>) -> Self {
        BaseN {
            variant,
            source: Source::Bytes(bytes.into()),
            encoder: None,
            decoder: None,
        }
    }

    /// Wraps text that is already encoded in `variant`.
    ///
    /// The text is taken as-is. Characters outside the variant's alphabet
    /// decode to garbage rather than an error.
    pub fn from_encoded(variant: Variant, text: impl Into<String>) -> Self {
        BaseN {
            variant,
            source: Source::Encoded(text.into()),
            encoder: None,
            decoder: None,
        }
    }

    /// Replaces the encoder used by [`encoded`](Self::encoded).
    pub fn with_encoder(mut self, encoder: EncodeFn) -> Self {
        self.encoder = Some(encoder);
        self
    }

    /// Replaces the decoder used by [`decoded`](Self::decoded).
    pub fn with_decoder(mut self, decoder: DecodeFn) -> Self {
        self.decoder = Some(decoder);
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The active encoder: the override if set, otherwise the variant codec.
    pub fn encoder(&self) -> impl Fn(&[u8]) -> String + '_ {
        move |data: &[u8]| match self.encoder {
            Some(encode) => encode(data),
            None => self.variant.encode(data),
        }
    }

    /// The active decoder: the override if set, otherwise the variant codec.
    pub fn decoder(&self) -> impl Fn(&str) -> Vec<u8> + '_ {
        move |text: &str| match self.decoder {
            Some(decode) => decode(text),
            None => self.variant.decode(text),
        }
    }

    /// Encoded text. Empty data gives an empty string.
    pub fn encoded(&self) -> String {
        match &self.source {
            Source::Encoded(text) => text.clone(),
            Source::Bytes(bytes) if bytes.is_empty() => String::new(),
            Source::Bytes(bytes) => (self.encoder())(bytes.as_slice()),
        }
    }

    /// Decoded bytes. Empty text gives no bytes.
    pub fn decoded(&self) -> Vec<u8> {
        match &self.source {
            Source::Bytes(bytes) => bytes.clone(),
            Source::Encoded(text) if text.is_empty() => Vec::new(),
            Source::Encoded(text) => (self.decoder())(text.as_str()),
        }
    }

    /// Decoded bytes read as UTF-8, invalid sequences replaced.
    pub fn to_utf8_lossy(&self) -> String {
        String::from_utf8_lossy(&self.decoded()).into_owned()
    }

    /// The same bytes represented in another variant.
    ///
    /// Overrides are not carried over.
    pub fn convert(&self, variant: Variant) -> BaseN {
        BaseN::from_bytes(variant, self.decoded())
    }
}

impl fmt::Display for BaseN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded())
    }
}

impl fmt::Debug for BaseN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseN")
            .field("variant", &self.variant)
            .field("source", &self.source)
            .field("encoder", &self.encoder.map(|_| "custom"))
            .field("decoder", &self.decoder.map(|_| "custom"))
            .finish()
    }
}

/// Two values are equal when they hold the same bytes in the same variant.
impl PartialEq for BaseN {
    fn eq(&self, other: &Self) -> bool {
        self.variant == other.variant && self.decoded() == other.decoded()
    }
}

impl Eq for BaseN {}
