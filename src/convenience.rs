//! Extension traits for turning bytes and strings into [`BaseN`] values.
//!
//! # Example
//! ```
//! use basen::convenience::{AsBaseN, ToBaseN};
//!
//! assert_eq!("foobar".to_base32().to_string(), "MZXW6YTBOI======");
//! assert_eq!([0xDEu8, 0xAD].to_base16().to_string(), "DEAD");
//! assert_eq!("Zm9vYmFy".as_base64().to_utf8_lossy(), "foobar");
//! ```

use crate::value::BaseN;
use crate::variants::Variant;

/// Encode anything byte-like. Strings contribute their UTF-8 bytes.
pub trait ToBaseN {
    fn to_base_n(&self, variant: Variant) -> BaseN;

    fn to_base16(&self) -> BaseN {
        self.to_base_n(Variant::Base16)
    }

    fn to_base32(&self) -> BaseN {
        self.to_base_n(Variant::Base32)
    }

    fn to_base32_hex(&self) -> BaseN {
        self.to_base_n(Variant::Base32Hex)
    }

    fn to_base64(&self) -> BaseN {
        self.to_base_n(Variant::Base64)
    }

    fn to_base64_url(&self) -> BaseN {
        self.to_base_n(Variant::Base64Url)
    }

    fn to_base64_jws(&self) -> BaseN {
        self.to_base_n(Variant::Base64Jws)
    }
}

impl<T: AsRef<[u8]> + ?Sized> ToBaseN for T {
    fn to_base_n(&self, variant: Variant) -> BaseN {
        BaseN::from_bytes(variant, self.as_ref())
    }
}

/// Treat a string as text that is already encoded.
pub trait AsBaseN {
    fn as_base_n(&self, variant: Variant) -> BaseN;

    fn as_base16(&self) -> BaseN {
        self.as_base_n(Variant::Base16)
    }

    fn as_base32(&self) -> BaseN {
        self.as_base_n(Variant::Base32)
    }

    fn as_base32_hex(&self) -> BaseN {
        self.as_base_n(Variant::Base32Hex)
    }

    fn as_base64(&self) -> BaseN {
        self.as_base_n(Variant::Base64)
    }

    fn as_base64_url(&self) -> BaseN {
        self.as_base_n(Variant::Base64Url)
    }

    fn as_base64_jws(&self) -> BaseN {
        self.as_base_n(Variant::Base64Jws)
    }
}

impl AsBaseN for str {
    fn as_base_n(&self, variant: Variant) -> BaseN {
        BaseN::from_encoded(variant, self)
    }
}
