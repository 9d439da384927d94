//! The encoding-conversion boundary between native path bytes and portable
//! string forms.
//!
//! A [`Codec`] translates in both directions. The process keeps one active
//! converter, initialized lazily to UTF-8 on first use and replaceable with
//! [`imbue`], which returns the previous converter so callers can restore
//! it. Every conversion entry point also has a `_with` variant taking an
//! explicit converter for callers that must not depend on process-wide
//! state; establish the active converter before concurrent conversions
//! begin and do not reconfigure it while they run.
//!
//! ```
//! use std::sync::Arc;
//! use portable_path::codec::{self, Latin1Codec};
//!
//! let previous = codec::imbue(Arc::new(Latin1Codec));
//! // ... conversions now run through Latin-1 ...
//! codec::imbue(previous);
//! ```

use std::error;
use std::fmt;
use std::mem;
use std::sync::{Arc, OnceLock, RwLock};

/// Converter between the native byte form of paths and portable text.
///
/// `decode` maps native bytes to text; `encode` maps text back to native
/// bytes. Implementations must be exact: a sequence that cannot be
/// translated is an [`EncodingError`], never a silent substitution.
pub trait Codec: fmt::Debug + Send + Sync {
    /// Label identifying the converter, used in error messages.
    fn name(&self) -> &str;

    /// Converts native path bytes into portable text.
    fn decode(&self, bytes: &[u8]) -> Result<String, EncodingError>;

    /// Converts portable text into native path bytes.
    fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError>;
}

/// Strict UTF-8 converter; the platform default.
#[derive(Copy, Clone, Debug, Default)]
pub struct Utf8Codec;

impl Codec for Utf8Codec {
    fn name(&self) -> &str {
        "utf-8"
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_owned()),
            Err(e) => Err(EncodingError::decode(self.name(), e.valid_up_to())),
        }
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        Ok(text.as_bytes().to_vec())
    }
}

/// ISO-8859-1 converter: every byte is the code point of the same value,
/// so decoding is total and encoding fails on characters above U+00FF.
#[derive(Copy, Clone, Debug, Default)]
pub struct Latin1Codec;

impl Codec for Latin1Codec {
    fn name(&self) -> &str {
        "latin-1"
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        Ok(bytes.iter().map(|b| *b as char).collect())
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        let mut out = Vec::with_capacity(text.len());
        for (i, ch) in text.chars().enumerate() {
            if ch as u32 > 0xFF {
                return Err(EncodingError::encode(self.name(), ch, i));
            }
            out.push(ch as u8);
        }
        Ok(out)
    }
}

/// Looks a converter up by label, the fallible construction point for
/// converters. An unsupported label is a [`ConfigurationError`], surfaced
/// here at first use rather than at program start.
///
/// ```
/// use portable_path::codec;
///
/// assert!(codec::lookup("utf-8").is_ok());
/// assert!(codec::lookup("shift-jis").is_err());
/// ```
pub fn lookup(label: &str) -> Result<Arc<dyn Codec>, ConfigurationError> {
    match label.to_ascii_lowercase().as_str() {
        "utf-8" | "utf8" => Ok(Arc::new(Utf8Codec)),
        "latin-1" | "latin1" | "iso-8859-1" => Ok(Arc::new(Latin1Codec)),
        _ => Err(ConfigurationError {
            label: label.to_owned(),
        }),
    }
}

fn registry() -> &'static RwLock<Arc<dyn Codec>> {
    static ACTIVE: OnceLock<RwLock<Arc<dyn Codec>>> = OnceLock::new();
    ACTIVE.get_or_init(|| RwLock::new(Arc::new(Utf8Codec)))
}

/// Returns the process-wide active converter.
pub fn active() -> Arc<dyn Codec> {
    match registry().read() {
        Ok(guard) => Arc::clone(&guard),
        Err(poisoned) => Arc::clone(&poisoned.into_inner()),
    }
}

/// Installs `codec` as the process-wide active converter and returns the
/// previously active one.
pub fn imbue(codec: Arc<dyn Codec>) -> Arc<dyn Codec> {
    let mut guard = match registry().write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    mem::replace(&mut *guard, codec)
}

/// Decodes UTF-16 units into text. An unpaired surrogate is an
/// [`EncodingError`].
pub fn decode_wide(units: &[u16]) -> Result<String, EncodingError> {
    let mut out = String::with_capacity(units.len());
    for (i, result) in char::decode_utf16(units.iter().copied()).enumerate() {
        match result {
            Ok(ch) => out.push(ch),
            Err(_) => return Err(EncodingError::unpaired_surrogate(i)),
        }
    }
    Ok(out)
}

/// Encodes text as UTF-16 units.
pub fn encode_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// A character sequence could not be translated between native and
/// portable forms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodingError {
    codec: String,
    kind: EncodingErrorKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum EncodingErrorKind {
    /// Native bytes were malformed for the converter
    Decode { valid_up_to: usize },
    /// A character is unrepresentable in the native encoding
    Encode { ch: char, at: usize },
    /// A wide string contained an unpaired surrogate
    UnpairedSurrogate { at: usize },
}

impl EncodingError {
    /// Error for native bytes that are malformed past `valid_up_to`.
    pub fn decode(codec: &str, valid_up_to: usize) -> Self {
        Self {
            codec: codec.to_owned(),
            kind: EncodingErrorKind::Decode { valid_up_to },
        }
    }

    /// Error for a character the native encoding cannot represent.
    pub fn encode(codec: &str, ch: char, at: usize) -> Self {
        Self {
            codec: codec.to_owned(),
            kind: EncodingErrorKind::Encode { ch, at },
        }
    }

    /// Error for an unpaired surrogate in a wide string.
    pub fn unpaired_surrogate(at: usize) -> Self {
        Self {
            codec: "utf-16".to_owned(),
            kind: EncodingErrorKind::UnpairedSurrogate { at },
        }
    }

    /// Label of the converter that reported the failure.
    pub fn codec(&self) -> &str {
        &self.codec
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EncodingErrorKind::Decode { valid_up_to } => write!(
                f,
                "malformed {} sequence in native path after byte {}",
                self.codec, valid_up_to
            ),
            EncodingErrorKind::Encode { ch, at } => write!(
                f,
                "character {:?} at position {} is not representable in {}",
                ch, at, self.codec
            ),
            EncodingErrorKind::UnpairedSurrogate { at } => {
                write!(f, "unpaired surrogate at unit {} in wide string", at)
            }
        }
    }
}

impl error::Error for EncodingError {}

/// A converter could not be constructed or initialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigurationError {
    label: String,
}

impl ConfigurationError {
    /// The label no converter is registered for.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no converter available for label {:?}", self.label)
    }
}

impl error::Error for ConfigurationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_utf8() {
        let codec = Utf8Codec;
        let bytes = codec.encode("/tmp/caf\u{e9}").unwrap();
        assert_eq!(codec.decode(&bytes).unwrap(), "/tmp/caf\u{e9}");
    }

    #[test]
    fn should_reject_malformed_utf8_bytes() {
        let err = Utf8Codec.decode(b"ok\xffbad").unwrap_err();
        assert_eq!(err.codec(), "utf-8");
        assert!(err.to_string().contains("after byte 2"));
    }

    #[test]
    fn should_map_latin1_bytes_one_to_one() {
        let codec = Latin1Codec;
        assert_eq!(codec.decode(b"caf\xe9").unwrap(), "caf\u{e9}");
        assert_eq!(codec.encode("caf\u{e9}").unwrap(), b"caf\xe9");

        let err = codec.encode("\u{2603}").unwrap_err();
        assert_eq!(err.codec(), "latin-1");
    }

    #[test]
    fn should_look_up_known_labels_only() {
        assert_eq!(lookup("UTF-8").unwrap().name(), "utf-8");
        assert_eq!(lookup("iso-8859-1").unwrap().name(), "latin-1");

        let err = lookup("ebcdic").unwrap_err();
        assert_eq!(err.label(), "ebcdic");
    }

    #[test]
    fn should_round_trip_wide_strings() {
        let units = encode_wide("a\u{10000}b");
        assert_eq!(decode_wide(&units).unwrap(), "a\u{10000}b");

        // A lone high surrogate cannot decode
        assert!(decode_wide(&[0xD800]).is_err());
    }

    #[test]
    fn should_return_previous_codec_from_imbue() {
        let previous = imbue(Arc::new(Latin1Codec));
        assert_eq!(active().name(), "latin-1");
        let replaced = imbue(previous);
        assert_eq!(replaced.name(), "latin-1");
    }
}
