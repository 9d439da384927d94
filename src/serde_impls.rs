//! Serde integration: paths serialize as their native bytes, exactly as
//! stored, and deserialize from bytes or from UTF-8 strings.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Path, PathBuf, Platform};

impl<P: Platform> Serialize for Path<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

impl<P: Platform> Serialize for PathBuf<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_path().serialize(serializer)
    }
}

struct PathBufVisitor<P>(PhantomData<P>);

impl<'de, P: Platform> Visitor<'de> for PathBufVisitor<P> {
    type Value = PathBuf<P>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("path bytes or string")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(PathBuf::from(v))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        Ok(PathBuf::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(PathBuf::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(PathBuf::from(v))
    }
}

impl<'de, P: Platform> Deserialize<'de> for PathBuf<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_byte_buf(PathBufVisitor(PhantomData))
    }
}

struct PathVisitor<P>(PhantomData<P>);

impl<'de, P: Platform> Visitor<'de> for PathVisitor<P> {
    type Value = &'de Path<P>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("borrowed path bytes or string")
    }

    fn visit_borrowed_bytes<E: de::Error>(self, v: &'de [u8]) -> Result<Self::Value, E> {
        Ok(Path::new(v))
    }

    fn visit_borrowed_str<E: de::Error>(self, v: &'de str) -> Result<Self::Value, E> {
        Ok(Path::new(v))
    }
}

impl<'de: 'a, 'a, P: Platform> Deserialize<'de> for &'a Path<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(PathVisitor(PhantomData))
    }
}
