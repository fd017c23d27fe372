//! Giphy payload types.
//!
//! Only the fields the gallery renders are modelled; everything else in the
//! Giphy response is ignored during decoding.

use serde::{Deserialize, Serialize};

/// One trending GIF as returned by `/v1/gifs/trending`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gif {
    /// Giphy identifier, unique within a load session
    pub id: String,
    pub images: Images,
}

/// Rendition map. Giphy returns dozens of renditions; we keep the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Images {
    pub original: Rendition,
}

/// A single rendition of an animated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendition {
    pub url: String,
    #[serde(with = "dimension")]
    pub width: u32,
    #[serde(with = "dimension")]
    pub height: u32,
}

impl Gif {
    /// Convenience constructor, mostly for tests and fixtures.
    pub fn new(id: impl Into<String>, url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            images: Images {
                original: Rendition {
                    url: url.into(),
                    width,
                    height,
                },
            },
        }
    }

    pub fn url(&self) -> &str {
        &self.images.original.url
    }

    pub fn width(&self) -> u32 {
        self.images.original.width
    }

    pub fn height(&self) -> u32 {
        self.images.original.height
    }
}

/// One page of results: the envelope of a single trending request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub data: Vec<Gif>,
}

impl Page {
    pub fn new(data: Vec<Gif>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Giphy encodes dimensions as decimal strings (`"480"`). Accept either a
/// string or a number, and always write a string back so snapshots keep the
/// remote payload's shape.
mod dimension {
    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;
    use std::fmt;

    pub fn serialize<S: Serializer>(value: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        deserializer.deserialize_any(DimensionVisitor)
    }

    struct DimensionVisitor;

    impl<'de> Visitor<'de> for DimensionVisitor {
        type Value = u32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a non-negative integer or a string containing one")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::custom(format!("dimension out of range: {}", v)))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::custom(format!("dimension out of range: {}", v)))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
            v.trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid dimension: {:?}", v)))
        }
    }
}
