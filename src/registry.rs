//! Maps format identifiers to codecs and sniffs formats from raw bytes.

use crate::error::{Error, Result};
use crate::formats::{Cxlz, Format, Lz01, Lz10, Lz11, Lzss, Prs, VariantCodec};
use once_cell::sync::Lazy;

/// Ordered table of format codecs.
///
/// Registration order is the sniffing order: `identify` returns the first
/// codec that recognizes the data, so formats with longer signatures must be
/// registered ahead of formats with shorter or structural ones.
pub struct FormatRegistry {
    codecs: Vec<Box<dyn VariantCodec>>,
}

impl FormatRegistry {
    pub fn empty() -> Self {
        Self { codecs: Vec::new() }
    }

    /// The built-in codec table: four-byte magics first, one-byte magics
    /// next, the headerless structural checks last.
    pub fn with_default_codecs() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(Cxlz));
        registry.register(Box::new(Lz01));
        registry.register(Box::new(Lz10));
        registry.register(Box::new(Lz11));
        registry.register(Box::new(Prs));
        registry.register(Box::new(Lzss));
        registry
    }

    pub fn register(&mut self, codec: Box<dyn VariantCodec>) {
        self.codecs.push(codec);
    }

    pub fn codecs(&self) -> impl Iterator<Item = &dyn VariantCodec> {
        self.codecs.iter().map(|c| c.as_ref())
    }

    pub fn get(&self, format: Format) -> Option<&dyn VariantCodec> {
        self.codecs().find(|c| c.descriptor().format == format)
    }

    /// Sniff the format of `data`, trying each codec in registration order
    pub fn identify(&self, data: &[u8]) -> Option<Format> {
        self.codecs().find(|c| c.identify(data)).map(|c| c.descriptor().format)
    }

    pub fn can_compress(&self, format: Format) -> bool {
        self.get(format).map_or(false, |c| c.descriptor().supports_encoding)
    }

    pub fn compress(&self, data: &[u8], format: Format) -> Result<Vec<u8>> {
        let codec = self.get(format).ok_or(Error::UnknownFormat)?;
        let desc = codec.descriptor();
        if !desc.supports_encoding {
            return Err(Error::EncodingUnsupported { format: desc.name });
        }
        codec.compress(data)
    }

    /// Sniff and decompress, reporting which format matched
    pub fn decompress(&self, data: &[u8]) -> Result<(Format, Vec<u8>)> {
        let codec = self.codecs().find(|c| c.identify(data)).ok_or(Error::UnknownFormat)?;
        Ok((codec.descriptor().format, codec.decompress(data)?))
    }

    /// Decompress with the format known out-of-band, skipping sniffing
    pub fn decompress_as(&self, data: &[u8], format: Format) -> Result<Vec<u8>> {
        self.get(format).ok_or(Error::UnknownFormat)?.decompress(data)
    }
}

static REGISTRY: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::with_default_codecs);

/// The process-wide registry: built once on first use, read-only afterwards,
/// safe to share across threads.
pub fn registry() -> &'static FormatRegistry {
    &REGISTRY
}
