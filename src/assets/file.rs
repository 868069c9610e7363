use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::error::{RavenError, RavenResult};

/// Image bytes picked by the user for one slot.
#[derive(Clone, Debug)]
pub struct ImageFile {
    name: String,
    bytes: Arc<[u8]>,
}

impl ImageFile {
    /// Wrap bytes under a file name; the name's extension drives [`is_image`](Self::is_image).
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, keeping only what an `accept="image/*"` picker would offer.
    pub fn open(path: impl AsRef<Path>) -> RavenResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read image file '{}'", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let file = Self::new(name, bytes);
        if !file.is_image() {
            return Err(RavenError::validation(format!(
                "'{}' is not a recognized image format",
                path.display()
            )));
        }
        Ok(file)
    }

    /// File name without directories.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw file contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` for a zero-byte file.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Format sniffed from the leading bytes.
    pub fn format(&self) -> Option<image::ImageFormat> {
        image::guess_format(&self.bytes).ok()
    }

    /// Whether the name's extension maps to an image type, the way `accept="image/*"` matches.
    pub fn is_image(&self) -> bool {
        self.is_svg_name() || image::ImageFormat::from_path(&self.name).is_ok()
    }

    /// MIME type from the content, falling back to the name for SVG and unsniffable files.
    pub fn mime_type(&self) -> &'static str {
        if let Some(format) = self.format() {
            return format.to_mime_type();
        }
        if self.is_svg_name() || looks_like_svg(&self.bytes) {
            return SVG_MIME;
        }
        image::ImageFormat::from_path(&self.name)
            .map(|f| f.to_mime_type())
            .unwrap_or("application/octet-stream")
    }

    fn is_svg_name(&self) -> bool {
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                ext.eq_ignore_ascii_case("svg") || ext.eq_ignore_ascii_case("svgz")
            })
    }

    /// Pixel dimensions read from the header, without decoding pixels.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        image::ImageReader::new(Cursor::new(&self.bytes[..]))
            .with_guessed_format()
            .ok()?
            .into_dimensions()
            .ok()
    }
}

const SVG_MIME: &str = "image/svg+xml";

/// SVG is text, so `image` cannot sniff it; look for the root element near the start instead.
fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(1024)];
    String::from_utf8_lossy(head).contains("<svg")
}

#[cfg(test)]
#[path = "../../tests/unit/assets/file.rs"]
mod tests;
