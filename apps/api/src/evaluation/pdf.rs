//! PDF decoding and first-page rasterization.
//!
//! Only the first page is rendered; multi-page resumes are truncated to
//! page one by contract.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use mupdf::{Colorspace, Document, Matrix};
use thiserror::Error;

/// Render scale for the rasterized page. 2x keeps small resume type legible
/// for the vision model without producing oversized payloads.
const RENDER_SCALE: f32 = 2.0;
const JPEG_QUALITY: u8 = 85;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("{0}")]
    Render(#[from] mupdf::Error),

    #[error("JPEG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Decodes a base64 PDF payload and renders its first page to JPEG bytes.
pub fn render_first_page_jpeg(base64_pdf: &str) -> Result<Vec<u8>, PdfError> {
    let pdf_bytes = BASE64.decode(base64_pdf.trim())?;

    let document = Document::from_bytes(&pdf_bytes, "pdf")?;
    let page = document.load_page(0)?;
    let matrix = Matrix::new_scale(RENDER_SCALE, RENDER_SCALE);
    let pixmap = page.to_pixmap(&matrix, &Colorspace::device_rgb(), false, false)?;

    #[allow(clippy::unnecessary_cast)]
    let width = pixmap.width() as u32;
    #[allow(clippy::unnecessary_cast)]
    let height = pixmap.height() as u32;

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY).write_image(
        pixmap.samples(),
        width,
        height,
        ExtendedColorType::Rgb8,
    )?;
    Ok(jpeg)
}

/// Base64-encodes rendered JPEG bytes for inline transmission to the model.
pub fn encode_jpeg_base64(jpeg: &[u8]) -> String {
    BASE64.encode(jpeg)
}

#[cfg(test)]
pub mod test_support {
    use super::BASE64;
    use base64::Engine as _;

    /// Builds a minimal valid single-page PDF with a correct xref table.
    pub fn minimal_pdf() -> Vec<u8> {
        let objects = [
            "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n",
            "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n",
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 200 100] >>\nendobj\n",
        ];

        let mut out = String::from("%PDF-1.4\n");
        let mut offsets = Vec::new();
        for object in objects {
            offsets.push(out.len());
            out.push_str(object);
        }
        let xref_offset = out.len();
        out.push_str("xref\n0 4\n0000000000 65535 f \n");
        for offset in offsets {
            out.push_str(&format!("{offset:010} 00000 n \n"));
        }
        out.push_str(&format!(
            "trailer\n<< /Size 4 /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n"
        ));
        out.into_bytes()
    }

    pub fn minimal_pdf_base64() -> String {
        BASE64.encode(minimal_pdf())
    }
}
