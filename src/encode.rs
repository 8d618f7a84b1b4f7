//! Shape payload encoding.
//!
//! draw.io stores each library entry's graph model compressed. When it loads a
//! library it decodes the `xml` field with:
//!
//! ```text
//! base64 decode → raw inflate (no zlib header) → percent-decode → parse mxGraphModel
//! ```
//!
//! [`encode_shape`] runs the same pipeline in reverse, and [`decode_payload`]
//! undoes it so payloads can be inspected:
//!
//! ```text
//! icon file ──base64──▶ data URI ──template──▶ mxGraphModel
//!           ──encodeURIComponent──▶ ──deflate raw──▶ ──base64──▶ payload
//! ```

use base64::{Engine as _, engine::general_purpose::STANDARD};
use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use std::io::{Read, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Decoded payload is not UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Characters `encodeURIComponent` leaves alone, the set draw.io decodes with.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build a `data:` URI embedding `content` as base64.
///
/// The marker has no `;base64` parameter; draw.io accepts this form for
/// image styles and it is what existing libraries contain.
pub fn data_uri(media_type: &str, content: &str) -> String {
    format!("data:{},{}", media_type, STANDARD.encode(content.as_bytes()))
}

/// Render the graph model holding a single image vertex of the given size.
pub fn render_template(image: &str, width: u32, height: u32) -> String {
    format!(
        r#"
    <mxGraphModel dx="0" dy="0" grid="1" gridSize="10" guides="1" tooltips="1" connect="1" arrows="1" fold="1" page="1" pageScale="1" pageWidth="827" pageHeight="1169" math="0" shadow="0">
      <root>
        <mxCell id="0" />
        <mxCell id="1" parent="0" />
        <mxCell id="2" value="" style="shape=image;verticalLabelPosition=bottom;verticalAlign=top;imageAspect=1;aspect=fixed;image={image}" vertex="1" parent="1">
          <mxGeometry x="0" y="0" width="{width}" height="{height}" as="geometry" />
        </mxCell>
      </root>
    </mxGraphModel>
  "#
    )
}

/// Percent-encode text the way JavaScript's `encodeURIComponent` does.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Raw-deflate `text` and base64 the compressed bytes.
pub fn compress(text: &str) -> Result<String, EncodeError> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes())?;
    let compressed = encoder.finish()?;
    Ok(STANDARD.encode(compressed))
}

/// Full pipeline: icon content → stored `xml` payload.
pub fn encode_shape(
    content: &str,
    media_type: &str,
    width: u32,
    height: u32,
) -> Result<String, EncodeError> {
    let image = data_uri(media_type, content);
    let model = render_template(&image, width, height);
    compress(&encode_component(&model))
}

/// Inverse of [`encode_shape`]'s last three steps: returns the graph model text.
pub fn decode_payload(payload: &str) -> Result<String, EncodeError> {
    let compressed = STANDARD.decode(payload)?;
    let mut encoded = String::new();
    DeflateDecoder::new(compressed.as_slice()).read_to_string(&mut encoded)?;
    let model = percent_decode_str(&encoded).decode_utf8()?;
    Ok(model.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="80" height="80"><rect width="80" height="80" fill="#FF9900"/></svg>"##;

    #[test]
    fn data_uri_has_media_type_marker_and_base64_body() {
        let uri = data_uri("image/svg+xml", "<svg/>");
        assert_eq!(uri, "data:image/svg+xml,PHN2Zy8+");
    }

    #[test]
    fn template_embeds_image_and_size() {
        let model = render_template("data:image/svg+xml,AAAA", 80, 80);
        assert!(model.contains(r#"image=data:image/svg+xml,AAAA" vertex="1""#));
        assert!(model.contains(r#"width="80" height="80" as="geometry""#));
        assert!(model.trim_start().starts_with("<mxGraphModel"));
        assert!(model.trim_end().ends_with("</mxGraphModel>"));
    }

    #[test]
    fn encode_component_matches_javascript() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("<x id=\"0\"/>"), "%3Cx%20id%3D%220%22%2F%3E");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("a+b/c=d,e;f"), "a%2Bb%2Fc%3Dd%2Ce%3Bf");
        assert_eq!(encode_component("\n"), "%0A");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn compress_output_is_raw_deflate() {
        let payload = compress("hello hello hello").unwrap();
        let bytes = STANDARD.decode(&payload).unwrap();
        // A zlib stream would start with 0x78; raw deflate has no header.
        assert_ne!(bytes[0], 0x78);
        let mut out = String::new();
        DeflateDecoder::new(bytes.as_slice())
            .read_to_string(&mut out)
            .unwrap();
        assert_eq!(out, "hello hello hello");
    }

    #[test]
    fn encoded_shape_decodes_to_model_with_original_content() {
        let payload = encode_shape(SVG, "image/svg+xml", 80, 80).unwrap();
        let model = decode_payload(&payload).unwrap();

        let expected_image = format!("image=data:image/svg+xml,{}", STANDARD.encode(SVG));
        assert!(model.contains(&expected_image));
        assert_eq!(
            model,
            render_template(&data_uri("image/svg+xml", SVG), 80, 80)
        );
    }

    #[test]
    fn encoded_shape_uses_requested_size() {
        let payload = encode_shape(SVG, "image/svg+xml", 48, 32).unwrap();
        let model = decode_payload(&payload).unwrap();
        assert!(model.contains(r#"width="48" height="32""#));
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        assert!(matches!(
            decode_payload("not base64!!"),
            Err(EncodeError::Base64(_))
        ));
    }
}
