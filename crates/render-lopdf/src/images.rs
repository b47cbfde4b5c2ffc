//! Image resources as PDF XObjects.

use crate::RenderError;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::{ColorType, ImageFormat};
use log::debug;
use lopdf::{Stream, dictionary};
use std::io::Write;

/// An encoded image XObject plus its pixel size.
pub(crate) struct ImageXObject {
    pub stream: Stream,
    pub width: u32,
    pub height: u32,
}

/// Builds an image XObject from encoded file bytes.
///
/// Baseline RGB and grayscale JPEGs are embedded as-is with `DCTDecode`;
/// anything else is decoded and stored as deflated 8-bit RGB.
pub(crate) fn image_xobject(src: &str, bytes: &[u8]) -> Result<ImageXObject, RenderError> {
    let decode_err = |e: image::ImageError| RenderError::Image {
        src: src.to_string(),
        message: e.to_string(),
    };
    let format = image::guess_format(bytes).map_err(decode_err)?;
    let decoded = image::load_from_memory_with_format(bytes, format).map_err(decode_err)?;
    let (width, height) = (decoded.width(), decoded.height());

    let passthrough_space = match (format, decoded.color()) {
        (ImageFormat::Jpeg, ColorType::Rgb8) => Some("DeviceRGB"),
        (ImageFormat::Jpeg, ColorType::L8) => Some("DeviceGray"),
        _ => None,
    };

    let stream = match passthrough_space {
        Some(color_space) => {
            debug!("Embedding JPEG '{}' ({}x{}) without re-encoding", src, width, height);
            let dict = dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => color_space,
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            };
            Stream::new(dict, bytes.to_vec()).with_compression(false)
        }
        None => {
            debug!("Re-encoding {:?} image '{}' ({}x{}) as RGB", format, src, width, height);
            let rgb = decoded.to_rgb8();
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(rgb.as_raw())?;
            let data = encoder.finish()?;
            let dict = dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "FlateDecode",
            };
            Stream::new(dict, data).with_compression(false)
        }
    };

    Ok(ImageXObject {
        stream,
        width,
        height,
    })
}
