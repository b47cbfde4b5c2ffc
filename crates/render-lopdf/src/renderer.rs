use crate::RenderError;
use crate::images::image_xobject;
use crate::page::PageContext;
use chrono::NaiveDateTime;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use log::{debug, info};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use quotegen_layout::encoding::to_win_ansi;
use quotegen_layout::{BuiltinFont, DocumentLayout};
use std::collections::HashMap;
use std::io::Write;

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

const PRODUCER: &str = concat!("quotegen ", env!("CARGO_PKG_VERSION"));

/// An in-memory PDF renderer using the `lopdf` library.
///
/// Image bytes for every source referenced by the layout must be registered
/// with [`LopdfRenderer::add_image`] before [`LopdfRenderer::render`] is
/// called; a missing one fails the whole render.
pub struct LopdfRenderer {
    title: Option<String>,
    creation_date: Option<NaiveDateTime>,
    compress: bool,
    images: HashMap<String, Vec<u8>>,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self {
            title: None,
            creation_date: None,
            compress: true,
            images: HashMap::new(),
        }
    }
}

impl LopdfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_creation_date(mut self, date: NaiveDateTime) -> Self {
        self.creation_date = Some(date);
        self
    }

    /// Deflate page content streams (on by default).
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn add_image(&mut self, src: impl Into<String>, bytes: Vec<u8>) {
        self.images.insert(src.into(), bytes);
    }

    /// Writes every page of `layout` into a complete PDF file in memory.
    pub fn render(&self, layout: &DocumentLayout) -> Result<Vec<u8>, RenderError> {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let mut font_dict = Dictionary::new();
        for font in BuiltinFont::ALL {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(font.resource_name(), font_id);
        }

        let mut xobject_dict = Dictionary::new();
        let mut image_names = HashMap::new();
        for (i, src) in layout.image_sources().into_iter().enumerate() {
            let bytes = self
                .images
                .get(src)
                .ok_or_else(|| RenderError::MissingImage(src.to_string()))?;
            let xobject = image_xobject(src, bytes)?;
            debug!("Image '{}' is {}x{} px", src, xobject.width, xobject.height);
            let name = format!("Im{}", i + 1);
            let image_id = document.add_object(xobject.stream);
            xobject_dict.set(name.as_bytes(), image_id);
            image_names.insert(src.to_string(), name);
        }

        let mut resources = dictionary! { "Font" => font_dict };
        if !xobject_dict.is_empty() {
            resources.set("XObject", xobject_dict);
        }
        let resources_id = document.add_object(resources);

        let page_width = layout.page_size.width * PT_PER_MM;
        let page_height = layout.page_size.height * PT_PER_MM;
        let mut page_ids: Vec<ObjectId> = Vec::with_capacity(layout.page_count());

        for page in &layout.pages {
            let mut page_ctx = PageContext::new(layout.page_size.height, &image_names);
            for element in &page.elements {
                page_ctx.draw_element(element)?;
            }
            let content_id = document.add_object(self.content_stream(page_ctx.finish().encode()?)?);

            let page_id = document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id);
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => page_ids.len() as i64,
        };
        document.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        document.trailer.set("Root", catalog_id);

        let info_id = document.add_object(self.info_dictionary());
        document.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        document.save_to(&mut buffer)?;
        info!("Rendered {} page(s) into {} bytes", page_ids.len(), buffer.len());
        Ok(buffer)
    }

    fn content_stream(&self, encoded: Vec<u8>) -> Result<Stream, RenderError> {
        if !self.compress {
            return Ok(Stream::new(dictionary! {}, encoded).with_compression(false));
        }
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&encoded)?;
        let compressed = encoder.finish()?;
        Ok(Stream::new(dictionary! {"Filter" => "FlateDecode"}, compressed).with_compression(false))
    }

    fn info_dictionary(&self) -> Dictionary {
        let mut info = dictionary! {
            "Producer" => Object::String(to_win_ansi(PRODUCER), StringFormat::Literal),
        };
        if let Some(title) = &self.title {
            info.set("Title", Object::String(to_win_ansi(title), StringFormat::Literal));
        }
        if let Some(date) = &self.creation_date {
            let stamp = format!("D:{}", date.format("%Y%m%d%H%M%S"));
            info.set("CreationDate", Object::String(stamp.into_bytes(), StringFormat::Literal));
        }
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use quotegen_layout::{
        Canvas, CellOptions, PageGeometry, PageKind, Rect, StandardFontMetrics,
    };
    use std::sync::Arc;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sample_layout(pages: usize) -> DocumentLayout {
        let mut canvas = Canvas::new(PageGeometry::A4, Arc::new(StandardFontMetrics));
        for i in 0..pages {
            let page = canvas.add_page(PageKind::Content);
            canvas
                .cell(
                    page,
                    Rect::new(20.0, 60.0, 100.0, 10.0),
                    &format!("Página {} – R$ 1.234,50", i + 1),
                    CellOptions::bordered(),
                )
                .unwrap();
        }
        canvas.finish()
    }

    #[test]
    fn renders_loadable_pdf_with_text() {
        init_logger();
        let bytes = LopdfRenderer::new().render(&sample_layout(2)).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
        let text = doc.extract_text(&[1]).unwrap();
        assert!(text.contains("R$ 1.234,50"), "text was {text:?}");
    }

    #[test]
    fn media_box_is_a4_in_points() {
        let bytes = LopdfRenderer::new()
            .with_compression(false)
            .render(&sample_layout(1))
            .unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let page_id = *doc.get_pages().get(&1).unwrap();
        let page = doc.get_dictionary(page_id).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        let width = media_box[2].as_float().unwrap();
        let height = media_box[3].as_float().unwrap();
        assert!((width - 595.28).abs() < 0.01);
        assert!((height - 841.89).abs() < 0.01);
    }

    #[test]
    fn info_dictionary_carries_metadata() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();
        let renderer = LopdfRenderer::new()
            .with_title("Proposta Técnica")
            .with_creation_date(date);
        let doc = Document::load_mem(&renderer.render(&sample_layout(1)).unwrap()).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        assert_eq!(
            info.get(b"CreationDate").unwrap().as_str().unwrap(),
            b"D:20250307140509"
        );
        assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), to_win_ansi("Proposta Técnica"));
        assert!(info.has(b"Producer"));
    }

    #[test]
    fn missing_background_fails_the_render() {
        let mut canvas = Canvas::new(PageGeometry::A4, Arc::new(StandardFontMetrics))
            .with_background("fundo.jpg");
        canvas.add_page(PageKind::Info);
        let err = LopdfRenderer::new().render(&canvas.finish()).unwrap_err();
        assert!(matches!(err, RenderError::MissingImage(src) if src == "fundo.jpg"));
    }
}
