use chrono::NaiveDate;
use image::{ImageBuffer, ImageFormat, Rgb};
use quotegen::{
    ClientInfo, DEFAULT_BACKGROUND, GeneratorBuilder, InMemoryResourceProvider, QuoteDocument,
};
use std::io::Cursor;
use std::sync::Arc;

pub const LOREM_300: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor \
incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation \
ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in \
voluptate velit esse cillu";

pub fn client() -> ClientInfo {
    ClientInfo {
        contact_name: "Maria Souza".into(),
        company_name: "Construtora Horizonte".into(),
        reference_text: "Subestação 300 kVA".into(),
        phone: "(31) 99999-0000".into(),
        email: "maria@horizonte.com.br".into(),
        site_location: "Belo Horizonte - MG".into(),
    }
}

pub fn issue_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

pub fn empty_quote() -> QuoteDocument {
    QuoteDocument::new(
        client(),
        "Fornecimento e instalação de subestação abrigada de 300 kVA, incluindo \
         projeto executivo, materiais, mão de obra e comissionamento.",
        issue_date(),
    )
}

/// A quote with `count` one-line items priced at 100,00 each.
pub fn quote_with_items(count: usize) -> QuoteDocument {
    let mut doc = empty_quote();
    for i in 0..count {
        doc.add_item("Manutenção", format!("Inspeção de painel {}", i + 1), 1, 100.0)
            .unwrap();
    }
    doc
}

/// A small solid-colour JPEG, standing in for the letterhead background.
pub fn background_jpeg() -> Vec<u8> {
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(21, 30, Rgb([240, 240, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Jpeg).unwrap();
    out.into_inner()
}

/// A builder whose assets come from memory and already hold the letterhead.
pub fn builder() -> GeneratorBuilder {
    let provider = InMemoryResourceProvider::new()
        .with(DEFAULT_BACKGROUND, background_jpeg())
        .unwrap();
    GeneratorBuilder::new().with_resource_provider(Arc::new(provider))
}
