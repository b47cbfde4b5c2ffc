//! Content-stream drawing for a single page.

use crate::RenderError;
use crate::renderer::PT_PER_MM;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use quotegen_layout::encoding::to_win_ansi;
use quotegen_layout::{
    BuiltinFont, ImageElement, LayoutElement, PaintMode, PositionedElement, TextElement,
};
use quotegen_types::Color;
use std::collections::HashMap;

/// Graphics state already emitted into the stream, so repeated settings are
/// skipped.
#[derive(Default, Clone)]
struct PageRenderState {
    font: Option<(BuiltinFont, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
    word_spacing: f32,
}

pub(crate) struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: PageRenderState,
    /// Image source -> XObject resource name.
    image_names: &'a HashMap<String, String>,
}

fn pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

fn color_operands(color: Color) -> Vec<Object> {
    color.to_unit_rgb().into_iter().map(Object::from).collect()
}

impl<'a> PageContext<'a> {
    /// `page_height` is in millimetres.
    pub fn new(page_height: f32, image_names: &'a HashMap<String, String>) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
            image_names,
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    /// PDF y (points, bottom-left origin) of a layout y (millimetres, top-left origin).
    fn flip(&self, y: f32) -> f32 {
        pt(self.page_height - y)
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    pub fn draw_element(&mut self, el: &PositionedElement) -> Result<(), RenderError> {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Rectangle(rect) => {
                self.draw_rect(rect.paint, el);
                Ok(())
            }
            LayoutElement::Line => {
                self.draw_line(el);
                Ok(())
            }
            LayoutElement::Image(image) => self.draw_image(image, el),
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.push("rg", color_operands(color));
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, el: &PositionedElement) {
        let color = el.style.draw_color;
        if self.state.stroke_color != Some(color) {
            self.push("RG", color_operands(color));
            self.state.stroke_color = Some(color);
        }
        let width = el.style.line_width;
        if self.state.line_width != Some(width) {
            self.push("w", vec![pt(width).into()]);
            self.state.line_width = Some(width);
        }
    }

    fn draw_rect(&mut self, paint: PaintMode, el: &PositionedElement) {
        let operator = match paint {
            PaintMode::Stroke => "S",
            PaintMode::Fill => "f",
            PaintMode::FillStroke => "B",
        };
        if paint != PaintMode::Stroke {
            self.set_fill_color(el.style.fill_color);
        }
        if paint != PaintMode::Fill {
            self.set_stroke(el);
        }
        let bottom = self.flip(el.y + el.height);
        self.push(
            "re",
            vec![pt(el.x).into(), bottom.into(), pt(el.width).into(), pt(el.height).into()],
        );
        self.push(operator, vec![]);
    }

    fn draw_line(&mut self, el: &PositionedElement) {
        self.set_stroke(el);
        let (x1, y1) = (pt(el.x), self.flip(el.y));
        let (x2, y2) = (pt(el.x + el.width), self.flip(el.y + el.height));
        self.push("m", vec![x1.into(), y1.into()]);
        self.push("l", vec![x2.into(), y2.into()]);
        self.push("S", vec![]);
    }

    fn set_font(&mut self, font: BuiltinFont, size: f32) {
        if self.state.font != Some((font, size)) {
            self.push("Tf", vec![Object::Name(font.resource_name().as_bytes().to_vec()), size.into()]);
            self.state.font = Some((font, size));
        }
    }

    fn set_word_spacing(&mut self, spacing_mm: f32) {
        if self.state.word_spacing != spacing_mm {
            self.push("Tw", vec![pt(spacing_mm).into()]);
            self.state.word_spacing = spacing_mm;
        }
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) -> Result<(), RenderError> {
        if text.content.trim().is_empty() {
            return Ok(());
        }
        self.push("BT", vec![]);
        self.set_font(el.style.font.font, el.style.font.size);
        self.set_fill_color(el.style.text_color);
        self.set_word_spacing(text.word_spacing);
        let baseline = self.flip(el.baseline());
        self.push("Td", vec![pt(el.x).into(), baseline.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
        Ok(())
    }

    fn draw_image(&mut self, image: &ImageElement, el: &PositionedElement) -> Result<(), RenderError> {
        let name = self
            .image_names
            .get(&image.src)
            .cloned()
            .ok_or_else(|| RenderError::MissingImage(image.src.clone()))?;
        let bottom = self.flip(el.y + el.height);
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                pt(el.width).into(),
                0.into(),
                0.into(),
                pt(el.height).into(),
                pt(el.x).into(),
                bottom.into(),
            ],
        );
        self.push("Do", vec![Object::Name(name.into_bytes())]);
        self.push("Q", vec![]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotegen_layout::{ComputedStyle, FontSpec, Rect, RectElement};
    use std::sync::Arc;

    fn operators(content: &Content) -> Vec<&str> {
        content.operations.iter().map(|op| op.operator.as_str()).collect()
    }

    fn element(rect: Rect, element: LayoutElement) -> PositionedElement {
        PositionedElement::new(rect, element, Arc::new(ComputedStyle::default()))
    }

    #[test]
    fn text_uses_font_resource_and_flipped_baseline() {
        let names = HashMap::new();
        let mut ctx = PageContext::new(297.0, &names);
        let mut el = element(
            Rect::new(10.0, 20.0, 30.0, 10.0),
            LayoutElement::Text(TextElement {
                content: "TOTAL:".into(),
                word_spacing: 0.0,
            }),
        );
        Arc::make_mut(&mut el.style).font = FontSpec::bold(12.0);
        ctx.draw_element(&el).unwrap();
        let content = ctx.finish();

        assert_eq!(operators(&content), vec!["BT", "Tf", "rg", "Td", "Tj", "ET"]);
        assert_eq!(content.operations[1].operands[0], Object::Name(b"F2".to_vec()));
        let baseline_mm = 20.0 + 5.0 + 0.3 * FontSpec::bold(12.0).size_mm();
        let y = content.operations[3].operands[1].as_float().unwrap();
        assert!((y - (297.0 - baseline_mm) * PT_PER_MM).abs() < 1e-3);
    }

    #[test]
    fn repeated_state_is_not_re_emitted() {
        let names = HashMap::new();
        let mut ctx = PageContext::new(297.0, &names);
        let cell = element(
            Rect::new(0.0, 0.0, 10.0, 5.0),
            LayoutElement::Rectangle(RectElement {
                paint: PaintMode::Stroke,
            }),
        );
        ctx.draw_element(&cell).unwrap();
        ctx.draw_element(&cell).unwrap();
        let content = ctx.finish();
        assert_eq!(operators(&content), vec!["RG", "w", "re", "S", "re", "S"]);
    }

    #[test]
    fn justified_text_sets_and_resets_word_spacing() {
        let names = HashMap::new();
        let mut ctx = PageContext::new(297.0, &names);
        let rect = Rect::new(0.0, 0.0, 100.0, 6.0);
        for spacing in [1.0, 0.0] {
            ctx.draw_element(&element(
                rect,
                LayoutElement::Text(TextElement {
                    content: "a b".into(),
                    word_spacing: spacing,
                }),
            ))
            .unwrap();
        }
        let content = ctx.finish();
        let tw: Vec<f32> = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tw")
            .map(|op| op.operands[0].as_float().unwrap())
            .collect();
        assert_eq!(tw.len(), 2);
        assert!((tw[0] - PT_PER_MM).abs() < 1e-4);
        assert_eq!(tw[1], 0.0);
    }

    #[test]
    fn unknown_image_is_an_error() {
        let names = HashMap::new();
        let mut ctx = PageContext::new(297.0, &names);
        let img = element(
            Rect::new(0.0, 0.0, 210.0, 297.0),
            LayoutElement::Image(ImageElement {
                src: "missing.jpg".into(),
            }),
        );
        assert!(matches!(
            ctx.draw_element(&img),
            Err(RenderError::MissingImage(src)) if src == "missing.jpg"
        ));
    }
}
