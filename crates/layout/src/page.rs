use crate::elements::PositionedElement;
use quotegen_types::Size;

/// Role of a page in the proposal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// Letterhead page with the information grid.
    Info,
    /// Proposal text and item table. Repeats when the table overflows.
    Content,
    /// Payment terms and signature.
    Closing,
}

#[derive(Debug, Clone)]
pub struct LaidOutPage {
    pub kind: PageKind,
    pub elements: Vec<PositionedElement>,
}

impl LaidOutPage {
    pub fn new(kind: PageKind) -> Self {
        Self {
            kind,
            elements: Vec::new(),
        }
    }

    /// Text of every text element on the page, in placement order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(PositionedElement::text)
    }
}

/// Fixed page size and margins, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub size: Size,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl PageGeometry {
    /// A4 with 20 mm side margins, content from 55 mm, 15 mm bottom break margin.
    pub const A4: PageGeometry = PageGeometry {
        size: Size::a4(),
        margin_left: 20.0,
        margin_right: 20.0,
        margin_top: 55.0,
        margin_bottom: 15.0,
    };

    pub fn content_width(&self) -> f32 {
        self.size.width - self.margin_left - self.margin_right
    }

    /// Lowest y a flowing line may reach before a page break.
    pub fn break_limit(&self) -> f32 {
        self.size.height - self.margin_bottom
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::A4
    }
}

/// Output of the composer: every page, in order, ready for a renderer.
#[derive(Debug, Clone)]
pub struct DocumentLayout {
    pub page_size: Size,
    pub pages: Vec<LaidOutPage>,
}

impl DocumentLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages_of_kind(&self, kind: PageKind) -> usize {
        self.pages.iter().filter(|p| p.kind == kind).count()
    }

    /// Every image source referenced anywhere in the document.
    pub fn image_sources(&self) -> Vec<&str> {
        let mut sources: Vec<&str> = Vec::new();
        for el in self.pages.iter().flat_map(|p| &p.elements) {
            if let crate::LayoutElement::Image(img) = &el.element
                && !sources.contains(&img.src.as_str())
            {
                sources.push(&img.src);
            }
        }
        sources
    }
}
