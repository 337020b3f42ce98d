use crate::report::logo::LogoImage;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");
const LOGO: Name<'static> = Name(b"Logo");

/// Green used for overtime values.
const VALUE_RGB: (f32, f32, f32) = (0.0, 0.5, 0.0);

/// One text line of a record block; `value` is printed in green after `label`.
pub struct BlockLine {
    pub label: String,
    pub value: Option<String>,
}

impl BlockLine {
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }

    pub fn valued(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Some(value.into()),
        }
    }
}

/// Fixed-layout, paginated A4 document writer.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    content: Content,
    content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    line_h: f32,
    y: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,
    logo: Option<(Ref, f32, f32)>,

    font_size: f32,
    title_font_size: f32,
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // IDs are managed by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            content: Content::new(),
            content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            line_h: 16.0,
            y: 0.0,

            next_id,
            font_id,
            bold_font_id,
            logo: None,

            font_size: 11.0,
            title_font_size: 14.0,
        }
    }

    /// Allocate a fresh object reference.
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Register the logo image; `draw_w` is the printed width in points.
    pub fn set_logo(&mut self, logo: &LogoImage, draw_w: f32) {
        let image_id = self.fresh_ref();
        let mask_id = logo.alpha.as_ref().map(|_| self.fresh_ref());

        {
            let mut image = self.pdf.image_xobject(image_id, &logo.color);
            image.filter(Filter::FlateDecode);
            image.width(logo.width as i32);
            image.height(logo.height as i32);
            if logo.grayscale {
                image.color_space().device_gray();
            } else {
                image.color_space().device_rgb();
            }
            image.bits_per_component(8);
            if let Some(id) = mask_id {
                image.s_mask(id);
            }
        }

        if let (Some(id), Some(alpha)) = (mask_id, &logo.alpha) {
            let mut mask = self.pdf.image_xobject(id, alpha);
            mask.filter(Filter::FlateDecode);
            mask.width(logo.width as i32);
            mask.height(logo.height as i32);
            mask.color_space().device_gray();
            mask.bits_per_component(8);
        }

        let draw_h = draw_w * logo.height as f32 / logo.width as f32;
        self.logo = Some((image_id, draw_w, draw_h));
    }

    /// Start a new page; the previous one (if any) is finalized.
    fn new_page(&mut self) {
        self.finalize_page();

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);

            let mut resources = page.resources();
            resources
                .fonts()
                .pair(FONT_REGULAR, self.font_id)
                .pair(FONT_BOLD, self.bold_font_id);
            if let Some((logo_id, _, _)) = self.logo {
                resources.x_objects().pair(LOGO, logo_id);
            }
        }

        let number = format!("Page {}", self.page_refs.len());
        draw_text(
            &mut self.content,
            FONT_REGULAR,
            self.page_w - self.margin - 40.0,
            self.margin - 30.0,
            9.0,
            &number,
        );

        self.content_id = Some(content_id);
        self.y = self.page_h - self.margin;
    }

    /// Write the stream of the current page.
    fn finalize_page(&mut self) {
        if let Some(id) = self.content_id.take() {
            let content = std::mem::replace(&mut self.content, Content::new());
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Make sure `height` points fit below the cursor, else open a new page.
    fn ensure_space(&mut self, height: f32) {
        if self.content_id.is_none() || self.y - height < self.margin {
            self.new_page();
        }
    }

    /// First-page header: logo at top-left, then the title.
    pub fn write_header(&mut self, title: &str) {
        if self.content_id.is_none() {
            self.new_page();
        }

        if let Some((_, w, h)) = self.logo {
            let x = self.margin;
            let y = self.y - h;
            let content = &mut self.content;
            content.save_state();
            content.transform([w, 0.0, 0.0, h, x, y]);
            content.x_object(LOGO);
            content.restore_state();
            self.y = y - 20.0;
        }

        let (x, y, size) = (self.margin, self.y - self.title_font_size, self.title_font_size);
        draw_text(&mut self.content, FONT_BOLD, x, y, size, title);
        self.y = y - 30.0;
    }

    /// A block of lines kept together on one page.
    pub fn write_block(&mut self, lines: &[BlockLine], spacing_after: f32) {
        self.ensure_space(lines.len() as f32 * self.line_h + spacing_after);
        for line in lines {
            self.write_line(FONT_REGULAR, line);
        }
        self.y -= spacing_after;
    }

    /// Trailing bold line, e.g. the monthly total.
    pub fn write_total(&mut self, line: &BlockLine) {
        self.ensure_space(self.line_h + 10.0);
        self.y -= 10.0;
        self.write_line(FONT_BOLD, line);
    }

    fn write_line(&mut self, font: Name<'static>, line: &BlockLine) {
        let (x, y, size) = (self.margin, self.y - self.line_h, self.font_size);
        let label_w = text_width(&line.label, size);
        let content = &mut self.content;

        draw_text(content, font, x, y, size, &line.label);

        if let Some(value) = &line.value {
            content.save_state();
            content.set_fill_rgb(VALUE_RGB.0, VALUE_RGB.1, VALUE_RGB.2);
            draw_text(content, font, x + label_w + 4.0, y, size, value);
            content.restore_state();
        }

        self.y = y;
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Serialize the document.
    pub fn finish(mut self) -> Vec<u8> {
        if self.page_refs.is_empty() {
            self.new_page();
        }
        self.finalize_page();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());

        self.pdf.finish()
    }

    /// Write to a temporary sibling file, then rename into place, so a
    /// failure never leaves a half-written report behind.
    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();

        let tmp = path.with_extension("pdf.part");
        let result = File::create(&tmp)
            .and_then(|mut f| {
                f.write_all(&bytes)?;
                f.sync_all()
            })
            .and_then(|_| fs::rename(&tmp, path));

        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result
    }
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_text(content: &mut Content, font: Name, x: f32, y: f32, size: f32, text: &str) {
    let bytes = to_win_ansi(text);
    content.begin_text();
    content.set_font(font, size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(&bytes));
    content.end_text();
}

/// Rough Helvetica advance width, good enough to place a value after its label.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5
}

/// Encode text for the WinAnsi Type1 fonts; anything outside Latin-1
/// becomes `?`.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}
