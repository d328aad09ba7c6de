use crate::errors::AppResult;
use crate::report::{ReportRow, mark_label, notify_report_success, report_title};
use chrono::NaiveDate;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

// A4 portrait
const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 50.0;
const LINE_H: f32 = 18.0;

const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 11.0;

/// PDF rendition: the document artifact the report command sends out.
/// Title on every page, one line per student, paginated as needed.
pub(crate) fn write_pdf(date: NaiveDate, rows: &[ReportRow], path: &Path) -> AppResult<()> {
    let mut pdf = Pdf::new();

    let catalog_id = Ref::new(1);
    let pages_id = Ref::new(2);
    let font_id = Ref::new(3);
    let mut next_id = 4;

    pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

    let title = report_title(date);
    let lines: Vec<String> = rows
        .iter()
        .map(|(name, mark)| format!("{}: {}", name, mark_label(*mark)))
        .collect();

    let body_top = PAGE_H - MARGIN - 40.0;
    let lines_per_page = ((body_top - MARGIN) / LINE_H) as usize;

    // always emit at least one page, even for an empty row set
    let mut chunks: Vec<&[String]> = lines.chunks(lines_per_page).collect();
    if chunks.is_empty() {
        chunks.push(&[]);
    }

    let mut page_refs = Vec::new();

    for chunk in chunks {
        let page_id = Ref::new(next_id);
        let content_id = Ref::new(next_id + 1);
        next_id += 2;
        page_refs.push(page_id);

        {
            let mut page = pdf.page(page_id);
            page.parent(pages_id)
                .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
                .contents(content_id);
            page.resources().fonts().pair(Name(b"F1"), font_id);
        }

        let mut content = Content::new();
        draw_text(&mut content, MARGIN, PAGE_H - MARGIN, TITLE_SIZE, &title);

        let mut y = body_top;
        for line in chunk {
            draw_text(&mut content, MARGIN, y, BODY_SIZE, line);
            y -= LINE_H;
        }

        pdf.stream(content_id, &content.finish());
    }

    pdf.catalog(catalog_id).pages(pages_id);
    {
        let mut pages = pdf.pages(pages_id);
        pages.count(page_refs.len() as i32);
        pages.kids(page_refs);
    }

    let bytes = pdf.finish();
    let mut f = File::create(path)?;
    f.write_all(&bytes)?;

    notify_report_success("PDF", path);
    Ok(())
}

fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
    content.begin_text();
    content.set_font(Name(b"F1"), size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(text.as_bytes()));
    content.end_text();
}
