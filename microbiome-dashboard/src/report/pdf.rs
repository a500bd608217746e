#[cfg(feature = "pdf")]
use std::fmt::{self, Write};

use chrono::{DateTime, Local};

use crate::error::{AppError, Result};
use crate::simulation::{novelty_clusters, TAXONOMY_CATALOGUE};

// US Letter in points.
#[cfg(feature = "pdf")]
const PAGE_WIDTH: f64 = 612.0;
#[cfg(feature = "pdf")]
const PAGE_HEIGHT: f64 = 792.0;
#[cfg(feature = "pdf")]
const MARGIN: f64 = 72.0;
#[cfg(feature = "pdf")]
const BULLET_INDENT: f64 = 86.4;
#[cfg(feature = "pdf")]
const BULLET_LEADING: f64 = 15.0;
#[cfg(feature = "pdf")]
const FONT_FAMILY: &str = "Helvetica, Arial, Liberation Sans, DejaVu Sans, sans-serif";

pub const REPORT_TITLE: &str = "Microbiome Analysis Report";

/// Text of the one-page analysis report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContent {
    pub title: String,
    pub generated_at: DateTime<Local>,
    pub summary: Vec<String>,
    pub insights: Vec<String>,
}

impl ReportContent {
    /// The standard report. It describes the fixed taxon catalogue and novelty
    /// clusters, not any particular randomised taxonomy draw.
    pub fn standard(generated_at: DateTime<Local>) -> Self {
        let clusters = novelty_clusters();
        Self {
            title: REPORT_TITLE.to_string(),
            generated_at,
            summary: vec![
                format!("Total taxa identified: {}", TAXONOMY_CATALOGUE.len()),
                format!("Novel clusters found: {}", clusters.len()),
                format!("Dominant phylum: {}", TAXONOMY_CATALOGUE[0].name),
                "Sample diversity: High".to_string(),
            ],
            insights: vec![
                format!(
                    "{} potentially novel species detected with high confidence.",
                    clusters.len()
                ),
                "Unique metabolic pathways identified in novel clusters.".to_string(),
                "Antimicrobial resistance (AMR) genes present in cluster NC002.".to_string(),
            ],
        }
    }
}

pub fn pdf_export_available() -> bool {
    cfg!(feature = "pdf")
}

#[cfg(feature = "pdf")]
pub const MISSING_FONTS_MESSAGE: &str =
    "no usable fonts found on this host; install a sans-serif font (e.g. fonts-dejavu-core) to export PDF reports";

#[cfg(feature = "pdf")]
pub fn render_pdf(content: &ReportContent) -> Result<Vec<u8>> {
    use svg2pdf::usvg;

    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    svg_to_pdf(content, &opt)
}

#[cfg(not(feature = "pdf"))]
pub fn render_pdf(_content: &ReportContent) -> Result<Vec<u8>> {
    Err(AppError::PdfUnavailable)
}

#[cfg(feature = "pdf")]
fn svg_to_pdf(content: &ReportContent, opt: &svg2pdf::usvg::Options) -> Result<Vec<u8>> {
    use svg2pdf::{ConversionOptions, PageOptions};

    let tree = parse_report(content, opt)?;
    svg2pdf::to_pdf(&tree, ConversionOptions::default(), PageOptions::default())
        .map_err(|e| AppError::ReportRender(format!("svg2pdf conversion failed: {e}")))
}

/// usvg drops text it cannot shape, so a page without any text node means the
/// font database had nothing to offer.
#[cfg(feature = "pdf")]
fn parse_report(
    content: &ReportContent,
    opt: &svg2pdf::usvg::Options,
) -> Result<svg2pdf::usvg::Tree> {
    use svg2pdf::usvg;

    if opt.fontdb.is_empty() {
        return Err(AppError::ReportRender(MISSING_FONTS_MESSAGE.to_string()));
    }

    let svg = render_svg(content)
        .map_err(|e| AppError::ReportRender(format!("svg layout failed: {e}")))?;
    let tree = usvg::Tree::from_str(&svg, opt)
        .map_err(|e| AppError::ReportRender(format!("usvg parse failed: {e}")))?;

    if count_text_nodes(tree.root()) == 0 {
        return Err(AppError::ReportRender(MISSING_FONTS_MESSAGE.to_string()));
    }
    Ok(tree)
}

#[cfg(feature = "pdf")]
fn count_text_nodes(group: &svg2pdf::usvg::Group) -> usize {
    use svg2pdf::usvg::Node;

    group
        .children()
        .iter()
        .map(|node| match node {
            Node::Text(_) => 1,
            Node::Group(group) => count_text_nodes(group),
            _ => 0,
        })
        .sum()
}

/// Lays the page out as SVG in PDF points, origin top-left.
#[cfg(feature = "pdf")]
pub fn render_svg(content: &ReportContent) -> std::result::Result<String, fmt::Error> {
    let mut out = String::with_capacity(4096);
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{PAGE_WIDTH}" height="{PAGE_HEIGHT}" viewBox="0 0 {PAGE_WIDTH} {PAGE_HEIGHT}">"#
    )?;
    writeln!(
        out,
        r##"<rect x="0" y="0" width="{PAGE_WIDTH}" height="{PAGE_HEIGHT}" fill="#ffffff"/>"##
    )?;
    writeln!(out, "<title>{}</title>", escape_xml(&content.title))?;

    text(
        &mut out,
        PAGE_WIDTH / 2.0,
        36.0,
        18.0,
        true,
        "middle",
        &content.title,
    )?;
    text(
        &mut out,
        MARGIN,
        57.6,
        10.0,
        false,
        "start",
        &format!(
            "Generated: {}",
            content.generated_at.format("%Y-%m-%d %H:%M:%S")
        ),
    )?;
    writeln!(
        out,
        r##"<line x1="{MARGIN}" y1="64.8" x2="{}" y2="64.8" stroke="#000000" stroke-width="1"/>"##,
        PAGE_WIDTH - MARGIN
    )?;

    section(&mut out, 108.0, "Analysis Summary", &content.summary)?;
    section(&mut out, 201.6, "AI-Powered Insights", &content.insights)?;

    out.push_str("</svg>\n");
    Ok(out)
}

#[cfg(feature = "pdf")]
fn section(out: &mut String, y: f64, heading: &str, bullets: &[String]) -> fmt::Result {
    text(out, MARGIN, y, 14.0, true, "start", heading)?;
    for (idx, bullet) in bullets.iter().enumerate() {
        let line_y = y + 21.6 + BULLET_LEADING * idx as f64;
        text(
            out,
            BULLET_INDENT,
            line_y,
            11.0,
            false,
            "start",
            &format!("\u{2022} {bullet}"),
        )?;
    }
    Ok(())
}

#[cfg(feature = "pdf")]
fn text(
    out: &mut String,
    x: f64,
    y: f64,
    size: f64,
    bold: bool,
    anchor: &str,
    value: &str,
) -> fmt::Result {
    let weight = if bold { "bold" } else { "normal" };
    writeln!(
        out,
        r##"<text x="{x}" y="{y}" font-family="{FONT_FAMILY}" font-size="{size}" font-weight="{weight}" text-anchor="{anchor}" fill="#000000">{}</text>"##,
        escape_xml(value)
    )
}

#[cfg(feature = "pdf")]
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
