use std::io::Write;

use anyhow::{Context, Result};
use crossterm::style::{Attribute, Color, Stylize, style};
use polished_text_config::OutputFormat;
use polished_text_engine::{
    EditSummary, Segment, SegmentOptions, original_text, render, revised_text, segment_spans,
    segment_with,
};

/// Segments `input` and writes it to `out` in the requested format.
///
/// The text projections work on the span view so the whitespace between
/// the halves of a replacement is kept.
pub fn write_output(
    out: &mut impl Write,
    input: &str,
    opts: &SegmentOptions,
    format: OutputFormat,
) -> Result<()> {
    let segments = || {
        let segments = segment_with(input, opts);
        log::info!("{} segments from {} bytes", segments.len(), input.len());
        segments
    };
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &segments())
                .context("Failed to serialize segments as JSON")?;
            writeln!(out)?;
        }
        OutputFormat::Html => writeln!(out, "{}", render::html(&segments()))?,
        OutputFormat::Ansi => writeln!(out, "{}", ansi(&segments()))?,
        OutputFormat::Markup => writeln!(out, "{}", render::markup(&segments()))?,
        OutputFormat::Original => {
            let nodes = segment_spans(input, opts);
            writeln!(out, "{}", original_text(input, &nodes))?;
        }
        OutputFormat::Revised => {
            let nodes = segment_spans(input, opts);
            writeln!(out, "{}", revised_text(input, &nodes))?;
        }
        OutputFormat::Summary => {
            let summary = EditSummary::of(&segments());
            writeln!(out, "deletions: {}", summary.deletions)?;
            writeln!(out, "insertions: {}", summary.insertions)?;
            writeln!(out, "replacements: {}", summary.replacements)?;
        }
    }
    Ok(())
}

/// Styles segments for a terminal: deletions red and struck through,
/// insertions green and underlined.
pub fn ansi(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for seg in segments {
        match *seg {
            Segment::Plain(text) => out.push_str(text),
            Segment::Deleted(text) => push_deleted(&mut out, text),
            Segment::Inserted(text) => push_inserted(&mut out, text),
            Segment::Replacement(deleted, inserted) => {
                push_deleted(&mut out, deleted);
                push_inserted(&mut out, inserted);
            }
        }
    }
    out
}

fn push_deleted(out: &mut String, text: &str) {
    let styled = style(text)
        .with(Color::Red)
        .attribute(Attribute::CrossedOut);
    out.push_str(&styled.to_string());
}

fn push_inserted(out: &mut String, text: &str) {
    let styled = style(text)
        .with(Color::Green)
        .attribute(Attribute::Underlined);
    out.push_str(&styled.to_string());
}
