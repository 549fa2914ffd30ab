//! Markdown report export

use crate::error::Result;
use crate::search::FileResult;
use crate::session::SearchRecord;
use sheetseek_engine::engine::{CellValue, Query, highlight_cell};
use std::io::Write;
use std::path::Path;

/// Write a search record to a markdown file
pub fn write_markdown(path: &Path, record: &SearchRecord) -> Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    render_markdown(&mut file, record)?;
    file.flush()?;
    Ok(())
}

/// Render a search record as markdown.
///
/// One table per file with matches. Matched text is wrapped in `**`.
pub fn render_markdown<W: Write>(w: &mut W, record: &SearchRecord) -> std::io::Result<()> {
    writeln!(
        w,
        "# Search results for \"{}\"",
        escape_markdown(record.pattern.display())
    )?;
    writeln!(w)?;
    let files: Vec<String> = record.files.iter().map(|f| escape_markdown(f)).collect();
    writeln!(w, "From files: {}", files.join(", "))?;

    if record.search_results.is_empty() {
        writeln!(w)?;
        writeln!(w, "*No matches*")?;
        return Ok(());
    }

    for result in &record.search_results {
        writeln!(w)?;
        render_file(w, result, &record.pattern)?;
    }

    Ok(())
}

fn render_file<W: Write>(w: &mut W, result: &FileResult, query: &Query) -> std::io::Result<()> {
    writeln!(w, "## {}", escape_markdown(&result.file_name))?;
    writeln!(w)?;

    // Ragged rows: pad every line to the widest row seen.
    let width = result
        .matches
        .iter()
        .map(|m| m.row_data.len())
        .chain(result.headers.as_ref().map(Vec::len))
        .max()
        .unwrap_or(0);

    write!(w, "| Row | Sheet |")?;
    for col in 0..width {
        let heading = result
            .headers
            .as_ref()
            .and_then(|h| h.get(col))
            .filter(|cell| !cell.is_empty())
            .map(|cell| escape_markdown(&cell.display()))
            .unwrap_or_else(|| col_to_letters(col));
        write!(w, " {} |", heading)?;
    }
    writeln!(w)?;

    write!(w, "|---|---|")?;
    for _ in 0..width {
        write!(w, "---|")?;
    }
    writeln!(w)?;

    for m in &result.matches {
        write!(w, "| {} | {} |", m.row_index, escape_markdown(&m.sheet_name))?;
        for col in 0..width {
            let cell = m.row_data.get(col).unwrap_or(&CellValue::Empty);
            write!(w, " {} |", highlighted(cell, query))?;
        }
        writeln!(w)?;
    }

    Ok(())
}

fn highlighted(cell: &CellValue, query: &Query) -> String {
    highlight_cell(cell, query)
        .into_iter()
        .map(|segment| {
            let text = escape_markdown(&segment.text);
            if segment.is_match {
                format!("**{}**", text)
            } else {
                text
            }
        })
        .collect()
}

/// Escape special markdown characters in cell content
fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|")
        .replace('*', "\\*")
        .replace('\n', " ")
        .replace('\r', "")
}

/// Convert column index to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
fn col_to_letters(col: usize) -> String {
    let mut result = String::new();
    let mut n = col as u128 + 1;
    while n > 0 {
        n -= 1;
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    result
}
