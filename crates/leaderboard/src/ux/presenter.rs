use console::{Alignment, Style, StyledObject, measure_text_width, pad_str};
use leaderboard_core::columns::Align;
use leaderboard_core::loader::LoadFailure;
use leaderboard_core::table::{HeaderCell, TableView, ViewCell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Footer,
    Error,
}

pub fn style_text(text: &str, style: MessageType) -> StyledObject<&str> {
    let style_obj = match style {
        MessageType::Footer => Style::new().white().dim(),
        MessageType::Error => Style::new().red().bold(),
    };
    style_obj.apply_to(text)
}

/// One line summary of a load, listing the files that failed.
pub fn format_load_summary(rows: usize, failures: &[LoadFailure]) -> String {
    let mut summary = format!("◼ Loaded {rows} models.");
    if !failures.is_empty() {
        let missing: Vec<String> = failures
            .iter()
            .map(|f| format!("{}/{}", f.model, f.benchmark))
            .collect();
        summary.push_str(&format!(
            " {} results unavailable: {}.",
            failures.len(),
            missing.join(", ")
        ));
    }
    style_text(&summary, MessageType::Footer).to_string()
}

const SEPARATOR: &str = " | ";

fn cell_text(cell: &ViewCell) -> String {
    match cell.cell.flag.as_deref() {
        Some(flag) if !flag.is_empty() => format!("{flag} {}", cell.cell.text),
        _ => cell.cell.text.clone(),
    }
}

fn header_text(header: &HeaderCell) -> String {
    format!("{}{}", header.text, header.indicator)
}

/// Top level header with the range of leaf columns it covers.
struct Span<'a> {
    header: &'a HeaderCell,
    start: usize,
    len: usize,
    group: bool,
}

/// Lays out the table as aligned plain text. Best scores are bold when
/// `styled` is set.
pub fn format_table(view: &TableView, styled: bool) -> String {
    let (Some(top), bottom) = (view.header_rows.first(), view.header_rows.get(1)) else {
        return String::new();
    };
    let bottom: &[HeaderCell] = bottom.map(Vec::as_slice).unwrap_or_default();

    let mut leaves: Vec<&HeaderCell> = Vec::new();
    let mut spans = Vec::new();
    let mut grouped = bottom.iter();
    for header in top {
        let start = leaves.len();
        if header.column.is_some() {
            leaves.push(header);
            spans.push(Span {
                header,
                start,
                len: 1,
                group: false,
            });
        } else {
            leaves.extend(grouped.by_ref().take(header.colspan));
            spans.push(Span {
                header,
                start,
                len: leaves.len() - start,
                group: true,
            });
        }
    }

    let mut widths: Vec<usize> = leaves
        .iter()
        .map(|h| measure_text_width(&header_text(h)))
        .collect();
    for row in &view.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(&cell_text(cell)));
        }
    }
    let span_width = |widths: &[usize], span: &Span| -> usize {
        widths[span.start..span.start + span.len].iter().sum::<usize>()
            + SEPARATOR.len() * span.len.saturating_sub(1)
    };
    for span in spans.iter().filter(|s| s.group && s.len > 0) {
        let title = measure_text_width(&span.header.text);
        let available = span_width(&widths, span);
        if title > available {
            widths[span.start + span.len - 1] += title - available;
        }
    }

    let mut lines = Vec::new();

    let mut first = Vec::new();
    let mut second = Vec::new();
    for span in &spans {
        let width = span_width(&widths, span);
        if span.group {
            first.push(pad_str(&span.header.text, width, Alignment::Center, None).into_owned());
            for (i, leaf) in leaves[span.start..span.start + span.len].iter().enumerate() {
                let text = header_text(leaf);
                second.push(pad_str(&text, widths[span.start + i], Alignment::Left, None).into_owned());
            }
        } else {
            let text = header_text(span.header);
            first.push(pad_str(&text, width, Alignment::Left, None).into_owned());
            second.push(" ".repeat(width));
        }
    }
    lines.push(first.join(SEPARATOR));
    lines.push(second.join(SEPARATOR));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );

    let bold = Style::new().bold().force_styling(true);
    for row in &view.rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let text = cell_text(cell);
                let text = if styled && cell.cell.bold {
                    bold.apply_to(text).to_string()
                } else {
                    text
                };
                let align = match cell.cell.align {
                    Align::Left => Alignment::Left,
                    Align::Right => Alignment::Right,
                };
                pad_str(&text, *width, align, None).into_owned()
            })
            .collect();
        lines.push(cells.join(SEPARATOR));
    }

    let mut out = lines
        .iter()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}
