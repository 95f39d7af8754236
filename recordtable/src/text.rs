//! Plain-text rendering of a [`TableView`].
//!
//! Lays a view out for a terminal of a given width. Column widths come from
//! the header's [`ColumnWidth`] hints: fixed columns take their width, auto
//! columns their widest content, flex columns share what is left by weight.
//! Text is measured in terminal cells and truncated with an ellipsis.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::column::{Alignment, ColumnWidth};
use crate::pagination::PageTarget;
use crate::view::{CheckboxView, DetailView, FooterView, RowView, TableView};

const SLOT_WIDTH: usize = 3;
const DETAIL_INDENT: &str = "    ";

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncate to `max_width` cells, ending in "…" when anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

pub fn align_offset(text_width: usize, available_width: usize, align: Alignment) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        Alignment::Left => 0,
        Alignment::Center => (available_width - text_width) / 2,
        Alignment::Right => available_width - text_width,
    }
}

/// Fit `s` into exactly `width` cells.
pub fn pad(s: &str, width: usize, align: Alignment) -> String {
    let text = truncate_to_width(s, width);
    let text_width = display_width(&text);
    let left = align_offset(text_width, width, align);
    let right = width.saturating_sub(left + text_width);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Resolve the width of each data column for a total line width.
pub fn column_widths(view: &TableView, width: usize) -> Vec<usize> {
    let count = view
        .header
        .as_ref()
        .map(|h| h.columns.len())
        .or_else(|| view.rows.first().map(|r| r.cells.len()))
        .unwrap_or(0);
    if count == 0 {
        return Vec::new();
    }

    let hints: Vec<ColumnWidth> = match &view.header {
        Some(header) => header.columns.iter().map(|c| c.width).collect(),
        None => vec![ColumnWidth::Auto; count],
    };

    let slots = view.synthetic_columns();
    let separators = (slots + count).saturating_sub(1);
    let available = width.saturating_sub(slots * SLOT_WIDTH + separators);

    let mut widths: Vec<usize> = hints
        .iter()
        .enumerate()
        .map(|(i, hint)| match hint {
            ColumnWidth::Fixed(w) => usize::from(*w),
            ColumnWidth::Auto => natural_width(view, i),
            ColumnWidth::Flex(_) => 0,
        })
        .collect();

    let total_weight: usize = hints
        .iter()
        .map(|hint| match hint {
            ColumnWidth::Flex(w) => usize::from(*w),
            _ => 0,
        })
        .sum();
    if total_weight > 0 {
        let remaining = available.saturating_sub(widths.iter().sum());
        let mut left = remaining;
        let last_flex = hints
            .iter()
            .rposition(|hint| matches!(hint, ColumnWidth::Flex(_)));
        for (i, hint) in hints.iter().enumerate() {
            if let ColumnWidth::Flex(weight) = hint {
                let share = if Some(i) == last_flex {
                    left
                } else {
                    remaining * usize::from(*weight) / total_weight
                };
                left = left.saturating_sub(share);
                widths[i] = share.max(1);
            }
        }
    }

    widths
}

fn natural_width(view: &TableView, index: usize) -> usize {
    let header = view
        .header
        .as_ref()
        .and_then(|h| h.columns.get(index))
        .map(|c| {
            let label = display_width(&c.content.visible_text());
            if c.sort.is_some() { label + 2 } else { label }
        })
        .unwrap_or(0);
    view.rows
        .iter()
        .filter_map(|row| row.cells.get(index))
        .map(|cell| display_width(&cell.visible_text()))
        .fold(header, usize::max)
        .max(1)
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Render the view as lines of text no wider than `width` cells.
pub fn render_table(view: &TableView, width: usize) -> String {
    let widths = column_widths(view, width);
    let aligns: Vec<Alignment> = match &view.header {
        Some(header) => header.columns.iter().map(|c| c.align).collect(),
        None => vec![Alignment::Left; widths.len()],
    };
    let table_width = (view.synthetic_columns() * (SLOT_WIDTH + 1)
        + widths.iter().sum::<usize>()
        + widths.len().saturating_sub(1))
    .min(width);

    let mut lines = Vec::new();

    if let Some(search) = &view.search {
        lines.push(format!("Search: {search}"));
    }

    if let Some(header) = &view.header {
        let mut parts = Vec::new();
        if view.has_checkboxes {
            let slot = match header.all_checkbox {
                Some(CheckboxView { checked, .. }) => checkbox(checked),
                None => "   ",
            };
            parts.push(slot.to_string());
        }
        if view.has_details {
            parts.push(" ".repeat(SLOT_WIDTH));
        }
        for (i, column) in header.columns.iter().enumerate() {
            let mut label = column.content.visible_text();
            if let Some(direction) = column.sort {
                label.push(' ');
                label.push_str(direction.indicator());
            }
            parts.push(pad(&label, widths[i], column.align));
        }
        lines.push(parts.join(" "));
        lines.push("─".repeat(table_width));
    }

    for row in &view.rows {
        lines.push(render_row(view, row, &widths, &aligns));
        if let Some(detail) = &row.detail {
            let inner = width.saturating_sub(DETAIL_INDENT.len());
            match detail {
                DetailView::Panel(cell) => {
                    lines.push(format!(
                        "{DETAIL_INDENT}{}",
                        truncate_to_width(&cell.visible_text(), inner)
                    ));
                }
                DetailView::Cells(cells) => {
                    for cell in cells {
                        lines.push(format!(
                            "{DETAIL_INDENT}{}",
                            truncate_to_width(&cell.visible_text(), inner)
                        ));
                    }
                }
            }
        }
    }

    if let Some(message) = &view.empty_message {
        lines.push(truncate_to_width(message, width));
    }

    if let Some(footer) = &view.footer {
        lines.push("─".repeat(table_width));
        lines.extend(render_footer(footer, width));
    }

    if let Some(picker) = &view.new_rows {
        lines.push(format!("Add rows: {}", picker.query));
        for (option, chosen) in &picker.options {
            lines.push(truncate_to_width(
                &format!("{} {}", checkbox(*chosen), option.label),
                width,
            ));
        }
    }

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_row(view: &TableView, row: &RowView, widths: &[usize], aligns: &[Alignment]) -> String {
    let mut parts = Vec::new();
    if view.has_checkboxes {
        parts.push(checkbox(row.checked).to_string());
    }
    if view.has_details {
        let slot = match (row.expandable, row.expanded) {
            (true, true) => " ▾ ",
            (true, false) => " ▸ ",
            (false, _) => "   ",
        };
        parts.push(slot.to_string());
    }
    for (i, width) in widths.iter().enumerate() {
        let text = row
            .cells
            .get(i)
            .map(|cell| cell.visible_text())
            .unwrap_or_default();
        let align = aligns.get(i).copied().unwrap_or_default();
        parts.push(pad(&text, *width, align));
    }
    parts.join(" ")
}

fn render_footer(footer: &FooterView, width: usize) -> Vec<String> {
    let controls: Vec<String> = footer
        .controls
        .iter()
        .map(|control| match control.target {
            PageTarget::Page(n) if n == footer.page => format!("[{n}]"),
            _ if control.enabled => control.label(),
            _ => " ".repeat(display_width(&control.label())),
        })
        .collect();
    let sizes: Vec<String> = footer
        .page_size_options
        .iter()
        .map(|size| {
            if *size == footer.page_size {
                format!("[{size}]")
            } else {
                size.to_string()
            }
        })
        .collect();
    vec![
        truncate_to_width(&footer.summary.to_string(), width),
        truncate_to_width(
            &format!(
                "{}  Page {} of {}",
                controls.join(" "),
                footer.page,
                footer.total_pages
            ),
            width,
        ),
        truncate_to_width(&format!("Per page: {}", sizes.join(" ")), width),
    ]
}
