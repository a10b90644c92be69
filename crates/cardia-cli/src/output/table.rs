use cardia_core::risk::RiskLevel;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = column_widths(headers, rows);
    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad_cell(&clip(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let clipped = clip(value, *width);
                let numeric = is_numeric_cell(&clipped);
                let padded = pad_cell(&clipped, *width, numeric);
                if options.color { tint(&padded) } else { padded }
            })
            .collect::<Vec<_>>();
        lines.push(cells.join("  "));
    }
    lines.join("\n")
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count()])
                .max()
                .unwrap_or(0)
                .max(4)
        })
        .collect()
}

/// Shrink the widest column one step at a time until the table fits, never
/// below a column's header width.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    if widths.is_empty() {
        return;
    }

    let gaps = (widths.len() - 1) * 2;
    loop {
        let total = widths.iter().sum::<usize>() + gaps;
        if total <= max_width {
            return;
        }

        let shrinkable = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].chars().count().max(4))
            .max_by_key(|(_, width)| **width);
        let Some((index, _)) = shrinkable else {
            return;
        };
        widths[index] -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut clipped: String = value.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn is_numeric_cell(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

fn pad_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = " ".repeat(width.saturating_sub(value.chars().count()));
    if numeric {
        format!("{pad}{value}")
    } else {
        format!("{value}{pad}")
    }
}

/// Color a cell by what it says: risk bands get their band color, status
/// words green or red. Applied after padding so alignment ignores the
/// escape codes.
fn tint(value: &str) -> String {
    let trimmed = value.trim();

    let level = RiskLevel::from(trimmed.to_string());
    if level != RiskLevel::Unknown {
        let (r, g, b) = level.color();
        return format!("\u{1b}[38;2;{r};{g};{b}m{value}\u{1b}[0m");
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "true" | "ok" | "healthy" | "running" => format!("\u{1b}[32m{value}\u{1b}[0m"),
        "false" | "error" | "failed" | "down" => format!("\u{1b}[31m{value}\u{1b}[0m"),
        _ => value.to_string(),
    }
}
