/// Makes free text safe for a single Markdown table cell.
pub fn escape_cell(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace('\n', " ")
        .replace('|', "\\|")
}

/// `[name](target#L<line>)`, or the bare name when the line is unknown.
/// The name is escaped for use inside a table cell.
pub fn source_link(name: &str, target: &str, line: Option<usize>) -> String {
    let name = escape_cell(name);
    match line {
        Some(line) => format!("[{}]({}#L{})", name, link_target(target), line),
        None => name,
    }
}

// Spaces would end the link destination.
fn link_target(target: &str) -> String {
    target.replace(' ', "%20")
}

/// A table row with the given cells.
pub fn table_row(cells: &[&str]) -> String {
    format!("| {} |\n", cells.join(" | "))
}

/// A bold label row spanning a table with `columns` columns.
pub fn label_row(label: &str, columns: usize) -> String {
    let mut row = format!("| **{}** |", escape_cell(label));
    for _ in 1..columns {
        row.push_str(" |");
    }
    row.push('\n');
    row
}
