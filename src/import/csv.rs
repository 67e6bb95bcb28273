/// Tokenize loosely-structured CSV text into rows of trimmed cells.
///
/// This is a permissive subset of RFC 4180 tuned for spreadsheet exports:
/// every cell is trimmed, rows whose cells are all empty are dropped, and
/// malformed quoting never fails: an unterminated quote simply swallows
/// the remainder of the text into the current field.
#[must_use]
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                // Doubled quote inside a quoted field is a literal quote
                if in_quotes && chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(cell.trim().to_string());
                cell.clear();
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(cell.trim().to_string());
                cell.clear();
                flush_row(&mut rows, &mut row);
            }
            _ => cell.push(ch),
        }
    }

    // Input without a trailing line break still has a cell/row in progress
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell.trim().to_string());
        flush_row(&mut rows, &mut row);
    }

    rows
}

/// Keep the row only if at least one cell survived trimming non-empty.
fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if row.iter().any(|cell| !cell.is_empty()) {
        rows.push(std::mem::take(row));
    } else {
        row.clear();
    }
}
