//! Delimited text encoding for the history file.
//!
//! Fields are comma separated. A field containing a comma, a double quote or
//! a line break is wrapped in double quotes with inner quotes doubled.

/// Encode one row, without the trailing newline.
pub fn encode_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| encode_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

fn encode_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// A decoded row and the 1-based line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Decode a whole document into rows, skipping blank lines.
///
/// Quoted fields may span lines. Returns the line number of the offending
/// row when a quote is left open or stray text follows a closing quote.
pub fn decode(content: &str) -> Result<Vec<Row>, (usize, String)> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut line = 1;
    let mut row_start = 1;
    let mut in_quotes = false;
    let mut after_quote = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => {
                    in_quotes = false;
                    after_quote = true;
                }
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            ',' => {
                fields.push(std::mem::take(&mut field));
                after_quote = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                finish_row(&mut rows, &mut fields, &mut field, row_start);
                after_quote = false;
                line += 1;
                row_start = line;
            }
            '"' if field.is_empty() && !after_quote => in_quotes = true,
            _ if after_quote => {
                return Err((row_start, "unexpected text after closing quote".to_string()));
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err((row_start, "unterminated quoted field".to_string()));
    }
    finish_row(&mut rows, &mut fields, &mut field, row_start);

    Ok(rows)
}

fn finish_row(rows: &mut Vec<Row>, fields: &mut Vec<String>, field: &mut String, line: usize) {
    if fields.is_empty() && field.is_empty() {
        return;
    }
    fields.push(std::mem::take(field));
    rows.push(Row {
        line,
        fields: std::mem::take(fields),
    });
}
