// Clip descriptor parsing
//
// The descriptor is a header-less comma separated table, one clip per row:
//
//     Idle,0,3
//     "Run",4,9
//
// Indices are inclusive and zero based into the sheet's flat frame list.

use super::SheetError;

/// One parsed descriptor row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRow {
    /// 1-based line number in the descriptor
    pub line: usize,
    pub name: String,
    pub start: i64,
    pub end: i64,
}

/// Parse the whole descriptor, failing on the first malformed row
pub fn parse_descriptor(text: &str) -> Result<Vec<ClipRow>, SheetError> {
    let mut rows = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let fields = split_fields(raw);
        if fields.len() != 3 {
            return Err(SheetError::MalformedRow {
                line,
                fields: fields.len(),
            });
        }

        rows.push(ClipRow {
            line,
            name: fields[0].clone(),
            start: parse_index(line, "start", &fields[1])?,
            end: parse_index(line, "end", &fields[2])?,
        });
    }

    Ok(rows)
}

fn parse_index(line: usize, field: &'static str, value: &str) -> Result<i64, SheetError> {
    value.parse::<i64>().map_err(|_| SheetError::Parse {
        line,
        field,
        value: value.to_string(),
    })
}

/// Split a row on commas, honouring double-quoted fields
fn split_fields(row: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                // "" inside a quoted field is a literal quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}
