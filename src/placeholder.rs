use crate::error::{Error, Result};

/// Byte offsets of the `?` placeholders in `sql`.
///
/// Question marks inside single-quoted literals or quoted identifiers are
/// text, not placeholders. A doubled quote inside a quoted span is an escape.
fn placeholder_positions(sql: &str) -> Vec<usize> {
    #[derive(Clone, Copy)]
    enum State {
        Normal,
        Quoted(char),
    }

    let mut state = State::Normal;
    let mut positions = Vec::new();
    let mut chars = sql.char_indices().peekable();
    while let Some((index, char)) = chars.next() {
        match state {
            State::Normal => match char {
                '\'' | '"' | '`' => state = State::Quoted(char),
                '?' => positions.push(index),
                _ => {}
            },
            State::Quoted(quote) => {
                if char == quote {
                    if chars.peek().is_some_and(|&(_, next)| next == quote) {
                        // doubled quote
                        chars.next();
                    } else {
                        state = State::Normal;
                    }
                }
            }
        }
    }
    positions
}

/// Replaces each placeholder, left to right, by the matching literal.
///
/// Literals are spliced in verbatim and never rescanned.
pub(crate) fn bind_placeholders(condition: &str, literals: &[String]) -> Result<String> {
    let positions = placeholder_positions(condition);
    if positions.len() != literals.len() {
        return Err(Error::PlaceholderArityMismatch {
            condition: condition.to_owned(),
            placeholders: positions.len(),
            values: literals.len(),
        });
    }

    let extra: usize = literals.iter().map(String::len).sum();
    let mut sql = String::with_capacity(condition.len() + extra);
    let mut span_start = 0;
    for (&position, literal) in positions.iter().zip(literals) {
        sql.push_str(&condition[span_start..position]);
        sql.push_str(literal);
        span_start = position + 1;
    }
    sql.push_str(&condition[span_start..]);
    Ok(sql)
}
