use std::borrow::Cow;

use crate::dialect::Dialect;

/// Words left bare regardless of what follows them, matched case-insensitively.
const KEYWORDS: [&str; 12] = [
    "*", "PRIMARY", "AND", "OR", "LIKE", "BINARY", "BY", "DISTINCT", "AS", "IN", "IS", "NULL",
];

/// A word whose first trailing character is one of these is a bare identifier.
const QUOTE_AFTER: &str = " ,)=<>.+-*/";

/// Appended to the input so the last real word is flushed like any other.
const SENTINEL: &str = " 0";

const TABLE_MARKER: &str = "table";
const TABLE_PREFIX_MARKER: &str = "table.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Unresolved,
    Quote,
    Function,
}

impl Decision {
    fn after(char: char) -> Self {
        if QUOTE_AFTER.contains(char) {
            Decision::Quote
        } else if char == '(' {
            Decision::Function
        } else {
            Decision::Unresolved
        }
    }
}

/// Quotes the bare identifiers of a SQL fragment.
///
/// Single left-to-right pass with one character of lookahead: every maximal
/// run of letters, digits, `_` and `*` is a word, everything between words is
/// a separator. A word is quoted when the first character after it is one of
/// `` ,)=<>.+-*/`` and it is neither numeric, a keyword, nor a qualifier
/// (followed by exactly `.`). A word followed by `(` is a function name and
/// stays bare. `table.` is replaced by the configured prefix.
///
/// This is a classifier, not a parser: it knows nothing about string
/// literals or nesting.
#[derive(Debug, Clone, Copy)]
pub struct ColumnFilter<'a> {
    dialect: Dialect,
    prefix: &'a str,
}

impl<'a> ColumnFilter<'a> {
    pub fn new(dialect: Dialect, prefix: &'a str) -> Self {
        Self { dialect, prefix }
    }

    pub fn filter(&self, input: &str) -> String {
        let mut result = String::with_capacity(input.len() + 8);
        let mut word = String::new();
        let mut separator = String::new();
        let mut decision = Decision::Unresolved;
        let mut in_word = false;

        for char in input.chars().chain(SENTINEL.chars()) {
            if is_word_char(char) {
                if !in_word {
                    self.flush(&mut result, &word, &separator, decision);
                    word.clear();
                    separator.clear();
                    decision = Decision::Unresolved;
                }
                word.push(char);
                in_word = true;
            } else {
                if in_word {
                    decision = Decision::after(char);
                }
                separator.push(char);
                in_word = false;
            }
        }

        result.trim().to_owned()
    }

    /// Replaces a leading `table.` marker with the prefix.
    pub fn substitute_prefix<'s>(&self, table: &'s str) -> Cow<'s, str> {
        match table.strip_prefix(TABLE_PREFIX_MARKER) {
            Some(rest) => Cow::Owned(format!("{}{}", self.prefix, rest)),
            None => Cow::Borrowed(table),
        }
    }

    fn flush(&self, result: &mut String, word: &str, separator: &str, decision: Decision) {
        if decision == Decision::Quote
            && !is_numeric(word)
            && !self.is_qualifier_dot(separator)
            && !is_keyword(word)
        {
            result.push_str(&self.dialect.quote_column(word));
            result.push_str(separator);
        } else if separator == "." && word == TABLE_MARKER {
            result.push_str(self.prefix);
        } else {
            result.push_str(word);
            result.push_str(separator);
        }
    }

    // `.` alone, or `.` directly followed by an opening identifier quote from
    // an earlier pass
    fn is_qualifier_dot(&self, separator: &str) -> bool {
        match separator.strip_prefix('.') {
            Some("") => true,
            Some(rest) => rest == self.dialect.quote_str(),
            None => false,
        }
    }
}

fn is_word_char(char: char) -> bool {
    char.is_alphanumeric() || char == '_' || char == '*'
}

fn is_numeric(word: &str) -> bool {
    word.chars().all(char::is_numeric)
}

fn is_keyword(word: &str) -> bool {
    KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(word))
}
