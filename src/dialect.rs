use std::fmt::{self, Write};

use crate::{
    error::{Error, Result},
    statement::{Action, Statement},
    writer::{FormatContext, FormatWriter},
};

/// The SQL variant a statement is rendered for.
///
/// Dialects only differ in the identifier quote and in how literal text is
/// escaped; clause ordering is shared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    #[default]
    MySql,
    Sqlite,
    Postgres,
}

pub trait HasDialect {
    const DIALECT: Dialect;
}

pub struct Postgres;

impl HasDialect for Postgres {
    const DIALECT: Dialect = Dialect::Postgres;
}

pub struct MySql;

impl HasDialect for MySql {
    const DIALECT: Dialect = Dialect::MySql;
}

pub struct Sqlite;

impl HasDialect for Sqlite {
    const DIALECT: Dialect = Dialect::Sqlite;
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::MySql => f.write_str("mysql"),
            Dialect::Sqlite => f.write_str("sqlite"),
            Dialect::Postgres => f.write_str("postgres"),
        }
    }
}

impl Dialect {
    pub const fn quote_char(self) -> char {
        match self {
            Dialect::Postgres | Dialect::Sqlite => '"',
            Dialect::MySql => '`',
        }
    }

    pub(crate) const fn quote_str(self) -> &'static str {
        match self {
            Dialect::Postgres | Dialect::Sqlite => "\"",
            Dialect::MySql => "`",
        }
    }

    /// Wraps a bare identifier in the dialect's quote, doubling any quote
    /// character already inside it.
    pub fn quote_column(self, name: &str) -> String {
        let mut quoted = String::with_capacity(name.len() + 2);
        let mut context = FormatContext::new(&mut quoted, self);
        // writing into a String cannot fail
        let _ = context.write_ident(name);
        quoted
    }

    /// Escapes `text` into a single-quoted SQL literal.
    ///
    /// This is textual escaping, not a substitute for bound parameters.
    pub fn quote_value(self, text: &str) -> String {
        let mut quoted = String::with_capacity(text.len() + 3);
        match self {
            Dialect::MySql => {
                quoted.push('\'');
                for char in text.chars() {
                    match char {
                        '\'' => quoted.push_str("''"),
                        '\\' => quoted.push_str("\\\\"),
                        _ => quoted.push(char),
                    }
                }
            }
            Dialect::Sqlite => {
                quoted.push('\'');
                for char in text.chars() {
                    match char {
                        '\'' => quoted.push_str("''"),
                        _ => quoted.push(char),
                    }
                }
            }
            Dialect::Postgres => {
                // backslash escapes are only honoured inside E'...'
                if text.contains(['\\', '\'', '"']) {
                    quoted.push('E');
                }
                quoted.push('\'');
                for char in text.chars() {
                    match char {
                        '\\' => quoted.push_str("\\\\"),
                        '\'' => quoted.push_str("\\'"),
                        '"' => quoted.push_str("\\\""),
                        _ => quoted.push(char),
                    }
                }
            }
        }
        quoted.push('\'');
        quoted
    }

    /// Renders a statement snapshot. Rendering never touches the snapshot, so
    /// the same statement renders to the same text every time.
    pub fn render(self, statement: &Statement) -> Result<String> {
        let action = statement.action().ok_or(Error::NoActionSelected)?;
        if matches!(action, Action::Insert | Action::Update) && statement.values.is_empty() {
            return Err(Error::MissingValues { action });
        }

        let mut sql = String::with_capacity(64);
        {
            let mut context = FormatContext::new(&mut sql, self);
            statement.format_writer(&mut context)?;
        }
        tracing::debug!(dialect = %self, action = %action, sql = %sql, "rendered statement");
        Ok(sql)
    }
}

/// `SELECT` is assembled in a fixed clause order for every dialect.
pub(crate) fn format_select<W: Write>(
    statement: &Statement,
    context: &mut FormatContext<'_, W>,
) -> fmt::Result {
    context.writer.write_str("SELECT ")?;
    context.writer.write_str(&statement.fields)?;
    context.writer.write_str(" FROM ")?;
    context.writer.write_str(&statement.table)?;
    for join in &statement.joins {
        context.writer.write_char(' ')?;
        join.format_writer(context)?;
    }
    statement.conditions.format_writer(context)?;
    if !statement.groups.is_empty() {
        context.writer.write_str(" GROUP BY ")?;
        context.write_separated(&statement.groups, ", ")?;
    }
    if !statement.orders.is_empty() {
        context.writer.write_str(" ORDER BY ")?;
        context.write_separated(&statement.orders, ", ")?;
    }
    if let Some(limit) = statement.limit {
        write!(context.writer, " LIMIT {}", limit)?;
    }
    if let Some(offset) = statement.offset {
        write!(context.writer, " OFFSET {}", offset)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_column() {
        assert_eq!("`users`", Dialect::MySql.quote_column("users"));
        assert_eq!("\"users\"", Dialect::Sqlite.quote_column("users"));
        assert_eq!("\"users\"", Dialect::Postgres.quote_column("users"));
        assert_eq!("*", Dialect::MySql.quote_column("*"));
        assert_eq!("`us``ers`", Dialect::MySql.quote_column("us`ers"));
    }

    #[test]
    fn test_quote_value_mysql() {
        assert_eq!("'zwc'", Dialect::MySql.quote_value("zwc"));
        assert_eq!("'O''Reilly'", Dialect::MySql.quote_value("O'Reilly"));
        assert_eq!("'a\\\\b'", Dialect::MySql.quote_value("a\\b"));
    }

    #[test]
    fn test_quote_value_sqlite() {
        assert_eq!("'O''Reilly'", Dialect::Sqlite.quote_value("O'Reilly"));
        assert_eq!("'a\\b'", Dialect::Sqlite.quote_value("a\\b"));
    }

    #[test]
    fn test_quote_value_postgres() {
        assert_eq!("'10000'", Dialect::Postgres.quote_value("10000"));
        assert_eq!("E'O\\'Reilly'", Dialect::Postgres.quote_value("O'Reilly"));
        assert_eq!("E'a\\\\b'", Dialect::Postgres.quote_value("a\\b"));
        assert_eq!("E'say \\\"hi\\\"'", Dialect::Postgres.quote_value("say \"hi\""));
    }

    #[test]
    fn test_render_without_action() {
        let statement = Statement::default();
        assert_eq!(Err(Error::NoActionSelected), Dialect::MySql.render(&statement));
    }

    #[test]
    fn test_marker_dialects() {
        assert_eq!(Dialect::MySql, MySql::DIALECT);
        assert_eq!(Dialect::Sqlite, Sqlite::DIALECT);
        assert_eq!(Dialect::Postgres, Postgres::DIALECT);
    }
}
