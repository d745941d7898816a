//! Fluent builder that renders dialect-specific SQL text.
//!
//! ```
//! use sqlbuild::{Builder, JoinKind, MySql, Ordering};
//!
//! let mut builder = Builder::for_dialect::<MySql>();
//! builder
//!     .select("user_0")
//!     .where_clause("user_0.id > ?", 10000)
//!     .join("user_info_0", "user_info_0.id = user_0.id", JoinKind::Inner)
//!     .order_by("user_0.id", Ordering::Asc);
//!
//! assert_eq!(
//!     "SELECT * FROM user_0 INNER JOIN user_info_0 ON user_info_0.`id` = user_0.`id` WHERE (user_0.`id` > '10000') ORDER BY user_0.`id` ASC",
//!     builder.to_sql().unwrap(),
//! );
//! ```

mod builder;
mod col;
mod cond;
mod config;
mod dialect;
mod error;
mod filter;
mod join;
mod operator;
mod order;
mod placeholder;
mod statement;
mod value;
mod writer;

pub use builder::Builder;

pub use col::Columns;
pub use col::IntoColumns;

pub use cond::Condition;
pub use cond::Conditions;
pub use cond::Conjunction;

pub use config::Config;

pub use dialect::Dialect;
pub use dialect::HasDialect;
pub use dialect::MySql;
pub use dialect::Postgres;
pub use dialect::Sqlite;

pub use error::Error;
pub use error::Result;

pub use filter::ColumnFilter;

pub use join::JoinClause;
pub use join::JoinKind;

pub use operator::Operator;

pub use order::OrderExpr;
pub use order::Ordering;

pub use statement::Action;
pub use statement::Statement;

pub use value::Array;
pub use value::IntoValue;
pub use value::IntoValues;
pub use value::Value;
pub use value::Values;

/// Quotes the bare identifiers of `text` for `dialect`, replacing `table.`
/// with `prefix`.
pub fn filter_columns(dialect: Dialect, prefix: &str, text: &str) -> String {
    ColumnFilter::new(dialect, prefix).filter(text)
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::{dialect, writer};

    pub(crate) fn format_writer<W: writer::FormatWriter>(writer: W, dialect: dialect::Dialect) -> String {
        let mut str = String::new();
        let mut context = writer::FormatContext::new(&mut str, dialect);
        writer.format_writer(&mut context).unwrap();
        str
    }

    #[test]
    fn test_filter_columns() {
        assert_eq!(
            "`a` , `b`",
            super::filter_columns(dialect::Dialect::MySql, "", "a , b")
        );
    }
}
