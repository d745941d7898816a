use std::fmt::{self, Write};

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::{
    cond::Conditions,
    dialect,
    join::JoinClause,
    order::OrderExpr,
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Select,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Select => f.write_str("SELECT"),
            Action::Insert => f.write_str("INSERT"),
            Action::Update => f.write_str("UPDATE"),
            Action::Delete => f.write_str("DELETE"),
        }
    }
}

/// The clauses accumulated for one statement.
///
/// Every fragment is stored already filtered and quoted; rendering only
/// reads from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub(crate) action: Option<Action>,
    pub(crate) table: SmolStr,
    pub(crate) fields: String,
    pub(crate) joins: Vec<JoinClause>,
    pub(crate) conditions: Conditions,
    pub(crate) orders: Vec<OrderExpr>,
    pub(crate) groups: Vec<String>,
    pub(crate) limit: Option<u64>,
    pub(crate) offset: Option<u64>,
    // quoted column -> quoted literal, in insertion order
    pub(crate) values: IndexMap<String, String>,
}

impl Default for Statement {
    fn default() -> Self {
        Self {
            action: None,
            table: SmolStr::default(),
            fields: String::from("*"),
            joins: Vec::new(),
            conditions: Conditions::default(),
            orders: Vec::new(),
            groups: Vec::new(),
            limit: None,
            offset: None,
            values: IndexMap::new(),
        }
    }
}

impl Statement {
    pub fn action(&self) -> Option<Action> {
        self.action
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn fields(&self) -> &str {
        &self.fields
    }

    pub fn joins(&self) -> &[JoinClause] {
        &self.joins
    }

    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    pub fn orders(&self) -> &[OrderExpr] {
        &self.orders
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(column, value)| (column.as_str(), value.as_str()))
    }

    fn format_insert<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.writer.write_str("INSERT INTO ")?;
        context.writer.write_str(&self.table)?;
        context.writer.write_str(" (")?;
        context.write_separated(self.values.keys(), " , ")?;
        context.writer.write_str(") VALUES (")?;
        context.write_separated(self.values.values(), " , ")?;
        context.writer.write_char(')')
    }

    fn format_update<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.writer.write_str("UPDATE ")?;
        context.writer.write_str(&self.table)?;
        context.writer.write_str(" SET ")?;
        for (index, (column, value)) in self.values.iter().enumerate() {
            if index > 0 {
                context.writer.write_str(" , ")?;
            }
            write!(context.writer, "{} = {}", column, value)?;
        }
        self.conditions.format_writer(context)
    }

    fn format_delete<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.writer.write_str("DELETE FROM ")?;
        context.writer.write_str(&self.table)?;
        self.conditions.format_writer(context)
    }
}

impl FormatWriter for Statement {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self.action {
            Some(Action::Select) => dialect::format_select(self, context),
            Some(Action::Insert) => self.format_insert(context),
            Some(Action::Update) => self.format_update(context),
            Some(Action::Delete) => self.format_delete(context),
            // rejected with a typed error before formatting starts
            None => Err(fmt::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        cond::{Condition, Conjunction},
        dialect::Dialect,
        tests::format_writer,
    };

    use super::*;

    fn statement(action: Action) -> Statement {
        Statement {
            action: Some(action),
            table: SmolStr::new_static("user_0"),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_fields() {
        let statement = statement(Action::Select);
        assert_eq!("*", statement.fields());
        assert_eq!("SELECT * FROM user_0", format_writer(statement, Dialect::MySql));
    }

    #[test]
    fn test_format_insert() {
        let mut statement = statement(Action::Insert);
        statement.values.insert("`username`".into(), "'zwc'".into());
        statement.values.insert("`age`".into(), "'3'".into());
        assert_eq!(
            "INSERT INTO user_0 (`username` , `age`) VALUES ('zwc' , '3')",
            format_writer(statement, Dialect::MySql)
        );
    }

    #[test]
    fn test_format_update_and_delete() {
        let mut statement = statement(Action::Update);
        statement.values.insert("`username`".into(), "'zwc'".into());
        statement
            .conditions
            .push(Condition::new(Conjunction::And, "`id` = '1'".into()));
        assert_eq!(
            "UPDATE user_0 SET `username` = 'zwc' WHERE (`id` = '1')",
            format_writer(statement.clone(), Dialect::MySql)
        );

        statement.action = Some(Action::Delete);
        assert_eq!(
            "DELETE FROM user_0 WHERE (`id` = '1')",
            format_writer(statement, Dialect::MySql)
        );
    }

    #[test]
    fn test_format_is_repeatable() {
        let mut statement = statement(Action::Select);
        statement.limit = Some(10);
        statement.offset = Some(20);
        let first = format_writer(&statement, Dialect::MySql);
        let second = format_writer(&statement, Dialect::MySql);
        assert_eq!("SELECT * FROM user_0 LIMIT 10 OFFSET 20", first);
        assert_eq!(first, second);
    }
}
