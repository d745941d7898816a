use crate::writer::{FormatContext, FormatWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conjunction {
    And,
    Or,
}

impl FormatWriter for Conjunction {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        match self {
            Conjunction::And => context.writer.write_str("AND"),
            Conjunction::Or => context.writer.write_str("OR"),
        }
    }
}

/// One predicate, already filtered and with its placeholders bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    conjunction: Conjunction,
    sql: String,
}

impl Condition {
    pub fn new(conjunction: Conjunction, sql: String) -> Self {
        Self { conjunction, sql }
    }

    pub fn conjunction(&self) -> Conjunction {
        self.conjunction
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }
}

/// Append-only predicate list. The first entry is introduced by `WHERE`
/// whatever its conjunction; the rest by their own `AND`/`OR`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Conditions(Vec<Condition>);

impl Conditions {
    pub fn push(&mut self, condition: Condition) {
        self.0.push(condition);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Condition> {
        self.0.iter()
    }
}

impl FormatWriter for Conditions {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        for (index, condition) in self.0.iter().enumerate() {
            if index == 0 {
                context.writer.write_str(" WHERE")?;
            } else {
                context.writer.write_char(' ')?;
                condition.conjunction.format_writer(context)?;
            }
            context.writer.write_str(" (")?;
            context.writer.write_str(&condition.sql)?;
            context.writer.write_char(')')?;
        }
        Ok(())
    }
}
