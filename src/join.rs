use std::fmt;

use smol_str::SmolStr;
use sqlbuild_derive::JoinMethods;

use crate::writer::{FormatContext, FormatWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, JoinMethods)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Outer,
}

impl JoinKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Outer => "OUTER",
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A joined table with its already filtered `ON` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinClause {
    table: SmolStr,
    condition: String,
    kind: JoinKind,
}

impl JoinClause {
    pub(crate) fn new(table: SmolStr, condition: String, kind: JoinKind) -> Self {
        Self {
            table,
            condition,
            kind,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn kind(&self) -> JoinKind {
        self.kind
    }
}

impl FormatWriter for JoinClause {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.writer.write_str(self.kind.as_str())?;
        context.writer.write_str(" JOIN ")?;
        context.writer.write_str(&self.table)?;
        context.writer.write_str(" ON ")?;
        context.writer.write_str(&self.condition)
    }
}
