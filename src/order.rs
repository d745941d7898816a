use std::fmt;

use crate::writer::{FormatContext, FormatWriter};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    #[default]
    Asc,
    Desc,
}

impl Ordering {
    pub const fn as_str(self) -> &'static str {
        match self {
            Ordering::Asc => "ASC",
            Ordering::Desc => "DESC",
        }
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderExpr {
    column: String,
    ordering: Ordering,
}

impl OrderExpr {
    pub(crate) fn new(column: String, ordering: Ordering) -> Self {
        Self { column, ordering }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn ordering(&self) -> Ordering {
        self.ordering
    }
}

impl FormatWriter for OrderExpr {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.writer.write_str(&self.column)?;
        context.writer.write_char(' ')?;
        context.writer.write_str(self.ordering.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::{dialect::Dialect, tests::format_writer};

    use super::*;

    #[test]
    fn test_format_order() {
        let order = OrderExpr::new(String::from("user_0.`id`"), Ordering::Asc);
        assert_eq!("user_0.`id` ASC", format_writer(order, Dialect::MySql));
        let order = OrderExpr::new(String::from("\"total\""), Ordering::Desc);
        assert_eq!("\"total\" DESC", format_writer(order, Dialect::Postgres));
    }
}
