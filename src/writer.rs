use std::fmt::Write;

use crate::dialect::Dialect;

pub(crate) trait FormatWriter {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result;
}

pub(crate) struct FormatContext<'a, W: Write> {
    pub(crate) writer: &'a mut W,
    pub(crate) dialect: Dialect,
}

impl<'a, W: Write> FormatContext<'a, W> {
    pub fn new(writer: &'a mut W, dialect: Dialect) -> Self {
        Self { writer, dialect }
    }

    pub(crate) fn write_ident(&mut self, part: &str) -> std::fmt::Result {
        if part == "*" {
            return self.writer.write_char('*');
        }

        let quote = self.dialect.quote_char();
        self.writer.write_char(quote)?;
        // duplicate the quote if present
        let dbl = if quote == '"' { "\"\"" } else { "``" };

        let mut last = 0;
        for (index, char) in part.char_indices() {
            if char == quote {
                if index != last {
                    self.writer.write_str(&part[last..index])?;
                }
                self.writer.write_str(dbl)?;
                last = index + char.len_utf8();
            }
        }

        // write trailing slice
        if last < part.len() {
            self.writer.write_str(&part[last..])?;
        }

        self.writer.write_char(quote)
    }

    pub(crate) fn write_separated<T, I>(&mut self, items: I, separator: &str) -> std::fmt::Result
    where
        T: FormatWriter,
        I: IntoIterator<Item = T>,
    {
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                self.writer.write_str(separator)?;
            }
            item.format_writer(self)?;
        }
        Ok(())
    }
}

impl<T> FormatWriter for &T
where
    T: FormatWriter + ?Sized,
{
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result {
        (**self).format_writer(context)
    }
}

impl FormatWriter for str {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result {
        context.writer.write_str(self)
    }
}

impl FormatWriter for String {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result {
        context.writer.write_str(self)
    }
}
