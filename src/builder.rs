use smol_str::SmolStr;
use sqlbuild_derive::or_variant;

use crate::{
    col::{IntoColumns, canonicalize_alias},
    cond::{Condition, Conjunction},
    config::Config,
    dialect::HasDialect,
    error::{Error, Result},
    filter::ColumnFilter,
    join::{JoinClause, JoinKind},
    operator::Operator,
    order::{OrderExpr, Ordering},
    placeholder::bind_placeholders,
    statement::{Action, Statement},
    value::{IntoValue, IntoValues, Values},
};

/// Fluent accumulator for one statement at a time.
///
/// Mutators return `&mut Self` so calls chain; the first error any of them
/// runs into is kept and returned by [`Builder::to_sql`].
#[derive(Debug, Default, Clone)]
pub struct Builder {
    config: Config,
    statement: Statement,
    maybe_error: Option<Error>,
}

impl Builder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            statement: Statement::default(),
            maybe_error: None,
        }
    }

    pub fn for_dialect<D: HasDialect>() -> Self {
        Self::new(Config::of::<D>())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn error(&self) -> Option<&Error> {
        self.maybe_error.as_ref()
    }

    /// Runs the column filter with this builder's dialect and prefix.
    pub fn filter(&self, text: &str) -> String {
        self.column_filter().filter(text)
    }

    fn column_filter(&self) -> ColumnFilter<'_> {
        ColumnFilter::new(self.config.dialect, &self.config.prefix)
    }

    fn fail(&mut self, error: Error) {
        tracing::debug!(%error, "statement builder error");
        if self.maybe_error.is_none() {
            self.maybe_error = Some(error);
        }
    }

    fn set_action(&mut self, action: Action, table: &str) -> &mut Self {
        if let Some(current) = self.statement.action {
            self.fail(Error::ActionAlreadySelected {
                current,
                requested: action,
            });
            return self;
        }
        let table = SmolStr::new(self.column_filter().substitute_prefix(table));
        self.statement.action = Some(action);
        self.statement.table = table;
        self
    }

    // actions

    pub fn select<T: AsRef<str>>(&mut self, table: T) -> &mut Self {
        self.set_action(Action::Select, table.as_ref())
    }

    pub fn insert<T: AsRef<str>>(&mut self, table: T) -> &mut Self {
        self.set_action(Action::Insert, table.as_ref())
    }

    pub fn update<T: AsRef<str>>(&mut self, table: T) -> &mut Self {
        self.set_action(Action::Update, table.as_ref())
    }

    pub fn delete<T: AsRef<str>>(&mut self, table: T) -> &mut Self {
        self.set_action(Action::Delete, table.as_ref())
    }

    // select stuff

    /// Replaces the field list. An empty list falls back to `*`.
    pub fn fields<C: IntoColumns>(&mut self, columns: C) -> &mut Self {
        let columns = columns.into_columns();
        if columns.is_empty() {
            self.statement.fields = String::from("*");
            return self;
        }
        let joined = columns
            .iter()
            .map(|column| canonicalize_alias(column))
            .collect::<Vec<_>>()
            .join(" , ");
        self.statement.fields = self.filter(&joined);
        self
    }

    pub fn join<T, C>(&mut self, table: T, condition: C, kind: JoinKind) -> &mut Self
    where
        T: AsRef<str>,
        C: AsRef<str>,
    {
        let table = SmolStr::new(self.column_filter().substitute_prefix(table.as_ref()));
        let condition = self.filter(condition.as_ref());
        self.statement
            .joins
            .push(JoinClause::new(table, condition, kind));
        self
    }

    // where stuff

    /// Appends a predicate. `?` markers are bound, in order, to `values`
    /// rendered as escaped literals.
    #[or_variant]
    pub fn where_clause<C, V>(&mut self, condition: C, values: V) -> &mut Self
    where
        C: AsRef<str>,
        V: IntoValues,
    {
        let condition = self.filter(condition.as_ref());
        self.push_condition(Conjunction::And, condition, values.into_values())
    }

    pub(crate) fn where_binary<V: IntoValue>(
        &mut self,
        conjunction: Conjunction,
        column: &str,
        operator: Operator,
        value: V,
    ) -> &mut Self {
        let condition = format!("{} {} ?", self.filter(column), operator);
        self.push_condition(conjunction, condition, value.into_values())
    }

    fn push_condition(
        &mut self,
        conjunction: Conjunction,
        condition: String,
        values: Values,
    ) -> &mut Self {
        let dialect = self.config.dialect;
        let bound = values
            .iter()
            .map(|value| value.to_literal(dialect))
            .collect::<Result<Vec<_>>>()
            .and_then(|literals| bind_placeholders(&condition, &literals));
        match bound {
            Ok(sql) => self
                .statement
                .conditions
                .push(Condition::new(conjunction, sql)),
            Err(error) => self.fail(error),
        }
        self
    }

    // order, group, paging

    pub fn order_by<C: AsRef<str>>(&mut self, column: C, ordering: Ordering) -> &mut Self {
        let column = self.filter(column.as_ref());
        self.statement.orders.push(OrderExpr::new(column, ordering));
        self
    }

    pub fn order_by_asc<C: AsRef<str>>(&mut self, column: C) -> &mut Self {
        self.order_by(column, Ordering::Asc)
    }

    pub fn order_by_desc<C: AsRef<str>>(&mut self, column: C) -> &mut Self {
        self.order_by(column, Ordering::Desc)
    }

    pub fn group_by<C: AsRef<str>>(&mut self, column: C) -> &mut Self {
        let column = self.filter(column.as_ref());
        self.statement.groups.push(column);
        self
    }

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.statement.limit = Some(limit);
        self
    }

    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.statement.offset = Some(offset);
        self
    }

    /// 1-based page of `page_size` rows; page 0 is read as page 1.
    pub fn page(&mut self, page: u64, page_size: u64) -> &mut Self {
        self.limit(page_size);
        self.offset(page.saturating_sub(1).saturating_mul(page_size))
    }

    // insert / update values

    /// Sets one column value. Setting a column again keeps its position and
    /// replaces the value.
    pub fn value<K, V>(&mut self, column: K, value: V) -> &mut Self
    where
        K: AsRef<str>,
        V: IntoValue,
    {
        let column = self.filter(column.as_ref());
        match value.into_value().to_literal(self.config.dialect) {
            Ok(literal) => {
                self.statement.values.insert(column, literal);
            }
            Err(error) => self.fail(error),
        }
        self
    }

    /// Sets several column values in iteration order.
    pub fn values<I, K, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoValue,
    {
        for (column, value) in values {
            self.value(column, value);
        }
        self
    }

    // building the builder

    /// Clears the statement and any latched error; the config stays.
    pub fn reset(&mut self) -> &mut Self {
        tracing::trace!("resetting statement builder");
        self.statement = Statement::default();
        self.maybe_error = None;
        self
    }

    /// Renders the statement. Pure: calling it again gives the same result.
    pub fn to_sql(&self) -> Result<String> {
        if let Some(ref error) = self.maybe_error {
            return Err(error.clone());
        }
        self.config.dialect.render(&self.statement)
    }

    /// Renders the statement and resets the builder for the next one.
    pub fn build(&mut self) -> Result<String> {
        let sql = self.to_sql();
        self.reset();
        sql
    }
}
