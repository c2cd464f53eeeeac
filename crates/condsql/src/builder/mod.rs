//! Statement builder.
//!
//! A [`Builder`] accumulates the clauses of one SELECT, INSERT, UPDATE or
//! DELETE statement, or just a condition. It is a consuming builder: each call
//! takes `self` and returns it. Rendering borrows, so a finished builder can be
//! rendered any number of times and for any dialect.
//!
//! Joins, GROUP BY, HAVING, ORDER BY and LIMIT/OFFSET belong to SELECT only;
//! setting them on INSERT, UPDATE or DELETE (or a WHERE on INSERT) makes
//! rendering fail with [`Error::ConditionMalformed`](crate::Error::ConditionMalformed).
//!
//! ```
//! use condsql::{eq, select, SqlBuilder};
//!
//! let (sql, args) = select(["id", "name"])
//!     .from("users")
//!     .and_where(eq("status", "active"))
//!     .order_by("id DESC")
//!     .limit(10)
//!     .to_sql()
//!     .unwrap();
//! assert_eq!(sql, "SELECT id,name FROM users WHERE status=? ORDER BY id DESC LIMIT 10");
//! assert_eq!(args.len(), 1);
//! ```

mod write;

use crate::cond::{Cond, Operand};
use crate::dialect::Dialect;


/// Operation kind of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL OUTER JOIN",
            JoinKind::Cross => "CROSS JOIN",
        }
    }
}

/// One JOIN clause. `on` is ignored for [`JoinKind::Cross`].
#[derive(Debug, Clone)]
pub struct Join {
    pub kind: JoinKind,
    pub table: String,
    pub on: Cond,
}

/// A statement under construction.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    dialect: Dialect,
    kind: Option<StatementKind>,
    table: Option<String>,
    columns: Vec<String>,
    assignments: Vec<(String, Operand)>,
    joins: Vec<Join>,
    cond: Cond,
    group_by: Vec<String>,
    having: Cond,
    order_by: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Builder {
    /// Create an empty builder for the default (MySQL) dialect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder rendering for `dialect`.
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    /// Change the target dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn kind(&self) -> Option<StatementKind> {
        self.kind
    }

    /// The root WHERE condition.
    pub fn cond(&self) -> &Cond {
        &self.cond
    }

    // ==================== Operation ====================

    /// Make this a SELECT of `columns` (`*` when empty).
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kind = Some(StatementKind::Select);
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Make this an INSERT; add columns with [`Builder::value`].
    pub fn insert(mut self) -> Self {
        self.kind = Some(StatementKind::Insert);
        self
    }

    /// Make this an UPDATE; add assignments with [`Builder::set`].
    pub fn update(mut self) -> Self {
        self.kind = Some(StatementKind::Update);
        self
    }

    pub fn delete(mut self) -> Self {
        self.kind = Some(StatementKind::Delete);
        self
    }

    // ==================== Table & columns ====================

    /// Set the target table.
    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Alias of [`Builder::from`] that reads better for INSERT.
    pub fn into_table(self, table: impl Into<String>) -> Self {
        self.from(table)
    }

    /// Alias of [`Builder::from`] that reads better for UPDATE.
    pub fn table(self, table: impl Into<String>) -> Self {
        self.from(table)
    }

    /// Add an INSERT column and its value.
    pub fn value(self, column: impl Into<String>, value: impl Into<Operand>) -> Self {
        self.set(column, value)
    }

    /// Add an assignment: `column=value`. A NULL value renders as `null`.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Operand>) -> Self {
        self.assignments.push((column.into(), value.into()));
        self
    }

    // ==================== WHERE ====================

    /// AND `cond` onto the WHERE condition.
    pub fn and_where(mut self, cond: impl Into<Cond>) -> Self {
        self.cond = merge(&self.cond, cond.into(), |c, next| c.and(next));
        self
    }

    /// OR `cond` onto the WHERE condition.
    pub fn or_where(mut self, cond: impl Into<Cond>) -> Self {
        self.cond = merge(&self.cond, cond.into(), |c, next| c.or(next));
        self
    }

    // ==================== JOIN ====================

    pub fn join(mut self, kind: JoinKind, table: impl Into<String>, on: impl Into<Cond>) -> Self {
        self.joins.push(Join {
            kind,
            table: table.into(),
            on: on.into(),
        });
        self
    }

    pub fn inner_join(self, table: impl Into<String>, on: impl Into<Cond>) -> Self {
        self.join(JoinKind::Inner, table, on)
    }

    pub fn left_join(self, table: impl Into<String>, on: impl Into<Cond>) -> Self {
        self.join(JoinKind::Left, table, on)
    }

    pub fn right_join(self, table: impl Into<String>, on: impl Into<Cond>) -> Self {
        self.join(JoinKind::Right, table, on)
    }

    /// Add FULL OUTER JOIN.
    pub fn full_join(self, table: impl Into<String>, on: impl Into<Cond>) -> Self {
        self.join(JoinKind::Full, table, on)
    }

    pub fn cross_join(self, table: impl Into<String>) -> Self {
        self.join(JoinKind::Cross, table, Cond::default())
    }

    // ==================== Grouping & ordering ====================

    pub fn group_by(mut self, clause: impl Into<String>) -> Self {
        self.group_by.push(clause.into());
        self
    }

    /// AND `cond` onto the HAVING condition.
    pub fn having(mut self, cond: impl Into<Cond>) -> Self {
        self.having = merge(&self.having, cond.into(), |c, next| c.and(next));
        self
    }

    /// Add an ORDER BY clause verbatim.
    pub fn order_by(mut self, clause: impl Into<String>) -> Self {
        self.order_by.push(clause.into());
        self
    }

    pub fn asc(self, column: &str) -> Self {
        self.order_by(format!("{column} ASC"))
    }

    pub fn desc(self, column: &str) -> Self {
        self.order_by(format!("{column} DESC"))
    }

    // ==================== Pagination ====================

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Pagination helper.
    ///
    /// `page` is 1-based (clamped to >= 1).
    /// `per_page` is clamped to >= 1.
    pub fn paginate(mut self, page: u64, per_page: u64) -> Self {
        let page = page.max(1);
        let size = per_page.max(1);
        self.limit = Some(size);
        self.offset = Some((page - 1) * size);
        self
    }
}

/// Combine onto an existing condition; an empty one is replaced outright.
fn merge(current: &Cond, next: Cond, combine: fn(&Cond, Cond) -> Cond) -> Cond {
    if current.is_empty() {
        next
    } else {
        combine(current, next)
    }
}

impl From<Cond> for Builder {
    /// A condition-only builder.
    fn from(cond: Cond) -> Self {
        Builder::new().and_where(cond)
    }
}
