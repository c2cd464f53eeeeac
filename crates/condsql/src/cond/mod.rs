//! Condition trees for WHERE/HAVING/ON clauses.
//!
//! A [`Cond`] is an immutable tree: every combinator call builds a new parent
//! node and leaves its inputs untouched. Rendering goes through
//! [`SqlBuilder`], so the same tree can be rendered for any dialect.
//!
//! ```
//! use condsql::{eq, neq, Dialect, SqlBuilder};
//!
//! let cond = eq("a", 1).and(neq("b", "100"));
//! let (sql, args) = cond.to_sql_with(Dialect::Postgres).unwrap();
//! assert_eq!(sql, "a=$1 AND b<>$2");
//! assert_eq!(args.len(), 2);
//! ```

use crate::builder::Builder;
use crate::error::{Error, Result};
use crate::render::{SqlBuilder, SqlWriter};
use crate::value::{Arg, Value};


/// Comparison operator of a [`Cond::Compare`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Neq => "<>",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
        }
    }
}

/// SQL text with its own `?` markers and arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct RawExpr {
    pub sql: String,
    pub args: Vec<Arg>,
}

impl RawExpr {
    pub fn new(sql: impl Into<String>, args: Vec<Arg>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }

    /// Blank text with no arguments.
    pub fn is_empty(&self) -> bool {
        self.sql.trim().is_empty() && self.args.is_empty()
    }
}

impl SqlBuilder for RawExpr {
    fn write_sql(&self, w: &mut SqlWriter) -> Result<()> {
        w.push_expr(&self.sql, &self.args)
    }
}

/// Right-hand side of a comparison or assignment.
#[derive(Debug, Clone)]
pub enum Operand {
    Value(Arg),
    /// Raw expression, parenthesized in conditions and inlined in assignments.
    Expr(RawExpr),
    /// Nested statement, always parenthesized.
    Sub(Box<Builder>),
}

impl Operand {
    fn is_null(&self) -> bool {
        matches!(self, Operand::Value(arg) if arg.value().is_null())
    }

    pub(crate) fn write_sql(&self, w: &mut SqlWriter) -> Result<()> {
        match self {
            Operand::Value(arg) => w.bind(arg.clone()),
            Operand::Expr(expr) => {
                w.push('(');
                expr.write_sql(w)?;
                w.push(')');
                Ok(())
            }
            Operand::Sub(builder) => {
                w.push('(');
                builder.write_sql(w)?;
                w.push(')');
                Ok(())
            }
        }
    }
}

impl<T: Into<Arg>> From<T> for Operand {
    fn from(v: T) -> Self {
        Operand::Value(v.into())
    }
}

impl From<RawExpr> for Operand {
    fn from(expr: RawExpr) -> Self {
        Operand::Expr(expr)
    }
}

impl From<Builder> for Operand {
    fn from(builder: Builder) -> Self {
        Operand::Sub(Box::new(builder))
    }
}

/// Source of an IN / NOT IN list.
#[derive(Debug, Clone)]
pub enum InSource {
    Values(Vec<Arg>),
    Expr(RawExpr),
    Sub(Box<Builder>),
}

/// A condition node.
#[derive(Debug, Clone)]
pub enum Cond {
    /// `column <op> operand`; `=`/`<>` against NULL render as IS [NOT] NULL.
    Compare {
        column: String,
        op: CompareOp,
        operand: Operand,
    },
    Like {
        column: String,
        pattern: String,
        negated: bool,
    },
    Between {
        column: String,
        low: Arg,
        high: Arg,
    },
    In {
        column: String,
        source: InSource,
        negated: bool,
    },
    IsNull {
        column: String,
        negated: bool,
    },
    And(Vec<Cond>),
    Or(Vec<Cond>),
    Not(Box<Cond>),
    Expr(RawExpr),
}

impl Default for Cond {
    /// The empty condition: an `And` without children.
    fn default() -> Self {
        Cond::And(Vec::new())
    }
}

fn compare(column: impl Into<String>, op: CompareOp, operand: impl Into<Operand>) -> Cond {
    Cond::Compare {
        column: column.into(),
        op,
        operand: operand.into(),
    }
}

impl Cond {
    /// `column=value`, or `column IS NULL` when the value is NULL.
    pub fn eq(column: impl Into<String>, value: impl Into<Operand>) -> Self {
        compare(column, CompareOp::Eq, value)
    }

    /// `column<>value`, or `column IS NOT NULL` when the value is NULL.
    pub fn neq(column: impl Into<String>, value: impl Into<Operand>) -> Self {
        compare(column, CompareOp::Neq, value)
    }

    pub fn gt(column: impl Into<String>, value: impl Into<Operand>) -> Self {
        compare(column, CompareOp::Gt, value)
    }

    pub fn gte(column: impl Into<String>, value: impl Into<Operand>) -> Self {
        compare(column, CompareOp::Gte, value)
    }

    pub fn lt(column: impl Into<String>, value: impl Into<Operand>) -> Self {
        compare(column, CompareOp::Lt, value)
    }

    pub fn lte(column: impl Into<String>, value: impl Into<Operand>) -> Self {
        compare(column, CompareOp::Lte, value)
    }

    /// `column LIKE pattern`; the pattern is wrapped in `%...%` unless it
    /// already starts or ends with `%`.
    pub fn like(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Cond::Like {
            column: column.into(),
            pattern: pattern.into(),
            negated: false,
        }
    }

    /// `column NOT LIKE pattern`, with the same `%` wrapping as [`Cond::like`].
    pub fn not_like(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Cond::Like {
            column: column.into(),
            pattern: pattern.into(),
            negated: true,
        }
    }

    pub fn between(column: impl Into<String>, low: impl Into<Arg>, high: impl Into<Arg>) -> Self {
        Cond::Between {
            column: column.into(),
            low: low.into(),
            high: high.into(),
        }
    }

    /// `column IN (v1,v2,...)`. Fails on an empty list.
    pub fn in_list<I, T>(column: impl Into<String>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Arg>,
    {
        in_values(column.into(), values, false)
    }

    /// `column NOT IN (v1,v2,...)`. Fails on an empty list.
    pub fn not_in<I, T>(column: impl Into<String>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Arg>,
    {
        in_values(column.into(), values, true)
    }

    /// `column IN (<sub-statement>)`
    pub fn in_sub(column: impl Into<String>, sub: Builder) -> Self {
        Cond::In {
            column: column.into(),
            source: InSource::Sub(Box::new(sub)),
            negated: false,
        }
    }

    /// `column NOT IN (<sub-statement>)`
    pub fn not_in_sub(column: impl Into<String>, sub: Builder) -> Self {
        Cond::In {
            column: column.into(),
            source: InSource::Sub(Box::new(sub)),
            negated: true,
        }
    }

    /// `column IN (<expr>)`
    pub fn in_expr(column: impl Into<String>, expr: RawExpr) -> Self {
        Cond::In {
            column: column.into(),
            source: InSource::Expr(expr),
            negated: false,
        }
    }

    pub fn is_null(column: impl Into<String>) -> Self {
        Cond::IsNull {
            column: column.into(),
            negated: false,
        }
    }

    pub fn is_not_null(column: impl Into<String>) -> Self {
        Cond::IsNull {
            column: column.into(),
            negated: true,
        }
    }

    /// Raw SQL with `?` markers; the marker count must match `args`.
    pub fn expr(sql: impl Into<String>, args: Vec<Arg>) -> Self {
        Cond::Expr(RawExpr::new(sql, args))
    }

    /// A new `And` of `self` and `other`.
    ///
    /// When `self` is already an `And`, its children are cloned into the new
    /// node rather than nested.
    pub fn and(&self, other: impl Into<Cond>) -> Cond {
        let mut children = match self {
            Cond::And(children) => children.clone(),
            cond => vec![cond.clone()],
        };
        children.push(other.into());
        Cond::And(children)
    }

    /// A new `Or` of `self` and `other`, flattening like [`Cond::and`].
    pub fn or(&self, other: impl Into<Cond>) -> Cond {
        let mut children = match self {
            Cond::Or(children) => children.clone(),
            cond => vec![cond.clone()],
        };
        children.push(other.into());
        Cond::Or(children)
    }

    /// Check if this condition renders to nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Cond::And(children) | Cond::Or(children) => children.iter().all(Cond::is_empty),
            Cond::Not(inner) => inner.is_empty(),
            Cond::Expr(expr) => expr.is_empty(),
            _ => false,
        }
    }

    /// Look through combinators that hold a single non-empty child.
    fn effective(&self) -> &Cond {
        match self {
            Cond::And(children) | Cond::Or(children) => {
                let mut live = children.iter().filter(|c| !c.is_empty());
                match (live.next(), live.next()) {
                    (Some(only), None) => only.effective(),
                    _ => self,
                }
            }
            _ => self,
        }
    }

    fn write_joined(
        children: &[Cond],
        sep: &str,
        w: &mut SqlWriter,
        wrap: fn(&Cond) -> bool,
    ) -> Result<()> {
        let mut first = true;
        for child in children.iter().filter(|c| !c.is_empty()) {
            if !first {
                w.push_str(sep);
            }
            first = false;
            let child = child.effective();
            if wrap(child) {
                w.push('(');
                child.write_sql(w)?;
                w.push(')');
            } else {
                child.write_sql(w)?;
            }
        }
        Ok(())
    }
}

fn in_values<I, T>(column: String, values: I, negated: bool) -> Result<Cond>
where
    I: IntoIterator<Item = T>,
    T: Into<Arg>,
{
    let values: Vec<Arg> = values.into_iter().map(Into::into).collect();
    if values.is_empty() {
        return Err(Error::malformed(format!("empty IN list for column `{column}`")));
    }
    Ok(Cond::In {
        column,
        source: InSource::Values(values),
        negated,
    })
}

impl SqlBuilder for Cond {
    fn write_sql(&self, w: &mut SqlWriter) -> Result<()> {
        match self {
            Cond::Compare {
                column,
                op,
                operand,
            } => {
                w.push_str(column);
                if operand.is_null() {
                    match op {
                        CompareOp::Eq => {
                            w.push_str(" IS NULL");
                            return Ok(());
                        }
                        CompareOp::Neq => {
                            w.push_str(" IS NOT NULL");
                            return Ok(());
                        }
                        _ => {}
                    }
                }
                w.push_str(op.as_str());
                operand.write_sql(w)
            }
            Cond::Like {
                column,
                pattern,
                negated,
            } => {
                w.push_str(column);
                w.push_str(if *negated { " NOT LIKE " } else { " LIKE " });
                let pattern = if pattern.starts_with('%') || pattern.ends_with('%') {
                    pattern.clone()
                } else {
                    format!("%{pattern}%")
                };
                w.bind(Value::Text(pattern).into())
            }
            Cond::Between { column, low, high } => {
                w.push_str(column);
                w.push_str(" BETWEEN ");
                w.bind(low.clone())?;
                w.push_str(" AND ");
                w.bind(high.clone())
            }
            Cond::In {
                column,
                source,
                negated,
            } => {
                w.push_str(column);
                w.push_str(if *negated { " NOT IN (" } else { " IN (" });
                match source {
                    InSource::Values(values) => {
                        if values.is_empty() {
                            return Err(Error::malformed(format!(
                                "empty IN list for column `{column}`"
                            )));
                        }
                        for (i, value) in values.iter().enumerate() {
                            if i > 0 {
                                w.push(',');
                            }
                            w.bind(value.clone())?;
                        }
                    }
                    InSource::Expr(expr) => expr.write_sql(w)?,
                    InSource::Sub(builder) => builder.write_sql(w)?,
                }
                w.push(')');
                Ok(())
            }
            Cond::IsNull { column, negated } => {
                w.push_str(column);
                w.push_str(if *negated { " IS NOT NULL" } else { " IS NULL" });
                Ok(())
            }
            Cond::And(children) => Cond::write_joined(children, " AND ", w, |c| {
                matches!(c, Cond::Or(_) | Cond::Expr(_))
            }),
            Cond::Or(children) => Cond::write_joined(children, " OR ", w, |c| {
                matches!(c, Cond::And(_) | Cond::Expr(_))
            }),
            Cond::Not(inner) => {
                if inner.is_empty() {
                    return Ok(());
                }
                let inner = inner.effective();
                w.push_str("NOT ");
                if matches!(inner, Cond::And(_) | Cond::Or(_) | Cond::Expr(_)) {
                    w.push('(');
                    inner.write_sql(w)?;
                    w.push(')');
                    Ok(())
                } else {
                    inner.write_sql(w)
                }
            }
            Cond::Expr(expr) if expr.is_empty() => Ok(()),
            Cond::Expr(expr) => expr.write_sql(w),
        }
    }
}

impl From<RawExpr> for Cond {
    fn from(expr: RawExpr) -> Self {
        Cond::Expr(expr)
    }
}

impl From<&str> for Cond {
    /// Raw SQL without arguments.
    fn from(sql: &str) -> Self {
        Cond::expr(sql, Vec::new())
    }
}

impl From<String> for Cond {
    fn from(sql: String) -> Self {
        Cond::expr(sql, Vec::new())
    }
}

// ==================== Free constructors ====================

pub fn eq(column: impl Into<String>, value: impl Into<Operand>) -> Cond {
    Cond::eq(column, value)
}

pub fn neq(column: impl Into<String>, value: impl Into<Operand>) -> Cond {
    Cond::neq(column, value)
}

pub fn gt(column: impl Into<String>, value: impl Into<Operand>) -> Cond {
    Cond::gt(column, value)
}

pub fn gte(column: impl Into<String>, value: impl Into<Operand>) -> Cond {
    Cond::gte(column, value)
}

pub fn lt(column: impl Into<String>, value: impl Into<Operand>) -> Cond {
    Cond::lt(column, value)
}

pub fn lte(column: impl Into<String>, value: impl Into<Operand>) -> Cond {
    Cond::lte(column, value)
}

pub fn like(column: impl Into<String>, pattern: impl Into<String>) -> Cond {
    Cond::like(column, pattern)
}

pub fn not_like(column: impl Into<String>, pattern: impl Into<String>) -> Cond {
    Cond::not_like(column, pattern)
}

pub fn between(column: impl Into<String>, low: impl Into<Arg>, high: impl Into<Arg>) -> Cond {
    Cond::between(column, low, high)
}

pub fn in_list<I, T>(column: impl Into<String>, values: I) -> Result<Cond>
where
    I: IntoIterator<Item = T>,
    T: Into<Arg>,
{
    Cond::in_list(column, values)
}

pub fn not_in<I, T>(column: impl Into<String>, values: I) -> Result<Cond>
where
    I: IntoIterator<Item = T>,
    T: Into<Arg>,
{
    Cond::not_in(column, values)
}

pub fn is_null(column: impl Into<String>) -> Cond {
    Cond::is_null(column)
}

pub fn is_not_null(column: impl Into<String>) -> Cond {
    Cond::is_not_null(column)
}

pub fn expr(sql: impl Into<String>, args: Vec<Arg>) -> Cond {
    Cond::expr(sql, args)
}

/// `And` of every condition in `conds`.
pub fn and(conds: impl IntoIterator<Item = Cond>) -> Cond {
    Cond::And(conds.into_iter().collect())
}

/// `Or` of every condition in `conds`.
pub fn or(conds: impl IntoIterator<Item = Cond>) -> Cond {
    Cond::Or(conds.into_iter().collect())
}

pub fn not(cond: Cond) -> Cond {
    Cond::Not(Box::new(cond))
}
