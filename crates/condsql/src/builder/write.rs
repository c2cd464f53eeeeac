//! Clause rendering for [`Builder`].

use super::{Builder, JoinKind, StatementKind};
use crate::cond::{Cond, Operand};
use crate::dialect::{Dialect, LimitStyle};
use crate::error::{Error, Result};
use crate::render::{SqlBuilder, SqlWriter};

impl SqlBuilder for Builder {
    fn write_sql(&self, w: &mut SqlWriter) -> Result<()> {
        match self.kind {
            None if self.cond.is_empty() => Err(Error::NotSupportType),
            None => self.cond.write_sql(w),
            Some(StatementKind::Select) => self.write_select(w),
            Some(StatementKind::Insert) => self.write_insert(w),
            Some(StatementKind::Update) => self.write_update(w),
            Some(StatementKind::Delete) => self.write_delete(w),
        }
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }
}

impl Builder {
    fn require_table(&self, kind: StatementKind) -> Result<&str> {
        self.table
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingTable(kind.as_str()))
    }

    fn require_assignments(&self, kind: StatementKind) -> Result<()> {
        if self.assignments.is_empty() {
            return Err(Error::NoColumns(kind.as_str()));
        }
        Ok(())
    }

    /// Joins, grouping, ordering and paging only render in SELECT; INSERT
    /// also has no WHERE.
    fn reject_select_clauses(&self, kind: StatementKind) -> Result<()> {
        let stray = [
            (!self.joins.is_empty(), "JOIN"),
            (kind == StatementKind::Insert && !self.cond.is_empty(), "WHERE"),
            (!self.group_by.is_empty(), "GROUP BY"),
            (!self.having.is_empty(), "HAVING"),
            (!self.order_by.is_empty(), "ORDER BY"),
            (self.limit.is_some(), "LIMIT"),
            (self.offset.is_some(), "OFFSET"),
        ];
        match stray.iter().find(|(set, _)| *set) {
            Some((_, clause)) => Err(Error::malformed(format!(
                "{clause} is not supported in {} statements",
                kind.as_str()
            ))),
            None => Ok(()),
        }
    }

    fn write_select(&self, w: &mut SqlWriter) -> Result<()> {
        let table = self.require_table(StatementKind::Select)?;

        w.push_str("SELECT ");
        if self.columns.is_empty() {
            w.push('*');
        } else {
            w.push_str(&self.columns.join(","));
        }
        w.push_str(" FROM ");
        w.push_str(table);

        for join in &self.joins {
            w.push(' ');
            w.push_str(join.kind.as_str());
            w.push(' ');
            w.push_str(&join.table);
            if join.kind != JoinKind::Cross && !join.on.is_empty() {
                w.push_str(" ON ");
                join.on.write_sql(w)?;
            }
        }

        write_cond(w, " WHERE ", &self.cond)?;

        if !self.group_by.is_empty() {
            w.push_str(" GROUP BY ");
            w.push_str(&self.group_by.join(","));
        }

        write_cond(w, " HAVING ", &self.having)?;

        if !self.order_by.is_empty() {
            w.push_str(" ORDER BY ");
            w.push_str(&self.order_by.join(","));
        }

        self.write_limit(w);
        Ok(())
    }

    fn write_limit(&self, w: &mut SqlWriter) {
        if self.limit.is_none() && self.offset.is_none() {
            return;
        }
        match w.dialect().limit_style() {
            LimitStyle::LimitOffset { offset_only_limit } => {
                match (self.limit, offset_only_limit) {
                    (Some(limit), _) => w.push_str(&format!(" LIMIT {limit}")),
                    (None, Some(all)) => w.push_str(&format!(" LIMIT {all}")),
                    (None, None) => {}
                }
                if let Some(offset) = self.offset {
                    w.push_str(&format!(" OFFSET {offset}"));
                }
            }
            LimitStyle::OffsetFetch { requires_order_by } => {
                if requires_order_by && self.order_by.is_empty() {
                    w.push_str(" ORDER BY (SELECT NULL)");
                }
                w.push_str(&format!(" OFFSET {} ROWS", self.offset.unwrap_or(0)));
                if let Some(limit) = self.limit {
                    w.push_str(&format!(" FETCH NEXT {limit} ROWS ONLY"));
                }
            }
        }
    }

    fn write_insert(&self, w: &mut SqlWriter) -> Result<()> {
        let table = self.require_table(StatementKind::Insert)?;
        self.require_assignments(StatementKind::Insert)?;
        self.reject_select_clauses(StatementKind::Insert)?;

        w.push_str("INSERT INTO ");
        w.push_str(table);
        w.push_str(" (");
        for (i, (column, _)) in self.assignments.iter().enumerate() {
            if i > 0 {
                w.push(',');
            }
            w.push_str(column);
        }
        w.push_str(") VALUES (");
        for (i, (_, value)) in self.assignments.iter().enumerate() {
            if i > 0 {
                w.push(',');
            }
            write_assigned(w, value)?;
        }
        w.push(')');
        Ok(())
    }

    fn write_update(&self, w: &mut SqlWriter) -> Result<()> {
        let table = self.require_table(StatementKind::Update)?;
        self.require_assignments(StatementKind::Update)?;
        self.reject_select_clauses(StatementKind::Update)?;

        w.push_str("UPDATE ");
        w.push_str(table);
        w.push_str(" SET ");
        for (i, (column, value)) in self.assignments.iter().enumerate() {
            if i > 0 {
                w.push(',');
            }
            w.push_str(column);
            w.push('=');
            write_assigned(w, value)?;
        }

        write_cond(w, " WHERE ", &self.cond)
    }

    fn write_delete(&self, w: &mut SqlWriter) -> Result<()> {
        let table = self.require_table(StatementKind::Delete)?;
        self.reject_select_clauses(StatementKind::Delete)?;

        w.push_str("DELETE FROM ");
        w.push_str(table);
        write_cond(w, " WHERE ", &self.cond)
    }
}

/// Write `keyword` and `cond`, or nothing when the condition is empty.
fn write_cond(w: &mut SqlWriter, keyword: &str, cond: &Cond) -> Result<()> {
    if cond.is_empty() {
        return Ok(());
    }
    w.push_str(keyword);
    cond.write_sql(w)
}

/// Assignment values: NULL is inlined, raw expressions are unparenthesized.
fn write_assigned(w: &mut SqlWriter, value: &Operand) -> Result<()> {
    match value {
        Operand::Value(arg) if arg.value().is_null() => {
            w.push_str("null");
            Ok(())
        }
        Operand::Expr(expr) => expr.write_sql(w),
        other => other.write_sql(w),
    }
}
