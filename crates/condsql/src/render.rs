//! Rendering conditions and statements into `(sql, args)`.
//!
//! Everything renderable implements [`SqlBuilder`] by writing itself into a
//! [`SqlWriter`]. The writer owns the output text and the argument list, so
//! marker numbering is decided in one place: each call to
//! [`SqlWriter::bind`] appends exactly one marker and exactly one argument.

use crate::bound::convert_to_bound_sql;
use crate::dialect::{Dialect, Placeholder};
use crate::error::{Error, Result};
use crate::scan::split_placeholders;
use crate::value::Arg;
use std::collections::HashMap;

/// Accumulates SQL text and its ordered arguments.
#[derive(Debug, Clone)]
pub struct SqlWriter {
    sql: String,
    args: Vec<Arg>,
    dialect: Dialect,
    placeholder: Placeholder,
    /// Named-marker dialects: parameter name -> position of its first argument.
    names: HashMap<String, usize>,
}

impl SqlWriter {
    /// Create a writer emitting `dialect`'s markers.
    pub fn new(dialect: Dialect) -> Self {
        Self::with_placeholder(dialect, dialect.placeholder())
    }

    /// Create a writer that keeps `dialect`'s clause syntax but emits bare `?`
    /// markers and plain arguments.
    pub fn positional(dialect: Dialect) -> Self {
        Self::with_placeholder(dialect, Placeholder::Question)
    }

    fn with_placeholder(dialect: Dialect, placeholder: Placeholder) -> Self {
        Self {
            sql: String::with_capacity(64),
            args: Vec::new(),
            dialect,
            placeholder,
            names: HashMap::new(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Current SQL text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Arguments bound so far.
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn push_str(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    pub fn push(&mut self, ch: char) {
        self.sql.push(ch);
    }

    /// Append one marker and record its argument.
    ///
    /// Named-marker dialects write the argument's own name when it carries
    /// one and `p<N>` otherwise; the running index advances either way.
    /// A name may repeat only with an equal value; binding it to a different
    /// value fails with [`Error::ConditionMalformed`].
    pub fn bind(&mut self, arg: Arg) -> Result<()> {
        let index = self.args.len() + 1;
        match self.placeholder {
            Placeholder::Question => {
                self.sql.push('?');
                self.args.push(Arg::Value(arg.into_value()));
            }
            Placeholder::Indexed(prefix) => {
                self.sql.push_str(prefix);
                self.sql.push_str(&index.to_string());
                self.args.push(Arg::Value(arg.into_value()));
            }
            Placeholder::Named(prefix) => {
                let (name, value) = match arg {
                    Arg::Named { name, value } => (name, value),
                    Arg::Value(value) => (format!("p{index}"), value),
                };
                if let Some(&first) = self.names.get(&name) {
                    if self.args[first].value() != &value {
                        return Err(Error::malformed(format!(
                            "parameter `{prefix}{name}` is bound to two different values"
                        )));
                    }
                } else {
                    self.names.insert(name.clone(), self.args.len());
                }
                self.sql.push_str(prefix);
                self.sql.push_str(&name);
                self.args.push(Arg::Named { name, value });
            }
        }
        Ok(())
    }

    /// Append raw SQL text, binding `args` to its bare `?` markers in order.
    pub fn push_expr(&mut self, sql: &str, args: &[Arg]) -> Result<()> {
        let segments = split_placeholders(sql)?;
        let markers = segments.len() - 1;
        if markers != args.len() {
            return Err(Error::malformed(format!(
                "expression `{sql}` has {markers} placeholder(s) but {} argument(s)",
                args.len()
            )));
        }
        for (segment, arg) in segments.iter().zip(args) {
            self.sql.push_str(segment);
            self.bind(arg.clone())?;
        }
        if let Some(tail) = segments.last() {
            self.sql.push_str(tail);
        }
        Ok(())
    }

    /// Consume the writer and return the rendered text and arguments.
    pub fn finish(self) -> (String, Vec<Arg>) {
        (self.sql, self.args)
    }
}

/// Something that renders to SQL text plus arguments.
pub trait SqlBuilder {
    /// Write this fragment into `w`.
    fn write_sql(&self, w: &mut SqlWriter) -> Result<()>;

    /// Dialect used by [`to_sql`](SqlBuilder::to_sql).
    fn dialect(&self) -> Dialect {
        Dialect::default()
    }

    /// Render with this fragment's own dialect.
    fn to_sql(&self) -> Result<(String, Vec<Arg>)> {
        self.to_sql_with(self.dialect())
    }

    /// Render against an explicit dialect.
    fn to_sql_with(&self, dialect: Dialect) -> Result<(String, Vec<Arg>)> {
        let mut w = SqlWriter::new(dialect);
        self.write_sql(&mut w)?;
        Ok(w.finish())
    }

    /// Render and inline every argument as a literal.
    fn to_bound_sql(&self) -> Result<String> {
        let mut w = SqlWriter::positional(self.dialect());
        self.write_sql(&mut w)?;
        let (sql, args) = w.finish();
        convert_to_bound_sql(&sql, &args)
    }
}

impl<T: SqlBuilder + ?Sized> SqlBuilder for &T {
    fn write_sql(&self, w: &mut SqlWriter) -> Result<()> {
        (**self).write_sql(w)
    }

    fn dialect(&self) -> Dialect {
        (**self).dialect()
    }
}

/// Render `value` against a dialect given by name.
pub fn render_with_dialect<B: SqlBuilder + ?Sized>(value: &B, dialect: &str) -> Result<(String, Vec<Arg>)> {
    let dialect: Dialect = dialect.parse()?;
    value.to_sql_with(dialect)
}
