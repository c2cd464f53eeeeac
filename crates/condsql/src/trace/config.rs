use tracing::Level;

/// Configuration for [`TracingSqlLogger`](super::TracingSqlLogger).
#[derive(Debug, Clone)]
pub struct TraceConfig {
    /// Tracing event level to emit at.
    pub level: Level,
    /// Truncate long SQL strings (in bytes, on a char boundary). `None` means no truncation.
    pub max_sql_length: Option<usize>,
    /// Also emit the SQL with arguments inlined.
    pub include_bound: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            level: Level::DEBUG,
            max_sql_length: Some(200),
            include_bound: true,
        }
    }
}

impl TraceConfig {
    /// Create a configuration with defaults (DEBUG, 200 bytes, bound SQL included).
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tracing event level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set maximum SQL length to display.
    pub fn with_max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    /// Skip the `bound_sql` field.
    pub fn without_bound(mut self) -> Self {
        self.include_bound = false;
        self
    }
}
