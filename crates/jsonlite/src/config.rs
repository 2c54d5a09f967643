//! Parser configuration

/// Configuration for a single parse.
///
/// Each call to [`parse_document_with`](crate::parse_document_with) builds a
/// fresh parser from one of these; nothing carries over between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Skip `//` line comments wherever a token may start
    pub allow_comments: bool,

    /// Ignore anything after the top-level value
    pub allow_trailing: bool,

    /// Log every recognised token at trace level
    pub trace: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            allow_comments: true,
            allow_trailing: true,
            trace: false,
        }
    }
}

impl ParseConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject comments and any text after the top-level value.
    pub fn strict() -> Self {
        Self {
            allow_comments: false,
            allow_trailing: false,
            ..Default::default()
        }
    }

    /// Enable or disable token tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let config = ParseConfig::new();
        assert!(config.allow_comments);
        assert!(config.allow_trailing);
        assert!(!config.trace);
    }

    #[test]
    fn test_strict() {
        let config = ParseConfig::strict().with_trace(true);
        assert!(!config.allow_comments);
        assert!(!config.allow_trailing);
        assert!(config.trace);
    }
}
