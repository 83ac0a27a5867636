use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnifyError {
    /// A line carries the dependency operator but does not tokenize into
    /// the expected field count.
    #[error("malformed dependency line (expected {expected} fields, found {found}): {line:?}")]
    MalformedDependency {
        line: String,
        expected: usize,
        found: usize,
    },

    /// The preamble has fewer blank lines than the format requires, so the
    /// boundary to the dependency section cannot be found.
    #[error("malformed preamble: expected {required} blank line(s) before the dependency section, found {found}")]
    MalformedPreamble { required: usize, found: usize },
}
