use super::fd::split_columns;
use crate::error::UnifyError;
use crate::model::InclusionDependency;

/// Parse one inclusion dependency line of the form
/// `Left(col1,col2) <= Right(col3,col4)`.
///
/// Parentheses carry no structure of their own: the open paren becomes a
/// separator and the close paren is dropped, leaving five whitespace
/// tokens to destructure.
pub fn parse_ind(line: &str) -> Result<InclusionDependency, UnifyError> {
    let normalized = line.replace(", ", ",").replace('(', " ").replace(')', "");
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    match tokens.as_slice() {
        [left_table, left_columns, "<=", right_table, right_columns] => Ok(InclusionDependency {
            left_table: (*left_table).to_string(),
            left_columns: split_columns(left_columns),
            right_table: (*right_table).to_string(),
            right_columns: split_columns(right_columns),
        }),
        _ => Err(UnifyError::MalformedDependency {
            line: line.trim_end().to_string(),
            expected: 5,
            found: tokens.len(),
        }),
    }
}
