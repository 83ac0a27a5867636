use crate::error::UnifyError;
use crate::model::FunctionalDependency;

/// Parse one functional dependency line of the form
/// `table lhs1,lhs2 -> rhs1,rhs2` (a space after each comma is allowed
/// and normalized away).
pub fn parse_fd(line: &str) -> Result<FunctionalDependency, UnifyError> {
    let normalized = line.replace(", ", ",");
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    match tokens.as_slice() {
        [table, lhs, "->", rhs] => Ok(FunctionalDependency {
            table: (*table).to_string(),
            lhs: split_columns(lhs),
            rhs: split_columns(rhs),
        }),
        _ => Err(UnifyError::MalformedDependency {
            line: line.trim_end().to_string(),
            expected: 4,
            found: tokens.len(),
        }),
    }
}

pub(crate) fn split_columns(list: &str) -> Vec<String> {
    list.split(',').map(str::to_string).collect()
}
