use crate::error::UnifyError;
use crate::model::DependencyKind;
use log::debug;

/// The three ordered regions of a schema file. `prefix` and `suffix` keep
/// their original line endings so passthrough content is reproduced
/// byte-for-byte; `body` holds the raw dependency lines awaiting parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Regions {
    pub prefix: Vec<String>,
    pub body: Vec<String>,
    pub suffix: Vec<String>,
}

/// Partition `content` into preamble, dependency lines, and trailer.
///
/// A line belongs to the body iff it contains the format's operator token.
/// The preamble is every non-dependency line up to and including the Nth
/// blank line, where N depends on the format (one for FD files, two for
/// IND files). Everything after goes to the suffix in original order.
pub fn split(content: &str, kind: DependencyKind) -> Result<Regions, UnifyError> {
    let mut body = Vec::new();
    let mut other = Vec::new();

    for line in content.split_inclusive('\n') {
        if line.contains(kind.operator()) {
            body.push(line.to_string());
        } else {
            other.push(line.to_string());
        }
    }

    let required = kind.preamble_blanks();
    let mut boundary = None;
    let mut blanks = 0;
    for (idx, line) in other.iter().enumerate() {
        if line.trim().is_empty() {
            blanks += 1;
            if blanks == required {
                boundary = Some(idx + 1);
                break;
            }
        }
    }

    // Validate the structural assumption before consuming anything, so a
    // short preamble is a reported error rather than a shifted boundary.
    let Some(boundary) = boundary else {
        return Err(UnifyError::MalformedPreamble {
            required,
            found: blanks,
        });
    };

    let suffix = other.split_off(boundary);
    debug!(
        "Partitioned file: {} preamble, {} dependency, {} trailer line(s)",
        other.len(),
        body.len(),
        suffix.len()
    );

    Ok(Regions {
        prefix: other,
        body,
        suffix,
    })
}
