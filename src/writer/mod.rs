use std::fmt::Display;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use tempfile::NamedTempFile;

use crate::regions::Regions;

/// Reassemble the file: preamble as captured, one canonical line per
/// unified record, then the trailer as captured.
pub fn assemble<T: Display>(regions: &Regions, unified: &[T]) -> String {
    let mut output = String::new();
    for line in &regions.prefix {
        output.push_str(line);
    }
    for record in unified {
        output.push_str(&record.to_string());
        output.push('\n');
    }
    for line in &regions.suffix {
        output.push_str(line);
    }
    output
}

/// Truncate the file and write the rewritten content. A crash mid-write
/// leaves the file truncated; `write_atomic` is the hardened alternative.
pub fn write_in_place(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Rewrote {} in place", path.display());
    Ok(())
}

/// Write to a temp file in the target's directory, then rename over the
/// original. The file on disk is always either the old or the new content.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))
        .context("Failed to create temporary file")?;
    tmp.write_all(content.as_bytes())
        .context("Failed to write temporary file")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    info!("Rewrote {} atomically", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DependencyKind;
    use crate::parser::parse_fd;
    use crate::regions::split;
    use crate::unifier::unify_fds;

    #[test]
    fn test_assemble_preserves_prefix_and_suffix() {
        let content = "# tables\n\nR a -> b\nR a -> c\n\ntrailer line\n";
        let regions = split(content, DependencyKind::Functional).unwrap();
        let fds = regions
            .body
            .iter()
            .map(|l| parse_fd(l).unwrap())
            .collect::<Vec<_>>();
        let output = assemble(&regions, &unify_fds(fds));

        assert_eq!(output, "# tables\n\nR a -> b, c\n\ntrailer line\n");
    }

    #[test]
    fn test_write_modes_produce_identical_files() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        let atomic = dir.path().join("atomic.txt");
        fs::write(&plain, "old").unwrap();
        fs::write(&atomic, "old").unwrap();

        write_in_place(&plain, "new content\n").unwrap();
        write_atomic(&atomic, "new content\n").unwrap();

        assert_eq!(fs::read_to_string(&plain).unwrap(), "new content\n");
        assert_eq!(fs::read_to_string(&atomic).unwrap(), "new content\n");
    }
}
