use depunify::model::DependencyKind;
use depunify::parser::parse_fd;
use depunify::regions::split;
use depunify::unifier::unify_fds;
use depunify::writer::assemble;

fn unify_content(content: &str) -> String {
    let regions = split(content, DependencyKind::Functional).unwrap();
    let fds = regions
        .body
        .iter()
        .map(|line| parse_fd(line).unwrap())
        .collect::<Vec<_>>();
    assemble(&regions, &unify_fds(fds))
}

#[test]
fn test_fragmented_fds_collapse() {
    let input = "\
tables: users orders

users id -> name
users id -> email
orders id -> total

notes follow
";
    let expected = "\
tables: users orders

users id -> name, email
orders id -> total

notes follow
";
    assert_eq!(unify_content(input), expected);
}

#[test]
fn test_prefix_and_suffix_are_byte_identical() {
    let input = "line one\n  indented, with commas\n\nR a -> b\ntrailing  spaces  \n\tand a tab\n";
    let output = unify_content(input);

    assert!(output.starts_with("line one\n  indented, with commas\n\n"));
    assert!(output.ends_with("trailing  spaces  \n\tand a tab\n"));
}

#[test]
fn test_comma_spacing_is_canonicalized() {
    let input = "header\n\nR a,b -> c,d\n";
    assert_eq!(unify_content(input), "header\n\nR a, b -> c, d\n");
}

#[test]
fn test_idempotent_when_no_lhs_is_shared() {
    let input = "header\n\nR a -> b\nS c -> d\n";
    let once = unify_content(input);
    let twice = unify_content(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_not_idempotent_across_duplicate_contributions() {
    // Merging concatenates rather than set-unions, so re-running on a file
    // that still contains duplicate contributions accumulates them.
    let input = "h\n\nR a -> b\nR a -> b\n";
    let once = unify_content(input);
    assert_eq!(once, "h\n\nR a -> b, b\n");

    let again = unify_content("h\n\nR a -> b, b\nR a -> b\n");
    assert_eq!(again, "h\n\nR a -> b, b, b\n");
}

#[test]
fn test_dependency_lines_anywhere_after_preamble_join_the_block() {
    let input = "h\n\nR a -> b\ninterleaved note\nR a -> c\n";
    assert_eq!(unify_content(input), "h\n\nR a -> b, c\ninterleaved note\n");
}
