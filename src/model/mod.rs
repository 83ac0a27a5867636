use std::fmt;

/// Which flavor of dependency declaration a file carries. The two file
/// formats differ in their operator token and in how many blank lines
/// separate the preamble from the dependency section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Functional,
    Inclusion,
}

impl DependencyKind {
    /// The token that marks a line as a dependency declaration.
    pub fn operator(self) -> &'static str {
        match self {
            DependencyKind::Functional => "->",
            DependencyKind::Inclusion => "<=",
        }
    }

    /// Number of blank lines that close the preamble for this format.
    pub fn preamble_blanks(self) -> usize {
        match self {
            DependencyKind::Functional => 1,
            DependencyKind::Inclusion => 2,
        }
    }
}

/// A functional dependency: `lhs` columns of `table` determine `rhs`.
///
/// Column order in `lhs` is significant; two FDs with the same columns in
/// a different order have distinct determining keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionalDependency {
    pub table: String,
    pub lhs: Vec<String>,
    pub rhs: Vec<String>,
}

impl fmt::Display for FunctionalDependency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} -> {}",
            self.table,
            self.lhs.join(", "),
            self.rhs.join(", ")
        )
    }
}

/// An inclusion dependency: values of `left_columns` in `left_table` must
/// also appear in `right_columns` of `right_table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionDependency {
    pub left_table: String,
    pub left_columns: Vec<String>,
    pub right_table: String,
    pub right_columns: Vec<String>,
}

impl InclusionDependency {
    /// True if `other` states the same inclusion with the sides swapped.
    pub fn is_mirror_of(&self, other: &InclusionDependency) -> bool {
        self.left_table == other.right_table
            && self.left_columns == other.right_columns
            && self.right_table == other.left_table
            && self.right_columns == other.left_columns
    }
}

impl fmt::Display for InclusionDependency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} <= {} {}",
            self.left_table,
            self.left_columns.join(", "),
            self.right_table,
            self.right_columns.join(", ")
        )
    }
}

/// The unifier's verdict on one inclusion dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnifiedInd {
    /// One-directional inclusion, no reverse declaration present.
    Subset(InclusionDependency),
    /// The reverse declaration also exists; the two collapse into a single
    /// symmetric statement.
    Equivalence(InclusionDependency),
}

impl fmt::Display for UnifiedInd {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnifiedInd::Subset(ind) => write!(f, "{}", ind),
            UnifiedInd::Equivalence(ind) => write!(
                f,
                "{} {} == {} {}",
                ind.left_table,
                ind.left_columns.join(", "),
                ind.right_table,
                ind.right_columns.join(", ")
            ),
        }
    }
}
