use std::path::PathBuf;

/// Outcome of one `build` run.
#[derive(Debug)]
pub struct BuildReport {
    pub input_root: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub groups: Vec<GroupSummary>,
    /// Split documents gathered from every folder, by output name.
    pub splits: Vec<SplitOutput>,
    /// Split document write failures.
    pub errors: Vec<String>,
    /// Largest cost seen in any parsed file of any folder.
    pub max_cost: u64,
}

impl BuildReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.groups.iter().any(|group| !group.errors.is_empty())
    }

    pub fn written_groups(&self) -> usize {
        self.groups.iter().filter(|group| group.output.is_some()).count()
    }
}

#[derive(Debug, Default)]
pub struct GroupSummary {
    pub folder: String,
    pub slug: String,
    pub files: usize,
    pub parsed: usize,
    pub failed: usize,
    /// Records left in the group document after splitting.
    pub records: usize,
    pub max_cost: u64,
    pub output: Option<PathBuf>,
    pub splits: Vec<SplitSummary>,
    /// Folder listing failures, name collisions and write failures.
    pub errors: Vec<String>,
}

impl GroupSummary {
    pub fn split_records(&self) -> usize {
        self.splits.iter().map(|split| split.records).sum()
    }
}

/// Records one folder contributed to a split document.
#[derive(Debug)]
pub struct SplitSummary {
    pub chapter: String,
    pub output: String,
    pub records: usize,
}

#[derive(Debug)]
pub struct SplitOutput {
    pub output: String,
    pub records: usize,
    pub path: Option<PathBuf>,
}
