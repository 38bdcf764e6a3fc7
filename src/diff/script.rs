//! Token-level edit scripts (longest common subsequence)

use regex::Regex;

use super::tokens::Tokenized;

/// What happened to a token between the old and the new text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Equal,
    Removed,
    Added,
}

/// One step of an edit script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOp<'a> {
    pub kind: ChangeKind,
    pub token: &'a str,
}

/// Index-based step, used to map changes back to each side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Keep(usize, usize),
    Remove(usize),
    Insert(usize),
}

/// Diff of two texts at token granularity
#[derive(Debug, Clone)]
pub struct TextDiff<'a> {
    pub old: Tokenized<'a>,
    pub new: Tokenized<'a>,
    steps: Vec<Step>,
}

impl<'a> TextDiff<'a> {
    /// Diff two texts, splitting on `split` when given
    pub fn new(old: &'a str, new: &'a str, split: Option<&Regex>) -> Self {
        let (old, new) = match split {
            Some(pattern) => (
                Tokenized::split(old, pattern),
                Tokenized::split(new, pattern),
            ),
            None => (Tokenized::whole(old), Tokenized::whole(new)),
        };
        let steps = lcs_steps(&old.words(), &new.words());
        Self { old, new, steps }
    }

    /// The edit script in order
    pub fn ops(&self) -> Vec<EditOp<'a>> {
        self.steps
            .iter()
            .map(|step| match *step {
                Step::Keep(i, _) => EditOp {
                    kind: ChangeKind::Equal,
                    token: self.old.tokens[i].word,
                },
                Step::Remove(i) => EditOp {
                    kind: ChangeKind::Removed,
                    token: self.old.tokens[i].word,
                },
                Step::Insert(j) => EditOp {
                    kind: ChangeKind::Added,
                    token: self.new.tokens[j].word,
                },
            })
            .collect()
    }

    pub fn has_changes(&self) -> bool {
        self.steps.iter().any(|s| !matches!(s, Step::Keep(..)))
    }

    /// Words only present on the old side
    pub fn removed(&self) -> Vec<&'a str> {
        self.tokens_of(ChangeKind::Removed)
    }

    /// Words only present on the new side
    pub fn added(&self) -> Vec<&'a str> {
        self.tokens_of(ChangeKind::Added)
    }

    fn tokens_of(&self, kind: ChangeKind) -> Vec<&'a str> {
        self.ops()
            .into_iter()
            .filter(|op| op.kind == kind)
            .map(|op| op.token)
            .collect()
    }

    /// Per old token: was it removed?
    pub fn old_changed(&self) -> Vec<bool> {
        let mut changed = vec![false; self.old.tokens.len()];
        for step in &self.steps {
            if let Step::Remove(i) = step {
                changed[*i] = true;
            }
        }
        changed
    }

    /// Per new token: was it added?
    pub fn new_changed(&self) -> Vec<bool> {
        let mut changed = vec![false; self.new.tokens.len()];
        for step in &self.steps {
            if let Step::Insert(j) = step {
                changed[*j] = true;
            }
        }
        changed
    }
}

/// LCS walk; on ties removals come before insertions
fn lcs_steps(old: &[&str], new: &[&str]) -> Vec<Step> {
    let (n, m) = (old.len(), new.len());
    // suffix[i][j] = LCS length of old[i..] and new[j..]
    let mut suffix = vec![vec![0u32; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            suffix[i][j] = if old[i] == new[j] {
                suffix[i + 1][j + 1] + 1
            } else {
                suffix[i + 1][j].max(suffix[i][j + 1])
            };
        }
    }

    let mut steps = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old[i] == new[j] {
            steps.push(Step::Keep(i, j));
            i += 1;
            j += 1;
        } else if suffix[i + 1][j] >= suffix[i][j + 1] {
            steps.push(Step::Remove(i));
            i += 1;
        } else {
            steps.push(Step::Insert(j));
            j += 1;
        }
    }
    steps.extend((i..n).map(Step::Remove));
    steps.extend((j..m).map(Step::Insert));
    steps
}
