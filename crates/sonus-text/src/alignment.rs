//! Word-level Levenshtein alignment.

use serde::Serialize;

/// Split text into words on any run of whitespace.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Edit counts from aligning a hypothesis against a reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WordAlignment {
    /// Reference words matched exactly
    pub hits: usize,
    /// Reference words replaced by a different word
    pub substitutions: usize,
    /// Reference words missing from the hypothesis
    pub deletions: usize,
    /// Hypothesis words with no reference counterpart
    pub insertions: usize,
}

impl WordAlignment {
    /// Number of edits (`S + D + I`).
    pub fn errors(&self) -> usize {
        self.substitutions + self.deletions + self.insertions
    }

    /// Number of reference words (`H + S + D`).
    pub fn reference_len(&self) -> usize {
        self.hits + self.substitutions + self.deletions
    }

    /// Word error rate as a ratio, or `None` for an empty reference.
    pub fn wer(&self) -> Option<f64> {
        match self.reference_len() {
            0 => None,
            n => Some(self.errors() as f64 / n as f64),
        }
    }
}

/// Align two word sequences with minimum edit distance.
///
/// Ties in the backtrace prefer a match or substitution, then a deletion,
/// then an insertion. The tie-break changes the split between edit kinds
/// but never the total.
pub fn align_words(reference: &[&str], hypothesis: &[&str]) -> WordAlignment {
    let m = reference.len();
    let n = hypothesis.len();

    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(reference[i - 1] != hypothesis[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    let mut alignment = WordAlignment::default();
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let same = reference[i - 1] == hypothesis[j - 1];
            let diagonal = dp[i - 1][j - 1] + usize::from(!same);
            if dp[i][j] == diagonal {
                if same {
                    alignment.hits += 1;
                } else {
                    alignment.substitutions += 1;
                }
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && dp[i][j] == dp[i - 1][j] + 1 {
            alignment.deletions += 1;
            i -= 1;
        } else {
            alignment.insertions += 1;
            j -= 1;
        }
    }

    alignment
}
