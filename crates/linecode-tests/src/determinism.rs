//! Byte-for-byte determinism checks.

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// First difference found, if any.
    pub diff: Option<DiffInfo>,
}

/// The first byte difference between a run and the reference run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference, or the shorter length on a size mismatch.
    pub offset: usize,
    /// Which run (0-indexed) differed.
    pub run_index: usize,
    /// Output sizes of the reference and the differing run.
    pub sizes: (usize, usize),
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "run {} differs at byte {} ({} vs {} bytes)",
            self.run_index, self.offset, self.sizes.0, self.sizes.1
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff {
            panic!(
                "Non-deterministic output detected!\nRuns: {}\nHash: {}\n{}",
                self.runs, self.hash, diff
            );
        }
    }
}

/// Runs `generate_fn` `runs` times and compares every output to the first.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference = reference.as_ref();
    let hash = blake3::hash(reference).to_hex().to_string();

    for run_index in 1..runs {
        let output = generate_fn();
        let output = output.as_ref();
        let mismatch = reference
            .iter()
            .zip(output)
            .position(|(a, b)| a != b)
            .or_else(|| {
                (reference.len() != output.len()).then_some(reference.len().min(output.len()))
            });

        if let Some(offset) = mismatch {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                hash,
                diff: Some(DiffInfo {
                    offset,
                    run_index,
                    sizes: (reference.len(), output.len()),
                }),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        hash,
        diff: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_identical_outputs() {
        let result = verify_determinism(|| vec![1u8, 2, 3], 3);
        assert!(result.is_deterministic);
        result.assert_deterministic();
    }

    #[test]
    fn test_detects_difference() {
        let counter = Cell::new(0u8);
        let result = verify_determinism(
            || {
                counter.set(counter.get() + 1);
                vec![0u8, counter.get()]
            },
            2,
        );
        assert!(!result.is_deterministic);
        let diff = result.diff.unwrap();
        assert_eq!(diff.offset, 1);
        assert_eq!(diff.run_index, 1);
    }

    #[test]
    fn test_detects_length_mismatch() {
        let counter = Cell::new(0usize);
        let result = verify_determinism(
            || {
                counter.set(counter.get() + 1);
                vec![7u8; counter.get()]
            },
            2,
        );
        assert_eq!(result.diff.unwrap().offset, 1);
    }
}
