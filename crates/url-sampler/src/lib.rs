//! Synthetic load-test url lists whose per-url frequency follows an
//! empirical hits distribution.
//!
//! A weight file holds one hit count per line; line `i` becomes url
//! `prefix + i`. [`generate`] draws the requested number of urls from that
//! distribution and writes them, one per line, in random order.

pub mod error;
pub mod output;
pub mod sampler;
pub mod weights;

pub use error::{GenerateError, Result};
pub use weights::Weights;

use rand::Rng;
use std::collections::HashSet;
use std::path::PathBuf;

/// Inputs of a single generation run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub weights_path: PathBuf,
    pub n_urls: usize,
    pub prefix: String,
    pub output_path: PathBuf,
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub categories: usize,
    pub total_weight: u64,
    pub urls_written: usize,
    pub distinct_indexes: usize,
}

/// Load weights, sample `n_urls` indexes and write the url file.
///
/// Fails before touching `output_path` if the weights cannot be read or
/// sampled; the output is replaced atomically otherwise.
pub fn generate<R: Rng + ?Sized>(request: &GenerateRequest, rng: &mut R) -> Result<RunSummary> {
    let weights = Weights::load(&request.weights_path)?;
    tracing::debug!(
        categories = weights.len(),
        total = weights.total(),
        n_urls = request.n_urls,
        "sampling"
    );

    let indexes = sampler::sample_indices(&weights, request.n_urls, rng)?;
    output::write_urls(&request.output_path, &request.prefix, &indexes)?;

    let distinct_indexes = indexes.iter().collect::<HashSet<_>>().len();
    Ok(RunSummary {
        categories: weights.len(),
        total_weight: weights.total(),
        urls_written: indexes.len(),
        distinct_indexes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;
    use std::path::Path;

    fn request(dir: &Path, weights: &str, n_urls: usize, prefix: &str) -> GenerateRequest {
        let weights_path = dir.join("hits.txt");
        fs::write(&weights_path, weights).unwrap();
        GenerateRequest {
            weights_path,
            n_urls,
            prefix: prefix.to_string(),
            output_path: dir.join("out.txt"),
        }
    }

    #[test]
    fn end_to_end_two_equal_categories() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "5\n5\n", 4, "u=");

        let mut seen = HashSet::new();
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let summary = generate(&req, &mut rng).unwrap();
            assert_eq!(summary.urls_written, 4);
            assert_eq!(summary.categories, 2);
            assert_eq!(summary.total_weight, 10);

            let text = fs::read_to_string(&req.output_path).unwrap();
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), 4);
            for line in lines {
                assert!(line == "u=0" || line == "u=1", "unexpected line {line:?}");
                seen.insert(line.to_string());
            }
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn zero_urls_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "3\n1\n", 0, "x");
        let summary = generate(&req, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(summary.urls_written, 0);
        assert_eq!(summary.distinct_indexes, 0);
        assert_eq!(fs::read_to_string(&req.output_path).unwrap(), "");
    }

    #[test]
    fn degenerate_distribution_writes_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "0\n0\n0\n", 1, "x");
        let err = generate(&req, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, GenerateError::DegenerateDistribution { .. }));
        assert!(!req.output_path.exists());
    }

    #[test]
    fn bad_weight_file_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "4\nfour\n", 10, "x");
        fs::write(&req.output_path, "x0\n").unwrap();
        let err = generate(&req, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, GenerateError::InputFormat { line: 2, .. }));
        assert_eq!(fs::read_to_string(&req.output_path).unwrap(), "x0\n");
    }

    #[test]
    fn every_line_is_prefix_plus_valid_index() {
        let dir = tempfile::tempdir().unwrap();
        let weights = "1275358\n562369\n0\n406583\n168296\n";
        let req = request(dir.path(), weights, 2_000, "example.com?a=");
        let summary = generate(&req, &mut StdRng::seed_from_u64(11)).unwrap();
        assert!(summary.distinct_indexes <= 4);

        let text = fs::read_to_string(&req.output_path).unwrap();
        assert_eq!(text.lines().count(), 2_000);
        for line in text.lines() {
            let index: usize = line
                .strip_prefix("example.com?a=")
                .expect("prefix")
                .parse()
                .expect("decimal index");
            assert!(index < 5 && index != 2);
        }
    }
}
