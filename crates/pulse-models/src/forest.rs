//! Deterministic bagged regression trees.
//!
//! Each tree is fit on a bootstrap resample drawn from a seeded `StdRng`,
//! so repeated fits on the same data produce the same model. Splits
//! minimize the summed squared error of the two children; the per-feature
//! impurity decrease, normalized over the whole forest, is reported as the
//! feature importance vector.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use pulse_core::config::ForestConfig;
use pulse_core::errors::{ArtifactError, PulseResult, TrainingError};
use pulse_core::traits::FittedRegressor;

#[derive(Debug, Clone, Serialize, Deserialize)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn predict(&self, row: &[f64]) -> f64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = row.get(*feature).copied().unwrap_or(0.0);
                    index = if value <= *threshold { *left } else { *right };
                }
            }
        }
    }
}

/// A fitted forest, serializable as the artifact blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<Tree>,
    importances: Vec<f64>,
    n_features: usize,
}

impl RandomForest {
    /// Fit a forest on row-major features against targets.
    ///
    /// The deadline is checked between tree fits; on expiry the whole fit
    /// aborts and nothing is returned.
    pub fn fit(
        features: &[Vec<f64>],
        targets: &[f64],
        config: &ForestConfig,
        deadline: Option<Instant>,
    ) -> Result<Self, TrainingError> {
        if features.is_empty() || features.len() != targets.len() {
            return Err(TrainingError::Fit {
                reason: format!(
                    "feature/target shape mismatch: {} rows vs {} targets",
                    features.len(),
                    targets.len()
                ),
            });
        }
        let n_features = features[0].len();
        if n_features == 0 || features.iter().any(|row| row.len() != n_features) {
            return Err(TrainingError::Fit {
                reason: "ragged feature rows".to_string(),
            });
        }

        let n = features.len();
        let mut trees = Vec::with_capacity(config.n_estimators);
        let mut raw_importances = vec![0.0; n_features];

        for tree_index in 0..config.n_estimators {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    return Err(TrainingError::DeadlineExceeded);
                }
            }

            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(tree_index as u64));
            let sample: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();

            let mut builder = TreeBuilder {
                features,
                targets,
                config,
                nodes: Vec::new(),
                importances: &mut raw_importances,
            };
            builder.grow(&sample, 0);
            trees.push(Tree {
                nodes: builder.nodes,
            });
        }

        let total: f64 = raw_importances.iter().sum();
        let importances = if total > 0.0 {
            raw_importances.iter().map(|v| v / total).collect()
        } else {
            raw_importances
        };

        Ok(Self {
            trees,
            importances,
            n_features,
        })
    }

    /// Deserialize an artifact blob.
    pub fn from_bytes(blob: &[u8], locator: &str) -> Result<Self, ArtifactError> {
        bincode::deserialize(blob).map_err(|e| ArtifactError::Decode {
            locator: locator.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }
}

impl FittedRegressor for RandomForest {
    fn predict(&self, features: &[f64]) -> f64 {
        if self.trees.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.trees.iter().map(|t| t.predict(features)).sum();
        sum / self.trees.len() as f64
    }

    fn feature_importances(&self) -> Vec<f64> {
        self.importances.clone()
    }

    fn to_bytes(&self) -> PulseResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| {
            ArtifactError::Encode {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

struct TreeBuilder<'a> {
    features: &'a [Vec<f64>],
    targets: &'a [f64],
    config: &'a ForestConfig,
    nodes: Vec<Node>,
    importances: &'a mut Vec<f64>,
}

impl TreeBuilder<'_> {
    /// Grow a subtree over `rows` (indices into the training set) and
    /// return its arena index.
    fn grow(&mut self, rows: &[usize], depth: usize) -> usize {
        let mean = self.mean_target(rows);

        if depth >= self.config.max_depth
            || rows.len() < self.config.min_samples_split
            || self.sse(rows, mean) == 0.0
        {
            return self.push(Node::Leaf { value: mean });
        }

        let Some(split) = self.best_split(rows, mean) else {
            return self.push(Node::Leaf { value: mean });
        };

        self.importances[split.feature] += split.decrease;
        let left = self.grow(&split.left_rows, depth + 1);
        let right = self.grow(&split.right_rows, depth + 1);
        self.push(Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        })
    }

    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn mean_target(&self, rows: &[usize]) -> f64 {
        if rows.is_empty() {
            return 0.0;
        }
        rows.iter().map(|&i| self.targets[i]).sum::<f64>() / rows.len() as f64
    }

    fn sse(&self, rows: &[usize], mean: f64) -> f64 {
        rows.iter()
            .map(|&i| (self.targets[i] - mean).powi(2))
            .sum()
    }

    /// Exhaustive best split over all features and midpoint thresholds,
    /// scored by squared-error decrease.
    fn best_split(&self, rows: &[usize], parent_mean: f64) -> Option<SplitChoice> {
        let parent_sse = self.sse(rows, parent_mean);
        let n_features = self.features[rows[0]].len();
        let mut best: Option<SplitChoice> = None;

        for feature in 0..n_features {
            let mut ordered: Vec<usize> = rows.to_vec();
            ordered.sort_by(|&a, &b| {
                self.features[a][feature].total_cmp(&self.features[b][feature])
            });

            // Prefix sums over the ordered targets let each candidate
            // split be scored in O(1).
            let mut left_sum = 0.0;
            let mut left_sq = 0.0;
            let total_sum: f64 = ordered.iter().map(|&i| self.targets[i]).sum();
            let total_sq: f64 = ordered.iter().map(|&i| self.targets[i].powi(2)).sum();

            for pos in 0..ordered.len() - 1 {
                let i = ordered[pos];
                left_sum += self.targets[i];
                left_sq += self.targets[i].powi(2);

                let here = self.features[i][feature];
                let next = self.features[ordered[pos + 1]][feature];
                if here == next {
                    continue;
                }

                let nl = (pos + 1) as f64;
                let nr = (ordered.len() - pos - 1) as f64;
                let sse_left = left_sq - left_sum * left_sum / nl;
                let sse_right = (total_sq - left_sq) - (total_sum - left_sum).powi(2) / nr;
                let decrease = parent_sse - sse_left - sse_right;

                if decrease > best.as_ref().map_or(0.0, |b| b.decrease) {
                    let threshold = (here + next) / 2.0;
                    best = Some(SplitChoice {
                        feature,
                        threshold,
                        decrease,
                        left_rows: ordered[..=pos].to_vec(),
                        right_rows: ordered[pos + 1..].to_vec(),
                    });
                }
            }
        }

        best
    }
}

struct SplitChoice {
    feature: usize,
    threshold: f64,
    decrease: f64,
    left_rows: Vec<usize>,
    right_rows: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ForestConfig {
        ForestConfig::default()
    }

    fn step_data() -> (Vec<Vec<f64>>, Vec<f64>) {
        // Single feature, step function at x = 5.
        let features: Vec<Vec<f64>> = (0..40).map(|i| vec![f64::from(i % 10)]).collect();
        let targets: Vec<f64> = features
            .iter()
            .map(|x| if x[0] < 5.0 { 3.0 } else { 8.0 })
            .collect();
        (features, targets)
    }

    #[test]
    fn learns_a_step_function() {
        let (features, targets) = step_data();
        let forest = RandomForest::fit(&features, &targets, &config(), None).unwrap();

        assert!((forest.predict(&[2.0]) - 3.0).abs() < 0.5);
        assert!((forest.predict(&[8.0]) - 8.0).abs() < 0.5);
    }

    #[test]
    fn fitting_is_deterministic() {
        let (features, targets) = step_data();
        let a = RandomForest::fit(&features, &targets, &config(), None).unwrap();
        let b = RandomForest::fit(&features, &targets, &config(), None).unwrap();

        assert_eq!(a.to_bytes().unwrap(), b.to_bytes().unwrap());
        assert_eq!(a.predict(&[4.2]), b.predict(&[4.2]));
    }

    #[test]
    fn importances_identify_the_informative_feature() {
        // Feature 1 carries all the signal, feature 0 is constant.
        let features: Vec<Vec<f64>> = (0..60)
            .map(|i| vec![1.0, f64::from(i % 12)])
            .collect();
        let targets: Vec<f64> = features.iter().map(|x| x[1] * 0.5).collect();

        let forest = RandomForest::fit(&features, &targets, &config(), None).unwrap();
        let importances = forest.feature_importances();

        assert_eq!(importances.len(), 2);
        assert_eq!(importances[0], 0.0);
        assert!((importances[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn blob_round_trips() {
        let (features, targets) = step_data();
        let forest = RandomForest::fit(&features, &targets, &config(), None).unwrap();

        let blob = forest.to_bytes().unwrap();
        let restored = RandomForest::from_bytes(&blob, "v1.bin").unwrap();
        assert_eq!(forest.predict(&[7.0]), restored.predict(&[7.0]));
        assert_eq!(restored.n_features(), 1);
    }

    #[test]
    fn expired_deadline_aborts() {
        let (features, targets) = step_data();
        let past = Instant::now() - std::time::Duration::from_secs(1);
        let err = RandomForest::fit(&features, &targets, &config(), Some(past)).unwrap_err();
        assert!(matches!(err, TrainingError::DeadlineExceeded));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let features = vec![vec![1.0, 2.0], vec![1.0]];
        let targets = vec![5.0, 6.0];
        let err = RandomForest::fit(&features, &targets, &config(), None).unwrap_err();
        assert!(matches!(err, TrainingError::Fit { .. }));
    }
}
