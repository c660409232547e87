//! Regressors - Pure functions of the encoded vector
//!
//! Artifacts are exported from the training pipeline as JSON. Each regressor
//! is tagged with `"kind"`:
//!
//! ```json
//! { "kind": "linear", "coefficients": [..9 values..], "intercept": 42.0 }
//! { "kind": "tree_ensemble", "aggregation": "mean", "trees": [ { "children_left": [..], ... } ] }
//! ```
//!
//! Structural problems (wrong coefficient count, dangling child index) are
//! reported when the regressor is invoked, not when it is deserialized.

use ndarray::ArrayView1;
use serde::Deserialize;
use thiserror::Error;

use crate::logic::features::{EncodedVector, FEATURE_COUNT};

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("expected {expected} coefficients, artifact has {found}")]
    FeatureCount { expected: usize, found: usize },

    #[error("tree ensemble has no trees")]
    EmptyEnsemble,

    #[error("tree {tree}: {reason}")]
    MalformedTree { tree: usize, reason: String },

    #[error("model produced a non-finite value ({0})")]
    NonFinite(f64),
}

// ============================================================================
// REGRESSOR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Regressor {
    Linear(LinearModel),
    TreeEnsemble(TreeEnsemble),
}

impl Regressor {
    /// Raw prediction for one encoded row
    pub fn predict(&self, vector: &EncodedVector) -> Result<f64, InferenceError> {
        let raw = match self {
            Regressor::Linear(model) => model.predict(vector)?,
            Regressor::TreeEnsemble(model) => model.predict(vector)?,
        };

        if !raw.is_finite() {
            return Err(InferenceError::NonFinite(raw));
        }
        Ok(raw)
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Regressor::Linear(_) => "linear",
            Regressor::TreeEnsemble(_) => "tree_ensemble",
        }
    }
}

// ============================================================================
// LINEAR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
}

impl LinearModel {
    pub fn predict(&self, vector: &EncodedVector) -> Result<f64, InferenceError> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(InferenceError::FeatureCount {
                expected: FEATURE_COUNT,
                found: self.coefficients.len(),
            });
        }

        let weights = ArrayView1::from(self.coefficients.as_slice());
        let inputs = ArrayView1::from(vector.as_slice());
        Ok(weights.dot(&inputs) + self.intercept)
    }
}

// ============================================================================
// TREE ENSEMBLE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    /// Random forest: average of tree outputs
    #[default]
    Mean,
    /// Gradient boosting: base score + learning_rate * sum
    Sum,
}

fn default_learning_rate() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TreeEnsemble {
    pub trees: Vec<DecisionTree>,
    #[serde(default)]
    pub aggregation: Aggregation,
    #[serde(default)]
    pub base_score: f64,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
}

impl TreeEnsemble {
    pub fn predict(&self, vector: &EncodedVector) -> Result<f64, InferenceError> {
        if self.trees.is_empty() {
            return Err(InferenceError::EmptyEnsemble);
        }

        let mut total = 0.0;
        for (i, tree) in self.trees.iter().enumerate() {
            total += tree
                .predict(vector.as_slice())
                .map_err(|reason| InferenceError::MalformedTree { tree: i, reason })?;
        }

        Ok(match self.aggregation {
            Aggregation::Mean => self.base_score + total / self.trees.len() as f64,
            Aggregation::Sum => self.base_score + self.learning_rate * total,
        })
    }
}

/// Flat node arrays; node 0 is the root, a leaf has `children_left == -1`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<f64>,
}

impl DecisionTree {
    /// Walk from the root; `x[feature] <= threshold` goes left
    pub fn predict(&self, x: &[f64]) -> Result<f64, String> {
        let n = self.children_left.len();
        if n == 0 {
            return Err("no nodes".to_string());
        }
        if [self.children_right.len(), self.feature.len(), self.threshold.len(), self.value.len()]
            .iter()
            .any(|&len| len != n)
        {
            return Err("node arrays differ in length".to_string());
        }

        let mut node = 0usize;
        // A valid path visits each node at most once
        for _ in 0..n {
            let left = self.children_left[node];
            if left < 0 {
                return Ok(self.value[node]);
            }

            let feature = self.feature[node];
            let x_val = usize::try_from(feature)
                .ok()
                .and_then(|f| x.get(f).copied())
                .ok_or_else(|| format!("node {} splits on unknown feature {}", node, feature))?;

            let next = if x_val <= self.threshold[node] {
                left
            } else {
                self.children_right[node]
            };
            node = usize::try_from(next)
                .ok()
                .filter(|&i| i < n)
                .ok_or_else(|| format!("node {} points to missing child {}", node, next))?;
        }

        Err("cycle detected".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vector_with_reps(reps: f64) -> EncodedVector {
        EncodedVector::from_values([0.0, reps, 0.0, 600.0, 1.0, 0.0, 1.0, 0.0, 0.0])
    }

    /// Root splits on total_reps <= 50
    fn stump(low: f64, high: f64) -> DecisionTree {
        DecisionTree {
            children_left: vec![1, -1, -1],
            children_right: vec![2, -1, -1],
            feature: vec![1, -2, -2],
            threshold: vec![50.0, -2.0, -2.0],
            value: vec![0.0, low, high],
        }
    }

    #[test]
    fn test_linear_predict() {
        let mut coefficients = vec![0.0; FEATURE_COUNT];
        coefficients[1] = -0.5;
        let model = Regressor::Linear(LinearModel { coefficients, intercept: 150.0 });

        let out = model.predict(&vector_with_reps(40.0)).unwrap();
        assert!((out - 130.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_wrong_coefficient_count() {
        let model = Regressor::Linear(LinearModel { coefficients: vec![1.0; 4], intercept: 0.0 });
        assert_eq!(
            model.predict(&vector_with_reps(10.0)),
            Err(InferenceError::FeatureCount { expected: FEATURE_COUNT, found: 4 })
        );
    }

    #[test]
    fn test_tree_branches() {
        let tree = stump(135.0, 95.0);
        assert_eq!(tree.predict(vector_with_reps(50.0).as_slice()), Ok(135.0));
        assert_eq!(tree.predict(vector_with_reps(51.0).as_slice()), Ok(95.0));
    }

    #[test]
    fn test_mean_ensemble() {
        let model = Regressor::TreeEnsemble(TreeEnsemble {
            trees: vec![stump(100.0, 80.0), stump(120.0, 60.0)],
            aggregation: Aggregation::Mean,
            base_score: 0.0,
            learning_rate: 1.0,
        });
        assert_eq!(model.predict(&vector_with_reps(10.0)), Ok(110.0));
        assert_eq!(model.predict(&vector_with_reps(90.0)), Ok(70.0));
    }

    #[test]
    fn test_sum_ensemble() {
        let model = TreeEnsemble {
            trees: vec![stump(10.0, -10.0), stump(4.0, -4.0)],
            aggregation: Aggregation::Sum,
            base_score: 100.0,
            learning_rate: 0.5,
        };
        assert_eq!(model.predict(&vector_with_reps(10.0)), Ok(107.0));
    }

    #[test]
    fn test_empty_ensemble_fails() {
        let model = TreeEnsemble {
            trees: vec![],
            aggregation: Aggregation::Mean,
            base_score: 0.0,
            learning_rate: 1.0,
        };
        assert_eq!(model.predict(&vector_with_reps(10.0)), Err(InferenceError::EmptyEnsemble));
    }

    #[test]
    fn test_dangling_child_fails() {
        let mut tree = stump(1.0, 2.0);
        tree.children_right[0] = 7;
        assert!(tree.predict(vector_with_reps(90.0).as_slice()).is_err());
    }

    #[test]
    fn test_unknown_split_feature_fails() {
        let mut tree = stump(1.0, 2.0);
        tree.feature[0] = 12;
        assert!(tree.predict(vector_with_reps(10.0).as_slice()).is_err());
    }

    #[test]
    fn test_cycle_detected() {
        let tree = DecisionTree {
            children_left: vec![1, 0],
            children_right: vec![1, 0],
            feature: vec![0, 0],
            threshold: vec![0.0, 0.0],
            value: vec![0.0, 0.0],
        };
        assert_eq!(tree.predict(&[0.0; FEATURE_COUNT]), Err("cycle detected".to_string()));
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut coefficients = vec![0.0; FEATURE_COUNT];
        coefficients[1] = f64::INFINITY;
        let model = Regressor::Linear(LinearModel { coefficients, intercept: 0.0 });
        assert!(matches!(
            model.predict(&vector_with_reps(10.0)),
            Err(InferenceError::NonFinite(_))
        ));
    }

    #[test]
    fn test_deserialize_tagged() {
        let model: Regressor = serde_json::from_value(json!({
            "kind": "tree_ensemble",
            "trees": [{
                "children_left": [-1],
                "children_right": [-1],
                "feature": [-2],
                "threshold": [-2.0],
                "value": [88.0]
            }]
        }))
        .unwrap();

        assert_eq!(model.kind_name(), "tree_ensemble");
        assert_eq!(model.predict(&vector_with_reps(1.0)), Ok(88.0));
    }

    #[test]
    fn test_deserialize_unknown_kind_fails() {
        let result: Result<Regressor, _> = serde_json::from_value(json!({
            "kind": "neural_net",
            "layers": []
        }));
        assert!(result.is_err());
    }
}
