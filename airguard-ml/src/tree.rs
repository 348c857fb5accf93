//! Decision tree inference
//!
//! A tree is validated once, when it is built, so that traversal can index
//! nodes directly: every split feature is inside the feature count, every
//! child index points forward and inside the tree, and every leaf carries
//! one non-negative weight per class with a positive total.

use serde::{Deserialize, Serialize};

use crate::{ArtifactError, ArtifactResult, TreeNode};

/// Unchecked wire form of a tree
#[derive(Debug, Deserialize)]
pub(crate) struct RawTree {
    pub(crate) nodes: Vec<TreeNode>,
}

/// Trained binary decision tree
///
/// Deserializing a bare tree checks its structure but not the ensemble
/// shape; [`ForestClassifier`](crate::ForestClassifier) checks both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTree")]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl TryFrom<RawTree> for DecisionTree {
    type Error = ArtifactError;

    fn try_from(raw: RawTree) -> ArtifactResult<Self> {
        let tree = Self { nodes: raw.nodes };
        tree.check(None, None)?;
        Ok(tree)
    }
}

impl DecisionTree {
    /// Build a tree from flat nodes, validating its structure
    pub fn new(nodes: Vec<TreeNode>, feature_count: usize, class_count: usize) -> ArtifactResult<Self> {
        let tree = Self { nodes };
        tree.validate(feature_count, class_count)?;
        Ok(tree)
    }

    /// Check structure against the ensemble's declared shape
    pub(crate) fn validate(&self, feature_count: usize, class_count: usize) -> ArtifactResult<()> {
        self.check(Some(feature_count), Some(class_count))
    }

    /// Without a declared class count, leaves must agree with the first one
    fn check(&self, feature_count: Option<usize>, class_count: Option<usize>) -> ArtifactResult<()> {
        if self.nodes.is_empty() {
            return Err(ArtifactError::invalid("tree has no nodes"));
        }

        let len = self.nodes.len();
        let mut class_count = class_count;
        for (index, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split { feature, threshold, left, right } => {
                    if let Some(feature_count) = feature_count {
                        if *feature >= feature_count {
                            return Err(ArtifactError::invalid(format!(
                                "node {index} splits on feature {feature}, model has {feature_count}"
                            )));
                        }
                    }
                    if !threshold.is_finite() {
                        return Err(ArtifactError::invalid(format!(
                            "node {index} has a non-finite threshold"
                        )));
                    }
                    for child in [*left, *right] {
                        if child <= index || child >= len {
                            return Err(ArtifactError::invalid(format!(
                                "node {index} has child {child} outside ({index}, {len})"
                            )));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    let expected = *class_count.get_or_insert(value.len());
                    if value.len() != expected {
                        return Err(ArtifactError::invalid(format!(
                            "leaf {index} has {} weights, model has {expected} classes",
                            value.len()
                        )));
                    }
                    if value.iter().any(|w| !w.is_finite() || *w < 0.0) {
                        return Err(ArtifactError::invalid(format!(
                            "leaf {index} has a negative or non-finite weight"
                        )));
                    }
                    if value.iter().sum::<f32>() <= 0.0 {
                        return Err(ArtifactError::invalid(format!("leaf {index} has zero total weight")));
                    }
                }
            }
        }

        Ok(())
    }

    /// Walk from the root to the leaf for `features`
    ///
    /// Caller guarantees `features` covers every split feature.
    pub(crate) fn leaf(&self, features: &[f32]) -> &[f32] {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                TreeNode::Split { feature, threshold, left, right } => {
                    index = if features[*feature] <= *threshold { *left } else { *right };
                }
                TreeNode::Leaf { value } => return value,
            }
        }
    }

    /// Normalized class distribution at the leaf for `features`
    pub(crate) fn predict_proba(&self, features: &[f32], out: &mut [f32]) {
        let weights = self.leaf(features);
        let total: f32 = weights.iter().sum();
        for (slot, weight) in out.iter_mut().zip(weights) {
            *slot = weight / total;
        }
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes (never true once validated)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Longest root-to-leaf path
    pub fn depth(&self) -> usize {
        let mut depths = vec![0usize; self.nodes.len()];
        let mut deepest = 0;
        for (index, node) in self.nodes.iter().enumerate() {
            deepest = deepest.max(depths[index]);
            if let TreeNode::Split { left, right, .. } = node {
                depths[*left] = depths[index] + 1;
                depths[*right] = depths[index] + 1;
            }
        }
        deepest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// pm25 (slot 0) <= 12 → class 0, else co (slot 1) <= 9 → class 1, else class 2
    fn sample_tree() -> DecisionTree {
        DecisionTree::new(
            vec![
                TreeNode::split(0, 12.0, 1, 2),
                TreeNode::leaf([8.0, 2.0, 0.0]),
                TreeNode::split(1, 9.0, 3, 4),
                TreeNode::leaf([0.0, 5.0, 0.0]),
                TreeNode::leaf([0.0, 1.0, 3.0]),
            ],
            2,
            3,
        )
        .unwrap()
    }

    #[test]
    fn split_is_inclusive_on_the_left() {
        let tree = sample_tree();
        assert_eq!(tree.leaf(&[12.0, 0.0]), &[8.0, 2.0, 0.0]);
        assert_eq!(tree.leaf(&[12.1, 9.0]), &[0.0, 5.0, 0.0]);
        assert_eq!(tree.leaf(&[12.1, 9.1]), &[0.0, 1.0, 3.0]);
    }

    #[test]
    fn proba_is_normalized() {
        let mut out = [0.0; 3];
        sample_tree().predict_proba(&[50.0, 20.0], &mut out);
        assert_eq!(out, [0.0, 0.25, 0.75]);
    }

    #[test]
    fn depth_of_sample_tree() {
        assert_eq!(sample_tree().depth(), 2);
    }

    #[test]
    fn backward_child_is_rejected() {
        let result = DecisionTree::new(
            vec![TreeNode::split(0, 1.0, 1, 0), TreeNode::leaf([1.0])],
            1,
            1,
        );
        assert!(matches!(result, Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn split_feature_out_of_range_is_rejected() {
        let result = DecisionTree::new(
            vec![
                TreeNode::split(5, 1.0, 1, 2),
                TreeNode::leaf([1.0]),
                TreeNode::leaf([1.0]),
            ],
            2,
            1,
        );
        assert!(matches!(result, Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn leaf_width_must_match_class_count() {
        let result = DecisionTree::new(vec![TreeNode::leaf([1.0, 2.0])], 1, 3);
        assert!(matches!(result, Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn deserialized_tree_rejects_dangling_children() {
        let json = r#"{"nodes":[{"kind":"split","feature":0,"threshold":1.0,"left":5,"right":6}]}"#;
        assert!(serde_json::from_str::<DecisionTree>(json).is_err());
    }

    #[test]
    fn deserialized_tree_rejects_uneven_leaves() {
        let json = r#"{"nodes":[
            {"kind":"split","feature":0,"threshold":1.0,"left":1,"right":2},
            {"kind":"leaf","value":[1.0, 0.0]},
            {"kind":"leaf","value":[1.0]}
        ]}"#;
        assert!(serde_json::from_str::<DecisionTree>(json).is_err());
    }

    #[test]
    fn deserialized_tree_matches_built_tree() {
        let json = serde_json::to_string(&sample_tree()).unwrap();
        assert_eq!(serde_json::from_str::<DecisionTree>(&json).unwrap(), sample_tree());
    }

    #[test]
    fn empty_leaf_weight_is_rejected() {
        let result = DecisionTree::new(vec![TreeNode::leaf([0.0, 0.0])], 1, 2);
        assert!(matches!(result, Err(ArtifactError::Invalid(_))));
    }
}
