//! Decision tree node representation
//!
//! Nodes are stored flat, in the order the exporter walked the tree. The
//! root is node 0 and every child index points strictly forward, which
//! keeps traversal loop-free without a visited set.
//!
//! ```json
//! { "kind": "split", "feature": 2, "threshold": 35.4, "left": 1, "right": 2 }
//! { "kind": "leaf", "value": [0.0, 3.0, 41.0, 6.0] }
//! ```

use serde::{Deserialize, Serialize};

/// One node of a trained decision tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Internal node with split condition
    Split {
        /// Feature slot to test
        feature: usize,
        /// Values `<= threshold` go left
        threshold: f32,
        /// Left child index
        left: usize,
        /// Right child index
        right: usize,
    },
    /// Terminal node holding per-class weights
    Leaf {
        /// Class weights (counts or fractions), one per class
        value: Vec<f32>,
    },
}

impl TreeNode {
    /// Create a split node
    pub fn split(feature: usize, threshold: f32, left: usize, right: usize) -> Self {
        TreeNode::Split { feature, threshold, left, right }
    }

    /// Create a leaf node
    pub fn leaf(value: impl Into<Vec<f32>>) -> Self {
        TreeNode::Leaf { value: value.into() }
    }

    /// Check if node is a leaf
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape() {
        let split: TreeNode = serde_json::from_str(
            r#"{"kind":"split","feature":2,"threshold":35.4,"left":1,"right":2}"#,
        )
        .unwrap();
        assert_eq!(split, TreeNode::split(2, 35.4, 1, 2));

        let leaf: TreeNode = serde_json::from_str(r#"{"kind":"leaf","value":[1.0,0.0]}"#).unwrap();
        assert!(leaf.is_leaf());
    }
}
