//! Loader and evaluator for the pretrained random-forest artifact.
//!
//! The artifact is a JSON export of a scikit-learn forest: one set of parallel
//! node arrays per tree. It is read once at startup and never modified.
//!
//! The file must be named [`MODEL_FILENAME`] and sit next to the executable.
//! Nothing in this crate trains or exports it. Expected layout:
//!
//! ```json
//! {
//!   "schema_version": 1,
//!   "feature_names": ["MedInc", "HouseAge", "AveRooms", "AveBedrms",
//!                     "Population", "AveOccup", "Latitude", "Longitude"],
//!   "trees": [
//!     {
//!       "children_left":  [1, -1, -1],
//!       "children_right": [2, -1, -1],
//!       "feature":        [0, -2, -2],
//!       "threshold":      [3.0, -2.0, -2.0],
//!       "value":          [2.1, 1.2, 3.4]
//!     }
//!   ]
//! }
//! ```
//!
//! Each tree is the `tree_` of one `RandomForestRegressor` estimator:
//! `children_left`, `children_right`, `feature` and `threshold` are copied as
//! is and `value` is `tree_.value[:, 0, 0]`. Targets are median house values in
//! units of 100,000. Thresholds must be written with full `f64` precision
//! (`json.dump` does this by default).

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{OrderedFeatures, Regressor, RegressorError, FEATURE_COUNT, FEATURE_SCHEMA};

pub const MODEL_FILENAME: &str = "california_housing_model.json";

/// Marker used by scikit-learn for "no child".
const TREE_LEAF: i64 = -1;

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("cannot resolve installation directory: {0}")]
    InstallDir(io::Error),
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode model artifact: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("model expects columns {found:?}, application provides {expected:?} (schema v{version})")]
    SchemaMismatch {
        expected: Vec<&'static str>,
        found: Vec<String>,
        version: u32,
    },
    #[error("model artifact contains no trees")]
    Empty,
    #[error("tree {tree} is malformed: {reason}")]
    MalformedTree { tree: usize, reason: String },
}

/// Resolves the artifact next to the running executable.
pub fn default_model_path() -> Result<PathBuf, ModelLoadError> {
    let exe = std::env::current_exe().map_err(ModelLoadError::InstallDir)?;
    let dir = exe.parent().ok_or_else(|| {
        ModelLoadError::InstallDir(io::Error::new(
            io::ErrorKind::NotFound,
            "executable has no parent directory",
        ))
    })?;
    Ok(dir.join(MODEL_FILENAME))
}

#[derive(Debug, Deserialize)]
struct ForestArtifact {
    schema_version: u32,
    feature_names: Vec<String>,
    trees: Vec<TreeArtifact>,
}

#[derive(Debug, Deserialize)]
struct TreeArtifact {
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    feature: Vec<i64>,
    threshold: Vec<f64>,
    value: Vec<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf(f64),
}

#[derive(Clone, Debug, PartialEq)]
struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    fn from_artifact(index: usize, tree: TreeArtifact) -> Result<Self, ModelLoadError> {
        let malformed = |reason: String| ModelLoadError::MalformedTree {
            tree: index,
            reason,
        };

        let len = tree.value.len();
        if len == 0 {
            return Err(malformed("no nodes".to_string()));
        }
        if [
            tree.children_left.len(),
            tree.children_right.len(),
            tree.feature.len(),
            tree.threshold.len(),
        ]
        .iter()
        .any(|other| *other != len)
        {
            return Err(malformed("node arrays differ in length".to_string()));
        }

        let mut nodes = Vec::with_capacity(len);
        for node in 0..len {
            let (left, right) = (tree.children_left[node], tree.children_right[node]);
            if left == TREE_LEAF && right == TREE_LEAF {
                nodes.push(Node::Leaf(tree.value[node]));
                continue;
            }

            // Children always come after their parent, which also rules out cycles.
            let child = |raw: i64| -> Result<usize, ModelLoadError> {
                usize::try_from(raw)
                    .ok()
                    .filter(|idx| *idx > node && *idx < len)
                    .ok_or_else(|| malformed(format!("node {node} has invalid child {raw}")))
            };
            let feature = usize::try_from(tree.feature[node])
                .ok()
                .filter(|idx| *idx < FEATURE_COUNT)
                .ok_or_else(|| {
                    malformed(format!(
                        "node {node} splits on unknown feature {}",
                        tree.feature[node]
                    ))
                })?;

            nodes.push(Node::Split {
                feature,
                threshold: tree.threshold[node],
                left: child(left)?,
                right: child(right)?,
            });
        }

        Ok(Self { nodes })
    }

    fn evaluate(&self, row: &[f64]) -> Result<f64, RegressorError> {
        let mut idx = 0;
        loop {
            match self.nodes.get(idx) {
                Some(Node::Leaf(value)) => return Ok(*value),
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = row.get(*feature).copied().ok_or_else(|| {
                        RegressorError::Evaluation(format!(
                            "row has {} columns, split needs column {feature}",
                            row.len()
                        ))
                    })?;
                    idx = if x <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(RegressorError::Evaluation(format!(
                        "node {idx} is out of range"
                    )))
                }
            }
        }
    }
}

/// Random-forest regressor: mean of the leaf values reached in every tree.
#[derive(Clone, Debug, PartialEq)]
pub struct ForestModel {
    trees: Vec<DecisionTree>,
}

impl ForestModel {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_json(&content)?;
        info!(
            "Loaded forest with {} trees from {}",
            model.tree_count(),
            path.display()
        );
        Ok(model)
    }

    pub fn from_json(content: &str) -> Result<Self, ModelLoadError> {
        let artifact: ForestArtifact = serde_json::from_str(content)?;

        if artifact.schema_version != FEATURE_SCHEMA.version
            || !FEATURE_SCHEMA.matches(&artifact.feature_names)
        {
            return Err(ModelLoadError::SchemaMismatch {
                expected: FEATURE_SCHEMA.names().collect(),
                found: artifact.feature_names,
                version: artifact.schema_version,
            });
        }
        if artifact.trees.is_empty() {
            return Err(ModelLoadError::Empty);
        }

        let trees = artifact
            .trees
            .into_iter()
            .enumerate()
            .map(|(idx, tree)| DecisionTree::from_artifact(idx, tree))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { trees })
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl Regressor for ForestModel {
    fn predict(&self, features: &OrderedFeatures) -> Result<f64, RegressorError> {
        let row = features.as_slice();
        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.evaluate(row)?;
        }
        Ok(total / self.trees.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;
    use crate::domain::features::build;

    fn names() -> Vec<&'static str> {
        FEATURE_SCHEMA.names().collect()
    }

    /// Splits on MedInc (column 0) at 3.0.
    fn income_stump(low: f64, high: f64) -> serde_json::Value {
        json!({
            "children_left": [1, -1, -1],
            "children_right": [2, -1, -1],
            "feature": [0, -2, -2],
            "threshold": [3.0, -2.0, -2.0],
            "value": [0.0, low, high]
        })
    }

    /// Splits on Latitude (column 6) at 36.0.
    fn latitude_stump(south: f64, north: f64) -> serde_json::Value {
        json!({
            "children_left": [1, -1, -1],
            "children_right": [2, -1, -1],
            "feature": [6, -2, -2],
            "threshold": [36.0, -2.0, -2.0],
            "value": [0.0, south, north]
        })
    }

    fn artifact(trees: Vec<serde_json::Value>) -> String {
        json!({
            "schema_version": 1,
            "feature_names": names(),
            "trees": trees
        })
        .to_string()
    }

    #[test]
    fn averages_leaf_values_across_trees() {
        let model =
            ForestModel::from_json(&artifact(vec![income_stump(1.0, 3.0), latitude_stump(2.0, 4.0)]))
                .unwrap();
        assert_eq!(model.tree_count(), 2);

        let south_rich = build(4.5, 15.0, 5.0, 1.0, 1200.0, 3.0, 34.05, -118.24);
        assert_eq!(model.predict(&south_rich).unwrap(), 2.5);

        let north_poor = build(2.0, 15.0, 5.0, 1.0, 1200.0, 3.0, 38.5, -121.5);
        assert_eq!(model.predict(&north_poor).unwrap(), 2.5);

        let north_rich = build(3.5, 15.0, 5.0, 1.0, 1200.0, 3.0, 38.5, -121.5);
        assert_eq!(model.predict(&north_rich).unwrap(), 3.5);
    }

    #[test]
    fn threshold_itself_goes_left() {
        let model = ForestModel::from_json(&artifact(vec![income_stump(1.0, 3.0)])).unwrap();
        let at_threshold = build(3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 34.0, -118.0);
        assert_eq!(model.predict(&at_threshold).unwrap(), 1.0);
    }

    #[test]
    fn documented_layout_loads() {
        let content = r#"{
          "schema_version": 1,
          "feature_names": ["MedInc", "HouseAge", "AveRooms", "AveBedrms",
                            "Population", "AveOccup", "Latitude", "Longitude"],
          "trees": [
            {
              "children_left":  [1, -1, -1],
              "children_right": [2, -1, -1],
              "feature":        [0, -2, -2],
              "threshold":      [3.0, -2.0, -2.0],
              "value":          [2.1, 1.2, 3.4]
            }
          ]
        }"#;
        let model = ForestModel::from_json(content).unwrap();
        let rich = build(4.5, 15.0, 5.0, 1.0, 1200.0, 3.0, 34.05, -118.24);
        assert_eq!(model.predict(&rich).unwrap(), 3.4);
    }

    #[test]
    fn non_terminating_threshold_is_read_exactly() {
        let threshold = 880.0 / 126.0;
        let tree = json!({
            "children_left": [1, -1, -1],
            "children_right": [2, -1, -1],
            "feature": [0, -2, -2],
            "threshold": [threshold, -2.0, -2.0],
            "value": [0.0, 1.0, 3.0]
        });
        let model = ForestModel::from_json(&artifact(vec![tree])).unwrap();

        let on_split = build(threshold, 15.0, 5.0, 1.0, 1200.0, 3.0, 34.0, -118.0);
        assert_eq!(model.predict(&on_split).unwrap(), 1.0);

        let above = build(
            f64::from_bits(threshold.to_bits() + 1),
            15.0,
            5.0,
            1.0,
            1200.0,
            3.0,
            34.0,
            -118.0,
        );
        assert_eq!(model.predict(&above).unwrap(), 3.0);
    }

    #[test]
    fn rejects_reordered_feature_names() {
        let mut reordered = names();
        reordered.swap(6, 7);
        let content = json!({
            "schema_version": 1,
            "feature_names": reordered,
            "trees": [income_stump(1.0, 2.0)]
        })
        .to_string();
        assert!(matches!(
            ForestModel::from_json(&content),
            Err(ModelLoadError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn rejects_other_schema_versions() {
        let content = json!({
            "schema_version": 2,
            "feature_names": names(),
            "trees": [income_stump(1.0, 2.0)]
        })
        .to_string();
        assert!(matches!(
            ForestModel::from_json(&content),
            Err(ModelLoadError::SchemaMismatch { version: 2, .. })
        ));
    }

    #[test]
    fn rejects_empty_forest() {
        assert!(matches!(
            ForestModel::from_json(&artifact(vec![])),
            Err(ModelLoadError::Empty)
        ));
    }

    #[test]
    fn rejects_structural_defects() {
        let cycle = json!({
            "children_left": [0, -1],
            "children_right": [1, -1],
            "feature": [0, -2],
            "threshold": [1.0, -2.0],
            "value": [0.0, 1.0]
        });
        let short = json!({
            "children_left": [-1],
            "children_right": [-1],
            "feature": [],
            "threshold": [-2.0],
            "value": [1.0]
        });
        let unknown_feature = json!({
            "children_left": [1, -1, -1],
            "children_right": [2, -1, -1],
            "feature": [8, -2, -2],
            "threshold": [1.0, -2.0, -2.0],
            "value": [0.0, 1.0, 2.0]
        });
        for tree in [cycle, short, unknown_feature] {
            assert!(matches!(
                ForestModel::from_json(&artifact(vec![tree])),
                Err(ModelLoadError::MalformedTree { tree: 0, .. })
            ));
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            ForestModel::from_json("not json"),
            Err(ModelLoadError::Decode(_))
        ));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(artifact(vec![income_stump(1.0, 3.0)]).as_bytes())
            .unwrap();
        let model = ForestModel::load(file.path()).unwrap();
        assert_eq!(model.tree_count(), 1);
    }

    #[test]
    fn missing_artifact_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(MODEL_FILENAME);
        assert!(matches!(
            ForestModel::load(&missing),
            Err(ModelLoadError::Io { .. })
        ));
    }
}
