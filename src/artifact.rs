//! .ctd model artifact container
//!
//! A `.ctd` file is a 32-byte header followed by a JSON payload:
//!
//! ```text
//! Offset  Size  Field
//! 0       4     Magic: "CTD\0"
//! 4       1     Format version major
//! 5       1     Format version minor
//! 6       2     Flags (u16 LE, reserved, must be zero)
//! 8       2     Model type (u16 LE)
//! 10      4     Payload length (u32 LE)
//! 14      18    Reserved (zero)
//! 32      N     JSON payload
//! ```
//!
//! The only model type currently defined is the decision-tree
//! ensemble ([`MODEL_TYPE_TREE_ENSEMBLE`]). The payload is the
//! serde model: dimensions, feature names, optional importances,
//! and the trees as flat node arenas.
//!
//! Loading validates everything up front ([`WineModel::validate`]),
//! so a model that deserializes is safe to walk without per-node
//! bounds surprises at inference time.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatadorError, Result};

/// Default artifact location, relative to the server working directory
pub const DEFAULT_ARTIFACT_PATH: &str = "model/wine_model.ctd";

/// Magic bytes identifying a .ctd artifact
pub const MAGIC: [u8; 4] = *b"CTD\0";

/// Fixed header size in bytes
pub const HEADER_SIZE: usize = 32;

/// Container format version written by this crate (major, minor)
pub const FORMAT_VERSION: (u8, u8) = (1, 0);

/// Model type tag for decision-tree ensembles
pub const MODEL_TYPE_TREE_ENSEMBLE: u16 = 0x0001;

/// Parsed .ctd header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactHeader {
    /// Format version (major, minor)
    pub version: (u8, u8),
    /// Reserved flags, currently always zero
    pub flags: u16,
    /// Model type tag
    pub model_type: u16,
    /// JSON payload length in bytes
    pub payload_len: u32,
}

impl ArtifactHeader {
    /// Parse and check the fixed 32-byte header
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(CatadorError::Format {
                reason: format!(
                    "artifact too small: {} bytes, header needs {HEADER_SIZE}",
                    bytes.len()
                ),
            });
        }
        if bytes[0..4] != MAGIC {
            return Err(CatadorError::Format {
                reason: format!(
                    "bad magic: expected {MAGIC:?} (\"CTD\\0\"), found {:?}",
                    &bytes[0..4]
                ),
            });
        }
        let version = (bytes[4], bytes[5]);
        if version.0 != FORMAT_VERSION.0 {
            return Err(CatadorError::Format {
                reason: format!(
                    "unsupported format version {}.{}, this build reads {}.x",
                    version.0, version.1, FORMAT_VERSION.0
                ),
            });
        }
        let flags = u16::from_le_bytes([bytes[6], bytes[7]]);
        let model_type = u16::from_le_bytes([bytes[8], bytes[9]]);
        let payload_len = u32::from_le_bytes([bytes[10], bytes[11], bytes[12], bytes[13]]);
        Ok(Self {
            version,
            flags,
            model_type,
            payload_len,
        })
    }

    /// Encode the fixed 32-byte header
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&MAGIC);
        bytes[4] = self.version.0;
        bytes[5] = self.version.1;
        bytes[6..8].copy_from_slice(&self.flags.to_le_bytes());
        bytes[8..10].copy_from_slice(&self.model_type.to_le_bytes());
        bytes[10..14].copy_from_slice(&self.payload_len.to_le_bytes());
        bytes
    }
}

/// One node of a decision tree stored in a flat arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Interior split: row[feature] <= threshold goes left, else right
    Split {
        /// Feature column index
        feature: usize,
        /// Split threshold
        threshold: f64,
        /// Arena index of the left child
        left: usize,
        /// Arena index of the right child
        right: usize,
    },
    /// Terminal node voting for one class
    Leaf {
        /// Class id this leaf votes for
        class: u32,
    },
}

/// A decision tree as a flat node arena, root at index 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Node arena; `Split` children refer to indices in this vec
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk the tree for one feature row and return the leaf class
    ///
    /// The walk is capped at `nodes.len()` steps so a cyclic arena
    /// (possible only in a hand-corrupted payload that still passed
    /// index checks) terminates with an error instead of spinning.
    fn decide(&self, row: &[f64]) -> Result<u32> {
        let mut index = 0usize;
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { class }) => return Ok(*class),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value =
                        *row.get(*feature)
                            .ok_or_else(|| CatadorError::InvalidModel {
                                reason: format!("split references feature {feature} beyond row"),
                            })?;
                    index = if value <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(CatadorError::InvalidModel {
                        reason: format!("node index {index} out of arena bounds"),
                    })
                }
            }
        }
        Err(CatadorError::InvalidModel {
            reason: "tree walk exceeded node count, arena has a cycle".to_string(),
        })
    }
}

/// Anything that can classify feature rows into class ids
pub trait Classifier {
    /// Predict one class id per input row
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<u32>>;
}

/// Tree-ensemble wine classifier, the payload of a .ctd artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WineModel {
    /// Input width every row must match
    pub n_features: usize,
    /// Number of classes; leaf votes are below this
    pub n_classes: u32,
    /// Feature names in row order
    pub feature_names: Vec<String>,
    /// Per-feature importances, if the trainer exported them
    #[serde(default)]
    pub importances: Option<Vec<f64>>,
    /// The ensemble; prediction is a majority vote over these
    pub trees: Vec<DecisionTree>,
}

impl WineModel {
    /// Read and decode an artifact from disk
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| CatadorError::ArtifactRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    /// Encode and write the artifact, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| {
                    CatadorError::ArtifactWrite {
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
            }
        }
        std::fs::write(path, bytes).map_err(|source| CatadorError::ArtifactWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Decode a .ctd artifact from bytes, validating the model
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let header = ArtifactHeader::from_bytes(bytes)?;
        if header.model_type != MODEL_TYPE_TREE_ENSEMBLE {
            return Err(CatadorError::Format {
                reason: format!("unknown model type 0x{:04x}", header.model_type),
            });
        }
        let payload_len = header.payload_len as usize;
        let end = HEADER_SIZE
            .checked_add(payload_len)
            .ok_or_else(|| CatadorError::Format {
                reason: "payload length overflows".to_string(),
            })?;
        if bytes.len() < end {
            return Err(CatadorError::Format {
                reason: format!(
                    "truncated payload: header declares {payload_len} bytes, {} available",
                    bytes.len() - HEADER_SIZE
                ),
            });
        }
        let model: Self =
            serde_json::from_slice(&bytes[HEADER_SIZE..end]).map_err(|e| CatadorError::Format {
                reason: format!("payload is not a valid model: {e}"),
            })?;
        model.validate()?;
        Ok(model)
    }

    /// Encode to .ctd bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.validate()?;
        let payload = serde_json::to_vec(self).map_err(|e| CatadorError::Format {
            reason: format!("cannot serialize model payload: {e}"),
        })?;
        let payload_len = u32::try_from(payload.len()).map_err(|_| CatadorError::Format {
            reason: format!("payload of {} bytes exceeds u32 length field", payload.len()),
        })?;
        let header = ArtifactHeader {
            version: FORMAT_VERSION,
            flags: 0,
            model_type: MODEL_TYPE_TREE_ENSEMBLE,
            payload_len,
        };
        let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());
        bytes.extend_from_slice(&header.to_bytes());
        bytes.extend_from_slice(&payload);
        Ok(bytes)
    }

    /// Structural checks: dimensions agree, every index is in bounds
    pub fn validate(&self) -> Result<()> {
        if self.n_features == 0 {
            return Err(CatadorError::InvalidModel {
                reason: "n_features is zero".to_string(),
            });
        }
        if self.n_classes == 0 {
            return Err(CatadorError::InvalidModel {
                reason: "n_classes is zero".to_string(),
            });
        }
        if self.feature_names.len() != self.n_features {
            return Err(CatadorError::InvalidModel {
                reason: format!(
                    "{} feature names for {} features",
                    self.feature_names.len(),
                    self.n_features
                ),
            });
        }
        if self.trees.is_empty() {
            return Err(CatadorError::InvalidModel {
                reason: "ensemble has no trees".to_string(),
            });
        }
        if let Some(importances) = &self.importances {
            if importances.len() != self.n_features {
                return Err(CatadorError::InvalidModel {
                    reason: format!(
                        "{} importances for {} features",
                        importances.len(),
                        self.n_features
                    ),
                });
            }
            if importances.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(CatadorError::InvalidModel {
                    reason: "importances must be finite and non-negative".to_string(),
                });
            }
        }
        for (tree_index, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(CatadorError::InvalidModel {
                    reason: format!("tree {tree_index} has no nodes"),
                });
            }
            for (node_index, node) in tree.nodes.iter().enumerate() {
                match node {
                    TreeNode::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    } => {
                        if *feature >= self.n_features {
                            return Err(CatadorError::InvalidModel {
                                reason: format!(
                                    "tree {tree_index} node {node_index} splits on feature {feature}, model has {}",
                                    self.n_features
                                ),
                            });
                        }
                        if !threshold.is_finite() {
                            return Err(CatadorError::InvalidModel {
                                reason: format!(
                                    "tree {tree_index} node {node_index} has non-finite threshold"
                                ),
                            });
                        }
                        if *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                            return Err(CatadorError::InvalidModel {
                                reason: format!(
                                    "tree {tree_index} node {node_index} child index out of bounds"
                                ),
                            });
                        }
                    }
                    TreeNode::Leaf { class } => {
                        if *class >= self.n_classes {
                            return Err(CatadorError::InvalidModel {
                                reason: format!(
                                    "tree {tree_index} node {node_index} votes for class {class}, model has {}",
                                    self.n_classes
                                ),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Per-feature importances, if the artifact carries them
    pub fn feature_importances(&self) -> Option<&[f64]> {
        self.importances.as_deref()
    }

    /// Built-in demonstration ensemble over the wine schema
    ///
    /// Three hand-sized trees splitting on proline, flavanoids, color
    /// intensity, hue, and OD280/OD315. Useful for serving without a
    /// trained artifact and as a deterministic test fixture.
    pub fn demo() -> Self {
        use TreeNode::{Leaf, Split};
        let tree_a = DecisionTree {
            nodes: vec![
                Split {
                    feature: 12, // proline
                    threshold: 755.0,
                    left: 1,
                    right: 2,
                },
                Split {
                    feature: 11, // od280_od315
                    threshold: 2.115,
                    left: 3,
                    right: 4,
                },
                Split {
                    feature: 6, // flavanoids
                    threshold: 2.165,
                    left: 5,
                    right: 6,
                },
                Leaf { class: 2 },
                Leaf { class: 1 },
                Leaf { class: 2 },
                Leaf { class: 0 },
            ],
        };
        let tree_b = DecisionTree {
            nodes: vec![
                Split {
                    feature: 9, // color_intensity
                    threshold: 3.82,
                    left: 1,
                    right: 2,
                },
                Leaf { class: 1 },
                Split {
                    feature: 6, // flavanoids
                    threshold: 1.58,
                    left: 3,
                    right: 4,
                },
                Leaf { class: 2 },
                Leaf { class: 0 },
            ],
        };
        let tree_c = DecisionTree {
            nodes: vec![
                Split {
                    feature: 10, // hue
                    threshold: 0.785,
                    left: 1,
                    right: 2,
                },
                Leaf { class: 2 },
                Split {
                    feature: 12, // proline
                    threshold: 755.0,
                    left: 3,
                    right: 4,
                },
                Leaf { class: 1 },
                Leaf { class: 0 },
            ],
        };
        Self {
            n_features: crate::wine::FEATURE_COUNT,
            n_classes: 3,
            feature_names: crate::wine::FEATURE_NAMES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            importances: Some(vec![
                0.05,  // alcohol
                0.02,  // malic_acid
                0.005, // ash
                0.01,  // alcalinity_of_ash
                0.01,  // magnesium
                0.03,  // total_phenols
                0.21,  // flavanoids
                0.005, // nonflavanoid_phenols
                0.01,  // proanthocyanins
                0.15,  // color_intensity
                0.10,  // hue
                0.12,  // od280_od315
                0.28,  // proline
            ]),
            trees: vec![tree_a, tree_b, tree_c],
        }
    }
}

impl Classifier for WineModel {
    /// Majority vote over the ensemble; ties go to the lowest class id
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<u32>> {
        let mut predictions = Vec::with_capacity(rows.len());
        for row in rows {
            if row.len() != self.n_features {
                return Err(CatadorError::ShapeMismatch {
                    expected: self.n_features,
                    actual: row.len(),
                });
            }
            let mut votes = vec![0usize; self.n_classes as usize];
            for tree in &self.trees {
                let class = tree.decide(row)?;
                votes[class as usize] += 1;
            }
            // strict > keeps the lowest class id on tied votes
            let mut winner = 0u32;
            let mut best = 0usize;
            for (class, count) in votes.iter().enumerate() {
                if *count > best {
                    best = *count;
                    winner = class as u32;
                }
            }
            predictions.push(winner);
        }
        Ok(predictions)
    }
}
