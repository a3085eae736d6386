//! Wine cultivar domain types
//!
//! The wire schema for inference requests is a flat JSON object with
//! thirteen named physicochemical measurements, every one a strictly
//! positive float. [`WineFeatures`] is that schema; [`TestInput`] is
//! the `{"input_test": {...}}` envelope the dashboard reads from disk.
//!
//! Field order matters: models are trained against rows laid out in
//! [`FEATURE_NAMES`] order, and [`WineFeatures::to_row`] produces
//! exactly that layout.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatadorError, Result};

/// Number of input features the wine schema carries
pub const FEATURE_COUNT: usize = 13;

/// Feature names in model row order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "alcohol",
    "malic_acid",
    "ash",
    "alcalinity_of_ash",
    "magnesium",
    "total_phenols",
    "flavanoids",
    "nonflavanoid_phenols",
    "proanthocyanins",
    "color_intensity",
    "hue",
    "od280_od315",
    "proline",
];

/// Display labels for the three cultivar classes, indexed by class id
pub const CLASS_LABELS: [&str; 3] = ["Class 0", "Class 1", "Class 2"];

/// One wine sample: thirteen named physicochemical measurements
///
/// Deserialization rejects missing fields and non-numeric values
/// outright; positivity is checked separately by [`validate`] so the
/// offending field can be named in the error.
///
/// [`validate`]: WineFeatures::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WineFeatures {
    /// Alcohol content (% vol)
    pub alcohol: f64,
    /// Malic acid (g/l)
    pub malic_acid: f64,
    /// Ash (g/l)
    pub ash: f64,
    /// Alcalinity of ash
    pub alcalinity_of_ash: f64,
    /// Magnesium (mg/l)
    pub magnesium: f64,
    /// Total phenols
    pub total_phenols: f64,
    /// Flavanoids
    pub flavanoids: f64,
    /// Nonflavanoid phenols
    pub nonflavanoid_phenols: f64,
    /// Proanthocyanins
    pub proanthocyanins: f64,
    /// Color intensity
    pub color_intensity: f64,
    /// Hue
    pub hue: f64,
    /// OD280/OD315 of diluted wines
    pub od280_od315: f64,
    /// Proline (mg/l)
    pub proline: f64,
}

impl WineFeatures {
    /// Name/value pairs in model row order
    pub fn fields(&self) -> [(&'static str, f64); FEATURE_COUNT] {
        [
            ("alcohol", self.alcohol),
            ("malic_acid", self.malic_acid),
            ("ash", self.ash),
            ("alcalinity_of_ash", self.alcalinity_of_ash),
            ("magnesium", self.magnesium),
            ("total_phenols", self.total_phenols),
            ("flavanoids", self.flavanoids),
            ("nonflavanoid_phenols", self.nonflavanoid_phenols),
            ("proanthocyanins", self.proanthocyanins),
            ("color_intensity", self.color_intensity),
            ("hue", self.hue),
            ("od280_od315", self.od280_od315),
            ("proline", self.proline),
        ]
    }

    /// Check that every measurement is a strictly positive, finite number
    ///
    /// Returns the name of the first offending field in row order.
    /// NaN and infinities fail the check: they survive JSON parsing
    /// only via non-standard encodings but can arrive through direct
    /// construction.
    pub fn validate(&self) -> std::result::Result<(), &'static str> {
        for (name, value) in self.fields() {
            if !(value.is_finite() && value > 0.0) {
                return Err(name);
            }
        }
        Ok(())
    }

    /// Flatten to a feature row in model order
    pub fn to_row(&self) -> Vec<f64> {
        self.fields().map(|(_, value)| value).to_vec()
    }

    /// Build from a feature row in model order
    pub fn from_row(row: [f64; FEATURE_COUNT]) -> Self {
        Self {
            alcohol: row[0],
            malic_acid: row[1],
            ash: row[2],
            alcalinity_of_ash: row[3],
            magnesium: row[4],
            total_phenols: row[5],
            flavanoids: row[6],
            nonflavanoid_phenols: row[7],
            proanthocyanins: row[8],
            color_intensity: row[9],
            hue: row[10],
            od280_od315: row[11],
            proline: row[12],
        }
    }
}

/// On-disk envelope for a prepared test sample: `{"input_test": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestInput {
    /// The sample to submit for prediction
    pub input_test: WineFeatures,
}

impl TestInput {
    /// Load and parse a test input file
    ///
    /// Any failure (missing file, bad JSON, wrong schema) maps to
    /// [`CatadorError::InputFile`] naming the path, so callers can
    /// show one message and keep running.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CatadorError::InputFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| CatadorError::InputFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
