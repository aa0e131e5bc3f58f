//! Calculator state document and the form that carries it.
//!
//! The JSON layout follows the calculator's saved-state format:
//!
//! ```text
//! {
//!   "version": 9,
//!   "randomSeed": "<32 hex chars>",
//!   "graph": { "viewport": { "xmin", "ymin", "xmax", "ymax" } },
//!   "expressions": { "list": [ { "type": "expression", "id", "color", "latex", ... } ] }
//! }
//! ```

use region_expr::Expression;
use serde::{Deserialize, Serialize};

use super::GraphHash;

/// Saved-state format version understood by the service
pub const CALC_STATE_VERSION: u32 = 9;

/// Visible region of the graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            xmin: -100.0,
            ymin: -170.88827258320127,
            xmax: 100.0,
            ymax: 170.88827258320127,
        }
    }
}

/// Wire form of a single expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionRecord {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: usize,
    pub color: String,
    pub latex: String,
    pub fill_opacity: &'static str,
    pub line_opacity: &'static str,
    pub line_width: &'static str,
}

impl From<&Expression> for ExpressionRecord {
    fn from(expr: &Expression) -> Self {
        Self {
            kind: "expression",
            id: expr.id,
            color: expr.color.clone(),
            latex: expr.region.clone(),
            fill_opacity: expr.fill_opacity,
            line_opacity: expr.line_opacity,
            line_width: expr.line_width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSettings {
    pub viewport: Viewport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionList {
    pub list: Vec<ExpressionRecord>,
}

/// Complete calculator state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDocument {
    pub version: u32,
    pub random_seed: String,
    pub graph: GraphSettings,
    pub expressions: ExpressionList,
}

impl GraphDocument {
    /// Build a document with a fresh random seed
    pub fn new(expressions: &[Expression], viewport: Viewport) -> Self {
        Self::with_seed(expressions, viewport, random_seed())
    }

    /// Build a document with a fixed seed (reproducible output)
    pub fn with_seed(expressions: &[Expression], viewport: Viewport, seed: String) -> Self {
        Self {
            version: CALC_STATE_VERSION,
            random_seed: seed,
            graph: GraphSettings { viewport },
            expressions: ExpressionList {
                list: expressions.iter().map(ExpressionRecord::from).collect(),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.expressions.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.list.is_empty()
    }

    /// Serialize to the compact JSON string posted as `calc_state`
    pub fn to_calc_state(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// 16 random bytes as 32 lowercase hex characters
pub fn random_seed() -> String {
    use rand::Rng;
    let bytes: [u8; 16] = rand::thread_rng().gen();
    hex::encode(bytes)
}

/// Form body of a save request
#[derive(Debug, Clone, Serialize)]
pub struct SaveRequest {
    pub thumb_data: String,
    pub calc_state: String,
    pub graph_hash: GraphHash,
    pub is_update: &'static str,
    pub lang: String,
    pub my_graphs: &'static str,
}

impl SaveRequest {
    pub fn new(
        document: &GraphDocument,
        graph_hash: GraphHash,
        thumb_data: String,
        lang: impl Into<String>,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            thumb_data,
            calc_state: document.to_calc_state()?,
            graph_hash,
            is_update: "false",
            lang: lang.into(),
            my_graphs: "false",
        })
    }

    /// Unencoded size of all keys and values, for logging
    pub fn payload_bytes(&self) -> usize {
        [
            ("thumb_data", self.thumb_data.as_str()),
            ("calc_state", self.calc_state.as_str()),
            ("graph_hash", self.graph_hash.as_str()),
            ("is_update", self.is_update),
            ("lang", self.lang.as_str()),
            ("my_graphs", self.my_graphs),
        ]
        .iter()
        .map(|(k, v)| k.len() + v.len())
        .sum()
    }
}
