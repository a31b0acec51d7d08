/*!
Serialization support for transform results.

This module provides serializable snapshots of a [`TransformResult`] for
presentation layers that live outside Rust. It's only built when the
`serde-support` feature is enabled.
*/

use crate::core::trace::{StepRecord, TransformResult};
use serde::{Deserialize, Serialize};

/// Serializable version of a grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdeGridPos {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

/// Serializable version of StepRecord
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdeStepRecord {
    /// Input unit
    pub input: String,
    /// Output unit
    pub output: String,
    /// Short rule/shift descriptor
    pub descriptor: String,
    /// Signed shift, for letter steps
    pub shift: Option<i8>,
    /// `[source1, source2, result1, result2]`, for digraph steps
    pub coordinates: Option<Vec<SerdeGridPos>>,
}

impl From<&StepRecord> for SerdeStepRecord {
    fn from(step: &StepRecord) -> Self {
        Self {
            input: step.input().to_string(),
            output: step.output().to_string(),
            descriptor: step.descriptor(),
            shift: step.signed_shift(),
            coordinates: step.coordinates().map(|coords| {
                coords
                    .iter()
                    .map(|pos| SerdeGridPos {
                        row: pos.row,
                        col: pos.col,
                    })
                    .collect()
            }),
        }
    }
}

/// Serializable version of TransformResult
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdeTransformResult {
    /// Algorithm identifier ("shift", "polyalphabetic", "digraph")
    pub algorithm: String,
    /// "Encrypt" or "Decrypt"
    pub mode: String,
    /// Final text
    pub output: String,
    /// Steps in processing order
    pub steps: Vec<SerdeStepRecord>,
    /// Key square rows, for the digraph cipher
    pub key_square: Option<Vec<String>>,
}

impl From<&TransformResult> for SerdeTransformResult {
    fn from(result: &TransformResult) -> Self {
        Self {
            algorithm: result.algorithm().identifier().to_string(),
            mode: result.mode().name().to_string(),
            output: result.output().to_string(),
            steps: result.steps().iter().map(SerdeStepRecord::from).collect(),
            key_square: result
                .key_square()
                .map(|square| square.rows().iter().map(|row| row.iter().collect()).collect()),
        }
    }
}

/// Serializes a value to JSON
#[cfg(feature = "serde_json")]
pub fn serialize_to_json<T: Serialize>(value: &T) -> crate::Result<String> {
    serde_json::to_string(value)
        .map_err(|e| crate::Error::Internal(format!("JSON serialization error: {}", e)))
}

/// Deserializes a value from JSON
#[cfg(feature = "serde_json")]
pub fn deserialize_from_json<T: for<'de> Deserialize<'de>>(json: &str) -> crate::Result<T> {
    serde_json::from_str(json)
        .map_err(|e| crate::Error::Internal(format!("JSON deserialization error: {}", e)))
}
