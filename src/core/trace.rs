/*!
Step traces produced by every transform.

A transform returns a [`TransformResult`] that bundles the final string with
the ordered [`StepTrace`] of per-unit substitutions. For the digraph cipher
it also carries the key square, and each step carries the grid coordinates
involved, so a consumer can highlight exact cells while replaying.

Traces are call-scoped: each call builds its own and hands it to the caller.
*/

use std::fmt;
use std::ops::Index;

use crate::core::crypto::algorithms::digraph::KeySquare;
use crate::core::crypto::types::{CipherAlgorithm, Mode};

/// A cell of the digraph key square (zero-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Row index, 0..5
    pub row: usize,
    /// Column index, 0..5
    pub col: usize,
}

impl GridPos {
    /// Create a grid position
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Geometric rule applied to a digraph pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigraphRule {
    /// Both letters share a row
    SameRow,
    /// Both letters share a column
    SameColumn,
    /// Letters sit on opposite corners of a rectangle
    Rectangle,
}

impl DigraphRule {
    /// Get the name of the rule as a string
    pub fn name(&self) -> &'static str {
        match self {
            DigraphRule::SameRow => "Same Row",
            DigraphRule::SameColumn => "Same Column",
            DigraphRule::Rectangle => "Rectangle",
        }
    }
}

impl fmt::Display for DigraphRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a single step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Fixed rotation of one letter
    Shift {
        /// Magnitude of the rotation, 0..26
        shift: u8,
    },
    /// Rotation of one letter by the current key letter
    Keyed {
        /// Key letter as written in the key
        key_letter: char,
        /// Ring position of the key letter, 0..26
        shift: u8,
    },
    /// Substitution of one pair through the key square
    Digraph {
        /// Rule that fired
        rule: DigraphRule,
        /// `[source1, source2, result1, result2]`
        coordinates: [GridPos; 4],
    },
}

/// One transformed unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    mode: Mode,
    input: String,
    output: String,
    kind: StepKind,
}

impl StepRecord {
    pub(crate) fn shift(mode: Mode, input: char, output: char, shift: u8) -> Self {
        Self {
            mode,
            input: input.to_string(),
            output: output.to_string(),
            kind: StepKind::Shift { shift },
        }
    }

    pub(crate) fn keyed(
        mode: Mode,
        input: char,
        output: char,
        key_letter: char,
        shift: u8,
    ) -> Self {
        Self {
            mode,
            input: input.to_string(),
            output: output.to_string(),
            kind: StepKind::Keyed { key_letter, shift },
        }
    }

    pub(crate) fn digraph(
        mode: Mode,
        input: String,
        output: String,
        rule: DigraphRule,
        coordinates: [GridPos; 4],
    ) -> Self {
        Self {
            mode,
            input,
            output,
            kind: StepKind::Digraph { rule, coordinates },
        }
    }

    /// Direction of the transform that produced this step
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Input unit: one letter, or a two-letter pair
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Output unit: one letter, or a two-letter pair
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Typed description of the step
    pub fn kind(&self) -> &StepKind {
        &self.kind
    }

    /// Shift applied, negative when decrypting
    ///
    /// `None` for digraph steps.
    pub fn signed_shift(&self) -> Option<i8> {
        let magnitude = match self.kind {
            StepKind::Shift { shift } | StepKind::Keyed { shift, .. } => shift as i8,
            StepKind::Digraph { .. } => return None,
        };
        Some(match self.mode {
            Mode::Encrypt => magnitude,
            Mode::Decrypt => -magnitude,
        })
    }

    /// Grid coordinates of a digraph step
    pub fn coordinates(&self) -> Option<&[GridPos; 4]> {
        match &self.kind {
            StepKind::Digraph { coordinates, .. } => Some(coordinates),
            _ => None,
        }
    }

    /// Digraph rule, if this is a digraph step
    pub fn rule(&self) -> Option<DigraphRule> {
        match self.kind {
            StepKind::Digraph { rule, .. } => Some(rule),
            _ => None,
        }
    }

    /// Short rule/shift descriptor for display
    pub fn descriptor(&self) -> String {
        let sign = match self.mode {
            Mode::Encrypt => '+',
            Mode::Decrypt => '-',
        };
        match self.kind {
            StepKind::Shift { shift } => match self.mode {
                Mode::Encrypt => format!("Shift {}", shift),
                Mode::Decrypt => format!("Shift -{}", shift),
            },
            StepKind::Keyed { key_letter, shift } => {
                format!("Key {} ({}{})", key_letter, sign, shift)
            }
            StepKind::Digraph { rule, .. } => rule.name().to_string(),
        }
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StepKind::Keyed { key_letter, .. } => {
                let op = match self.mode {
                    Mode::Encrypt => '+',
                    Mode::Decrypt => '-',
                };
                write!(f, "{} {} {} -> {}", self.input, op, key_letter, self.output)
            }
            _ => write!(f, "{} -> {} ({})", self.input, self.output, self.descriptor()),
        }
    }
}

/// Ordered, append-only sequence of steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepTrace {
    records: Vec<StepRecord>,
}

impl StepTrace {
    /// Create an empty trace
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, record: StepRecord) {
        self.records.push(record);
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no step was recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Step at `index`, in processing order
    pub fn get(&self, index: usize) -> Option<&StepRecord> {
        self.records.get(index)
    }

    /// Iterate over the steps in processing order
    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.records.iter()
    }

    /// All steps as a slice
    pub fn as_slice(&self) -> &[StepRecord] {
        &self.records
    }
}

impl Index<usize> for StepTrace {
    type Output = StepRecord;

    fn index(&self, index: usize) -> &StepRecord {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a StepTrace {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for StepTrace {
    type Item = StepRecord;
    type IntoIter = std::vec::IntoIter<StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Everything one encrypt/decrypt call produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    algorithm: CipherAlgorithm,
    mode: Mode,
    output: String,
    steps: StepTrace,
    key_square: Option<KeySquare>,
}

impl TransformResult {
    pub(crate) fn new(
        algorithm: CipherAlgorithm,
        mode: Mode,
        output: String,
        steps: StepTrace,
    ) -> Self {
        log::debug!(
            "{} {}: {} steps, {} output chars",
            algorithm.name(),
            mode,
            steps.len(),
            output.chars().count()
        );
        Self {
            algorithm,
            mode,
            output,
            steps,
            key_square: None,
        }
    }

    pub(crate) fn with_key_square(mut self, key_square: KeySquare) -> Self {
        self.key_square = Some(key_square);
        self
    }

    /// Cipher that produced this result
    pub fn algorithm(&self) -> CipherAlgorithm {
        self.algorithm
    }

    /// Direction of the transform
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Final transformed text
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Per-unit steps in processing order
    pub fn steps(&self) -> &StepTrace {
        &self.steps
    }

    /// Key square used, for the digraph cipher only
    pub fn key_square(&self) -> Option<&KeySquare> {
        self.key_square.as_ref()
    }

    /// Take the final text, dropping the trace
    pub fn into_output(self) -> String {
        self.output
    }

    pub(crate) fn output_mut(&mut self) -> &mut String {
        &mut self.output
    }

    /// Render the trace as human-readable log lines
    ///
    /// Digraph results start with the key square, one indented row per line.
    pub fn log_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.steps.len() + 6);
        if let Some(square) = &self.key_square {
            lines.push("Playfair Matrix (5x5):".to_string());
            for row in square.rows() {
                let letters: Vec<String> = row.iter().map(|c| c.to_string()).collect();
                lines.push(format!("  {}", letters.join(" ")));
            }
        }
        lines.extend(self.steps.iter().map(|step| step.to_string()));
        lines
    }
}

impl fmt::Display for TransformResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}
