//! The target sequence and the player's attempt at reproducing it.

use super::color::Color;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Append-only list of colours the player has to reproduce.
///
/// Outside the crate a sequence can only be read. The engine grows it by one
/// colour per round and clears it on restart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    colors: Vec<Color>,
}

impl Sequence {
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    pub(crate) fn push(&mut self, color: Color) {
        self.colors.push(color);
    }

    pub(crate) fn clear(&mut self) {
        self.colors.clear();
    }
}

impl Index<usize> for Sequence {
    type Output = Color;

    fn index(&self, index: usize) -> &Self::Output {
        &self.colors[index]
    }
}

impl From<Vec<Color>> for Sequence {
    fn from(colors: Vec<Color>) -> Self {
        Self { colors }
    }
}

/// Verdict on a single press, judged against the position it just filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Judgement {
    /// Correct colour, more presses expected.
    Partial,
    /// Correct colour and the whole sequence has been reproduced.
    Complete,
    /// Wrong colour at `index`.
    Mismatch {
        index: usize,
        expected: Color,
        pressed: Color,
    },
}

/// The player's presses during the current round.
///
/// Never longer than the sequence it is judged against.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attempt {
    presses: Vec<Color>,
}

impl Attempt {
    pub fn new() -> Self {
        Self {
            presses: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.presses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.presses
    }

    /// Record `color` and judge it against `target`.
    ///
    /// Returns `None` without recording anything when the attempt already
    /// covers the whole target.
    pub(crate) fn press(&mut self, color: Color, target: &Sequence) -> Option<Judgement> {
        let index = self.presses.len();
        let expected = target.get(index)?;
        self.presses.push(color);

        Some(if expected != color {
            Judgement::Mismatch {
                index,
                expected,
                pressed: color,
            }
        } else if self.presses.len() == target.len() {
            Judgement::Complete
        } else {
            Judgement::Partial
        })
    }

    pub(crate) fn clear(&mut self) {
        self.presses.clear();
    }
}
