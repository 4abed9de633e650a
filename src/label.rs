use std::fmt;

/// Probabilities at or above this value are classified as [`Label::Stone`].
pub const STONE_THRESHOLD: f32 = 0.5;

/// One of the two classes the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    NoStone,
    Stone,
}

impl Label {
    /// Threshold a sigmoid output. `NaN` compares false and lands on `NoStone`.
    pub fn from_probability(probability: f32) -> Self {
        if probability >= STONE_THRESHOLD {
            Self::Stone
        } else {
            Self::NoStone
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoStone => "No Stone",
            Self::Stone => "Stone",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
