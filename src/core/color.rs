//! The fixed colour palette of the game board.

use rand::distr::{Distribution, StandardUniform};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four board pads.
///
/// The set is closed: every value the engine ever appends to a sequence is
/// one of [`Color::ALL`].
///
/// # Example
///
/// ```rust
/// use simon::core::Color;
///
/// assert_eq!(Color::ALL.len(), 4);
/// assert_eq!(Color::Red.name(), "red");
/// assert_eq!(Color::Yellow.index(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    /// Every colour, in board order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Lowercase name, also used as the pad identifier by presenters.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
        }
    }

    /// Position of this colour within [`Color::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Yellow => 3,
        }
    }

    /// Look a colour up by its board position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Uniform choice over [`Color::ALL`], so `rng.random::<Color>()` works.
///
/// The pad is picked by the top two bits of one `u32`, so a generator that
/// yields `index << 30` produces the colour at `index`.
impl Distribution<Color> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        Color::ALL[(rng.next_u32() >> 30) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn index_round_trips_through_all() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(Color::from_index(i), Some(*color));
        }
        assert_eq!(Color::from_index(4), None);
    }

    #[test]
    fn display_uses_pad_name() {
        assert_eq!(Color::Green.to_string(), "green");
        assert_eq!(format!("{}", Color::Blue), "blue");
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&Color::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");

        let parsed: Color = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(parsed, Color::Red);
    }

    struct Fixed(u32);

    impl RngCore for Fixed {
        fn next_u32(&mut self) -> u32 {
            self.0
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.0)
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn sampling_reads_the_top_two_bits() {
        for color in Color::ALL {
            let word = (color.index() as u32) << 30;
            assert_eq!(Fixed(word).random::<Color>(), color);
            assert_eq!(Fixed(word | 0x3fff_ffff).random::<Color>(), color);
        }
    }

    #[test]
    fn sampling_eventually_hits_every_color() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = [false; 4];

        for _ in 0..500 {
            let color: Color = rng.random();
            seen[color.index()] = true;
        }

        assert!(seen.iter().all(|&hit| hit));
    }
}
