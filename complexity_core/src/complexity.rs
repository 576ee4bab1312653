use serde::{Deserialize, Serialize};
use std::fmt;

/// Asymptotic growth classes demonstrated by the demo units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Complexity {
    /// O(1)
    Constant,
    /// O(log N)
    Logarithmic,
    /// O(N)
    Linear,
    /// O(N log N)
    Linearithmic,
    /// O(N^2)
    Quadratic,
}

impl Complexity {
    /// Every class, slowest-growing first
    pub const ALL: [Complexity; 5] = [
        Complexity::Constant,
        Complexity::Logarithmic,
        Complexity::Linear,
        Complexity::Linearithmic,
        Complexity::Quadratic,
    ];

    /// Big-O notation used in log labels
    pub fn notation(&self) -> &'static str {
        match self {
            Complexity::Constant => "O(1)",
            Complexity::Logarithmic => "O(log N)",
            Complexity::Linear => "O(N)",
            Complexity::Linearithmic => "O(N log N)",
            Complexity::Quadratic => "O(N^2)",
        }
    }

    /// Abstract cost function value for input size `n`
    ///
    /// Logarithms are base 2 and clamp at `n = 1` so that `growth(0)` and
    /// `growth(1)` stay finite.
    pub fn growth(&self, n: usize) -> f64 {
        let n = n.max(1) as f64;
        match self {
            Complexity::Constant => 1.0,
            Complexity::Logarithmic => n.log2().max(1.0),
            Complexity::Linear => n,
            Complexity::Linearithmic => n * n.log2().max(1.0),
            Complexity::Quadratic => n * n,
        }
    }

    /// Expected cost ratio when the input grows from `from` to `to`
    pub fn expected_ratio(&self, from: usize, to: usize) -> f64 {
        self.growth(to) / self.growth(from)
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}
