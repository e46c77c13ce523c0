use serde::{Deserialize, Serialize};

/// Traffic-light verdict for a scored attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Green,
    Amber,
    Red,
}

impl Rating {
    /// Classify a score against the fixed thresholds (inclusive lower bounds):
    /// >= 0.7 Green, >= 0.4 Amber, otherwise Red.
    ///
    /// The same thresholds apply to every attribute, including coverage
    /// ratios above 1.0.
    pub fn for_score(score: f32) -> Self {
        if score >= 0.7 {
            Rating::Green
        } else if score >= 0.4 {
            Rating::Amber
        } else {
            Rating::Red
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Rating::Green => "Green",
            Rating::Amber => "Amber",
            Rating::Red => "Red",
        };
        f.write_str(s)
    }
}
