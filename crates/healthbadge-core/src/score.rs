//! Mapping from a numeric inspection score to the operating-condition tier
//! shown on the badge.

/// Restaurant operating-condition tier derived from an inspection score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingCondition {
    Poor,
    NeedsImprovement,
    Adequate,
    Good,
}

impl OperatingCondition {
    /// Human-readable label rendered on the badge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Adequate => "Adequate",
            Self::Good => "Good",
        }
    }

    #[must_use]
    pub fn color(self) -> BadgeColor {
        match self {
            Self::Poor => BadgeColor::Red,
            Self::NeedsImprovement => BadgeColor::Orange,
            Self::Adequate => BadgeColor::Yellow,
            Self::Good => BadgeColor::Green,
        }
    }
}

impl std::fmt::Display for OperatingCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Color classes understood by the overlay stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Red,
    Orange,
    Yellow,
    Green,
    Gray,
}

impl BadgeColor {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Gray => "gray",
        }
    }
}

impl std::fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Result of [`classify`]: the tier and the color it is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreClass {
    pub category: OperatingCondition,
    pub color: BadgeColor,
}

/// Classifies an inspection score.
///
/// | Score      | Category          | Color  |
/// |------------|-------------------|--------|
/// | `< 71`     | Poor              | red    |
/// | `71..86`   | Needs Improvement | orange |
/// | `86..90`   | Adequate          | yellow |
/// | `>= 90`    | Good              | green  |
///
/// Fractional scores are compared as served, never rounded.
#[must_use]
pub fn classify(score: f64) -> ScoreClass {
    let category = if score < 71.0 {
        OperatingCondition::Poor
    } else if score < 86.0 {
        OperatingCondition::NeedsImprovement
    } else if score < 90.0 {
        OperatingCondition::Adequate
    } else {
        OperatingCondition::Good
    };
    ScoreClass {
        category,
        color: category.color(),
    }
}
