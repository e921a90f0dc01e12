//! # Results Display
//!
//! Text shown in the results area. Both front-ends render from
//! [`ResultsView`] so the wording and rounding stay in one place:
//! volumes to 2 decimals, bag counts as whole numbers.

use crate::calculations::ConcreteResult;
use crate::materials::ConcreteBag;

/// Heading of the results area
pub const RESULTS_HEADING: &str = "Results";

/// Heading above the bag counts
pub const MATERIALS_HEADING: &str = "Material Estimates";

/// Prompt shown while no result is held
pub const PLACEHOLDER: &str = "Enter dimensions to calculate concrete volume";

/// One "60lb Bags  112" style line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BagLine {
    pub bag: ConcreteBag,
    pub label: &'static str,
    pub count: String,
}

/// What the results area should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// No result held
    Placeholder,
    /// A result is held
    Estimate {
        /// Primary volume line, e.g. "1.85 yd³"
        volume_yards: String,
        /// Secondary volume line, e.g. "50.00 ft³"
        volume_feet: String,
        /// One line per bag size
        bags: Vec<BagLine>,
    },
}

impl ResultsView {
    /// Build the view for an optional result
    pub fn from_result(result: Option<&ConcreteResult>) -> Self {
        match result {
            None => ResultsView::Placeholder,
            Some(r) => ResultsView::Estimate {
                volume_yards: format_cubic_yards(r.cubic_yards),
                volume_feet: format_cubic_feet(r.cubic_feet),
                bags: ConcreteBag::ALL
                    .iter()
                    .map(|&bag| BagLine {
                        bag,
                        label: bag.display_name(),
                        count: r.bags(bag).to_string(),
                    })
                    .collect(),
            },
        }
    }

    /// Plain-text rendering, one line per entry
    pub fn lines(&self) -> Vec<String> {
        match self {
            ResultsView::Placeholder => vec![PLACEHOLDER.to_string()],
            ResultsView::Estimate {
                volume_yards,
                volume_feet,
                bags,
            } => {
                let mut lines = vec![
                    "Volume".to_string(),
                    format!("  {}", volume_yards),
                    format!("  {}", volume_feet),
                    String::new(),
                    MATERIALS_HEADING.to_string(),
                ];
                lines.extend(bags.iter().map(|b| format!("  {:<10} {:>8}", b.label, b.count)));
                lines
            }
        }
    }
}

/// Cubic yards to 2 decimals with unit
pub fn format_cubic_yards(cubic_yards: f64) -> String {
    format!("{:.2} yd³", cubic_yards)
}

/// Cubic feet to 2 decimals with unit
pub fn format_cubic_feet(cubic_feet: f64) -> String {
    format!("{:.2} ft³", cubic_feet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::estimate;

    #[test]
    fn test_placeholder_without_result() {
        let view = ResultsView::from_result(None);
        assert_eq!(view, ResultsView::Placeholder);
        assert_eq!(view.lines(), vec![PLACEHOLDER.to_string()]);
    }

    #[test]
    fn test_estimate_view() {
        let result = estimate("10", "10", "0.5").unwrap();
        match ResultsView::from_result(Some(&result)) {
            ResultsView::Estimate {
                volume_yards,
                volume_feet,
                bags,
            } => {
                assert_eq!(volume_yards, "1.85 yd³");
                assert_eq!(volume_feet, "50.00 ft³");
                assert_eq!(bags[0].label, "60lb Bags");
                assert_eq!(bags[0].count, "112");
                assert_eq!(bags[1].label, "80lb Bags");
                assert_eq!(bags[1].count, "84");
            }
            ResultsView::Placeholder => panic!("expected an estimate"),
        }
    }

    #[test]
    fn test_small_volume_rounds_to_two_places() {
        let result = estimate("1", "1", "1").unwrap();
        let lines = ResultsView::from_result(Some(&result)).lines();
        assert!(lines.contains(&"  0.04 yd³".to_string()));
        assert!(lines.contains(&"  1.00 ft³".to_string()));
    }
}
