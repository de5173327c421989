//! Keyword extraction for free-text nutrition goals.
//!
//! Recognizes a weight direction, a weight amount, a time frame and a
//! muscle-gain intent in English or Vietnamese. Matching is
//! case-insensitive and purely lexical.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

const POUNDS_TO_KG: f32 = 0.453_592;

const LOSS_KEYWORDS: &[&str] = &[
    "lose", "losing", "weight loss", "slim", "slimming", "shed", "giảm",
];
const GAIN_KEYWORDS: &[&str] = &["gain weight", "put on weight", "weight gain", "tăng cân"];
const MUSCLE_KEYWORDS: &[&str] = &["muscle", "muscles", "bulk", "bulking", "tăng cơ", "cơ bắp"];

// Keywords match whole words only, so "close" is not "lose"
static LOSS_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| keyword_pattern(LOSS_KEYWORDS));
static GAIN_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| keyword_pattern(GAIN_KEYWORDS));
static MUSCLE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| keyword_pattern(MUSCLE_KEYWORDS));

/// Stored as Option so a bad pattern degrades to "not recognized"
static WEIGHT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 5kg, 2.5 kg, 3,5 kilos, 10 lbs, 12 pounds
    Regex::new(r"(?i)\b(\d+(?:[.,]\d+)?)\s*(kgs?|kilos?|kilograms?|lbs?|pounds?)\b").ok()
});

static DURATION_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 2 months, 6 weeks, 1.5 years, 1,5 năm, 10 ngày
    Regex::new(r"(?i)\b(\d+(?:[.,]\d+)?)\s*(days?|weeks?|months?|years?|ngày|tuần|tháng|năm)\b")
        .ok()
});

fn keyword_pattern(keywords: &[&str]) -> Option<Regex> {
    let alternation = keywords
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightDirection {
    Loss,
    Gain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Day,
    Week,
    Month,
    Year,
}

impl DurationUnit {
    fn parse(unit: &str) -> Option<Self> {
        match unit.to_lowercase().as_str() {
            "day" | "days" | "ngày" => Some(DurationUnit::Day),
            "week" | "weeks" | "tuần" => Some(DurationUnit::Week),
            "month" | "months" | "tháng" => Some(DurationUnit::Month),
            "year" | "years" | "năm" => Some(DurationUnit::Year),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            DurationUnit::Day => "day",
            DurationUnit::Week => "week",
            DurationUnit::Month => "month",
            DurationUnit::Year => "year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalDuration {
    pub amount: f32,
    pub unit: DurationUnit,
}

impl fmt::Display for GoalDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.amount == 1.0 { "" } else { "s" };
        write!(f, "{} {}{}", format_amount(self.amount), self.unit.name(), plural)
    }
}

/// What could be read out of a goal sentence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalSummary {
    pub weight_direction: Option<WeightDirection>,
    /// Always in kilograms, rounded to one decimal
    pub weight_kg: Option<f32>,
    pub duration: Option<GoalDuration>,
    pub muscle_gain: bool,
}

impl GoalSummary {
    /// True when nothing was recognized
    pub fn is_empty(&self) -> bool {
        self.weight_direction.is_none()
            && self.weight_kg.is_none()
            && self.duration.is_none()
            && !self.muscle_gain
    }

    /// One sentence, e.g. "Lose 5 kg over 2 months and build muscle."
    /// Returns None when the summary is empty.
    ///
    /// The time frame follows the weight clause; muscle gain comes last.
    pub fn sentence(&self) -> Option<String> {
        let weight_clause = match (self.weight_direction, self.weight_kg) {
            (Some(WeightDirection::Loss), Some(kg)) => {
                Some(format!("lose {} kg", format_amount(kg)))
            }
            (Some(WeightDirection::Loss), None) => Some("lose weight".to_string()),
            (Some(WeightDirection::Gain), Some(kg)) => {
                Some(format!("gain {} kg", format_amount(kg)))
            }
            (Some(WeightDirection::Gain), None) => Some("gain weight".to_string()),
            (None, Some(kg)) => Some(format!("change weight by {} kg", format_amount(kg))),
            (None, None) => None,
        };

        let has_weight_clause = weight_clause.is_some();
        let mut sentence = match (weight_clause, self.muscle_gain, self.duration) {
            (Some(clause), _, _) => clause,
            (None, true, _) => "build muscle".to_string(),
            (None, false, Some(_)) => "reach your goal".to_string(),
            (None, false, None) => return None,
        };
        if let Some(duration) = self.duration {
            sentence.push_str(&format!(" over {}", duration));
        }
        if self.muscle_gain && has_weight_clause {
            sentence.push_str(" and build muscle");
        }
        sentence.push('.');
        Some(capitalize(&sentence))
    }
}

/// Pull every recognizable element out of `text`
pub fn extract_goal(text: &str) -> GoalSummary {
    let weight_direction = if matches_any(&LOSS_PATTERN, text) {
        Some(WeightDirection::Loss)
    } else if matches_any(&GAIN_PATTERN, text) {
        Some(WeightDirection::Gain)
    } else {
        None
    };

    GoalSummary {
        weight_direction,
        weight_kg: extract_weight_kg(text),
        duration: extract_duration(text),
        muscle_gain: matches_any(&MUSCLE_PATTERN, text),
    }
}

fn matches_any(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|regex| regex.is_match(text))
}

fn parse_decimal(raw: &str) -> Option<f32> {
    raw.replace(',', ".").parse().ok().filter(|value: &f32| value.is_finite())
}

fn extract_weight_kg(text: &str) -> Option<f32> {
    let captures = WEIGHT_PATTERN.as_ref()?.captures(text)?;
    let amount = parse_decimal(captures.get(1)?.as_str())?;
    let unit = captures.get(2)?.as_str().to_lowercase();

    let kg = if unit.starts_with("lb") || unit.starts_with("pound") {
        amount * POUNDS_TO_KG
    } else {
        amount
    };
    let kg = (kg * 10.0).round() / 10.0;
    kg.is_finite().then_some(kg)
}

fn extract_duration(text: &str) -> Option<GoalDuration> {
    let captures = DURATION_PATTERN.as_ref()?.captures(text)?;
    let amount = parse_decimal(captures.get(1)?.as_str())?;
    let unit = DurationUnit::parse(captures.get(2)?.as_str())?;
    Some(GoalDuration { amount, unit })
}

/// Whole numbers print without a decimal point
fn format_amount(amount: f32) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{:.1}", amount)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_english_goal() {
        let summary = extract_goal("I want to lose 5kg in 2 months and build some muscle");
        assert_eq!(summary.weight_direction, Some(WeightDirection::Loss));
        assert_eq!(summary.weight_kg, Some(5.0));
        assert_eq!(
            summary.duration,
            Some(GoalDuration { amount: 2.0, unit: DurationUnit::Month })
        );
        assert!(summary.muscle_gain);
    }

    #[test]
    fn test_extract_vietnamese_goal() {
        let summary = extract_goal("Tôi muốn giảm 5kg trong 2 tháng và tăng cơ bắp.");
        assert_eq!(summary.weight_direction, Some(WeightDirection::Loss));
        assert_eq!(summary.weight_kg, Some(5.0));
        assert_eq!(
            summary.duration,
            Some(GoalDuration { amount: 2.0, unit: DurationUnit::Month })
        );
        assert!(summary.muscle_gain);
    }

    #[test]
    fn test_muscle_gain_is_not_weight_gain() {
        let summary = extract_goal("tăng cơ");
        assert!(summary.muscle_gain);
        assert_eq!(summary.weight_direction, None);
    }

    #[test]
    fn test_weight_gain_in_pounds() {
        let summary = extract_goal("Gain weight: about 10 lbs over 6 weeks");
        assert_eq!(summary.weight_direction, Some(WeightDirection::Gain));
        assert_eq!(summary.weight_kg, Some(4.5));
        assert_eq!(
            summary.duration,
            Some(GoalDuration { amount: 6.0, unit: DurationUnit::Week })
        );
    }

    #[test]
    fn test_decimal_comma_weight() {
        let summary = extract_goal("giảm 3,5 kg");
        assert_eq!(summary.weight_kg, Some(3.5));
    }

    #[test]
    fn test_nothing_recognized() {
        let summary = extract_goal("eat more vegetables");
        assert!(summary.is_empty());
        assert_eq!(summary.sentence(), None);
    }

    #[test]
    fn test_sentence_rendering() {
        let summary = extract_goal("lose 5kg in 2 months, more muscle");
        assert_eq!(
            summary.sentence().as_deref(),
            Some("Lose 5 kg over 2 months and build muscle.")
        );

        let summary = extract_goal("slim down");
        assert_eq!(summary.sentence().as_deref(), Some("Lose weight."));

        let summary = extract_goal("something within 1 year");
        assert_eq!(summary.sentence().as_deref(), Some("Reach your goal over 1 year."));

        let summary = extract_goal("reach 2.5 kg less");
        assert_eq!(summary.sentence().as_deref(), Some("Change weight by 2.5 kg."));

        let summary = extract_goal("bulk up over 3 months");
        assert_eq!(summary.sentence().as_deref(), Some("Build muscle over 3 months."));
    }

    #[test]
    fn test_keywords_match_whole_words_only() {
        let summary = extract_goal("I want to get close to my ideal body");
        assert_eq!(summary.weight_direction, None);
        assert!(summary.is_empty());

        let summary = extract_goal("no slimy food, just a closer look at my diet");
        assert_eq!(summary.weight_direction, None);
        assert!(!summary.muscle_gain);

        let summary = extract_goal("Losing weight while building muscles");
        assert_eq!(summary.weight_direction, Some(WeightDirection::Loss));
        assert!(summary.muscle_gain);
    }

    #[test]
    fn test_decimal_duration() {
        let summary = extract_goal("lose weight within 1,5 years");
        assert_eq!(
            summary.duration,
            Some(GoalDuration { amount: 1.5, unit: DurationUnit::Year })
        );
        assert_eq!(summary.sentence().as_deref(), Some("Lose weight over 1.5 years."));

        let summary = extract_goal("giảm cân trong 1 năm");
        assert_eq!(summary.sentence().as_deref(), Some("Lose weight over 1 year."));
    }

    #[test]
    fn test_oversized_weight_is_ignored() {
        let huge = format!("lose {} kg", "9".repeat(60));
        let summary = extract_goal(&huge);
        assert_eq!(summary.weight_kg, None);
        assert_eq!(summary.sentence().as_deref(), Some("Lose weight."));
    }
}
