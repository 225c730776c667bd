use std::fmt;

use serde::{Deserialize, Serialize};

/// One filterable dimension of a recommendation query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Occasion,
    Color,
    Budget,
    Size,
}

impl Facet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Occasion => "occasion",
            Facet::Color => "color",
            Facet::Budget => "budget",
            Facet::Size => "size",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A facet value that is neither whitelisted nor an acceptable free-form
/// color word.
#[derive(Debug, Clone)]
pub struct UnknownFacetValue {
    pub facet: Facet,
    pub value: String,
}

impl UnknownFacetValue {
    fn new(facet: Facet, value: &str) -> Self {
        Self {
            facet,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for UnknownFacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} is not a valid {} choice", self.value, self.facet)
    }
}

impl std::error::Error for UnknownFacetValue {}

/// Occasion a shopper is dressing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Occasion {
    WeddingGuest,
    Prom,
    Evening,
    Casual,
    Work,
    Holiday,
    Summer,
}

impl Occasion {
    pub const ALL: [Occasion; 7] = [
        Occasion::WeddingGuest,
        Occasion::Prom,
        Occasion::Evening,
        Occasion::Casual,
        Occasion::Work,
        Occasion::Holiday,
        Occasion::Summer,
    ];

    /// The label shown on the quiz page, also the wire and storage form.
    pub fn label(&self) -> &'static str {
        match self {
            Occasion::WeddingGuest => "Wedding guest",
            Occasion::Prom => "Prom",
            Occasion::Evening => "Evening",
            Occasion::Casual => "Casual",
            Occasion::Work => "Work",
            Occasion::Holiday => "Holiday",
            Occasion::Summer => "Summer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.label() == value)
    }
}

impl TryFrom<String> for Occasion {
    type Error = UnknownFacetValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| UnknownFacetValue::new(Facet::Occasion, &value))
    }
}

impl From<Occasion> for String {
    fn from(occasion: Occasion) -> Self {
        occasion.label().to_string()
    }
}

/// A requested color: one of the curated families, the "Any" sentinel, or a
/// free-form single word the shopper typed themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorChoice {
    White,
    Black,
    Blue,
    Red,
    Pink,
    Green,
    Beige,
    Pastel,
    Jewel,
    Neutral,
    Flower,
    /// No color preference; scoring skips the facet entirely.
    Any,
    /// A bare alphabetic word, at most 20 characters.
    Custom(String),
}

impl ColorChoice {
    pub fn label(&self) -> &str {
        match self {
            ColorChoice::White => "White",
            ColorChoice::Black => "Black",
            ColorChoice::Blue => "Blue",
            ColorChoice::Red => "Red",
            ColorChoice::Pink => "Pink",
            ColorChoice::Green => "Green",
            ColorChoice::Beige => "Beige",
            ColorChoice::Pastel => "Pastel",
            ColorChoice::Jewel => "Jewel",
            ColorChoice::Neutral => "Neutral",
            ColorChoice::Flower => "Flower",
            ColorChoice::Any => "Any",
            ColorChoice::Custom(word) => word,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let curated = match value {
            "White" => Some(ColorChoice::White),
            "Black" => Some(ColorChoice::Black),
            "Blue" => Some(ColorChoice::Blue),
            "Red" => Some(ColorChoice::Red),
            "Pink" => Some(ColorChoice::Pink),
            "Green" => Some(ColorChoice::Green),
            "Beige" => Some(ColorChoice::Beige),
            "Pastel" => Some(ColorChoice::Pastel),
            "Jewel" => Some(ColorChoice::Jewel),
            "Neutral" => Some(ColorChoice::Neutral),
            "Flower" => Some(ColorChoice::Flower),
            "Any" => Some(ColorChoice::Any),
            _ => None,
        };
        curated.or_else(|| {
            Self::is_free_form(value).then(|| ColorChoice::Custom(value.to_string()))
        })
    }

    fn is_free_form(value: &str) -> bool {
        (1..=20).contains(&value.len()) && value.chars().all(|c| c.is_ascii_alphabetic())
    }
}

impl TryFrom<String> for ColorChoice {
    type Error = UnknownFacetValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| UnknownFacetValue::new(Facet::Color, &value))
    }
}

impl From<ColorChoice> for String {
    fn from(color: ColorChoice) -> Self {
        color.label().to_string()
    }
}

/// Price bucket the shopper is willing to spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Budget {
    Under150,
    Mid,
    Over300,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Under150, Budget::Mid, Budget::Over300];

    pub fn label(&self) -> &'static str {
        match self {
            Budget::Under150 => "<150",
            Budget::Mid => "150–300",
            Budget::Over300 => "300+",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.label() == value)
    }

    /// Whether a price falls inside this bucket.
    pub fn covers(&self, price: f64) -> bool {
        match self {
            Budget::Under150 => price < 150.0,
            Budget::Mid => (150.0..=300.0).contains(&price),
            Budget::Over300 => price > 300.0,
        }
    }
}

impl TryFrom<String> for Budget {
    type Error = UnknownFacetValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| UnknownFacetValue::new(Facet::Budget, &value))
    }
}

impl From<Budget> for String {
    fn from(budget: Budget) -> Self {
        budget.label().to_string()
    }
}

/// A dress size code. Raw input is upper-cased before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SizeCode {
    Xs,
    S,
    M,
    L,
    Xl,
}

impl SizeCode {
    pub const ALL: [SizeCode; 5] = [
        SizeCode::Xs,
        SizeCode::S,
        SizeCode::M,
        SizeCode::L,
        SizeCode::Xl,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SizeCode::Xs => "XS",
            SizeCode::S => "S",
            SizeCode::M => "M",
            SizeCode::L => "L",
            SizeCode::Xl => "XL",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.label() == value)
    }
}

impl TryFrom<String> for SizeCode {
    type Error = UnknownFacetValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| UnknownFacetValue::new(Facet::Size, &value))
    }
}

impl From<SizeCode> for String {
    fn from(size: SizeCode) -> Self {
        size.label().to_string()
    }
}

/// A validated set of quiz answers. An empty vec leaves that facet
/// unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSet {
    #[serde(default)]
    pub occasions: Vec<Occasion>,
    #[serde(default)]
    pub colors: Vec<ColorChoice>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub sizes: Vec<SizeCode>,
}

impl AnswerSet {
    /// Whether the shopper opted out of color filtering.
    pub fn wants_any_color(&self) -> bool {
        self.colors.iter().any(|c| matches!(c, ColorChoice::Any))
    }

    /// A copy of this answer set with one facet dropped. Used by the
    /// relaxation controller; budget is intentionally not droppable there.
    pub fn without(&self, facet: Facet) -> AnswerSet {
        let mut relaxed = self.clone();
        match facet {
            Facet::Occasion => relaxed.occasions.clear(),
            Facet::Color => relaxed.colors.clear(),
            Facet::Budget => relaxed.budgets.clear(),
            Facet::Size => relaxed.sizes.clear(),
        }
        relaxed
    }
}

/// A facet field as submitted by the quiz page: a single value or a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// The raw quiz payload, before normalization and validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAnswers {
    #[serde(default)]
    pub occasion: Option<OneOrMany>,
    #[serde(default)]
    pub color: Option<OneOrMany>,
    #[serde(default)]
    pub budget: Option<OneOrMany>,
    #[serde(default)]
    pub size: Option<OneOrMany>,
}

impl RawAnswers {
    /// Normalizes and validates the payload into a typed answer set.
    ///
    /// Every element must be a whitelist member; the color facet also
    /// accepts a bare alphabetic word of at most 20 characters. Size codes
    /// are upper-cased before matching. Pure; the first offending facet is
    /// reported.
    pub fn validate(self) -> Result<AnswerSet, UnknownFacetValue> {
        let occasions = facet_values(self.occasion)
            .iter()
            .map(|v| Occasion::parse(v).ok_or_else(|| UnknownFacetValue::new(Facet::Occasion, v)))
            .collect::<Result<Vec<_>, _>>()?;

        let colors = facet_values(self.color)
            .iter()
            .map(|v| ColorChoice::parse(v).ok_or_else(|| UnknownFacetValue::new(Facet::Color, v)))
            .collect::<Result<Vec<_>, _>>()?;

        let budgets = facet_values(self.budget)
            .iter()
            .map(|v| Budget::parse(v).ok_or_else(|| UnknownFacetValue::new(Facet::Budget, v)))
            .collect::<Result<Vec<_>, _>>()?;

        let sizes = facet_values(self.size)
            .iter()
            .map(|v| {
                let code = v.to_uppercase();
                SizeCode::parse(&code).ok_or_else(|| UnknownFacetValue::new(Facet::Size, v))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AnswerSet {
            occasions,
            colors,
            budgets,
            sizes,
        })
    }
}

/// Coerces an optional scalar-or-list field to a vec of trimmed strings.
/// An absent field or an empty scalar means the facet was left blank.
fn facet_values(field: Option<OneOrMany>) -> Vec<String> {
    let raw = match field {
        None => Vec::new(),
        Some(OneOrMany::One(value)) if value.is_empty() => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
    };
    raw.into_iter().map(|v| v.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(payload: serde_json::Value) -> RawAnswers {
        serde_json::from_value(payload).unwrap()
    }

    #[test]
    fn test_validate_whitelisted_values() {
        let answers = raw(serde_json::json!({
            "occasion": ["Evening", "Prom"],
            "color": ["Blue"],
            "budget": ["150–300"],
            "size": ["M"]
        }))
        .validate()
        .unwrap();

        assert_eq!(answers.occasions, vec![Occasion::Evening, Occasion::Prom]);
        assert_eq!(answers.colors, vec![ColorChoice::Blue]);
        assert_eq!(answers.budgets, vec![Budget::Mid]);
        assert_eq!(answers.sizes, vec![SizeCode::M]);
    }

    #[test]
    fn test_scalar_fields_coerce_to_single_element() {
        let answers = raw(serde_json::json!({ "occasion": "Casual" }))
            .validate()
            .unwrap();
        assert_eq!(answers.occasions, vec![Occasion::Casual]);
        assert!(answers.colors.is_empty());
    }

    #[test]
    fn test_sizes_are_upper_cased() {
        let answers = raw(serde_json::json!({ "size": ["m", "xl"] }))
            .validate()
            .unwrap();
        assert_eq!(answers.sizes, vec![SizeCode::M, SizeCode::Xl]);
    }

    #[test]
    fn test_free_form_color_is_accepted() {
        let answers = raw(serde_json::json!({ "color": ["chartreuse"] }))
            .validate()
            .unwrap();
        assert_eq!(
            answers.colors,
            vec![ColorChoice::Custom("chartreuse".to_string())]
        );
    }

    #[test]
    fn test_free_form_rule_rejects_non_alphabetic_and_long_words() {
        assert!(raw(serde_json::json!({ "color": ["blue-green"] }))
            .validate()
            .is_err());
        assert!(raw(serde_json::json!({ "color": ["a".repeat(21)] }))
            .validate()
            .is_err());
    }

    #[test]
    fn test_invalid_budget_names_the_facet() {
        let err = raw(serde_json::json!({ "budget": ["free"] }))
            .validate()
            .unwrap_err();
        assert_eq!(err.facet, Facet::Budget);
    }

    #[test]
    fn test_invalid_occasion_is_not_saved_by_color_rule() {
        // "beach" is a plausible word but occasion has no free-form escape.
        let err = raw(serde_json::json!({ "occasion": ["beach"] }))
            .validate()
            .unwrap_err();
        assert_eq!(err.facet, Facet::Occasion);
    }

    #[test]
    fn test_empty_scalar_leaves_facet_unconstrained() {
        let answers = raw(serde_json::json!({ "occasion": "" })).validate().unwrap();
        assert!(answers.occasions.is_empty());
    }

    #[test]
    fn test_wants_any_color() {
        let answers = raw(serde_json::json!({ "color": ["Any", "Blue"] }))
            .validate()
            .unwrap();
        assert!(answers.wants_any_color());
    }

    #[test]
    fn test_without_clears_only_the_named_facet() {
        let answers = raw(serde_json::json!({
            "occasion": ["Evening"],
            "color": ["Blue"],
            "size": ["M"]
        }))
        .validate()
        .unwrap();

        let relaxed = answers.without(Facet::Size);
        assert!(relaxed.sizes.is_empty());
        assert_eq!(relaxed.occasions, answers.occasions);
        assert_eq!(relaxed.colors, answers.colors);
    }

    #[test]
    fn test_budget_bucket_boundaries() {
        assert!(Budget::Under150.covers(149.99));
        assert!(!Budget::Under150.covers(150.0));
        assert!(Budget::Mid.covers(150.0));
        assert!(Budget::Mid.covers(300.0));
        assert!(!Budget::Mid.covers(300.01));
        assert!(Budget::Over300.covers(300.01));
        assert!(!Budget::Over300.covers(300.0));
    }

    #[test]
    fn test_answer_set_round_trips_through_labels() {
        let answers = raw(serde_json::json!({
            "occasion": ["Wedding guest"],
            "color": ["teal"],
            "budget": ["<150"],
            "size": ["XS"]
        }))
        .validate()
        .unwrap();

        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json["occasions"][0], "Wedding guest");
        assert_eq!(json["colors"][0], "teal");
        assert_eq!(json["budgets"][0], "<150");
        assert_eq!(json["sizes"][0], "XS");

        let back: AnswerSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, answers);
    }
}
