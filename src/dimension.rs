//! Question Dimensions
//!
//! Category, difficulty and type selectors with their display labels.

/// (value, label) option pairs
pub type OptionList = &'static [(&'static str, &'static str)];

pub const CATEGORY_OPTIONS: OptionList = &[
    ("truthTable", "Truth Table"),
    ("equivalence", "Equivalence"),
    ("inference", "Inference"),
];

pub const DIFFICULTY_OPTIONS: OptionList = &[
    ("easy", "Easy"),
    ("medium", "Medium"),
    ("hard", "Hard"),
];

pub const TYPE_OPTIONS: OptionList = &[
    ("singleChoice", "Single Choice"),
    ("multipleChoice", "Multiple Choice"),
    ("trueFalse", "True / False"),
];

/// Axis along which questions are grouped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Category,
    Difficulty,
    Type,
}

impl Dimension {
    /// Fixed display order
    pub const ALL: [Dimension; 3] = [Dimension::Category, Dimension::Difficulty, Dimension::Type];

    /// Wire / query-parameter key
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Category => "category",
            Dimension::Difficulty => "difficulty",
            Dimension::Type => "type",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Category => "Category",
            Dimension::Difficulty => "Difficulty",
            Dimension::Type => "Type",
        }
    }

    pub fn options(self) -> OptionList {
        match self {
            Dimension::Category => CATEGORY_OPTIONS,
            Dimension::Difficulty => DIFFICULTY_OPTIONS,
            Dimension::Type => TYPE_OPTIONS,
        }
    }

    /// Exact option label, if the value is a known option
    pub fn option_label(self, value: &str) -> Option<&'static str> {
        self.options()
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, label)| *label)
    }

    /// Option label, or a humanised form of an unknown value
    pub fn value_label(self, value: &str) -> String {
        self.option_label(value)
            .map(str::to_string)
            .unwrap_or_else(|| humanize(value))
    }
}

/// `some_raw-value` -> `Some Raw Value`; empty input -> `Unknown`
pub fn humanize(value: &str) -> String {
    let spaced = value.replace(['_', '-'], " ");
    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut out = String::with_capacity(collapsed.len());
    let mut prev_is_word = false;
    for c in collapsed.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }

    if out.is_empty() {
        "Unknown".to_string()
    } else {
        out
    }
}
