use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::app::error::LabelError;

/// What the label is stuck on: the envelope a batch ships in, or the card
/// inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Envelope,
    Card,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Envelope, Category::Card];

    /// Text printed on the label and shown on the form's radio buttons.
    pub fn label(self) -> &'static str {
        match self {
            Category::Envelope => "Envelopes",
            Category::Card => "Cards",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "envelopes" | "envelope" => Ok(Category::Envelope),
            "cards" | "card" => Ok(Category::Card),
            other => Err(LabelError::Validation(format!(
                "Unknown label type '{}': expected Envelopes or Cards",
                other
            ))),
        }
    }
}

/// Six hex digits, no leading `#`, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(input: &str) -> Result<Self, LabelError> {
        let digits = input.trim().trim_start_matches('#');
        let valid = digits.len() == 6 && hex::decode(digits).is_ok();
        if !valid {
            return Err(LabelError::Validation(format!(
                "'{}' is not a 6-digit hex color",
                input
            )));
        }
        Ok(Self(digits.to_ascii_lowercase()))
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(hex::encode([r, g, b]))
    }

    pub fn to_rgb(&self) -> (u8, u8, u8) {
        // Validated on construction
        match hex::decode(&self.0).as_deref() {
            Ok([r, g, b]) => (*r, *g, *b),
            _ => (0, 0, 0),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = LabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

/// One physical label: unit `unit_index` of `unit_total` for an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRecord {
    order_name: String,
    unit_index: u32,
    unit_total: u32,
    category: Category,
    color: HexColor,
}

impl LabelRecord {
    pub(crate) fn new(
        order_name: String,
        unit_index: u32,
        unit_total: u32,
        category: Category,
        color: HexColor,
    ) -> Self {
        debug_assert!(unit_index >= 1 && unit_index <= unit_total);
        Self {
            order_name,
            unit_index,
            unit_total,
            category,
            color,
        }
    }

    pub fn order_name(&self) -> &str {
        &self.order_name
    }

    pub fn unit_index(&self) -> u32 {
        self.unit_index
    }

    pub fn unit_total(&self) -> u32 {
        self.unit_total
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn color(&self) -> &HexColor {
        &self.color
    }

    /// "2 of 5"
    pub fn batch_label(&self) -> String {
        format!("{} of {}", self.unit_index, self.unit_total)
    }

    pub fn matches(&self, order_name: &str, category: Category) -> bool {
        self.order_name == order_name && self.category == category
    }

    pub(crate) fn set_color(&mut self, color: HexColor) {
        self.color = color;
    }
}

/// All records added by one form submission, as listed in the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGroup {
    pub order_name: String,
    pub category: Category,
    pub color: HexColor,
    pub unit_total: u32,
}

impl LabelGroup {
    /// Text of the clickable swatch, e.g. "Acme Cards assigned color".
    pub fn caption(&self) -> String {
        format!("{} {} assigned color", self.order_name, self.category)
    }
}
