//! Frontend Models
//!
//! The place card draft and the small value types it is built from.

use serde::{Deserialize, Serialize};

/// Place type shown on the card badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Restaurant,
    Cafe,
    Attraction,
    Shopping,
    Nature,
    Bar,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Restaurant,
        Category::Cafe,
        Category::Attraction,
        Category::Shopping,
        Category::Nature,
        Category::Bar,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Restaurant => "restaurant",
            Category::Cafe => "cafe",
            Category::Attraction => "attraction",
            Category::Shopping => "shopping",
            Category::Nature => "nature",
            Category::Bar => "bar",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Star rating, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Clamp any integer into the 1..=5 range
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Parse a decimal string; non-numeric input yields `None`
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse::<i64>().ok().map(Self::new)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(4)
    }
}

/// Editable draft fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    LocalizedName,
    Category,
    Description,
    Address,
    Hours,
    Price,
    Transit,
    Tip,
    Rating,
    Channel,
}

/// The single in-memory record the user fills in.
///
/// Value type: every update returns a new draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceCardDraft {
    pub name: Option<String>,
    pub localized_name: Option<String>,
    pub category: Category,
    pub description: Option<String>,
    pub address: Option<String>,
    pub hours: Option<String>,
    pub price: Option<String>,
    pub transit: Option<String>,
    pub tip: Option<String>,
    pub rating: Rating,
    pub channel: Option<String>,
}

/// Empty input means "not set"
fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl PlaceCardDraft {
    /// Replace one field from raw input text, leaving the rest unchanged.
    ///
    /// Unknown category keys fall back to the default category; a rating
    /// that does not parse leaves the rating as it was.
    pub fn with_field(&self, field: DraftField, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            DraftField::Name => next.name = non_empty(value),
            DraftField::LocalizedName => next.localized_name = non_empty(value),
            DraftField::Category => next.category = Category::from_key(&value).unwrap_or_default(),
            DraftField::Description => next.description = non_empty(value),
            DraftField::Address => next.address = non_empty(value),
            DraftField::Hours => next.hours = non_empty(value),
            DraftField::Price => next.price = non_empty(value),
            DraftField::Transit => next.transit = non_empty(value),
            DraftField::Tip => next.tip = non_empty(value),
            DraftField::Rating => {
                if let Some(rating) = Rating::parse(&value) {
                    next.rating = rating;
                }
            }
            DraftField::Channel => next.channel = non_empty(value),
        }
        next
    }

    pub fn with_category(&self, category: Category) -> Self {
        Self {
            category,
            ..self.clone()
        }
    }

    pub fn with_rating(&self, rating: Rating) -> Self {
        Self {
            rating,
            ..self.clone()
        }
    }

    /// Current text of a field as shown in its input ("" when unset)
    pub fn field_text(&self, field: DraftField) -> String {
        let text = match field {
            DraftField::Name => self.name.as_deref(),
            DraftField::LocalizedName => self.localized_name.as_deref(),
            DraftField::Category => Some(self.category.key()),
            DraftField::Description => self.description.as_deref(),
            DraftField::Address => self.address.as_deref(),
            DraftField::Hours => self.hours.as_deref(),
            DraftField::Price => self.price.as_deref(),
            DraftField::Transit => self.transit.as_deref(),
            DraftField::Tip => self.tip.as_deref(),
            DraftField::Rating => return self.rating.value().to_string(),
            DraftField::Channel => self.channel.as_deref(),
        };
        text.unwrap_or_default().to_string()
    }

    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }

    /// Fresh draft for the next place; only the channel carries over
    pub fn reset(&self) -> Self {
        Self {
            channel: self.channel.clone(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PlaceCardDraft {
        PlaceCardDraft::default()
            .with_field(DraftField::Name, "Gyeongbokgung Palace")
            .with_field(DraftField::LocalizedName, "경복궁")
            .with_field(DraftField::Address, "Jongno-gu, Seoul")
            .with_field(DraftField::Channel, "Mom's Korea Travel")
    }

    #[test]
    fn test_defaults() {
        let draft = PlaceCardDraft::default();
        assert_eq!(draft.category, Category::Restaurant);
        assert_eq!(draft.rating.value(), 4);
        assert!(draft.name.is_none());
        assert!(!draft.has_name());
    }

    #[test]
    fn test_with_field_touches_only_that_field() {
        let before = sample();
        let after = before.with_field(DraftField::Hours, "9am – 6pm daily");

        assert_eq!(after.hours.as_deref(), Some("9am – 6pm daily"));
        assert_eq!(PlaceCardDraft { hours: None, ..after.clone() }, before);
        // original draft is untouched
        assert!(before.hours.is_none());
    }

    #[test]
    fn test_empty_input_clears_field() {
        let draft = sample().with_field(DraftField::Address, "");
        assert!(draft.address.is_none());
        assert_eq!(draft.field_text(DraftField::Address), "");
    }

    #[test]
    fn test_category_from_text() {
        let draft = sample().with_field(DraftField::Category, "attraction");
        assert_eq!(draft.category, Category::Attraction);

        let draft = draft.with_field(DraftField::Category, "museum");
        assert_eq!(draft.category, Category::Restaurant);
    }

    #[test]
    fn test_rating_from_text() {
        let draft = sample().with_field(DraftField::Rating, "3");
        assert_eq!(draft.rating.value(), 3);

        let draft = draft.with_field(DraftField::Rating, "9");
        assert_eq!(draft.rating.value(), 5);

        let draft = draft.with_field(DraftField::Rating, "0");
        assert_eq!(draft.rating.value(), 1);

        let draft = draft.with_field(DraftField::Rating, "lots");
        assert_eq!(draft.rating.value(), 1);
        assert_eq!(draft.field_text(DraftField::Rating), "1");
    }

    #[test]
    fn test_reset_keeps_channel_only() {
        let draft = sample()
            .with_category(Category::Cafe)
            .with_rating(Rating::new(2))
            .with_field(DraftField::Tip, "Go early");

        let fresh = draft.reset();
        assert_eq!(fresh.channel.as_deref(), Some("Mom's Korea Travel"));
        assert_eq!(
            fresh,
            PlaceCardDraft {
                channel: Some("Mom's Korea Travel".to_string()),
                ..PlaceCardDraft::default()
            }
        );
    }

    #[test]
    fn test_category_keys_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
    }
}
