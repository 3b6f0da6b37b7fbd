//! Card Layout
//!
//! Pure description of a rendered place card. `InfoCard` turns this into
//! DOM; everything that decides *what* appears on the card lives here.

use crate::models::PlaceCardDraft;
use crate::registry::{category_by_key, theme_by_id, CategoryDefinition, ThemeDefinition};

pub const NAME_PLACEHOLDER: &str = "Place Name";
pub const CHANNEL_FALLBACK: &str = "Korea Travel Vlog";
pub const STAR_COUNT: u8 = 5;
pub const FILLED_STAR: char = '★';
pub const EMPTY_STAR: char = '☆';

/// One cell of the two-column info grid
#[derive(Debug, Clone, PartialEq)]
pub struct InfoCell {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stars {
    pub filled: u8,
    pub empty: u8,
}

impl Stars {
    pub fn new(rating: u8) -> Self {
        let filled = rating.clamp(1, STAR_COUNT);
        Self {
            filled,
            empty: STAR_COUNT - filled,
        }
    }

    pub fn glyphs(&self) -> String {
        std::iter::repeat(FILLED_STAR)
            .take(self.filled as usize)
            .chain(std::iter::repeat(EMPTY_STAR).take(self.empty as usize))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub category: &'static CategoryDefinition,
    pub theme: &'static ThemeDefinition,
    /// Header background (the category color)
    pub header_bg: &'static str,
    pub badge: String,
    pub name: String,
    pub localized_name: Option<String>,
    /// Already wrapped in quotes
    pub description: Option<String>,
    pub cells: Vec<InfoCell>,
    pub tip: Option<String>,
    pub channel: String,
    pub stars: Stars,
}

impl CardLayout {
    pub fn new(draft: &PlaceCardDraft, category_key: &str, theme_id: &str) -> Self {
        let category = category_by_key(category_key);
        let theme = theme_by_id(theme_id);

        let cells = [
            ("📍", "Location", &draft.address),
            ("🕐", "Hours", &draft.hours),
            ("💰", "Price Range", &draft.price),
            ("🚇", "Subway", &draft.transit),
        ]
        .into_iter()
        .filter_map(|(icon, label, value)| {
            value.as_ref().map(|value| InfoCell {
                icon,
                label,
                value: value.clone(),
            })
        })
        .collect();

        Self {
            category,
            theme,
            header_bg: category.color,
            badge: category.badge(),
            name: draft
                .name
                .clone()
                .unwrap_or_else(|| NAME_PLACEHOLDER.to_string()),
            localized_name: draft.localized_name.clone(),
            description: draft.description.as_ref().map(|d| format!("\"{}\"", d)),
            cells,
            tip: draft.tip.clone(),
            channel: draft
                .channel
                .clone()
                .unwrap_or_else(|| CHANNEL_FALLBACK.to_string()),
            stars: Stars::new(draft.rating.value()),
        }
    }

    /// Layout for the draft's own category
    pub fn for_draft(draft: &PlaceCardDraft, theme_id: &str) -> Self {
        Self::new(draft, draft.category.key(), theme_id)
    }

    /// Tip callout border, category color at ~20% alpha
    pub fn tip_border(&self) -> String {
        format!("{}33", self.category.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, DraftField, Rating};

    fn palace() -> PlaceCardDraft {
        PlaceCardDraft::default()
            .with_field(DraftField::Name, "Gyeongbokgung Palace")
            .with_field(DraftField::Category, "attraction")
            .with_field(DraftField::Rating, "5")
    }

    #[test]
    fn test_palace_card_bright() {
        let card = CardLayout::for_draft(&palace(), "bright");
        assert_eq!(card.header_bg, "#2A6EE8");
        assert_eq!(card.stars, Stars { filled: 5, empty: 0 });
        assert_eq!(card.stars.glyphs(), "★★★★★");
        assert_eq!(card.theme.id, "bright");
        assert_eq!(card.name, "Gyeongbokgung Palace");
    }

    #[test]
    fn test_layout_is_pure() {
        let draft = palace()
            .with_field(DraftField::Tip, "Rent a hanbok for free entry")
            .with_field(DraftField::Hours, "9am – 6pm");
        assert_eq!(
            CardLayout::new(&draft, "attraction", "hanok"),
            CardLayout::new(&draft, "attraction", "hanok")
        );
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let card = CardLayout::for_draft(&palace(), "bright");
        assert!(card.cells.is_empty());
        assert!(card.tip.is_none());
        assert!(card.description.is_none());
        assert!(card.localized_name.is_none());

        let draft = palace()
            .with_field(DraftField::Hours, "24h")
            .with_field(DraftField::Transit, "Gyeongbokgung Stn.");
        let card = CardLayout::for_draft(&draft, "bright");
        let labels: Vec<_> = card.cells.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Hours", "Subway"]);
        assert!(!labels.contains(&"Location"));
    }

    #[test]
    fn test_description_is_quoted() {
        let draft = palace().with_field(DraftField::Description, "A royal gem.");
        let card = CardLayout::for_draft(&draft, "bright");
        assert_eq!(card.description.as_deref(), Some("\"A royal gem.\""));
    }

    #[test]
    fn test_three_stars() {
        let draft = palace().with_rating(Rating::new(3));
        let card = CardLayout::for_draft(&draft, "seoul");
        assert_eq!(card.stars, Stars { filled: 3, empty: 2 });
        assert_eq!(card.stars.glyphs(), "★★★☆☆");
    }

    #[test]
    fn test_stars_clamp_out_of_range() {
        assert_eq!(Stars::new(0), Stars { filled: 1, empty: 4 });
        assert_eq!(Stars::new(9), Stars { filled: 5, empty: 0 });
    }

    #[test]
    fn test_fallbacks() {
        let card = CardLayout::new(&PlaceCardDraft::default(), "unknown", "unknown");
        assert_eq!(card.category.category, Category::Restaurant);
        assert_eq!(card.theme.id, "bright");
        assert_eq!(card.name, NAME_PLACEHOLDER);
        assert_eq!(card.channel, CHANNEL_FALLBACK);
        assert_eq!(card.tip_border(), "#E8572A33");
    }
}
