//! Theme / Category Registry
//!
//! Static lookup tables consulted by the card renderer and pickers.

use crate::models::Category;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryDefinition {
    pub category: Category,
    pub key: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

impl CategoryDefinition {
    /// Badge text, e.g. "🏯 Attraction"
    pub fn badge(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeDefinition {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub tagline: &'static str,
    pub bg: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub sub: &'static str,
    /// Tip callout background
    pub tip_tint: &'static str,
    /// Footer top border
    pub divider: &'static str,
}

pub const CATEGORIES: &[CategoryDefinition] = &[
    CategoryDefinition { category: Category::Restaurant, key: "restaurant", icon: "🍜", label: "Restaurant", color: "#E8572A" },
    CategoryDefinition { category: Category::Cafe, key: "cafe", icon: "☕", label: "Café", color: "#8B5E3C" },
    CategoryDefinition { category: Category::Attraction, key: "attraction", icon: "🏯", label: "Attraction", color: "#2A6EE8" },
    CategoryDefinition { category: Category::Shopping, key: "shopping", icon: "🛍️", label: "Shopping", color: "#9B2AE8" },
    CategoryDefinition { category: Category::Nature, key: "nature", icon: "🌸", label: "Nature", color: "#2AAE5A" },
    CategoryDefinition { category: Category::Bar, key: "bar", icon: "🍺", label: "Bar & Nightlife", color: "#1A1A2E" },
];

pub const THEMES: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "bright",
        icon: "☀️",
        label: "Bright",
        tagline: "Clean, modern and easy to read",
        bg: "#FFFDF7",
        accent: "#E8572A",
        text: "#1A1A1A",
        sub: "#6B6B6B",
        tip_tint: "rgba(232,87,42,0.08)",
        divider: "rgba(0,0,0,0.07)",
    },
    ThemeDefinition {
        id: "seoul",
        icon: "🌃",
        label: "Seoul Night",
        tagline: "Moody and stylish for nightlife & trendy spots",
        bg: "#0D0D1A",
        accent: "#FF6B9D",
        text: "#F0F0FF",
        sub: "#9090B0",
        tip_tint: "rgba(255,107,157,0.12)",
        divider: "rgba(255,255,255,0.08)",
    },
    ThemeDefinition {
        id: "hanok",
        icon: "🏘️",
        label: "Hanok",
        tagline: "Warm and cozy, great for traditional places",
        bg: "#F5EFE0",
        accent: "#8B4513",
        text: "#2C1810",
        sub: "#7A6355",
        tip_tint: "rgba(139,69,19,0.1)",
        divider: "rgba(0,0,0,0.07)",
    },
];

pub const DEFAULT_THEME_ID: &str = "bright";

/// Category by key, falling back to the first entry
pub fn category_by_key(key: &str) -> &'static CategoryDefinition {
    CATEGORIES
        .iter()
        .find(|c| c.key == key)
        .unwrap_or(&CATEGORIES[0])
}

pub fn category_def(category: Category) -> &'static CategoryDefinition {
    category_by_key(category.key())
}

/// Theme by id, falling back to the first entry
pub fn theme_by_id(id: &str) -> &'static ThemeDefinition {
    THEMES.iter().find(|t| t.id == id).unwrap_or(&THEMES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_definition() {
        assert_eq!(CATEGORIES.len(), Category::ALL.len());
        for category in Category::ALL {
            let def = category_def(category);
            assert_eq!(def.category, category);
            assert_eq!(def.key, category.key());
        }
    }

    #[test]
    fn test_unknown_ids_fall_back_to_first() {
        assert_eq!(category_by_key("museum").key, "restaurant");
        assert_eq!(category_by_key("").key, "restaurant");
        assert_eq!(theme_by_id("neon").id, "bright");
        assert_eq!(theme_by_id(DEFAULT_THEME_ID).id, "bright");
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(category_by_key("attraction").color, "#2A6EE8");
        assert_eq!(theme_by_id("seoul").bg, "#0D0D1A");
        assert_eq!(theme_by_id("hanok").tip_tint, "rgba(139,69,19,0.1)");
    }

    #[test]
    fn test_badge_text() {
        assert_eq!(category_by_key("bar").badge(), "🍺 Bar & Nightlife");
    }
}
