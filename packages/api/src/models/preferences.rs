//! Travel preference vocabularies shared by the trip wizard and the profile form.
//!
//! Each enum serialises to the exact value the backend stores (`"solo"`,
//! `"moderate"`, `"ULTRA_LUXURY"`, ...) and carries the labels the UI shows.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelerType {
    Solo,
    Couple,
    Family,
    Group,
}

impl TravelerType {
    pub const ALL: [TravelerType; 4] = [Self::Solo, Self::Couple, Self::Family, Self::Group];

    pub fn value(self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Couple => "couple",
            Self::Family => "family",
            Self::Group => "group",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Solo => "Solo Adventurer",
            Self::Couple => "Traveling Duo",
            Self::Family => "Family Expedition",
            Self::Group => "Group Journey",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Solo => "Flexible schedule, personal interests",
            Self::Couple => "Romantic spots, shared experiences",
            Self::Family => "Kid-friendly activities",
            Self::Group => "Social activities, group dining",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Solo => "🏃",
            Self::Couple => "👫",
            Self::Family => "👨‍👩‍👧‍👦",
            Self::Group => "👥",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Relaxed,
    Moderate,
    Active,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] = [Self::Relaxed, Self::Moderate, Self::Active];

    pub fn value(self) -> &'static str {
        match self {
            Self::Relaxed => "relaxed",
            Self::Moderate => "moderate",
            Self::Active => "active",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Relaxed => "Relaxed & Easy",
            Self::Moderate => "Moderately Active",
            Self::Active => "Very Active",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Relaxed => "Leisurely pace, plenty of downtime",
            Self::Moderate => "Balance of activity and rest",
            Self::Active => "High-energy adventures",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Relaxed => "🌅",
            Self::Moderate => "🚶",
            Self::Active => "🏃",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetPreference {
    Budget,
    Comfort,
    Premium,
    Luxury,
    UltraLuxury,
}

impl BudgetPreference {
    pub const ALL: [BudgetPreference; 5] = [
        Self::Budget,
        Self::Comfort,
        Self::Premium,
        Self::Luxury,
        Self::UltraLuxury,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Self::Budget => "BUDGET",
            Self::Comfort => "COMFORT",
            Self::Premium => "PREMIUM",
            Self::Luxury => "LUXURY",
            Self::UltraLuxury => "ULTRA_LUXURY",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::Comfort => "Comfort",
            Self::Premium => "Premium",
            Self::Luxury => "Luxury",
            Self::UltraLuxury => "Ultra Luxury",
        }
    }

    /// Daily spend range shown next to the label.
    pub fn description(self) -> &'static str {
        match self {
            Self::Budget => "$50-100 per day",
            Self::Comfort => "$100-200 per day",
            Self::Premium => "$200-500 per day",
            Self::Luxury => "$500-1000 per day",
            Self::UltraLuxury => "$1000+ per day",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Budget => "💰",
            Self::Comfort => "💰💰",
            Self::Premium => "💰💰💰",
            Self::Luxury => "💰💰💰💰",
            Self::UltraLuxury => "💎",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.value() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_match_serde_names() {
        for t in TravelerType::ALL {
            assert_eq!(serde_json::to_value(t).unwrap(), t.value());
            assert_eq!(TravelerType::from_value(t.value()), Some(t));
        }
        for l in ActivityLevel::ALL {
            assert_eq!(serde_json::to_value(l).unwrap(), l.value());
            assert_eq!(ActivityLevel::from_value(l.value()), Some(l));
        }
        for b in BudgetPreference::ALL {
            assert_eq!(serde_json::to_value(b).unwrap(), b.value());
            assert_eq!(BudgetPreference::from_value(b.value()), Some(b));
        }
    }

    #[test]
    fn test_unknown_values() {
        assert_eq!(TravelerType::from_value("SOLO"), None);
        assert_eq!(BudgetPreference::from_value("cheap"), None);
    }
}
