//! Travel profile of the signed-in user (`/users/profile`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient;

/// Stored travel preferences. Fields the client does not know about are kept
/// in `extra` and sent back unchanged on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub traveler_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub activity_level: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub special_interests: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub dietary_preferences: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub accessibility_needs: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub preferred_languages: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub budget_preference: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Editable profile fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    TravelerType,
    ActivityLevel,
    BudgetPreference,
    SpecialInterests,
    DietaryPreferences,
    AccessibilityNeeds,
    PreferredLanguages,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        Self::TravelerType,
        Self::ActivityLevel,
        Self::BudgetPreference,
        Self::SpecialInterests,
        Self::DietaryPreferences,
        Self::AccessibilityNeeds,
        Self::PreferredLanguages,
    ];
}

impl Profile {
    pub fn get(&self, field: ProfileField) -> &str {
        self.slot(field).as_deref().unwrap_or("")
    }

    /// Set a field from form input; blank input clears it.
    pub fn set(&mut self, field: ProfileField, value: &str) {
        *self.slot_mut(field) = super::trip::non_blank(value);
    }

    fn slot(&self, field: ProfileField) -> &Option<String> {
        match field {
            ProfileField::TravelerType => &self.traveler_type,
            ProfileField::ActivityLevel => &self.activity_level,
            ProfileField::BudgetPreference => &self.budget_preference,
            ProfileField::SpecialInterests => &self.special_interests,
            ProfileField::DietaryPreferences => &self.dietary_preferences,
            ProfileField::AccessibilityNeeds => &self.accessibility_needs,
            ProfileField::PreferredLanguages => &self.preferred_languages,
        }
    }

    fn slot_mut(&mut self, field: ProfileField) -> &mut Option<String> {
        match field {
            ProfileField::TravelerType => &mut self.traveler_type,
            ProfileField::ActivityLevel => &mut self.activity_level,
            ProfileField::BudgetPreference => &mut self.budget_preference,
            ProfileField::SpecialInterests => &mut self.special_interests,
            ProfileField::DietaryPreferences => &mut self.dietary_preferences,
            ProfileField::AccessibilityNeeds => &mut self.accessibility_needs,
            ProfileField::PreferredLanguages => &mut self.preferred_languages,
        }
    }

    /// Body for `POST /users/profile`: the profile plus the owner's id.
    pub fn to_update(&self, user_id: &str) -> Value {
        let mut body = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        body.insert("user_id".to_string(), Value::String(user_id.to_string()));
        Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_survive_update() {
        let profile: Profile = serde_json::from_str(
            r#"{"traveler_type":"solo","budget_preference":null,"user_id":"old","favorite_color":"teal"}"#,
        )
        .unwrap();
        assert_eq!(profile.get(ProfileField::TravelerType), "solo");
        assert_eq!(profile.get(ProfileField::BudgetPreference), "");

        let body = profile.to_update("u1");
        assert_eq!(body["user_id"], "u1");
        assert_eq!(body["favorite_color"], "teal");
        assert_eq!(body["traveler_type"], "solo");
    }

    #[test]
    fn test_set_trims_and_clears() {
        let mut profile = Profile::default();
        profile.set(ProfileField::PreferredLanguages, " English, Spanish ");
        assert_eq!(profile.get(ProfileField::PreferredLanguages), "English, Spanish");

        profile.set(ProfileField::PreferredLanguages, "   ");
        assert!(profile.preferred_languages.is_none());
    }
}
