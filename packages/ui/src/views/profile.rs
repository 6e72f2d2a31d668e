//! Travel profile editor.

use api::models::{ActivityLevel, BudgetPreference, Profile, ProfileField, TravelerType};
use api::ApiError;
use dioxus::prelude::*;

use crate::auth::{use_auth, use_trips_client};
use crate::icons::FaSpinner;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/assets/hopper.css");

#[derive(Debug, Clone, PartialEq)]
enum SaveStatus {
    Idle,
    Saving,
    Saved,
    Failed,
}

fn field_label(field: ProfileField) -> &'static str {
    match field {
        ProfileField::TravelerType => "Traveler Type",
        ProfileField::ActivityLevel => "Activity Level",
        ProfileField::BudgetPreference => "Budget Preference",
        ProfileField::SpecialInterests => "Special Interests",
        ProfileField::DietaryPreferences => "Dietary Preferences",
        ProfileField::AccessibilityNeeds => "Accessibility Needs",
        ProfileField::PreferredLanguages => "Preferred Languages",
    }
}

fn field_placeholder(field: ProfileField) -> &'static str {
    match field {
        ProfileField::SpecialInterests => "e.g. Museums, hiking, street food",
        ProfileField::DietaryPreferences => "e.g. Vegetarian, gluten free",
        ProfileField::AccessibilityNeeds => "e.g. Wheelchair access",
        ProfileField::PreferredLanguages => "e.g. English, Spanish",
        _ => "",
    }
}

/// `(value, label)` pairs for fields picked from a fixed list; `None` for free text.
fn field_options(field: ProfileField) -> Option<Vec<(&'static str, &'static str)>> {
    match field {
        ProfileField::TravelerType => {
            Some(TravelerType::ALL.iter().map(|t| (t.value(), t.label())).collect())
        }
        ProfileField::ActivityLevel => {
            Some(ActivityLevel::ALL.iter().map(|a| (a.value(), a.label())).collect())
        }
        ProfileField::BudgetPreference => {
            Some(BudgetPreference::ALL.iter().map(|b| (b.value(), b.label())).collect())
        }
        _ => None,
    }
}

/// The profile the form starts from. A failed load leaves an empty form so the
/// first save creates the profile.
fn initial_draft(loaded: &Result<Profile, ApiError>) -> Profile {
    match loaded {
        Ok(profile) => profile.clone(),
        Err(e) => {
            tracing::warn!("Error fetching profile: {e}");
            Profile::default()
        }
    }
}

#[component]
pub fn ProfileView() -> Element {
    let auth = use_auth();
    let make_client = use_trips_client();
    let mut draft = use_signal(|| Option::<Profile>::None);
    let mut status = use_signal(|| SaveStatus::Idle);

    let load_client = make_client.clone();
    let loaded = use_resource(move || {
        let load_client = load_client.clone();
        async move { load_client()?.profile().await }
    });

    use_effect(move || {
        if let Some(result) = &*loaded.read() {
            if draft.peek().is_none() {
                draft.set(Some(initial_draft(result)));
            }
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let make_client = make_client.clone();
        spawn(async move {
            let (Some(profile), Some(user_id)) = (draft(), auth().user_id) else {
                return;
            };
            status.set(SaveStatus::Saving);
            let result = match make_client() {
                Ok(client) => client.save_profile(&profile, &user_id).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => status.set(SaveStatus::Saved),
                Err(e) => {
                    tracing::error!("Error updating profile: {e}");
                    status.set(SaveStatus::Failed);
                }
            }
        });
    };

    let Some(profile) = draft() else {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            div {
                class: "loading-state",
                Icon { icon: FaSpinner, width: 28, height: 28 }
            }
        };
    };

    let saving = status() == SaveStatus::Saving;
    let banner = match status() {
        SaveStatus::Saved => Some(("form-success", "Profile updated successfully!")),
        SaveStatus::Failed => Some(("form-error", "Failed to update profile. Please try again.")),
        _ => None,
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page profile",
            h1 { class: "view-title", "Travel " span { class: "gradient-text", "Profile" } }

            form {
                class: "profile-form",
                onsubmit: handle_save,

                if let Some((class, text)) = banner {
                    div { class: "{class}", "{text}" }
                }

                for field in ProfileField::ALL {
                    {profile_field(field, profile.get(field).to_string(), move |value: String| {
                        if let Some(p) = draft.write().as_mut() {
                            p.set(field, &value);
                        }
                    })}
                }

                button {
                    class: "button-primary",
                    r#type: "submit",
                    disabled: saving,
                    if saving { "Saving..." } else { "Save Profile" }
                }
            }
        }
    }
}

fn profile_field(
    field: ProfileField,
    current: String,
    mut on_change: impl FnMut(String) + 'static,
) -> Element {
    let label = field_label(field);
    let control = match field_options(field) {
        Some(options) => rsx! {
            select {
                value: "{current}",
                onchange: move |evt: FormEvent| on_change(evt.value()),
                option { value: "", "Select..." }
                for (value, text) in options {
                    option { value: "{value}", selected: value == current, "{text}" }
                }
            }
        },
        None => {
            let placeholder = field_placeholder(field);
            rsx! {
                input {
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{current}",
                    oninput: move |evt: FormEvent| on_change(evt.value()),
                }
            }
        }
    };

    rsx! {
        label {
            class: "form-label",
            span { "{label}" }
            {control}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_fields_list_every_option() {
        assert_eq!(field_options(ProfileField::TravelerType).map(|o| o.len()), Some(4));
        assert_eq!(field_options(ProfileField::ActivityLevel).map(|o| o.len()), Some(3));
        assert_eq!(field_options(ProfileField::BudgetPreference).map(|o| o.len()), Some(5));
        assert!(field_options(ProfileField::DietaryPreferences).is_none());
    }

    #[test]
    fn test_missing_profile_starts_an_empty_form() {
        let loaded = Err(ApiError::Status {
            status: 404,
            body: "Profile not found".into(),
        });
        assert_eq!(initial_draft(&loaded), Profile::default());
    }

    #[test]
    fn test_loaded_profile_seeds_the_form() {
        let mut profile = Profile::default();
        profile.set(ProfileField::DietaryPreferences, "Vegetarian");
        assert_eq!(initial_draft(&Ok(profile.clone())), profile);
    }

    #[test]
    fn test_every_field_has_a_label() {
        for field in ProfileField::ALL {
            assert!(!field_label(field).is_empty());
        }
    }
}
