//! Four-step questionnaire shown before a trip is generated.
//!
//! | Step | Answer | Required |
//! |------|--------|----------|
//! | [`WizardStep::Traveler`] | [`TravelerType`] | yes |
//! | [`WizardStep::Activity`] | [`ActivityLevel`] | yes |
//! | [`WizardStep::Budget`] | [`BudgetPreference`] | yes |
//! | [`WizardStep::Preferences`] | interests, diet, notes | no |

use api::models::{ActivityLevel, BudgetPreference, TravelerType, TripPreferences};
use dioxus::prelude::*;

use crate::icons::{FaChevronLeft, FaChevronRight, FaXmark};
use crate::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Traveler,
    Activity,
    Budget,
    Preferences,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [Self::Traveler, Self::Activity, Self::Budget, Self::Preferences];

    pub fn index(self) -> usize {
        match self {
            Self::Traveler => 0,
            Self::Activity => 1,
            Self::Budget => 2,
            Self::Preferences => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Traveler => "Who's traveling?",
            Self::Activity => "Activity Level",
            Self::Budget => "Budget Range",
            Self::Preferences => "Preferences & Notes",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Traveler => "Help us tailor the perfect experience",
            Self::Activity => "Set the pace for your journey",
            Self::Budget => "Find the perfect balance",
            Self::Preferences => "Tell us more about your interests",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn is_complete(self, answers: &TripPreferences) -> bool {
        match self {
            Self::Traveler => answers.traveler_type.is_some(),
            Self::Activity => answers.activity_level.is_some(),
            Self::Budget => answers.budget_preference.is_some(),
            Self::Preferences => true,
        }
    }

    /// Progress bar fill for segment `segment` while on this step.
    pub fn segment_fill(self, segment: usize) -> &'static str {
        match self.index().cmp(&segment) {
            std::cmp::Ordering::Greater => "100%",
            std::cmp::Ordering::Equal => "50%",
            std::cmp::Ordering::Less => "0%",
        }
    }
}

/// One selectable card of a choice step.
#[derive(Debug, Clone, PartialEq)]
struct Choice {
    value: &'static str,
    label: &'static str,
    icon: &'static str,
    description: &'static str,
    selected: bool,
}

fn choices(step: WizardStep, answers: &TripPreferences) -> Vec<Choice> {
    match step {
        WizardStep::Traveler => TravelerType::ALL
            .iter()
            .map(|t| Choice {
                value: t.value(),
                label: t.label(),
                icon: t.icon(),
                description: t.description(),
                selected: answers.traveler_type == Some(*t),
            })
            .collect(),
        WizardStep::Activity => ActivityLevel::ALL
            .iter()
            .map(|l| Choice {
                value: l.value(),
                label: l.label(),
                icon: l.icon(),
                description: l.description(),
                selected: answers.activity_level == Some(*l),
            })
            .collect(),
        WizardStep::Budget => BudgetPreference::ALL
            .iter()
            .map(|b| Choice {
                value: b.value(),
                label: b.label(),
                icon: b.icon(),
                description: b.description(),
                selected: answers.budget_preference == Some(*b),
            })
            .collect(),
        WizardStep::Preferences => Vec::new(),
    }
}

fn select(step: WizardStep, answers: &mut TripPreferences, value: &str) {
    match step {
        WizardStep::Traveler => answers.traveler_type = TravelerType::from_value(value),
        WizardStep::Activity => answers.activity_level = ActivityLevel::from_value(value),
        WizardStep::Budget => answers.budget_preference = BudgetPreference::from_value(value),
        WizardStep::Preferences => {}
    }
}

fn choice_class(selected: bool) -> &'static str {
    if selected {
        "wizard-choice wizard-choice--selected"
    } else {
        "wizard-choice"
    }
}

fn choice_card(choice: Choice, step: WizardStep, mut answers: Signal<TripPreferences>) -> Element {
    let Choice { value, label, icon, description, selected } = choice;
    rsx! {
        button {
            key: "{value}",
            class: choice_class(selected),
            onclick: move |_| select(step, &mut answers.write(), value),
            div {
                class: "wizard-choice-title",
                span { class: "wizard-choice-icon", "{icon}" }
                h4 { "{label}" }
            }
            p { class: "muted", "{description}" }
        }
    }
}

#[component]
pub fn TripWizard(
    destination: String,
    /// A create request is in flight.
    submitting: bool,
    on_close: EventHandler<()>,
    on_submit: EventHandler<TripPreferences>,
) -> Element {
    let mut step = use_signal(|| WizardStep::Traveler);
    let mut answers = use_signal(TripPreferences::default);

    let current = step();
    let can_continue = current.is_complete(&answers.read()) && !submitting;
    let options = choices(current, &answers.read());
    let title = current.title();
    let subtitle = current.subtitle();
    let (interests, dietary, notes) = {
        let a = answers.read();
        (
            a.special_interests.clone(),
            a.dietary_preferences.clone(),
            a.additional_notes.clone(),
        )
    };
    let back_class = if current.prev().is_some() {
        "wizard-back"
    } else {
        "wizard-back wizard-back--hidden"
    };

    let handle_next = move |_| match step().next() {
        Some(next) => step.set(next),
        None => on_submit.call(answers()),
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "wizard",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    class: "wizard-header",
                    button {
                        class: "wizard-close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 16, height: 16 }
                    }
                    h2 { "Plan Your Trip to {destination}" }
                    div {
                        class: "wizard-progress",
                        for segment in 0..WizardStep::ALL.len() {
                            div {
                                key: "{segment}",
                                class: "wizard-progress-segment",
                                div {
                                    class: "wizard-progress-fill",
                                    width: current.segment_fill(segment),
                                }
                            }
                        }
                    }
                }

                div {
                    class: "wizard-body",
                    h3 { "{title}" }
                    p { class: "muted", "{subtitle}" }

                    if current == WizardStep::Preferences {
                        div {
                            class: "wizard-fields",
                            label { "Special Interests" }
                            input {
                                r#type: "text",
                                placeholder: "Photography, Local Markets, Street Food...",
                                value: "{interests}",
                                oninput: move |evt| answers.write().special_interests = evt.value(),
                            }
                            label { "Dietary Preferences" }
                            input {
                                r#type: "text",
                                placeholder: "Vegetarian, Gluten-free, Halal...",
                                value: "{dietary}",
                                oninput: move |evt| answers.write().dietary_preferences = evt.value(),
                            }
                            label { "Additional Notes" }
                            textarea {
                                placeholder: "Any special requests, must-see places, or other preferences...",
                                value: "{notes}",
                                oninput: move |evt| answers.write().additional_notes = evt.value(),
                            }
                        }
                    } else {
                        div {
                            class: "wizard-choices",
                            for choice in options {
                                {choice_card(choice, current, answers)}
                            }
                        }
                    }
                }

                div {
                    class: "wizard-footer",
                    button {
                        class: back_class,
                        onclick: move |_| {
                            if let Some(prev) = step().prev() {
                                step.set(prev);
                            }
                        },
                        Icon { icon: FaChevronLeft, width: 14, height: 14 }
                        "Back"
                    }
                    button {
                        class: "button-primary",
                        disabled: !can_continue,
                        onclick: handle_next,
                        if current.is_last() {
                            if submitting { "Creating..." } else { "Create Trip" }
                        } else {
                            "Next"
                        }
                        Icon { icon: FaChevronRight, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
