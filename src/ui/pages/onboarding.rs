// src/ui/pages/onboarding.rs - Five-step workspace setup wizard

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::catalog::{
    self,
    content::{
        Choice, CONNECT_PLATFORMS, GOALS, INDUSTRIES, ONBOARDING_STEP_TITLES, REVENUE_RANGES,
        STORE_PLATFORMS,
    },
};
use crate::guard::{self, GuardDecision};
use crate::model::{WorkspacePatch, ONBOARDING_STEPS};
use crate::ui::{
    components::{Button, FullPageSpinner, Input, ProgressBar, Select},
    router::{use_guard, Route},
    state::use_session,
};
use crate::utils;

/// Everything the wizard collects before it is applied to the workspace
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingForm {
    pub brand_name: String,
    pub website: String,
    pub industry: String,
    pub monthly_revenue: String,
    pub country: String,
    pub store_platform: String,
    pub store_url: String,
    pub connected_platforms: Vec<String>,
    pub goals: Vec<String>,
}

impl OnboardingForm {
    /// Fields applied on completion, together with the completion flag
    pub fn to_patch(&self) -> WorkspacePatch {
        WorkspacePatch {
            brand_name: Some(self.brand_name.clone()),
            website: Some(self.website.clone()),
            industry: Some(self.industry.clone()),
            monthly_revenue: Some(self.monthly_revenue.clone()),
            country: Some(self.country.clone()),
            goals: Some(self.goals.clone()),
            onboarding_completed: Some(true),
            ..WorkspacePatch::default()
        }
    }
}

/// Adds `item` when absent, removes it when present
pub fn toggle_item(items: &mut Vec<String>, item: &str) {
    if let Some(pos) = items.iter().position(|i| i == item) {
        items.remove(pos);
    } else {
        items.push(item.to_string());
    }
}

fn options(values: &[&str]) -> Vec<(String, String)> {
    std::iter::once((String::new(), "Select...".to_string()))
        .chain(values.iter().map(|v| (v.to_string(), v.to_string())))
        .collect()
}

#[component]
pub fn Onboarding() -> Element {
    let decision = use_guard(guard::evaluate_onboarding);

    match decision {
        GuardDecision::Render => rsx! { Wizard {} },
        GuardDecision::ShowLoading => rsx! { FullPageSpinner { message: "Loading...".to_string() } },
        _ => rsx! { FullPageSpinner { message: "Redirecting...".to_string() } },
    }
}

#[component]
fn Wizard() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let mut step = use_signal(|| session.manager.onboarding_step());
    let mut form = use_signal(OnboardingForm::default);
    let mut finishing = use_signal(|| false);

    let go_to = use_callback({
        let session = session.clone();
        move |target: u8| {
            let progress = session.set_onboarding_step(target);
            step.set(progress.step);
        }
    });

    let handle_complete = {
        let session = session.clone();
        move |_: MouseEvent| {
            finishing.set(true);
            let session = session.clone();
            let delay = session.manager.config().onboarding_delay();
            spawn(async move {
                utils::sleep(delay).await;
                let patch = form.read().to_patch();
                session.update_workspace(patch);
                session.complete_onboarding();
                tracing::info!("Workspace onboarding finished");
                navigator.push(Route::Overview {});
            });
        }
    };

    let current = step();
    let title = ONBOARDING_STEP_TITLES
        .get(usize::from(current.saturating_sub(1)))
        .copied()
        .unwrap_or_default();
    let percent = f64::from(current) / f64::from(ONBOARDING_STEPS) * 100.0;

    let body = match current {
        1 => rsx! {
            div {
                class: "space-y-4",
                Input {
                    id: "brand".to_string(),
                    label: "Brand name".to_string(),
                    value: form.read().brand_name.clone(),
                    oninput: move |v: String| form.write().brand_name = v
                }
                Input {
                    id: "website".to_string(),
                    label: "Website".to_string(),
                    placeholder: "https://yourstore.com".to_string(),
                    value: form.read().website.clone(),
                    oninput: move |v: String| form.write().website = v
                }
                Select {
                    id: "industry".to_string(),
                    label: "Industry".to_string(),
                    value: form.read().industry.clone(),
                    options: options(&INDUSTRIES),
                    onchange: move |v: String| form.write().industry = v
                }
                Select {
                    id: "revenue".to_string(),
                    label: "Monthly revenue".to_string(),
                    value: form.read().monthly_revenue.clone(),
                    options: options(&REVENUE_RANGES),
                    onchange: move |v: String| form.write().monthly_revenue = v
                }
                Input {
                    id: "country".to_string(),
                    label: "Country".to_string(),
                    value: form.read().country.clone(),
                    oninput: move |v: String| form.write().country = v
                }
            }
        },
        2 => rsx! {
            div {
                class: "space-y-4",
                ChoiceGrid {
                    choices: STORE_PLATFORMS.to_vec(),
                    selected: vec![form.read().store_platform.clone()],
                    on_select: move |id: String| form.write().store_platform = id
                }
                Input {
                    id: "store-url".to_string(),
                    label: "Store URL".to_string(),
                    placeholder: "yourstore.myshopify.com".to_string(),
                    value: form.read().store_url.clone(),
                    oninput: move |v: String| form.write().store_url = v
                }
            }
        },
        3 => rsx! {
            ChoiceGrid {
                choices: CONNECT_PLATFORMS.to_vec(),
                selected: form.read().connected_platforms.clone(),
                on_select: move |id: String| toggle_item(&mut form.write().connected_platforms, &id)
            }
        },
        4 => rsx! {
            ChoiceGrid {
                choices: GOALS.to_vec(),
                selected: form.read().goals.clone(),
                on_select: move |id: String| toggle_item(&mut form.write().goals, &id)
            }
        },
        _ => rsx! {
            div {
                class: "grid grid-cols-2 gap-3",
                for agent in catalog::agents() {
                    div {
                        key: "{agent.id}",
                        class: "p-3 rounded-lg border border-gray-200 flex items-center",
                        span { class: "text-2xl mr-3", "{agent.icon}" }
                        div {
                            p { class: "text-sm font-medium text-gray-900", "{agent.name}" }
                            p { class: "text-xs text-gray-500", "{agent.description}" }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-br from-indigo-50 via-white to-purple-50 py-12 px-4",
            div {
                class: "max-w-2xl mx-auto",
                div {
                    class: "mb-8",
                    div {
                        class: "flex justify-between text-sm text-gray-600 mb-2",
                        span { "Step {current} of {ONBOARDING_STEPS}" }
                        span { "{title}" }
                    }
                    ProgressBar { value: percent }
                }
                div {
                    class: "bg-white shadow-lg rounded-2xl p-8",
                    h2 { class: "text-2xl font-bold text-gray-900 mb-6", "{title}" }
                    {body}
                    div {
                        class: "mt-8 flex justify-between",
                        Button {
                            variant: "secondary".to_string(),
                            disabled: current <= 1 || finishing(),
                            onclick: move |_: MouseEvent| go_to.call(current.saturating_sub(1)),
                            "Back"
                        }
                        if current < ONBOARDING_STEPS {
                            Button {
                                onclick: move |_: MouseEvent| go_to.call(current + 1),
                                "Continue"
                            }
                        } else {
                            Button {
                                loading: finishing(),
                                onclick: handle_complete,
                                "Launch my AI team"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChoiceGrid(choices: Vec<Choice>, selected: Vec<String>, on_select: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "grid sm:grid-cols-2 gap-3",
            for choice in choices {
                button {
                    key: "{choice.id}",
                    r#type: "button",
                    class: format!(
                        "p-4 rounded-xl border text-left transition-colors {}",
                        if selected.iter().any(|s| s == choice.id) {
                            "border-indigo-600 bg-indigo-50"
                        } else {
                            "border-gray-200 hover:border-gray-300"
                        }
                    ),
                    onclick: move |_| on_select.call(choice.id.to_string()),
                    div { class: "text-2xl", "{choice.icon}" }
                    p { class: "mt-2 font-medium text-gray-900", "{choice.title}" }
                    p { class: "text-sm text-gray-500", "{choice.description}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_carries_collected_fields() {
        let form = OnboardingForm {
            brand_name: "Acme".to_string(),
            industry: "Electronics".to_string(),
            goals: vec!["sales".to_string()],
            store_url: "acme.myshopify.com".to_string(),
            ..OnboardingForm::default()
        };
        let patch = form.to_patch();

        assert_eq!(patch.brand_name.as_deref(), Some("Acme"));
        assert_eq!(patch.industry.as_deref(), Some("Electronics"));
        assert_eq!(patch.goals, Some(vec!["sales".to_string()]));
        assert_eq!(patch.onboarding_completed, Some(true));
        // store details are not part of the workspace record
        assert_eq!(patch.currency, None);
        assert_eq!(patch.plan, None);
    }

    #[test]
    fn test_toggle_item() {
        let mut goals = vec!["sales".to_string()];
        toggle_item(&mut goals, "traffic");
        assert_eq!(goals, vec!["sales", "traffic"]);
        toggle_item(&mut goals, "sales");
        assert_eq!(goals, vec!["traffic"]);
    }

    #[test]
    fn test_select_options_start_blank() {
        let opts = options(&REVENUE_RANGES);
        assert_eq!(opts.len(), REVENUE_RANGES.len() + 1);
        assert_eq!(opts[0].0, "");
    }
}
