// src/ui/pages/settings.rs - Profile, workspace, notification, billing, team and integration settings

use dioxus::prelude::*;

use crate::catalog::{
    self,
    content::{INDUSTRIES, PRICING_TIERS, SETTINGS_TABS},
};
use crate::model::{Plan, Workspace, WorkspacePatch};
use crate::ui::{
    components::{Alert, Avatar, Badge, Button, Card, Input, Select, TabItem, Tabs, Toggle},
    pages::PageWrapper,
    state::{use_session, use_snapshot},
};

const CURRENCIES: [&str; 5] = ["USD", "EUR", "GBP", "INR", "AUD"];

/// Editable subset of the workspace record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkspaceForm {
    pub name: String,
    pub brand_name: String,
    pub website: String,
    pub industry: String,
    pub country: String,
    pub currency: String,
}

impl WorkspaceForm {
    pub fn from_workspace(workspace: &Workspace) -> Self {
        Self {
            name: workspace.name.clone(),
            brand_name: workspace.brand_name.clone(),
            website: workspace.website.clone(),
            industry: workspace.industry.clone(),
            country: workspace.country.clone(),
            currency: workspace.currency.clone(),
        }
    }

    /// Only fields that differ from `current` end up in the patch
    pub fn diff(&self, current: &Workspace) -> WorkspacePatch {
        fn changed(new: &str, old: &str) -> Option<String> {
            (new != old).then(|| new.to_string())
        }

        WorkspacePatch {
            name: changed(&self.name, &current.name),
            brand_name: changed(&self.brand_name, &current.brand_name),
            website: changed(&self.website, &current.website),
            industry: changed(&self.industry, &current.industry),
            country: changed(&self.country, &current.country),
            currency: changed(&self.currency, &current.currency),
            ..WorkspacePatch::default()
        }
    }
}

/// Whether a pricing tier is the workspace's current plan
pub fn is_current_plan(tier_name: &str, plan: Plan) -> bool {
    tier_name == plan.label()
}

fn select_options(values: &[&str]) -> Vec<(String, String)> {
    values.iter().map(|v| (v.to_string(), v.to_string())).collect()
}

#[component]
pub fn Settings() -> Element {
    let mut tab = use_signal(|| SETTINGS_TABS[0].0.to_string());
    let tabs: Vec<TabItem> = SETTINGS_TABS.iter().map(|(id, label)| TabItem::new(*id, *label)).collect();

    let body = match tab().as_str() {
        "workspace" => rsx! { WorkspaceSettings {} },
        "notifications" => rsx! { NotificationSettings {} },
        "billing" => rsx! { BillingSettings {} },
        "team" => rsx! { TeamSettings {} },
        "integrations" => rsx! { IntegrationSettings {} },
        _ => rsx! { ProfileSettings {} },
    };

    rsx! {
        PageWrapper {
            title: "Settings".to_string(),
            Tabs {
                active_tab: tab(),
                tabs: tabs,
                on_tab_change: move |id: String| tab.set(id)
            }
            {body}
        }
    }
}

#[component]
fn ProfileSettings() -> Element {
    let snapshot = use_snapshot();
    let Some(user) = snapshot.user else {
        return rsx! { Alert { "No user is signed in" } };
    };

    rsx! {
        Card {
            title: "Profile".to_string(),
            div {
                class: "flex items-center mb-6",
                Avatar { name: user.name.clone(), src: user.avatar.clone() }
                div {
                    class: "ml-4",
                    p { class: "font-semibold text-gray-900", "{user.name}" }
                    p { class: "text-sm text-gray-500", "{user.email}" }
                }
            }
            div {
                class: "grid md:grid-cols-2 gap-4",
                Input { id: "profile-name".to_string(), label: "Full name".to_string(), value: user.name.clone(), disabled: true }
                Input { id: "profile-email".to_string(), label: "Email".to_string(), value: user.email.clone(), disabled: true }
            }
        }
    }
}

#[component]
fn WorkspaceSettings() -> Element {
    let session = use_session();
    let snapshot = use_snapshot();
    let mut form = use_signal(|| {
        snapshot
            .workspace
            .as_ref()
            .map(WorkspaceForm::from_workspace)
            .unwrap_or_default()
    });
    let mut saved = use_signal(|| None::<bool>);

    if snapshot.workspace.is_none() {
        return rsx! { Alert { variant: "warning".to_string(), "No workspace is loaded" } };
    }

    let handle_save = move |_: MouseEvent| {
        let Some(current) = session.manager.workspace() else {
            saved.set(Some(false));
            return;
        };
        let patch = form.read().diff(&current);
        if patch.is_empty() {
            saved.set(Some(true));
            return;
        }
        saved.set(Some(session.update_workspace(patch)));
    };

    rsx! {
        Card {
            title: "Workspace".to_string(),
            if let Some(ok) = saved() {
                if ok {
                    Alert { variant: "success".to_string(), class: "mb-4".to_string(), "Workspace settings saved" }
                } else {
                    Alert { variant: "error".to_string(), class: "mb-4".to_string(), "Could not save workspace settings" }
                }
            }
            div {
                class: "grid md:grid-cols-2 gap-4",
                Input {
                    id: "ws-name".to_string(),
                    label: "Workspace name".to_string(),
                    value: form.read().name.clone(),
                    oninput: move |v: String| form.write().name = v
                }
                Input {
                    id: "ws-brand".to_string(),
                    label: "Brand name".to_string(),
                    value: form.read().brand_name.clone(),
                    oninput: move |v: String| form.write().brand_name = v
                }
                Input {
                    id: "ws-website".to_string(),
                    label: "Website".to_string(),
                    value: form.read().website.clone(),
                    oninput: move |v: String| form.write().website = v
                }
                Select {
                    id: "ws-industry".to_string(),
                    label: "Industry".to_string(),
                    value: form.read().industry.clone(),
                    options: select_options(&INDUSTRIES),
                    onchange: move |v: String| form.write().industry = v
                }
                Input {
                    id: "ws-country".to_string(),
                    label: "Country".to_string(),
                    value: form.read().country.clone(),
                    oninput: move |v: String| form.write().country = v
                }
                Select {
                    id: "ws-currency".to_string(),
                    label: "Currency".to_string(),
                    value: form.read().currency.clone(),
                    options: select_options(&CURRENCIES),
                    onchange: move |v: String| form.write().currency = v
                }
            }
            div {
                class: "mt-6 flex justify-end",
                Button { onclick: handle_save, "Save changes" }
            }
        }
    }
}

#[component]
fn NotificationSettings() -> Element {
    let mut prefs = use_signal(|| {
        vec![
            ("Daily performance summary", true),
            ("AI action alerts", true),
            ("Budget warnings", true),
            ("Weekly report email", false),
            ("Product updates", false),
        ]
    });

    rsx! {
        Card {
            title: "Notifications".to_string(),
            ul {
                class: "divide-y divide-gray-100",
                for (index, (label, enabled)) in prefs.read().clone().into_iter().enumerate() {
                    li {
                        key: "{label}",
                        class: "py-3 flex items-center justify-between",
                        span { class: "text-sm text-gray-700", "{label}" }
                        Toggle {
                            checked: enabled,
                            on_change: move |value: bool| {
                                if let Some(pref) = prefs.write().get_mut(index) {
                                    pref.1 = value;
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BillingSettings() -> Element {
    let snapshot = use_snapshot();
    let plan = snapshot.workspace.as_ref().map(|w| w.plan).unwrap_or(Plan::Starter);

    rsx! {
        Card {
            title: "Billing".to_string(),
            subtitle: Some(format!("You are on the {} plan", plan)),
            div {
                class: "grid md:grid-cols-3 gap-4",
                for tier in PRICING_TIERS {
                    div {
                        key: "{tier.name}",
                        class: "p-5 rounded-xl border border-gray-200",
                        div {
                            class: "flex items-center justify-between",
                            p { class: "font-semibold text-gray-900", "{tier.name}" }
                            if is_current_plan(tier.name, plan) {
                                Badge { variant: "indigo".to_string(), "Current" }
                            }
                        }
                        p { class: "mt-2 text-2xl font-bold text-gray-900", "{tier.price}" }
                        p { class: "text-sm text-gray-500", "{tier.description}" }
                        ul {
                            class: "mt-4 space-y-1",
                            for feature in tier.features.iter() {
                                li { key: "{feature}", class: "text-sm text-gray-600", "✓ {feature}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TeamSettings() -> Element {
    let snapshot = use_snapshot();

    rsx! {
        Card {
            title: "Team".to_string(),
            actions: Some(rsx! { Button { size: "sm".to_string(), "Invite member" } }),
            if let Some(user) = snapshot.user {
                div {
                    class: "flex items-center justify-between",
                    div {
                        class: "flex items-center",
                        Avatar { name: user.name.clone(), src: user.avatar.clone() }
                        div {
                            class: "ml-3",
                            p { class: "text-sm font-medium text-gray-900", "{user.name}" }
                            p { class: "text-xs text-gray-500", "{user.email}" }
                        }
                    }
                    Badge { variant: "purple".to_string(), "Owner" }
                }
            }
        }
    }
}

#[component]
fn IntegrationSettings() -> Element {
    let store = catalog::store();
    let mut rows: Vec<(String, String, bool)> = vec![(
        store.platform.label().to_string(),
        store.url.clone(),
        store.connected,
    )];
    rows.extend(
        catalog::ad_accounts()
            .iter()
            .map(|a| (format!("{} Ads", a.platform), a.name.clone(), a.connected)),
    );

    rsx! {
        Card {
            title: "Integrations".to_string(),
            ul {
                class: "divide-y divide-gray-100",
                for (name, detail, connected) in rows {
                    li {
                        key: "{name}",
                        class: "py-3 flex items-center justify-between",
                        div {
                            p { class: "text-sm font-medium text-gray-900", "{name}" }
                            p { class: "text-xs text-gray-500", "{detail}" }
                        }
                        if connected {
                            Badge { variant: "green".to_string(), "Connected" }
                        } else {
                            Button { size: "sm".to_string(), variant: "secondary".to_string(), "Connect" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_form_yields_empty_patch() {
        let workspace = catalog::mock_workspace();
        let form = WorkspaceForm::from_workspace(&workspace);
        assert!(form.diff(&workspace).is_empty());
    }

    #[test]
    fn test_diff_carries_only_edits() {
        let workspace = catalog::mock_workspace();
        let mut form = WorkspaceForm::from_workspace(&workspace);
        form.currency = "EUR".to_string();
        form.brand_name = "Acme".to_string();

        let patch = form.diff(&workspace);
        assert_eq!(patch.currency.as_deref(), Some("EUR"));
        assert_eq!(patch.brand_name.as_deref(), Some("Acme"));
        assert_eq!(patch.name, None);
        assert_eq!(patch.onboarding_completed, None);

        let mut updated = workspace.clone();
        updated.apply(patch);
        assert_eq!(updated.currency, "EUR");
        assert_eq!(updated.name, workspace.name);
    }

    #[test]
    fn test_current_plan_matches_label() {
        assert!(is_current_plan("Growth", Plan::Growth));
        assert!(!is_current_plan("Enterprise", Plan::Pro));
    }
}
