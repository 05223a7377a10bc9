use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Error,
    #[default]
    Neutral,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge--primary",
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Error => "badge--error",
            BadgeVariant::Neutral => "badge--neutral",
        }
    }
}

/// Small status pill
#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let full_class = move || format!("badge {} {}", variant.class(), class.get().unwrap_or_default());

    view! { <span class=full_class>{children()}</span> }
}
