use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Predefined icon names
#[allow(dead_code)]
pub mod icons {
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const CHECK: &str = "check";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const SEARCH: &str = "search";
    pub const ROBOT: &str = "robot";
    pub const DATABASE: &str = "database";
    pub const COGS: &str = "cogs";
    pub const GRADUATION_CAP: &str = "graduation-cap";
    pub const HEADSET: &str = "headset";
    pub const MAP_PIN: &str = "map-pin";
    pub const PHONE: &str = "phone";
    pub const MAIL: &str = "mail";
    pub const CLOCK: &str = "clock";
    pub const CHART_LINE: &str = "chart-line";
}
