use leptos::prelude::*;

use crate::icons::Badge;

#[component]
pub fn BadgeIcon(badge: &'static Badge) -> impl IntoView {
    view! {
        <span class="inline-block" title=badge.title style=badge.style()>
            <i class=badge.glyph aria-hidden="true"></i>
            <span class="sr-only">{badge.title}</span>
        </span>
    }
}
