use leptos::prelude::*;

use crate::{
    content::{content, visible_fragments, TechGroup},
    icons::lookup,
    page::Section,
};

use super::{badge::BadgeIcon, section::PageSection};

#[component]
pub fn About() -> impl IntoView {
    let about = &content().about;
    view! {
        <PageSection section=Section::About meta="About" heading="Who Am I?">
            <div class="about-desc">
                // authored markup from content/about.json, not escaped
                {visible_fragments(&about.sections)
                    .map(|fragment| view! { <p class="about" inner_html=fragment.as_str()></p> })
                    .collect_view()}
            </div>
            <div class="heading-meta">
                <p class="font-black text-[15px]">"Tech I have worked with:"</p>
            </div>
            <div class="tech-stack">
                {about.tech_stack.iter().map(|group| view! { <TechRow group /> }).collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
fn TechRow(group: &'static TechGroup) -> impl IntoView {
    view! {
        <div>
            <div class="heading-meta">{group.heading.as_str()}</div>
            {group
                .icons
                .iter()
                .filter_map(|key| lookup(key))
                .map(|badge| view! { <BadgeIcon badge /> })
                .collect_view()}
        </div>
    }
}
