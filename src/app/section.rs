use leptos::prelude::*;

use crate::page::Section;

/// Shared frame for the content sections below the hero.
#[component]
pub fn PageSection(
    section: Section,
    meta: &'static str,
    heading: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=section.anchor()
            class="template-section py-16 section-content"
            data-section=section.anchor()
        >
            <div class="template-narrow-content max-w-4xl mx-auto px-8">
                <span class="heading-meta">{meta}</span>
                <h2 class="template-heading">{heading}</h2>
                {children()}
            </div>
        </section>
    }
}
