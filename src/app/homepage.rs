use leptos::prelude::*;
use leptos_meta::Title;

use crate::page::{Section, PAGE_SECTIONS};

use super::{
    about::About,
    hero::Hero,
    resume::{Achievements, Education, Experience},
    skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        {PAGE_SECTIONS.into_iter().map(section_view).collect_view()}
    }
}

fn section_view(section: Section) -> AnyView {
    match section {
        Section::Home => view! { <Hero /> }.into_any(),
        Section::About => view! { <About /> }.into_any(),
        Section::Experience => view! { <Experience /> }.into_any(),
        Section::Skills => view! { <Skills /> }.into_any(),
        Section::Education => view! { <Education /> }.into_any(),
        Section::Achievements => view! { <Achievements /> }.into_any(),
    }
}
