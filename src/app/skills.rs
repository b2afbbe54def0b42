use leptos::prelude::*;

use crate::{
    content::{content, SkillEntry},
    page::Section,
};

use super::section::PageSection;

#[component]
pub fn Skills() -> impl IntoView {
    let skills = &content().skills;
    view! {
        <PageSection section=Section::Skills meta="My Specialty" heading="My Skills">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-x-8 gap-y-4">
                {skills.iter().map(|skill| view! { <SkillBar skill /> }).collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
fn SkillBar(skill: &'static SkillEntry) -> impl IntoView {
    let percent = skill.percent();
    view! {
        <div class="progress-wrap">
            <h3 class="font-bold mb-1">{skill.name.as_str()}</h3>
            <div class="progress h-2 rounded bg-muted/30">
                <div
                    class="progress-bar h-2 rounded bg-cyan"
                    role="progressbar"
                    aria-valuenow=percent.to_string()
                    aria-valuemin="0"
                    aria-valuemax="100"
                    style=format!("width: {percent}%;")
                ></div>
            </div>
            <span class="text-sm text-muted">{format!("{percent}%")}</span>
        </div>
    }
}
