use leptos::prelude::*;

use crate::{
    content::{content, TrustedHtml},
    page::Section,
};

use super::section::PageSection;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <PageSection section=Section::Experience meta="Experience" heading="Work Experience">
            <div class="grid gap-y-6">
                {content()
                    .experience
                    .iter()
                    .map(|job| {
                        view! {
                            <Entry
                                title=job.role.as_str()
                                subtitle=Some(job.company.as_str())
                                period=job.period.as_deref()
                                description=job.description.as_slice()
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <PageSection section=Section::Education meta="Education" heading="Education">
            <div class="grid gap-y-6">
                {content()
                    .education
                    .iter()
                    .map(|school| {
                        view! {
                            <Entry
                                title=school.institution.as_str()
                                subtitle=Some(school.degree.as_str())
                                period=school.period.as_deref()
                                description=school.description.as_slice()
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <PageSection section=Section::Achievements meta="Achievements" heading="Achievements">
            <div class="grid gap-y-6">
                {content()
                    .achievements
                    .iter()
                    .map(|achievement| {
                        view! {
                            <Entry
                                title=achievement.title.as_str()
                                subtitle=None
                                period=achievement.period.as_deref()
                                description=achievement.description.as_slice()
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
fn Entry(
    title: &'static str,
    subtitle: Option<&'static str>,
    period: Option<&'static str>,
    description: &'static [TrustedHtml],
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <div class="flex items-start justify-between">
                <div class="text-left">
                    <strong>{title}</strong>
                    {subtitle.map(|s| view! { <div>{s}</div> })}
                </div>
                {period.map(|p| view! { <div class="shrink-0 text-right font-bold">{p}</div> })}
            </div>
            {description
                .iter()
                .map(|d| view! { <p class="text-base leading-relaxed" inner_html=d.as_str()></p> })
                .collect_view()}
        </div>
    }
}
