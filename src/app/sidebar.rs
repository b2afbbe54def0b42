use chrono::DateTime;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::{content::content, page::PAGE_SECTIONS};

const BUILD_TIME: &str = env!("BUILD_TIME");

fn build_date() -> String {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.format("%b %e, %Y").to_string())
        .unwrap_or_else(|_| BUILD_TIME.to_string())
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let profile = &content().profile;
    view! {
        <aside id="template-aside" role="complementary" class="text-center">
            <h1 id="template-logo" class="text-2xl font-bold my-8">
                <a href="/">{profile.name.as_str()}</a>
            </h1>
            <nav id="template-main-menu" role="navigation">
                <ul>
                    {PAGE_SECTIONS
                        .iter()
                        .map(|section| {
                            view! {
                                <li>
                                    <a href=section.href() data-nav-section=section.anchor()>
                                        {section.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li>
                        <A href="/blog">"Blog"</A>
                    </li>
                </ul>
            </nav>
            <div class="template-footer text-sm mt-8">
                <ul class="flex justify-center gap-3 text-2xl">
                    <li>
                        <a
                            href=profile.github.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                    </li>
                    <li>
                        <a
                            href=profile.resume.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Resume"
                        >
                            <i class="icon-document"></i>
                        </a>
                    </li>
                </ul>
                <p class="mt-4 text-muted">
                    <small>"Last built " {build_date()}</small>
                </p>
            </div>
        </aside>
    }
}
