use leptos::{either::Either, html::Input, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};

#[cfg(feature = "ssr")]
use crate::blog::{find_post, list_posts, BlogError};
use crate::{
    blog::{Post, PostMeta, INDEX_CACHE, POST_CACHE},
    content::content,
};

#[component]
pub fn BlogWrapper() -> impl IntoView {
    let clicked = ArcTrigger::new();
    provide_context(clicked.clone());
    let profile = &content().profile;
    view! {
        <Title text="Blog" />
        <div class="text-center my-8">
            <h1 class="font-bold text-3xl lg:text-4xl mb-4 section-content">
                <a href="/blog" on:click=move |_| clicked.notify() class="hover:text-purple">
                    {format!("{}'s Blog", profile.name)}
                </a>
                <a
                    href="/rss.xml"
                    target="_blank"
                    class="relative top-1 ml-4 text-brightYellow hover:text-yellow"
                    aria-label="RSS Feed"
                >
                    <i class="extra-rss" />
                </a>
            </h1>
            <div class="max-w-2xl mx-auto text-lg text-muted section-content">
                "Older writing lives on "
                <a href=profile.legacy_blog.as_str() target="_blank" rel="noopener noreferrer">
                    "the WordPress blog"
                </a>
                "."
            </div>
        </div>
        <div class="w-full max-w-4xl mx-auto px-8 text-left">
            <Outlet />
        </div>
    }
}

#[server(input = GetUrl)]
pub async fn list_posts_server(pattern: String) -> Result<Vec<PostMeta>, ServerFnError> {
    list_posts(&pattern).map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn BlogHome() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();
    let posts = Resource::new(search, move |pattern| async move {
        if let Some(cached) = INDEX_CACHE.get(&pattern) {
            return Ok((*cached).clone());
        }
        let res = list_posts_server(pattern.clone()).await;
        // the server only caches the full listing; the browser keeps every search
        #[cfg(feature = "hydrate")]
        if let Ok(meta) = &res {
            INDEX_CACHE.insert(pattern, meta.clone());
        }
        res
    });

    let header_clicked = expect_context::<ArcTrigger>();
    Effect::watch(
        move || header_clicked.track(),
        move |_, _, _| {
            let Some(el) = input_ref.get_untracked() else {
                return;
            };
            set_search(String::new());
            el.set_value("");
        },
        false,
    );

    view! {
        <Title text="Posts" />
        <form
            class="flex flex-col sm:flex-row gap-3 items-start sm:items-center mb-6"
            on:submit=move |ev| {
                ev.prevent_default();
                let Some(el) = input_ref.get_untracked() else {
                    return;
                };
                set_search(el.value());
            }
        >
            <label for="blog_search" class="font-medium whitespace-nowrap">
                "Search (regex):"
            </label>
            <input
                id="blog_search"
                class="flex-grow w-full sm:max-w-md px-4 py-2 rounded-md border border-muted"
                node_ref=input_ref
                placeholder="constrained|parsing"
            />
            <button type="submit" class="px-4 py-2 rounded-md border border-cyan/30">
                "Search"
            </button>
        </form>
        <Transition fallback=move || {
            view! {
                <div class="space-y-4">
                    <div class="loading-skeleton h-8 rounded"></div>
                    <div class="loading-skeleton h-6 rounded w-3/4"></div>
                    <div class="loading-skeleton h-8 rounded"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                match posts.await {
                    Ok(posts) => Either::Left(view! { <PostList posts search=search.get_untracked() /> }),
                    Err(e) => {
                        Either::Right(
                            view! { <p class="text-red">{format!("Search failed: {e}")}</p> },
                        )
                    }
                }
            })}
        </Transition>
    }
}

#[component]
fn PostList(posts: Vec<PostMeta>, search: String) -> impl IntoView {
    let summary = match (posts.len(), search.is_empty()) {
        (1, true) => "1 post".to_string(),
        (n, true) => format!("{n} posts"),
        (1, false) => format!("1 post matching '{search}'"),
        (n, false) => format!("{n} posts matching '{search}'"),
    };
    view! {
        <p class="text-sm text-muted mb-4">{summary}</p>
        <div class="space-y-4 section-content">
            {posts
                .into_iter()
                .map(|post| {
                    view! {
                        <div class="mb-4 hover:bg-brightBlack/20 p-2 rounded-md">
                            <A
                                attr:class="text-lg leading-tight block"
                                href=format!("/blog/{}", post.slug)
                            >
                                <div>
                                    <span class="text-muted">
                                        {post.date.format("%b %e, %Y").to_string()}
                                    </span>
                                    " "
                                    <span class="text-blue font-medium">{post.title}</span>
                                </div>
                                <div class="text-base">{post.description}</div>
                                <div class="mt-1">
                                    {post
                                        .tags
                                        .into_iter()
                                        .map(|tag| {
                                            view! {
                                                <span class="rounded-md px-2 py-1 bg-brightBlack mr-2 text-sm">
                                                    {tag}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </A>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[server(input = GetUrl)]
pub async fn get_post_server(slug: String) -> Result<Post, ServerFnError> {
    find_post(&slug).map_err(|e| {
        if matches!(e, BlogError::NotFound(_)) {
            if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
                res.set_status(http::StatusCode::NOT_FOUND);
            }
        }
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("post").unwrap_or_default();
    let post = Resource::new(slug, |slug| async move {
        if let Some(cached) = POST_CACHE.get(&slug) {
            return Ok((*cached).clone());
        }
        let res = get_post_server(slug.clone()).await;
        #[cfg(feature = "hydrate")]
        if let Ok(post) = &res {
            POST_CACHE.insert(slug, post.clone());
        }
        res
    });
    view! {
        <div id="blog_content">
            <Suspense>
                {move || Suspend::new(async move {
                    match post.await {
                        Ok(p) => Either::Left(view! { <PostView post=p /> }),
                        Err(_) => {
                            Either::Right(
                                view! {
                                    <Title text="Not found" />
                                    <p class="text-center">"That post doesn't exist."</p>
                                },
                            )
                        }
                    }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn PostView(post: Post) -> impl IntoView {
    let Post { meta, html } = post;
    view! {
        <Title text=meta.title.clone() />
        <h2 class="text-2xl font-bold mb-4">{meta.title}</h2>
        <div class="mb-6 p-4 bg-brightBlack/20 rounded-md border border-muted/30">
            <div class="flex flex-wrap items-center gap-4 text-sm">
                <span class="text-cyan font-medium">{meta.author}</span>
                <span class="text-yellow font-medium">
                    {meta.date.format("%b %e, %Y").to_string()}
                </span>
                <div class="flex flex-wrap gap-1">
                    {meta
                        .tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="bg-green/20 text-green px-2 py-1 rounded text-xs">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
        // rendered from embedded markdown on the server
        <article class="prose prose-invert max-w-none" inner_html=html></article>
    }
}
