use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(any(feature = "ssr", feature = "rss"))]
use gray_matter::{engine::YAML, Matter};
#[cfg(any(feature = "ssr", feature = "rss"))]
use pulldown_cmark::{Options, Parser};
#[cfg(any(feature = "ssr", feature = "rss"))]
use regex::RegexBuilder;

#[cfg(any(feature = "ssr", feature = "rss"))]
use crate::highlight::highlight_code_blocks;

/// Rendered posts by slug.
pub static POST_CACHE: LazyLock<DashMap<String, Post>> = LazyLock::new(DashMap::new);
/// Post listings by search pattern.
pub static INDEX_CACHE: LazyLock<DashMap<String, Vec<PostMeta>>> = LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "posts"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct PostFiles;

#[cfg(any(feature = "ssr", feature = "rss"))]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    description: String,
    author: String,
    date: DateTime<Utc>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    draft: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub meta: PostMeta,
    pub html: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlogError {
    #[error("blog post not found: {0}")]
    NotFound(String),
    #[error("missing or malformed front matter in {0}")]
    FrontMatter(String),
    #[error("blog post {0} is not valid UTF-8")]
    Encoding(String),
    #[error("invalid search pattern: {0}")]
    BadPattern(String),
}

/// Slugs of every embedded post, drafts included.
pub fn slugs() -> Vec<String> {
    PostFiles::iter()
        .filter_map(|path| path.strip_suffix(".md").map(str::to_string))
        .filter(|slug| !slug.contains('/'))
        .collect()
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn raw_post(slug: &str) -> Result<String, BlogError> {
    let file =
        PostFiles::get(&format!("{slug}.md")).ok_or_else(|| BlogError::NotFound(slug.to_string()))?;
    String::from_utf8(file.data.into_owned()).map_err(|_| BlogError::Encoding(slug.to_string()))
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn front_matter(slug: &str, raw: &str) -> Result<(PostMeta, String, bool), BlogError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(raw)
        .ok_or_else(|| BlogError::FrontMatter(slug.to_string()))?;
    let fm = parsed.data;
    let meta = PostMeta {
        slug: slug.to_string(),
        title: fm.title,
        description: fm.description,
        author: fm.author,
        date: fm.date,
        tags: fm.tags,
    };
    Ok((meta, parsed.content, fm.draft))
}

/// Parses a markdown post with YAML front matter into rendered HTML.
///
/// Drafts are reported as `NotFound` so they can't be reached by slug.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn parse_post(slug: &str, raw: &str) -> Result<Post, BlogError> {
    let (meta, body, draft) = front_matter(slug, raw)?;
    if draft {
        return Err(BlogError::NotFound(slug.to_string()));
    }
    let parser = Parser::new_ext(&body, Options::all());
    let events = highlight_code_blocks(parser);

    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, events.into_iter());
    Ok(Post { meta, html })
}

/// Builds the listing for `(slug, markdown)` sources: drafts dropped,
/// newest first, and filtered by `pattern` unless it is empty.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn index_posts<I>(sources: I, pattern: &str) -> Result<Vec<PostMeta>, BlogError>
where
    I: IntoIterator<Item = Result<(String, String), BlogError>>,
{
    let re = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .map_err(|e| BlogError::BadPattern(e.to_string()))?;

    let mut posts = Vec::new();
    for source in sources {
        let (slug, raw) = source?;
        if !pattern.is_empty() && !re.is_match(&raw) {
            continue;
        }
        let (meta, _, draft) = front_matter(&slug, &raw)?;
        if draft {
            log::debug!("skipping draft post {slug}");
            continue;
        }
        posts.push(meta);
    }
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(posts)
}

/// Lists published posts, newest first.
///
/// An empty `pattern` lists everything; otherwise it is a case-insensitive
/// regex matched against each post's markdown source.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn list_posts(pattern: &str) -> Result<Vec<PostMeta>, BlogError> {
    let is_base = pattern.is_empty();
    if is_base {
        if let Some(cached) = INDEX_CACHE.get(pattern) {
            return Ok(cached.clone());
        }
    }
    let sources = slugs()
        .into_iter()
        .map(|slug| raw_post(&slug).map(|raw| (slug, raw)));
    let posts = index_posts(sources, pattern)?;

    if is_base {
        INDEX_CACHE.insert(String::new(), posts.clone());
    }
    Ok(posts)
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn find_post(slug: &str) -> Result<Post, BlogError> {
    if let Some(post) = POST_CACHE.get(slug) {
        return Ok(post.clone());
    }
    let raw = raw_post(slug)?;
    let post = parse_post(slug, &raw).inspect_err(|e| log::warn!("{e}"))?;
    POST_CACHE.insert(slug.to_string(), post.clone());
    Ok(post)
}

#[cfg(all(test, any(feature = "ssr", feature = "rss")))]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"---
title: Sample
description: A sample post
author: Arnab
date: 2024-03-01T00:00:00Z
tags:
  - rust
---

# Heading

Some *text*.

```python
print("hi")
```
"#;

    #[test]
    fn test_parse_post() {
        let post = parse_post("sample", SAMPLE).unwrap();
        assert_eq!(post.meta.slug, "sample");
        assert_eq!(post.meta.title, "Sample");
        assert_eq!(post.meta.tags, vec!["rust".to_string()]);
        assert!(post.html.contains("<h1>Heading</h1>"));
        assert!(post.html.contains("<em>text</em>"));
        // front matter is not rendered into the body
        assert!(!post.html.contains("description:"));
        // highlighted blocks come out as syntect's inline-styled <pre>
        assert!(post.html.contains("<pre style="));
    }

    #[test]
    fn test_missing_front_matter() {
        let err = parse_post("bare", "# just markdown\n").unwrap_err();
        assert_eq!(err, BlogError::FrontMatter("bare".to_string()));
    }

    #[test]
    fn test_draft_flag() {
        let (_, _, draft) = front_matter("sample", SAMPLE).unwrap();
        assert!(!draft);
        let raw = SAMPLE.replacen("tags:", "draft: true\ntags:", 1);
        let (meta, _, draft) = front_matter("sample", &raw).unwrap();
        assert!(draft);
        assert_eq!(meta.title, "Sample");
    }

    #[test]
    fn test_drafts_hidden_from_listing_and_lookup() {
        let draft = SAMPLE
            .replacen("title: Sample", "title: Hidden", 1)
            .replacen("tags:", "draft: true\ntags:", 1);
        let sources = || {
            vec![
                Ok(("sample".to_string(), SAMPLE.to_string())),
                Ok(("hidden".to_string(), draft.clone())),
            ]
        };

        let listed = index_posts(sources(), "").unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].slug, "sample");
        // a search matching only the draft finds nothing
        assert!(index_posts(sources(), "Hidden").unwrap().is_empty());

        assert_eq!(
            parse_post("hidden", &draft),
            Err(BlogError::NotFound("hidden".to_string()))
        );
        assert!(parse_post("sample", SAMPLE).is_ok());
    }

    #[test]
    fn test_unreadable_source_fails_listing() {
        let sources = vec![Err(BlogError::Encoding("broken".to_string()))];
        assert_eq!(
            index_posts(sources, ""),
            Err(BlogError::Encoding("broken".to_string()))
        );
    }

    #[test]
    fn test_embedded_posts_listed() {
        let posts = list_posts("").unwrap();
        assert!(!posts.is_empty());
        assert!(posts.windows(2).all(|w| w[0].date >= w[1].date));
        assert!(posts.iter().all(|p| slugs().contains(&p.slug)));
    }

    #[test]
    fn test_search() {
        let all = list_posts("").unwrap();
        let found = list_posts("CONSTRAINED DECODING").unwrap();
        assert!(!found.is_empty());
        assert!(found.len() <= all.len());
        assert!(list_posts("zzz-no-post-mentions-this-zzz").unwrap().is_empty());
        assert!(matches!(list_posts("(unclosed"), Err(BlogError::BadPattern(_))));
    }

    #[test]
    fn test_find_post() {
        let slug = list_posts("").unwrap()[0].slug.clone();
        let post = find_post(&slug).unwrap();
        assert_eq!(post.meta.slug, slug);
        assert!(POST_CACHE.contains_key(&slug));
        assert_eq!(
            find_post("does-not-exist"),
            Err(BlogError::NotFound("does-not-exist".to_string()))
        );
    }
}
