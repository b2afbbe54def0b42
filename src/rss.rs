use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use thiserror::Error;

use crate::{blog::PostMeta, content::Profile};

#[derive(Error, Debug, PartialEq)]
pub enum FeedError {
    #[error("no site url: set SITE_URL or site_url in profile.json")]
    NoSiteUrl,
    #[error("no site owner: profile.json has an empty name")]
    NoOwner,
}

/// Site url and owner name for the feed. `site_url` overrides the profile's
/// own url; both must be non-empty or item links would be relative.
pub fn feed_origin<'a>(
    site_url: Option<&'a str>,
    profile: &'a Profile,
) -> Result<(&'a str, &'a str), FeedError> {
    let url = site_url.unwrap_or(&profile.site_url).trim();
    if url.is_empty() {
        return Err(FeedError::NoSiteUrl);
    }
    let owner = profile.name.trim();
    if owner.is_empty() {
        return Err(FeedError::NoOwner);
    }
    Ok((url, owner))
}

pub fn build_channel(site_url: &str, owner: &str, posts: Vec<PostMeta>) -> Channel {
    let site_url = site_url.trim_end_matches('/');
    let items = posts
        .into_iter()
        .map(|p| {
            let link = format!("{site_url}/blog/{}", p.slug);
            let guid = GuidBuilder::default().value(&link).permalink(true).build();
            ItemBuilder::default()
                .title(p.title)
                .description(p.description)
                .author(p.author)
                .pub_date(p.date.to_rfc2822())
                .categories(
                    p.tags
                        .into_iter()
                        .map(|t| rss::CategoryBuilder::default().name(t).build())
                        .collect::<Vec<_>>(),
                )
                .link(link)
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(format!("{site_url}/rss.xml"));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title(format!("{owner}'s Blog"))
        .description(format!("Notes and write-ups by {owner}."))
        .link(format!("{site_url}/blog"))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_channel_links() {
        let post = PostMeta {
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            description: "First".to_string(),
            author: "Arnab".to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            tags: vec!["rust".to_string()],
        };
        let channel = build_channel("https://example.com/", "Arnab", vec![post]);
        assert_eq!(channel.link(), "https://example.com/blog");
        assert_eq!(channel.title(), "Arnab's Blog");

        let item = &channel.items()[0];
        assert_eq!(item.link(), Some("https://example.com/blog/hello"));
        assert_eq!(item.categories()[0].name(), "rust");
        assert_eq!(item.pub_date(), Some("Tue, 2 Jan 2024 03:04:05 +0000"));
    }

    #[test]
    fn test_feed_origin() {
        let mut profile = Profile {
            name: "Arnab".to_string(),
            site_url: "https://trifiasco.github.io".to_string(),
            ..Default::default()
        };
        assert_eq!(
            feed_origin(None, &profile),
            Ok(("https://trifiasco.github.io", "Arnab"))
        );
        assert_eq!(
            feed_origin(Some("https://example.com"), &profile),
            Ok(("https://example.com", "Arnab"))
        );
        assert_eq!(feed_origin(Some("  "), &profile), Err(FeedError::NoSiteUrl));

        // what a profile.json that failed to load falls back to
        profile = Profile::default();
        assert_eq!(feed_origin(None, &profile), Err(FeedError::NoSiteUrl));
        assert_eq!(
            feed_origin(Some("https://example.com"), &profile),
            Err(FeedError::NoOwner)
        );
    }
}
