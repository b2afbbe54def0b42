use std::{collections::HashMap, sync::LazyLock};

pub const BADGE_SIZE: &str = "5em";
pub const BADGE_PADDING: &str = "5px";

static BADGES: LazyLock<HashMap<&'static str, Badge>> = LazyLock::new(|| {
    [
        wrap("javascript", "devicon-javascript-plain", "javascript"),
        wrap("python", "devicon-python-plain", "python"),
        wrap("cpp", "devicon-cplusplus-plain", "c++"),
        wrap("graphql", "devicon-graphql-plain", "graphQL"),
        wrap("nodejs", "devicon-nodejs-plain", "node.js"),
        wrap("django", "devicon-django-plain", "django"),
        wrap("react", "devicon-react-original", "react"),
        wrap("apollo", "devicon-apollographql-plain", "apollo"),
        wrap("aws", "devicon-amazonwebservices-plain-wordmark", "aws"),
        wrap("git", "devicon-git-plain", "git"),
        wrap("docker", "devicon-docker-plain", "docker"),
        wrap("sql", "extra-database", "sql"),
    ]
    .into_iter()
    .map(|badge| (badge.key, badge))
    .collect()
});

/// A technology icon with its presentation fixed at table build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub key: &'static str,
    /// Icon font class rendered inside the badge
    pub glyph: &'static str,
    pub title: &'static str,
    pub size: &'static str,
    pub padding: &'static str,
}

impl Badge {
    pub fn style(&self) -> String {
        format!(
            "font-size: {}; padding-left: {}; padding-right: {};",
            self.size, self.padding, self.padding
        )
    }
}

fn wrap(key: &'static str, glyph: &'static str, title: &'static str) -> Badge {
    Badge {
        key,
        glyph,
        title,
        size: BADGE_SIZE,
        padding: BADGE_PADDING,
    }
}

/// Returns the badge registered under `key`, or `None` for unknown keys.
pub fn lookup(key: &str) -> Option<&'static Badge> {
    BADGES.get(key)
}

pub fn keys() -> Vec<&'static str> {
    let mut keys = BADGES.keys().copied().collect::<Vec<_>>();
    keys.sort_unstable();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::content;

    #[test]
    fn test_known_keys() {
        let python = lookup("python").expect("python should be registered");
        assert_eq!(python.title, "python");
        assert_eq!(python.size, "5em");
        assert_eq!(lookup("cpp").map(|b| b.title), Some("c++"));
        assert_eq!(lookup("nodejs").map(|b| b.title), Some("node.js"));
        assert_eq!(keys().len(), 12);
    }

    #[test]
    fn test_unknown_keys_miss() {
        assert!(lookup("rust").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("Python").is_none());
        assert!(lookup("python ").is_none());
        assert!(lookup("🦀").is_none());
    }

    #[test]
    fn test_lookup_is_stable() {
        for key in keys() {
            let first = lookup(key).unwrap();
            let second = lookup(key).unwrap();
            assert!(std::ptr::eq(first, second));
            assert_eq!(first.key, key);
        }
    }

    #[test]
    fn test_style() {
        let docker = lookup("docker").unwrap();
        assert_eq!(
            docker.style(),
            "font-size: 5em; padding-left: 5px; padding-right: 5px;"
        );
    }

    #[test]
    fn test_tech_stack_keys_are_registered() {
        for group in &content().about.tech_stack {
            for key in &group.icons {
                assert!(lookup(key).is_some(), "{key} in {} has no badge", group.heading);
            }
        }
    }
}
