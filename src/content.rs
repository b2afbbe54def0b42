use std::{fmt, sync::LazyLock};

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub static CONTENT: LazyLock<Content> = LazyLock::new(Content::load);

#[derive(Embed)]
#[folder = "content"]
struct ContentFiles;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(&'static str),
    #[error("couldn't parse content file {file}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Markup authored alongside the site and rendered without escaping.
///
/// There is no `Deserialize` impl for the type itself: markup fields of the
/// content records are read through `trusted_markup`, and the only other way
/// in is a `&'static str` literal. A bare string from a request or query
/// param can't be promoted, so it stays a `String` the view layer escapes.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TrustedHtml {
    fn from(markup: &'static str) -> Self {
        TrustedHtml(markup.to_string())
    }
}

fn trusted_markup<'de, D>(deserializer: D) -> Result<Vec<TrustedHtml>, D::Error>
where
    D: Deserializer<'de>,
{
    let fragments = Vec::<String>::deserialize(deserializer)?;
    Ok(fragments.into_iter().map(TrustedHtml).collect())
}

impl fmt::Debug for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrustedHtml({:?})", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BioSection {
    pub section: String,
    #[serde(deserialize_with = "trusted_markup")]
    pub description: Vec<TrustedHtml>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded: Option<bool>,
}

impl BioSection {
    /// An explicit `excluded` flag wins. Without one, sections labelled with
    /// "side" stay hidden, which is how the existing data marks them.
    pub fn is_excluded(&self) -> bool {
        self.excluded.unwrap_or_else(|| self.section.contains("side"))
    }
}

/// Flattens bio sections into the paragraphs shown in the About section.
pub fn visible_fragments(sections: &[BioSection]) -> impl Iterator<Item = &TrustedHtml> {
    sections
        .iter()
        .filter(|s| !s.is_excluded())
        .flat_map(|s| s.description.iter())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechGroup {
    pub heading: String,
    pub icons: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct About {
    #[serde(rename = "About", default)]
    pub sections: Vec<BioSection>,
    #[serde(rename = "TechStack", default)]
    pub tech_stack: Vec<TechGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: u8,
}

impl SkillEntry {
    pub fn percent(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default, deserialize_with = "trusted_markup")]
    pub description: Vec<TrustedHtml>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default, deserialize_with = "trusted_markup")]
    pub description: Vec<TrustedHtml>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default, deserialize_with = "trusted_markup")]
    pub description: Vec<TrustedHtml>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub heading: Vec<String>,
    pub link_label: String,
    pub href: String,
    pub icon: String,
    pub background: String,
    #[serde(default)]
    pub external: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub site_url: String,
    pub github: String,
    pub resume: String,
    pub legacy_blog: String,
    #[serde(default)]
    pub slides: Vec<HeroSlide>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Skills {
    #[serde(rename = "Skills", default)]
    entries: Vec<SkillEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Experience {
    #[serde(rename = "Experience", default)]
    entries: Vec<ExperienceEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Education {
    #[serde(rename = "Education", default)]
    entries: Vec<EducationEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Achievements {
    #[serde(rename = "Achievements", default)]
    entries: Vec<Achievement>,
}

#[derive(Debug, Clone, Default)]
pub struct Content {
    pub profile: Profile,
    pub about: About,
    pub skills: Vec<SkillEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub achievements: Vec<Achievement>,
}

impl Content {
    fn load() -> Content {
        let content = Content {
            profile: load_or_default("profile.json"),
            about: load_or_default("about.json"),
            skills: load_or_default::<Skills>("skills.json").entries,
            experience: load_or_default::<Experience>("experience.json").entries,
            education: load_or_default::<Education>("education.json").entries,
            achievements: load_or_default::<Achievements>("achievements.json").entries,
        };
        log::debug!(
            "loaded content: {} bio sections, {} skills, {} jobs",
            content.about.sections.len(),
            content.skills.len(),
            content.experience.len()
        );
        content
    }
}

pub fn content() -> &'static Content {
    &CONTENT
}

pub fn parse_file<T: DeserializeOwned>(file: &'static str, raw: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(raw).map_err(|source| ContentError::Parse { file, source })
}

fn load<T: DeserializeOwned>(file: &'static str) -> Result<T, ContentError> {
    let data = ContentFiles::get(file).ok_or(ContentError::Missing(file))?;
    parse_file(file, &data.data)
}

// A broken file blanks its own section; the rest of the page still renders.
fn load_or_default<T: DeserializeOwned + Default>(file: &'static str) -> T {
    load(file).unwrap_or_else(|e| {
        log::error!("{e}: falling back to empty content");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(label: &str, fragments: &[&'static str]) -> BioSection {
        BioSection {
            section: label.to_string(),
            description: fragments.iter().map(|f| TrustedHtml::from(*f)).collect(),
            excluded: None,
        }
    }

    fn rendered(sections: &[BioSection]) -> Vec<&str> {
        visible_fragments(sections).map(|f| f.as_str()).collect()
    }

    #[test]
    fn test_side_sections_are_skipped() {
        let sections = vec![
            section("intro", &["<p>A</p>"]),
            section("side-note", &["<p>B</p>"]),
            section("background", &["<p>C</p>"]),
        ];
        let out = rendered(&sections);
        assert_eq!(out, vec!["<p>A</p>", "<p>C</p>"]);
        assert!(!out.contains(&"<p>B</p>"));
    }

    #[test]
    fn test_fragment_order_is_preserved() {
        let sections = vec![
            section("current work", &["1", "2", "3"]),
            section("inside story", &["x"]),
            section("background", &["4", "5"]),
        ];
        // "inside" contains "side"
        assert_eq!(rendered(&sections), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_explicit_flag_overrides_label() {
        let mut kept = section("side projects", &["kept"]);
        kept.excluded = Some(false);
        let mut dropped = section("intro", &["dropped"]);
        dropped.excluded = Some(true);
        assert_eq!(rendered(&[kept, dropped]), vec!["kept"]);
    }

    #[test]
    fn test_empty_sections_render_nothing() {
        assert!(rendered(&[]).is_empty());
        assert!(rendered(&[section("intro", &[])]).is_empty());
    }

    #[test]
    fn test_about_json_shape() {
        let raw = br#"{
            "About": [
                {"section": "intro", "description": ["<p>A</p>"]},
                {"section": "side-note", "description": ["<p>B</p>"]},
                {"section": "background", "description": ["<p>C</p>"], "excluded": false}
            ]
        }"#;
        let about: About = parse_file("about.json", raw).unwrap();
        assert_eq!(about.sections.len(), 3);
        assert!(about.tech_stack.is_empty());
        assert!(about.sections[1].is_excluded());
        assert_eq!(about.sections[2].excluded, Some(false));
        assert_eq!(rendered(&about.sections), vec!["<p>A</p>", "<p>C</p>"]);
    }

    #[test]
    fn test_markup_read_through_content_records() {
        let raw = br#"{
            "role": "Engineer",
            "company": "Craftsmen Ltd",
            "description": ["<em>newsroom</em>"]
        }"#;
        let job: ExperienceEntry = parse_file("experience.json", raw).unwrap();
        assert_eq!(job.description, vec![TrustedHtml::from("<em>newsroom</em>")]);
        assert_eq!(job.period, None);

        let bare = br#"{"role": "Engineer", "company": "Craftsmen Ltd"}"#;
        let job: ExperienceEntry = parse_file("experience.json", bare).unwrap();
        assert!(job.description.is_empty());

        // markup fields only accept lists of strings
        let wrong = br#"{"section": "intro", "description": "<p>A</p>"}"#;
        assert!(parse_file::<BioSection>("about.json", wrong).is_err());
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_file::<About>("about.json", b"{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse { file: "about.json", .. }));
        assert!(err.to_string().contains("about.json"));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = load::<About>("nope.json").unwrap_err();
        assert!(matches!(err, ContentError::Missing("nope.json")));
    }

    #[test]
    fn test_embedded_content_parses() {
        load::<Profile>("profile.json").unwrap();
        load::<About>("about.json").unwrap();
        load::<Skills>("skills.json").unwrap();
        load::<Experience>("experience.json").unwrap();
        load::<Education>("education.json").unwrap();
        load::<Achievements>("achievements.json").unwrap();

        let content = content();
        assert!(!content.profile.name.is_empty());
        assert_eq!(content.profile.slides.len(), 3);
        assert!(visible_fragments(&content.about.sections).count() > 0);
        assert!(content.about.sections.iter().any(|s| s.is_excluded()));
    }

    #[test]
    fn test_skill_percent_is_clamped() {
        let skill = SkillEntry {
            name: "Rust".to_string(),
            level: 250,
        };
        assert_eq!(skill.percent(), 100);
    }
}
