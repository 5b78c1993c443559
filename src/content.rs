use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod client;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("The requested record was not found")]
    NotFound,
    #[error("{0}")]
    Backend(String),
    #[error("Malformed response from the backend: {0}")]
    Decode(String),
}

/// The singleton `personal_info` row. Every field is free-form display text
/// maintained in the backend; anything missing falls back to a placeholder
/// at the render site.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub introduction_headline: Option<String>,
    pub introduction_paragraph: Option<String>,
    pub hero_image_url: Option<String>,
    pub hero_image_alt: Option<String>,
    pub about_headline: Option<String>,
    pub about_paragraph1: Option<String>,
    pub about_paragraph2: Option<String>,
    pub about_image_url: Option<String>,
    pub about_image_alt: Option<String>,
    pub experience_years: Option<String>,
    pub projects_completed: Option<String>,
    pub education: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub instagram_url: Option<String>,
    pub cv_url: Option<String>,
}

impl SiteProfile {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("Your Name")
    }

    /// First word of the full name, used as the navbar logo.
    pub fn logo_name(&self) -> &str {
        self.full_name
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
            .unwrap_or("Portfolio")
    }

    pub fn mailto(&self) -> Option<String> {
        self.email.as_deref().map(|email| format!("mailto:{email}"))
    }

    pub fn tel(&self) -> Option<String> {
        self.phone.as_deref().map(|phone| format!("tel:{phone}"))
    }

    /// CV link, treating the `"#"` placeholder some seeds carry as absent.
    pub fn resume_url(&self) -> Option<&str> {
        self.cv_url.as_deref().filter(|url| !url.is_empty() && *url != "#")
    }
}

pub const PROJECT_CATEGORIES: [&str; 5] = ["All", "Web", "Mobile", "Design", "AI/ML"];

const MAX_TECH_BADGES: usize = 4;

const DEFAULT_PROJECT_IMAGE: &str = "https://images.unsplash.com/photo-1663000800357-ac5c6eb5ea4a";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_search_query: Option<String>,
    #[serde(default)]
    pub image_alt_text: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub demo_link: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Card image source: explicit URL, then an Unsplash search keyed by the
    /// stored query (with the row id as cache-busting signature), then a
    /// static fallback photo.
    pub fn image_src(&self) -> String {
        if let Some(url) = self.image_url.as_deref().filter(|url| !url.is_empty()) {
            return url.to_string();
        }
        if let Some(query) = self.image_search_query.as_deref().filter(|q| !q.is_empty()) {
            return format!(
                "https://source.unsplash.com/featured/?{}&sig={}",
                urlencoding::encode(query),
                self.id
            );
        }
        DEFAULT_PROJECT_IMAGE.to_string()
    }

    pub fn image_alt(&self) -> &str {
        self.image_alt_text.as_deref().unwrap_or(&self.title)
    }

    pub fn visible_technologies(&self) -> &[String] {
        let shown = self.technologies.len().min(MAX_TECH_BADGES);
        &self.technologies[..shown]
    }
}

/// Client-side category filter over the already-fetched collection. `"All"`
/// passes everything through; no request is issued on filter changes.
pub fn filter_by_category(projects: &[Project], category: &str) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| category == "All" || project.category.as_deref() == Some(category))
        .cloned()
        .collect()
}

pub const ADDITIONAL_EXPERTISE: &str = "Additional Expertise";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Categories shown in the main grid: skip the "Additional Expertise" block
/// (rendered separately) and anything with no skills.
pub fn grid_categories(categories: &[SkillCategory]) -> Vec<&SkillCategory> {
    categories
        .iter()
        .filter(|cat| cat.name != ADDITIONAL_EXPERTISE && !cat.skills.is_empty())
        .collect()
}

pub fn additional_expertise(categories: &[SkillCategory]) -> Option<&SkillCategory> {
    categories
        .iter()
        .find(|cat| cat.name == ADDITIONAL_EXPERTISE && !cat.skills.is_empty())
}

/// Contact message under composition. Write-only; the UI never reads
/// messages back.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: i64, category: &str) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: String::new(),
            category: Some(category.to_string()),
            technologies: Vec::new(),
            image_url: None,
            image_search_query: None,
            image_alt_text: None,
            github_link: None,
            demo_link: None,
            created_at: None,
        }
    }

    #[test]
    fn filter_matches_single_category() {
        let projects = vec![project(1, "Web"), project(2, "AI/ML")];
        let filtered = filter_by_category(&projects, "Web");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn filter_all_passes_everything() {
        let projects = vec![project(1, "Web"), project(2, "AI/ML"), project(3, "Design")];
        assert_eq!(filter_by_category(&projects, "All").len(), 3);
    }

    #[test]
    fn filter_with_no_matches_is_empty() {
        let projects = vec![project(1, "Web")];
        assert!(filter_by_category(&projects, "Mobile").is_empty());
    }

    #[test]
    fn image_src_prefers_explicit_url() {
        let mut p = project(7, "Web");
        p.image_url = Some("https://example.com/shot.png".to_string());
        p.image_search_query = Some("ignored".to_string());
        assert_eq!(p.image_src(), "https://example.com/shot.png");
    }

    #[test]
    fn image_src_builds_search_url_with_signature() {
        let mut p = project(7, "Web");
        p.image_search_query = Some("rust compiler".to_string());
        assert_eq!(
            p.image_src(),
            "https://source.unsplash.com/featured/?rust%20compiler&sig=7"
        );
    }

    #[test]
    fn image_src_escapes_reserved_query_characters() {
        let mut p = project(3, "Web");
        p.image_search_query = Some("c++ & rust".to_string());
        assert_eq!(
            p.image_src(),
            "https://source.unsplash.com/featured/?c%2B%2B%20%26%20rust&sig=3"
        );
    }

    #[test]
    fn image_src_falls_back_to_default() {
        let p = project(7, "Web");
        assert_eq!(p.image_src(), DEFAULT_PROJECT_IMAGE);
    }

    #[test]
    fn technologies_capped_at_four() {
        let mut p = project(1, "Web");
        p.technologies = vec!["a", "b", "c", "d", "e"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(p.visible_technologies().len(), 4);

        p.technologies.truncate(2);
        assert_eq!(p.visible_technologies().len(), 2);
    }

    fn skill_category(name: &str, skills: &[&str]) -> SkillCategory {
        SkillCategory {
            id: 1,
            name: name.to_string(),
            sort_order: 0,
            skills: skills
                .iter()
                .enumerate()
                .map(|(i, s)| Skill {
                    id: i as i64,
                    name: s.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn empty_skill_categories_excluded_from_grid() {
        let categories = vec![
            skill_category("Frontend", &[]),
            skill_category("Backend", &["Go"]),
        ];
        let grid = grid_categories(&categories);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].name, "Backend");
    }

    #[test]
    fn additional_expertise_is_split_out() {
        let categories = vec![
            skill_category("Backend", &["Go"]),
            skill_category(ADDITIONAL_EXPERTISE, &["Public Speaking"]),
        ];
        assert!(grid_categories(&categories)
            .iter()
            .all(|cat| cat.name != ADDITIONAL_EXPERTISE));
        assert_eq!(
            additional_expertise(&categories).map(|cat| cat.name.as_str()),
            Some(ADDITIONAL_EXPERTISE)
        );
    }

    #[test]
    fn empty_additional_expertise_is_omitted() {
        let categories = vec![skill_category(ADDITIONAL_EXPERTISE, &[])];
        assert!(additional_expertise(&categories).is_none());
    }

    #[test]
    fn profile_fallbacks() {
        let profile = SiteProfile::default();
        assert_eq!(profile.display_name(), "Your Name");
        assert_eq!(profile.logo_name(), "Portfolio");
        assert!(profile.mailto().is_none());
        assert!(profile.resume_url().is_none());

        let profile = SiteProfile {
            full_name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            cv_url: Some("#".to_string()),
            ..SiteProfile::default()
        };
        assert_eq!(profile.logo_name(), "Ada");
        assert_eq!(profile.mailto().as_deref(), Some("mailto:ada@example.com"));
        assert!(profile.resume_url().is_none());
    }

    #[test]
    fn backend_error_displays_message_verbatim() {
        let err = ContentError::Backend("network error".to_string());
        assert_eq!(err.to_string(), "network error");
    }
}
