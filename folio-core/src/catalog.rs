//! Project records and the projects-page ordering, filtering and labels

use std::cmp::Ordering;
use std::collections::HashSet;

use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};

/// Token that lets every category through.
pub const ALL_TOKEN: &str = "all";

/// Style class for tokens outside the known category set.
pub const DEFAULT_CATEGORY_STYLE: &str = "bg-accent/10 text-accent border-accent/20";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub slug: String,
    pub title: String,
    pub year: i32,
    /// Category token, compared exactly (see [`Category`] for the known set)
    pub category: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study: Option<CaseStudy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_liner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_case_study: Option<ExtendedCaseStudy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ProjectLinks>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<ProjectMedia>,
}

/// Problem / approach / outcome write-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub overview: String,
    pub problem: String,
    pub approach: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub challenges: String,
    pub outcome: String,
}

/// Longer write-up used by the shader and tooling projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtendedCaseStudy {
    pub what_it_is: String,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default)]
    pub technical_breakdown: TechnicalBreakdown,
    #[serde(default)]
    pub setup_usage: SetupUsage,
    #[serde(default)]
    pub challenges_learnings: Vec<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalBreakdown {
    #[serde(default)]
    pub how_it_works: Vec<String>,
    #[serde(default)]
    pub architecture: Vec<String>,
    #[serde(default)]
    pub notable_details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetupUsage {
    #[serde(default)]
    pub install: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_start: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ShaderParameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShaderParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub effect: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Gif,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMedia {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub path_hint: String,
    pub caption: String,
}

impl ProjectRecord {
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        year: i32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            year,
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn has_extended_case_study(&self) -> bool {
        self.extended_case_study.is_some()
    }

    /// Short pitch: the one-liner when present, otherwise the summary.
    pub fn headline(&self) -> &str {
        self.one_liner.as_deref().unwrap_or(&self.summary)
    }

    /// Source link from either the top-level field or the links block.
    pub fn source_url(&self) -> Option<&str> {
        self.github
            .as_deref()
            .or_else(|| self.links.as_ref().and_then(|l| l.github.as_deref()))
    }
}

// === Categories ===

/// The known category tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Backend,
    Ai,
    Unity,
    UnityShaders,
    UnityTools,
    Robotics,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Backend,
        Category::Ai,
        Category::Unity,
        Category::UnityShaders,
        Category::UnityTools,
        Category::Robotics,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.token() == token)
    }

    pub fn token(self) -> &'static str {
        match self {
            Category::Backend => "backend",
            Category::Ai => "ai",
            Category::Unity => "unity",
            Category::UnityShaders => "unity-shaders",
            Category::UnityTools => "unity-tools",
            Category::Robotics => "robotics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Backend => "Backend / APIs",
            Category::Ai => "AI / CV",
            Category::Unity => "Unity / Games",
            Category::UnityShaders => "Unity / Shaders",
            Category::UnityTools => "Unity / Tools",
            Category::Robotics => "Robotics / ROS",
        }
    }

    pub fn style_class(self) -> &'static str {
        match self {
            Category::Backend => "bg-blue-500/10 text-blue-400 border-blue-500/20",
            Category::Ai => "bg-purple-500/10 text-purple-400 border-purple-500/20",
            Category::Unity => "bg-green-500/10 text-green-400 border-green-500/20",
            Category::UnityShaders => "bg-cyan-500/10 text-cyan-400 border-cyan-500/20",
            Category::UnityTools => "bg-teal-500/10 text-teal-400 border-teal-500/20",
            Category::Robotics => "bg-orange-500/10 text-orange-400 border-orange-500/20",
        }
    }

    pub fn is_unity(self) -> bool {
        matches!(
            self,
            Category::Unity | Category::UnityShaders | Category::UnityTools
        )
    }
}

/// Display label for a category token; unknown tokens label themselves.
pub fn category_label(token: &str) -> &str {
    Category::from_token(token).map_or(token, |c| c.label())
}

/// Style class for a category token.
pub fn category_style(token: &str) -> &'static str {
    Category::from_token(token).map_or(DEFAULT_CATEGORY_STYLE, Category::style_class)
}

/// A filter pill on the projects page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterTab {
    pub id: &'static str,
    pub label: &'static str,
}

impl FilterTab {
    const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Filter pills in display order, "all" first.
pub fn filter_tabs() -> [FilterTab; 7] {
    [
        FilterTab::new(ALL_TOKEN, "All Projects"),
        FilterTab::new("ai", "AI / Computer Vision"),
        FilterTab::new("unity", "Unity / Games"),
        FilterTab::new("unity-shaders", "Unity / Shaders"),
        FilterTab::new("unity-tools", "Unity / Tools"),
        FilterTab::new("robotics", "Robotics / ROS"),
        FilterTab::new("backend", "Backend / APIs"),
    ]
}

// === Ordering ===

thread_local! {
    static TITLE_COLLATOR: Collator =
        Collator::try_new(&Default::default(), CollatorOptions::new())
            .expect("root collation data");
}

/// Root-locale title comparison: accents and case only break ties, and on a
/// case-only difference lowercase sorts first.
pub fn collate(a: &str, b: &str) -> Ordering {
    TITLE_COLLATOR.with(|collator| collator.compare(a, b))
}

/// Newest first, then by title.
pub fn compare_projects(a: &ProjectRecord, b: &ProjectRecord) -> Ordering {
    b.year
        .cmp(&a.year)
        .then_with(|| collate(&a.title, &b.title))
}

pub fn sort_projects(projects: &[ProjectRecord]) -> Vec<&ProjectRecord> {
    let mut sorted: Vec<&ProjectRecord> = projects.iter().collect();
    sorted.sort_by(|a, b| compare_projects(a, b));
    sorted
}

// === Filtering ===

/// Active category selection on the projects page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_token(token: &str) -> Self {
        if token == ALL_TOKEN {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(token.to_string())
        }
    }

    pub fn token(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_TOKEN,
            CategoryFilter::Only(token) => token,
        }
    }

    pub fn matches(&self, project: &ProjectRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(token) => project.category == *token,
        }
    }
}

/// Keep the records the filter passes, in their input order.
pub fn filter_projects<'a, I>(projects: I, filter: &CategoryFilter) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    projects.into_iter().filter(|p| filter.matches(p)).collect()
}

/// The projects page listing: sorted, then filtered.
pub fn browse<'a>(
    projects: &'a [ProjectRecord],
    filter: &CategoryFilter,
) -> Vec<&'a ProjectRecord> {
    filter_projects(sort_projects(projects), filter)
}

pub fn find_by_slug<'a>(projects: &'a [ProjectRecord], slug: &str) -> Option<&'a ProjectRecord> {
    projects.iter().find(|p| p.slug == slug)
}

pub fn unity_projects(projects: &[ProjectRecord]) -> Vec<&ProjectRecord> {
    projects
        .iter()
        .filter(|p| Category::from_token(&p.category).is_some_and(Category::is_unity))
        .collect()
}

// === Featured selection ===

/// Home-page showcase domains, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Backend,
    Ai,
    Robotics,
    Unity,
}

impl Domain {
    pub const ALL: [Domain; 4] = [Domain::Backend, Domain::Ai, Domain::Robotics, Domain::Unity];

    pub fn covers(self, token: &str) -> bool {
        match self {
            Domain::Backend => token == "backend",
            Domain::Ai => token == "ai",
            Domain::Robotics => token == "robotics",
            Domain::Unity => matches!(token, "unity" | "unity-shaders" | "unity-tools"),
        }
    }
}

/// Newest project of each domain, never picking the same slug twice.
pub fn featured_by_domain(projects: &[ProjectRecord]) -> Vec<&ProjectRecord> {
    let sorted = sort_projects(projects);
    let mut picked: HashSet<&str> = HashSet::new();
    let mut featured = Vec::new();

    for domain in Domain::ALL {
        let choice = sorted
            .iter()
            .copied()
            .find(|p| domain.covers(&p.category) && !picked.contains(p.slug.as_str()));
        if let Some(project) = choice {
            picked.insert(project.slug.as_str());
            featured.push(project);
        }
    }

    featured
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(list: &[&ProjectRecord]) -> Vec<String> {
        list.iter().map(|p| format!("{}/{}", p.year, p.title)).collect()
    }

    #[test]
    fn test_sort_year_desc_then_title() {
        let projects = vec![
            ProjectRecord::new("b", "B", 2024, "ai"),
            ProjectRecord::new("a25", "A", 2025, "ai"),
            ProjectRecord::new("a24", "A", 2024, "ai"),
        ];
        assert_eq!(titles(&sort_projects(&projects)), vec!["2025/A", "2024/A", "2024/B"]);
    }

    #[test]
    fn test_title_collation_ignores_case() {
        let projects = vec![
            ProjectRecord::new("z", "zeta", 2024, "ai"),
            ProjectRecord::new("b", "Beta", 2024, "ai"),
            ProjectRecord::new("a", "alpha", 2024, "ai"),
        ];
        let sorted = sort_projects(&projects);
        assert_eq!(titles(&sorted), vec!["2024/alpha", "2024/Beta", "2024/zeta"]);
        assert_eq!(collate("a", "A"), Ordering::Less);
    }

    #[test]
    fn test_title_collation_places_accented_letters() {
        assert_eq!(collate("Çay", "Zebra"), Ordering::Less);
        assert_eq!(collate("Ördek", "Pasta"), Ordering::Less);

        let projects = vec![
            ProjectRecord::new("z", "Zebra", 2023, "ai"),
            ProjectRecord::new("e", "Éclair", 2023, "ai"),
            ProjectRecord::new("c", "Çay", 2023, "ai"),
            ProjectRecord::new("a", "apple", 2023, "ai"),
        ];
        assert_eq!(
            titles(&sort_projects(&projects)),
            vec!["2023/apple", "2023/Çay", "2023/Éclair", "2023/Zebra"]
        );
    }

    #[test]
    fn test_filter_all_keeps_order() {
        let projects = vec![
            ProjectRecord::new("x", "X", 2020, "robotics"),
            ProjectRecord::new("y", "Y", 2025, "ai"),
        ];
        let all = filter_projects(&projects, &CategoryFilter::from_token("all"));
        assert_eq!(all, vec![&projects[0], &projects[1]]);
    }

    #[test]
    fn test_filter_is_exact_and_case_sensitive() {
        let projects = vec![
            ProjectRecord::new("r1", "Robotaxi", 2024, "robotics"),
            ProjectRecord::new("r2", "Arm", 2023, "Robotics"),
            ProjectRecord::new("u1", "Shader", 2025, "unity-shaders"),
        ];
        let robotics = filter_projects(&projects, &CategoryFilter::from_token("robotics"));
        assert_eq!(robotics.len(), 1);
        assert_eq!(robotics[0].slug, "r1");

        let unity = filter_projects(&projects, &CategoryFilter::from_token("unity"));
        assert!(unity.is_empty());
    }

    #[test]
    fn test_labels_and_styles() {
        assert_eq!(category_label("robotics"), "Robotics / ROS");
        assert_eq!(category_label("ai"), "AI / CV");
        assert_eq!(category_label("web3"), "web3");
        assert_eq!(category_style("web3"), DEFAULT_CATEGORY_STYLE);
        assert!(category_style("backend").contains("blue"));
    }

    #[test]
    fn test_filter_tabs_cover_every_category() {
        let tabs = filter_tabs();
        assert_eq!(tabs[0].id, ALL_TOKEN);
        for category in Category::ALL {
            assert!(tabs.iter().any(|t| t.id == category.token()));
        }
    }

    #[test]
    fn test_featured_picks_newest_per_domain() {
        let projects = vec![
            ProjectRecord::new("api", "Banking API", 2025, "backend"),
            ProjectRecord::new("old-api", "Old API", 2022, "backend"),
            ProjectRecord::new("cv", "Deepfake", 2024, "ai"),
            ProjectRecord::new("skin", "Skin", 2025, "ai"),
            ProjectRecord::new("water", "Water Shader", 2025, "unity-shaders"),
            ProjectRecord::new("kitchen", "Kitchen Chaos", 2023, "unity"),
        ];
        let featured = featured_by_domain(&projects);
        let slugs: Vec<&str> = featured.iter().map(|p| p.slug.as_str()).collect();
        // No robotics project, so that domain is skipped
        assert_eq!(slugs, vec!["api", "skin", "water"]);
    }

    #[test]
    fn test_unity_projects_and_lookup() {
        let projects = vec![
            ProjectRecord::new("kitchen", "Kitchen Chaos", 2023, "unity"),
            ProjectRecord::new("rim", "Rim Light", 2025, "unity-shaders"),
            ProjectRecord::new("api", "API", 2025, "backend"),
        ];
        assert_eq!(unity_projects(&projects).len(), 2);
        assert_eq!(find_by_slug(&projects, "api").map(|p| p.year), Some(2025));
        assert!(find_by_slug(&projects, "missing").is_none());
    }

    #[test]
    fn test_headline_and_source_url() {
        let mut project = ProjectRecord::new("rim", "Rim Light", 2025, "unity-shaders");
        project.summary = "Summary".into();
        assert_eq!(project.headline(), "Summary");
        project.one_liner = Some("One liner".into());
        assert_eq!(project.headline(), "One liner");

        assert_eq!(project.source_url(), None);
        project.links = Some(ProjectLinks {
            github: Some("https://github.com/example/rim".into()),
            demo: None,
        });
        assert_eq!(project.source_url(), Some("https://github.com/example/rim"));
    }
}
