use serde::Serialize;

use super::{EnrichedProject, ErrorState, LoaderSnapshot, LoadingState};

/// The title of the featured projects section.
pub const FEATURED_SECTION_TITLE: &str = "Featured Projects";

/// The title of the learning modules section.
pub const MODULES_SECTION_TITLE: &str = "Learning Modules";

/// The maximum number of README lines shown on a card.
const README_EXCERPT_LINES: usize = 3;

/// A project as shown on a card.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub homepage: Option<String>,
    pub topics: Vec<String>,
    pub language: Option<String>,
    pub stars: Option<u32>,
    pub forks: Option<u32>,
    pub readme_excerpt: Option<String>,
}

impl From<&EnrichedProject> for ProjectCard {
    fn from(project: &EnrichedProject) -> Self {
        let record = project.record();
        Self {
            name: record.name.to_string(),
            description: record.description.clone(),
            url: record.html_url.clone(),
            homepage: record.homepage.clone().filter(|homepage| !homepage.is_empty()),
            topics: record.topics.clone(),
            language: record.language.clone(),
            stars: record.stargazers_count,
            forks: record.forks_count,
            readme_excerpt: project
                .readme_content()
                .and_then(|readme| readme_excerpt(readme, README_EXCERPT_LINES)),
        }
    }
}

/// Reduces a README to its first lines of plain text.
///
/// Heading, quote and list markers are stripped, and lines made of images, badges or
/// HTML are dropped. The text is never rendered as markup.
pub fn readme_excerpt(readme: &str, max_lines: usize) -> Option<String> {
    let lines = readme
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with("![") && !line.starts_with("[!["))
        .filter(|line| !line.starts_with('<'))
        .filter(|line| !line.starts_with("```") && !line.chars().all(|c| "-=*_|: ".contains(c)))
        .map(strip_markers)
        .filter(|line| !line.is_empty())
        .take(max_lines)
        .collect::<Vec<_>>();

    (!lines.is_empty()).then(|| lines.join("\n"))
}

fn strip_markers(line: &str) -> String {
    let line = line.trim_start_matches(['#', '>']).trim_start();
    let line = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("+ "))
        .unwrap_or(line);

    line.replace("**", "").replace('`', "").trim().to_string()
}

/// What a section shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionStatus<'a> {
    Loading,
    Failed(&'a str),
    Ready,
}

/// A titled list of projects with the shared loading and error states.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProjectSection {
    pub title: String,
    pub projects: Vec<ProjectCard>,
    pub error: ErrorState,
    pub loading: LoadingState,
}

impl ProjectSection {
    fn new(title: &str, projects: &[EnrichedProject], snapshot: &LoaderSnapshot) -> Self {
        Self {
            title: title.to_string(),
            projects: projects.iter().map(ProjectCard::from).collect(),
            error: snapshot.error.clone(),
            loading: snapshot.loading.clone(),
        }
    }

    /// Loading takes precedence over failure, which takes precedence over content.
    pub fn status(&self) -> SectionStatus<'_> {
        if self.loading.is_loading {
            SectionStatus::Loading
        } else if self.error.has_error {
            SectionStatus::Failed(&self.error.message)
        } else {
            SectionStatus::Ready
        }
    }
}

/// The projects part of the portfolio page.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PortfolioView {
    pub featured: ProjectSection,
    pub modules: ProjectSection,
}

impl From<&LoaderSnapshot> for PortfolioView {
    fn from(snapshot: &LoaderSnapshot) -> Self {
        Self {
            featured: ProjectSection::new(
                FEATURED_SECTION_TITLE,
                &snapshot.result.featured,
                snapshot,
            ),
            modules: ProjectSection::new(MODULES_SECTION_TITLE, &snapshot.result.modules, snapshot),
        }
    }
}
