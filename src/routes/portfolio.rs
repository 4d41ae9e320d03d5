use axum::{
    extract::{Path, Query},
    response::IntoResponse,
};
use folio_profile::{Project, format, portfolio};
use serde::Deserialize;

use crate::template::Template;

#[derive(Deserialize, Default)]
pub struct GridQuery {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub q: String,
}

#[derive(askama::Template)]
#[template(path = "partials/portfolio-grid.html")]
pub struct PortfolioGridTemplate {
    pub projects: Vec<Project>,
    pub category: String,
    pub query: String,
}

#[derive(askama::Template)]
#[template(path = "partials/project-detail.html")]
pub struct ProjectDetailTemplate {
    pub project: Project,
    pub summary: String,
}

/// Projects of the selected category that also match the search keyword.
pub fn filter(category: &str, keyword: &str) -> Vec<Project> {
    let matches = portfolio::search(keyword);

    portfolio::by_category(category)
        .into_iter()
        .filter(|p| matches.iter().any(|m| m.id == p.id))
        .collect()
}

pub async fn grid(template: Template, Query(input): Query<GridQuery>) -> impl IntoResponse {
    template.render(PortfolioGridTemplate {
        projects: filter(&input.category, &input.q),
        category: input.category,
        query: input.q,
    })
}

pub async fn detail(template: Template, Path(id): Path<String>) -> impl IntoResponse {
    let project = crate::try_page_response!(
        opt: id.parse().ok().and_then(portfolio::by_id),
        template
    );

    template
        .render(ProjectDetailTemplate {
            summary: format::truncate(project.description, format::DEFAULT_TRUNCATE),
            project,
        })
        .into_response()
}
