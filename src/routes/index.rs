use axum::{extract::State, response::IntoResponse};
use folio_contact::{ContactFormInput, ContactInfo, Limits};
use folio_profile::{
    Certification, Education, Internship, Project, SkillGroup, SkillsSummary, education, format,
    internship, portfolio, skills,
};
use folio_shared::theme::Theme;
use time::OffsetDateTime;

use crate::{config::SiteConfig, middleware::Visitor, routes::AppState, template::Template};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub theme: Theme,
    pub site: SiteConfig,
    pub initials: String,
    pub contact: ContactInfo,
    pub mailto: String,
    pub tel: String,
    pub phone: String,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub education_years: i32,
    pub skills: Vec<SkillGroup>,
    pub summary: SkillsSummary,
    pub internship: Internship,
    pub internship_duration: String,
    pub categories: Vec<&'static str>,
    pub projects: Vec<Project>,
    pub category: String,
    pub query: String,
    pub draft: ContactFormInput,
    pub draft_saved_at: Option<String>,
    pub limits: Limits,
    pub year: i32,
}

pub async fn page(
    template: Template,
    visitor: Visitor,
    State(app): State<AppState>,
) -> impl IntoResponse {
    let store = visitor.store(&app.store);
    let draft = folio_contact::load_draft(&store).await;
    let year = OffsetDateTime::now_utc().year();
    let contact = template.site.contact_info();

    template.render(IndexTemplate {
        theme: template.theme,
        site: template.site.clone(),
        initials: format::initials(&template.site.owner),
        mailto: contact.mailto_link(""),
        tel: contact.tel_link(),
        phone: format::format_phone(&contact.phone),
        contact,
        education: education::timeline(),
        certifications: education::certifications(),
        education_years: education::total_years(year),
        skills: skills::all(),
        summary: skills::summary(),
        internship: internship::data(),
        internship_duration: internship::formatted_duration(),
        categories: portfolio::categories(),
        projects: portfolio::all(),
        category: portfolio::ALL_CATEGORY.to_owned(),
        query: String::new(),
        draft_saved_at: draft.as_ref().map(|d| format::format_date(&d.saved_at)),
        draft: draft.map(|d| d.input()).unwrap_or_default(),
        limits: *app.contact.limits(),
        year,
    })
}
