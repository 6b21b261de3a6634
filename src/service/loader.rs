use dioxus_logger::tracing;

use crate::{
    error::StoreError,
    model::{Certificate, EducationEntry, ExperienceEntry, GalleryItem, Profile, Project, Skill},
    store::{fetch_all, fetch_one, DataStore, Select},
};

pub static PROFILES: &str = "profiles";
pub static PROJECTS: &str = "projects";
pub static EXPERIENCE: &str = "experience";
pub static EDUCATION: &str = "education";
pub static SKILLS: &str = "skills";
pub static CERTIFICATES: &str = "certificates";
pub static GALLERY: &str = "gallery";

/// Everything the portfolio renders from the store.
#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioData {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<Skill>,
    pub certificates: Vec<Certificate>,
    pub gallery: Vec<GalleryItem>,
}

impl Default for PortfolioData {
    fn default() -> Self {
        Self {
            profile: Profile::fallback(),
            projects: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            certificates: Vec::new(),
            gallery: Vec::new(),
        }
    }
}

fn newest_first(collection: &'static str) -> Select {
    Select::collection(collection).order_by("created_at", false)
}

/// Read every collection concurrently.
///
/// The batch is all-or-nothing: the first failing read fails the whole load. A missing
/// profile row is not a failure and yields [`Profile::fallback`].
pub async fn load_portfolio<S: DataStore>(store: &S) -> Result<PortfolioData, StoreError> {
    let projects_query = newest_first(PROJECTS);
    let experience_query = newest_first(EXPERIENCE);
    let education_query = newest_first(EDUCATION);
    let skills_query = Select::collection(SKILLS).order_by("id", true);
    let certificates_query = newest_first(CERTIFICATES);
    let gallery_query = newest_first(GALLERY);

    let (profile, projects, experience, education, skills, certificates, gallery) = futures::try_join!(
        fetch_one::<Profile, _>(store, Select::collection(PROFILES)),
        fetch_all::<Project, _>(store, &projects_query),
        fetch_all::<ExperienceEntry, _>(store, &experience_query),
        fetch_all::<EducationEntry, _>(store, &education_query),
        fetch_all::<Skill, _>(store, &skills_query),
        fetch_all::<Certificate, _>(store, &certificates_query),
        fetch_all::<GalleryItem, _>(store, &gallery_query),
    )?;

    Ok(PortfolioData {
        profile: profile.unwrap_or_else(Profile::fallback),
        projects,
        experience,
        education,
        skills,
        certificates,
        gallery,
    })
}

/// [`load_portfolio`], logging any failure and falling back to [`PortfolioData::default`].
pub async fn load_or_default<S: DataStore>(store: &S) -> PortfolioData {
    match load_portfolio(store).await {
        Ok(data) => data,
        Err(err) => {
            tracing::error!("Failed to load portfolio data: {}", err);

            PortfolioData::default()
        }
    }
}
