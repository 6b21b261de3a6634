use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBookOpen, FaBriefcase, FaDownload};
use dioxus_free_icons::Icon;

use crate::{
    client::components::article_class,
    model::{resume::timeline_caption, EducationEntry, ExperienceEntry, Skill},
    state::{Section, Tab, ViewState},
};

static RESUME_FILE: &str = "Geo_Cherian_Mathew_Resume.pdf";

#[component]
pub fn Resume(
    education: Vec<EducationEntry>,
    experience: Vec<ExperienceEntry>,
    skills: Vec<Skill>,
) -> Element {
    let view = use_context::<Signal<ViewState>>();
    let class = article_class(&view.read(), Tab::Resume, "resume");

    rsx!(
        article { class, "data-page": "resume",
            header {
                h2 { class: "h2 article-title", "Resume" }
            }
            section { class: "timeline",
                div { class: "title-wrapper education-header",
                    div { class: "education-title-group",
                        div { class: "icon-box",
                            Icon { width: 18, height: 18, icon: FaBookOpen }
                        }
                        h3 { class: "h3", "Education" }
                    }
                    a {
                        href: "/assets/files/{RESUME_FILE}",
                        download: RESUME_FILE,
                        class: "download-btn",
                        Icon { width: 16, height: 16, icon: FaDownload }
                        span { "Download Resume" }
                    }
                }
                ol { class: "timeline-list",
                    if let Some(message) = Section::Education.placeholder(education.len()) {
                        li { class: "timeline-item timeline-empty",
                            p { "{message}" }
                        }
                    }
                    {education.iter().map(|entry| {
                        let caption = timeline_caption(entry.duration.as_deref(), entry.institution.as_deref());
                        rsx!(
                            li { key: "{entry.id}", class: "timeline-item",
                                h4 { class: "h4 timeline-item-title", "{entry.degree}" }
                                span { "{caption}" }
                                if let Some(description) = &entry.description {
                                    p { class: "timeline-text", "{description}" }
                                }
                            }
                        )
                    })}
                }
            }
            section { class: "timeline",
                div { class: "title-wrapper",
                    div { class: "icon-box",
                        Icon { width: 18, height: 18, icon: FaBriefcase }
                    }
                    h3 { class: "h3", "Experience" }
                }
                ol { class: "timeline-list",
                    {experience.iter().map(|entry| {
                        let caption = timeline_caption(entry.duration.as_deref(), entry.organization.as_deref());
                        rsx!(
                            li { key: "{entry.id}", class: "timeline-item",
                                h4 { class: "h4 timeline-item-title", "{entry.role}" }
                                span { "{caption}" }
                                if let Some(description) = &entry.description {
                                    p { class: "timeline-text", "{description}" }
                                }
                            }
                        )
                    })}
                }
            }
            section { class: "skill",
                h3 { class: "h3 skills-title", "Technical Proficiency" }
                ul { class: "skills-list content-card",
                    {skills.iter().map(|skill| {
                        let percent = skill.percent();
                        rsx!(
                            li { key: "{skill.id}", class: "skills-item",
                                div { class: "skill",
                                    div { class: "title-wrapper",
                                        h5 { class: "h5", "{skill.name}" }
                                        data { value: "{percent}", "{percent}%" }
                                    }
                                    div { class: "skill-progress-bg",
                                        div { class: "skill-progress-fill", style: "width: {percent}%" }
                                    }
                                }
                            }
                        )
                    })}
                }
            }
        }
    )
}
