//! Row factories. Each returns the JSON the hosted store would send for one row.

use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Value};

/// Creation timestamp `days` days after a fixed epoch, so tests can reason about ordering.
pub fn created_at(days: i64) -> String {
    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (epoch + Duration::days(days)).to_rfc3339()
}

pub fn profile(name: &str, role: &str) -> Value {
    json!({
        "id": 1,
        "name": name,
        "role": role,
        "bio": "First paragraph.\n\nSecond paragraph.",
        "location": "Kochi, India",
        "email": "owner@example.com",
        "avatar_url": "https://cdn.example.com/avatar.png",
    })
}

pub fn project(id: i64, title: &str, category: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{} description", title),
        "category": category,
        "github_link": format!("https://github.com/example/project-{}", id),
        "live_link": null,
        "image_url": format!("https://cdn.example.com/projects/{}.png", id),
        "created_at": created_at(id),
    })
}

pub fn experience(id: i64, role: &str, organization: &str) -> Value {
    json!({
        "id": id,
        "role": role,
        "organization": organization,
        "duration": "2024 - Present",
        "description": "Built things.",
        "created_at": created_at(id),
    })
}

pub fn education(id: i64, degree: &str, institution: &str) -> Value {
    json!({
        "id": id,
        "degree": degree,
        "institution": institution,
        "duration": "2022 - 2026",
        "description": null,
        "created_at": created_at(id),
    })
}

pub fn skill(id: i64, name: &str, level: i64) -> Value {
    json!({ "id": id, "name": name, "level": level })
}

pub fn certificate(id: i64, title: &str, category: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "issuer": "Example Academy",
        "description": null,
        "category": category,
        "image_url": format!("https://cdn.example.com/certificates/{}.png", id),
        "created_at": created_at(id),
    })
}

pub fn gallery_item(id: i64) -> Value {
    json!({
        "id": id,
        "image_url": format!("https://cdn.example.com/gallery/{}.jpg", id),
        "created_at": created_at(id),
    })
}
