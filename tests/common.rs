#![allow(dead_code)]

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

use internhub::gateway::{MemoryGateway, Record};
use internhub::models::Collection;

pub const TIMEOUT: Duration = Duration::from_secs(2);

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("valid test timestamp")
}

pub fn days_from_now(days: i64) -> DateTime<Utc> {
    fixed_now() + chrono::Duration::days(days)
}

pub fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("test record must be an object, got {other}"),
    }
}

pub fn internship(n: u128, title: &str, department: &str, mode: &str, age_days: i64) -> Record {
    record(json!({
        "id": id(n),
        "title": title,
        "department": department,
        "mode": mode,
        "duration": "3 months",
        "stipend": "Unpaid",
        "skills_required": ["Communication"],
        "description": format!("{title} internship"),
        "is_active": true,
        "created_at": days_from_now(-age_days).to_rfc3339(),
    }))
}

pub fn event(n: u128, title: &str, event_date: DateTime<Utc>, is_past: bool) -> Record {
    record(json!({
        "id": id(n),
        "title": title,
        "description": format!("{title} description"),
        "event_date": event_date.to_rfc3339(),
        "event_type": "Workshop",
        "mode": "Online",
        "is_past": is_past,
        "is_active": true,
        "created_at": days_from_now(-30).to_rfc3339(),
    }))
}

pub fn testimonial(n: u128, name: &str, status: &str, age_days: i64) -> Record {
    record(json!({
        "id": id(n),
        "name": name,
        "college": "State University",
        "program": "Web Development",
        "testimonial": format!("{name} had a great time"),
        "rating": 5,
        "status": status,
        "created_at": days_from_now(-age_days).to_rfc3339(),
    }))
}

pub fn blog(n: u128, title: &str, category: &str, age_days: i64) -> Record {
    record(json!({
        "id": id(n),
        "title": title,
        "slug": title.to_lowercase().replace(' ', "-"),
        "content": "Body",
        "summary": format!("About {title}"),
        "category": category,
        "author": "InternHub Team",
        "published": true,
        "published_at": days_from_now(-age_days).to_rfc3339(),
        "created_at": days_from_now(-age_days).to_rfc3339(),
    }))
}

pub fn gallery_image(n: u128, title: &str, category: &str, age_days: i64) -> Record {
    record(json!({
        "id": id(n),
        "title": title,
        "image_url": format!("https://images.example/{n}.jpg"),
        "category": category,
        "created_at": days_from_now(-age_days).to_rfc3339(),
    }))
}

pub fn faq(n: u128, question: &str, order_index: i32, is_active: bool) -> Record {
    record(json!({
        "id": id(n),
        "question": question,
        "answer": format!("Answer to {question}"),
        "order_index": order_index,
        "is_active": is_active,
        "created_at": days_from_now(-10).to_rfc3339(),
    }))
}

pub fn site_stats() -> Record {
    record(json!({
        "id": id(900),
        "students_trained": 5000,
        "events_held": 150,
        "institutions_partnered": 50,
    }))
}

/// Three internships over two departments and two modes.
pub fn internships_gateway() -> MemoryGateway {
    let gateway = MemoryGateway::new();
    gateway.seed(
        Collection::Internships,
        [
            internship(1, "Frontend Intern", "IT", "Remote", 3),
            internship(2, "Data Intern", "Data Science", "Hybrid", 2),
            internship(3, "Backend Intern", "IT", "Hybrid", 1),
        ],
    );
    gateway
}
