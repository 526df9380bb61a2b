use chrono::{DateTime, Duration, Utc};
use serde_json::{Value, json};

use crate::common::GatewayError;
use crate::gateway::{Gateway, Record, Select};
use crate::models::Collection;

/// What [`seed_database`] inserted, per collection.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: Vec<(Collection, usize)>,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.inserted.iter().map(|(_, n)| n).sum()
    }
}

fn records(values: Vec<Value>) -> Vec<Record> {
    values
        .into_iter()
        .filter_map(|value| match value {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect()
}

/// Demo content for a fresh database.
pub fn demo_content(now: DateTime<Utc>) -> Vec<(Collection, Vec<Record>)> {
    let in_days = |days: i64| (now + Duration::days(days)).to_rfc3339();

    vec![
        (
            Collection::Internships,
            records(vec![
                json!({
                    "title": "Full Stack Development Intern",
                    "department": "Web Development",
                    "mode": "Remote",
                    "duration": "3 months",
                    "stipend": "₹15,000/month",
                    "skills_required": ["React", "Node.js", "MongoDB", "TypeScript"],
                    "description": "Join our team to build modern web applications using cutting-edge technologies.",
                    "requirements": "Basic knowledge of JavaScript, HTML, and CSS required.",
                    "is_active": true,
                }),
                json!({
                    "title": "Data Science Intern",
                    "department": "Data Science",
                    "mode": "Hybrid",
                    "duration": "6 months",
                    "stipend": "₹20,000/month",
                    "skills_required": ["Python", "Machine Learning", "Pandas", "SQL"],
                    "description": "Work on real-world data analysis projects and build predictive models.",
                    "requirements": "Knowledge of statistics and Python programming.",
                    "is_active": true,
                }),
                json!({
                    "title": "UI/UX Design Intern",
                    "department": "Design",
                    "mode": "On-site",
                    "duration": "2 months",
                    "stipend": "₹12,000/month",
                    "skills_required": ["Figma", "Adobe XD", "User Research", "Prototyping"],
                    "description": "Create beautiful and intuitive user interfaces for our products.",
                    "requirements": "Portfolio demonstrating design skills required.",
                    "is_active": true,
                }),
            ]),
        ),
        (
            Collection::Events,
            records(vec![
                json!({
                    "title": "Web Development Workshop",
                    "description": "Learn modern web development from industry experts",
                    "event_date": in_days(7),
                    "event_type": "Workshop",
                    "mode": "Online",
                    "location": "Zoom",
                    "max_participants": 100,
                    "registration_deadline": in_days(5),
                    "is_past": false,
                    "is_active": true,
                }),
                json!({
                    "title": "Career Guidance Seminar",
                    "description": "Get insights on building a successful career in tech",
                    "event_date": in_days(14),
                    "event_type": "Seminar",
                    "mode": "Hybrid",
                    "location": "Tech Hub, Bangalore",
                    "max_participants": 200,
                    "registration_deadline": in_days(10),
                    "is_past": false,
                    "is_active": true,
                }),
            ]),
        ),
        (
            Collection::Blogs,
            records(vec![
                json!({
                    "title": "How to Ace Your First Internship Interview",
                    "slug": "ace-first-internship-interview",
                    "content": "Complete guide to preparing for your first internship interview...",
                    "summary": "Learn essential tips and strategies to succeed in your first internship interview.",
                    "category": "Career Advice",
                    "author": "Priya Sharma",
                    "published": true,
                    "published_at": now.to_rfc3339(),
                }),
                json!({
                    "title": "Top 10 Skills Every Software Developer Needs",
                    "slug": "top-10-developer-skills",
                    "content": "In-depth analysis of must-have skills for modern developers...",
                    "summary": "Discover the most important technical and soft skills for software developers.",
                    "category": "Technology",
                    "author": "Amit Patel",
                    "published": true,
                    "published_at": now.to_rfc3339(),
                }),
            ]),
        ),
        (
            Collection::Testimonials,
            records(vec![
                json!({
                    "name": "Rahul Verma",
                    "college": "IIT Delhi",
                    "program": "Full Stack Development Internship",
                    "testimonial": "Amazing experience! The mentorship and real-world projects helped me land my dream job.",
                    "rating": 5,
                    "status": "approved",
                }),
                json!({
                    "name": "Ananya Singh",
                    "college": "BITS Pilani",
                    "program": "Data Science Workshop",
                    "testimonial": "The workshop was incredibly well-structured. I learned practical skills that I use daily.",
                    "rating": 5,
                    "status": "approved",
                }),
                json!({
                    "name": "Karthik Reddy",
                    "college": "NIT Trichy",
                    "program": "UI/UX Design Internship",
                    "testimonial": "Great learning environment with supportive mentors. Highly recommend to all students!",
                    "rating": 5,
                    "status": "approved",
                }),
            ]),
        ),
        (
            Collection::Faqs,
            records(vec![
                json!({
                    "question": "How do I apply for an internship?",
                    "answer": "Click on any internship listing and fill out the application form. You will need to provide your resume and basic information.",
                    "category": "Internships",
                    "order_index": 1,
                    "is_active": true,
                }),
                json!({
                    "question": "Are the internships paid?",
                    "answer": "Most of our internships offer stipends. The stipend amount varies by role and is mentioned in each internship listing.",
                    "category": "Internships",
                    "order_index": 2,
                    "is_active": true,
                }),
                json!({
                    "question": "How do I register for events?",
                    "answer": "Navigate to the Events page, select the event you want to attend, and click the Register button to fill out the registration form.",
                    "category": "Events",
                    "order_index": 3,
                    "is_active": true,
                }),
                json!({
                    "question": "Can I participate in events from other cities?",
                    "answer": "Yes! We offer both online and hybrid events. Online events can be attended from anywhere.",
                    "category": "Events",
                    "order_index": 4,
                    "is_active": true,
                }),
            ]),
        ),
        (
            Collection::SiteStats,
            records(vec![json!({
                "students_trained": 5000,
                "events_held": 150,
                "institutions_partnered": 50,
            })]),
        ),
    ]
}

/// Inserts the demo content into every collection that is still empty.
pub async fn seed_database<G: Gateway>(
    gateway: &G,
    now: DateTime<Utc>,
) -> Result<SeedReport, GatewayError> {
    let mut report = SeedReport::default();

    for (collection, rows) in demo_content(now) {
        if gateway.count(&Select::table(collection)).await? > 0 {
            log::debug!("Skipping seed for {collection}: already populated");
            continue;
        }

        let n = rows.len();
        for row in rows {
            gateway.insert(collection, row).await?;
        }

        log::info!("Seeded {n} rows into {collection}");
        report.inserted.push((collection, n));
    }

    Ok(report)
}
