mod common;

#[cfg(test)]
pub mod gateway_tests {
    use serde_json::{Value, json};
    use sqlx::PgPool;

    use super::common::*;

    use internhub::common::*;
    use internhub::gateway::*;
    use internhub::models::*;

    #[tokio::test]
    async fn test_memory_select_filters_orders_and_limits() {
        let gateway = internships_gateway();

        let query = Select::table(Collection::Internships)
            .eq("department", "IT")
            .order("created_at", true)
            .limit(1);
        let rows: Vec<Internship> = fetch(&gateway, &query).await.expect("select works");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Frontend Intern");
        assert_eq!(gateway.count(&Select::table(Collection::Internships)).await.ok(), Some(3));
    }

    #[tokio::test]
    async fn test_memory_nulls_sort_last_both_ways() {
        let gateway = MemoryGateway::new();
        let mut undated = blog(3, "Draft", "Learning", 0);
        undated.insert("published_at".into(), Value::Null);
        gateway.seed(
            Collection::Blogs,
            [blog(1, "Older", "Learning", 5), undated, blog(2, "Newer", "Learning", 1)],
        );

        for ascending in [true, false] {
            let query = Select::table(Collection::Blogs).order("published_at", ascending);
            let rows: Vec<Blog> = fetch(&gateway, &query).await.expect("select works");
            assert_eq!(rows.last().map(|b| b.title.as_str()), Some("Draft"));
        }
    }

    #[tokio::test]
    async fn test_memory_insert_fills_defaults() {
        let gateway = MemoryGateway::new();
        gateway
            .insert(
                Collection::Testimonials,
                record(json!({ "name": "Isha", "rating": 4 })),
            )
            .await
            .expect("insert works");

        let stored = gateway.rows(Collection::Testimonials);
        assert_eq!(stored.len(), 1);
        assert!(stored[0].get("id").and_then(Value::as_str).is_some());
        assert!(stored[0].get("created_at").is_some());
        assert_eq!(stored[0].get("status"), Some(&Value::from("pending")));
    }

    #[tokio::test]
    async fn test_memory_insert_rejects_empty_records() {
        let gateway = MemoryGateway::new();
        let result = gateway.insert(Collection::ContactSubmissions, Record::new()).await;

        assert!(matches!(result, Err(GatewayError::EmptyRecord(Collection::ContactSubmissions))));
        assert_eq!(gateway.insert_count(), 0);
    }

    #[tokio::test]
    async fn test_decode_failure_names_the_collection() {
        let gateway = MemoryGateway::new();
        gateway.seed(Collection::Faqs, [record(json!({ "question": "Broken" }))]);

        let result: Result<Vec<Faq>, _> = fetch(&gateway, &Select::table(Collection::Faqs)).await;

        assert!(matches!(
            result,
            Err(GatewayError::Decode { collection: Collection::Faqs, .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_query_is_refused_before_reading() {
        let gateway = internships_gateway();
        let query = Select::table(Collection::Internships).order("1; DROP", true);

        assert!(gateway.select(&query).await.is_err());
        assert_eq!(gateway.read_count(), 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL pointing at a Postgres server"]
    async fn test_pg_select_and_count_follow_filters(pool: PgPool) {
        let gateway = PgGateway::from_pool(pool);
        for row in [
            internship(1, "Frontend Intern", "IT", "Remote", 3),
            internship(2, "Data Intern", "Data Science", "Hybrid", 2),
            internship(3, "Backend Intern", "IT", "Hybrid", 1),
        ] {
            gateway
                .insert(Collection::Internships, row)
                .await
                .expect("insert works");
        }

        let query = Select::table(Collection::Internships)
            .eq("department", "IT")
            .order("created_at", false);
        let rows: Vec<Internship> = fetch(&gateway, &query).await.expect("select works");

        let titles: Vec<&str> = rows.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Backend Intern", "Frontend Intern"]);
        assert_eq!(rows[0].skills_required, vec!["Communication"]);
        assert_eq!(gateway.count(&query).await.ok(), Some(2));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL pointing at a Postgres server"]
    async fn test_pg_past_query_uses_the_or_group(pool: PgPool) {
        let gateway = PgGateway::from_pool(pool);
        for row in [
            event(1, "Future", days_from_now(7), false),
            event(2, "Flagged", days_from_now(7), true),
            event(3, "Old", days_from_now(-7), false),
        ] {
            gateway.insert(Collection::Events, row).await.expect("insert works");
        }

        let past = Select::table(Collection::Events)
            .or(vec![
                Condition::new("is_past", Op::Eq, true),
                Condition::new("event_date", Op::Lt, fixed_now()),
            ])
            .order("event_date", false);
        let rows: Vec<Event> = fetch(&gateway, &past).await.expect("select works");

        let titles: Vec<&str> = rows.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Flagged", "Old"]);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL pointing at a Postgres server"]
    async fn test_pg_testimonial_defaults_to_pending(pool: PgPool) {
        let gateway = PgGateway::from_pool(pool);
        let mut row = testimonial(1, "Isha", "approved", 0);
        row.remove("status");
        gateway
            .insert(Collection::Testimonials, row)
            .await
            .expect("insert works");

        let approved = Select::table(Collection::Testimonials).eq("status", "approved");
        assert_eq!(gateway.count(&approved).await.ok(), Some(0));

        let pending = Select::table(Collection::Testimonials).eq("status", "pending");
        assert_eq!(gateway.count(&pending).await.ok(), Some(1));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL pointing at a Postgres server"]
    async fn test_pg_session_lifecycle(pool: PgPool) {
        let gateway = PgGateway::from_pool(pool);
        gateway
            .upsert_admin("admin@example.com", "correct horse")
            .await
            .expect("admin created");

        assert!(matches!(
            gateway
                .sign_in_with_password("admin@example.com", "wrong")
                .await,
            Err(GatewayError::InvalidCredentials)
        ));

        let session = gateway
            .sign_in_with_password("admin@example.com", "correct horse")
            .await
            .expect("sign in works");
        assert_eq!(session.email, "admin@example.com");

        let found = gateway.get_session(&session.token).await.expect("lookup works");
        assert_eq!(found.map(|s| s.email), Some("admin@example.com".to_string()));

        gateway.sign_out(&session.token).await.expect("sign out works");
        assert_eq!(gateway.get_session(&session.token).await.ok(), Some(None));
    }
}
