mod common;

#[cfg(test)]
pub mod service_tests {
    use super::common::*;

    use internhub::gateway::*;
    use internhub::models::*;
    use internhub::pages::*;
    use internhub::services::*;

    #[test]
    fn test_password_hash_verifies_only_its_password() {
        let hash = PasswordManager::hash_password("s3cret-pass").expect("hashing works");

        assert!(hash.starts_with("$argon2id$"));
        assert!(PasswordManager::verify_password("s3cret-pass", &hash).expect("verifies"));
        assert!(!PasswordManager::verify_password("other", &hash).expect("verifies"));
    }

    #[test]
    fn test_dummy_hash_is_a_valid_argon2_hash() {
        let hash = PasswordManager::dummy_hash();
        assert!(PasswordManager::verify_password("anything", hash).is_ok());
    }

    #[tokio::test]
    async fn test_seed_fills_empty_collections_once() {
        let gateway = MemoryGateway::new();

        let report = seed_database(&gateway, fixed_now())
            .await
            .expect("seeding succeeds");
        assert!(report.total() > 0);
        assert_eq!(report.total(), gateway.insert_count());

        let again = seed_database(&gateway, fixed_now())
            .await
            .expect("seeding succeeds");
        assert_eq!(again.total(), 0);
        assert_eq!(report.total(), gateway.insert_count());
    }

    #[tokio::test]
    async fn test_seed_skips_populated_collections() {
        let gateway = MemoryGateway::new();
        gateway.seed(Collection::Faqs, [faq(1, "Existing?", 1, true)]);

        let report = seed_database(&gateway, fixed_now())
            .await
            .expect("seeding succeeds");

        assert!(report.inserted.iter().all(|(c, _)| *c != Collection::Faqs));
        assert_eq!(gateway.rows(Collection::Faqs).len(), 1);
    }

    #[tokio::test]
    async fn test_seeded_site_renders_every_page() {
        let gateway = MemoryGateway::new();
        seed_database(&gateway, fixed_now())
            .await
            .expect("seeding succeeds");

        let mut home = HomePage::new();
        home.load(&gateway, TIMEOUT).await;
        assert!(home.site_stats().is_some());
        assert_eq!(home.testimonials.items().len(), 3);
        assert_eq!(home.blogs.items().len(), 2);

        let mut internships = InternshipsPage::new();
        internships.load(&gateway, TIMEOUT).await;
        assert_eq!(internships.view().len(), 3);

        let mut events = EventsPage::new(fixed_now());
        events.load(&gateway, TIMEOUT).await;
        assert_eq!(events.upcoming_events().len(), 2);
        assert!(events.past_events().is_empty());
        assert_eq!(events.upcoming_events()[0].title, "Web Development Workshop");

        let mut faqs = FaqPage::new();
        faqs.load(&gateway, TIMEOUT).await;
        assert_eq!(faqs.faqs.items().len(), 4);
        assert_eq!(faqs.faqs.items()[0].order_index, 1);

        let mut gallery = GalleryPage::new();
        gallery.load(&gateway, TIMEOUT).await;
        assert!(gallery.view().is_empty());
        assert!(gallery.images.state().is_ready());
    }
}
