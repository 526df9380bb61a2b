mod common;

#[cfg(test)]
pub mod model_tests {
    use serde_json::json;

    use super::common::*;

    use internhub::common::*;
    use internhub::gateway::*;
    use internhub::models::*;
    use internhub::navigation::*;

    fn sample_event(days: i64, is_past: bool) -> Event {
        serde_json::from_value(serde_json::Value::Object(event(
            1,
            "Sample",
            days_from_now(days),
            is_past,
        )))
        .expect("event fixture decodes")
    }

    #[test]
    fn test_rating_stars_fill_from_the_left() {
        let five = Rating::new(5).expect("valid rating");
        assert_eq!(five.stars(), "★★★★★");

        let one = Rating::new(1).expect("valid rating");
        assert_eq!(one.stars(), "★☆☆☆☆");
        assert_eq!(one.stars().chars().count(), usize::from(Rating::MAX));
    }

    #[test]
    fn test_rating_rejects_values_outside_one_to_five() {
        assert_eq!(Rating::new(0), Err(RatingError::OutOfRange(0)));
        assert_eq!(Rating::new(6), Err(RatingError::OutOfRange(6)));
        assert_eq!("3".parse::<Rating>().map(|r| r.value()), Ok(3));
        assert!(matches!(
            "three".parse::<Rating>(),
            Err(RatingError::NotANumber(_))
        ));
        assert_eq!(Rating::default().value(), 5);
    }

    #[test]
    fn test_rating_decodes_only_valid_numbers() {
        assert!(serde_json::from_value::<Rating>(json!(4)).is_ok());
        assert!(serde_json::from_value::<Rating>(json!(11)).is_err());
    }

    #[test]
    fn test_event_phase_uses_flag_or_date() {
        let now = fixed_now();

        assert_eq!(sample_event(2, false).phase(now), EventPhase::Upcoming);
        assert_eq!(sample_event(0, false).phase(now), EventPhase::Upcoming);
        assert_eq!(sample_event(-2, false).phase(now), EventPhase::Past);
        assert_eq!(sample_event(2, true).phase(now), EventPhase::Past);
    }

    #[test]
    fn test_event_display_date_is_long_form() {
        let event = sample_event(0, false);
        assert_eq!(event.display_date(), "March 1, 2026");
        assert_eq!(event.display_time(), "12:00 PM");
    }

    #[test]
    fn test_testimonial_status_round_trips_through_text() {
        assert_eq!(
            "approved".parse::<TestimonialStatus>(),
            Ok(TestimonialStatus::Approved)
        );
        assert_eq!(TestimonialStatus::default(), TestimonialStatus::Pending);
        assert!("archived".parse::<TestimonialStatus>().is_err());
    }

    #[test]
    fn test_testimonial_initial_is_uppercase() {
        let t: Testimonial = serde_json::from_value(serde_json::Value::Object(testimonial(
            1, "zoya", "approved", 1,
        )))
        .expect("testimonial fixture decodes");
        assert_eq!(t.initial(), "Z");
        assert!(t.is_public());
    }

    #[test]
    fn test_collection_names_match_tables() {
        for collection in Collection::ALL {
            assert_eq!(collection.as_str().parse::<Collection>().ok(), Some(collection));
        }
        assert_eq!(Collection::GalleryImages.as_str(), "gallery_images");
        assert!("users".parse::<Collection>().is_err());
    }

    #[test]
    fn test_select_rejects_unsafe_identifiers_and_negative_limits() {
        let bad_field = Select::table(Collection::Blogs).eq("title; DROP TABLE blogs", "x");
        assert!(matches!(bad_field.validate(), Err(GatewayError::InvalidField(_))));

        let bad_order = Select::table(Collection::Blogs).order("created_at desc", true);
        assert!(bad_order.validate().is_err());

        let bad_limit = Select::table(Collection::Blogs).limit(-1);
        assert!(matches!(bad_limit.validate(), Err(GatewayError::InvalidRequest(_))));

        assert!(
            Select::table(Collection::Blogs)
                .eq("published", true)
                .order("published_at", false)
                .limit(3)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_select_matches_and_conditions_with_an_or_group() {
        let query = Select::table(Collection::Events)
            .eq("is_active", true)
            .or(vec![
                Condition::new("is_past", Op::Eq, true),
                Condition::new("event_date", Op::Lt, fixed_now()),
            ]);

        let past_by_date = event(1, "a", days_from_now(-1), false);
        let past_by_flag = event(2, "b", days_from_now(1), true);
        let upcoming = event(3, "c", days_from_now(1), false);
        let mut inactive = event(4, "d", days_from_now(-1), true);
        inactive.insert("is_active".into(), json!(false));

        assert!(query.matches(&past_by_date));
        assert!(query.matches(&past_by_flag));
        assert!(!query.matches(&upcoming));
        assert!(!query.matches(&inactive));
    }

    #[test]
    fn test_unknown_view_falls_back_to_home() {
        assert_eq!(View::parse_or_home("internships"), View::Internships);
        assert_eq!(View::parse_or_home("/FAQ"), View::Faq);
        assert_eq!(View::parse_or_home("careers"), View::Home);
        assert_eq!(View::parse_or_home(""), View::Home);
    }

    #[test]
    fn test_nav_marks_exactly_the_current_view() {
        let items = nav_items(View::Events);

        assert_eq!(items.len(), View::MENU.len());
        assert_eq!(items[0].path, "/");
        let active: Vec<&str> = items.iter().filter(|i| i.active).map(|i| i.label).collect();
        assert_eq!(active, vec!["Events"]);
        assert!(items.iter().all(|i| i.label != "Admin"));
    }

    #[test]
    fn test_admin_view_has_no_shell() {
        assert!(!View::Admin.shows_shell());
        assert!(View::MENU.iter().all(View::shows_shell));
        assert!(nav_items(View::Admin).iter().all(|i| !i.active));
    }
}
