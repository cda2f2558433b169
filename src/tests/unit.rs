#[cfg(test)]
mod unit_tests {

    use crate::{Pool, TagError, Taggy, canonic_tag, Context};

    #[test]
    fn canonic_spelling_table() {
        let taggy = Taggy::default();
        assert_eq!(taggy.canonicalize("en-us", true).as_deref(), Some("en-US"));
        assert_eq!(taggy.canonicalize("zh-hans", true).as_deref(), Some("zh-Hans"));
        assert_eq!(taggy.canonicalize("sgn-be-fr", true).as_deref(), Some("sgn-BE-fr"));
        assert_eq!(taggy.canonicalize("zh-cmn-hans", true).as_deref(), Some("zh-cmn-Hans"));
        assert_eq!(taggy.canonicalize("i-klingon", true).as_deref(), Some("i-klingon"));
    }

    #[test]
    fn canonic_rejects_bad_primary_subtags() {
        let taggy = Taggy::default();
        assert_eq!(taggy.canonicalize("", true), None);
        assert_eq!(taggy.canonicalize("e", true), None);
        assert_eq!(taggy.canonicalize("engl", true), None);
        assert_eq!(taggy.canonicalize("_en", true), None);
    }

    #[test]
    fn error_kinds_are_distinct() {
        let ctx = Context::default();
        assert!(matches!(
            canonic_tag("engl", true, &ctx),
            Err(TagError::Invalid(_))
        ));
        let oversized = "a".repeat(300);
        assert!(matches!(
            canonic_tag(&oversized, true, &ctx),
            Err(TagError::TooLong)
        ));
    }

    #[test]
    fn extract_returns_language_unit() {
        let taggy = Taggy::default();
        assert_eq!(taggy.extract("en-us-x-priv").as_deref(), Some("en"));
        assert_eq!(taggy.extract("zh-min-nan-TW").as_deref(), Some("zh-min-nan"));
        assert_eq!(taggy.extract("not a tag"), None);
    }

    #[test]
    fn match_prefix_and_singleton_rules() {
        let taggy = Taggy::default();
        assert!(taggy.matches("en", "en"));
        assert!(taggy.matches("en-GB", "en"));
        assert!(!taggy.matches("en-a-bbb", "en"));
        assert!(taggy.matches("en-a-bbb", "*"));
    }

    #[test]
    fn resolve_consumes_groups_once() {
        let taggy = Taggy::default();
        let mut pool: Pool<&str> = taggy.pool([
            ("A", Some("en-GB")),
            ("B", Some("en-US")),
            ("C", Some("fr")),
            ("D", None::<&str>),
        ]);

        assert_eq!(taggy.resolve_pool("en-GB,en", &mut pool), ["A"]);
        assert_eq!(taggy.resolve_pool("en-GB,en", &mut pool), ["B"]);
        assert_eq!(taggy.resolve_pool("de", &mut pool), ["D"]);
        assert!(taggy.resolve_pool("de", &mut pool).is_empty());
        assert_eq!(pool.group_count(), 1); // only fr is left
    }

    #[test]
    fn resolve_one_shot() {
        let taggy = Taggy::default();
        let winners = taggy.resolve(
            "fr",
            [(1, Some("fr")), (2, Some("fr-FR")), (3, Some("en"))],
        );
        assert_eq!(winners, [1]);
    }
}
