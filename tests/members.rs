#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use kranos::db::db::Db;
    use kranos::db::members::{Member, MemberStatus, Members};
    use kranos::libs::gym::Gym;
    use std::str::FromStr;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MemberTestContext {
        _temp_dir: TempDir,
        gym: Gym,
    }

    impl TestContext for MemberTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("kranos.db")).unwrap();
            MemberTestContext {
                _temp_dir: temp_dir,
                gym: Gym::new(db),
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(MemberTestContext)]
    #[test]
    fn test_add_member_defaults_to_active(ctx: &mut MemberTestContext) {
        let member = ctx.gym.add_member("Ana", Some("ana@x.com"), Some("555-1000"), date(2024, 1, 15)).unwrap();

        assert_eq!(member.id, Some(1));
        assert_eq!(member.name, "Ana");
        assert_eq!(member.email.as_deref(), Some("ana@x.com"));
        assert_eq!(member.phone.as_deref(), Some("555-1000"));
        assert_eq!(member.join_date, date(2024, 1, 15));
        assert_eq!(member.status, MemberStatus::Active);
    }

    #[test_context(MemberTestContext)]
    #[test]
    fn test_optional_contact_fields_stay_absent(ctx: &mut MemberTestContext) {
        ctx.gym.add_member("Bo", None, None, date(2024, 2, 1)).unwrap();

        let members = ctx.gym.list_members().unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].email, None);
        assert_eq!(members[0].phone, None);
    }

    #[test_context(MemberTestContext)]
    #[test]
    fn test_list_members_ordered_by_name(ctx: &mut MemberTestContext) {
        ctx.gym.add_member("Zed", None, None, date(2024, 1, 1)).unwrap();
        ctx.gym.add_member("Ana", None, None, date(2024, 1, 2)).unwrap();
        ctx.gym.add_member("Mia", None, None, date(2024, 1, 3)).unwrap();

        let names: Vec<String> = ctx.gym.list_members().unwrap().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Ana", "Mia", "Zed"]);
    }

    #[test_context(MemberTestContext)]
    #[test]
    fn test_duplicate_names_are_allowed(ctx: &mut MemberTestContext) {
        let first = ctx.gym.add_member("Ana", Some("a@x.com"), None, date(2024, 1, 1)).unwrap();
        let second = ctx.gym.add_member("Ana", Some("a@x.com"), None, date(2024, 1, 1)).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(ctx.gym.list_members().unwrap().len(), 2);
    }

    #[test_context(MemberTestContext)]
    #[test]
    fn test_empty_list(ctx: &mut MemberTestContext) {
        assert!(ctx.gym.list_members().unwrap().is_empty());
    }

    #[test_context(MemberTestContext)]
    #[test]
    fn test_get_by_name_returns_latest_registered(ctx: &mut MemberTestContext) {
        ctx.gym.add_member("Ana", None, Some("111"), date(2024, 1, 1)).unwrap();
        let latest = ctx.gym.add_member("Ana", None, Some("222"), date(2024, 1, 2)).unwrap();

        let members = Members::new(ctx.gym.db());
        let found = members.get_by_name("Ana").unwrap().unwrap();
        assert_eq!(found.id, latest.id);
        assert_eq!(found.phone.as_deref(), Some("222"));
        assert!(members.get_by_name("Nobody").unwrap().is_none());
    }

    #[test_context(MemberTestContext)]
    #[test]
    fn test_store_insert_keeps_given_status(ctx: &mut MemberTestContext) {
        let mut member = Member::new("Old", None, None, date(2023, 5, 1));
        member.status = MemberStatus::Inactive;

        let stored = Members::new(ctx.gym.db()).insert(&member).unwrap();
        assert_eq!(stored.status, MemberStatus::Inactive);
        assert_eq!(ctx.gym.list_members().unwrap()[0].status, MemberStatus::Inactive);
    }

    #[test]
    fn test_status_text_round_trip() {
        assert_eq!(MemberStatus::Active.to_string(), "Active");
        assert_eq!(MemberStatus::from_str("Inactive").unwrap(), MemberStatus::Inactive);
        assert!(MemberStatus::from_str("Suspended").is_err());
    }
}
