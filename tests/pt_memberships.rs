#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use kranos::db::db::Db;
    use kranos::libs::gym::Gym;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct PtTestContext {
        _temp_dir: TempDir,
        gym: Gym,
    }

    impl TestContext for PtTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("kranos.db")).unwrap();
            PtTestContext {
                _temp_dir: temp_dir,
                gym: Gym::new(db),
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(PtTestContext)]
    #[test]
    fn test_add_pt_membership_starts_unused(ctx: &mut PtTestContext) {
        let member = ctx.gym.add_member("Ana", None, None, date(2024, 1, 1)).unwrap();

        let pt = ctx.gym.add_pt_membership(member.id.unwrap(), 10, 500.0, date(2024, 2, 1)).unwrap();

        assert_eq!(pt.id, Some(1));
        assert_eq!(pt.sessions_total, 10);
        assert_eq!(pt.sessions_used, 0);
        assert_eq!(pt.price, 500.0);
        assert_eq!(pt.payment_date, date(2024, 2, 1));
    }

    #[test_context(PtTestContext)]
    #[test]
    fn test_list_ordered_by_member_name(ctx: &mut PtTestContext) {
        let zed = ctx.gym.add_member("Zed", None, None, date(2024, 1, 1)).unwrap();
        let ana = ctx.gym.add_member("Ana", None, None, date(2024, 1, 1)).unwrap();

        ctx.gym.add_pt_membership(zed.id.unwrap(), 5, 250.0, date(2024, 1, 5)).unwrap();
        ctx.gym.add_pt_membership(ana.id.unwrap(), 10, 500.0, date(2024, 1, 6)).unwrap();
        ctx.gym.add_pt_membership(ana.id.unwrap(), 20, 900.0, date(2024, 1, 7)).unwrap();

        let listings = ctx.gym.list_pt_memberships().unwrap();
        let rows: Vec<(String, i64, i64)> = listings
            .into_iter()
            .map(|l| (l.member_name, l.sessions_total, l.sessions_used))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Ana".to_string(), 10, 0),
                ("Ana".to_string(), 20, 0),
                ("Zed".to_string(), 5, 0)
            ]
        );
    }

    #[test_context(PtTestContext)]
    #[test]
    fn test_null_sessions_used_reads_as_zero(ctx: &mut PtTestContext) {
        let member = ctx.gym.add_member("Ana", None, None, date(2024, 1, 1)).unwrap();
        ctx.gym
            .db()
            .conn
            .execute(
                "INSERT INTO pt_memberships (member_id, sessions_total, sessions_used, price, payment_date) VALUES (?1, 8, NULL, 400.0, '2024-01-01')",
                [member.id.unwrap()],
            )
            .unwrap();

        let listings = ctx.gym.list_pt_memberships().unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].sessions_used, 0);
    }

    #[test_context(PtTestContext)]
    #[test]
    fn test_unknown_member_is_rejected(ctx: &mut PtTestContext) {
        assert!(ctx.gym.add_pt_membership(42, 10, 500.0, date(2024, 1, 1)).is_err());
        assert!(ctx.gym.list_pt_memberships().unwrap().is_empty());
    }
}
