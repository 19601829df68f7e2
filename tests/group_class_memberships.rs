#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use kranos::db::db::Db;
    use kranos::libs::gym::{end_date_for, Gym, GymError};
    use rusqlite::params;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct GroupTestContext {
        _temp_dir: TempDir,
        gym: Gym,
        member_id: i64,
    }

    impl TestContext for GroupTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("kranos.db")).unwrap();
            let gym = Gym::new(db);
            let member = gym.add_member("Ana", None, None, date(2024, 1, 1)).unwrap();
            GroupTestContext {
                _temp_dir: temp_dir,
                gym,
                member_id: member.id.unwrap(),
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn count_rows(gym: &Gym) -> i64 {
        gym.db()
            .conn
            .query_row("SELECT COUNT(*) FROM group_class_memberships", [], |row| row.get(0))
            .unwrap()
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_end_date_derived_from_plan_duration(ctx: &mut GroupTestContext) {
        let plan = ctx.gym.add_group_plan("Basic", 30, 100.0).unwrap();

        let membership = ctx
            .gym
            .add_group_class_membership(ctx.member_id, plan.id.unwrap(), date(2024, 2, 1), date(2024, 2, 1))
            .unwrap();

        assert_eq!(membership.id, Some(1));
        assert_eq!(membership.start_date, date(2024, 2, 1));
        assert_eq!(membership.end_date, date(2024, 3, 2));
        assert_eq!(membership.price, 100.0);
        assert_eq!(membership.payment_date, date(2024, 2, 1));
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_price_is_snapshot_at_purchase(ctx: &mut GroupTestContext) {
        let plan = ctx.gym.add_group_plan("Basic", 30, 100.0).unwrap();
        let plan_id = plan.id.unwrap();
        let membership = ctx
            .gym
            .add_group_class_membership(ctx.member_id, plan_id, date(2024, 2, 1), date(2024, 2, 1))
            .unwrap();

        ctx.gym
            .db()
            .conn
            .execute("UPDATE group_plans SET price = ?1 WHERE id = ?2", params![150.0, plan_id])
            .unwrap();

        let stored: f64 = ctx
            .gym
            .db()
            .conn
            .query_row(
                "SELECT price FROM group_class_memberships WHERE id = ?1",
                params![membership.id.unwrap()],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(stored, 100.0);

        let later = ctx
            .gym
            .add_group_class_membership(ctx.member_id, plan_id, date(2024, 4, 1), date(2024, 4, 1))
            .unwrap();
        assert_eq!(later.price, 150.0);
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_unknown_plan_is_rejected(ctx: &mut GroupTestContext) {
        let err = ctx
            .gym
            .add_group_class_membership(ctx.member_id, 999, date(2024, 2, 1), date(2024, 2, 1))
            .unwrap_err();

        assert_eq!(err.downcast_ref::<GymError>(), Some(&GymError::PlanNotFound(999)));
        assert_eq!(count_rows(&ctx.gym), 0);
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_unknown_member_violates_foreign_key(ctx: &mut GroupTestContext) {
        let plan = ctx.gym.add_group_plan("Basic", 30, 100.0).unwrap();

        let result = ctx
            .gym
            .add_group_class_membership(999, plan.id.unwrap(), date(2024, 2, 1), date(2024, 2, 1));

        assert!(result.is_err());
        assert_eq!(count_rows(&ctx.gym), 0);
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_list_latest_end_date_first(ctx: &mut GroupTestContext) {
        let short = ctx.gym.add_group_plan("Short", 10, 50.0).unwrap();
        let long = ctx.gym.add_group_plan("Long", 90, 250.0).unwrap();
        let bo = ctx.gym.add_member("Bo", None, None, date(2024, 1, 1)).unwrap();

        ctx.gym
            .add_group_class_membership(ctx.member_id, short.id.unwrap(), date(2024, 1, 1), date(2024, 1, 1))
            .unwrap();
        ctx.gym
            .add_group_class_membership(bo.id.unwrap(), long.id.unwrap(), date(2024, 1, 1), date(2024, 1, 1))
            .unwrap();

        let listings = ctx.gym.list_group_class_memberships().unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].member_name, "Bo");
        assert_eq!(listings[0].plan_name, "Long");
        assert_eq!(listings[0].end_date, date(2024, 3, 31));
        assert_eq!(listings[1].member_name, "Ana");
        assert_eq!(listings[1].plan_name, "Short");
        assert_eq!(listings[1].end_date, date(2024, 1, 11));
    }

    #[test]
    fn test_end_date_for_crosses_leap_day() {
        assert_eq!(end_date_for(date(2024, 2, 28), 1).unwrap(), date(2024, 2, 29));
        assert_eq!(end_date_for(date(2023, 12, 31), 1).unwrap(), date(2024, 1, 1));
        assert_eq!(end_date_for(date(2024, 1, 1), 0).unwrap(), date(2024, 1, 1));
    }

    #[test]
    fn test_end_date_for_out_of_range() {
        let err = end_date_for(NaiveDate::MAX, 1).unwrap_err();
        assert_eq!(
            err,
            GymError::EndDateOutOfRange {
                start: NaiveDate::MAX,
                days: 1
            }
        );
    }
}
