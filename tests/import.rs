#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate};
    use kranos::db::db::Db;
    use kranos::libs::gym::Gym;
    use kranos::libs::import::{Importer, DEFAULT_PLAN_NAME, DEFAULT_PLAN_PRICE, HISTORICAL_DURATION_DAYS};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ImportTestContext {
        temp_dir: TempDir,
        gym: Gym,
    }

    impl ImportTestContext {
        fn write(&self, name: &str, contents: &[u8]) -> PathBuf {
            let path = self.temp_dir.path().join(name);
            fs::write(&path, contents).unwrap();
            path
        }

        fn missing(&self, name: &str) -> PathBuf {
            self.temp_dir.path().join(name)
        }
    }

    impl TestContext for ImportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("kranos.db")).unwrap();
            ImportTestContext {
                temp_dir,
                gym: Gym::new(db),
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const GROUP_CSV: &str = "Client Name,Phone,Plan Start Date,Amount
Ana,555-1000,05/03/2024,\"₹12,000\"
Bo,,01/01/24,9000
";

    const PT_CSV: &str = "Client Name,Session Count,Amount Paid,Payment Date
Ana,10,\"5,000\",10/03/2024
Cy,12.0,6000,11/03/24
";

    #[test_context(ImportTestContext)]
    #[test]
    fn test_import_group_and_pt(ctx: &mut ImportTestContext) {
        let group = ctx.write("gc.csv", GROUP_CSV.as_bytes());
        let pt = ctx.write("pt.csv", PT_CSV.as_bytes());

        let summary = Importer::new(&ctx.gym).run(&group, &pt).unwrap();
        assert_eq!(summary.group_rows, Some(2));
        assert_eq!(summary.pt_rows, Some(2));

        let plans = ctx.gym.list_group_plans().unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].name, DEFAULT_PLAN_NAME);
        assert_eq!(plans[0].duration_days, HISTORICAL_DURATION_DAYS);
        assert_eq!(plans[0].price, DEFAULT_PLAN_PRICE);

        // Ana is reused by the PT import, Cy is new.
        let members = ctx.gym.list_members().unwrap();
        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bo", "Cy"]);
        assert_eq!(members[0].join_date, date(2024, 3, 5));
        assert_eq!(members[0].phone.as_deref(), Some("555-1000"));
        assert_eq!(members[1].phone, None);
        assert_eq!(members[2].join_date, Local::now().date_naive());

        let listings = ctx.gym.list_group_class_memberships().unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].member_name, "Ana");
        assert_eq!(listings[0].end_date, date(2024, 6, 3));
        assert_eq!(listings[1].member_name, "Bo");
        assert_eq!(listings[1].start_date, date(2024, 1, 1));

        let pt_listings = ctx.gym.list_pt_memberships().unwrap();
        assert_eq!(pt_listings.len(), 2);
        assert_eq!(pt_listings[0].member_name, "Ana");
        assert_eq!(pt_listings[0].sessions_total, 10);
        assert_eq!(pt_listings[1].member_name, "Cy");
        assert_eq!(pt_listings[1].sessions_total, 12);
    }

    #[test_context(ImportTestContext)]
    #[test]
    fn test_group_rows_keep_paid_amount(ctx: &mut ImportTestContext) {
        let group = ctx.write("gc.csv", GROUP_CSV.as_bytes());

        Importer::new(&ctx.gym).run(&group, &ctx.missing("pt.csv")).unwrap();

        let mut stmt = ctx
            .gym
            .db()
            .conn
            .prepare("SELECT price FROM group_class_memberships ORDER BY id")
            .unwrap();
        let prices: Vec<f64> = stmt.query_map([], |row| row.get(0)).unwrap().map(|r| r.unwrap()).collect();
        assert_eq!(prices, vec![12000.0, 9000.0]);
    }

    #[test_context(ImportTestContext)]
    #[test]
    fn test_missing_files_are_skipped(ctx: &mut ImportTestContext) {
        let summary = Importer::new(&ctx.gym)
            .run(&ctx.missing("gc.csv"), &ctx.missing("pt.csv"))
            .unwrap();

        assert_eq!(summary.group_rows, None);
        assert_eq!(summary.pt_rows, None);
        assert!(ctx.gym.list_members().unwrap().is_empty());
    }

    #[test_context(ImportTestContext)]
    #[test]
    fn test_existing_plan_is_reused(ctx: &mut ImportTestContext) {
        let existing = ctx.gym.add_group_plan("Basic", 30, 100.0).unwrap();

        let plan = Importer::new(&ctx.gym).ensure_default_plan().unwrap();

        assert_eq!(plan.id, existing.id);
        assert_eq!(ctx.gym.list_group_plans().unwrap().len(), 1);
    }

    #[test_context(ImportTestContext)]
    #[test]
    fn test_windows_1252_file(ctx: &mut ImportTestContext) {
        // "José" with é encoded as the single byte 0xE9.
        let mut bytes = b"Client Name,Session Count,Amount Paid,Payment Date\nJos".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b",8,4000,01/02/2024\n");
        let pt = ctx.write("pt.csv", &bytes);

        let summary = Importer::new(&ctx.gym).run(&ctx.missing("gc.csv"), &pt).unwrap();

        assert_eq!(summary.pt_rows, Some(1));
        assert_eq!(ctx.gym.list_members().unwrap()[0].name, "José");
    }

    #[test_context(ImportTestContext)]
    #[test]
    fn test_bad_date_aborts(ctx: &mut ImportTestContext) {
        let group = ctx.write(
            "gc.csv",
            b"Client Name,Phone,Plan Start Date,Amount\nAna,,2024-03-05,100\n",
        );

        assert!(Importer::new(&ctx.gym).run(&group, &ctx.missing("pt.csv")).is_err());
    }
}
