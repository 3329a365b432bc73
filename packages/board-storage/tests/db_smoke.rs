use board_config::Postgres;
use board_storage::db::Db;
use board_testkit::TestDatabase;

#[tokio::test]
#[ignore = "Requires external Postgres. Set BOARD_PG_DSN to run."]
async fn db_connects_and_bootstraps() {
	let Some(base_dsn) = board_testkit::env_dsn() else {
		eprintln!("Skipping db_connects_and_bootstraps; set BOARD_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	for table in ["posts", "search_terms"] {
		let count: i64 = sqlx::query_scalar(
			"SELECT count(*) FROM information_schema.tables WHERE table_name = $1",
		)
		.bind(table)
		.fetch_one(&db.pool)
		.await
		.expect("Failed to query schema tables.");

		assert_eq!(count, 1, "missing table {table}");
	}

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set BOARD_PG_DSN to run."]
async fn ensure_schema_is_idempotent() {
	let Some(base_dsn) = board_testkit::env_dsn() else {
		eprintln!("Skipping ensure_schema_is_idempotent; set BOARD_PG_DSN to run this test.");

		return;
	};

	board_testkit::with_test_db(&base_dsn, |test_db| {
		let dsn = test_db.dsn().to_string();

		async move {
			let cfg = Postgres { dsn, pool_max_conns: 1 };
			let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

			db.ensure_schema().await.expect("Failed to ensure schema.");
			db.ensure_schema().await.expect("Failed to ensure schema a second time.");

			Ok(())
		}
	})
	.await
	.expect("Failed to run test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set BOARD_PG_DSN to run."]
async fn search_term_keyword_uniqueness_enforced() {
	let Some(base_dsn) = board_testkit::env_dsn() else {
		eprintln!("Skipping search_term_keyword_uniqueness_enforced; set BOARD_PG_DSN to run.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	let now = time::OffsetDateTime::now_utc();

	board_storage::history::upsert(&db, "rust", now).await.expect("Failed to upsert keyword.");

	let later = now + time::Duration::seconds(5);

	board_storage::history::upsert(&db, "rust", later)
		.await
		.expect("Failed to upsert keyword again.");

	let terms =
		board_storage::history::recent(&db, 10).await.expect("Failed to list search terms.");

	assert_eq!(terms.len(), 1);
	assert_eq!(terms[0].keyword, "rust");
	assert_eq!(terms[0].searched_at, later);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
