use axum::{
	body::{self, Body},
	http::{Request, StatusCode},
};
use tower::util::ServiceExt;

use board_api::{routes, state::AppState};
use board_config::{Config, Pagination, Postgres, Service, Storage};
use board_testkit::TestDatabase;

fn test_config(dsn: String) -> Config {
	Config {
		service: Service { http_bind: "127.0.0.1:0".to_string(), log_level: "info".to_string() },
		storage: Storage { postgres: Postgres { dsn, pool_max_conns: 1 } },
		pagination: Pagination::default(),
	}
}

async fn test_env() -> Option<TestDatabase> {
	let Some(base_dsn) = board_testkit::env_dsn() else {
		eprintln!("Skipping HTTP tests; set BOARD_PG_DSN to run this test.");

		return None;
	};

	Some(TestDatabase::new(&base_dsn).await.expect("Failed to create test database."))
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set BOARD_PG_DSN to run."]
async fn health_ok() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");
	let app = routes::router(state);
	let response = app
		.oneshot(
			Request::builder().uri("/health").body(Body::empty()).expect("Failed to build request."),
		)
		.await
		.expect("Failed to call /health.");

	assert_eq!(response.status(), StatusCode::OK);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set BOARD_PG_DSN to run."]
async fn rejects_oversized_title() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");
	let app = routes::router(state);
	let payload = serde_json::json!({
		"title": "가".repeat(46),
		"content": "body",
	});
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/api/posts")
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call create post.");

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json: serde_json::Value = serde_json::from_slice(&bytes).expect("Failed to parse body.");

	assert_eq!(json["error_code"], "invalid_request");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set BOARD_PG_DSN to run."]
async fn unknown_post_is_distinct_not_found() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");
	let app = routes::router(state);
	let response = app
		.oneshot(
			Request::builder()
				.uri("/api/posts/424242")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call get post.");

	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json: serde_json::Value = serde_json::from_slice(&bytes).expect("Failed to parse body.");

	assert_eq!(json["error_code"], "not_found");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set BOARD_PG_DSN to run."]
async fn created_post_lists_in_both_modes() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");
	let app = routes::router(state);
	let payload = serde_json::json!({
		"title": "hello",
		"content": "world",
	});
	let response = app
		.clone()
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/api/posts")
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call create post.");

	assert_eq!(response.status(), StatusCode::CREATED);

	let response = app
		.clone()
		.oneshot(
			Request::builder()
				.uri("/api/posts?page=1&limit=5")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call list posts.");

	assert_eq!(response.status(), StatusCode::OK);

	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json: serde_json::Value = serde_json::from_slice(&bytes).expect("Failed to parse body.");

	assert_eq!(json["total"], 1);
	assert_eq!(json["totalPages"], 1);
	assert_eq!(json["items"][0]["title"], "hello");
	assert_eq!(json["items"][0]["author"], "anonymous");

	let response = app
		.oneshot(
			Request::builder()
				.uri("/api/posts?limit=5")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call list posts.");

	assert_eq!(response.status(), StatusCode::OK);

	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json: serde_json::Value = serde_json::from_slice(&bytes).expect("Failed to parse body.");

	assert_eq!(json["hasMore"], false);
	assert_eq!(json["nextCursor"], serde_json::Value::Null);
	assert_eq!(json["items"][0]["title"], "hello");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
