//! Transport-level tests for the health and movie endpoints.
//!
//! The router is exercised directly with `tower::ServiceExt::oneshot`;
//! database pools are built lazily so no MySQL server is needed, and the
//! health probes are substituted with scripted implementations.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use movie_api::config::AppConfig;
use movie_api::database::DatabasePools;
use movie_api::health::{DependencyProbe, DependencyType, HealthChecker, DYING_MSG, HEALTHY_MSG};
use movie_api::web::state::AppState;
use movie_api::web::create_app;

struct ScriptedProbe {
    name: &'static str,
    dependency_type: DependencyType,
    healthy: bool,
}

#[async_trait]
impl DependencyProbe for ScriptedProbe {
    fn name(&self) -> &str {
        self.name
    }

    fn dependency_type(&self) -> DependencyType {
        self.dependency_type
    }

    async fn check(&self) -> anyhow::Result<()> {
        if self.healthy {
            Ok(())
        } else {
            Err(anyhow::anyhow!("connection refused"))
        }
    }
}

fn test_config() -> AppConfig {
    serde_yaml::from_str(
        r#"
app:
  port: 8080
database:
  master: { host: localhost, port: 3306, user: test, name: movies, acquire_timeout_secs: 1 }
  slave:  { host: localhost, port: 3306, user: test, name: movies, acquire_timeout_secs: 1 }
"#,
    )
    .expect("test config parses")
}

fn app_with_probes(master_healthy: bool, slave_healthy: bool) -> axum::Router {
    let config = test_config();
    let pools = DatabasePools::connect_lazy(&config.database).expect("lazy pools");

    let health = HealthChecker::new(Duration::from_millis(500))
        .register(Arc::new(ScriptedProbe {
            name: "Master Database SQL",
            dependency_type: DependencyType::Hard,
            healthy: master_healthy,
        }))
        .register(Arc::new(ScriptedProbe {
            name: "Slave Database SQL",
            dependency_type: DependencyType::Hard,
            healthy: slave_healthy,
        }));

    create_app(AppState::with_health_checker(config, pools, health))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

#[tokio::test]
async fn test_api_liveness_returns_success_envelope() {
    let app = app_with_probes(true, true);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/health/api")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["code"], "SUCCESS");
    assert_eq!(json["message"], "Success");
}

#[tokio::test]
async fn test_infrastructure_healthy_returns_200() {
    let app = app_with_probes(true, true);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/health/infrastructure")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["result"], HEALTHY_MSG);
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_infrastructure_hard_failure_returns_404() {
    // Master healthy, slave unhealthy (hard): the whole service is dying.
    let app = app_with_probes(true, false);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/health/infrastructure")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["result"], DYING_MSG);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2, "one item per registered probe");

    let slave = items
        .iter()
        .find(|i| i["name"] == "Slave Database SQL")
        .expect("slave item present");
    assert_eq!(slave["is_healthy"], false);
    assert_eq!(slave["dependency_type"], "hard");
    assert_eq!(slave["remarks"], "connection refused");
}

#[tokio::test]
async fn test_unknown_route_returns_endpoint_not_found_envelope() {
    let app = app_with_probes(true, true);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "ENDPOINT_NOT_FOUND");
    assert_eq!(json["message"], "Endpoint not found");
}

#[tokio::test]
async fn test_create_movie_rejects_invalid_duration() {
    let app = app_with_probes(true, true);

    // Validation runs before any database access, so the lazy pool is
    // never touched.
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/movies")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"name":"Seven Samurai","duration":0,"genre":"Drama"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"].as_str().unwrap().contains("duration"));
}

#[tokio::test]
async fn test_create_movie_rejects_missing_name() {
    let app = app_with_probes(true, true);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/movies")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"name":"","duration":120,"genre":"Drama"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_movie_rejects_non_numeric_id() {
    let app = app_with_probes(true, true);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/movies/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
