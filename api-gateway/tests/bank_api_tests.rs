#![allow(clippy::approx_constant)]

use std::sync::Arc;

use api_gateway::{router, AppState};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use bank_service::{BankService, InMemoryBankDataSource, NetworkBankDataSource};
use common::model::bank::Bank;
use serde_json::{json, Value};
use tower::ServiceExt;

const BASE_URL: &str = "/api/banks";

fn app() -> Router {
    router(Arc::new(AppState::new(BankService::new())))
}

fn json_request(method: Method, uri: &str, body: &Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?)
}

fn empty_request(method: Method, uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().uri(uri).method(method).body(Body::empty())?)
}

async fn body_json(response: axum::response::Response) -> anyhow::Result<Value> {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&body)?)
}

mod get_banks {
    use super::*;

    #[tokio::test]
    async fn should_return_all_banks() -> anyhow::Result<()> {
        let response = app().oneshot(empty_request(Method::GET, BASE_URL)?).await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE].to_str()?,
            "application/json"
        );
        let body = body_json(response).await?;
        assert_eq!(body[0]["account_number"], "1234");
        assert_eq!(body.as_array().map(Vec::len), Some(3));
        Ok(())
    }
}

mod get_bank {
    use super::*;

    #[tokio::test]
    async fn should_return_the_bank_with_the_given_account_number() -> anyhow::Result<()> {
        let response = app()
            .oneshot(empty_request(Method::GET, &format!("{}/1234", BASE_URL))?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await?;
        assert_eq!(
            body,
            json!({"account_number": "1234", "trust": 3.14, "default_transaction_fee": 17})
        );
        Ok(())
    }

    #[tokio::test]
    async fn should_return_not_found_if_the_account_number_does_not_exist() -> anyhow::Result<()> {
        let response = app()
            .oneshot(empty_request(Method::GET, &format!("{}/does_not_exist", BASE_URL))?)
            .await?;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await?;
        assert_eq!(body["error"]["code"], "bank_not_found");
        assert!(body["request_id"].is_string());
        Ok(())
    }
}

mod post_new_bank {
    use super::*;

    #[tokio::test]
    async fn should_add_the_new_bank() -> anyhow::Result<()> {
        let app = app();
        let new_bank = json!({"account_number": "abc123", "trust": 31.415, "default_transaction_fee": 2});

        let response = app
            .clone()
            .oneshot(json_request(Method::POST, BASE_URL, &new_bank)?)
            .await?;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await?, new_bank);

        let response = app
            .oneshot(empty_request(Method::GET, &format!("{}/abc123", BASE_URL))?)
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await?, new_bank);
        Ok(())
    }

    #[tokio::test]
    async fn should_return_bad_request_if_bank_already_exists() -> anyhow::Result<()> {
        let invalid_bank = json!({"account_number": "1234", "trust": 1.0, "default_transaction_fee": 1});

        let response = app()
            .oneshot(json_request(Method::POST, BASE_URL, &invalid_bank)?)
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await?["error"]["code"], "bank_already_exists");
        Ok(())
    }

    #[tokio::test]
    async fn should_return_bad_request_for_blank_account_number() -> anyhow::Result<()> {
        let app = app();
        let blank = json!({"account_number": "", "trust": 1.0, "default_transaction_fee": 1});

        let response = app
            .clone()
            .oneshot(json_request(Method::POST, BASE_URL, &blank)?)
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app.oneshot(empty_request(Method::GET, BASE_URL)?).await?;
        assert_eq!(body_json(response).await?.as_array().map(Vec::len), Some(3));
        Ok(())
    }

    #[tokio::test]
    async fn should_return_bad_request_for_malformed_body() -> anyhow::Result<()> {
        let request = Request::builder()
            .uri(BASE_URL)
            .method(Method::POST)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"account_number": "abc""#))?;

        let response = app().oneshot(request).await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await?["error"]["code"], "bad_request");
        Ok(())
    }

    #[tokio::test]
    async fn should_return_bad_request_for_missing_field() -> anyhow::Result<()> {
        let incomplete = json!({"account_number": "abc", "trust": 1.0});

        let response = app()
            .oneshot(json_request(Method::POST, BASE_URL, &incomplete)?)
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }
}

mod patch_existing_bank {
    use super::*;

    #[tokio::test]
    async fn should_update_an_existing_bank() -> anyhow::Result<()> {
        let app = app();
        let updated_bank = json!({"account_number": "1234", "trust": 1.0, "default_transaction_fee": 1});

        let response = app
            .clone()
            .oneshot(json_request(Method::PATCH, BASE_URL, &updated_bank)?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await?, updated_bank);

        let response = app
            .oneshot(empty_request(Method::GET, &format!("{}/1234", BASE_URL))?)
            .await?;
        assert_eq!(body_json(response).await?, updated_bank);
        Ok(())
    }

    #[tokio::test]
    async fn should_return_not_found_if_no_bank_exists() -> anyhow::Result<()> {
        let invalid_bank = json!({"account_number": "does_not_exist", "trust": 1.0, "default_transaction_fee": 1});

        let response = app()
            .oneshot(json_request(Method::PATCH, BASE_URL, &invalid_bank)?)
            .await?;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }
}

mod delete_existing_bank {
    use super::*;

    #[tokio::test]
    async fn should_delete_the_bank_with_the_given_account_number() -> anyhow::Result<()> {
        let app = app();

        let response = app
            .clone()
            .oneshot(empty_request(Method::DELETE, &format!("{}/1234", BASE_URL))?)
            .await?;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        assert!(body.is_empty());

        let response = app
            .oneshot(empty_request(Method::GET, &format!("{}/1234", BASE_URL))?)
            .await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn should_return_not_found_if_no_bank_exists() -> anyhow::Result<()> {
        let response = app()
            .oneshot(empty_request(Method::DELETE, &format!("{}/does_not_exist", BASE_URL))?)
            .await?;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }
}

mod data_sources {
    use super::*;

    #[tokio::test]
    async fn empty_store_lists_nothing() -> anyhow::Result<()> {
        let service = BankService::from_data_source(Arc::new(InMemoryBankDataSource::new()));
        let app = router(Arc::new(AppState::new(service)));

        let response = app.oneshot(empty_request(Method::GET, BASE_URL)?).await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await?, json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn seeded_store_is_served_verbatim() -> anyhow::Result<()> {
        let source = InMemoryBankDataSource::with_banks(vec![Bank::new("1234", 3.14, 17)]);
        let service = BankService::from_data_source(Arc::new(source));
        let app = router(Arc::new(AppState::new(service)));

        let response = app
            .oneshot(empty_request(Method::GET, &format!("{}/1234", BASE_URL))?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let bank: Bank = serde_json::from_value(body_json(response).await?)?;
        assert_eq!(bank, Bank::new("1234", 3.14, 17));
        Ok(())
    }

    #[tokio::test]
    async fn network_source_write_operations_are_not_implemented() -> anyhow::Result<()> {
        let source = NetworkBankDataSource::new("http://127.0.0.1:1/banks", std::time::Duration::from_secs(1))?;
        let service = BankService::from_data_source(Arc::new(source));
        let app = router(Arc::new(AppState::new(service)));
        let bank = json!({"account_number": "abc", "trust": 1.0, "default_transaction_fee": 1});

        let response = app
            .oneshot(json_request(Method::POST, BASE_URL, &bank)?)
            .await?;

        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        Ok(())
    }

    #[tokio::test]
    async fn undecodable_upstream_payload_is_bad_gateway() -> anyhow::Result<()> {
        let upstream = Router::new().route("/banks", axum::routing::get(|| async { "{\"results\": [oops" }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, upstream).await;
        });
        let source = NetworkBankDataSource::new(format!("http://{}/banks", addr), std::time::Duration::from_secs(5))?;
        let app = router(Arc::new(AppState::new(BankService::from_data_source(Arc::new(source)))));

        let response = app.oneshot(empty_request(Method::GET, BASE_URL)?).await?;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await?;
        assert_eq!(body["error"]["code"], "upstream_decode_error");
        assert_eq!(body["error"]["details"]["line"], 1);
        Ok(())
    }
}

mod service_routes {
    use super::*;

    #[tokio::test]
    async fn health_reports_data_source() -> anyhow::Result<()> {
        let response = app().oneshot(empty_request(Method::GET, "/health")?).await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await?, json!({"status": "ok", "data_source": "mock"}));
        Ok(())
    }

    #[tokio::test]
    async fn openapi_document_lists_bank_paths() -> anyhow::Result<()> {
        let response = app()
            .oneshot(empty_request(Method::GET, "/api-docs/openapi.json")?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await?;
        assert!(body["paths"]["/api/banks"].is_object());
        assert!(body["paths"]["/api/banks/{account_number}"].is_object());
        Ok(())
    }

    #[tokio::test]
    async fn swagger_ui_is_served() -> anyhow::Result<()> {
        let response = app().oneshot(empty_request(Method::GET, "/swagger-ui/")?).await?;

        assert_ne!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.status().is_success());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() -> anyhow::Result<()> {
        let response = app().oneshot(empty_request(Method::GET, "/api/unknown")?).await?;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }
}
