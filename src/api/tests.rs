//! HTTP API Tests
//!
//! Runs the real router on `127.0.0.1:0` and drives it over HTTP.
//!
//! ## Test Scopes
//! - **Protocol**: Lenient payload decoding and path id parsing.
//! - **Routes**: Status codes and JSON bodies of list, create and delete.
//! - **Persist failures**: 500 responses without rollback of the in-memory change.

#[cfg(test)]
mod tests {
    use crate::api::protocol::{CreateAnimalRequest, INVALID_ID_MESSAGE, parse_animal_id};
    use crate::api::router;
    use crate::persistence::file::AnimalFile;
    use crate::registry::records::AnimalRegistry;
    use crate::registry::store::AnimalStore;
    use crate::registry::types::Animal;
    use reqwest::StatusCode;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    async fn spawn_app(store: Arc<AnimalStore>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(store)).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn empty_store(dir: &std::path::Path) -> Arc<AnimalStore> {
        AnimalStore::new(AnimalRegistry::new(), AnimalFile::new(dir))
    }

    async fn post_raw(client: &reqwest::Client, base: &str, body: &'static str) -> (StatusCode, String) {
        let resp = client
            .post(format!("{}/animals", base))
            .body(body)
            .send()
            .await
            .unwrap();
        (resp.status(), resp.text().await.unwrap())
    }

    async fn delete(client: &reqwest::Client, base: &str, id: &str) -> (StatusCode, String) {
        let resp = client
            .delete(format!("{}/animals/{}", base, id))
            .send()
            .await
            .unwrap();
        (resp.status(), resp.text().await.unwrap())
    }

    // ============================================================
    // PROTOCOL TESTS
    // ============================================================

    #[test]
    fn test_decode_lenient_reads_name() {
        let req = CreateAnimalRequest::decode_lenient(br#"{"name":"Cat","id":99}"#);
        assert_eq!(req.name, "Cat");
    }

    #[test]
    fn test_decode_lenient_defaults_on_bad_input() {
        let bodies: [&[u8]; 5] = [b"", b"not json", br#"{"name":5}"#, br#"{}"#, b"[1,2]"];
        for body in bodies {
            let req = CreateAnimalRequest::decode_lenient(body);
            assert_eq!(req.name, "", "body {:?}", String::from_utf8_lossy(body));
        }
    }

    #[test]
    fn test_decode_lenient_ignores_trailing_data() {
        let req = CreateAnimalRequest::decode_lenient(br#"{"name":"Owl"} trailing"#);
        assert_eq!(req.name, "Owl");
    }

    #[test]
    fn test_decode_lenient_matches_name_case_insensitively() {
        let bodies: [&[u8]; 3] = [br#"{"Name":"Cat"}"#, br#"{"NAME":"Cat"}"#, br#"{"nAmE":"Cat"}"#];
        for body in bodies {
            let req = CreateAnimalRequest::decode_lenient(body);
            assert_eq!(req.name, "Cat", "body {:?}", String::from_utf8_lossy(body));
        }
    }

    #[test]
    fn test_decode_lenient_last_name_wins() {
        let req = CreateAnimalRequest::decode_lenient(br#"{"name":"Cat","name":"Dog"}"#);
        assert_eq!(req.name, "Dog");

        let req = CreateAnimalRequest::decode_lenient(br#"{"name":"Cat","NAME":"Owl"}"#);
        assert_eq!(req.name, "Owl");

        // A later non-string value does not clobber an earlier string.
        let req = CreateAnimalRequest::decode_lenient(br#"{"name":"Cat","Name":5}"#);
        assert_eq!(req.name, "Cat");
    }

    #[test]
    fn test_parse_animal_id() {
        assert_eq!(parse_animal_id("1"), Some(1));
        assert_eq!(parse_animal_id("0042"), Some(42));
        assert_eq!(parse_animal_id("abc"), None);
        assert_eq!(parse_animal_id("-1"), None);
        assert_eq!(parse_animal_id("+1"), None);
        assert_eq!(parse_animal_id("1.5"), None);
        assert_eq!(parse_animal_id("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_animal_id("9223372036854775808"), None);
        assert_eq!(parse_animal_id("99999999999999999999999"), None);
    }

    // ============================================================
    // ROUTE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_full_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let base = spawn_app(empty_store(dir.path())).await;
        let client = reqwest::Client::new();

        let (status, body) = post_raw(&client, &base, r#"{"name":"Cat"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"id":1,"name":"Cat"}"#);

        let (status, body) = post_raw(&client, &base, r#"{"name":"Dog"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"id":2,"name":"Dog"}"#);

        let resp = client.get(format!("{}/animals", base)).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.text().await.unwrap(),
            r#"[{"id":1,"name":"Cat"},{"id":2,"name":"Dog"}]"#
        );

        let (status, body) = delete(&client, &base, "1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"[{"id":2,"name":"Dog"}]"#);

        let (status, body) = delete(&client, &base, "abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, INVALID_ID_MESSAGE);
    }

    #[tokio::test]
    async fn test_list_empty_is_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let base = spawn_app(empty_store(dir.path())).await;

        let resp = reqwest::get(format!("{}/animals", base)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.text().await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_create_with_malformed_body_defaults_name() {
        let dir = tempfile::tempdir().unwrap();
        let base = spawn_app(empty_store(dir.path())).await;
        let client = reqwest::Client::new();

        let (status, body) = post_raw(&client, &base, "garbage").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"id":1,"name":""}"#);

        let (status, body) = post_raw(&client, &base, r#"{"id":77}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"id":2,"name":""}"#);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_returns_current_list() {
        let dir = tempfile::tempdir().unwrap();
        let base = spawn_app(empty_store(dir.path())).await;
        let client = reqwest::Client::new();
        post_raw(&client, &base, r#"{"name":"Cat"}"#).await;

        let (status, body) = delete(&client, &base, "999").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"[{"id":1,"name":"Cat"}]"#);
    }

    #[tokio::test]
    async fn test_create_after_delete_does_not_reuse_id() {
        let dir = tempfile::tempdir().unwrap();
        let base = spawn_app(empty_store(dir.path())).await;
        let client = reqwest::Client::new();

        post_raw(&client, &base, r#"{"name":"Cat"}"#).await;
        delete(&client, &base, "1").await;
        let (_, body) = post_raw(&client, &base, r#"{"name":"Dog"}"#).await;

        assert_eq!(body, r#"{"id":2,"name":"Dog"}"#);
    }

    #[tokio::test]
    async fn test_delete_overflowing_id_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let base = spawn_app(empty_store(dir.path())).await;
        let client = reqwest::Client::new();

        let (status, body) = delete(&client, &base, "123456789012345678901234567890").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, INVALID_ID_MESSAGE);
    }

    #[tokio::test]
    async fn test_mutations_are_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let base = spawn_app(empty_store(dir.path())).await;
        let client = reqwest::Client::new();

        post_raw(&client, &base, r#"{"name":"Cat"}"#).await;
        post_raw(&client, &base, r#"{"name":"Dog"}"#).await;
        delete(&client, &base, "2").await;

        let on_disk = AnimalFile::new(dir.path()).load().await.unwrap();
        assert_eq!(on_disk.len(), 1);
        assert_eq!(on_disk[0].name, "Cat");
    }

    // ============================================================
    // PERSIST FAILURE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_create_with_exhausted_ids_returns_500() {
        let dir = tempfile::tempdir().unwrap();
        let registry = AnimalRegistry::restore(vec![Animal {
            id: i64::MAX,
            name: "Cat".to_string(),
        }]);
        let base = spawn_app(AnimalStore::new(registry, AnimalFile::new(dir.path()))).await;
        let client = reqwest::Client::new();

        let (status, body) = post_raw(&client, &base, r#"{"name":"Dog"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("id space exhausted"), "body: {}", body);

        let resp = client.get(format!("{}/animals", base)).send().await.unwrap();
        assert_eq!(
            resp.text().await.unwrap(),
            r#"[{"id":9223372036854775807,"name":"Cat"}]"#
        );
    }

    #[tokio::test]
    async fn test_persist_failure_returns_500_without_rollback() {
        let not_a_dir = tempfile::NamedTempFile::new().unwrap();
        let base = spawn_app(empty_store(not_a_dir.path())).await;
        let client = reqwest::Client::new();

        let (status, body) = post_raw(&client, &base, r#"{"name":"Cat"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("failed to create"), "body: {}", body);

        let resp = client.get(format!("{}/animals", base)).send().await.unwrap();
        assert_eq!(resp.text().await.unwrap(), r#"[{"id":1,"name":"Cat"}]"#);

        let (status, _) = delete(&client, &base, "1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let resp = client.get(format!("{}/animals", base)).send().await.unwrap();
        assert_eq!(resp.text().await.unwrap(), "[]");
    }
}
