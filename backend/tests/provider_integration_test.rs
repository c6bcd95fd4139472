//! Integration tests for provider endpoints

mod common;

use axum::http::StatusCode;
use common::json_body;
use provider_registry_backend::repositories::service::PROVIDER_ID_CHUNK;
use serde_json::{json, Value};

fn ids(body: &str) -> Vec<i64> {
    json_body(body)
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["codigo_prestador"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_create_provider() {
    let app = common::TestApp::new().await;
    let token = app.login().await;
    let category = app.create_category("Pintor").await;

    let (status, body) = app
        .post(
            &format!("/prestador?token={}", token),
            json!({ "nome_prestador": "Ana", "tempo_experiencia": 6, "id_categoria": category }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let provider = json_body(&body);
    assert!(provider["codigo_prestador"].as_i64().unwrap() > 0);
    assert_eq!(provider["nome_prestador"], "Ana");
    assert_eq!(provider["tempo_experiencia"], 6);
    assert_eq!(provider["id_categoria"], category);
    assert_eq!(provider["servicos"], json!([]));
}

#[tokio::test]
async fn test_create_provider_accepts_numeric_string_experience() {
    let app = common::TestApp::new().await;
    let token = app.login().await;
    let category = app.create_category("Pintor").await;

    let (status, body) = app
        .post(
            &format!("/prestador?token={}", token),
            json!({ "nome_prestador": "Bia", "tempo_experiencia": "4", "id_categoria": category }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["tempo_experiencia"], 4);
}

#[tokio::test]
async fn test_create_provider_validation() {
    let app = common::TestApp::new().await;
    let token = app.login().await;
    let path = format!("/prestador?token={}", token);

    let invalid: [Value; 4] = [
        json!({ "tempo_experiencia": 2, "id_categoria": 1 }),
        json!({ "nome_prestador": "Ana", "tempo_experiencia": -1, "id_categoria": 1 }),
        json!({ "nome_prestador": "", "tempo_experiencia": 2, "id_categoria": 1 }),
        json!({ "nome_prestador": "Ana", "tempo_experiencia": "muito", "id_categoria": 1 }),
    ];

    for body in invalid {
        let (status, response) = app.post(&path, body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {}", body);
        assert!(json_body(&response)["erro"].is_string());
    }

    let (_, body) = app.get("/prestador").await;
    assert_eq!(json_body(&body), json!([]));
}

#[tokio::test]
async fn test_dangling_category_kept_by_default() {
    let app = common::TestApp::new().await;
    let token = app.login().await;

    let provider = app.create_provider(&token, "Ana", 1, 77).await;

    let (_, body) = app.get("/prestador").await;
    let providers = json_body(&body);
    assert_eq!(providers[0]["codigo_prestador"], provider);
    assert_eq!(providers[0]["id_categoria"], 77);
    assert!(providers[0].get("categoria").map_or(true, Value::is_null));
}

#[tokio::test]
async fn test_dangling_category_rejected_when_foreign_keys_enforced() {
    let mut config = common::test_config();
    config.database.enforce_foreign_keys = true;
    let app = common::TestApp::with_config(config).await;
    let token = app.login().await;

    let (status, _) = app
        .post(
            &format!("/prestador?token={}", token),
            json!({ "nome_prestador": "Ana", "tempo_experiencia": 1, "id_categoria": 77 }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, body) = app.get("/prestador").await;
    assert_eq!(json_body(&body), json!([]));
}

#[tokio::test]
async fn test_list_nests_services_and_category() {
    let app = common::TestApp::new().await;
    let token = app.login().await;
    let category = app.create_category("Pintor").await;
    let ana = app.create_provider(&token, "Ana", 6, category).await;
    let bia = app.create_provider(&token, "Bia", 2, category).await;
    app.create_service("Pintura de parede", ana).await;
    app.create_service("Textura", ana).await;

    let (status, body) = app.get("/prestador").await;

    assert_eq!(status, StatusCode::OK);
    let providers = json_body(&body);
    assert_eq!(ids(&body), vec![ana, bia]);

    let ana_services = providers[0]["servicos"].as_array().unwrap();
    assert_eq!(ana_services.len(), 2);
    assert_eq!(ana_services[0]["nome_servico"], "Pintura de parede");
    assert_eq!(ana_services[1]["nome_servico"], "Textura");
    assert!(ana_services.iter().all(|s| s["vlr_servico"].as_f64() == Some(82.5)));
    assert_eq!(
        providers[0]["categoria"],
        json!({ "id_categoria": category, "nome_categoria": "Pintor" })
    );

    assert_eq!(providers[1]["servicos"], json!([]));
}

#[tokio::test]
async fn test_list_by_category() {
    let app = common::TestApp::new().await;
    let token = app.login().await;
    let painters = app.create_category("Pintor").await;
    let plumbers = app.create_category("Encanador").await;
    let ana = app.create_provider(&token, "Ana", 6, painters).await;
    let caio = app.create_provider(&token, "Caio", 1, plumbers).await;
    let bia = app.create_provider(&token, "Bia", 2, painters).await;

    let (status, body) = app.get(&format!("/prestador/categoria/{}", painters)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![ana, bia]);

    let (_, body) = app.get(&format!("/prestador/categoria/{}", plumbers)).await;
    assert_eq!(ids(&body), vec![caio]);

    let (_, body) = app.get("/prestador/categoria/999").await;
    assert_eq!(json_body(&body), json!([]));
}

#[tokio::test]
async fn test_list_by_non_numeric_category_is_empty() {
    let app = common::TestApp::new().await;
    let token = app.login().await;
    let category = app.create_category("Pintor").await;
    app.create_provider(&token, "Ana", 6, category).await;

    let (status, body) = app.get("/prestador/categoria/pintor").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!([]));
}

#[tokio::test]
async fn test_list_by_service_name_is_distinct_substring_match() {
    let app = common::TestApp::new().await;
    let token = app.login().await;
    let category = app.create_category("Pintor").await;
    let ana = app.create_provider(&token, "Ana", 6, category).await;
    let bia = app.create_provider(&token, "Bia", 2, category).await;
    app.create_service("Pintura de parede", ana).await;
    app.create_service("Pintura de porta", ana).await;
    app.create_service("Reboco", bia).await;

    let (status, body) = app.get("/prestador/servico/Pintura").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![ana]);

    let (_, body) = app.get("/prestador/servico/de%20p").await;
    assert_eq!(ids(&body), vec![ana]);

    let (_, body) = app.get("/prestador/servico/boc").await;
    assert_eq!(ids(&body), vec![bia]);
}

#[tokio::test]
async fn test_list_by_service_name_is_case_sensitive() {
    let app = common::TestApp::new().await;
    let token = app.login().await;
    let category = app.create_category("Pintor").await;
    let ana = app.create_provider(&token, "Ana", 6, category).await;
    app.create_service("Pintura", ana).await;

    let (_, body) = app.get("/prestador/servico/pintura").await;
    assert_eq!(json_body(&body), json!([]));

    let (_, body) = app.get("/prestador/servico/Pint").await;
    assert_eq!(ids(&body), vec![ana]);
}

#[tokio::test]
async fn test_partial_update() {
    let app = common::TestApp::new().await;
    let token = app.login().await;
    let painters = app.create_category("Pintor").await;
    let plumbers = app.create_category("Encanador").await;
    let ana = app.create_provider(&token, "Ana", 6, painters).await;

    let (status, body) = app
        .put(
            &format!("/prestador/{}?token={}", ana, token),
            json!({ "nome_prestador": "Ana Souza" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let updated = json_body(&body);
    assert_eq!(updated["nome_prestador"], "Ana Souza");
    assert_eq!(updated["tempo_experiencia"], 6);
    assert_eq!(updated["id_categoria"], painters);

    let (status, body) = app
        .put(
            &format!("/prestador/{}?token={}", ana, token),
            json!({ "id_categoria": plumbers, "tempo_experiencia": "2" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let updated = json_body(&body);
    assert_eq!(updated["nome_prestador"], "Ana Souza");
    assert_eq!(updated["tempo_experiencia"], 2);
    assert_eq!(updated["id_categoria"], plumbers);
}

#[tokio::test]
async fn test_update_rejects_negative_experience() {
    let app = common::TestApp::new().await;
    let token = app.login().await;
    let category = app.create_category("Pintor").await;
    let ana = app.create_provider(&token, "Ana", 6, category).await;

    let (status, _) = app
        .put(
            &format!("/prestador/{}?token={}", ana, token),
            json!({ "tempo_experiencia": -3 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get("/prestador").await;
    assert_eq!(json_body(&body)[0]["tempo_experiencia"], 6);
}

#[tokio::test]
async fn test_update_unknown_provider_reported_before_validation() {
    let app = common::TestApp::new().await;
    let token = app.login().await;

    let (status, body) = app
        .put(
            &format!("/prestador/999?token={}", token),
            json!({ "tempo_experiencia": -1 }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_body(&body)["message"], "Não encontrado!");
}

#[tokio::test]
async fn test_update_unknown_provider() {
    let app = common::TestApp::new().await;
    let token = app.login().await;

    let (status, body) = app
        .put(
            &format!("/prestador/999?token={}", token),
            json!({ "nome_prestador": "Ninguém" }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_body(&body)["message"], "Não encontrado!");
}

#[tokio::test]
async fn test_delete_provider_removes_its_services() {
    let app = common::TestApp::new().await;
    let token = app.login().await;
    let category = app.create_category("Pintor").await;
    let ana = app.create_provider(&token, "Ana", 6, category).await;
    let bia = app.create_provider(&token, "Bia", 2, category).await;
    app.create_service("Pintura", ana).await;
    app.create_service("Textura", ana).await;
    app.create_service("Reboco", bia).await;

    let (status, body) = app
        .delete(&format!("/prestador/{}?token={}", ana, token))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["message"], "Prestador deletado com sucesso!");
    assert_eq!(app.count_services_of(ana).await, 0);
    assert_eq!(app.count_services_of(bia).await, 1);

    let (_, body) = app.get("/prestador").await;
    assert_eq!(ids(&body), vec![bia]);
}

#[tokio::test]
async fn test_delete_unknown_provider() {
    let app = common::TestApp::new().await;
    let token = app.login().await;

    let (status, body) = app.delete(&format!("/prestador/999?token={}", token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_body(&body)["message"], "Não encontrado!");
}

/// Insert `count` providers, each with one service, straight into the store
async fn seed_providers(app: &common::TestApp, category: i64, count: usize) {
    sqlx::query(
        r#"
        WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < ?)
        INSERT INTO prestador (nome_prestador, tempo_experiencia, id_categoria)
        SELECT 'Prestador ' || n, n % 8, ? FROM seq
        "#,
    )
    .bind(count as i64)
    .bind(category)
    .execute(&app.pool)
    .await
    .unwrap();

    sqlx::query(
        r#"
        INSERT INTO servico (nome_servico, codigo_prestador)
        SELECT 'Limpeza ' || codigo_prestador, codigo_prestador FROM prestador
        "#,
    )
    .execute(&app.pool)
    .await
    .unwrap();
}

#[tokio::test]
async fn test_list_spans_several_id_chunks() {
    let app = common::TestApp::new().await;
    let category = app.create_category("Diarista").await;
    let count = PROVIDER_ID_CHUNK * 2 + 7;
    seed_providers(&app, category, count).await;

    let (status, body) = app.get("/prestador").await;

    assert_eq!(status, StatusCode::OK, "{}", body);
    let providers = json_body(&body);
    let providers = providers.as_array().unwrap();
    assert_eq!(providers.len(), count);
    for provider in providers {
        let services = provider["servicos"].as_array().unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0]["codigo_prestador"], provider["codigo_prestador"]);
    }

    let (status, body) = app.get("/prestador/servico/Limpeza").await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(ids(&body).len(), count);
}
