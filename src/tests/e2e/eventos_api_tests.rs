use axum::http::{StatusCode, header};

use crate::shell::config::{AppConfig, Environment};
use crate::shell::http::router;
use crate::tests::fixtures::http::{delete, get, make_test_state, post_json, put_json, send};

fn app() -> axum::Router {
    let config = AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        environment: Environment::Production,
    };
    router(make_test_state(), &config)
}

#[tokio::test]
async fn walks_through_the_seeded_scenario() {
    let app = app();

    let created = send(
        app.clone(),
        post_json(
            "/api/funciones/eventos",
            r#"{"nombre":"Maratón","ciudad":"Valencia","categoria":"Deporte","fecha":"2025-11-30T08:00:00"}"#,
        ),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.json()["id"], 3);
    assert_eq!(
        created.headers.get(header::LOCATION).unwrap(),
        "/api/funciones/eventos/3"
    );

    let cultura = send(app.clone(), get("/api/funciones/eventos/categoria/cultura")).await;
    let cultura = cultura.json();
    assert_eq!(cultura.as_array().unwrap().len(), 1);
    assert_eq!(cultura[0]["id"], 2);

    let duplicate = send(
        app.clone(),
        post_json(
            "/api/funciones/eventos/1/participantes",
            r#"{"dni":"12345678A","nombre":"Juan Perez","email":"juan@example.com"}"#,
        ),
    )
    .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);

    let removed = send(
        app.clone(),
        delete("/api/funciones/eventos/1/participantes/12345678A"),
    )
    .await;
    assert_eq!(removed.status, StatusCode::NO_CONTENT);

    let evento = send(app, get("/api/funciones/eventos/1")).await.json();
    assert_eq!(evento["participantes"], serde_json::json!([]));
}

#[tokio::test]
async fn keeps_ids_growing_from_the_current_maximum() {
    let app = app();
    let body = r#"{"nombre":"Expo","ciudad":"Madrid","categoria":"Arte","fecha":"2025-10-01"}"#;

    let first = send(app.clone(), post_json("/api/funciones/eventos", body)).await;
    let second = send(app.clone(), post_json("/api/funciones/eventos", body)).await;
    assert_eq!(first.json()["id"], 3);
    assert_eq!(second.json()["id"], 4);

    send(app.clone(), delete("/api/funciones/eventos/4")).await;
    let third = send(app.clone(), post_json("/api/funciones/eventos", body)).await;
    assert_eq!(third.json()["id"], 4);

    let listed = send(app, get("/api/funciones/eventos")).await.json();
    let ids: Vec<i64> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn updates_an_evento_and_moves_it_between_filters() {
    let app = app();

    let updated = send(
        app.clone(),
        put_json(
            "/api/funciones/eventos/2",
            r#"{"nombre":"Feria de Libros","ciudad":"Madrid","categoria":"Cultura","fecha":"2025-06-20"}"#,
        ),
    )
    .await;
    assert_eq!(updated.status, StatusCode::NO_CONTENT);

    let madrid = send(app.clone(), get("/api/funciones/eventos/ciudad/MADRID"))
        .await
        .json();
    assert_eq!(madrid.as_array().unwrap().len(), 2);

    let barcelona = send(app.clone(), get("/api/funciones/eventos/ciudad/barcelona"))
        .await
        .json();
    assert_eq!(barcelona, serde_json::json!([]));

    let junio = send(
        app,
        get("/api/funciones/eventos/fecha?desde=2025-06-20&hasta=2025-06-20"),
    )
    .await
    .json();
    assert_eq!(junio.as_array().unwrap().len(), 1);
    assert_eq!(junio[0]["id"], 2);
}

#[tokio::test]
async fn registers_the_same_person_in_two_eventos() {
    let app = app();
    let juan = r#"{"dni":"12345678A","nombre":"Juan Perez","email":"juan@example.com"}"#;

    let response = send(
        app.clone(),
        post_json("/api/funciones/eventos/2/participantes", juan),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    for id in [1, 2] {
        let participantes = send(
            app.clone(),
            get(&format!("/api/funciones/eventos/{id}/participantes")),
        )
        .await
        .json();
        assert_eq!(participantes.as_array().unwrap().len(), 1);
    }
}
