//! Full create/list/delete cycle against a live stub on an ephemeral port.

use base64::Engine;
use stub_server::routes;
use stub_server::store::ProductStore;

/// A JPEG header fragment, enough to exercise the upload path.
const FIRST_IMAGE: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

/// Bind an ephemeral port, serve the stub in the background, return the base URL.
async fn spawn_stub() -> String {
    let app = routes::app(ProductStore::new());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn product_form(name: &str) -> reqwest::multipart::Form {
    reqwest::multipart::Form::new()
        .text("name", name.to_owned())
        .text("price", "4500")
        .text("type", "scooter")
        .text("description", "Electric scooter")
        .part(
            "imageFile1",
            reqwest::multipart::Part::bytes(FIRST_IMAGE).file_name("front.jpg"),
        )
}

async fn list_products(client: &reqwest::Client, base: &str) -> Vec<serde_json::Value> {
    client
        .get(format!("{base}/api/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn list_starts_empty() {
    let base = spawn_stub().await;
    let client = reqwest::Client::new();

    let listed = list_products(&client, &base).await;
    assert!(listed.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn created_product_appears_in_list_with_encoded_image() {
    let base = spawn_stub().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/products"))
        .multipart(product_form("Falcon"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let created: serde_json::Value = response.json().await.unwrap();
    assert!(created.get("_id").and_then(|v| v.as_str()).is_some());

    let listed = list_products(&client, &base).await;
    assert_eq!(listed.len(), 1);

    let product = &listed[0];
    assert_eq!(product.get("name").and_then(|v| v.as_str()), Some("Falcon"));
    assert_eq!(product.get("price").and_then(|v| v.as_str()), Some("4500"));
    assert_eq!(product.get("type").and_then(|v| v.as_str()), Some("scooter"));

    let expected = base64::engine::general_purpose::STANDARD.encode(FIRST_IMAGE);
    assert_eq!(
        product.get("image1").and_then(|v| v.as_str()),
        Some(expected.as_str())
    );
    assert!(product.get("image2").is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn deleted_product_no_longer_listed() {
    let base = spawn_stub().await;
    let client = reqwest::Client::new();

    let first: serde_json::Value = client
        .post(format!("{base}/api/products"))
        .multipart(product_form("Falcon"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: serde_json::Value = client
        .post(format!("{base}/api/products"))
        .multipart(product_form("Raven"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let first_id = first.get("_id").and_then(|v| v.as_str()).unwrap().to_owned();
    let second_id = second.get("_id").and_then(|v| v.as_str()).unwrap().to_owned();

    let response = client
        .delete(format!("{base}/api/products/{first_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body.get("ok").and_then(|v| v.as_bool()), Some(true));

    let listed = list_products(&client, &base).await;
    let ids: Vec<&str> = listed
        .iter()
        .filter_map(|product| product.get("_id").and_then(|v| v.as_str()))
        .collect();
    assert!(!ids.contains(&first_id.as_str()));
    assert!(ids.contains(&second_id.as_str()));

    let repeat = client
        .delete(format!("{base}/api/products/{first_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(repeat.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn create_accepts_sparse_forms() {
    let base = spawn_stub().await;
    let client = reqwest::Client::new();

    let form = reqwest::multipart::Form::new().text("name", "Bare");
    let response = client
        .post(format!("{base}/api/products"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let created: serde_json::Value = response.json().await.unwrap();
    assert_eq!(created.get("name").and_then(|v| v.as_str()), Some("Bare"));
    assert_eq!(created.get("price").and_then(|v| v.as_str()), Some(""));
    assert!(created.get("image1").is_none());
}
