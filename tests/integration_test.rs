//! REST API integration tests over an in-memory SQLite store, driven through
//! the full router with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use product_catalog_server::adapter::middleware::api_key::API_KEY_HEADER;
use product_catalog_server::test_support::{make_test_app, TEST_API_KEY};

async fn make_app() -> axum::Router {
    make_test_app(Some(TEST_API_KEY)).await.0
}

async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Option<String>, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, location, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(API_KEY_HEADER, TEST_API_KEY)
        .body(Body::empty())
        .unwrap()
}

fn post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(API_KEY_HEADER, TEST_API_KEY)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn create(app: &axum::Router, uri: &str, body: Value) -> i64 {
    let (status, _, body) = send(app, post(uri, &body)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_healthz_needs_no_key() {
    let app = make_app().await;
    let req = Request::builder()
        .uri("/healthz")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_readyz_with_live_store() {
    let app = make_app().await;
    let req = Request::builder().uri("/readyz").body(Body::empty()).unwrap();
    let (status, _, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["database"], "ok");
}

#[tokio::test]
async fn test_openapi_document_is_public() {
    let app = make_app().await;
    let req = Request::builder()
        .uri("/swagger/v1/swagger.json")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/products/{id}"].is_object());
}

// ---------------------------------------------------------------------------
// API key gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_missing_api_key_is_401() {
    let app = make_app().await;
    let req = Request::builder()
        .uri("/api/v1/colours")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["message"],
        "API Key is missing. Please provide X-API-Key header."
    );
    assert_eq!(body["statusCode"], 401);
    assert!(body["traceId"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_wrong_api_key_is_401() {
    let app = make_app().await;
    let req = Request::builder()
        .uri("/api/v1/colours")
        .header(API_KEY_HEADER, "TEST-API-KEY")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid API Key.");
}

#[tokio::test]
async fn test_unconfigured_api_key_is_500() {
    let (app, _pool) = make_test_app(None).await;
    let (status, _, body) = send(&app, get("/api/v1/colours")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Server configuration error.");
}

// ---------------------------------------------------------------------------
// Colours and product types
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_colours_empty() {
    let app = make_app().await;
    let (status, _, body) = send(&app, get("/api/v1/colours")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_colour_then_list() {
    let app = make_app().await;
    let (status, location, body) =
        send(&app, post("/api/v1/colours", &json!({"colourName": "Red"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(body["message"], "Colour created successfully");
    assert_eq!(location.as_deref(), Some(format!("/api/v1/colours?id={id}").as_str()));
    assert_eq!(body["location"], format!("/api/v1/colours?id={id}"));

    let (status, _, body) = send(&app, get("/api/v1/colours")).await;
    assert_eq!(status, StatusCode::OK);
    let colours = body.as_array().unwrap();
    assert_eq!(colours.len(), 1);
    assert_eq!(colours[0]["id"], id);
    assert_eq!(colours[0]["name"], "Red");
    assert!(colours[0]["createdDate"].is_string());
    assert!(colours[0]["createdBy"].is_null());
}

#[tokio::test]
async fn test_create_colour_shape_validation() {
    let app = make_app().await;
    let (status, _, body) =
        send(&app, post("/api/v1/colours", &json!({"colourName": "R3d"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(
        body["fieldErrors"]["colourName"][0],
        "Colour name can only contain letters and spaces."
    );

    let (status, _, body) = send(&app, post("/api/v1/colours", &json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fieldErrors"]["colourName"][0], "Colour name is required.");
}

#[tokio::test]
async fn test_create_colour_blank_name_is_400() {
    let app = make_app().await;
    let (status, _, body) =
        send(&app, post("/api/v1/colours", &json!({"colourName": "   "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Colour name is required.");
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let app = make_app().await;
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/colours")
        .header(API_KEY_HEADER, TEST_API_KEY)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"colourName\": "))
        .unwrap();
    let (status, _, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], 400);
}

#[tokio::test]
async fn test_create_product_type_then_list() {
    let app = make_app().await;
    let (status, location, body) = send(
        &app,
        post("/api/v1/producttypes", &json!({"productTypeName": "Shirt"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Product type created successfully");
    let id = body["id"].as_i64().unwrap();
    assert_eq!(location, Some(format!("/api/v1/producttypes?id={id}")));

    let (_, _, body) = send(&app, get("/api/v1/producttypes")).await;
    assert_eq!(body[0]["name"], "Shirt");
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_product_end_to_end() {
    let app = make_app().await;
    let red = create(&app, "/api/v1/colours", json!({"colourName": "Red"})).await;
    let shirt = create(&app, "/api/v1/producttypes", json!({"productTypeName": "Shirt"})).await;
    assert_eq!((red, shirt), (1, 1));

    let (status, location, body) = send(
        &app,
        post(
            "/api/v1/products",
            &json!({"name": "TShirt", "productTypeId": 1, "colourIds": [1]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["message"], "Product created successfully");
    assert_eq!(location.as_deref(), Some("/api/v1/products/1"));

    let (status, _, body) = send(&app, get("/api/v1/products/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "TShirt", "productType": "Shirt", "colours": ["Red"]})
    );

    let (status, _, body) = send(&app, get("/api/v1/products")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 1, "name": "TShirt"}]));
}

#[tokio::test]
async fn test_product_detail_lists_every_colour() {
    let app = make_app().await;
    let red = create(&app, "/api/v1/colours", json!({"colourName": "Red"})).await;
    let blue = create(&app, "/api/v1/colours", json!({"colourName": "Navy Blue"})).await;
    let mug = create(&app, "/api/v1/producttypes", json!({"productTypeName": "Mug"})).await;

    let id = create(
        &app,
        "/api/v1/products",
        json!({"name": "Travel Mug", "productTypeId": mug, "colourIds": [blue, red, blue]}),
    )
    .await;

    let (_, _, body) = send(&app, get(&format!("/api/v1/products/{id}"))).await;
    assert_eq!(body["productType"], "Mug");
    assert_eq!(body["colours"], json!(["Navy Blue", "Red"]));
}

#[tokio::test]
async fn test_unknown_product_type_persists_nothing() {
    let app = make_app().await;
    create(&app, "/api/v1/colours", json!({"colourName": "Red"})).await;

    let (status, _, body) = send(
        &app,
        post(
            "/api/v1/products",
            &json!({"name": "XY", "productTypeId": 999, "colourIds": [1]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("999"));

    let (_, _, body) = send(&app, get("/api/v1/products")).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_one_character_name_fails_shape_validation() {
    let app = make_app().await;
    let (status, _, body) = send(
        &app,
        post(
            "/api/v1/products",
            &json!({"name": "X", "productTypeId": 999, "colourIds": [1]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed");
    assert!(body["fieldErrors"]["name"].is_array());
}

#[tokio::test]
async fn test_empty_colour_ids_is_400() {
    let app = make_app().await;
    let (status, _, body) = send(
        &app,
        post(
            "/api/v1/products",
            &json!({"name": "TShirt", "productTypeId": 1, "colourIds": []}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(
        body["fieldErrors"]["colourIds"][0],
        "At least one colour must be selected."
    );
}

#[tokio::test]
async fn test_non_positive_colour_id_is_400() {
    let app = make_app().await;
    create(&app, "/api/v1/producttypes", json!({"productTypeName": "Shirt"})).await;
    let (status, _, body) = send(
        &app,
        post(
            "/api/v1/products",
            &json!({"name": "TShirt", "productTypeId": 1, "colourIds": [0]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Invalid colour ID. Colour IDs must be positive numbers."
    );
}

#[tokio::test]
async fn test_missing_colours_are_enumerated() {
    let app = make_app().await;
    create(&app, "/api/v1/colours", json!({"colourName": "Red"})).await;
    create(&app, "/api/v1/producttypes", json!({"productTypeName": "Shirt"})).await;

    let (status, _, body) = send(
        &app,
        post(
            "/api/v1/products",
            &json!({"name": "TShirt", "productTypeId": 1, "colourIds": [1, 4, 7]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "The following colour IDs do not exist: 4, 7. \
         Please create these colours first or use existing colour IDs."
    );
}

#[tokio::test]
async fn test_created_by_is_recorded() {
    let (app, pool) = make_test_app(Some(TEST_API_KEY)).await;
    create(&app, "/api/v1/colours", json!({"colourName": "Red"})).await;
    create(&app, "/api/v1/producttypes", json!({"productTypeName": "Shirt"})).await;
    create(
        &app,
        "/api/v1/products",
        json!({"name": "TShirt", "productTypeId": 1, "colourIds": [1], "createdBy": "alice"}),
    )
    .await;
    create(
        &app,
        "/api/v1/products",
        json!({"name": "Polo", "productTypeId": 1, "colourIds": [1]}),
    )
    .await;

    let creators: Vec<(String,)> =
        sqlx::query_as("SELECT created_by FROM products ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(
        creators,
        vec![("alice".to_string(),), ("User".to_string(),)]
    );
}

#[tokio::test]
async fn test_wrong_field_type_is_400() {
    let app = make_app().await;
    let (status, _, _) = send(
        &app,
        post(
            "/api/v1/products",
            &json!({"name": "TShirt", "productTypeId": "one", "colourIds": [1]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_product_id_not_a_number_is_400() {
    let app = make_app().await;
    let (status, _, body) = send(&app, get("/api/v1/products/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Invalid product ID format. 'abc' is not a valid number. \
         Please provide a valid positive integer."
    );
}

#[tokio::test]
async fn test_product_id_beyond_32_bits_is_400() {
    let app = make_app().await;
    let (status, _, body) = send(&app, get("/api/v1/products/3000000000")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid product ID format. '3000000000' is not a valid number."));
}

#[tokio::test]
async fn test_product_id_not_positive_is_400() {
    let app = make_app().await;
    let (status, _, body) = send(&app, get("/api/v1/products/0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Invalid product ID. Product ID must be a positive number greater than 0. Received: 0"
    );
}

#[tokio::test]
async fn test_unknown_product_is_404() {
    let app = make_app().await;
    let (status, _, body) = send(&app, get("/api/v1/products/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product with ID 42 was not found.");
    assert_eq!(body["statusCode"], 404);
    assert!(body.get("details").is_none());
}
