#![cfg(not(coverage))]

use super::*;
use crate::utils::storage as storage_utils;
use httpmock::prelude::*;
use serde_json::json;

fn car_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "name": name,
        "price": 25000,
        "img": format!("https://img.example/{}.png", id),
        "description": "Reliable and efficient"
    })
}

fn order_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "carId": "c1",
        "carName": "Civic",
        "price": 21000,
        "email": "alice@example.com",
        "status": status,
        "orderedAt": "2022-01-05T10:00:00Z"
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.base_url())
}

fn sign_in(token: &str) {
    storage_utils::set(storage_utils::ACCESS_TOKEN_KEY, token).unwrap();
}

#[tokio::test]
async fn get_cars_requests_limited_or_full_collection() {
    let server = MockServer::start_async().await;
    let first_six = server.mock(|when, then| {
        when.method(GET).path("/cars/6");
        then.status(200).json_body(json!([
            car_json("c1", "Civic"),
            car_json("c2", "Corolla")
        ]));
    });
    let all = server.mock(|when, then| {
        when.method(GET).path("/cars/all");
        then.status(200).json_body(json!([
            car_json("c1", "Civic"),
            car_json("c2", "Corolla"),
            car_json("c3", "Golf")
        ]));
    });

    let client = api_client(&server);
    let limited = client.get_cars(CatalogLimit::First(6)).await.unwrap();
    assert_eq!(limited.len(), 2);
    let everything = client.get_cars(CatalogLimit::All).await.unwrap();
    let names: Vec<_> = everything.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Civic", "Corolla", "Golf"]);

    first_six.assert_hits(1);
    all.assert_hits(1);
}

#[tokio::test]
async fn get_cars_does_not_send_credentials() {
    sign_in("secret-token");
    let server = MockServer::start_async().await;
    let with_auth = server.mock(|when, then| {
        when.method(GET)
            .path("/cars/all")
            .header_exists("authorization");
        then.status(500);
    });
    let anonymous = server.mock(|when, then| {
        when.method(GET).path("/cars/all");
        then.status(200).json_body(json!([car_json("c1", "Civic")]));
    });

    let cars = api_client(&server).get_cars(CatalogLimit::All).await.unwrap();
    assert_eq!(cars.len(), 1);
    with_auth.assert_hits(0);
    anonymous.assert_hits(1);
    storage_utils::clear_session();
}

#[tokio::test]
async fn get_cars_surfaces_server_errors() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/cars/all");
        then.status(503).body("upstream down");
    });

    let err = api_client(&server)
        .get_cars(CatalogLimit::All)
        .await
        .unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
    assert!(err.error.contains("503"));
}

#[tokio::test]
async fn get_cars_rejects_non_array_payloads() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/cars/all");
        then.status(200).json_body(json!({ "cars": [] }));
    });

    let err = api_client(&server)
        .get_cars(CatalogLimit::All)
        .await
        .unwrap_err();
    assert_eq!(err.code, "DECODE_ERROR");
}

#[tokio::test]
async fn login_persists_session_and_get_me_uses_bearer_token() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST)
            .path("/auth/login")
            .json_body(json!({ "email": "alice@example.com", "password": "secret" }));
        then.status(200).json_body(json!({
            "token": "tok-123",
            "user": { "email": "alice@example.com", "displayName": "Alice", "role": "admin" }
        }));
    });
    let me = server.mock(|when, then| {
        when.method(GET)
            .path("/users/me")
            .header("authorization", "Bearer tok-123");
        then.status(200).json_body(json!({
            "email": "alice@example.com",
            "displayName": "Alice",
            "role": "admin"
        }));
    });

    let client = api_client(&server);
    let login = client
        .login(LoginRequest {
            email: "alice@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert!(login.user.is_admin());
    assert_eq!(storage_utils::access_token().as_deref(), Some("tok-123"));

    let user = client.get_me().await.unwrap();
    assert_eq!(user.display_name, "Alice");
    me.assert_hits(1);

    client.logout();
    assert!(storage_utils::access_token().is_none());
}

#[tokio::test]
async fn get_me_without_token_short_circuits() {
    storage_utils::clear_session();
    let server = MockServer::start_async().await;
    let me = server.mock(|when, then| {
        when.method(GET).path("/users/me");
        then.status(200).json_body(json!({ "email": "x@example.com" }));
    });

    let err = api_client(&server).get_me().await.unwrap_err();
    assert!(err.is_unauthorized());
    me.assert_hits(0);
}

#[tokio::test]
async fn unauthorized_response_clears_stored_session() {
    sign_in("expired");
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/users/me");
        then.status(401)
            .json_body(json!({ "error": "Token expired", "code": "UNAUTHORIZED" }));
    });

    let err = api_client(&server).get_me().await.unwrap_err();
    assert_eq!(err.error, "Token expired");
    assert!(storage_utils::access_token().is_none());
}

#[tokio::test]
async fn order_endpoints_round_trip() {
    sign_in("tok-orders");
    let server = MockServer::start_async().await;
    let mine = server.mock(|when, then| {
        when.method(GET)
            .path("/orders")
            .query_param("email", "alice@example.com");
        then.status(200)
            .json_body(json!([order_json("o1", "pending"), order_json("o2", "shipped")]));
    });
    let admin_server = MockServer::start_async().await;
    let all = admin_server.mock(|when, then| {
        when.method(GET).path("/orders");
        then.status(200).json_body(json!([order_json("o1", "pending")]));
    });
    let approve = server.mock(|when, then| {
        when.method(PUT)
            .path("/orders/o1")
            .json_body(json!({ "status": "approved" }));
        then.status(200).json_body(json!({ "modifiedCount": 1 }));
    });
    let cancel = server.mock(|when, then| {
        when.method(DELETE)
            .path("/orders/o2")
            .header("authorization", "Bearer tok-orders");
        then.status(204);
    });

    let client = api_client(&server);
    let orders = client.get_orders_for("alice@example.com").await.unwrap();
    assert_eq!(orders.len(), 2);
    assert!(orders[0].is_pending());
    assert_eq!(orders[1].status, OrderStatus::Shipped);
    assert_eq!(
        api_client(&admin_server).get_all_orders().await.unwrap().len(),
        1
    );
    client
        .update_order_status("o1", OrderStatus::Approved)
        .await
        .unwrap();
    client.cancel_order("o2").await.unwrap();

    mine.assert_hits(1);
    all.assert_hits(1);
    approve.assert_hits(1);
    cancel.assert_hits(1);
    storage_utils::clear_session();
}

#[tokio::test]
async fn admin_and_review_mutations_send_payloads() {
    sign_in("tok-admin");
    let server = MockServer::start_async().await;
    let review = server.mock(|when, then| {
        when.method(POST).path("/reviews").json_body(json!({
            "name": "Alice",
            "email": "alice@example.com",
            "rating": 5,
            "comment": "Great service"
        }));
        then.status(200).json_body(json!({ "insertedId": "r1" }));
    });
    let make_admin = server.mock(|when, then| {
        when.method(PUT)
            .path("/users/admin")
            .json_body(json!({ "email": "bob@example.com" }));
        then.status(200).json_body(json!({ "modifiedCount": 1 }));
    });
    let add_car = server.mock(|when, then| {
        when.method(POST).path("/cars").json_body(json!({
            "name": "Golf",
            "price": 19999.0,
            "image": "https://img.example/golf.png",
            "description": "Compact hatchback"
        }));
        then.status(200).json_body(json!({ "insertedId": "c9" }));
    });

    let client = api_client(&server);
    client
        .create_review(&NewReview {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            rating: 5,
            comment: "Great service".into(),
        })
        .await
        .unwrap();
    client
        .make_admin(&MakeAdminRequest {
            email: "bob@example.com".into(),
        })
        .await
        .unwrap();
    let ack = client
        .create_car(&NewCar {
            name: "Golf".into(),
            price: 19999.0,
            image: "https://img.example/golf.png".into(),
            description: "Compact hatchback".into(),
        })
        .await
        .unwrap();
    assert_eq!(ack.affected, Some(json!("c9")));

    review.assert_hits(1);
    make_admin.assert_hits(1);
    add_car.assert_hits(1);
    storage_utils::clear_session();
}

#[tokio::test]
async fn forbidden_without_body_maps_to_forbidden_error() {
    sign_in("tok-user");
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PUT).path("/users/admin");
        then.status(403);
    });

    let err = api_client(&server)
        .make_admin(&MakeAdminRequest {
            email: "bob@example.com".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, "FORBIDDEN");
    storage_utils::clear_session();
}
