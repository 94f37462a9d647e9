use serde_json::json;

use crate::common::{TestApp, routes, spawn_mock_wechat};

#[tokio::test]
async fn login_creates_user_on_first_code() {
    let wechat = spawn_mock_wechat(json!({ "openid": "user-1", "session_key": "sk" })).await;
    let app = TestApp::spawn_with_wechat_url(wechat).await;

    let res = app.post_json(routes::LOGIN, &json!({ "code": "any-code" })).await;
    assert_eq!(res.status, 200, "login failed: {:?}", res.body);
    let data = &res.body["data"];
    assert_eq!(data["open_id"], "user-1");
    assert_eq!(data["is_new_user"], true);
    // First login assigns a default nickname.
    assert!(data["nick_name"].as_str().is_some_and(|n| !n.is_empty()));
}

#[tokio::test]
async fn second_login_reuses_the_user() {
    let wechat = spawn_mock_wechat(json!({ "openid": "user-2", "session_key": "sk" })).await;
    let app = TestApp::spawn_with_wechat_url(wechat).await;

    let first = app.post_json(routes::LOGIN, &json!({ "code": "c1" })).await;
    let nickname = first.body["data"]["nick_name"].clone();

    let second = app.post_json(routes::LOGIN, &json!({ "code": "c2" })).await;
    assert_eq!(second.body["data"]["is_new_user"], false);
    assert_eq!(second.body["data"]["nick_name"], nickname);

    use sea_orm::EntityTrait;
    use server::entity::user;
    let users = user::Entity::find().all(&app.db).await.unwrap();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn login_keeps_a_client_supplied_nickname() {
    let wechat = spawn_mock_wechat(json!({ "openid": "user-6", "session_key": "sk" })).await;
    let app = TestApp::spawn_with_wechat_url(wechat).await;

    let res = app
        .post_json(
            routes::LOGIN,
            &json!({ "code": "c", "nick_name": "Playmaker", "avatar_url": "https://cdn.example.com/a.png" }),
        )
        .await;
    assert_eq!(res.body["data"]["nick_name"], "Playmaker");
    assert_eq!(res.body["data"]["avatar_url"], "https://cdn.example.com/a.png");
}

#[tokio::test]
async fn login_with_blank_code_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app.post_json(routes::LOGIN, &json!({ "code": "  " })).await;
    assert_eq!(res.status, 400);
}

#[tokio::test]
async fn upstream_error_code_maps_to_bad_gateway() {
    let wechat =
        spawn_mock_wechat(json!({ "errcode": 40029, "errmsg": "invalid code" })).await;
    let app = TestApp::spawn_with_wechat_url(wechat).await;

    let res = app.post_json(routes::LOGIN, &json!({ "code": "bad" })).await;
    assert_eq!(res.status, 502);
    assert_eq!(res.body["code"], 502);
}

#[tokio::test]
async fn unreachable_identity_service_maps_to_bad_gateway() {
    let app = TestApp::spawn().await;

    let res = app.post_json(routes::LOGIN, &json!({ "code": "c" })).await;
    assert_eq!(res.status, 502);
}

#[tokio::test]
async fn get_user_returns_profile() {
    let wechat = spawn_mock_wechat(json!({ "openid": "user-3", "session_key": "sk" })).await;
    let app = TestApp::spawn_with_wechat_url(wechat).await;
    app.post_json(routes::LOGIN, &json!({ "code": "c" })).await;

    let res = app.get(&routes::user("user-3")).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["data"]["open_id"], "user-3");
}

#[tokio::test]
async fn get_unknown_user_is_404() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::user("nobody")).await;
    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn nickname_can_be_updated() {
    let wechat = spawn_mock_wechat(json!({ "openid": "user-4", "session_key": "sk" })).await;
    let app = TestApp::spawn_with_wechat_url(wechat).await;
    app.post_json(routes::LOGIN, &json!({ "code": "c" })).await;

    let res = app
        .put_empty(&format!(
            "{}?open_id=user-4&nick_name=TopScorer",
            routes::NICKNAME
        ))
        .await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["data"]["nick_name"], "TopScorer");
}

#[tokio::test]
async fn nickname_validation_rejects_out_of_bounds() {
    let wechat = spawn_mock_wechat(json!({ "openid": "user-5", "session_key": "sk" })).await;
    let app = TestApp::spawn_with_wechat_url(wechat).await;
    app.post_json(routes::LOGIN, &json!({ "code": "c" })).await;

    let blank = app
        .put_empty(&format!("{}?open_id=user-5&nick_name=%20%20", routes::NICKNAME))
        .await;
    assert_eq!(blank.status, 400);

    let long = "x".repeat(21);
    let too_long = app
        .put_empty(&format!(
            "{}?open_id=user-5&nick_name={long}",
            routes::NICKNAME
        ))
        .await;
    assert_eq!(too_long.status, 400);
}

#[tokio::test]
async fn nickname_update_for_unknown_user_is_404() {
    let app = TestApp::spawn().await;

    let res = app
        .put_empty(&format!("{}?open_id=ghost&nick_name=Name", routes::NICKNAME))
        .await;
    assert_eq!(res.status, 404);
}
