use serde_json::json;

use crate::common::{TestApp, routes};

async fn create_event(app: &TestApp, title: &str, date: &str, content: Option<&str>) -> i32 {
    let res = app
        .post_json(
            routes::EVENTS,
            &json!({ "title": title, "date": date, "content": content }),
        )
        .await;
    assert_eq!(res.status, 200, "create failed: {:?}", res.body);
    res.id()
}

#[tokio::test]
async fn create_and_get_event() {
    let app = TestApp::spawn().await;

    let id = create_event(&app, "City derby", "2026-09-12", Some("Kickoff at noon.")).await;

    let res = app.get(&routes::event(id)).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["code"], 200);
    assert_eq!(res.body["data"]["title"], "City derby");
    assert_eq!(res.body["data"]["date"], "2026-09-12");
    assert_eq!(res.body["data"]["view_count"], 0);
    assert_eq!(res.body["data"]["cover_image"], serde_json::Value::Null);
}

#[tokio::test]
async fn create_extracts_markdown_cover() {
    let app = TestApp::spawn().await;

    let content = "# Report\n\n![cover](https://cdn.example.com/a.png)\n\ntext";
    let id = create_event(&app, "With cover", "2026-09-12", Some(content)).await;

    let res = app.get(&routes::event(id)).await;
    assert_eq!(res.body["data"]["cover_image"], "https://cdn.example.com/a.png");
}

#[tokio::test]
async fn markdown_cover_beats_earlier_html_tag() {
    let app = TestApp::spawn().await;

    let content = "intro <img src='a.png'> ![cover](b.png) more";
    let id = create_event(&app, "Mixed images", "2026-09-12", Some(content)).await;

    let res = app.get(&routes::event(id)).await;
    assert_eq!(res.body["data"]["cover_image"], "b.png");
}

#[tokio::test]
async fn html_cover_used_when_no_markdown_image() {
    let app = TestApp::spawn().await;

    let content = r#"pre <img src="only.jpg" alt=""> post"#;
    let id = create_event(&app, "Html only", "2026-09-12", Some(content)).await;

    let res = app.get(&routes::event(id)).await;
    assert_eq!(res.body["data"]["cover_image"], "only.jpg");
}

#[tokio::test]
async fn create_rejects_bad_title() {
    let app = TestApp::spawn().await;

    let blank = app
        .post_json(routes::EVENTS, &json!({ "title": "   ", "date": "2026-09-12" }))
        .await;
    assert_eq!(blank.status, 400);
    assert_eq!(blank.body["code"], 400);
    assert_eq!(blank.body["data"], serde_json::Value::Null);

    let long = app
        .post_json(
            routes::EVENTS,
            &json!({ "title": "x".repeat(201), "date": "2026-09-12" }),
        )
        .await;
    assert_eq!(long.status, 400);
}

#[tokio::test]
async fn update_recomputes_cover_from_new_content() {
    let app = TestApp::spawn().await;
    let id = create_event(&app, "Event", "2026-09-12", Some("![old](old.png)")).await;

    let res = app
        .put_json(&routes::event(id), &json!({ "content": "now ![new](new.png)" }))
        .await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["data"]["cover_image"], "new.png");
}

#[tokio::test]
async fn update_with_null_content_clears_cover() {
    let app = TestApp::spawn().await;
    let id = create_event(&app, "Event", "2026-09-12", Some("![old](old.png)")).await;

    let res = app
        .put_json(&routes::event(id), &json!({ "content": null }))
        .await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["data"]["content"], serde_json::Value::Null);
    assert_eq!(res.body["data"]["cover_image"], serde_json::Value::Null);
}

#[tokio::test]
async fn update_without_content_keeps_cover() {
    let app = TestApp::spawn().await;
    let id = create_event(&app, "Event", "2026-09-12", Some("![old](old.png)")).await;

    let res = app
        .put_json(&routes::event(id), &json!({ "title": "Renamed" }))
        .await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["data"]["title"], "Renamed");
    assert_eq!(res.body["data"]["cover_image"], "old.png");
    assert_eq!(res.body["data"]["content"], "![old](old.png)");
}

#[tokio::test]
async fn update_missing_event_is_404() {
    let app = TestApp::spawn().await;

    let res = app
        .put_json(&routes::event(9999), &json!({ "title": "x" }))
        .await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], 404);
}

#[tokio::test]
async fn delete_event_then_get_is_404() {
    let app = TestApp::spawn().await;
    let id = create_event(&app, "Ephemeral", "2026-09-12", None).await;

    let res = app.delete(&routes::event(id)).await;
    assert_eq!(res.status, 200);

    let res = app.get(&routes::event(id)).await;
    assert_eq!(res.status, 404);

    let res = app.delete(&routes::event(id)).await;
    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn list_paginates_and_reports_has_more() {
    let app = TestApp::spawn().await;
    for i in 0..25 {
        create_event(&app, &format!("Event {i:02}"), "2026-09-12", None).await;
    }

    let res = app.get(&format!("{}?page=1&page_size=10", routes::EVENTS)).await;
    assert_eq!(res.status, 200);
    let data = &res.body["data"];
    assert_eq!(data["items"].as_array().unwrap().len(), 10);
    assert_eq!(data["total"], 25);
    assert_eq!(data["has_more"], true);

    let res = app.get(&format!("{}?page=3&page_size=10", routes::EVENTS)).await;
    let data = &res.body["data"];
    assert_eq!(data["items"].as_array().unwrap().len(), 5);
    assert_eq!(data["total"], 25);
    assert_eq!(data["has_more"], false);
}

#[tokio::test]
async fn list_survives_extreme_page_numbers() {
    let app = TestApp::spawn().await;
    create_event(&app, "Only one", "2026-09-12", None).await;

    let res = app
        .get(&format!(
            "{}?page={}&page_size=100",
            routes::EVENTS,
            u64::MAX
        ))
        .await;
    assert_eq!(res.status, 200);
    let data = &res.body["data"];
    assert_eq!(data["items"].as_array().unwrap().len(), 0);
    assert_eq!(data["total"], 1);
    assert_eq!(data["has_more"], false);
}

#[tokio::test]
async fn iterating_pages_visits_every_event_exactly_once() {
    let app = TestApp::spawn().await;
    for i in 0..25 {
        create_event(&app, &format!("Event {i:02}"), "2026-09-12", None).await;
    }

    let mut seen = std::collections::HashSet::new();
    let mut fetched = 0;
    let mut page = 1;
    loop {
        let res = app
            .get(&format!("{}?page={page}&page_size=7", routes::EVENTS))
            .await;
        assert_eq!(res.status, 200);
        let data = &res.body["data"];
        assert_eq!(data["total"], 25);

        let items = data["items"].as_array().unwrap();
        fetched += items.len();
        for item in items {
            assert!(
                seen.insert(item["id"].as_i64().unwrap()),
                "event {} appeared on more than one page",
                item["id"]
            );
        }

        if data["has_more"] != true {
            break;
        }
        page += 1;
    }

    assert_eq!(fetched, 25);
    assert_eq!(seen.len(), 25);
    assert_eq!(page, 4);
}

#[tokio::test]
async fn list_page_beyond_range_is_empty_not_an_error() {
    let app = TestApp::spawn().await;
    create_event(&app, "Only one", "2026-09-12", None).await;

    let res = app.get(&format!("{}?page=50&page_size=10", routes::EVENTS)).await;
    assert_eq!(res.status, 200);
    let data = &res.body["data"];
    assert_eq!(data["items"].as_array().unwrap().len(), 0);
    assert_eq!(data["total"], 1);
    assert_eq!(data["has_more"], false);
}

#[tokio::test]
async fn list_rejects_out_of_range_paging() {
    let app = TestApp::spawn().await;

    for query in ["page=0", "page_size=0", "page_size=101"] {
        let res = app.get(&format!("{}?{}", routes::EVENTS, query)).await;
        assert_eq!(res.status, 400, "expected 400 for {query}");
    }
}

#[tokio::test]
async fn list_orders_by_date_desc_then_id_asc() {
    let app = TestApp::spawn().await;
    let old = create_event(&app, "Older", "2026-01-01", None).await;
    let new_a = create_event(&app, "Newer A", "2026-06-01", None).await;
    let new_b = create_event(&app, "Newer B", "2026-06-01", None).await;

    let res = app.get(routes::EVENTS).await;
    let ids: Vec<i64> = res.body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![new_a as i64, new_b as i64, old as i64]);
}

#[tokio::test]
async fn keyword_filters_by_title_substring() {
    let app = TestApp::spawn().await;
    create_event(&app, "Champions League Final", "2026-05-30", None).await;
    create_event(&app, "Local friendly", "2026-05-31", None).await;

    let res = app.get(&format!("{}?keyword=Champions", routes::EVENTS)).await;
    let items = res.body["data"]["items"].as_array().unwrap().clone();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Champions League Final");

    // Repeating the same query returns the same result.
    let again = app.get(&format!("{}?keyword=Champions", routes::EVENTS)).await;
    assert_eq!(again.body["data"]["items"], serde_json::Value::Array(items));
}

// The filter is a plain LIKE, so case behavior follows the database
// collation. These suites run on SQLite, where LIKE is ASCII
// case-insensitive; on Postgres the same query matches case-sensitively.
#[tokio::test]
async fn keyword_case_follows_database_collation() {
    let app = TestApp::spawn().await;
    create_event(&app, "Champions League Final", "2026-05-30", None).await;

    let res = app.get(&format!("{}?keyword=champions", routes::EVENTS)).await;
    let items = res.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Champions League Final");
}

#[tokio::test]
async fn keyword_wildcards_are_literal() {
    let app = TestApp::spawn().await;
    create_event(&app, "100% effort", "2026-05-30", None).await;
    create_event(&app, "100 percent", "2026-05-31", None).await;

    let res = app.get(&format!("{}?keyword=100%25", routes::EVENTS)).await;
    let items = res.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "100% effort");
}

#[tokio::test]
async fn overlong_keyword_is_rejected() {
    let app = TestApp::spawn().await;

    let keyword = "k".repeat(101);
    let res = app.get(&format!("{}?keyword={keyword}", routes::EVENTS)).await;
    assert_eq!(res.status, 400);
}

#[tokio::test]
async fn view_count_increments() {
    let app = TestApp::spawn().await;
    let id = create_event(&app, "Popular", "2026-09-12", None).await;

    let res = app.post_empty(&routes::event_view(id)).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["data"]["view_count"], 1);

    app.post_empty(&routes::event_view(id)).await;
    let res = app.get(&routes::event(id)).await;
    assert_eq!(res.body["data"]["view_count"], 2);
}

#[tokio::test]
async fn view_count_survives_concurrent_increments() {
    let app = TestApp::spawn().await;
    let id = create_event(&app, "Contended", "2026-09-12", None).await;

    let mut handles = Vec::new();
    for _ in 0..10 {
        let client = app.client.clone();
        let url = app.url(&routes::event_view(id));
        handles.push(tokio::spawn(async move {
            let res = client.post(url).send().await.expect("view request failed");
            assert_eq!(res.status(), 200);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let res = app.get(&routes::event(id)).await;
    assert_eq!(res.body["data"]["view_count"], 10);
}

#[tokio::test]
async fn view_of_missing_event_is_404() {
    let app = TestApp::spawn().await;

    let res = app.post_empty(&routes::event_view(424242)).await;
    assert_eq!(res.status, 404);
}
