mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn asset_urls_over_http() -> anyhow::Result<()> {
    let app = common::spawn_studio(Some(common::STORAGE_URL)).await?;
    let client = reqwest::Client::new();

    let plain: Value = client.get(app.url("/assets/url"))
        .query(&[("path", "gallery/spring showcase.jpg")])
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(
        plain["url"],
        "https://cdn.test/storage/v1/object/public/studio-assets/gallery/spring%20showcase.jpg"
    );

    let resp = client.get(app.url("/assets/url"))
        .query(&[("path", "hero/home.jpg"), ("height", "600"), ("resize", "contain"), ("quality", "75")])
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let sized: Value = resp.json().await?;
    assert_eq!(
        sized["url"],
        "https://cdn.test/storage/v1/render/image/public/studio-assets/hero/home.jpg?height=600&resize=contain&quality=75"
    );

    let bad = client.get(app.url("/assets/url?path=hero/home.jpg&format=gif")).send().await?;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

    app.stop().await;
    Ok(())
}

#[tokio::test]
async fn missing_storage_configuration() -> anyhow::Result<()> {
    let app = common::spawn_studio(None).await?;
    let client = reqwest::Client::new();

    let resp = client.get(app.url("/assets/placeholder?path=hero/home.jpg")).send().await?;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let err: Value = resp.json().await?;
    assert_eq!(err["code"], "storage_error");

    // class listings still render, just without images
    let classes: Value = client.get(app.url("/classes")).send().await?.json().await?;
    assert!(classes["items"][0]["image"]["url"].is_null());

    app.stop().await;
    Ok(())
}
