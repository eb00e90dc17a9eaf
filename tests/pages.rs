//! Integration tests for the rendered demo pages.

use storefront::config::AppConfig;

mod common;

#[tokio::test]
async fn check_reports_parity() {
    let (base, shutdown) = common::spawn_app(AppConfig::default()).await;

    let body = reqwest::get(format!("{}/check/4", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("4 is even"));

    let body = reqwest::get(format!("{}/check/7", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("7 is odd"));

    shutdown.trigger();
}

#[tokio::test]
async fn record_echoes_name_and_age() {
    let (base, shutdown) = common::spawn_app(AppConfig::default()).await;

    let res = reqwest::get(format!("{}/record/alice/30", base)).await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Name = alice and age = 30");

    shutdown.trigger();
}

#[tokio::test]
async fn show_is_post_only() {
    let (base, shutdown) = common::spawn_app(AppConfig::default()).await;
    let client = reqwest::Client::new();

    let res = client.post(format!("{}/show", base)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "done POST");

    let res = client.get(format!("{}/show", base)).send().await.unwrap();
    assert_eq!(res.status(), 405);

    shutdown.trigger();
}

#[tokio::test]
async fn portfolio_home_banner_follows_the_success_flag() {
    let (base, shutdown) = common::spawn_app(AppConfig::default()).await;

    let body = reqwest::get(format!("{}/portfolio/", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(!body.contains("your message was sent"));

    let body = reqwest::get(format!("{}/portfolio/?success=1", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("your message was sent"));

    shutdown.trigger();
}

#[tokio::test]
async fn portfolio_static_pages_render() {
    let (base, shutdown) = common::spawn_app(AppConfig::default()).await;

    for (path, needle) in [
        ("/portfolio/about/", "About"),
        ("/portfolio/contactxyz/", "Contact"),
        ("/portfolio/project/", "Projects"),
    ] {
        let res = reqwest::get(format!("{}{}", base, path)).await.unwrap();
        assert_eq!(res.status(), 200, "GET {}", path);
        assert!(res.text().await.unwrap().contains(needle), "GET {}", path);
    }

    shutdown.trigger();
}

#[tokio::test]
async fn contact_submission_acknowledges() {
    let (base, shutdown) = common::spawn_app(AppConfig::default()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/portfolio/contact-submission/", base))
        .form(&[("name", "alice"), ("email", "a@example.com"), ("subject", "hi")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("Thanks"));

    shutdown.trigger();
}

#[tokio::test]
async fn weather_pages_render_location_and_forecast() {
    let (base, shutdown) = common::spawn_app(AppConfig::default()).await;

    let body = reqwest::get(format!("{}/weather/dhaka/", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Weather in Dhaka"));
    assert!(body.contains("<li>sunny</li>"));

    let body = reqwest::get(format!("{}/weather/rajshahi/", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Weather in Rajshahi"));
    assert!(body.contains("<li>freezing</li>"));

    shutdown.trigger();
}

#[tokio::test]
async fn weather_intro_renders_topic_and_message() {
    let (base, shutdown) = common::spawn_app(AppConfig::default()).await;

    let body = reqwest::get(format!("{}/weather/intro/", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Server Templating"));
    assert!(body.contains("Welcome to this class!!!"));

    shutdown.trigger();
}
