//! Rendered demo pages: portfolio group, weather group, and a few
//! standalone endpoints.
//!
//! Each handler assembles a flat string context and hands it to the
//! rendering collaborator; anything structured (lists, optional banners) is
//! pre-rendered here.

use axum::extract::{Path, Query};
use axum::http::Method;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use crate::render::render;

const SAMPLE: &str = include_str!("../../templates/sample.html");
const CONDITIONAL: &str = include_str!("../../templates/conditional.html");
const SIMPLE: &str = include_str!("../../templates/simple.html");
const HOME: &str = include_str!("../../templates/home.html");
const ABOUT: &str = include_str!("../../templates/about.html");
const CONTACT: &str = include_str!("../../templates/contact.html");
const PROJECTS: &str = include_str!("../../templates/projects.html");
const CSUCCESS: &str = include_str!("../../templates/csuccess.html");

/// `/check/{n}` — even/odd demo page.
pub async fn odd_even(Path(n): Path<u64>) -> Html<String> {
    let parity = if n % 2 == 0 { "even" } else { "odd" };
    Html(render(
        SAMPLE,
        &[("n", &n.to_string()), ("parity", parity)],
    ))
}

/// `/record/{name}/{age}` — plain text echo of two path parameters.
pub async fn record(Path((name, age)): Path<(String, u32)>) -> String {
    format!("Name = {} and age = {}", name, age)
}

/// `/show` — POST-only method echo.
pub async fn show(method: Method) -> String {
    format!("done {}", method)
}

// Portfolio group

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    success: Option<String>,
}

/// `/portfolio/` — home page, with a banner after a successful submission.
pub async fn home(Query(query): Query<HomeQuery>) -> Html<String> {
    let success = query.success.as_deref() == Some("1");
    let banner = if success {
        r#"<p class="banner">Thanks, your message was sent.</p>"#
    } else {
        ""
    };
    Html(render(HOME, &[("success_banner", banner)]))
}

/// `/portfolio/about/`
pub async fn about() -> Html<&'static str> {
    Html(ABOUT)
}

/// `/portfolio/contactxyz/`
pub async fn contact() -> Html<&'static str> {
    Html(CONTACT)
}

/// `/portfolio/project/`
pub async fn projects() -> Html<&'static str> {
    Html(PROJECTS)
}

#[derive(Debug, Deserialize)]
pub struct ContactSubmission {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
}

/// `/portfolio/contact-submission/` — accepts the contact form.
///
/// Nothing is stored; the submission is logged and acknowledged.
pub async fn contact_submission(Form(form): Form<ContactSubmission>) -> Html<&'static str> {
    tracing::info!(
        name = form.name.as_deref().unwrap_or(""),
        email = form.email.as_deref().unwrap_or(""),
        subject = form.subject.as_deref().unwrap_or(""),
        "Contact form submitted"
    );
    Html(CSUCCESS)
}

// Weather group

fn weather_page(location: &str, temperature: i32, forecasts: &[&str]) -> Html<String> {
    let forecast_items = forecasts
        .iter()
        .map(|f| format!("<li>{}</li>", f))
        .collect::<Vec<_>>()
        .join("\n      ");

    Html(render(
        CONDITIONAL,
        &[
            ("location", location),
            ("temperature", &temperature.to_string()),
            ("forecast_items", &forecast_items),
        ],
    ))
}

/// `/weather/dhaka/`
pub async fn dhaka() -> Html<String> {
    let forecast = ["sunny", "rainy", "sunny", "hot", "cold", "freezing"];
    weather_page("Dhaka", 20, &forecast)
}

/// `/weather/rajshahi/`
pub async fn rajshahi() -> Html<String> {
    let forecast = ["cold", "rainy", "cold", "sunny", "cold", "freezing"];
    weather_page("Rajshahi", 12, &forecast)
}

/// `/weather/intro/`
pub async fn intro() -> Html<String> {
    Html(render(
        SIMPLE,
        &[
            ("topic", "Server Templating"),
            ("message", "Welcome to this class!!!"),
        ],
    ))
}
