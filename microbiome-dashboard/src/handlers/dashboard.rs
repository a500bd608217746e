use axum::response::Html;

const DASHBOARD_PAGE: &str = include_str!("../../assets/dashboard.html");

pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

pub async fn liveness() -> &'static str {
    "ok"
}

pub async fn readiness() -> &'static str {
    "ok"
}
