use axum::{Json, Router, http::StatusCode, response::Html, response::IntoResponse, routing::get};
use serde::{Deserialize, Serialize};

pub mod layout;

use layout::{ActivePage, render_page};

const DASHBOARD_CONTENT: &str = r#"<p>Encuentra videos sobre alimentacion, ejercicio y habitos saludables.</p>
<form id="video-search">
  <input type="search" name="q" placeholder="Buscar videos" required>
  <button type="submit">Buscar</button>
</form>
<p id="video-source"></p>
<section class="videos" id="video-results"></section>
<script>
document.getElementById("video-search").addEventListener("submit", async (event) => {
  event.preventDefault();
  const q = new FormData(event.target).get("q");
  const response = await fetch("/api/youtube/search?q=" + encodeURIComponent(q));
  const data = await response.json();
  const results = document.getElementById("video-results");
  results.replaceChildren();
  document.getElementById("video-source").textContent =
    data.source === "sample" ? "Mostrando videos de ejemplo" : "";
  for (const item of data.items || []) {
    const card = document.createElement("a");
    card.className = "video";
    card.href = item.url;
    card.target = "_blank";
    if (item.thumbnail) {
      const img = document.createElement("img");
      img.src = item.thumbnail;
      img.alt = "";
      card.appendChild(img);
    }
    const title = document.createElement("p");
    title.textContent = item.title + " - " + item.channel;
    card.appendChild(title);
    results.appendChild(card);
  }
});
</script>"#;

const REGISTER_CONTENT: &str = r#"<form>
  <label>Nombre <input name="name" required></label>
  <label>Fecha de nacimiento <input type="date" name="birthdate"></label>
  <label>Telefono <input type="tel" name="phone"></label>
  <button type="submit" disabled>Guardar</button>
</form>"#;

const REPORTS_CONTENT: &str = "<p>Aun no hay reportes disponibles.</p>";

const APPOINTMENTS_CONTENT: &str = "<p>No tienes citas programadas.</p>";

/// Body of the health endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

async fn health() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
    };
    (StatusCode::OK, Json(response))
}

async fn index() -> Html<String> {
    Html(render_page("Inicio", ActivePage::Dashboard, DASHBOARD_CONTENT))
}

async fn register() -> Html<String> {
    Html(render_page("Registro", ActivePage::Register, REGISTER_CONTENT))
}

async fn reports() -> Html<String> {
    Html(render_page("Reportes", ActivePage::Reports, REPORTS_CONTENT))
}

async fn appointments() -> Html<String> {
    Html(render_page(
        "Citas",
        ActivePage::Appointments,
        APPOINTMENTS_CONTENT,
    ))
}

// Create the router for the HTML pages and health check
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/register", get(register))
        .route("/reports", get(reports))
        .route("/appointments", get(appointments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;

    async fn fetch(uri: &str) -> (StatusCode, Option<String>, String) {
        let response = create_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, _, body) = fetch("/health").await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn pages_render_with_their_titles() {
        for (uri, title) in [
            ("/", "Inicio"),
            ("/register", "Registro"),
            ("/reports", "Reportes"),
            ("/appointments", "Citas"),
        ] {
            let (status, content_type, body) = fetch(uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(content_type.unwrap().starts_with("text/html"), "{uri}");
            assert!(body.contains(&format!("<h1>{title}</h1>")), "{uri}");
        }
    }

    #[tokio::test]
    async fn dashboard_embeds_video_search() {
        let (_, _, body) = fetch("/").await;
        assert!(body.contains("/api/youtube/search?q="));
    }

    #[tokio::test]
    async fn unknown_page_is_not_found() {
        let (status, _, _) = fetch("/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
