use actix_cors::Cors;
use actix_web::http::header;

/// Origins used when nothing valid is configured.
const LOCALHOST_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Build CORS middleware for the configured browser origins.
///
/// Entries must be `http(s)://` origins; empty and `"null"` entries are
/// dropped. With nothing left, only the localhost dev origins are allowed.
pub fn cors_middleware(configured_origins: &[String]) -> Cors {
    let mut origins: Vec<&str> = configured_origins
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .collect();

    if origins.is_empty() {
        origins = LOCALHOST_ORIGINS.to_vec();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        // The bearer credential travels in Authorization
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::WWW_AUTHENTICATE,
        ])
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
