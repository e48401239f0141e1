use actix_web::{error::InternalError, web, HttpResponse};

use crate::api::handlers::{get_spots, post_items};

/// Registers the plot routes under `/api`, with JSON and query extraction
/// errors reported as `{ "error": ... }` bodies.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("JSON deserialization error: {err}");
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
        )
        .into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        let message = format!("Query deserialization error: {err}");
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
        )
        .into()
    }))
    .service(web::scope("/api").service(post_items).service(get_spots));
}
