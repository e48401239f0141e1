use std::collections::HashMap;

use actix_web::{get, http::Method, post, web, HttpResponse};

use crate::{
    config::Config,
    error::PlotError,
    models::{
        plot::Plot,
        request::{link, ApiResponse, Links, PlotRequest, PlotResponse},
    },
};

fn plot_links(request: &PlotRequest) -> Links {
    let mut links = HashMap::new();
    links.insert("items".into(), link("/api/plot/items", Method::POST));
    links.insert(
        "spots".into(),
        link(
            format!(
                "/api/plot/spots?width={}&height={}",
                request.width, request.height
            ),
            Method::GET,
        ),
    );
    links
}

/// Computes the spot count, refusing plots larger than the configured limit
/// before any item is allocated.
fn bounded_spot_count(plot: &Plot, max_spots: usize) -> Result<usize, PlotError> {
    let requested = plot.spot_count()?;
    if requested > max_spots {
        log::warn!("Refusing plot of {requested} spots (limit {max_spots})");
        return Err(PlotError::TooManySpots {
            requested,
            limit: max_spots,
        });
    }
    Ok(requested)
}

/// POST /api/plot/items
/// Fills the plot with one placeholder item per spot.
#[utoipa::path(
    post,
    path = "/api/plot/items",
    tag = "plot",
    request_body = PlotRequest,
    responses(
        (status = 200, description = "One item per spot", body = crate::models::request::PlotApiResponse),
        (status = 400, description = "Malformed body or uncountable plot", body = crate::models::request::ErrorResponse),
    )
)]
#[post("/plot/items")]
pub async fn post_items(
    config: web::Data<Config>,
    body: web::Json<PlotRequest>,
) -> Result<HttpResponse, PlotError> {
    let request = body.into_inner();
    let plot = Plot::new(request.width, request.height);
    let spot_count = bounded_spot_count(&plot, config.max_spots)?;
    let items = plot.items()?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        PlotResponse {
            width: plot.width(),
            height: plot.height(),
            spot_count,
            items: Some(items),
        },
        plot_links(&request),
    )))
}

/// GET /api/plot/spots?width=..&height=..
/// Returns the spot count alone. Nothing is allocated, so `max_spots` does not apply.
#[utoipa::path(
    get,
    path = "/api/plot/spots",
    tag = "plot",
    params(PlotRequest),
    responses(
        (status = 200, description = "Spot count for the plot", body = crate::models::request::PlotApiResponse),
        (status = 400, description = "Malformed query or uncountable plot", body = crate::models::request::ErrorResponse),
    )
)]
#[get("/plot/spots")]
pub async fn get_spots(query: web::Query<PlotRequest>) -> Result<HttpResponse, PlotError> {
    let request = query.into_inner();
    let plot = Plot::new(request.width, request.height);
    let spot_count = plot.spot_count()?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        PlotResponse {
            width: plot.width(),
            height: plot.height(),
            spot_count,
            items: None,
        },
        plot_links(&request),
    )))
}
