use utoipa::OpenApi;

use crate::models::{
    plot::Plot,
    request::{ErrorResponse, Link, PlotApiResponse, PlotRequest, PlotResponse},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Garden Plot API",
        description = "Turns a plot's width and height into one placeholder item per spot, rounding the area up to whole spots.",
        version = "0.1.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::plot::post_items,
        crate::api::handlers::plot::get_spots,
    ),
    components(schemas(
        Plot,
        PlotRequest,
        PlotResponse,
        Link,
        ErrorResponse,
        PlotApiResponse,
    )),
    tags(
        (name = "plot", description = "Plot spots and placeholder items"),
    )
)]
pub struct ApiDoc;
