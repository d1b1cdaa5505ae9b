//! OpenAPI document for the complaint routes.

use crate::handlers::complaint;
use crate::model::{Complaint, ComplaintInput};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "complaints-api"),
    paths(
        complaint::create,
        complaint::list,
        complaint::read,
        complaint::update,
        complaint::delete
    ),
    components(schemas(Complaint, ComplaintInput))
)]
pub struct ApiDoc;

pub fn openapi_document() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
