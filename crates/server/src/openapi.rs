use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct SpecialtyDoc {
    pub id: i32,
    pub name: String,
    pub descriptions: Option<String>,
    pub is_active: bool,
}

#[derive(ToSchema)]
pub struct SpecialtyCreateDoc {
    pub name: String,
    pub descriptions: Option<String>,
    /// Defaults to `true`.
    pub is_active: Option<bool>,
}

#[derive(ToSchema)]
pub struct SpecialtyUpdateDoc {
    pub name: Option<String>,
    pub descriptions: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::specialties::list,
        crate::routes::specialties::create,
        crate::routes::specialties::get_by_id,
        crate::routes::specialties::replace,
        crate::routes::specialties::patch,
        crate::routes::specialties::soft_delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            SpecialtyDoc,
            SpecialtyCreateDoc,
            SpecialtyUpdateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "specialties")
    )
)]
pub struct ApiDoc;

/// The OpenAPI document with the specialties paths nested under `prefix`.
pub fn api_doc(prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let paths = std::mem::take(&mut doc.paths.paths);
    doc.paths.paths = paths
        .into_iter()
        .map(|(path, item)| {
            if path.starts_with("/specialties") {
                (format!("{prefix}{path}"), item)
            } else {
                (path, item)
            }
        })
        .collect();
    doc
}
