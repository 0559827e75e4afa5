use utoipa::OpenApi;

use crate::models::{ClassListing, ErrorBody, NewClass, ScheduleItem};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::list_classes,
        crate::handlers::create_class
    ),
    components(schemas(ClassListing, NewClass, ScheduleItem, ErrorBody)),
    tags(
        (name = "classes", description = "Tutoring class search and registration"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_class_routes() {
        let doc = ApiDoc::openapi();
        let classes = doc.paths.paths.get("/classes").unwrap();
        assert!(classes.get.is_some());
        assert!(classes.post.is_some());
    }
}
