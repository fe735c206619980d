use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::call_numbers::derive_sort_key,
        api::call_numbers::sort_call_numbers,
    ),
    components(
        schemas(
            api::call_numbers::KeyRequest,
            api::call_numbers::KeyResponse,
            api::call_numbers::SortRequest,
            api::call_numbers::SortResponse,
            api::call_numbers::SortedCallNumber,
        )
    ),
    tags(
        (name = "loc-shelf", description = "LOC call number shelf ordering API")
    )
)]
pub struct ApiDoc;
