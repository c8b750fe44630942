use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::books::list_books,
        api::books::create_book,
        api::books::search_books,
        api::books::get_stats,
        api::loan::check_out_book,
        api::loan::return_book,
    ),
    components(
        schemas(
            crate::models::NewBook,
            crate::models::BookView,
            crate::domain::CatalogStats,
            api::books::BooksResponse,
            api::loan::CheckoutRequest,
            api::loan::ReturnRequest,
        )
    ),
    tags(
        (name = "bibliocatalog", description = "Library catalog API")
    )
)]
pub struct ApiDoc;
