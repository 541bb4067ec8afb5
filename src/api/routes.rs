//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::error::MessageResponse;
use super::state::AppState;
use super::system::{self, HealthResponse};
use super::v1::{self, ContactRequest, ContactResponse};
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contacts API",
        version = "0.1.0",
        description = "CRUD API for a contact book",
        license(name = "GPL-2.0")
    ),
    paths(
        system::health,
        v1::list_contacts,
        v1::get_contact,
        v1::create_contact,
        v1::update_contact,
        v1::delete_contact,
    ),
    components(
        schemas(
            HealthResponse,
            ContactResponse,
            ContactRequest,
            MessageResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "contacts", description = "Contact management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router, optionally serving OpenAPI docs at `/docs`.
pub fn create_router<D: Database + 'static>(state: AppState<D>, enable_docs: bool) -> Router {
    // System routes (non-generic)
    let system_routes = Router::new().route("/health", get(system::health));

    // Collection routes answer with and without the trailing slash
    let contact_routes = routes!(D => {
        get "/api/contacts" => v1::list_contacts,
        get "/api/contacts/" => v1::list_contacts,
        post "/api/contacts" => v1::create_contact,
        post "/api/contacts/" => v1::create_contact,
        get "/api/contacts/{contact_id}" => v1::get_contact,
        put "/api/contacts/{contact_id}" => v1::update_contact,
        delete "/api/contacts/{contact_id}" => v1::delete_contact,
    });

    let router = system_routes.merge(contact_routes);

    let router = if enable_docs {
        router.merge(Scalar::with_url("/docs", ApiDoc::openapi()))
    } else {
        router
    };

    router.fallback(system::not_found).with_state(state)
}
