mod health;
mod records;

use aula_records::EntityKind;
use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::routing::{get, put};

use crate::state::AppState;

/// Registers the same five routes for every entity kind:
///
/// - `GET    /{route}`             active records
/// - `GET    /{route}Desactivados` deactivated records
/// - `POST   /{route}`             create
/// - `PUT    /{route}/{id}`        merge update
/// - `DELETE /{route}/{id}`        soft delete
pub fn router() -> Router<AppState> {
    EntityKind::ALL
        .into_iter()
        .fold(
            Router::new().route("/healthz", get(health::healthz)),
            |router, kind| {
                let route = kind.route();
                router
                    .route(
                        &format!("/{route}"),
                        get(move |State(state): State<AppState>| records::list_active(state, kind))
                            .post(move |State(state): State<AppState>, body: Bytes| {
                                records::create(state, kind, body)
                            }),
                    )
                    .route(
                        &format!("/{route}Desactivados"),
                        get(move |State(state): State<AppState>| {
                            records::list_inactive(state, kind)
                        }),
                    )
                    .route(
                        &format!("/{route}/{{id}}"),
                        put(
                            move |State(state): State<AppState>,
                                  Path(id): Path<String>,
                                  body: Bytes| {
                                records::update(state, kind, id, body)
                            },
                        )
                        .delete(
                            move |State(state): State<AppState>, Path(id): Path<String>| {
                                records::deactivate(state, kind, id)
                            },
                        ),
                    )
            },
        )
        .fallback(health::not_found)
        .method_not_allowed_fallback(health::method_not_allowed)
}
