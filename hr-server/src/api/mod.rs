//! API routes for hr-server
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/` | greeting |
//! | GET | `/health` | health check |
//! | GET, POST | `/students` | list, create |
//! | GET, PUT, DELETE | `/students/{id}` | get, partial update, hard delete |
//! | GET, POST | `/pegawais` | list, create |
//! | GET, PUT, DELETE | `/pegawais/{id}` | get (active only), full update, soft delete |
//! | POST | `/absensi` | create attendance |
//! | GET | `/absensi` | attendance report |
//! | GET | `/absensi-logic` | attendance report with pro-ration |

pub mod crud;
pub mod health;
pub mod payroll;
pub mod resource;

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::routing::get;
use axum::{Router, middleware as axum_middleware};
use http::HeaderName;
use shared::models::{Attendance, Employee, Student};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};

use crate::config::Config;
use crate::middleware::{self, REQUEST_ID_HEADER, XRequestId};
use crate::state::AppState;
use resource::{CrudResource, Resource};

/// Optional parts of the middleware chain
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpOptions {
    /// Log every request
    pub access_log: bool,
    /// Abort requests that run longer than this
    pub request_timeout: Option<Duration>,
}

impl From<&Config> for HttpOptions {
    fn from(config: &Config) -> Self {
        Self {
            access_log: config.access_log,
            request_timeout: config.request_timeout,
        }
    }
}

/// `GET/POST {PATH}` and `GET/PUT/DELETE {PATH}/{id}` for one resource
fn crud_routes<R: CrudResource>() -> Router<AppState> {
    Router::new()
        .route(R::PATH, get(crud::list::<R>).post(crud::create::<R>))
        .route(
            &format!("{}/{{id}}", R::PATH),
            get(crud::get_by_id::<R>)
                .put(crud::update::<R>)
                .delete(crud::delete::<R>),
        )
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::greeting))
        .route("/health", get(health::health_check))
        .merge(crud_routes::<Student>())
        .merge(crud_routes::<Employee>())
        // Attendance rows are create-only; GET on the collection is the report
        .route(
            Attendance::PATH,
            get(payroll::report).post(crud::create::<Attendance>),
        )
        .route("/absensi-logic", get(payroll::report_prorated))
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: AppState, options: HttpOptions) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // Innermost: rejected requests never reach a handler
    let mut app = build_router().layer(axum_middleware::from_fn_with_state(
        state.clone(),
        middleware::rate_limit,
    ));

    if let Some(timeout) = options.request_timeout {
        app = app.layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(middleware::handle_timeout_error))
                .timeout(timeout),
        );
    }

    app = app.layer(CatchPanicLayer::custom(middleware::handle_panic));

    if options.access_log {
        app = app.layer(axum_middleware::from_fn(middleware::logging_middleware));
    }

    app.layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, XRequestId))
        .with_state(state)
}
