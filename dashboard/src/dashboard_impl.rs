//! Main dashboard server implementation
//!
//! Wires the handlers into an axum router over the shared state and runs it
//! until a shutdown signal arrives.

use axum::Router;
use axum::routing::{get, post, put};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use shared::{Component, DashboardSettings, component_info, logging};
use waitlist::RecordSource;

use crate::error::{DashboardError, DashboardResult};
use crate::state::AppState;
use crate::traits::MetricsSource;
use crate::web::handlers::{pages, table};

/// Dashboard HTTP server with injected record and metrics sources
pub struct Dashboard<R: RecordSource, M: MetricsSource> {
    state: AppState<R, M>,
    settings: DashboardSettings,
    shutdown_tx: mpsc::Sender<()>,
    shutdown_rx: mpsc::Receiver<()>,
}

impl<R, M> Dashboard<R, M>
where
    R: RecordSource + 'static,
    M: MetricsSource + 'static,
{
    pub fn new(state: AppState<R, M>, settings: DashboardSettings) -> Self {
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        Self {
            state,
            settings,
            shutdown_tx,
            shutdown_rx,
        }
    }

    pub fn state(&self) -> &AppState<R, M> {
        &self.state
    }

    /// Sender that stops `run` gracefully
    pub fn get_shutdown_sender(&self) -> mpsc::Sender<()> {
        self.shutdown_tx.clone()
    }

    /// Build the axum router with all routes
    pub fn build_router(&self) -> Router {
        let router = Router::new()
            // Dashboard pages
            .route("/api/config", get(pages::get_config::<R, M>))
            .route("/api/metrics/service", get(pages::get_service_metrics::<R, M>))
            .route("/api/metrics/finance", get(pages::get_finance_metrics::<R, M>))
            .route("/api/metrics/hr", get(pages::get_hr_metrics::<R, M>))
            .route("/api/compliance", get(pages::get_compliance::<R, M>))
            .route("/api/users", get(pages::get_users::<R, M>))
            // Waitlist table
            .route("/api/waitlist", get(table::get_waitlist::<R, M>))
            .route("/api/waitlist/tab", post(table::switch_tab::<R, M>))
            .route("/api/waitlist/filters/draft", put(table::set_draft::<R, M>))
            .route("/api/waitlist/filters/apply", post(table::apply_filters::<R, M>))
            .route("/api/waitlist/filters/clear", post(table::clear_filters::<R, M>))
            .route("/api/waitlist/page", post(table::change_page::<R, M>))
            .route("/api/waitlist/selection/toggle", post(table::toggle_selection::<R, M>))
            .route("/api/waitlist/selection/toggle-all", post(table::toggle_all::<R, M>))
            .route("/api/waitlist/records/:id/status", put(table::update_status::<R, M>))
            // Health check
            .route("/health", get(pages::health))
            .with_state(self.state.clone());

        let router = match &self.settings.static_dir {
            Some(dir) => router.fallback_service(ServeDir::new(dir)),
            None => router,
        };

        router.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
    }

    /// Serve until the shutdown sender fires
    pub async fn run(self) -> DashboardResult<()> {
        let address = self.settings.socket_address();
        let router = self.build_router();

        let listener = TcpListener::bind(&address)
            .await
            .map_err(|e| DashboardError::ServerStartup(format!("Failed to bind to {}: {}", address, e)))?;

        component_info!(Component::Dashboard, "🌐 Dashboard API listening on http://{}", address);
        if let Some(dir) = &self.settings.static_dir {
            component_info!(Component::Dashboard, "📁 Serving front end from {}", dir.display());
        }

        let mut shutdown_rx = self.shutdown_rx;
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown_rx.recv().await;
            })
            .await?;

        logging::log_shutdown(Component::Dashboard, "HTTP server stopped");
        Ok(())
    }
}
