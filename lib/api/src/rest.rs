use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use altvendor_core::lookup;
use altvendor_storage::DatasetStore;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Deserialize)]
struct VendorQuery {
    #[serde(default)]
    q: String,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        store: Arc<DatasetStore>,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            App::new()
                .wrap(Self::cors())
                .app_data(web::Data::new(store.clone()))
                .configure(Self::configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    /// Register the API routes. Handlers expect `web::Data<Arc<DatasetStore>>`.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.route("/alternate-vendors", web::get().to(alternate_vendors))
            .route("/health", web::get().to(health))
            .route("/dataset/reload", web::post().to(reload_dataset));
    }

    /// Allow any origin, method and header
    pub fn cors() -> Cors {
        Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600)
    }
}

async fn alternate_vendors(
    store: web::Data<Arc<DatasetStore>>,
    query: web::Query<VendorQuery>,
) -> ActixResult<HttpResponse> {
    let dataset = store.snapshot();
    let response = lookup(&query.q, &dataset);
    Ok(HttpResponse::Ok().json(response))
}

async fn health(
    store: web::Data<Arc<DatasetStore>>,
) -> ActixResult<HttpResponse> {
    let stats = store.stats();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "queries": stats.queries,
        "vendors": stats.vendors,
        "loaded_at": stats.loaded_at.to_rfc3339(),
        "source": stats.source.map(|p| p.display().to_string()),
    })))
}

async fn reload_dataset(
    store: web::Data<Arc<DatasetStore>>,
) -> ActixResult<HttpResponse> {
    match store.reload() {
        Ok(queries) => {
            info!(queries, "dataset reloaded on request");
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "result": true,
                "queries": queries,
            })))
        }
        Err(e) => {
            error!("dataset reload failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
    }
}
