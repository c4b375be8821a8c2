use std::{env, net::SocketAddr, sync::Arc, time::Duration};

#[macro_use]
extern crate lazy_static;

use axum::{
    error_handling::HandleErrorLayer,
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    routing::{delete, get, post, put},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    app::{envy::Envy, errors::DefaultApiError},
    credentials::service::CredentialStore,
    flyers::compositing::fonts::FontLibrary,
};

mod app;
mod credentials;
mod flyers;
mod proxy;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub credentials: CredentialStore,
    pub fonts: FontLibrary,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::POST, Method::GET, Method::PUT, Method::DELETE]);

    let envy = Arc::new(envy);

    let credentials = CredentialStore::load(&envy);
    credentials
        .subscribe(Arc::new(|token| match token {
            Some(_) => tracing::info!("replicate token configured"),
            None => tracing::info!("replicate token removed"),
        }))
        .await;

    let fonts = FontLibrary::new(&envy);

    let state = AppState {
        envy,
        credentials,
        fonts,
    };

    // app
    let app = Router::new()
        .route("/", get(app::controller::get_root))
        // credentials
        .route(
            "/credentials",
            get(credentials::controller::get_credential_status),
        )
        .route(
            "/credentials",
            put(credentials::controller::save_credential),
        )
        .route(
            "/credentials",
            delete(credentials::controller::delete_credential),
        )
        // replicate proxy
        .route("/replicate", post(proxy::controller::forward))
        // flyers
        .route("/flyers/generate", post(flyers::controller::generate_flyer))
        // layers
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|_err: BoxError| async move {
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(5, Duration::from_secs(1))),
        )
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
