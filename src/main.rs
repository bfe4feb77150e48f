#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::Router;
    use axum_tracing_opentelemetry::middleware::{OtelAxumLayer, OtelInResponseLayer};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use opentelemetry_configuration::OtelSdkBuilder;
    use stratum_site::app::{shell, App};
    use stratum_site::config::Config;
    use tower_http::compression::CompressionLayer;

    let config = Config::load()?;

    let mut otel = OtelSdkBuilder::new()
        .service_name(env!("CARGO_PKG_NAME"))
        .service_version(env!("CARGO_PKG_VERSION"))
        .resource_attribute("deployment.environment.name", config.otel.environment.as_str())
        .resource_attribute("vcs.repository.name", env!("CARGO_PKG_NAME"))
        .resource_attribute("vcs.ref.head.revision", env!("VCS_REF_HEAD_REVISION"))
        .resource_attribute("vcs.ref.head.name", env!("VCS_REF_HEAD_NAME"))
        .resource_attribute("vcs.ref.head.type", "branch");
    if let Some(endpoint) = &config.otel.endpoint {
        otel = otel.endpoint(endpoint.as_str());
    }
    let _guard = otel
        .with_standard_env()
        .build()
        .expect("failed to initialise OpenTelemetry");

    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .layer(OtelInResponseLayer)
        .layer(OtelAxumLayer::default())
        .with_state(leptos_options);

    if let Some(socket_path) = config.socket {
        tracing::info!(socket = %socket_path, "listening on unix socket");
        let listener = tokio::net::UnixListener::bind(&socket_path)?;
        axum::serve(listener, app.into_make_service()).await?;
    } else {
        let addr: std::net::SocketAddr = config.listen.parse()?;
        tracing::info!(addr = %addr, "listening");
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
