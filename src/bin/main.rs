// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - A shared OMDb client configured from the environment
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use leptos_meta::MetaTags;
    use movie_zone::web_app::api::omdb::{self, OmdbClient};
    use movie_zone::web_app::app::App as WebApp;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    // The credential comes from the environment, never from source
    let client = OmdbClient::from_env().unwrap_or_else(|e| {
        panic!("OMDb client configuration failed: {e}");
    });
    tracing::info!("OMDb endpoint: {}", client.base_url());

    // Initialize global client for server functions
    omdb::init_client(client);

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).expect("could not read configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();

        App::new()
            // Explicitly handle server functions
            .route("/api/{tail:.*}", handle_server_fns())
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with proper shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            // Static assets (fallback poster lives here); registered after
            // the leptos routes so it only catches real files
            .service(Files::new("/", site_root_str.clone()))
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
