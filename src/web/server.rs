use actix_files::Files;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App as ActixApp, HttpServer, web};
use leptos::config::{LeptosOptions, get_configuration};
use leptos_actix::{LeptosRoutes, generate_route_list, render_app_to_stream};
use leptos_router::Method;

use crate::common::SiteError;
use crate::frontend::{App, shell};
use crate::web::SecurityHeaders;

/// Actix application serving the bundle, the icons and every page route.
/// Unknown paths are still rendered by the app so its 404 page answers them.
pub fn site_app(
    leptos_options: LeptosOptions,
) -> ActixApp<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let routes = generate_route_list(App);
    let site_root = leptos_options.site_root.to_string();

    ActixApp::new()
        .service(Files::new("/pkg", format!("{site_root}/pkg")))
        .service(Files::new("/img", format!("{site_root}/img")))
        .leptos_routes(routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .default_service(render_app_to_stream(
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
            Method::Get,
        ))
        .app_data(web::Data::new(leptos_options))
        .wrap(SecurityHeaders)
}

/// Serve the site with server-side rendering until the server stops.
///
/// Address and site root come from `[package.metadata.leptos]`, overridable
/// through `LEPTOS_*` environment variables.
pub async fn serve() -> Result<(), SiteError> {
    let conf = get_configuration(None).map_err(|e| SiteError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let site_root = conf.leptos_options.site_root.to_string();

    tracing::info!(%addr, %site_root, "starting HudBox site server");

    HttpServer::new(move || site_app(conf.leptos_options.clone()))
        .bind(&addr)?
        .run()
        .await?;

    tracing::info!("server stopped");
    Ok(())
}
