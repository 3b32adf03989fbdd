mod config;
mod server;

use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;
use env_logger::Env;

use crate::config::SiteConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let site = SiteConfig::from_env()?;
    log::info!(
        "serving {} (assets {}) on http://{}:{}",
        site.dist_dir.display(),
        site.assets_dir.display(),
        site.host,
        site.port
    );

    let bind = (site.host.clone(), site.port);
    HttpServer::new(move || {
        let site = site.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| server::configure(cfg, &site))
    })
    .bind(bind.clone())
    .with_context(|| format!("failed to bind {}:{}", bind.0, bind.1))?
    .run()
    .await?;

    Ok(())
}
