use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::{HttpResponse, web};

use crate::config::SiteConfig;

/// Static assets, the SPA bundle, and an `index.html` fallback so client
/// routes survive a reload.
pub fn configure(cfg: &mut web::ServiceConfig, site: &SiteConfig) {
    let index = site.index_file();

    cfg.service(Files::new("/assets", &site.assets_dir))
        .service(
            Files::new("/", &site.dist_dir)
                .index_file("index.html")
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        let res = match NamedFile::open_async(&index).await {
                            Ok(file) => file.into_response(&req),
                            Err(e) => {
                                log::error!("cannot open {}: {e}", index.display());
                                HttpResponse::from_error(e)
                            }
                        };
                        Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
                    }
                })),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use std::fs;
    use std::path::PathBuf;

    fn fixture(name: &str) -> SiteConfig {
        let root = std::env::temp_dir().join(format!("site-{name}-{}", std::process::id()));
        let dist = root.join("dist");
        let assets = root.join("assets");
        fs::create_dir_all(&dist).unwrap();
        fs::create_dir_all(&assets).unwrap();
        fs::write(dist.join("index.html"), "<html>menu shell</html>").unwrap();
        fs::write(assets.join("logo.txt"), "logo").unwrap();

        SiteConfig {
            host: "127.0.0.1".to_owned(),
            port: 0,
            dist_dir: dist,
            assets_dir: assets,
        }
    }

    #[actix_web::test]
    async fn serves_index_at_root() {
        let site = fixture("root");
        let app = test::init_service(App::new().configure(|c| configure(c, &site))).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "<html>menu shell</html>");
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let site = fixture("fallback");
        let app = test::init_service(App::new().configure(|c| configure(c, &site))).await;

        let req = test::TestRequest::get().uri("/about/team").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        assert_eq!(body, "<html>menu shell</html>");
    }

    #[actix_web::test]
    async fn assets_are_served_from_their_own_dir() {
        let site = fixture("assets");
        let app = test::init_service(App::new().configure(|c| configure(c, &site))).await;

        let req = test::TestRequest::get().uri("/assets/logo.txt").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "logo");
    }

    #[actix_web::test]
    async fn missing_bundle_is_an_error_not_a_panic() {
        let mut site = fixture("missing");
        site.dist_dir = PathBuf::from("/nonexistent/dist");
        let app = test::init_service(App::new().configure(|c| configure(c, &site))).await;

        let req = test::TestRequest::get().uri("/anything").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
