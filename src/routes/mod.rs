// Route exports
pub mod oracle;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(oracle::index))
        .service(web::scope("/api/v1").configure(oracle::configure));
}
