// Route exports
pub mod search;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(search::index))
        .service(
            web::scope("/api/v1")
                .configure(search::configure),
        );
}
