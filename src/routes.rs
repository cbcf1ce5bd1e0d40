use crate::{
    api::{attendance, employee},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    cfg.service(
        web::resource("/get_all_employees").route(web::get().to(employee::get_all_employees)),
    )
    // The drafting route burns generation-service tokens per employee;
    // keep its limit tighter than the execute route.
    .service(
        web::resource("/generate_attendance_sql")
            .wrap(build_limiter(config.rate_generate_per_min))
            .route(web::post().to(attendance::generate_attendance_sql)),
    )
    .service(
        web::resource("/execute_generated_sql")
            .wrap(build_limiter(config.rate_execute_per_min))
            .route(web::post().to(attendance::execute_generated_sql)),
    );
}
