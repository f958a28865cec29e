use actix_cors::Cors;

/// CORS policy admitting the configured frontend origin only.
pub fn cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
