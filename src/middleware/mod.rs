mod core;
mod cors;

pub use self::core::Middleware;
pub use self::cors::CorsMiddleware;
