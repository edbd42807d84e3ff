mod app;
mod upstream;

pub use app::AppConfig;
pub use upstream::UpstreamConfig;
