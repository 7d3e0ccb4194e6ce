mod common;
mod proxy_routes;
