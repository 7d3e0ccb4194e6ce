pub mod proxy_server;
