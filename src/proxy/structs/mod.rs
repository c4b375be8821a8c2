pub mod proxy_response;
