pub mod proxy_request_dto;
