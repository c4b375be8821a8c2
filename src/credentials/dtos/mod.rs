pub mod save_credential_dto;
