pub mod create_flyer_dto;
