pub mod group_dto;
