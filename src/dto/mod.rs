pub mod api_response;
pub mod dashboard_dto;
pub mod parking_form_dto;
pub mod vehicle_dto;
