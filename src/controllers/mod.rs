pub mod dashboard_controller;
pub mod parking_form_controller;
