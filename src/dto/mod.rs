pub mod agent_dto;
pub mod analytics_dto;
pub mod auth_dto;
pub mod customer_dto;
pub mod damage_report_dto;
pub mod invoice_dto;
pub mod rate_plan_dto;
pub mod reservation_dto;
pub mod settings_dto;
pub mod vehicle_dto;
