pub mod aggregation_service;
pub mod analytics_service;
pub mod chart_service;
pub mod date_parser;
pub mod ledger_service;
pub mod suggestion_service;
