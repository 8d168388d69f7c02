pub mod config_service;
pub mod dto;
pub mod json_selection_repository;
pub mod logging;
pub mod paths;
pub mod storage;

pub use config_service::ConfigService;
pub use json_selection_repository::JsonSelectionRepository;
pub use paths::NightrollPaths;
