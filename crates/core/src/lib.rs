pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod session;
pub mod validation;

pub use catalog::Catalog;
pub use config::{
    AppConfig, ConfigError, ConfigOverrides, DisplayConfig, LoadOptions, LogFormat, LoggingConfig,
};
pub use domain::cart::{Cart, LineItem};
pub use domain::product::{Product, ProductId};
pub use errors::DomainError;
pub use session::{Session, SessionPhase, SubmitOutcome};
pub use validation::{
    count_is_positive, parse_count, validate_submission, Field, FieldError, ValidationResult,
};
