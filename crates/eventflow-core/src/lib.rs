pub mod config;
pub mod error;
pub mod form;
pub mod result;
pub mod select;

pub use config::AppConfig;
pub use error::FlowError;
pub use form::{DialogForm, FieldInput};
pub use result::FlowResult;
pub use select::MultiSelect;
