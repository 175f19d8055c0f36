use crate::error::FlowError;

pub type FlowResult<T> = Result<T, FlowError>;
