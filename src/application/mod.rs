pub mod dispatcher;
pub mod runtime;
