pub mod query;
pub mod suggest;
