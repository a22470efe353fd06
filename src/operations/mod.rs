pub mod approximate;
pub mod query;
