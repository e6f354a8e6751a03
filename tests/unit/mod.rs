pub mod schema_properties;
pub mod schema_proptests;
