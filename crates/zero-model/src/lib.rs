pub mod datamodel;
pub mod relation;
pub mod schema;
pub mod table;
