mod static_database;

pub use static_database::StaticGeoDatabase;
