pub mod persistence_provider;
