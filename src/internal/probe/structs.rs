pub mod resource_metadata;
