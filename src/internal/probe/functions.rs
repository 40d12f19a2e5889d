pub mod probe_metadata;
