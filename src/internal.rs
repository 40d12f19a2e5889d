pub mod entrance;
pub mod fetch;
pub mod http;
pub mod probe;
pub mod resolve;
pub mod states;
