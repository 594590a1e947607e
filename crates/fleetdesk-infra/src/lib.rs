//! Infrastructure layer - remote API access

pub mod http_gateway;

pub use http_gateway::HttpTruckGateway;
