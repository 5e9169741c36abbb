// gatesync-api: typed async clients for the API Gateway control plane and S3

pub mod client;
pub mod error;
pub mod ops;
pub mod storage;
pub mod transport;
pub mod types;

pub use client::RestApiClient;
pub use error::ApiError;
pub use ops::{ControlPlane, ObjectStore};
pub use storage::S3ObjectClient;
pub use transport::TransportConfig;
