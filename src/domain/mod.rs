pub mod config;
pub mod error;
pub mod model;
pub mod store;

pub use config::NetPaths;
pub use error::{ApplyError, NetError};
pub use model::{ConnStatus, ConnectionRecord, IpConf, Proto, StaticConf};
pub use store::InterfacesStore;
