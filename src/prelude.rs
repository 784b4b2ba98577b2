pub use crate::base::{
    config::Config,
    types::{IncomingMessage, Res, RoleLevel, Void},
};
pub use crate::{runtime::Runtime, session::Session};
pub use anyhow::anyhow;
pub use tracing::{debug, error, info, instrument, warn};
