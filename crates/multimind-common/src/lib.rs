pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, MultimindError, PlatformError, StoreError, SurfaceError};
pub use events::{EventBus, Notification, Subscriptions, Topic};
pub use types::{Rect, ServiceDescriptor, Size};

pub type Result<T> = std::result::Result<T, MultimindError>;
