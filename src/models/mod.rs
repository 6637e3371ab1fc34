pub mod user;
pub mod event;
pub mod contribution;
pub mod analysis;
pub mod serde_helpers;

pub use user::*;
pub use event::*;
pub use contribution::*;
pub use analysis::*;
