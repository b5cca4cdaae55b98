pub mod frame;
pub mod gps;
pub mod header;
pub mod session;

pub use frame::*;
pub use gps::*;
pub use header::*;
pub use session::*;
