pub mod session;

pub use session::TouchSession;
