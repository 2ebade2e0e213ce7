pub mod mock;
pub mod scripted;

pub use mock::MockMotionSource;
pub use scripted::ScriptedSource;
