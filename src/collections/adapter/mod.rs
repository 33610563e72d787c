pub mod container_common;
pub mod queue;
pub mod stack;

pub use container_common::ContainerCommon;
pub use queue::{Queue, QueueAdt, QueueCursor};
pub use stack::{Stack, StackAdt, StackCursor};
