#[cfg(feature = "collections_adapter")]
pub mod adapter;
#[cfg(feature = "collections_adapter")]
pub use adapter::{ContainerCommon, Queue, QueueAdt, Stack, StackAdt};

pub mod array_list;
pub mod linked;
pub mod list;

pub use array_list::ArrayList;
pub use linked::DoublyLinkedList;
pub use list::{ContractIterator, List};
