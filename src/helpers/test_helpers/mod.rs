use super::*;

mod call_log;
mod mock_filesystem;
mod mock_host_object;
mod mock_receiver;

pub use call_log::*;
pub use mock_filesystem::*;
pub use mock_host_object::*;
pub use mock_receiver::*;
