pub mod allocation_status;
pub mod platform;

pub use allocation_status::AllocationStatus;
pub use platform::Platform;
