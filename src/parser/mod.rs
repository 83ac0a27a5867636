pub mod fd;
pub mod ind;

pub use fd::parse_fd;
pub use ind::parse_ind;
