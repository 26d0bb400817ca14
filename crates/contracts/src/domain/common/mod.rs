pub mod serde_lenient;

pub use serde_lenient::null_as_default;
