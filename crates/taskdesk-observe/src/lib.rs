mod logger;
pub use logger::*;
