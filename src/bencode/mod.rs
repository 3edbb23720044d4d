pub mod decode;
pub mod encode;
pub mod error;
pub mod value;

pub use decode::decode;
pub use encode::encode;
pub use error::DecodeError;
pub use value::{Kind, Span, Value};
