mod payload;
pub use self::payload::Payload;

mod response;
pub use self::response::{Record, Response, ResponseError};
