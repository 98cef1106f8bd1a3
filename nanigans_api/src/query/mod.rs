mod params;
pub use self::params::QueryParams;

mod request;
pub use self::request::{Operation, PreparedRequest, RequiredFields};
