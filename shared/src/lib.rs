pub mod constants;
pub mod error;
pub mod routes;
pub mod validation;
pub mod view;

pub use error::RouteError;
pub use routes::{normalize_base, strip_base, Route, RouteTable};
pub use view::View;
