pub mod use_route_table;

pub use use_route_table::*;
