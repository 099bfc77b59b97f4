use std::rc::Rc;

use shared::RouteTable;
use yew::prelude::*;

/// The route table provided by `App`. Outside the provider every path is unmatched.
#[hook]
pub fn use_route_table() -> Rc<RouteTable> {
    let table = use_context::<Rc<RouteTable>>();
    match table {
        Some(table) => table,
        None => {
            log::warn!("No route table in context, nothing will resolve");
            Rc::new(RouteTable::default())
        }
    }
}
