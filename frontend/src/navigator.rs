use shared::constants::{APP_NAME, ROOT_PATH, TITLE_SEPARATOR};
use shared::{RouteError, RouteTable, View};
use yew::prelude::*;
use yew_router::hooks::use_location;

use crate::config;
use crate::hooks::use_route_table;
use crate::pages::not_found::{NotFound, NOT_FOUND_TITLE};

#[derive(Properties, PartialEq)]
pub struct NavigatorProps {
    /// Rendering host for a resolved view.
    pub render: Callback<View, Html>,
}

fn set_document_title(page_title: &str) {
    gloo::utils::document().set_title(&format!("{}{}{}", page_title, TITLE_SEPARATOR, APP_NAME));
}

/// `pathname` is `None` when there is no router above the navigator. That is a
/// mounting mistake, so it resolves to nothing instead of the landing page.
pub fn resolve_current(table: &RouteTable, base: &str, pathname: Option<&str>) -> Result<View, RouteError> {
    match pathname {
        Some(pathname) => table.resolve_location(base, pathname),
        None => {
            log::warn!("Navigator has no location, it must be mounted under a BrowserRouter");
            Err(RouteError::UnmatchedPath(ROOT_PATH.to_string()))
        }
    }
}

/// Resolves the current browser path against the route table on every history change.
///
/// Must be mounted under a `BrowserRouter`. Unmatched paths render the not-found page.
#[function_component(Navigator)]
pub fn navigator(props: &NavigatorProps) -> Html {
    let table = use_route_table();
    let location = use_location();
    let base = config::base_path();

    let resolved = resolve_current(&table, &base, location.as_ref().map(|location| location.path()));

    use_effect_with(resolved.clone(), |resolved| {
        match resolved {
            Ok(view) => {
                log::debug!("Navigated to {}", view);
                set_document_title(view.title());
            }
            Err(err) => {
                log::warn!("{}", err);
                set_document_title(NOT_FOUND_TITLE);
            }
        }
        || ()
    });

    match resolved {
        Ok(view) => props.render.emit(view),
        Err(err) => html! { <NotFound path={err.path().to_string()} /> },
    }
}
