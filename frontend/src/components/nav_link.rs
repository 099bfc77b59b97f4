use shared::View;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::history::{BrowserHistory, History};

use crate::config;
use crate::hooks::use_route_table;

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub to: View,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub children: Html,
}

fn is_plain_left_click(e: &MouseEvent) -> bool {
    e.button() == 0 && !(e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key())
}

/// Anchor to a view. Plain clicks push onto the browser history instead of reloading the page.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let table = use_route_table();
    let Some(href) = table.href(&config::base_path(), props.to) else {
        log::warn!("No route registered for view {}", props.to);
        return html! { <span class={props.classes.clone()}>{props.children.clone()}</span> };
    };

    let onclick = {
        let href = href.clone();
        Callback::from(move |e: MouseEvent| {
            if !is_plain_left_click(&e) {
                return;
            }
            e.prevent_default();
            BrowserHistory::new().push(href.clone());
        })
    };

    html! {
        <a href={href} class={props.classes.clone()} {onclick}>
            {props.children.clone()}
        </a>
    }
}
