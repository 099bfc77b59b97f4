use shared::View;
use yew::prelude::*;

use crate::base::Base;
use crate::components::NavLink;
use crate::styles;

pub const NOT_FOUND_TITLE: &str = "Page not found";

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub path: AttrValue,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <div class={classes!(styles::CARD, "space-y-4", "text-center")}>
                    <h1 class={styles::TEXT_H1}>{NOT_FOUND_TITLE}</h1>
                    <p class={styles::TEXT_BODY}>
                        {"Nothing lives at "}
                        <code class={styles::CODE}>{props.path.clone()}</code>
                        {". Paths are case-sensitive, so check the spelling."}
                    </p>
                    <NavLink to={View::Home} classes={classes!(styles::BUTTON_PRIMARY)}>
                        {"Back to the games"}
                    </NavLink>
                </div>
            </div>
        </Base>
    }
}
