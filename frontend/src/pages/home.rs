use shared::View;
use yew::prelude::*;

use crate::base::Base;
use crate::components::NavLink;
use crate::pages::games::blurb;
use crate::styles;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <div class="space-y-8">
                    <div>
                        <h1 class={styles::TEXT_H1}>{"Choose a game"}</h1>
                        <p class={classes!(styles::TEXT_BODY, "mt-2")}>
                            {"Every game runs right here in your browser."}
                        </p>
                    </div>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                        { for View::GAMES.iter().map(|game| html! {
                            <NavLink to={*game} classes={classes!(styles::CARD_HOVER)}>
                                <h3 class={styles::TEXT_H3}>{game.title()}</h3>
                                <p class={classes!(styles::TEXT_SMALL, "mt-2")}>{blurb(*game)}</p>
                            </NavLink>
                        }) }
                    </div>
                </div>
            </div>
        </Base>
    }
}
