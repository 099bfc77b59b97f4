use shared::View;
use yew::prelude::*;

use crate::base::Base;
use crate::components::NavLink;
use crate::styles;

#[function_component(Deutsch)]
pub fn deutsch() -> Html {
    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <div class={classes!(styles::CARD, "space-y-4")}>
                    <h1 class={styles::TEXT_H1}>{"Willkommen!"}</h1>
                    <p class={styles::TEXT_BODY}>
                        {"Hier findest du ein paar kleine Spiele für den Browser: ein Puzzle, \
                          Tetris, Leiterspiel und Tic-Tac-Toe."}
                    </p>
                    <NavLink to={View::Home} classes={classes!(styles::BUTTON_PRIMARY)}>
                        {"Zu den Spielen"}
                    </NavLink>
                </div>
            </div>
        </Base>
    }
}
