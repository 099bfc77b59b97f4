use shared::View;
use yew::prelude::*;

use super::GameShell;

#[function_component(Tetris)]
pub fn tetris() -> Html {
    html! {
        <GameShell
            game={View::Tetris}
            controls={vec![
                "Left and right arrows move the piece.",
                "Up arrow rotates, down arrow drops faster.",
                "A full row disappears.",
            ]}
        />
    }
}
