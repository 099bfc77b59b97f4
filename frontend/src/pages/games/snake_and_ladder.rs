use shared::View;
use yew::prelude::*;

use super::GameShell;

#[function_component(SnakeAndLadder)]
pub fn snake_and_ladder() -> Html {
    html! {
        <GameShell
            game={View::SnakeAndLadder}
            controls={vec![
                "Roll the dice and move that many squares.",
                "A ladder carries you up, a snake drags you down.",
                "First to square 100 wins.",
            ]}
        />
    }
}
