use shared::View;
use yew::prelude::*;

use super::GameShell;

#[function_component(Puzzle)]
pub fn puzzle() -> Html {
    html! {
        <GameShell
            game={View::Puzzle}
            controls={vec![
                "Click a tile next to the gap to slide it.",
                "Restore the numbers from 1 to 15.",
            ]}
        />
    }
}
