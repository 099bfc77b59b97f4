use shared::View;
use yew::prelude::*;

use super::GameShell;

#[function_component(TicTacToe)]
pub fn tic_tac_toe() -> Html {
    html! {
        <GameShell
            game={View::TicTacToe}
            controls={vec![
                "Players take turns placing X and O.",
                "Three marks in a row, column or diagonal win.",
            ]}
        />
    }
}
