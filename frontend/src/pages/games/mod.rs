mod puzzle;
mod snake_and_ladder;
mod tetris;
mod tic_tac_toe;

pub use puzzle::Puzzle;
pub use snake_and_ladder::SnakeAndLadder;
pub use tetris::Tetris;
pub use tic_tac_toe::TicTacToe;

use shared::View;
use yew::prelude::*;

use crate::base::Base;
use crate::components::NavLink;
use crate::styles;

/// Short description shown on the home page cards.
pub fn blurb(game: View) -> &'static str {
    match game {
        View::Puzzle => "Slide the tiles back into order.",
        View::Tetris => "Stack falling blocks and clear lines.",
        View::SnakeAndLadder => "Roll the dice, climb ladders, dodge snakes.",
        View::TicTacToe => "Three in a row wins.",
        _ => "",
    }
}

#[derive(Properties, PartialEq)]
pub struct GameShellProps {
    pub game: View,
    /// How to play, one entry per line.
    #[prop_or_default]
    pub controls: Vec<&'static str>,
    #[prop_or_default]
    pub children: Html,
}

/// Common frame for a game page: title, controls and the board the game mounts into.
#[function_component(GameShell)]
pub fn game_shell(props: &GameShellProps) -> Html {
    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <div class="space-y-6">
                    <div class="flex items-center justify-between">
                        <div>
                            <h1 class={styles::TEXT_H1}>{props.game.title()}</h1>
                            <p class={classes!(styles::TEXT_BODY, "mt-1")}>{blurb(props.game)}</p>
                        </div>
                        <NavLink to={View::Home} classes={classes!(styles::BUTTON_SECONDARY)}>
                            {"All games"}
                        </NavLink>
                    </div>
                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                        <div
                            id={format!("board-{}", props.game.name())}
                            class={classes!(styles::CARD, "lg:col-span-2", "min-h-[24rem]")}
                        >
                            {props.children.clone()}
                        </div>
                        if !props.controls.is_empty() {
                            <div class={styles::CARD}>
                                <h2 class={styles::TEXT_H2}>{"How to play"}</h2>
                                <ul class={classes!(styles::TEXT_BODY, "mt-4", "space-y-2", "list-disc", "list-inside")}>
                                    { for props.controls.iter().map(|line| html! { <li>{*line}</li> }) }
                                </ul>
                            </div>
                        }
                    </div>
                </div>
            </div>
        </Base>
    }
}
