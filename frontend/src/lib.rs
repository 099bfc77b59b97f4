pub mod base;
pub mod components;
pub mod config;
pub mod hooks;
pub mod navigator;
pub mod pages;
pub mod styles;

use std::rc::Rc;

use shared::{RouteTable, View};
use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::navigator::Navigator;
use crate::pages::{
    deutsch::Deutsch,
    games::{Puzzle, SnakeAndLadder, Tetris, TicTacToe},
    home::Home,
    landing::LandingPage,
};

#[function_component(App)]
pub fn app() -> Html {
    let table = use_memo((), |_| match RouteTable::app_routes() {
        Ok(table) => Rc::new(table),
        Err(err) => {
            log::error!("Route table rejected, every path will render not found: {}", err);
            Rc::new(RouteTable::default())
        }
    });

    html! {
        <ContextProvider<Rc<RouteTable>> context={(*table).clone()}>
            <BrowserRouter>
                <div class="min-h-screen w-full">
                    <div class="mx-auto">
                        <Navigator render={Callback::from(switch)} />
                    </div>
                </div>
            </BrowserRouter>
        </ContextProvider<Rc<RouteTable>>>
    }
}

pub fn switch(view: View) -> Html {
    match view {
        View::LandingPage => html! { <LandingPage /> },
        View::Home => html! { <Home /> },
        View::Deutsch => html! { <Deutsch /> },
        View::Puzzle => html! { <Puzzle /> },
        View::Tetris => html! { <Tetris /> },
        View::SnakeAndLadder => html! { <SnakeAndLadder /> },
        View::TicTacToe => html! { <TicTacToe /> },
    }
}
