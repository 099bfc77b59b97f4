use shared::View;
use yew::prelude::*;

use crate::components::{NavLink, PageBackground};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

const NAV_VIEWS: [View; 6] = [
    View::Home,
    View::Deutsch,
    View::Puzzle,
    View::Tetris,
    View::SnakeAndLadder,
    View::TicTacToe,
];

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    html! {
        <>
            <nav class={styles::NAV}>
                <div class={styles::NAV_INNER}>
                    <div class={styles::NAV_CONTENT}>
                        <NavLink to={View::LandingPage} classes={classes!(styles::NAV_BRAND)}>
                            {shared::constants::APP_NAME}
                        </NavLink>
                        <div class={styles::NAV_ITEMS}>
                            { for NAV_VIEWS.iter().map(|view| html! {
                                <NavLink to={*view} classes={classes!(styles::NAV_LINK)}>
                                    {view.title()}
                                </NavLink>
                            }) }
                        </div>
                    </div>
                </div>
            </nav>
            <PageBackground>
                {props.children.clone()}
            </PageBackground>
        </>
    }
}
