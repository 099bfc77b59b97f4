use shared::View;
use yew::prelude::*;

use crate::components::{NavLink, PageBackground};
use crate::styles;

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    html! {
        <PageBackground>
            <div class="min-h-screen flex flex-col items-center justify-center text-center px-4 -mt-16 space-y-6">
                <h1 class="text-5xl font-extrabold text-gray-900 dark:text-white">
                    {shared::constants::APP_NAME}
                </h1>
                <p class={classes!(styles::TEXT_BODY, "max-w-xl")}>
                    {"A handful of small browser games. Pick one and play, no account needed."}
                </p>
                <div class="flex space-x-4">
                    <NavLink to={View::Home} classes={classes!(styles::BUTTON_PRIMARY)}>
                        {"Let's go"}
                    </NavLink>
                    <NavLink to={View::Deutsch} classes={classes!(styles::BUTTON_SECONDARY)}>
                        {"Auf Deutsch"}
                    </NavLink>
                </div>
            </div>
        </PageBackground>
    }
}
