use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageBackgroundProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(PageBackground)]
pub fn page_background(props: &PageBackgroundProps) -> Html {
    html! {
        <div class="relative min-h-screen">
            <div class="fixed inset-0 bg-gradient-to-b from-white to-blue-50 dark:from-gray-950 dark:to-gray-900 -z-50"></div>
            <div class="relative z-0 pt-16">
                {props.children.clone()}
            </div>
        </div>
    }
}
