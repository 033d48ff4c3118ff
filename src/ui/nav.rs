/// Navigation list rendered into the page's nav container

use crate::navigation::NavLink;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavListProps {
    pub links: Vec<NavLink>,
}

#[function_component(NavList)]
pub fn nav_list(props: &NavListProps) -> Html {
    html! {
        <>
            {for props.links.iter().map(|link| {
                let target_id = link.target_id.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    scroll_to_section(&target_id);
                });

                html! {
                    <li key={link.target_id.clone()}>
                        <a href={link.href.clone()} {onclick}>{&link.title}</a>
                    </li>
                }
            })}
        </>
    }
}

pub fn scroll_to_section(id: &str) {
    let Some(target) = gloo::utils::document().get_element_by_id(id) else {
        log::warn!("Navigation target #{} not found", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
