/// Reusable UI components

use crate::controller::Action;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShortcutProps {
    pub action: Action,
    pub label: AttrValue,
    pub onclick: Callback<Action>,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    /// Extra text after the label, e.g. the hostname
    #[prop_or_default]
    pub detail: Option<AttrValue>,
    #[prop_or_default]
    pub count: Option<usize>,
}

/// One clickable line of the popup menu
///
/// Icon, label, detail and count are separate nodes so the label can be
/// translated without touching the others.
#[function_component(Shortcut)]
pub fn shortcut(props: &ShortcutProps) -> Html {
    let onclick = {
        let action = props.action;
        let callback = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            callback.emit(action);
        })
    };

    html! {
        <a id={props.action.element_id()} class="menu-item" href="#" {onclick}>
            if let Some(icon) = &props.icon {
                <img class="favicon" src={icon.clone()} />
            }
            <span class="menu-label">{props.label.clone()}</span>
            if let Some(detail) = &props.detail {
                <span class="menu-detail">{detail.clone()}</span>
            }
            if let Some(count) = props.count {
                <span class="menu-count">{format!(" ({})", count)}</span>
            }
        </a>
    }
}
