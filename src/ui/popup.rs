/// Popup UI for the cookie menu

use crate::bridge::BrowserHost;
use crate::controller::{Action, PopupController, PopupState, PopupView};
use crate::i18n::Label;
use crate::ui::components::Shortcut;
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// What one menu line shows
#[derive(Debug, Clone, PartialEq)]
struct MenuItem {
    action: Action,
    label: Label,
    icon: Option<String>,
    detail: Option<String>,
    count: Option<usize>,
}

impl MenuItem {
    fn plain(action: Action, label: Label) -> MenuItem {
        MenuItem {
            action,
            label,
            icon: None,
            detail: None,
            count: None,
        }
    }

    fn counted(action: Action, label: Label, count: usize) -> MenuItem {
        MenuItem {
            count: Some(count),
            ..MenuItem::plain(action, label)
        }
    }
}

/// Menu lines in display order
fn shortcuts(view: &PopupView) -> Vec<MenuItem> {
    let mut items = vec![
        MenuItem {
            icon: Some(view.favicon.clone()),
            detail: Some(view.hostname.clone()),
            ..MenuItem::plain(Action::SearchDomain, Label::SearchCookieManager)
        },
        MenuItem::plain(Action::OpenManager, Label::SimpleCookieManager),
        MenuItem::counted(Action::DeleteDomainCookies, Label::DeleteCurrentCookies, view.domain_cookies),
        MenuItem::counted(Action::DeleteContainerCookies, Label::DeleteContextCookies, view.container_cookies),
    ];

    if let Some(items_count) = view.local_storage_items {
        items.push(MenuItem::counted(
            Action::DeleteLocalStorage,
            Label::DeleteCurrentLocalStorage,
            items_count as usize,
        ));
    }

    items.push(MenuItem::plain(Action::OpenOptions, Label::Options));
    items
}

#[function_component(App)]
pub fn app() -> Html {
    let controller = use_memo((), |_| PopupController::new(BrowserHost));
    let state = use_state(|| PopupState::Loading);

    // Load tab, counts and labels on mount
    {
        let controller = controller.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match controller.initialize().await {
                    Ok(view) => state.set(PopupState::Ready(view)),
                    Err(e) => {
                        log::error!("init_ui: {}", e);
                        state.set(PopupState::Failed(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let on_action = {
        let controller = controller.clone();
        let state = state.clone();
        Callback::from(move |action: Action| {
            let controller = controller.clone();
            let state = state.clone();
            spawn_local(async move {
                match controller.dispatch(action).await {
                    Ok(_) => state.set(PopupState::Closed),
                    Err(e) => {
                        log::error!("{:?} failed: {}", action, e);
                        state.set(PopupState::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="popup-menu">
            {match &*state {
                PopupState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                PopupState::Ready(view) => html! {
                    <div class="menu-items">
                        {for shortcuts(view).into_iter().map(|item| html! {
                            <Shortcut
                                action={item.action}
                                label={view.labels.get(item.label).to_string()}
                                onclick={on_action.clone()}
                                icon={item.icon.map(AttrValue::from)}
                                detail={item.detail.map(AttrValue::from)}
                                count={item.count}
                            />
                        })}
                    </div>
                },
                PopupState::Failed(err) => html! {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {err.clone()}
                    </Alert>
                },
                PopupState::Closed => html! {},
            }}
        </div>
    }
}
