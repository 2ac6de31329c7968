mod admin;
mod auth;
mod catalog;
mod config;
mod context;
mod env_variable_utils;
mod files;
mod layout;
mod logger;
mod login;
mod models;
mod router;
mod seed;
mod store;
mod sync;
mod utils;

use crate::config::{APP_NAME, DEBUG_MODE, STORE_NAME};
use crate::context::AppContext;
use crate::layout::{Header, Sidebar};
use crate::logger::init_logger;
use crate::login::LoginModal;
use crate::router::{switch, Route};
use crate::store::{LocalStore, WebStorage};
use crate::sync::Synchronizer;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let sync = use_memo((), |_| {
        Synchronizer::new(LocalStore::new(STORE_NAME.as_str(), WebStorage::new()))
    });
    let snapshot = use_state(|| sync.snapshot());
    let load_error = use_state(|| None::<String>);
    let sidebar_open = use_state(|| true);
    let login_open = use_state(|| false);

    let refresh = {
        let sync = sync.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |_: ()| snapshot.set(sync.snapshot()))
    };

    // Effect for initial load
    {
        let sync = sync.clone();
        let refresh = refresh.clone();
        let load_error = load_error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = sync.load_initial().await {
                    log::error!("Initial load failed: {}", e);
                    load_error.set(Some(format!("Could not load saved content: {}", e)));
                }
                refresh.emit(());
            });
        });
    }

    let on_toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(!*sidebar_open))
    };

    let open_login = {
        let login_open = login_open.clone();
        Callback::from(move |_: ()| login_open.set(true))
    };

    let on_close_login = {
        let login_open = login_open.clone();
        Callback::from(move |_: ()| login_open.set(false))
    };

    let theme = snapshot.settings.theme;
    let context = AppContext {
        snapshot: (*snapshot).clone(),
        sync: sync.clone(),
        refresh,
        load_error: (*load_error).clone(),
        open_login,
    };

    html! {
        <HashRouter>
            <ContextProvider<AppContext> context={context}>
                <div class={classes!("flex", "flex-col", "h-screen", "overflow-hidden", theme.page_classes())}>
                    <Header on_toggle_sidebar={on_toggle_sidebar} />

                    <div class="flex flex-1 overflow-hidden">
                        <Sidebar is_open={*sidebar_open} />

                        <main class="flex-1 overflow-y-auto pt-4">
                            {
                                if let Some(msg) = &*load_error {
                                    html! {
                                        <div class="mx-4 mb-4 bg-red-900/40 border border-red-700 text-red-200 px-4 py-3 rounded">
                                            { msg.clone() }
                                        </div>
                                    }
                                } else if !sync.is_ready() {
                                    html! { <p class="px-4 text-zinc-500">{"Loading..."}</p> }
                                } else {
                                    html! {}
                                }
                            }
                            <Switch<Route> render={switch} />
                        </main>
                    </div>

                    {
                        if *login_open {
                            html! { <LoginModal on_close={on_close_login} /> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </ContextProvider<AppContext>>
        </HashRouter>
    }
}

fn main() {
    init_logger(*DEBUG_MODE);
    log::info!(
        "NAME: \"{}\", STORE: \"{}\" DEBUG: \"{}\"",
        *APP_NAME,
        *STORE_NAME,
        *DEBUG_MODE
    );

    yew::Renderer::<App>::new().render();
}
