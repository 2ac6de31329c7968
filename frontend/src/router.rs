use crate::admin::AdminPage;
use crate::catalog::channel_page::ChannelPage;
use crate::catalog::watch::WatchPage;
use crate::catalog::HomePage;
use crate::context::AppContext;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/watch/:id")]
    Watch { id: String },
    #[at("/channel")]
    Channel,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Watch { id } => html! { <WatchPage id={id} /> },
        Route::Channel => html! { <ChannelPage /> },
        Route::Admin => html! { <AdminGate /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// The dashboard only exists for a signed-in admin.
#[function_component(AdminGate)]
fn admin_gate() -> Html {
    let ctx = use_context::<AppContext>().expect("AppContext is provided by App");

    if ctx.snapshot.settings.is_admin {
        html! { <AdminPage /> }
    } else {
        html! { <NotFound /> }
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="flex items-center justify-center py-20">
            <div class="bg-zinc-900 p-8 rounded-lg shadow-lg text-center">
                <h1 class="text-2xl font-bold mb-4">{"404 - Page Not Found"}</h1>
                <Link<Route> to={Route::Home} classes="text-blue-400 hover:underline">
                    {"Go back home"}
                </Link<Route>>
            </div>
        </div>
    }
}
