use crate::config::APP_NAME;
use crate::context::AppContext;
use crate::models::Theme;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_toggle_sidebar: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let ctx = use_context::<AppContext>().expect("AppContext is provided by App");
    let navigator = use_navigator();

    let on_open_login = {
        let open_login = ctx.open_login.clone();
        Callback::from(move |_: MouseEvent| open_login.emit(()))
    };

    let on_logout = {
        let sync = ctx.sync.clone();
        let refresh = ctx.refresh.clone();
        Callback::from(move |_: MouseEvent| {
            sync.sign_out();
            refresh.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let on_toggle_theme = {
        let sync = ctx.sync.clone();
        let refresh = ctx.refresh.clone();
        Callback::from(move |_: MouseEvent| {
            sync.toggle_theme();
            refresh.emit(());
        })
    };

    let theme_icon = match ctx.snapshot.settings.theme {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    };

    html! {
        <header class={classes!("sticky", "top-0", "z-50", "flex", "items-center", "justify-between", "px-4", "py-2", ctx.snapshot.settings.theme.page_classes())}>
            <div class="flex items-center gap-4">
                <button onclick={props.on_toggle_sidebar.clone()} class="p-2 hover:bg-zinc-800 rounded-full">
                    {"☰"}
                </button>
                <Link<Route> to={Route::Home} classes="flex items-center gap-1">
                    <span class="text-xl font-bold tracking-tighter">{ APP_NAME.as_str() }</span>
                </Link<Route>>
            </div>

            <div class="flex-1 max-w-[720px] px-8 hidden md:flex">
                <input
                    type="text"
                    placeholder="Search"
                    class="w-full bg-[#121212] border border-zinc-700 rounded-full py-2 px-5 focus:outline-none focus:border-blue-500"
                />
            </div>

            <div class="flex items-center gap-2">
                <button onclick={on_toggle_theme} class="p-2 hover:bg-zinc-800 rounded-full" title="Toggle theme">
                    { theme_icon }
                </button>
                {
                    if ctx.snapshot.settings.is_admin {
                        html! {
                            <>
                                <Link<Route> to={Route::Admin} classes="px-3 py-1.5 hover:bg-zinc-800 rounded-full text-sm">
                                    {"Dashboard"}
                                </Link<Route>>
                                <Link<Route> to={Route::Channel} classes="w-8 h-8 rounded-full overflow-hidden border border-zinc-700 ml-2">
                                    <img src={ctx.snapshot.channel.avatar.clone()} class="w-full h-full object-cover" alt="Avatar" />
                                </Link<Route>>
                                <button
                                    onclick={on_logout}
                                    class="px-4 py-1.5 bg-zinc-800 hover:bg-zinc-700 rounded-full text-sm font-medium ml-2"
                                >
                                    {"Logout"}
                                </button>
                            </>
                        }
                    } else {
                        html! {
                            <button
                                onclick={on_open_login}
                                class="px-4 py-1.5 border border-zinc-700 rounded-full text-blue-400 hover:bg-blue-400/10 text-sm font-medium"
                            >
                                {"Sign in"}
                            </button>
                        }
                    }
                }
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub is_open: bool,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let ctx = use_context::<AppContext>().expect("AppContext is provided by App");
    let current = use_route::<Route>();

    let item = |to: Route, label: &'static str| {
        let active = current.as_ref() == Some(&to);
        let classes = classes!(
            "flex",
            "items-center",
            "gap-5",
            "px-3",
            "py-2.5",
            "rounded-xl",
            if active { "bg-zinc-800 font-bold" } else { "hover:bg-zinc-900" }
        );
        html! {
            <Link<Route> to={to} classes={classes}>
                <span class={if props.is_open { "text-sm" } else { "text-[10px]" }}>{ label }</span>
            </Link<Route>>
        }
    };

    let width = if props.is_open { "w-60" } else { "w-20" };

    html! {
        <aside class={classes!("hidden", "md:flex", "flex-col", "gap-2", "p-3", "bg-zinc-950", "border-r", "border-zinc-900", width)}>
            { item(Route::Home, "Home") }
            { item(Route::Channel, "Your channel") }
            {
                if ctx.snapshot.settings.is_admin {
                    html! {
                        <>
                            <hr class="border-zinc-800 my-2" />
                            { item(Route::Admin, "Dashboard") }
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </aside>
    }
}
