use crate::admin::channel_form::ChannelForm;
use crate::admin::components::{confirm, AdminTab, ErrorMessage, TabBar, VideoTable};
use crate::admin::video_form::VideoForm;
use crate::context::AppContext;
use crate::models::Video;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod channel_form;
pub mod components;
pub mod video_form;

/// What the video form is open for, if anything.
#[derive(Clone, PartialEq)]
enum Editing {
    Closed,
    New,
    Existing(Video),
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let ctx = use_context::<AppContext>().expect("AppContext is provided by App");
    let navigator = use_navigator();
    let active_tab = use_state(|| AdminTab::Videos);
    let editing = use_state(|| Editing::Closed);
    let busy = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let on_select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: AdminTab| active_tab.set(tab))
    };

    let on_create = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(Editing::New))
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |video: Video| editing.set(Editing::Existing(video)))
    };

    let on_close_form = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(Editing::Closed))
    };

    let on_delete = {
        let busy = busy.clone();
        let error_message = error_message.clone();
        let sync = ctx.sync.clone();
        let refresh = ctx.refresh.clone();

        Callback::from(move |id: String| {
            if !confirm("Delete this video forever?") {
                return;
            }
            let busy = busy.clone();
            let error_message = error_message.clone();
            let sync = sync.clone();
            let refresh = refresh.clone();

            busy.set(true);
            error_message.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = sync.delete_video(&id).await {
                    error_message.set(Some(format!("Failed to delete video: {}", e)));
                }
                refresh.emit(());
                busy.set(false);
            });
        })
    };

    let on_reset = {
        let busy = busy.clone();
        let error_message = error_message.clone();
        let sync = ctx.sync.clone();
        let refresh = ctx.refresh.clone();

        Callback::from(move |_: MouseEvent| {
            if !confirm("Are you sure you want to reset everything? This will wipe all uploaded videos.") {
                return;
            }
            let busy = busy.clone();
            let error_message = error_message.clone();
            let sync = sync.clone();
            let refresh = refresh.clone();
            let navigator = navigator.clone();

            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match sync.factory_reset().await {
                    Ok(_) => {
                        refresh.emit(());
                        // a reset ends the admin session like a fresh start would
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Reset failed: {}", e)));
                        refresh.emit(());
                        busy.set(false);
                    }
                }
            });
        })
    };

    let snapshot = &ctx.snapshot;

    html! {
        <div class="max-w-6xl mx-auto pb-20 mt-4 px-4">
            <div class="flex items-center justify-between mb-8 border-b border-zinc-800 pb-4">
                <div>
                    <h1 class="text-2xl font-bold">{"Channel Content"}</h1>
                    <p class="text-zinc-400 text-sm">
                        { format!("Manage videos and brand settings for {}", snapshot.channel.name) }
                    </p>
                </div>
                <div class="flex gap-3">
                    <button onclick={on_reset} disabled={*busy} class="px-4 py-2 border border-red-900 text-red-500 hover:bg-red-900/20 rounded-full text-sm font-bold">
                        {"Reset Database"}
                    </button>
                    <button onclick={on_create} disabled={*busy} class="px-4 py-2 bg-white text-black hover:bg-zinc-200 rounded-full text-sm font-bold">
                        {"Create Video"}
                    </button>
                </div>
            </div>

            <ErrorMessage error_message={(*error_message).clone()} />
            <TabBar active={*active_tab} on_select={on_select_tab} />

            {
                match *active_tab {
                    AdminTab::Videos => html! {
                        <VideoTable
                            videos={snapshot.videos.clone()}
                            busy={*busy}
                            on_edit={on_edit}
                            on_delete={on_delete}
                        />
                    },
                    AdminTab::Customization => html! { <ChannelForm /> },
                }
            }

            {
                match &*editing {
                    Editing::Closed => html! {},
                    Editing::New => html! { <VideoForm video={None::<Video>} on_close={on_close_form} /> },
                    Editing::Existing(video) => html! {
                        <VideoForm key={video.id.clone()} video={Some(video.clone())} on_close={on_close_form} />
                    },
                }
            }
        </div>
    }
}
