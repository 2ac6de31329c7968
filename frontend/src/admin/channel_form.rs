use crate::admin::components::{ErrorMessage, Notice};
use crate::context::AppContext;
use crate::files::{read_as_data_url, selected_file};
use crate::models::Channel;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct ChannelDraft {
    channel: Channel,
}

enum ChannelAction {
    Reset(Channel),
    Name(String),
    Handle(String),
    Description(String),
    Subscribers(u64),
    Avatar(String),
    Banner(String),
}

impl Reducible for ChannelDraft {
    type Action = ChannelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut channel = self.channel.clone();
        match action {
            ChannelAction::Reset(saved) => channel = saved,
            ChannelAction::Name(name) => channel.name = name,
            ChannelAction::Handle(handle) => channel.handle = handle,
            ChannelAction::Description(description) => channel.description = description,
            ChannelAction::Subscribers(count) => channel.subscribers = count,
            ChannelAction::Avatar(data_url) => channel.avatar = data_url,
            ChannelAction::Banner(data_url) => channel.banner = data_url,
        }
        Rc::new(ChannelDraft { channel })
    }
}

/// Edits the channel profile. Existing videos keep the name and avatar they
/// were saved with.
#[function_component(ChannelForm)]
pub fn channel_form() -> Html {
    let ctx = use_context::<AppContext>().expect("AppContext is provided by App");
    let draft = {
        let saved = ctx.snapshot.channel.clone();
        use_reducer(move || ChannelDraft { channel: saved })
    };
    let saving = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);

    // follow the published channel (e.g. after a factory reset)
    {
        let dispatcher = draft.dispatcher();
        use_effect_with(ctx.snapshot.channel.clone(), move |saved| {
            dispatcher.dispatch(ChannelAction::Reset(saved.clone()));
        });
    }

    let on_text = |make: fn(String) -> ChannelAction| {
        let dispatcher = draft.dispatcher();
        Callback::from(move |e: InputEvent| {
            dispatcher.dispatch(make(e.target_unchecked_into::<HtmlInputElement>().value()));
        })
    };

    let on_subscribers = {
        let dispatcher = draft.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            dispatcher.dispatch(ChannelAction::Subscribers(value.trim().parse().unwrap_or(0)));
        })
    };

    let on_description = {
        let dispatcher = draft.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            dispatcher.dispatch(ChannelAction::Description(value));
        })
    };

    let on_image = |make: fn(String) -> ChannelAction| {
        let dispatcher = draft.dispatcher();
        let error_message = error_message.clone();
        Callback::from(move |e: Event| {
            let Some(file) = selected_file(&e) else {
                return;
            };
            let dispatcher = dispatcher.clone();
            let error_message = error_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match read_as_data_url(&file).await {
                    Ok(data_url) => dispatcher.dispatch(make(data_url)),
                    Err(e) => error_message.set(Some(e)),
                }
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let saving = saving.clone();
        let error_message = error_message.clone();
        let notice = notice.clone();
        let sync = ctx.sync.clone();
        let refresh = ctx.refresh.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let channel = draft.channel.clone();
            let saving = saving.clone();
            let error_message = error_message.clone();
            let notice = notice.clone();
            let sync = sync.clone();
            let refresh = refresh.clone();

            saving.set(true);
            error_message.set(None);
            notice.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match sync.update_channel(channel).await {
                    Ok(()) => {
                        notice.set(Some("Brand updated successfully!".to_string()));
                        refresh.emit(());
                    }
                    Err(e) => error_message.set(Some(format!("Failed to update channel: {}", e))),
                }
                saving.set(false);
            });
        })
    };

    let channel = &draft.channel;
    let input_class = "w-full bg-zinc-800 border border-zinc-700 rounded-lg py-3 px-4 focus:outline-none focus:border-blue-500";

    html! {
        <form onsubmit={on_submit} class="grid grid-cols-1 lg:grid-cols-3 gap-10 bg-[#121212] p-10 rounded-2xl border border-zinc-800">
            <div class="lg:col-span-3">
                <ErrorMessage error_message={(*error_message).clone()} />
                <Notice notice={(*notice).clone()} />
            </div>

            <div class="lg:col-span-2 flex flex-col gap-6">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div>
                        <label class="block text-sm font-bold text-zinc-400 mb-2 uppercase">{"Brand Name"}</label>
                        <input type="text" class={input_class} value={channel.name.clone()} oninput={on_text(ChannelAction::Name)} />
                    </div>
                    <div>
                        <label class="block text-sm font-bold text-zinc-400 mb-2 uppercase">{"Handle"}</label>
                        <input type="text" class={input_class} value={channel.handle.clone()} oninput={on_text(ChannelAction::Handle)} />
                    </div>
                </div>

                <div>
                    <label class="block text-sm font-bold text-zinc-400 mb-2 uppercase">{"Subscribers"}</label>
                    <input type="number" min="0" class={input_class} value={channel.subscribers.to_string()} oninput={on_subscribers} />
                </div>

                <div>
                    <label class="block text-sm font-bold text-zinc-400 mb-2 uppercase">{"Description"}</label>
                    <textarea rows="5" class={input_class} value={channel.description.clone()} oninput={on_description} />
                </div>

                <button type="submit" disabled={*saving} class="self-start px-8 py-3 bg-blue-600 hover:bg-blue-700 rounded-full font-bold disabled:opacity-50">
                    { if *saving { "Saving..." } else { "Save Changes" } }
                </button>
            </div>

            <div class="flex flex-col gap-6">
                <div>
                    <label class="block text-sm font-bold text-zinc-400 mb-2 uppercase">{"Avatar"}</label>
                    <img src={channel.avatar.clone()} class="w-32 h-32 rounded-full object-cover bg-zinc-800 mb-3" alt="Avatar" />
                    <input type="file" accept="image/*" onchange={on_image(ChannelAction::Avatar)} />
                </div>
                <div>
                    <label class="block text-sm font-bold text-zinc-400 mb-2 uppercase">{"Banner"}</label>
                    <img src={channel.banner.clone()} class="w-full aspect-[4/1] rounded-lg object-cover bg-zinc-800 mb-3" alt="Banner" />
                    <input type="file" accept="image/*" onchange={on_image(ChannelAction::Banner)} />
                </div>
            </div>
        </form>
    }
}
