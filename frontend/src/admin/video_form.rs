use crate::admin::components::ErrorMessage;
use crate::context::AppContext;
use crate::files::{probe_duration, read_as_data_url, selected_file};
use crate::models::{Channel, Video};
use crate::utils::{format_duration, new_video_id, today_upload_date};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct VideoDraft {
    video: Video,
}

enum DraftAction {
    Title(String),
    Description(String),
    Views(u64),
    Likes(u64),
    Comments(u64),
    Thumbnail(String),
    Media { url: String, duration: Option<String> },
}

impl Reducible for VideoDraft {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut video = self.video.clone();
        match action {
            DraftAction::Title(title) => video.title = title,
            DraftAction::Description(description) => video.description = description,
            DraftAction::Views(views) => video.views = views,
            DraftAction::Likes(likes) => video.likes = likes,
            DraftAction::Comments(count) => video.comments_count = count,
            DraftAction::Thumbnail(data_url) => video.thumbnail = data_url,
            DraftAction::Media { url, duration } => {
                video.video_url = url;
                if let Some(duration) = duration {
                    video.duration = duration;
                }
            }
        }
        Rc::new(VideoDraft { video })
    }
}

fn new_draft(channel: &Channel) -> Video {
    Video {
        id: new_video_id(),
        title: String::new(),
        description: String::new(),
        thumbnail: String::new(),
        video_url: String::new(),
        duration: "00:00".to_string(),
        views: 0,
        likes: 0,
        comments_count: 0,
        upload_date: today_upload_date(),
        channel_name: channel.name.clone(),
        channel_avatar: channel.avatar.clone(),
    }
}

/// Title and thumbnail are the only required fields.
fn validate(video: &Video) -> Result<(), String> {
    if video.title.trim().is_empty() || video.thumbnail.is_empty() {
        return Err("Title and Thumbnail are required!".to_string());
    }
    Ok(())
}

/// Stamps the current channel identity onto the video being saved.
fn with_channel(mut video: Video, channel: &Channel) -> Video {
    video.channel_name = channel.name.clone();
    video.channel_avatar = channel.avatar.clone();
    video
}

#[derive(Properties, PartialEq)]
pub struct VideoFormProps {
    /// `None` creates a new video.
    pub video: Option<Video>,
    pub on_close: Callback<()>,
}

#[function_component(VideoForm)]
pub fn video_form(props: &VideoFormProps) -> Html {
    let ctx = use_context::<AppContext>().expect("AppContext is provided by App");
    let draft = {
        let initial = props
            .video
            .clone()
            .unwrap_or_else(|| new_draft(&ctx.snapshot.channel));
        use_reducer(move || VideoDraft { video: initial })
    };
    let uploading = use_state(|| false);
    let saving = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let on_text = |make: fn(String) -> DraftAction| {
        let dispatcher = draft.dispatcher();
        Callback::from(move |e: InputEvent| {
            dispatcher.dispatch(make(e.target_unchecked_into::<HtmlInputElement>().value()));
        })
    };
    let on_number = |make: fn(u64) -> DraftAction| {
        let dispatcher = draft.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            dispatcher.dispatch(make(value.trim().parse().unwrap_or(0)));
        })
    };

    let on_description = {
        let dispatcher = draft.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            dispatcher.dispatch(DraftAction::Description(value));
        })
    };

    let on_thumbnail = {
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
                    Ok(data_url) => dispatcher.dispatch(DraftAction::Thumbnail(data_url)),
                    Err(e) => error_message.set(Some(e)),
                }
            });
        })
    };

    let on_media = {
        let dispatcher = draft.dispatcher();
        let uploading = uploading.clone();
        let error_message = error_message.clone();
        Callback::from(move |e: Event| {
            let Some(file) = selected_file(&e) else {
                return;
            };
            let dispatcher = dispatcher.clone();
            let uploading = uploading.clone();
            let error_message = error_message.clone();

            uploading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let duration = match probe_duration(&file).await {
                    Ok(seconds) => Some(format_duration(seconds)),
                    Err(e) => {
                        log::warn!("{}", e);
                        None
                    }
                };
                match read_as_data_url(&file).await {
                    Ok(url) => dispatcher.dispatch(DraftAction::Media { url, duration }),
                    Err(e) => error_message.set(Some(e)),
                }
                uploading.set(false);
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let saving = saving.clone();
        let error_message = error_message.clone();
        let sync = ctx.sync.clone();
        let refresh = ctx.refresh.clone();
        let channel = ctx.snapshot.channel.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Err(msg) = validate(&draft.video) {
                error_message.set(Some(msg));
                return;
            }

            let video = with_channel(draft.video.clone(), &channel);
            let saving = saving.clone();
            let error_message = error_message.clone();
            let sync = sync.clone();
            let refresh = refresh.clone();
            let on_close = on_close.clone();

            saving.set(true);
            error_message.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match sync.save_video(&video).await {
                    Ok(_) => {
                        refresh.emit(());
                        on_close.emit(());
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to save video: {}", e)));
                        saving.set(false);
                    }
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let video = &draft.video;
    let busy = *uploading || *saving;
    let input_class = "w-full bg-zinc-800 border border-zinc-700 rounded-lg py-2 px-4 focus:outline-none focus:border-blue-500";

    html! {
        <div class="fixed inset-0 z-[60] flex items-center justify-center p-4 bg-black/80 overflow-y-auto">
            <form onsubmit={on_submit} class="bg-zinc-900 border border-zinc-800 rounded-2xl w-full max-w-4xl p-8 flex flex-col gap-6">
                <div class="flex items-center justify-between">
                    <h2 class="text-xl font-bold">
                        { if props.video.is_some() { "Edit Video" } else { "Upload New Video" } }
                    </h2>
                    <button type="button" onclick={on_cancel.clone()} class="p-2 hover:bg-zinc-800 rounded-full">{"✕"}</button>
                </div>

                <ErrorMessage error_message={(*error_message).clone()} />

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <div class="flex flex-col gap-4">
                        <label class="text-sm font-bold text-zinc-400">{"Title"}</label>
                        <input
                            type="text"
                            class={input_class}
                            placeholder="Catchy video title"
                            value={video.title.clone()}
                            oninput={on_text(DraftAction::Title)}
                        />

                        <label class="text-sm font-bold text-zinc-400">{"Description"}</label>
                        <textarea
                            rows="6"
                            class={input_class}
                            placeholder="Tell viewers about your video"
                            value={video.description.clone()}
                            oninput={on_description}
                        />

                        <div class="grid grid-cols-3 gap-4">
                            <div>
                                <label class="text-sm font-bold text-zinc-400">{"Views"}</label>
                                <input type="number" min="0" class={input_class} value={video.views.to_string()} oninput={on_number(DraftAction::Views)} />
                            </div>
                            <div>
                                <label class="text-sm font-bold text-zinc-400">{"Likes"}</label>
                                <input type="number" min="0" class={input_class} value={video.likes.to_string()} oninput={on_number(DraftAction::Likes)} />
                            </div>
                            <div>
                                <label class="text-sm font-bold text-zinc-400">{"Comments"}</label>
                                <input type="number" min="0" class={input_class} value={video.comments_count.to_string()} oninput={on_number(DraftAction::Comments)} />
                            </div>
                        </div>
                    </div>

                    <div class="flex flex-col gap-4">
                        <label class="text-sm font-bold text-zinc-400">{"Thumbnail"}</label>
                        {
                            if video.thumbnail.is_empty() {
                                html! { <div class="aspect-video rounded-lg bg-zinc-800" /> }
                            } else {
                                html! { <img src={video.thumbnail.clone()} class="aspect-video rounded-lg object-cover" alt="Thumbnail" /> }
                            }
                        }
                        <input type="file" accept="image/*" onchange={on_thumbnail} />

                        <label class="text-sm font-bold text-zinc-400">
                            { format!("Video file ({})", video.duration) }
                        </label>
                        <input type="file" accept="video/*" onchange={on_media} />
                        {
                            if *uploading {
                                html! { <p class="text-xs text-blue-400">{"Processing video..."}</p> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>

                <div class="flex justify-end gap-3">
                    <button type="button" onclick={on_cancel} class="px-6 py-2 hover:bg-zinc-800 rounded-full text-sm font-bold">
                        {"Cancel"}
                    </button>
                    <button type="submit" disabled={busy} class="px-6 py-2 bg-blue-600 hover:bg-blue-700 rounded-full text-sm font-bold disabled:opacity-50">
                        { if *saving { "Saving..." } else { "Save" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
