use crate::models::Video;
use crate::utils::format_number;
use web_sys::window;
use yew::prelude::*;

/// Blocking browser confirm dialog; `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="bg-red-900/40 border border-red-700 text-red-200 px-4 py-3 rounded mb-4">
                { msg.clone() }
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub notice: Option<String>,
}

#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    if let Some(msg) = &props.notice {
        html! {
            <div class="bg-green-900/40 border border-green-700 text-green-200 px-4 py-3 rounded mb-4">
                { msg.clone() }
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AdminTab {
    Videos,
    Customization,
}

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: AdminTab,
    pub on_select: Callback<AdminTab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    let button = |tab: AdminTab, label: &'static str| {
        let on_select = props.on_select.clone();
        let border = if props.active == tab {
            "border-white text-white"
        } else {
            "border-transparent text-zinc-400"
        };
        html! {
            <button
                onclick={Callback::from(move |_: MouseEvent| on_select.emit(tab))}
                class={classes!("pb-3", "text-sm", "font-bold", "border-b-2", border)}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="flex gap-8 mb-8 border-b border-zinc-800">
            { button(AdminTab::Videos, "Videos") }
            { button(AdminTab::Customization, "Customization") }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoTableProps {
    pub videos: Vec<Video>,
    pub busy: bool,
    pub on_edit: Callback<Video>,
    pub on_delete: Callback<String>,
}

#[function_component(VideoTable)]
pub fn video_table(props: &VideoTableProps) -> Html {
    let row = |video: &Video| {
        let on_edit = {
            let on_edit = props.on_edit.clone();
            let video = video.clone();
            Callback::from(move |_: MouseEvent| on_edit.emit(video.clone()))
        };
        let on_delete = {
            let on_delete = props.on_delete.clone();
            let id = video.id.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
        };

        html! {
            <tr key={video.id.clone()} class="hover:bg-zinc-800/30">
                <td class="px-6 py-4">
                    <div class="flex items-center gap-4">
                        <img src={video.thumbnail.clone()} class="w-28 h-16 object-cover rounded bg-zinc-800" alt="" />
                        <div class="min-w-0">
                            <p class="text-sm font-bold line-clamp-1">{ video.title.clone() }</p>
                            <p class="text-xs text-zinc-500 mt-1">{ video.duration.clone() }</p>
                        </div>
                    </div>
                </td>
                <td class="px-6 py-4 text-sm">
                    <p>{ format!("{} views", format_number(video.views)) }</p>
                    <p>{ format!("{} likes", format_number(video.likes)) }</p>
                </td>
                <td class="px-6 py-4 text-sm text-zinc-400">{ video.upload_date.clone() }</td>
                <td class="px-6 py-4 text-right">
                    <button onclick={on_edit} disabled={props.busy} class="px-3 py-1 hover:bg-zinc-700 rounded text-sm">
                        {"Edit"}
                    </button>
                    <button onclick={on_delete} disabled={props.busy} class="px-3 py-1 hover:bg-red-900/40 text-red-400 rounded text-sm">
                        {"Delete"}
                    </button>
                </td>
            </tr>
        }
    };

    html! {
        <div class="overflow-x-auto rounded-xl border border-zinc-800 bg-[#0f0f0f]">
            <table class="w-full text-left border-collapse">
                <thead>
                    <tr class="border-b border-zinc-800 text-xs uppercase text-zinc-500">
                        <th class="px-6 py-4">{"Video"}</th>
                        <th class="px-6 py-4">{"Stats"}</th>
                        <th class="px-6 py-4">{"Date"}</th>
                        <th class="px-6 py-4 text-right">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-zinc-800">
                    { for props.videos.iter().map(row) }
                </tbody>
            </table>
            {
                if props.videos.is_empty() {
                    html! { <div class="p-10 text-center text-zinc-500">{"No content found. Start uploading!"}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
