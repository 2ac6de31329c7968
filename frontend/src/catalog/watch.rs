use crate::catalog::components::VideoCard;
use crate::context::AppContext;
use crate::router::Route;
use crate::utils::{format_number, format_subscribers};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WatchPageProps {
    pub id: String,
}

#[function_component(WatchPage)]
pub fn watch_page(props: &WatchPageProps) -> Html {
    let ctx = use_context::<AppContext>().expect("AppContext is provided by App");
    let snapshot = &ctx.snapshot;

    let Some(video) = snapshot.videos.iter().find(|v| v.id == props.id) else {
        return html! {
            <div class="py-20 text-center text-zinc-500">{"Video not found."}</div>
        };
    };
    let related = snapshot.videos.iter().filter(|v| v.id != props.id);

    html! {
        <div class="max-w-[1700px] mx-auto flex flex-col xl:flex-row gap-6 px-2 md:px-6">
            <div class="flex-1 min-w-0">
                <div class="aspect-video bg-black rounded-xl overflow-hidden">
                    {
                        if video.video_url.is_empty() {
                            html! {
                                <div class="w-full h-full flex flex-col items-center justify-center text-zinc-600 bg-[#0a0a0a]">
                                    <p class="text-lg font-medium">{"Demo Video Placeholder"}</p>
                                </div>
                            }
                        } else {
                            html! {
                                <video src={video.video_url.clone()} controls=true autoplay=true class="w-full h-full" />
                            }
                        }
                    }
                </div>

                <div class="mt-4 flex flex-col gap-3">
                    <h1 class="text-xl font-bold line-clamp-2">{ video.title.clone() }</h1>

                    <div class="flex flex-wrap items-center justify-between gap-y-4">
                        <div class="flex items-center gap-3">
                            <Link<Route> to={Route::Channel} classes="flex-none w-10 h-10 rounded-full bg-zinc-800 overflow-hidden">
                                <img src={video.channel_avatar.clone()} class="w-full h-full object-cover" alt="Avatar" />
                            </Link<Route>>
                            <div class="flex flex-col min-w-0 pr-2">
                                <Link<Route> to={Route::Channel} classes="font-bold text-base leading-tight truncate">
                                    { video.channel_name.clone() }
                                </Link<Route>>
                                <p class="text-xs text-zinc-400">
                                    { format!("{} subscribers", format_subscribers(snapshot.channel.subscribers)) }
                                </p>
                            </div>
                        </div>

                        <div class="flex items-center gap-2">
                            <span class="px-4 py-2 bg-[#272727] rounded-full text-sm font-bold">
                                { format!("{} likes", format_number(video.likes)) }
                            </span>
                            <span class="px-4 py-2 bg-[#272727] rounded-full text-sm font-bold">
                                { format!("{} comments", format_number(video.comments_count)) }
                            </span>
                        </div>
                    </div>

                    <div class="bg-[#272727] rounded-xl p-3 text-sm">
                        <p class="font-bold">
                            { format!("{} views • {}", format_number(video.views), video.upload_date) }
                        </p>
                        <p class="mt-2 whitespace-pre-wrap">{ video.description.clone() }</p>
                    </div>
                </div>
            </div>

            <div class="xl:w-[400px] flex flex-col gap-3">
                { for related.map(|v| html! {
                    <VideoCard key={v.id.clone()} video={v.clone()} compact=true />
                }) }
            </div>
        </div>
    }
}
