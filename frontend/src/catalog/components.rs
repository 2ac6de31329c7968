use crate::models::Video;
use crate::router::Route;
use crate::utils::format_number;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    let meta = format!("{} views • {}", format_number(video.views), video.upload_date);
    let to = Route::Watch {
        id: video.id.clone(),
    };

    if props.compact {
        return html! {
            <Link<Route> to={to} classes="flex gap-2 group">
                <div class="relative flex-none w-40 h-24 rounded-lg overflow-hidden bg-zinc-800">
                    <img src={video.thumbnail.clone()} class="w-full h-full object-cover" alt={video.title.clone()} />
                    <span class="absolute bottom-1 right-1 bg-black/80 text-[10px] px-1 rounded font-bold">
                        { video.duration.clone() }
                    </span>
                </div>
                <div class="flex flex-col gap-1 min-w-0">
                    <h3 class="text-sm font-medium line-clamp-2 leading-tight group-hover:text-blue-400">{ video.title.clone() }</h3>
                    <p class="text-xs text-zinc-400">{ video.channel_name.clone() }</p>
                    <p class="text-xs text-zinc-400">{ meta }</p>
                </div>
            </Link<Route>>
        };
    }

    html! {
        <Link<Route> to={to} classes="flex flex-col gap-3 group">
            <div class="relative aspect-video rounded-xl overflow-hidden bg-zinc-800">
                <img src={video.thumbnail.clone()} class="w-full h-full object-cover" alt={video.title.clone()} />
                <span class="absolute bottom-2 right-2 bg-black/90 text-xs px-1.5 py-0.5 rounded font-bold">
                    { video.duration.clone() }
                </span>
            </div>
            <div class="flex gap-3 px-1">
                <div class="flex-none w-9 h-9 rounded-full overflow-hidden bg-zinc-800">
                    <img src={video.channel_avatar.clone()} class="w-full h-full object-cover" alt="Avatar" />
                </div>
                <div class="flex flex-col gap-0.5 overflow-hidden">
                    <h3 class="text-base font-bold leading-snug line-clamp-2">{ video.title.clone() }</h3>
                    <p class="text-sm text-zinc-400 mt-1">{ video.channel_name.clone() }</p>
                    <p class="text-sm text-zinc-400">{ meta }</p>
                </div>
            </div>
        </Link<Route>>
    }
}
