use crate::catalog::components::VideoCard;
use crate::context::AppContext;
use crate::router::Route;
use crate::utils::format_subscribers;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ChannelPage)]
pub fn channel_page() -> Html {
    let ctx = use_context::<AppContext>().expect("AppContext is provided by App");
    let channel = &ctx.snapshot.channel;
    let videos = &ctx.snapshot.videos;

    html! {
        <div class="max-w-[1280px] mx-auto px-4 md:px-6">
            <div class="aspect-[6/1] w-full rounded-2xl overflow-hidden bg-zinc-800 mt-4">
                <img src={channel.banner.clone()} class="w-full h-full object-cover" alt="Banner" />
            </div>

            <div class="mt-6 flex flex-col md:flex-row items-center md:items-start gap-6">
                <div class="flex-none w-32 h-32 md:w-40 md:h-40 rounded-full overflow-hidden bg-zinc-800">
                    <img src={channel.avatar.clone()} class="w-full h-full object-cover" alt="Avatar" />
                </div>

                <div class="flex-1 flex flex-col text-center md:text-left pt-2">
                    <h1 class="text-3xl md:text-4xl font-bold">{ channel.name.clone() }</h1>
                    <div class="flex flex-wrap justify-center md:justify-start gap-x-2 text-zinc-400 mt-1 text-sm">
                        <span>{ channel.handle.clone() }</span>
                        <span>{"•"}</span>
                        <span>{ format!("{} subscribers", format_subscribers(channel.subscribers)) }</span>
                        <span>{"•"}</span>
                        <span>{ format!("{} videos", videos.len()) }</span>
                    </div>
                    <p class="text-zinc-400 text-sm mt-3 line-clamp-2 max-w-2xl">{ channel.description.clone() }</p>

                    {
                        if ctx.snapshot.settings.is_admin {
                            html! {
                                <div class="mt-4 flex justify-center md:justify-start gap-2">
                                    <Link<Route> to={Route::Admin} classes="px-4 py-2 bg-[#272727] hover:bg-[#3f3f3f] rounded-full text-sm font-bold">
                                        {"Customize channel"}
                                    </Link<Route>>
                                    <Link<Route> to={Route::Admin} classes="px-4 py-2 bg-[#272727] hover:bg-[#3f3f3f] rounded-full text-sm font-bold">
                                        {"Manage videos"}
                                    </Link<Route>>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>

            <div class="mt-8 border-b border-zinc-800 px-2">
                <span class="inline-block pb-3 text-sm font-bold border-b-2 border-white">{"Videos"}</span>
            </div>

            <div class="mt-6 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-y-10 gap-x-4">
                { for videos.iter().map(|video| html! {
                    <VideoCard key={video.id.clone()} video={video.clone()} />
                }) }
            </div>
        </div>
    }
}
