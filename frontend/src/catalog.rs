use crate::catalog::components::VideoCard;
use crate::context::AppContext;
use yew::prelude::*;

pub mod channel_page;
pub mod components;
pub mod watch;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let ctx = use_context::<AppContext>().expect("AppContext is provided by App");
    let videos = &ctx.snapshot.videos;

    html! {
        <div class="px-4 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-y-10 gap-x-4">
            { for videos.iter().map(|video| html! {
                <VideoCard key={video.id.clone()} video={video.clone()} />
            }) }
            {
                if videos.is_empty() {
                    html! {
                        <div class="col-span-full py-20 text-center text-zinc-500">
                            {"No videos available. Sign in as Admin to upload."}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
