use crate::auth::Credentials;
use crate::context::AppContext;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginModalProps {
    pub on_close: Callback<()>,
}

/// Two-step sign-in: email first, then password.
#[function_component(LoginModal)]
pub fn login_modal(props: &LoginModalProps) -> Html {
    let ctx = use_context::<AppContext>().expect("AppContext is provided by App");
    let credentials = use_memo((), |_| Credentials::from_config());
    let password_step = use_state(|| false);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error_message = use_state(|| None::<String>);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let credentials = credentials.clone();
        let password_step = password_step.clone();
        let email = email.clone();
        let password = password.clone();
        let error_message = error_message.clone();
        let sync = ctx.sync.clone();
        let refresh = ctx.refresh.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if !*password_step {
                if credentials.knows_email(&email) {
                    password_step.set(true);
                    error_message.set(None);
                } else {
                    error_message.set(Some("Could not find your account".to_string()));
                }
                return;
            }

            if sync.sign_in(&credentials, &email, &password) {
                refresh.emit(());
                on_close.emit(());
            } else {
                error_message.set(Some("Wrong password. Try again.".to_string()));
            }
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center bg-black/50 p-4">
            <form onsubmit={on_submit} class="bg-zinc-950 w-full max-w-md rounded-lg border border-zinc-800 p-10 flex flex-col gap-6">
                <div class="text-center">
                    <h2 class="text-2xl font-normal">{"Sign in"}</h2>
                    <p class="text-sm mt-2 text-zinc-400">
                        { if *password_step { (*email).clone() } else { "to continue to the admin dashboard".to_string() } }
                    </p>
                </div>

                {
                    if *password_step {
                        html! {
                            <input
                                type="password"
                                placeholder="Enter your password"
                                class="w-full bg-transparent border border-zinc-700 rounded py-3 px-4 focus:outline-none focus:border-blue-500"
                                value={(*password).clone()}
                                oninput={on_password_input}
                            />
                        }
                    } else {
                        html! {
                            <input
                                type="email"
                                placeholder="Email"
                                class="w-full bg-transparent border border-zinc-700 rounded py-3 px-4 focus:outline-none focus:border-blue-500"
                                value={(*email).clone()}
                                oninput={on_email_input}
                            />
                        }
                    }
                }

                {
                    if let Some(msg) = &*error_message {
                        html! { <p class="text-red-500 text-xs">{ msg.clone() }</p> }
                    } else {
                        html! {}
                    }
                }

                <div class="flex justify-between items-center">
                    <button type="button" onclick={on_cancel} class="text-blue-400 text-sm font-medium">
                        {"Cancel"}
                    </button>
                    <button type="submit" class="bg-blue-500 hover:bg-blue-600 text-white px-6 py-2 rounded-full text-sm font-medium">
                        { if *password_step { "Sign in" } else { "Next" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
