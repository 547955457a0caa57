//! Login tile used on the home page: image, button, and description.

use leptos::prelude::*;

#[component]
pub fn HomeLoginButton(
    #[prop(into)] button_text: String,
    #[prop(into)] img: String,
    img_height: u32,
    img_width: u32,
    #[prop(into)] text: String,
    #[prop(optional, into)] link: Option<String>,
    #[prop(optional, into)] offset: Option<String>,
) -> impl IntoView {
    let column_class = match offset {
        Some(offset) => format!("col-sm-3 offset-sm-{offset}"),
        None => "col-sm-3".to_owned(),
    };
    let button = match link {
        Some(href) => view! { <a class="btn btn-primary w-75" href=href>{button_text}</a> }.into_any(),
        None => view! { <button class="btn btn-primary w-75" disabled=true>{button_text}</button> }.into_any(),
    };

    view! {
        <div class=column_class>
            <img src=img alt="Login provider logo" height=img_height.to_string() width=img_width.to_string()/>
            <div class="home-login-button__action pt-4 mt-4">{button}</div>
            <p class="small text-white pl-4 pr-4 pt-4 mt-4">{text}</p>
        </div>
    }
}
