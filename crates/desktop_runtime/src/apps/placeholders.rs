use leptos::*;

pub(super) fn render_other_app_placeholder() -> View {
    view! { <OtherAppPlaceholder /> }.into_view()
}

#[component]
fn OtherAppPlaceholder() -> impl IntoView {
    let pings = create_rw_signal(0_u32);

    view! {
        <div class="app app-other">
            <p><strong>"Other App (Placeholder)"</strong></p>
            <p>"This slot is reserved for a future application."</p>
            <div class="app-toolbar">
                <button type="button" on:click=move |_| pings.update(|count| *count += 1)>
                    "Ping"
                </button>
                <span>{move || format!("{} ping(s)", pings.get())}</span>
            </div>
        </div>
    }
}
