//! Empty-state placeholder shown when there are no messages.

use leptos::prelude::*;

#[component]
pub fn Information() -> impl IntoView {
    view! {
        <div class="information">
            <h1 class="information__title">"Cipher Chat"</h1>
            <ul class="information__steps">
                <li>"Type a message below and press Enter."</li>
                <li>"Pick a cipher method and key; the message is encrypted before it leaves your browser."</li>
                <li>"Messages sealed with your current method and key are decoded under the ciphertext."</li>
            </ul>
        </div>
    }
}
