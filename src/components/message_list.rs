//! Chat history with inline decoding for messages the current key opens.

use leptos::prelude::*;

use crate::net::types::ChatMessage;
use crate::state::messages::decoded_text;
use crate::state::store::Store;

#[component]
pub fn MessageList(#[prop(into)] messages: Signal<Vec<ChatMessage>>) -> impl IntoView {
    let store = expect_context::<Store>();
    let list_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = messages.with(Vec::len);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = list_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div class="message-list" node_ref=list_ref>
            {move || {
                let settings = store.select(|s| s.settings.clone());
                messages
                    .get()
                    .into_iter()
                    .map(|msg| {
                        let decoded = decoded_text(&msg, &settings);
                        let sealed = msg.method.is_some();
                        view! {
                            <div class="message-list__item" class:message-list__item--sealed=sealed>
                                <span class="message-list__author">{msg.login}</span>
                                <span class="message-list__text">{msg.message}</span>
                                {decoded.map(|plain| view! {
                                    <span class="message-list__decoded">{plain}</span>
                                })}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
