//! Assistant Chat Panel
//!
//! Floating chat widget with a simulated assistant: every user message
//! gets a canned reply on a fixed delay. No backend is involved.

use leptos::*;

/// Greeting shown when the panel first opens
const GREETING: &str =
    "Hi! I'm the Footfall assistant. Ask me anything about the dashboard numbers.";

/// Reply appended for every user message
const CANNED_REPLY: &str =
    "This is a simulated reply. Wire up a real assistant backend for live answers.";

/// Delay before the canned reply lands, in milliseconds
const REPLY_DELAY_MS: u32 = 1_000;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Role {
    User,
    Assistant,
}

#[derive(Clone, PartialEq, Eq)]
struct ChatMessage {
    role: Role,
    content: String,
}

/// Floating chat widget, collapsed to a round button by default
#[component]
pub fn ChatPanel() -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let (minimized, set_minimized) = create_signal(false);
    let (messages, set_messages) = create_signal(vec![ChatMessage {
        role: Role::Assistant,
        content: GREETING.to_string(),
    }]);
    let (input, set_input) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = input.get();
        if text.trim().is_empty() {
            return;
        }

        set_messages.update(|m| {
            m.push(ChatMessage { role: Role::User, content: text });
        });
        set_input.set(String::new());

        // The "assistant" answers after a fixed delay
        gloo_timers::callback::Timeout::new(REPLY_DELAY_MS, move || {
            set_messages.update(|m| {
                m.push(ChatMessage {
                    role: Role::Assistant,
                    content: CANNED_REPLY.to_string(),
                });
            });
        })
        .forget();
    };

    view! {
        {move || {
            if !open.get() {
                view! {
                    <button
                        on:click=move |_| set_open.set(true)
                        class="fixed bottom-6 right-6 h-14 w-14 rounded-full bg-primary-600
                               hover:bg-primary-700 shadow-lg text-2xl transition-colors z-50"
                    >
                        "💬"
                    </button>
                }
                    .into_view()
            } else {
                view! {
                    <div class=move || {
                        let base = "fixed bottom-6 right-6 bg-gray-800 border border-gray-700 \
                                    rounded-xl shadow-lg flex flex-col z-50";
                        if minimized.get() {
                            format!("{} w-80", base)
                        } else {
                            format!("{} w-96 h-[500px]", base)
                        }
                    }>
                        // Header
                        <div class="bg-primary-600 rounded-t-xl px-4 py-3 flex items-center justify-between">
                            <div class="flex items-center space-x-2">
                                <span>"💬"</span>
                                <h3 class="font-semibold">"Assistant"</h3>
                            </div>
                            <div class="flex space-x-2">
                                <button
                                    on:click=move |_| set_minimized.update(|m| *m = !*m)
                                    class="h-8 w-8 rounded hover:bg-white/20 transition-colors"
                                >
                                    {move || if minimized.get() { "▢" } else { "▁" }}
                                </button>
                                <button
                                    on:click=move |_| set_open.set(false)
                                    class="h-8 w-8 rounded hover:bg-white/20 transition-colors"
                                >
                                    "✕"
                                </button>
                            </div>
                        </div>

                        {move || {
                            if minimized.get() {
                                view! {}.into_view()
                            } else {
                                view! {
                                    // Messages
                                    <div class="flex-1 overflow-y-auto p-4 space-y-3">
                                        {move || {
                                            messages
                                                .get()
                                                .into_iter()
                                                .map(|msg| {
                                                    let bubble = match msg.role {
                                                        Role::User => "bg-primary-600 ml-auto",
                                                        Role::Assistant => "bg-gray-700",
                                                    };
                                                    view! {
                                                        <div class=format!(
                                                            "p-3 rounded-lg max-w-[80%] text-sm {}",
                                                            bubble
                                                        )>{msg.content}</div>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                    </div>

                                    // Input row
                                    <form on:submit=on_submit class="p-4 border-t border-gray-700">
                                        <div class="flex space-x-2">
                                            <input
                                                type="text"
                                                placeholder="Type your question..."
                                                prop:value=move || input.get()
                                                on:input=move |ev| set_input.set(event_target_value(&ev))
                                                class="flex-1 bg-gray-700 rounded-lg px-4 py-2
                                                       border border-gray-600 focus:border-primary-500
                                                       focus:outline-none"
                                            />
                                            <button
                                                type="submit"
                                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700
                                                       rounded-lg font-medium transition-colors"
                                            >
                                                "Send"
                                            </button>
                                        </div>
                                    </form>
                                }
                                    .into_view()
                            }
                        }}
                    </div>
                }
                    .into_view()
            }
        }}
    }
}
