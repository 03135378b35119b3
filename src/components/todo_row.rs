//! Todo Row Component
//!
//! One list entry: pin toggle, completed toggle, name with inline editor,
//! remove button.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::edit_session::EditSession;

/// A single todo row, reading its fields from the list by id
#[component]
pub fn TodoRow(id: String) -> impl IntoView {
    let ctx = use_todo_context();

    let released = id.clone();
    on_cleanup(move || log::debug!("[ROW] released {}", released));

    let id = StoredValue::new(id);
    let name = Memo::new(move |_| {
        id.with_value(|id| ctx.item_field(id, |item| item.name.clone()))
            .unwrap_or_default()
    });
    let completed = Memo::new(move |_| {
        id.with_value(|id| ctx.item_field(id, |item| item.completed))
            .unwrap_or(false)
    });
    let pinned = Memo::new(move |_| {
        id.with_value(|id| ctx.item_field(id, |item| item.pinned))
            .unwrap_or(false)
    });

    // Inline editing: Some while the editor is shown
    let session = RwSignal::new(None::<EditSession>);
    let editing = Memo::new(move |_| session.with(Option::is_some));
    let editor_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = editor_ref.get() {
            let _ = input.focus();
        }
    });

    let start_edit = move || session.set(Some(EditSession::begin(&name.get_untracked())));

    // Blur and Enter both land here; only the first commit of a session applies
    let finish_edit = move || {
        let committed = session
            .try_update(|s| s.as_mut().and_then(|s| s.finish()))
            .flatten();
        if let Some(new_name) = committed {
            id.with_value(|id| ctx.rename(id, &new_name));
            session.set(None);
        }
    };

    view! {
        <li class="todo-app__item" class:pinned=move || pinned.get()>
            <label class="todo-app__item-pin">
                <input
                    type="checkbox"
                    class="pin-checkbox"
                    prop:checked=move || pinned.get()
                    on:change=move |ev| id.with_value(|id| ctx.set_pinned(id, event_target_checked(&ev)))
                />
                <span class="todo-app__item-pin-icon">
                    <i class="fas fa-thumbtack"></i>
                </span>
            </label>

            <label class="todo-app__item-checkbox">
                <input
                    class="checkbox"
                    type="checkbox"
                    prop:checked=move || completed.get()
                    on:change=move |ev| id.with_value(|id| ctx.set_completed(id, event_target_checked(&ev)))
                />
                <span></span>
            </label>

            {move || if editing.get() {
                let draft = session
                    .with_untracked(|s| s.as_ref().map(|s| s.draft().to_string()))
                    .unwrap_or_default();
                view! {
                    <input
                        class="todo-app__item-editor"
                        type="text"
                        node_ref=editor_ref
                        value=draft
                        on:input=move |ev| session.update(|s| {
                            if let Some(s) = s {
                                s.set_draft(event_target_value(&ev));
                            }
                        })
                        on:blur=move |_| finish_edit()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                finish_edit();
                            }
                        }
                    />
                }.into_any()
            } else {
                view! {
                    <label
                        class="todo-app__item-name"
                        class:completed=move || completed.get()
                        on:dblclick=move |_| start_edit()
                    >
                        {move || name.get()}
                    </label>
                }.into_any()
            }}

            <button
                class="todo-app__remove-btn"
                type="button"
                on:click=move |_| id.with_value(|id| ctx.remove(id))
            ></button>
        </li>
    }
}
