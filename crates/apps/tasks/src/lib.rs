//! Task list desktop app UI component.

mod store;

use leptos::ev::KeyboardEvent;
use leptos::*;

use store::{Task, TaskFilter, TaskList};

#[component]
fn TaskRow(
    task: Task,
    tasks: RwSignal<TaskList>,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let id = task.id;
    let editing = create_rw_signal(false);
    let draft = create_rw_signal(task.title.clone());

    let report = move |result: Result<(), store::TaskError>| match result {
        Ok(()) => notice.set(None),
        Err(err) => notice.set(Some(err.to_string())),
    };
    let commit = move || {
        let title = draft.get_untracked();
        let mut result = Ok(());
        tasks.update(|list| result = list.rename(id, &title));
        if result.is_ok() {
            editing.set(false);
        }
        report(result);
    };
    let on_edit_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" => commit(),
        "Escape" => editing.set(false),
        _ => {}
    };

    view! {
        <li class=if task.done { "task-row done" } else { "task-row" }>
            <input
                type="checkbox"
                prop:checked=task.done
                on:change=move |_| {
                    let mut result = Ok(());
                    tasks.update(|list| result = list.toggle(id));
                    report(result);
                }
            />
            <Show
                when=move || editing.get()
                fallback={
                    let title = task.title.clone();
                    move || {
                        view! {
                            <span class="task-title" on:dblclick=move |_| editing.set(true)>
                                {title.clone()}
                            </span>
                        }
                    }
                }
            >
                <input
                    type="text"
                    class="task-edit"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=on_edit_keydown
                />
            </Show>
            <button
                type="button"
                aria-label="Delete task"
                on:click=move |_| {
                    let mut result = Ok(());
                    tasks.update(|list| result = list.remove(id));
                    report(result);
                }
            >
                "x"
            </button>
        </li>
    }
}

#[component]
/// Task list rendered inside a desktop window.
pub fn TasksApp() -> impl IntoView {
    let tasks = create_rw_signal(TaskList::default());
    let filter = create_rw_signal(TaskFilter::default());
    let draft = create_rw_signal(String::new());
    let notice = create_rw_signal(None::<String>);

    let add_task = move || {
        let title = draft.get_untracked();
        let mut result = Ok(0);
        tasks.update(|list| result = list.add(&title));
        match result {
            Ok(_) => {
                draft.set(String::new());
                notice.set(None);
            }
            Err(err) => notice.set(Some(err.to_string())),
        }
    };

    view! {
        <div class="app app-tasks">
            <div class="app-toolbar tasks-entry">
                <input
                    type="text"
                    placeholder="New task"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add_task();
                        }
                    }
                />
                <button type="button" on:click=move |_| add_task()>"Add"</button>
            </div>

            <div class="tasks-filters" role="group" aria-label="Task filter">
                {TaskFilter::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                type="button"
                                aria-pressed=move || (filter.get() == option).to_string()
                                on:click=move |_| filter.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <ul class="task-list">
                <For
                    each=move || tasks.with(|list| list.visible(filter.get()))
                    key=|task| (task.id, task.done, task.title.clone())
                    let:task
                >
                    <TaskRow task=task tasks=tasks notice=notice />
                </For>
            </ul>

            <div class="app-statusbar">
                <span>{move || format!("{} remaining", tasks.with(TaskList::remaining))}</span>
                <button
                    type="button"
                    disabled=move || tasks.with(|list| list.remaining() == list.len())
                    on:click=move |_| {
                        let mut removed = 0;
                        tasks.update(|list| removed = list.clear_completed());
                        logging::log!("cleared {removed} completed task(s)");
                    }
                >
                    "Clear completed"
                </button>
            </div>

            {move || {
                notice
                    .get()
                    .map(|message| view! { <p class="app-notice" role="alert">{message}</p> })
            }}
        </div>
    }
}
