//! Pagination Component
//!
//! Page buttons, page-size changer and quick jumper for the question table.

use leptos::prelude::*;

use crate::table_state::{page_count, parse_jump_target, Pagination, PAGE_SIZE_OPTIONS};

/// Page buttons to render; `None` marks an ellipsis
pub fn visible_pages(current: u32, count: u32) -> Vec<Option<u32>> {
    if count <= 7 {
        return (1..=count).map(Some).collect();
    }
    let start = current.saturating_sub(2).max(2);
    let end = (current + 2).min(count - 1);

    let mut pages = vec![Some(1)];
    if start > 2 {
        pages.push(None);
    }
    pages.extend((start..=end).map(Some));
    if end < count - 1 {
        pages.push(None);
    }
    pages.push(Some(count));
    pages
}

#[component]
pub fn TablePagination(
    #[prop(into)] total: Signal<u64>,
    #[prop(into)] pagination: Signal<Pagination>,
    /// (page, page_size)
    #[prop(into)]
    on_page: Callback<(u32, u32)>,
    #[prop(into)] on_page_size: Callback<u32>,
) -> impl IntoView {
    let (jump_input, set_jump_input) = signal(String::new());
    let count = move || page_count(total.get(), pagination.get().page_size);

    let go = move |page: u32| {
        let p = pagination.get_untracked();
        on_page.run((page, p.page_size));
    };

    let jump = move || {
        let p = pagination.get_untracked();
        if let Some(page) = parse_jump_target(&jump_input.get_untracked(), total.get_untracked(), p.page_size) {
            go(page);
        }
        set_jump_input.set(String::new());
    };

    view! {
        <div class="pagination">
            <span class="pagination-total">{move || format!("Total {} items", total.get())}</span>
            <button
                class="page-btn"
                disabled=move || pagination.get().current <= 1
                on:click=move |_| go(pagination.get_untracked().current.saturating_sub(1).max(1))
            >
                "‹"
            </button>
            {move || {
                let current = pagination.get().current;
                visible_pages(current, count())
                    .into_iter()
                    .map(|page| match page {
                        Some(page) => view! {
                            <button
                                class=if page == current { "page-btn active" } else { "page-btn" }
                                on:click=move |_| go(page)
                            >
                                {page}
                            </button>
                        }.into_any(),
                        None => view! { <span class="page-ellipsis">"…"</span> }.into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="page-btn"
                disabled=move || pagination.get().current >= count()
                on:click=move |_| go(pagination.get_untracked().current + 1)
            >
                "›"
            </button>
            <select
                class="page-size-select"
                prop:value=move || pagination.get().page_size.to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_page_size.run(size);
                    }
                }
            >
                {PAGE_SIZE_OPTIONS.iter().map(|size| {
                    let size = *size;
                    view! {
                        <option
                            value=size.to_string()
                            selected=move || pagination.get().page_size == size
                        >
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
            <label class="page-jumper">
                "Go to"
                <input
                    type="text"
                    prop:value=move || jump_input.get()
                    on:input=move |ev| set_jump_input.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            jump();
                        }
                    }
                    on:blur=move |_| {
                        if !jump_input.get_untracked().is_empty() {
                            jump();
                        }
                    }
                />
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_few_pages_all_visible() {
        assert_eq!(visible_pages(1, 1), vec![Some(1)]);
        assert_eq!(visible_pages(3, 5), (1..=5).map(Some).collect::<Vec<_>>());
    }

    #[test]
    fn test_many_pages_windowed() {
        assert_eq!(
            visible_pages(10, 20),
            vec![Some(1), None, Some(8), Some(9), Some(10), Some(11), Some(12), None, Some(20)]
        );
        assert_eq!(
            visible_pages(1, 20),
            vec![Some(1), Some(2), Some(3), None, Some(20)]
        );
        assert_eq!(
            visible_pages(20, 20),
            vec![Some(1), None, Some(18), Some(19), Some(20)]
        );
    }
}
