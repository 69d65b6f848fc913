//! Pagination Component
//!
//! Prev/next plus a window of numbered page buttons driven by the
//! server-reported total. Page changes go back through the query store so
//! the URL and the fetch effect stay in sync.

use leptos::prelude::*;

use crate::models::ListMeta;

/// Pages shown on each side of the current page
const WINDOW: u32 = 2;

/// Numbered slots to render: the first and last page, a window around the
/// current page, and `None` gaps where pages are elided.
fn page_window(current: u32, count: u32) -> Vec<Option<u32>> {
    let lo = current.saturating_sub(WINDOW).max(1);
    let hi = (current + WINDOW).min(count);
    let mut slots = Vec::new();
    if lo > 1 {
        slots.push(Some(1));
        if lo > 2 {
            slots.push(None);
        }
    }
    slots.extend((lo..=hi).map(Some));
    if hi < count {
        if hi < count - 1 {
            slots.push(None);
        }
        slots.push(Some(count));
    }
    slots
}

#[component]
pub fn Pagination(
    meta: Signal<ListMeta>,
    page: Signal<u32>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    let page_count = move || meta.get().page_count();
    let current = move || page.get().clamp(1, page_count());

    view! {
        <Show when={move || page_count() > 1}>
            <div class="pagination">
                <button
                    disabled={move || current() <= 1}
                    on:click=move |_| on_page.run(current() - 1)
                >
                    "Prev"
                </button>
                {move || {
                    page_window(current(), page_count())
                        .into_iter()
                        .map(|slot| match slot {
                            Some(n) => view! {
                                <button
                                    class=move || if current() == n { "page-btn active" } else { "page-btn" }
                                    on:click=move |_| on_page.run(n)
                                >
                                    {n}
                                </button>
                            }
                            .into_any(),
                            None => view! { <span class="page-gap">"…"</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    disabled={move || current() >= page_count()}
                    on:click=move |_| on_page.run(current() + 1)
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::page_window;

    #[test]
    fn test_small_counts_render_every_page() {
        assert_eq!(page_window(1, 3), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(
            page_window(3, 5),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn test_large_count_windows_around_current() {
        // 200 pages never yields 200 buttons
        let slots = page_window(100, 200);
        assert_eq!(
            slots,
            vec![
                Some(1),
                None,
                Some(98),
                Some(99),
                Some(100),
                Some(101),
                Some(102),
                None,
                Some(200),
            ]
        );
    }

    #[test]
    fn test_window_clamps_at_the_edges() {
        assert_eq!(
            page_window(1, 50),
            vec![Some(1), Some(2), Some(3), None, Some(50)]
        );
        assert_eq!(
            page_window(50, 50),
            vec![Some(1), None, Some(48), Some(49), Some(50)]
        );
    }

    #[test]
    fn test_no_gap_marker_for_adjacent_boundaries() {
        // lo == 2: page 1 touches the window, no gap
        assert_eq!(
            page_window(4, 10),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), None, Some(10)]
        );
    }
}
