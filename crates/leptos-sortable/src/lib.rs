//! Leptos Sortable Rows
//!
//! Pointer-driven row reordering for Leptos tables using mouse events.
//! Uses a movement threshold to distinguish click from drag, and a
//! closest-center rule to pick the provisional drop row: the row whose
//! vertical midpoint is nearest the pointer becomes the target.
//!
//! The crate only recognizes the gesture; what a move means is decided by
//! the callbacks the host component passes in.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Vertical extent of one draggable row, as measured at pointer-move time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowRect {
    pub top: f64,
    pub height: f64,
}

impl RowRect {
    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Index of the row whose center is nearest `pointer_y`, or `None` when
/// the pointer is outside the vertical span of all rows (no valid drop
/// target, the gesture reverts on release).
pub fn closest_center(pointer_y: f64, rows: &[RowRect]) -> Option<usize> {
    let min_top = rows.iter().map(|r| r.top).fold(f64::INFINITY, f64::min);
    let max_bottom = rows.iter().map(|r| r.bottom()).fold(f64::NEG_INFINITY, f64::max);
    if rows.is_empty() || pointer_y < min_top || pointer_y > max_bottom {
        return None;
    }
    rows.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            let da = (a.center() - pointer_y).abs();
            let db = (b.center() - pointer_y).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(index, _)| index)
}

/// Sort gesture signals for one table
#[derive(Clone, Copy)]
pub struct SortSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    pub over_index_read: ReadSignal<Option<usize>>,
    pub over_index_write: WriteSignal<Option<usize>>,
    /// Pending row id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

pub fn create_sort_signals() -> SortSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (over_index_read, over_index_write) = signal(None::<usize>);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    SortSignals {
        dragging_id_read,
        dragging_id_write,
        over_index_read,
        over_index_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Reset all gesture signals. Inert when the signals are already
/// disposed, so a handler firing during teardown is a no-op.
pub fn end_drag(dnd: &SortSignals) {
    let _ = dnd.dragging_id_write.try_set(None);
    let _ = dnd.over_index_write.try_set(None);
    let _ = dnd.pending_id_write.try_set(None);
}

/// Create mousedown handler for a draggable row.
/// Records a pending drag with the start position; the drag itself only
/// starts once the pointer moves past the threshold.
pub fn make_on_row_mousedown(dnd: SortSignals, row_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is an interactive element
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(row_id.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Measure the rows matching `selector`, in document order
pub fn measure_rows(selector: &str) -> Vec<RowRect> {
    let mut rects = Vec::new();
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return rects;
    };
    let Ok(nodes) = doc.query_selector_all(selector) else {
        return rects;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            let rect = el.get_bounding_client_rect();
            rects.push(RowRect {
                top: rect.top(),
                height: rect.height(),
            });
        }
    }
    rects
}

/// Bind the global mousemove/mouseup handlers that drive one sortable
/// table. The listeners are detached again when the calling scope is
/// disposed, so a screen can bind on every mount.
///
/// * `row_selector` - CSS selector for the draggable rows, re-measured on
///   every move since the preview reorders them live
/// * `on_start` - called once when the threshold is passed; return `false`
///   to refuse the drag (e.g. while a filter is active)
/// * `on_over` - called whenever the closest-center row changes
/// * `on_release` - called on mouseup with the dragged id and the final
///   target, `None` meaning the pointer was outside every row
pub fn bind_global_sort_handlers<S, O, R>(
    dnd: SortSignals,
    row_selector: &'static str,
    on_start: S,
    on_over: O,
    on_release: R,
) where
    S: Fn(&str) -> bool + 'static,
    O: Fn(usize) + 'static,
    R: Fn(String, Option<usize>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        // An event racing scope teardown reads disposed signals; bail out
        let Some(pending) = dnd.pending_id_read.try_get_untracked() else {
            return;
        };

        // Pending drag, not yet started: check the movement threshold
        if let Some(pending_id) = pending {
            if dnd.dragging_id_read.try_get_untracked() == Some(None) {
                let dx = (ev.client_x() - dnd.start_x_read.try_get_untracked().unwrap_or(0)).abs();
                let dy = (ev.client_y() - dnd.start_y_read.try_get_untracked().unwrap_or(0)).abs();
                if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                    if on_start(&pending_id) {
                        let _ = dnd.dragging_id_write.try_set(Some(pending_id));
                    } else {
                        end_drag(&dnd);
                        return;
                    }
                }
            }
        }

        // Active drag: track the closest row center
        if dnd.dragging_id_read.try_get_untracked().flatten().is_some() {
            let rows = measure_rows(row_selector);
            let target = closest_center(ev.client_y() as f64, &rows);
            if dnd.over_index_read.try_get_untracked() == Some(target) {
                return;
            }
            let _ = dnd.over_index_write.try_set(target);
            if let Some(index) = target {
                on_over(index);
            }
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some(dragging_id) = dnd.dragging_id_read.try_get_untracked() else {
            return;
        };
        let over_index = dnd.over_index_read.try_get_untracked().flatten();
        end_drag(&dnd);
        if let Some(id) = dragging_id {
            on_release(id, over_index);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }

    // The closures move into the cleanup so the bindings stay alive for
    // the life of the scope, then the listeners detach on unmount.
    // SendWrapper satisfies on_cleanup's Send + Sync bound; the cleanup
    // only ever runs on the single wasm thread that created the closures.
    let handlers = send_wrapper::SendWrapper::new((on_mousemove, on_mouseup));
    on_cleanup(move || {
        let (on_mousemove, on_mouseup) = handlers.take();
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            let _ = doc.remove_event_listener_with_callback(
                "mousemove",
                on_mousemove.as_ref().unchecked_ref(),
            );
            let _ = doc.remove_event_listener_with_callback(
                "mouseup",
                on_mouseup.as_ref().unchecked_ref(),
            );
        }
        drop(on_mousemove);
        drop(on_mouseup);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(count: usize, height: f64) -> Vec<RowRect> {
        (0..count)
            .map(|i| RowRect {
                top: i as f64 * height,
                height,
            })
            .collect()
    }

    #[test]
    fn test_pointer_inside_a_row_targets_it() {
        let rows = rows(3, 40.0);
        assert_eq!(closest_center(10.0, &rows), Some(0));
        assert_eq!(closest_center(55.0, &rows), Some(1));
        assert_eq!(closest_center(110.0, &rows), Some(2));
    }

    #[test]
    fn test_boundary_picks_nearest_center() {
        let rows = rows(2, 40.0);
        // 39.0 is closer to row 0's center (20) than row 1's (60)
        assert_eq!(closest_center(39.0, &rows), Some(0));
        assert_eq!(closest_center(41.0, &rows), Some(1));
    }

    #[test]
    fn test_pointer_outside_rows_is_no_target() {
        let rows = rows(3, 40.0);
        assert_eq!(closest_center(-5.0, &rows), None);
        assert_eq!(closest_center(121.0, &rows), None);
        assert_eq!(closest_center(10.0, &[]), None);
    }

    #[test]
    fn test_disposed_gesture_signals_are_inert() {
        // A screen unmounts (its owner is disposed) while the global
        // listeners still exist for one more event: reads come back None
        // and resets are no-ops instead of panics.
        let owner = Owner::new();
        let dnd = owner.with(create_sort_signals);
        drop(owner);

        assert_eq!(dnd.pending_id_read.try_get_untracked(), None);
        assert_eq!(dnd.dragging_id_read.try_get_untracked(), None);
        assert_eq!(dnd.over_index_read.try_get_untracked(), None);
        end_drag(&dnd);
    }

    #[test]
    fn test_uneven_row_heights() {
        let rows = vec![
            RowRect { top: 0.0, height: 20.0 },  // center 10
            RowRect { top: 20.0, height: 80.0 }, // center 60
            RowRect { top: 100.0, height: 20.0 }, // center 110
        ];
        assert_eq!(closest_center(30.0, &rows), Some(0));
        assert_eq!(closest_center(40.0, &rows), Some(1));
        assert_eq!(closest_center(90.0, &rows), Some(2));
    }
}
