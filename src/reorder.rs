//! Optimistic Reorder Engine
//!
//! Holds the canonical list for one table instance and drives the drag
//! lifecycle: Idle -> Dragging (live preview on every pointer-over event)
//! -> Committing (local order mutated, one PATCH for the whole list) ->
//! Idle. A failed commit is surfaced to the UI but never rolled back; the
//! next refetch is the source of truth.

use thiserror::Error;

use crate::models::{ListEntity, OrderPatch};
use crate::projection::FilterCriteria;

/// Why a drag could not start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReorderError {
    /// Index-based order is only coherent over the full collection, so
    /// dragging is refused while any filter narrows the view.
    #[error("Clear the active filters before reordering")]
    FilteredList,
    #[error("Unknown row")]
    UnknownRow,
}

/// Engine phase for one list instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    Committing,
}

/// Ephemeral state of one drag gesture
#[derive(Debug, Clone, PartialEq)]
struct DragSession<T> {
    active_id: String,
    snapshot: Vec<T>,
}

/// Canonical list plus drag state machine
#[derive(Debug, Clone, PartialEq)]
pub struct DragList<T: ListEntity> {
    items: Vec<T>,
    phase: Phase,
    session: Option<DragSession<T>>,
}

impl<T: ListEntity> DragList<T> {
    /// Build from a fetched page, sorted into storage order
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort_by_key(|item| item.order());
        Self {
            items,
            phase: Phase::Idle,
            session: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.active_id.as_str())
    }

    /// Replace the whole list (fresh fetch), sorted into storage order.
    /// Drops any open gesture.
    pub fn replace(&mut self, mut items: Vec<T>) {
        items.sort_by_key(|item| item.order());
        self.items = items;
        self.phase = Phase::Idle;
        self.session = None;
    }

    /// Idle -> Dragging. Refused while any filter narrows the view or the
    /// row is unknown; the caller surfaces the refusal as a toast.
    pub fn begin_drag(&mut self, id: &str, criteria: &FilterCriteria) -> Result<(), ReorderError> {
        if criteria.narrows() {
            return Err(ReorderError::FilteredList);
        }
        if !self.items.iter().any(|item| item.id() == id) {
            return Err(ReorderError::UnknownRow);
        }
        self.session = Some(DragSession {
            active_id: id.to_string(),
            snapshot: self.items.clone(),
        });
        self.phase = Phase::Dragging;
        Ok(())
    }

    /// Dragging -> Dragging: move the active row to `over_index` so the
    /// table renders the provisional order live.
    pub fn drag_over(&mut self, over_index: usize) {
        let Some(session) = &self.session else {
            return;
        };
        let Some(from) = self.items.iter().position(|i| i.id() == session.active_id) else {
            return;
        };
        let to = over_index.min(self.items.len().saturating_sub(1));
        if from != to {
            let row = self.items.remove(from);
            self.items.insert(to, row);
        }
    }

    /// Abort the gesture: restore the pre-drag snapshot, no network call.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            self.items = session.snapshot;
        }
        self.phase = Phase::Idle;
    }

    /// Dragging -> Committing: renumber `order` to match the final
    /// positions and produce the PATCH payload for the entire list.
    /// Returns `None` when the gesture ended where it started, in which
    /// case no request should be issued.
    pub fn drop_active(&mut self) -> Option<Vec<OrderPatch>> {
        let session = self.session.take()?;
        self.phase = Phase::Idle;
        let unchanged = self
            .items
            .iter()
            .zip(session.snapshot.iter())
            .all(|(a, b)| a.id() == b.id())
            && self.items.len() == session.snapshot.len();
        if unchanged {
            return None;
        }
        renumber(&mut self.items);
        self.phase = Phase::Committing;
        Some(order_payload(&self.items))
    }

    /// Committing -> Idle, success or failure alike. The optimistic order
    /// is kept either way.
    pub fn settle(&mut self) {
        self.phase = Phase::Idle;
    }
}

/// Rewrite `order` as a contiguous 0-based sequence of list indices
pub fn renumber<T: ListEntity>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index as i32);
    }
}

/// `[{id, order}]` for every row, in list order
pub fn order_payload<T: ListEntity>(items: &[T]) -> Vec<OrderPatch> {
    items
        .iter()
        .map(|item| OrderPatch {
            id: item.id().to_string(),
            order: item.order(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;

    fn make_project(id: &str, order: i32) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {}", id),
            project_type: "frontend".to_string(),
            order,
            ..Default::default()
        }
    }

    fn make_list() -> DragList<Project> {
        DragList::new(vec![
            make_project("a", 0),
            make_project("b", 1),
            make_project("c", 2),
        ])
    }

    fn ids(list: &DragList<Project>) -> Vec<&str> {
        list.items().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_new_sorts_into_storage_order() {
        let list = DragList::new(vec![
            make_project("b", 1),
            make_project("c", 2),
            make_project("a", 0),
        ]);
        assert_eq!(ids(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_drag_c_to_front() {
        let mut list = make_list();
        list.begin_drag("c", &FilterCriteria::default()).unwrap();
        list.drag_over(0);
        let payload = list.drop_active().expect("order changed");

        assert_eq!(ids(&list), vec!["c", "a", "b"]);
        assert_eq!(
            payload,
            vec![
                OrderPatch { id: "c".to_string(), order: 0 },
                OrderPatch { id: "a".to_string(), order: 1 },
                OrderPatch { id: "b".to_string(), order: 2 },
            ]
        );
        assert_eq!(list.phase(), Phase::Committing);
        list.settle();
        assert_eq!(list.phase(), Phase::Idle);
    }

    #[test]
    fn test_orders_stay_contiguous_after_many_moves() {
        let mut list = make_list();
        let moves = [("c", 0), ("a", 2), ("b", 1), ("a", 0)];
        for (id, to) in moves {
            list.begin_drag(id, &FilterCriteria::default()).unwrap();
            list.drag_over(to);
            let _ = list.drop_active();
            list.settle();
        }
        let mut orders: Vec<i32> = list.items().iter().map(|p| p.order).collect();
        orders.sort();
        assert_eq!(orders, vec![0, 1, 2]);
        for (index, item) in list.items().iter().enumerate() {
            assert_eq!(item.order, index as i32);
        }
    }

    #[test]
    fn test_drag_refused_under_category_filter() {
        let mut list = make_list();
        let criteria = FilterCriteria {
            category: Some("frontend".to_string()),
            ..Default::default()
        };
        let before = list.items().to_vec();

        assert_eq!(list.begin_drag("a", &criteria), Err(ReorderError::FilteredList));
        assert_eq!(list.phase(), Phase::Idle);
        assert_eq!(list.items(), &before[..]);
        // No session, so pointer-over and drop are inert
        list.drag_over(2);
        assert!(list.drop_active().is_none());
        assert_eq!(list.items(), &before[..]);
    }

    #[test]
    fn test_drag_refused_under_time_filter() {
        // A range filter hides older rows; a drop index measured over
        // the visible rows must never reach the canonical list.
        use crate::projection::TimeRange;
        let mut list = DragList::new(vec![
            make_project("a", 0),
            make_project("b", 1),
            make_project("c", 2),
            make_project("d", 3),
        ]);
        let criteria = FilterCriteria {
            range: Some(TimeRange::Days(7)),
            ..Default::default()
        };
        let before = list.items().to_vec();

        assert_eq!(list.begin_drag("d", &criteria), Err(ReorderError::FilteredList));
        list.drag_over(0);
        assert!(list.drop_active().is_none());
        assert_eq!(list.items(), &before[..]);

        let with_date = FilterCriteria {
            created_on: Some("2025-06-13".parse().unwrap()),
            ..Default::default()
        };
        assert_eq!(list.begin_drag("d", &with_date), Err(ReorderError::FilteredList));
    }

    #[test]
    fn test_unknown_row_refused() {
        let mut list = make_list();
        assert_eq!(
            list.begin_drag("nope", &FilterCriteria::default()),
            Err(ReorderError::UnknownRow)
        );
    }

    #[test]
    fn test_cancel_restores_snapshot() {
        let mut list = make_list();
        list.begin_drag("a", &FilterCriteria::default()).unwrap();
        list.drag_over(2);
        assert_eq!(ids(&list), vec!["b", "c", "a"]);
        list.cancel();
        assert_eq!(ids(&list), vec!["a", "b", "c"]);
        assert_eq!(list.phase(), Phase::Idle);
    }

    #[test]
    fn test_drop_in_place_issues_no_patch() {
        let mut list = make_list();
        list.begin_drag("b", &FilterCriteria::default()).unwrap();
        list.drag_over(1);
        assert!(list.drop_active().is_none());
        assert_eq!(list.phase(), Phase::Idle);
    }

    #[test]
    fn test_preview_follows_pointer_across_rows() {
        let mut list = make_list();
        list.begin_drag("a", &FilterCriteria::default()).unwrap();
        list.drag_over(1);
        assert_eq!(ids(&list), vec!["b", "a", "c"]);
        list.drag_over(2);
        assert_eq!(ids(&list), vec!["b", "c", "a"]);
        list.drag_over(0);
        assert_eq!(ids(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_replace_drops_open_gesture() {
        let mut list = make_list();
        list.begin_drag("a", &FilterCriteria::default()).unwrap();
        list.replace(vec![make_project("y", 1), make_project("x", 0)]);
        assert_eq!(ids(&list), vec!["x", "y"]);
        assert_eq!(list.phase(), Phase::Idle);
        assert!(list.active_id().is_none());
        assert!(list.drop_active().is_none());
    }
}
