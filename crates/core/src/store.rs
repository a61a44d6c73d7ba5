//! An explicitly constructed store owning the wizard's state.
//!
//! Consumers receive the `Store` by parameter; there is no process-wide
//! instance. Every dispatch replaces the held state with the reducer's
//! output and then notifies subscribers in subscription order.

use crate::action::Action;
use crate::reducer::reduce;
use crate::run::{reduce_run, ReportRunState, RunAction};
use crate::types::ReportFilterState;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ReportFilterState)>;

pub struct Store {
    state: ReportFilterState,
    run_state: ReportRunState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    pub fn new(initial: ReportFilterState) -> Self {
        Store {
            state: initial,
            run_state: ReportRunState::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &ReportFilterState {
        &self.state
    }

    pub fn run_state(&self) -> &ReportRunState {
        &self.run_state
    }

    /// Apply a filter action and notify subscribers with the new state.
    pub fn dispatch(&mut self, action: Action) -> &ReportFilterState {
        self.state = reduce(&self.state, &action);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
        &self.state
    }

    /// Apply a report-run action. Filter subscribers are not notified.
    pub fn dispatch_run(&mut self, action: RunAction) -> &ReportRunState {
        self.run_state = reduce_run(&self.run_state, &action);
        &self.run_state
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ReportFilterState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new(ReportFilterState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FilterItem, FilterValue};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn add_tag(value: i64) -> Action {
        Action::AddToOrFilter {
            field: "tags".to_string(),
            item: FilterItem::new(value, "tag"),
        }
    }

    #[test]
    fn dispatch_applies_actions_in_order() {
        let mut store = Store::default();
        store.dispatch(add_tag(1));
        store.dispatch(add_tag(2));
        store.dispatch(add_tag(1));

        let values: Vec<_> = match &store.state().current_filter["tags"] {
            FilterValue::Group(items) => items.iter().map(|i| i.value.clone()).collect(),
            other => panic!("expected group, got {:?}", other),
        };
        assert_eq!(values, vec![serde_json::json!(2), serde_json::json!(1)]);
    }

    #[test]
    fn subscribers_see_each_new_state_until_unsubscribed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::default();

        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |state| {
            sink.borrow_mut().push(state.current_filter.len());
        });

        store.dispatch(add_tag(1));
        store.dispatch(Action::SetReportName {
            name: "r".to_string(),
        });
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(add_tag(2));

        assert_eq!(*seen.borrow(), vec![1, 1]);
    }

    #[test]
    fn run_dispatch_is_separate_from_filter_state() {
        let mut store = Store::default();
        store.dispatch_run(RunAction::StartRunningReport {
            order: 1,
            name: "Contacts".to_string(),
        });
        assert_eq!(store.run_state().running.len(), 1);
        assert_eq!(store.state(), &ReportFilterState::default());
    }
}
