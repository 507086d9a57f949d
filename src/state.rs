use log::debug;
use std::collections::HashMap;

/// Values retained per element id across frames.
///
/// The host creates a value the first time an element asks for it and drops
/// it when the element is removed, so each element owns exactly one value.
pub struct StateStore<T> {
    states: HashMap<u32, T>,
}

impl<T> StateStore<T> {
    pub fn new() -> StateStore<T> {
        Self {
            states: HashMap::new(),
        }
    }

    pub fn remember<F: FnOnce() -> T>(&mut self, element_id: u32, init: F) -> &mut T {
        self.states.entry(element_id).or_insert_with(|| {
            debug!("attach state to element {}", element_id);
            init()
        })
    }

    pub fn get_mut(&mut self, element_id: u32) -> Option<&mut T> {
        self.states.get_mut(&element_id)
    }

    pub fn forget(&mut self, element_id: u32) -> Option<T> {
        let state = self.states.remove(&element_id);
        if state.is_some() {
            debug!("detach state from element {}", element_id);
        }
        state
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<T> Default for StateStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
