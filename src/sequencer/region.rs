//! Named ownership scope for animation resources.
//!
//! Every listener, interval and frame loop registered while a page
//! section is live gets a canceller deferred onto the section's region.
//! Teardown runs the cancellers in reverse registration order and is
//! idempotent; dropping an un-torn region tears it down, so a region
//! moved into an effect cleanup can simply be dropped there.

use log::debug;

pub struct Region {
    name: &'static str,
    cancellers: Vec<Box<dyn FnOnce()>>,
    torn_down: bool,
}

impl Region {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            cancellers: Vec::new(),
            torn_down: false,
        }
    }

    /// Register a canceller to run at teardown. On a region already torn
    /// down the canceller runs immediately, so nothing registered late
    /// can outlive its region.
    pub fn defer(&mut self, cancel: impl FnOnce() + 'static) {
        if self.torn_down {
            cancel();
        } else {
            self.cancellers.push(Box::new(cancel));
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        debug!("region {} teardown, {} cancellers", self.name, self.cancellers.len());
        while let Some(cancel) = self.cancellers.pop() {
            cancel();
        }
    }
}

impl Drop for Region {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn teardown_runs_cancellers_in_reverse_order() {
        let ran: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
        let mut region = Region::new("hero");
        for label in ["scroll", "interval", "frame"] {
            let ran = ran.clone();
            region.defer(move || ran.borrow_mut().push(label));
        }
        region.teardown();
        assert_eq!(*ran.borrow(), vec!["frame", "interval", "scroll"]);
    }

    #[test]
    fn teardown_is_idempotent() {
        let count = Rc::new(RefCell::new(0));
        let mut region = Region::new("features");
        {
            let count = count.clone();
            region.defer(move || *count.borrow_mut() += 1);
        }
        region.teardown();
        region.teardown();
        assert_eq!(*count.borrow(), 1);
        assert!(region.is_torn_down());
    }

    #[test]
    fn drop_tears_the_region_down() {
        let count = Rc::new(RefCell::new(0));
        {
            let mut region = Region::new("protocol");
            let count = count.clone();
            region.defer(move || *count.borrow_mut() += 1);
        }
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn deferring_after_teardown_cancels_immediately() {
        let count = Rc::new(RefCell::new(0));
        let mut region = Region::new("cta");
        region.teardown();
        {
            let count = count.clone();
            region.defer(move || *count.borrow_mut() += 1);
        }
        assert_eq!(*count.borrow(), 1);
    }
}
