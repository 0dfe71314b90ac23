//! Outside-pointer detection for the desktop host
//!
//! Each picker region is wrapped in a `mouse_area` that reports enter/exit,
//! so the hub always knows which region (if any) is under the cursor. Global
//! button presses arrive through the event subscription; a press is
//! "outside" every watched region that is not currently hovered.

use tokswap::core::selection::{OutsidePointer, RegionId, WatchHandle};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

#[derive(Debug, Default)]
struct HubState {
    watched: BTreeSet<RegionId>,
    hovered: Option<RegionId>,
}

#[derive(Debug, Clone, Default)]
pub struct PointerHub {
    inner: Rc<RefCell<HubState>>,
}

impl PointerHub {
    pub fn enter(&self, region: RegionId) {
        self.inner.borrow_mut().hovered = Some(region);
    }

    /// Clears the hover only if `region` is the one being left.
    pub fn exit(&self, region: RegionId) {
        let mut inner = self.inner.borrow_mut();
        if inner.hovered == Some(region) {
            inner.hovered = None;
        }
    }

    pub fn has_watchers(&self) -> bool {
        !self.inner.borrow().watched.is_empty()
    }

    /// Watched regions a press at the current cursor position falls outside of.
    pub fn outside_regions(&self) -> Vec<RegionId> {
        let inner = self.inner.borrow();
        inner
            .watched
            .iter()
            .copied()
            .filter(|region| inner.hovered != Some(*region))
            .collect()
    }
}

impl OutsidePointer for PointerHub {
    fn watch(&self, region: RegionId) -> Box<dyn WatchHandle> {
        tracing::debug!("Watching outside presses for {region}");
        self.inner.borrow_mut().watched.insert(region);
        Box::new(HubWatch {
            region,
            hub: Rc::clone(&self.inner),
            released: false,
        })
    }
}

struct HubWatch {
    region: RegionId,
    hub: Rc<RefCell<HubState>>,
    released: bool,
}

impl WatchHandle for HubWatch {
    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.hub.borrow_mut().watched.remove(&self.region);
        tracing::debug!("Stopped watching {}", self.region);
    }
}

impl Drop for HubWatch {
    fn drop(&mut self) {
        self.release();
    }
}
