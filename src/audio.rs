//! Audio collaborator. The UI only needs to unlock playback on the first user
//! gesture; sound synthesis lives elsewhere.

use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{AudioContext, AudioContextState};

use crate::util::clog;

pub trait AudioSystem {
    /// Prepare playback. Safe to call on every start or restart.
    fn init(&self);
}

/// Lazily creates a Web Audio context and resumes it if the browser
/// suspended it before the first gesture.
#[derive(Default)]
pub struct WebAudio {
    ctx: RefCell<Option<AudioContext>>,
}

impl AudioSystem for WebAudio {
    fn init(&self) {
        let mut slot = self.ctx.borrow_mut();
        if slot.is_none() {
            match AudioContext::new() {
                Ok(ctx) => *slot = Some(ctx),
                Err(_) => {
                    clog("audio: AudioContext unavailable");
                    return;
                }
            }
        }
        if let Some(ctx) = slot.as_ref() {
            if ctx.state() == AudioContextState::Suspended {
                let _ = ctx.resume();
            }
        }
    }
}

/// Shared handle placed in the app context; compares by identity.
#[derive(Clone)]
pub struct AudioHandle(pub Rc<dyn AudioSystem>);

impl AudioHandle {
    pub fn new(system: impl AudioSystem + 'static) -> Self {
        Self(Rc::new(system))
    }

    pub fn init(&self) {
        self.0.init();
    }
}

impl PartialEq for AudioHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Counting(Rc<Cell<u32>>);

    impl AudioSystem for Counting {
        fn init(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn handle_forwards_and_compares_by_identity() {
        let calls = Rc::new(Cell::new(0));
        let a = AudioHandle::new(Counting(calls.clone()));
        let b = a.clone();
        a.init();
        b.init();
        assert_eq!(calls.get(), 2);
        assert!(a == b);
        assert!(a != AudioHandle::new(Counting::default()));
    }
}
