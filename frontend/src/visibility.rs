//! Viewport visibility as a capability, so the reveal logic does not care
//! whether the events come from `IntersectionObserver` or from a test.

use std::ops::ControlFlow;

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Debug, Error)]
pub enum VisibilityError {
    #[error("intersection observer unavailable: {0}")]
    Unavailable(String),
}

/// Callback fed with visibility changes. Returning `Break` tells the observer
/// to stop watching the target.
pub type VisibilityListener = Box<dyn FnMut(bool) -> ControlFlow<()>>;

/// Reports visibility changes of `target` until the listener breaks or the
/// returned handle is dropped. Callbacks for different targets may arrive in
/// any order.
pub trait VisibilityObserver<T: ?Sized> {
    type Handle;

    fn observe(
        &self,
        target: &T,
        on_change: VisibilityListener,
    ) -> Result<Self::Handle, VisibilityError>;
}

/// Calls `on_enter` the first time `target` becomes visible and never again,
/// however often it scrolls out and back in.
pub fn watch_first_entry<T, O>(
    observer: &O,
    target: &T,
    on_enter: impl FnOnce() + 'static,
) -> Result<O::Handle, VisibilityError>
where
    T: ?Sized,
    O: VisibilityObserver<T>,
{
    let mut pending = Some(on_enter);
    observer.observe(
        target,
        Box::new(move |visible| {
            if !visible {
                return ControlFlow::Continue(());
            }
            if let Some(on_enter) = pending.take() {
                on_enter();
            }
            ControlFlow::Break(())
        }),
    )
}

/// Browser implementation backed by `IntersectionObserver`.
#[derive(Clone, Copy, Debug)]
pub struct IntersectionVisibility {
    threshold: f64,
}

impl IntersectionVisibility {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

pub struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl VisibilityObserver<Element> for IntersectionVisibility {
    type Handle = Observation;

    fn observe(
        &self,
        target: &Element,
        mut on_change: VisibilityListener,
    ) -> Result<Observation, VisibilityError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if on_change(entry.is_intersecting()).is_break() {
                    observer.unobserve(&entry.target());
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| VisibilityError::Unavailable(format!("{:?}", err)))?;
        observer.observe(target);

        Ok(Observation {
            observer,
            _callback: callback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Hands out one listener per observed target and lets the test play
    /// visibility changes into it. A listener that breaks is unobserved
    /// unless `keeps_delivering` is set.
    #[derive(Default)]
    struct ScriptedVisibility {
        listeners: RefCell<Vec<Option<VisibilityListener>>>,
        keeps_delivering: bool,
    }

    impl ScriptedVisibility {
        fn emit(&self, target: usize, visible: bool) {
            let mut listeners = self.listeners.borrow_mut();
            let Some(listener) = listeners[target].as_mut() else {
                return;
            };
            if listener(visible).is_break() && !self.keeps_delivering {
                listeners[target] = None;
            }
        }

        fn is_watching(&self, target: usize) -> bool {
            self.listeners.borrow()[target].is_some()
        }
    }

    impl VisibilityObserver<str> for ScriptedVisibility {
        type Handle = usize;

        fn observe(
            &self,
            _target: &str,
            on_change: VisibilityListener,
        ) -> Result<usize, VisibilityError> {
            let mut listeners = self.listeners.borrow_mut();
            listeners.push(Some(on_change));
            Ok(listeners.len() - 1)
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let bump = {
            let count = count.clone();
            move || count.set(count.get() + 1)
        };
        (count, bump)
    }

    #[test]
    fn fires_on_first_entry_only() {
        let observer = ScriptedVisibility::default();
        let (count, bump) = counter();
        let handle = watch_first_entry(&observer, "card", bump).unwrap();

        observer.emit(handle, false);
        assert_eq!(count.get(), 0);
        observer.emit(handle, true);
        observer.emit(handle, false);
        observer.emit(handle, true);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn stops_watching_after_first_entry() {
        let observer = ScriptedVisibility::default();
        let (count, bump) = counter();
        let handle = watch_first_entry(&observer, "card", bump).unwrap();

        observer.emit(handle, false);
        assert!(observer.is_watching(handle));
        observer.emit(handle, true);
        assert!(!observer.is_watching(handle));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn latch_holds_when_events_keep_arriving() {
        let observer = ScriptedVisibility {
            keeps_delivering: true,
            ..Default::default()
        };
        let (count, bump) = counter();
        let handle = watch_first_entry(&observer, "card", bump).unwrap();

        for visible in [true, false, true, true] {
            observer.emit(handle, visible);
        }
        assert!(observer.is_watching(handle));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn targets_latch_independently() {
        let observer = ScriptedVisibility::default();
        let (first, bump_first) = counter();
        let (second, bump_second) = counter();
        let a = watch_first_entry(&observer, "a", bump_first).unwrap();
        let b = watch_first_entry(&observer, "b", bump_second).unwrap();

        observer.emit(b, true);
        assert_eq!((first.get(), second.get()), (0, 1));
        observer.emit(a, true);
        observer.emit(b, true);
        assert_eq!((first.get(), second.get()), (1, 1));
    }

    proptest! {
        #[test]
        fn fires_once_iff_ever_visible(changes in proptest::collection::vec(any::<bool>(), 0..64)) {
            let observer = ScriptedVisibility {
                keeps_delivering: true,
                ..Default::default()
            };
            let (count, bump) = counter();
            let handle = watch_first_entry(&observer, "item", bump).unwrap();
            for visible in &changes {
                observer.emit(handle, *visible);
            }
            let expected = u32::from(changes.iter().any(|v| *v));
            prop_assert_eq!(count.get(), expected);
        }
    }
}
