//! Listener and observer ownership.
//!
//! Every closure handed to the DOM is owned by a Rust value whose `Drop`
//! detaches it, so a [`Subscriptions`] set can be torn down as a unit instead
//! of leaking through `Closure::forget`.

use std::cell::Cell;
use std::rc::Rc;

use crate::dom::{self, dom_err};
use fk_form_core::markers::{self, BOUND_ATTR};
use fk_form_core::Result;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, MutationObserver, MutationObserverInit};

/// One event listener; removed from its target on drop.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(dom_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// `MutationObserver` restricted to an element's `class` attribute;
/// disconnected on drop.
pub struct ClassObserver {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl ClassObserver {
    pub fn watch<F>(target: &Element, mut on_change: F) -> Result<Self>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(move |_records: JsValue| {
            on_change();
        }) as Box<dyn FnMut(JsValue)>);
        let observer =
            MutationObserver::new(callback.as_ref().unchecked_ref()).map_err(dom_err)?;

        let filter = js_sys::Array::of1(&JsValue::from_str("class"));
        let opts = MutationObserverInit::new();
        opts.set_attributes(true);
        opts.set_attribute_filter(&filter);
        observer
            .observe_with_options(target, &opts)
            .map_err(dom_err)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ClassObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Everything one `prepare` pass attached. Dropping it detaches listeners,
/// disconnects observers, clears the `data-fk-bound` tokens it set and
/// tells pending deferred work to stand down.
pub struct Subscriptions {
    listeners: Vec<Listener>,
    observers: Vec<ClassObserver>,
    bound: Vec<(Element, &'static str)>,
    alive: Rc<Cell<bool>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            observers: Vec::new(),
            bound: Vec::new(),
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F) -> Result<()>
    where
        F: FnMut(Event) + 'static,
    {
        self.listeners.push(Listener::new(target, event, handler)?);
        Ok(())
    }

    pub fn observe_class<F>(&mut self, target: &Element, on_change: F) -> Result<()>
    where
        F: FnMut() + 'static,
    {
        self.observers.push(ClassObserver::watch(target, on_change)?);
        Ok(())
    }

    /// Record that `el` now has `token` behavior attached by this set.
    pub fn mark_bound(&mut self, el: &Element, token: &'static str) -> Result<()> {
        let list = markers::with_token(el.get_attribute(BOUND_ATTR).as_deref(), token);
        dom::set_attr(el, BOUND_ATTR, &list)?;
        self.bound.push((el.clone(), token));
        Ok(())
    }

    /// Shared flag that flips to `false` once this set is dropped.
    pub fn alive(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.alive)
    }

    pub fn len(&self) -> usize {
        self.listeners.len() + self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Subscriptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.alive.set(false);
        self.listeners.clear();
        self.observers.clear();
        for (el, token) in self.bound.drain(..) {
            match markers::without_token(el.get_attribute(BOUND_ATTR).as_deref(), token) {
                Some(rest) => {
                    let _ = el.set_attribute(BOUND_ATTR, &rest);
                }
                None => dom::remove_attr(&el, BOUND_ATTR),
            }
        }
    }
}
