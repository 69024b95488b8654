use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::reveal::{Reveal, RevealAction, Trigger, REVEAL_DURATION_MS};
use crate::visibility::{watch_first_entry, IntersectionVisibility, Observation};

impl Reducible for Reveal {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: RevealAction) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

type Timers = Rc<RefCell<Vec<Timeout>>>;

#[derive(Properties, PartialEq)]
pub struct RevealItemProps {
    pub trigger: Trigger,
    /// Wait between the trigger firing and the transition starting.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in an element that fades and slides in once.
#[function_component(RevealItem)]
pub fn reveal_item(props: &RevealItemProps) -> Html {
    let node = use_node_ref();
    let reveal = use_reducer(Reveal::default);

    {
        let node = node.clone();
        let dispatcher = reveal.dispatcher();
        let trigger = props.trigger;
        let delay_ms = props.delay_ms;

        use_effect_with_deps(
            move |_| {
                let timers: Timers = Rc::default();
                let start = {
                    let timers = timers.clone();
                    move || schedule(&timers, dispatcher, delay_ms)
                };

                let observation = match trigger {
                    Trigger::OnMount => {
                        start();
                        None
                    }
                    Trigger::OnViewportEntry => {
                        let observation = observe_entry(&node, start.clone());
                        if observation.is_none() {
                            start();
                        }
                        observation
                    }
                };

                move || {
                    drop(observation);
                    timers.borrow_mut().clear();
                }
            },
            (), // Triggers are wired once per mount
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={reveal.phase().style()}>
            { for props.children.iter() }
        </div>
    }
}

fn schedule(timers: &Timers, dispatcher: UseReducerDispatcher<Reveal>, delay_ms: u32) {
    let pending = timers.clone();
    let start = Timeout::new(delay_ms, move || {
        debug!("Reveal started after {}ms", delay_ms);
        dispatcher.dispatch(RevealAction::Start);

        let finish = Timeout::new(REVEAL_DURATION_MS, move || {
            debug!("Reveal finished");
            dispatcher.dispatch(RevealAction::Finish);
        });
        pending.borrow_mut().push(finish);
    });
    timers.borrow_mut().push(start);
}

/// `None` means no observer could be attached and the caller should reveal
/// right away.
fn observe_entry(node: &NodeRef, on_enter: impl FnOnce() + 'static) -> Option<Observation> {
    let Some(element) = node.cast::<Element>() else {
        warn!("Reveal target is not mounted");
        return None;
    };

    let observer = IntersectionVisibility::new(config::viewport_threshold());
    match watch_first_entry(&observer, &element, on_enter) {
        Ok(observation) => Some(observation),
        Err(err) => {
            warn!("{}, revealing immediately", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::Phase;

    #[test]
    fn start_then_finish_reaches_revealed() {
        let hidden = Rc::new(Reveal::default());
        let revealing = hidden.reduce(RevealAction::Start);
        assert_eq!(revealing.phase(), Phase::Revealing);
        let revealed = revealing.reduce(RevealAction::Finish);
        assert_eq!(revealed.phase(), Phase::Revealed);
    }

    #[test]
    fn ignored_actions_keep_the_same_state() {
        let hidden = Rc::new(Reveal::default());
        let unchanged = hidden.clone().reduce(RevealAction::Finish);
        assert!(Rc::ptr_eq(&hidden, &unchanged));

        let revealed = hidden
            .reduce(RevealAction::Start)
            .reduce(RevealAction::Finish);
        let again = revealed.clone().reduce(RevealAction::Start);
        assert!(Rc::ptr_eq(&revealed, &again));
        assert_eq!(again.phase(), Phase::Revealed);
    }
}
