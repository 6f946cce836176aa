//! Per-card UI state.

use dioxus::prelude::*;

/// The two flags a card owns: whether the shopper liked it and whether its
/// image has finished loading.
///
/// Both start `false` and live as long as the component that called
/// [`use_card_state`]. The handle is `Copy`, so event handlers can capture it
/// freely.
#[derive(Clone, Copy, PartialEq)]
pub struct CardState {
    liked: Signal<bool>,
    image_loaded: Signal<bool>,
}

/// Create the state for one card instance.
pub fn use_card_state() -> CardState {
    CardState {
        liked: use_signal(|| false),
        image_loaded: use_signal(|| false),
    }
}

impl CardState {
    pub fn liked(&self) -> bool {
        (self.liked)()
    }

    pub fn image_loaded(&self) -> bool {
        (self.image_loaded)()
    }

    pub fn toggle_like(&mut self) {
        let liked = !*self.liked.peek();
        self.liked.set(liked);
    }

    /// Record that the image loaded. Only the first call writes, so
    /// subscribers are not re-run by repeated load events.
    pub fn mark_image_loaded(&mut self) {
        if !*self.image_loaded.peek() {
            self.image_loaded.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_core::NoOpMutations;
    use std::cell::Cell;

    thread_local! {
        static STATE: Cell<Option<CardState>> = const { Cell::new(None) };
    }

    fn app() -> Element {
        let state = use_card_state();
        STATE.with(|slot| slot.set(Some(state)));
        let liked = state.liked();
        let loaded = state.image_loaded();

        rsx! {
            span { "liked={liked} loaded={loaded}" }
        }
    }

    fn captured() -> CardState {
        STATE.with(|slot| slot.get()).expect("app rendered")
    }

    #[test]
    fn starts_unliked_and_unloaded() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();

        assert_eq!(
            dioxus_ssr::render(&dom),
            "<span>liked=false loaded=false</span>"
        );
    }

    #[test]
    fn like_toggles_back_and_forth() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let mut state = captured();

        dom.in_runtime(|| state.toggle_like());
        dom.render_immediate(&mut NoOpMutations);
        assert_eq!(
            dioxus_ssr::render(&dom),
            "<span>liked=true loaded=false</span>"
        );

        dom.in_runtime(|| state.toggle_like());
        dom.render_immediate(&mut NoOpMutations);
        assert_eq!(
            dioxus_ssr::render(&dom),
            "<span>liked=false loaded=false</span>"
        );
    }

    #[test]
    fn image_loaded_only_flips_once() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let mut state = captured();

        dom.in_runtime(|| {
            state.mark_image_loaded();
            state.mark_image_loaded();
        });
        dom.render_immediate(&mut NoOpMutations);

        assert!(dom.in_runtime(|| state.image_loaded()));
        assert_eq!(
            dioxus_ssr::render(&dom),
            "<span>liked=false loaded=true</span>"
        );
    }
}
