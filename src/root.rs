use crate::chrome::{Chrome, ChromeSnapshot};
use crate::config::ChromeConfig;
use crate::dom::{self, DomMarkers};
use crate::events::{self, ListenerGuard};
use crate::frame::FrameLoop;
use crate::lifecycle::Mount;
use crate::media::WebTrack;
use crate::scroll::ScrollSmoother;
use crate::view::{self, ChromeView};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// State plus the DOM collaborators it is projected onto.
pub struct Shared {
    pub chrome: Chrome,
    pub track: WebTrack,
    pub markers: DomMarkers,
    pub view: ChromeView,
    clock: Instant,
}

impl Shared {
    /// Seconds since the root was created; the tween clock.
    #[inline]
    pub fn now(&self) -> f64 {
        self.clock.elapsed().as_secs_f64()
    }

    #[inline]
    pub fn needs_frame(&self) -> bool {
        !self.chrome.follower_at_rest(self.now(), self.view.last_follower())
    }

    pub fn snapshot(&self) -> ChromeSnapshot {
        self.chrome.snapshot(self.now())
    }
}

pub type SharedChrome = Rc<RefCell<Shared>>;

/// Run a mutation, re-render, and announce state changes once the borrow is
/// released so render-layer listeners may read state back.
pub fn update(shared: &SharedChrome, f: impl FnOnce(&mut Shared)) {
    let changed = {
        let mut guard = shared.borrow_mut();
        let s = &mut *guard;
        f(s);
        let snap = s.snapshot();
        let delta = s.view.apply(&snap);
        delta.is_state_change().then_some(snap)
    };
    if let Some(snap) = changed {
        view::publish(&snap);
    }
}

/// A `play()` request resolves later; re-read the element once it settles so
/// a refusal lands as "not playing".
pub fn watch_pending_play(shared: &SharedChrome) {
    let Some(promise) = shared.borrow_mut().track.take_pending_play() else {
        return;
    };
    let weak = Rc::downgrade(shared);
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("[audio] playback refused: {:?}", e);
        }
        let Some(shared) = weak.upgrade() else {
            log::debug!("[audio] play settled after unmount");
            return;
        };
        update(&shared, |s| {
            s.chrome.reconcile_audio(&s.track);
        });
    });
}

// Field order is teardown order: listeners first, then the frame loop, then
// the scroll smoother.
struct Mounted {
    _listeners: Vec<ListenerGuard>,
    _frame: FrameLoop,
    _scroll: ScrollSmoother,
    shared: SharedChrome,
}

/// Owns the page chrome: listeners, frame loop and scroll smoother per mount,
/// and the theme, pointer and audio state for the whole page session.
pub struct InteractionRoot {
    config: ChromeConfig,
    // Parked here while unmounted; swapped into `Shared` while mounted.
    chrome: Chrome,
    clock: Instant,
    mount: Mount<Mounted>,
}

impl InteractionRoot {
    pub fn new(config: ChromeConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            chrome: Chrome::new(&config),
            clock: Instant::now(),
            config,
            mount: Mount::new(),
        })
    }

    /// Returns false when already mounted.
    pub fn mount(&mut self) -> anyhow::Result<bool> {
        let config = &self.config;
        let chrome = &mut self.chrome;
        let clock = self.clock;
        let mounted = self.mount.acquire(|| build(config, chrome, clock))?;
        if mounted {
            log::info!("[root] mounted");
        } else {
            log::debug!("[root] mount ignored, already mounted");
        }
        Ok(mounted)
    }

    pub fn unmount(&mut self) -> bool {
        if !self.mount.is_mounted() {
            return false;
        }
        if let Some(m) = self.mount.get() {
            match m.shared.try_borrow_mut() {
                Ok(mut s) => std::mem::swap(&mut s.chrome, &mut self.chrome),
                Err(_) => log::warn!("[root] state busy at unmount; session state reset"),
            }
        }
        self.mount.release();
        log::info!("[root] unmounted, audio gate {:?}", self.chrome.audio().state());
        true
    }

    /// `None` when unmounted or while a handler holds the state.
    pub fn snapshot(&self) -> Option<ChromeSnapshot> {
        let m = self.mount.get()?;
        let s = m.shared.try_borrow().ok()?;
        Some(s.snapshot())
    }
}

// Everything acquired here is owned by a local until `Mounted` is built, so
// an early `?` releases it. The session `chrome` only moves into `Shared`
// once nothing fallible is left.
fn build(config: &ChromeConfig, chrome: &mut Chrome, clock: Instant) -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    for (name, id) in config.ids.required() {
        if document.get_element_by_id(id).is_none() {
            anyhow::bail!("missing {} element #{}", name, id);
        }
    }

    let scroll = ScrollSmoother::init(&window);
    if !scroll.is_active() {
        log::info!("[root] no scroll smoother on page, using native scroll");
    }

    let track = WebTrack::from_document(&document, &config.ids.audio_element)?;
    let view = ChromeView::from_document(&document, &config.ids)?;
    let markers = DomMarkers::new(&document);

    let hover_target = match dom::measure_hover_target(&document, &config.ids.title) {
        Ok(t) => {
            log::info!("[pointer] hover band top={:.0} height={:.0}", t.top_offset, t.height);
            Some(t)
        }
        Err(e) => {
            log::warn!("[pointer] {}; hover disabled", e);
            None
        }
    };

    let audio_el = track.element().clone();

    let shared = Rc::new(RefCell::new(Shared {
        chrome: Chrome::new(config),
        track,
        markers,
        view,
        clock,
    }));

    let mut listeners = Vec::with_capacity(7);
    listeners.push(events::wire_pointer_move(&window, &shared)?);
    listeners.extend(events::wire_click_handlers(&window, &document, &shared, &config.ids)?);
    listeners.extend(events::wire_media_state(&audio_el, &shared)?);

    let frame = FrameLoop::start(&window, &shared)?;

    {
        let mut guard = shared.borrow_mut();
        let s = &mut *guard;
        std::mem::swap(&mut s.chrome, chrome);
        s.chrome.attach(hover_target, &mut s.markers, &mut s.track);
    }
    update(&shared, |_| {});

    Ok(Mounted {
        _listeners: listeners,
        _frame: frame,
        _scroll: scroll,
        shared,
    })
}
