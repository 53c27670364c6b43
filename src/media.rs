use crate::audio::MediaTrack;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `MediaTrack` over the page's looping `<audio>` element.
pub struct WebTrack {
    el: web::HtmlAudioElement,
    source: Option<web::Element>,
    pending_play: Option<js_sys::Promise>,
}

impl WebTrack {
    pub fn from_document(document: &web::Document, id: &str) -> anyhow::Result<Self> {
        let el = document
            .get_element_by_id(id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
            .dyn_into::<web::HtmlAudioElement>()
            .map_err(|e| anyhow::anyhow!(format!("#{} is not an <audio>: {:?}", id, e)))?;
        el.set_loop(true);
        let source = el.query_selector("source").ok().flatten();
        Ok(Self {
            el,
            source,
            pending_play: None,
        })
    }

    #[inline]
    pub fn element(&self) -> &web::HtmlAudioElement {
        &self.el
    }

    /// Promise of the last `play()` call, if nobody has picked it up yet.
    pub fn take_pending_play(&mut self) -> Option<js_sys::Promise> {
        self.pending_play.take()
    }
}

impl MediaTrack for WebTrack {
    fn is_paused(&self) -> bool {
        self.el.paused()
    }

    fn request_play(&mut self) {
        match self.el.play() {
            Ok(p) => self.pending_play = Some(p),
            Err(e) => log::warn!("[audio] play() threw: {:?}", e),
        }
    }

    fn request_pause(&mut self) {
        if let Err(e) = self.el.pause() {
            log::warn!("[audio] pause() threw: {:?}", e);
        }
    }

    fn source(&self) -> Option<String> {
        match &self.source {
            Some(s) => s.get_attribute("src"),
            None => Some(self.el.src()).filter(|s| !s.is_empty()),
        }
    }

    fn set_source(&mut self, url: &str) {
        match &self.source {
            Some(s) => {
                _ = s.set_attribute("src", url);
                // A paused element can reload safely; a playing one keeps its
                // current stream until the next load.
                if self.el.paused() {
                    self.el.load();
                }
            }
            None => self.el.set_src(url),
        }
    }
}
