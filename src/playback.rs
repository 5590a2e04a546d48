use crate::audio::WebAnalyser;
use crate::constants::{EVENT_ENDED, PLAYING_CLASS};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use viz_core::{AnalyserConfig, Analyzer, Playback};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type AnalyserSlot = Rc<RefCell<Option<Analyzer<WebAnalyser>>>>;

pub struct PlaybackWiring {
    pub button: web::Element,
    pub audio: web::HtmlAudioElement,
    pub playback: Rc<RefCell<Playback>>,
    pub analyser: AnalyserSlot,
}

/// Build the analyser on first use; later calls reuse it.
fn ensure_analyser(slot: &AnalyserSlot, audio: &web::HtmlMediaElement) -> anyhow::Result<()> {
    if slot.borrow().is_some() {
        return Ok(());
    }
    let config = AnalyserConfig::default();
    let source = WebAnalyser::connect(audio, &config)?;
    *slot.borrow_mut() = Some(Analyzer::new(source, config)?);
    Ok(())
}

async fn start(audio: web::HtmlAudioElement, playback: Rc<RefCell<Playback>>) {
    let result = match audio.play() {
        Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
        Err(e) => Err(e),
    };
    let mut state = playback.borrow_mut();
    let transition = match result {
        Ok(()) => state.start_resolved(),
        Err(e) => state.start_rejected(format!("{:?}", e)),
    };
    if let Err(e) = transition {
        log::warn!("{}", e);
    }
}

pub fn wire(w: PlaybackWiring) {
    let PlaybackWiring {
        button,
        audio,
        playback,
        analyser,
    } = w;

    {
        let clicked = button.clone();
        let audio = audio.clone();
        let playback = playback.clone();
        dom::add_click_listener(&button, move || {
            _ = clicked.class_list().add_1(PLAYING_CLASS);
            if !playback.borrow_mut().request_start() {
                log::debug!("[playback] already {:?}", playback.borrow().phase());
                return;
            }
            if let Err(e) = ensure_analyser(&analyser, &audio) {
                if let Err(t) = playback.borrow_mut().start_rejected(format!("{:#}", e)) {
                    log::warn!("{}", t);
                }
                return;
            }
            spawn_local(start(audio.clone(), playback.clone()));
        });
    }

    let on_ended_button = button.clone();
    dom::add_listener(&audio, EVENT_ENDED, move || {
        _ = on_ended_button.class_list().remove_1(PLAYING_CLASS);
        if let Err(e) = playback.borrow_mut().ended() {
            log::warn!("{}", e);
        }
    });
}
