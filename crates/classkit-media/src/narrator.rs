//! Background narration with an explicit completion signal.
//!
//! Speech synthesis can take seconds, so it runs on a worker thread and
//! the front-end stays responsive. Each narration returns a handle whose
//! channel is closed when the utterance finishes; sequencing a sound
//! effect after speech is a `wait()` on the handle rather than polling
//! thread liveness. Cancellation is best-effort: starting a new narration
//! flags the previous worker to stop and asks the synth to cut the current
//! utterance, without guaranteeing immediate termination.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use crate::audio::SpeechSynth;

/// Handle to one in-flight narration.
pub struct NarrationHandle {
    done: mpsc::Receiver<()>,
}

impl NarrationHandle {
    /// Block until the narration finishes (or was cancelled).
    pub fn wait(self) {
        // a closed channel means the worker is gone either way
        let _ = self.done.recv();
    }

    /// Non-blocking completion check.
    pub fn is_done(&self) -> bool {
        match self.done.try_recv() {
            Ok(()) => true,
            Err(mpsc::TryRecvError::Disconnected) => true,
            Err(mpsc::TryRecvError::Empty) => false,
        }
    }
}

/// Runs narrations on background worker threads, one at a time.
pub struct Narrator {
    synth: Arc<dyn SpeechSynth>,
    // The only state shared across threads: whether a worker is currently
    // speaking. Everything else is owned by one thread at a time.
    speaking: Arc<AtomicBool>,
    cancel: Option<Arc<AtomicBool>>,
}

impl Narrator {
    pub fn new(synth: Arc<dyn SpeechSynth>) -> Self {
        Self {
            synth,
            speaking: Arc::new(AtomicBool::new(false)),
            cancel: None,
        }
    }

    /// Start narrating `text` on a worker thread.
    ///
    /// Any previous narration is asked to stop first. The returned handle
    /// signals completion; dropping it is fine for fire-and-forget use.
    pub fn narrate(&mut self, text: &str) -> NarrationHandle {
        self.stop();

        let cancel = Arc::new(AtomicBool::new(false));
        self.cancel = Some(Arc::clone(&cancel));

        let (tx, rx) = mpsc::channel();
        let synth = Arc::clone(&self.synth);
        let speaking = Arc::clone(&self.speaking);
        let text = text.to_owned();

        thread::spawn(move || {
            if !cancel.load(Ordering::SeqCst) {
                speaking.store(true, Ordering::SeqCst);
                if let Err(e) = synth.speak(&text) {
                    tracing::warn!("speech synthesis failed: {e:#}");
                }
                speaking.store(false, Ordering::SeqCst);
            }
            // Receiver may already be dropped for fire-and-forget callers.
            let _ = tx.send(());
        });

        NarrationHandle { done: rx }
    }

    /// Request the current narration to stop. Best-effort: a worker that
    /// has already started speaking finishes whatever the synth cannot cut.
    pub fn stop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.store(true, Ordering::SeqCst);
            self.synth.stop();
        }
    }

    /// Whether a worker is speaking right now.
    pub fn is_speaking(&self) -> bool {
        self.speaking.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records spoken texts; optionally blocks until released.
    struct RecordingSynth {
        spoken: Mutex<Vec<String>>,
        gate: Option<Mutex<mpsc::Receiver<()>>>,
    }

    impl RecordingSynth {
        fn new() -> Self {
            Self {
                spoken: Mutex::new(Vec::new()),
                gate: None,
            }
        }

        fn gated() -> (Self, mpsc::Sender<()>) {
            let (tx, rx) = mpsc::channel();
            (
                Self {
                    spoken: Mutex::new(Vec::new()),
                    gate: Some(Mutex::new(rx)),
                },
                tx,
            )
        }
    }

    impl SpeechSynth for RecordingSynth {
        fn speak(&self, text: &str) -> Result<()> {
            if let Some(gate) = &self.gate {
                let _ = gate.lock().unwrap().recv();
            }
            self.spoken.lock().unwrap().push(text.to_string());
            Ok(())
        }

        fn stop(&self) {}
    }

    #[test]
    fn wait_blocks_until_spoken() {
        let synth = Arc::new(RecordingSynth::new());
        let mut narrator = Narrator::new(Arc::clone(&synth) as Arc<dyn SpeechSynth>);

        narrator.narrate("knock knock").wait();
        assert_eq!(*synth.spoken.lock().unwrap(), vec!["knock knock"]);
        assert!(!narrator.is_speaking());
    }

    #[test]
    fn sequential_narrations_complete_in_order() {
        let synth = Arc::new(RecordingSynth::new());
        let mut narrator = Narrator::new(Arc::clone(&synth) as Arc<dyn SpeechSynth>);

        narrator.narrate("setup").wait();
        narrator.narrate("punchline").wait();
        assert_eq!(*synth.spoken.lock().unwrap(), vec!["setup", "punchline"]);
    }

    #[test]
    fn is_speaking_while_worker_is_busy() {
        let (synth, release) = RecordingSynth::gated();
        let synth = Arc::new(synth);
        let mut narrator = Narrator::new(Arc::clone(&synth) as Arc<dyn SpeechSynth>);

        let handle = narrator.narrate("long joke");
        // worker sets the flag once it reaches the synth
        let mut waited = Duration::ZERO;
        while !narrator.is_speaking() && waited < Duration::from_secs(5) {
            thread::sleep(Duration::from_millis(1));
            waited += Duration::from_millis(1);
        }
        assert!(narrator.is_speaking());
        assert!(!handle.is_done());

        release.send(()).unwrap();
        handle.wait();
        assert!(!narrator.is_speaking());
    }

    #[test]
    fn cancelled_before_start_is_skipped() {
        let (synth, release) = RecordingSynth::gated();
        let synth = Arc::new(synth);
        let mut narrator = Narrator::new(Arc::clone(&synth) as Arc<dyn SpeechSynth>);

        let first = narrator.narrate("first");
        let second = narrator.narrate("second");

        // both workers race for the gate; release them both
        release.send(()).unwrap();
        let _ = release.send(());
        first.wait();
        second.wait();

        // the second narration is never cancelled; the first may have been
        let spoken = synth.spoken.lock().unwrap();
        assert!(spoken.contains(&"second".to_string()));
        assert!(spoken.len() <= 2);
    }

    #[test]
    fn dropped_handle_does_not_wedge_the_worker() {
        let synth = Arc::new(RecordingSynth::new());
        let mut narrator = Narrator::new(Arc::clone(&synth) as Arc<dyn SpeechSynth>);

        drop(narrator.narrate("fire and forget"));
        // give the worker a moment, then confirm it ran
        let mut waited = Duration::ZERO;
        while synth.spoken.lock().unwrap().is_empty() && waited < Duration::from_secs(5) {
            thread::sleep(Duration::from_millis(1));
            waited += Duration::from_millis(1);
        }
        assert_eq!(*synth.spoken.lock().unwrap(), vec!["fire and forget"]);
    }
}
