use std::sync::mpsc::Receiver;
use std::sync::Arc;

/// Receives run-progress notifications in `[0, 1]`.
///
/// Listeners may be notified from any thread.
pub trait ProgressListener: Send + Sync {
    fn on_progress(&self, progress: f64);
}

/// Fans run progress out to registered listeners.
#[derive(Default)]
pub struct ProgressPublisher {
    listeners: Vec<Arc<dyn ProgressListener>>,
    last: f64,
}

impl ProgressPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Arc<dyn ProgressListener>) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Last published progress value.
    pub fn progress(&self) -> f64 {
        self.last
    }

    /// Publish `progress`, clamped to `[0, 1]`.
    pub fn publish(&mut self, progress: f64) {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        if progress < self.last {
            log::warn!("Progress moved backwards from {:.4} to {:.4}", self.last, progress);
        }
        self.last = progress;
        for listener in &self.listeners {
            listener.on_progress(progress);
        }
    }

    /// Publish the progress of `generation` out of `generations`.
    pub fn publish_generation(&mut self, generation: usize, generations: usize) {
        if generations == 0 {
            return;
        }
        self.publish(generation as f64 / generations as f64);
    }

    /// Publish every progress message waiting on `receiver` and return how
    /// many were forwarded.
    pub fn drain(&mut self, receiver: &Receiver<f64>) -> usize {
        let mut forwarded = 0;
        while let Ok(progress) = receiver.try_recv() {
            self.publish(progress);
            forwarded += 1;
        }
        forwarded
    }
}
