use anyhow::{anyhow, Result};
use futures::channel::oneshot;
use std::path::PathBuf;

use super::gltf::{load_animation_clips, load_model, ModelData};
use crate::animation::AnimationClip;

/// Result of a background load, resolved exactly once
pub struct PendingAsset<T> {
    label: String,
    receiver: Option<oneshot::Receiver<Result<T>>>,
}

impl<T: Send + 'static> PendingAsset<T> {
    /// Runs `load` on a worker thread
    pub fn spawn<F>(label: impl Into<String>, load: F) -> Self
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let label = label.into();
        let (sender, receiver) = oneshot::channel();
        let thread_label = label.clone();

        let spawned = std::thread::Builder::new()
            .name(format!("load {}", label))
            .spawn(move || {
                if sender.send(load()).is_err() {
                    log::debug!("{} finished after its receiver was dropped", thread_label);
                }
            });

        match spawned {
            Ok(_) => Self {
                label,
                receiver: Some(receiver),
            },
            Err(e) => Self::failed(label, anyhow!("failed to spawn loader thread: {}", e)),
        }
    }

    /// An asset that is already available
    pub fn ready(label: impl Into<String>, value: Result<T>) -> Self {
        let (sender, receiver) = oneshot::channel();
        // The receiver is alive, so this cannot fail
        let _ = sender.send(value);
        Self {
            label: label.into(),
            receiver: Some(receiver),
        }
    }

    fn failed(label: String, error: anyhow::Error) -> Self {
        Self::ready(label, Err(error))
    }
}

impl<T> PendingAsset<T> {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Non-blocking check; yields the result the first time it is available
    pub fn poll(&mut self) -> Option<Result<T>> {
        let receiver = self.receiver.as_mut()?;
        match receiver.try_recv() {
            Ok(None) => None,
            Ok(Some(result)) => {
                self.receiver = None;
                Some(result)
            }
            Err(oneshot::Canceled) => {
                self.receiver = None;
                Some(Err(anyhow!("loader for {} stopped without a result", self.label)))
            }
        }
    }

    /// Blocks until the result arrives; `None` if it was already taken
    pub fn wait(&mut self) -> Option<Result<T>> {
        let receiver = self.receiver.take()?;
        Some(match futures::executor::block_on(receiver) {
            Ok(result) => result,
            Err(oneshot::Canceled) => Err(anyhow!("loader for {} stopped without a result", self.label)),
        })
    }
}

/// Starts model and animation loads relative to a base directory
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base: PathBuf,
}

impl AssetLoader {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn resolve(&self, file: &str) -> PathBuf {
        self.base.join(file)
    }

    pub fn load_model(&self, file: &str) -> PendingAsset<ModelData> {
        let path = self.resolve(file);
        PendingAsset::spawn(file, move || load_model(path))
    }

    pub fn load_animations(&self, file: &str) -> PendingAsset<Vec<AnimationClip>> {
        let path = self.resolve(file);
        PendingAsset::spawn(file, move || load_animation_clips(path))
    }
}
