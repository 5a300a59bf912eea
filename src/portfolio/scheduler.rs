//! Loader for the third-party scheduling embed.
//!
//! The embed is driven through [`EmbedBackend`], so the loader itself never
//! touches globals. Calls issued before the remote script has loaded are kept
//! in a FIFO queue and replayed, in order, once it reports `load`.

use std::collections::VecDeque;

use serde_json::{json, Value};
use thiserror::Error;

use super::contact::LocalFuture;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmbedError {
    #[error("no browser window available")]
    NoWindow,
    #[error("couldn't inject embed script: {0}")]
    ScriptInjection(String),
    #[error("embed script failed to load")]
    ScriptLoad,
    #[error("embed handle missing")]
    MissingHandle,
    #[error("embed call failed: {0}")]
    Dispatch(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmbedCall {
    Init {
        namespace: String,
        origin: String,
    },
    Inline {
        namespace: String,
        element_or_selector: String,
        config: Value,
        cal_link: String,
    },
    Ui {
        namespace: String,
        config: Value,
    },
}

impl EmbedCall {
    pub fn namespace(&self) -> &str {
        match self {
            Self::Init { namespace, .. }
            | Self::Inline { namespace, .. }
            | Self::Ui { namespace, .. } => namespace,
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::Inline { .. } => "inline",
            Self::Ui { .. } => "ui",
        }
    }

    /// The object argument as the embed API expects it.
    pub fn payload(&self) -> Value {
        match self {
            Self::Init { origin, .. } => json!({ "origin": origin }),
            Self::Inline {
                element_or_selector,
                config,
                cal_link,
                ..
            } => json!({
                "elementOrSelector": element_or_selector,
                "config": config,
                "calLink": cal_link,
            }),
            Self::Ui { config, .. } => config.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerConfig {
    pub script_url: String,
    pub origin: String,
    pub namespace: String,
    pub cal_link: String,
    pub container_id: String,
    pub inline_config: Value,
    pub ui_config: Value,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            script_url: "https://app.cal.com/embed/embed.js".to_string(),
            origin: "https://app.cal.com".to_string(),
            namespace: "30min".to_string(),
            cal_link: "kunal-bhandari/30min".to_string(),
            container_id: "cal-embed-container".to_string(),
            inline_config: json!({ "layout": "month_view" }),
            ui_config: json!({ "hideEventTypeDetails": false, "layout": "month_view" }),
        }
    }
}

impl SchedulerConfig {
    /// `init`, `inline` and `ui`, in the order the embed needs them.
    pub fn init_sequence(&self) -> [EmbedCall; 3] {
        [
            EmbedCall::Init {
                namespace: self.namespace.clone(),
                origin: self.origin.clone(),
            },
            EmbedCall::Inline {
                namespace: self.namespace.clone(),
                element_or_selector: format!("#{}", self.container_id),
                config: self.inline_config.clone(),
                cal_link: self.cal_link.clone(),
            },
            EmbedCall::Ui {
                namespace: self.namespace.clone(),
                config: self.ui_config.clone(),
            },
        ]
    }
}

/// The page-side half of the embed: script injection and the embed's call surface.
pub trait EmbedBackend {
    /// Whether the embed's global handle is already on the page.
    fn handle_present(&self) -> bool;
    /// Install the queuing handle if there is none and add the script tag.
    /// The returned future resolves on the script's `load` event.
    fn inject_script(&mut self, src: &str)
        -> Result<LocalFuture<Result<(), EmbedError>>, EmbedError>;
    /// Remove the handle and script tag left behind by a failed load.
    fn discard_handle(&mut self);
    fn dispatch(&mut self, call: &EmbedCall) -> Result<(), EmbedError>;
    fn forget_namespace(&mut self, namespace: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Absent,
    Loading,
    Ready,
}

pub enum Mount {
    /// The init sequence has been dispatched.
    Ready,
    /// The script was just injected; await this, then report back with
    /// [`WidgetLoader::script_loaded`] or [`WidgetLoader::script_failed`].
    Pending(LocalFuture<Result<(), EmbedError>>),
    /// Another mount is already waiting for the script; calls were queued.
    Queued,
}

pub struct WidgetLoader<B> {
    backend: B,
    status: LoadStatus,
    queue: VecDeque<EmbedCall>,
}

impl<B: EmbedBackend> WidgetLoader<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            status: LoadStatus::Absent,
            queue: VecDeque::new(),
        }
    }

    pub fn mount(&mut self, config: &SchedulerConfig) -> Result<Mount, EmbedError> {
        if self.status == LoadStatus::Absent && self.backend.handle_present() {
            log::debug!("embed handle already present, skipping injection");
            self.status = LoadStatus::Ready;
        }
        match self.status {
            LoadStatus::Ready => {
                for call in config.init_sequence() {
                    self.backend.dispatch(&call)?;
                }
                Ok(Mount::Ready)
            }
            LoadStatus::Loading => {
                self.queue.extend(config.init_sequence());
                Ok(Mount::Queued)
            }
            LoadStatus::Absent => {
                let loaded = self.backend.inject_script(&config.script_url)?;
                log::info!("injected scheduling embed from {}", config.script_url);
                self.status = LoadStatus::Loading;
                self.queue.extend(config.init_sequence());
                Ok(Mount::Pending(loaded))
            }
        }
    }

    /// Mark the script loaded and replay everything queued so far. Returns
    /// how many calls went through.
    pub fn script_loaded(&mut self) -> usize {
        self.status = LoadStatus::Ready;
        let mut replayed = 0;
        while let Some(call) = self.queue.pop_front() {
            match self.backend.dispatch(&call) {
                Ok(()) => replayed += 1,
                Err(e) => log::warn!("embed {} for {}: {e}", call.method(), call.namespace()),
            }
        }
        replayed
    }

    pub fn script_failed(&mut self, err: EmbedError) {
        log::warn!("scheduling embed unavailable: {err}");
        self.status = LoadStatus::Absent;
        self.queue.clear();
        // otherwise the next mount mistakes the leftover shim for a loaded embed
        self.backend.discard_handle();
    }

    /// Drop everything belonging to `namespace`, queued or registered.
    pub fn unmount(&mut self, namespace: &str) {
        self.queue.retain(|c| c.namespace() != namespace);
        self.backend.forget_namespace(namespace);
    }
}

#[cfg(test)]
impl<B: EmbedBackend> WidgetLoader<B> {
    fn status(&self) -> LoadStatus {
        self.status
    }

    fn backend(&self) -> &B {
        &self.backend
    }

    fn pending(&self) -> impl Iterator<Item = &EmbedCall> {
        self.queue.iter()
    }

    /// Run `call` now if the script is ready, otherwise queue it.
    fn call(&mut self, call: EmbedCall) -> Result<(), EmbedError> {
        match self.status {
            LoadStatus::Ready => self.backend.dispatch(&call),
            LoadStatus::Loading | LoadStatus::Absent => {
                self.queue.push_back(call);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeEmbed {
        present: bool,
        injected: Vec<String>,
        dispatched: Vec<EmbedCall>,
        forgotten: Vec<String>,
        discarded: usize,
        fail_injection: bool,
    }

    impl EmbedBackend for FakeEmbed {
        fn handle_present(&self) -> bool {
            self.present
        }

        fn inject_script(
            &mut self,
            src: &str,
        ) -> Result<LocalFuture<Result<(), EmbedError>>, EmbedError> {
            if self.fail_injection {
                return Err(EmbedError::ScriptInjection("no head".to_string()));
            }
            // the shim goes up with the script tag
            self.present = true;
            self.injected.push(src.to_string());
            Ok(Box::pin(async { Ok(()) }))
        }

        fn discard_handle(&mut self) {
            self.present = false;
            self.discarded += 1;
        }

        fn dispatch(&mut self, call: &EmbedCall) -> Result<(), EmbedError> {
            self.dispatched.push(call.clone());
            Ok(())
        }

        fn forget_namespace(&mut self, namespace: &str) {
            self.forgotten.push(namespace.to_string());
        }
    }

    fn methods(calls: &[EmbedCall]) -> Vec<&'static str> {
        calls.iter().map(|c| c.method()).collect()
    }

    #[test]
    fn test_first_mount_injects_and_queues() {
        let config = SchedulerConfig::default();
        let mut loader = WidgetLoader::new(FakeEmbed::default());

        let mount = loader.mount(&config).unwrap();
        assert!(matches!(mount, Mount::Pending(_)));
        assert_eq!(loader.status(), LoadStatus::Loading);
        assert_eq!(loader.backend().injected, vec![config.script_url.clone()]);
        assert!(loader.backend().dispatched.is_empty());
        assert_eq!(loader.pending().count(), 3);
    }

    #[test]
    fn test_replay_is_fifo() {
        let config = SchedulerConfig::default();
        let mut loader = WidgetLoader::new(FakeEmbed::default());
        let _ = loader.mount(&config).unwrap();

        let extra = EmbedCall::Ui {
            namespace: "30min".to_string(),
            config: json!({ "theme": "dark" }),
        };
        loader.call(extra.clone()).unwrap();
        assert!(loader.backend().dispatched.is_empty());

        assert_eq!(loader.script_loaded(), 4);
        let dispatched = &loader.backend().dispatched;
        assert_eq!(methods(dispatched), vec!["init", "inline", "ui", "ui"]);
        assert_eq!(dispatched[3], extra);
        assert_eq!(loader.pending().count(), 0);
    }

    #[test]
    fn test_script_injected_once() {
        let config = SchedulerConfig::default();
        let mut loader = WidgetLoader::new(FakeEmbed::default());

        assert!(matches!(loader.mount(&config).unwrap(), Mount::Pending(_)));
        assert!(matches!(loader.mount(&config).unwrap(), Mount::Queued));
        loader.script_loaded();
        assert!(matches!(loader.mount(&config).unwrap(), Mount::Ready));

        assert_eq!(loader.backend().injected.len(), 1);
        assert_eq!(loader.backend().dispatched.len(), 9);
    }

    #[test]
    fn test_existing_handle_inits_immediately() {
        let config = SchedulerConfig::default();
        let mut loader = WidgetLoader::new(FakeEmbed {
            present: true,
            ..Default::default()
        });

        assert!(matches!(loader.mount(&config).unwrap(), Mount::Ready));
        assert!(loader.backend().injected.is_empty());
        assert_eq!(
            methods(&loader.backend().dispatched),
            vec!["init", "inline", "ui"]
        );
    }

    #[test]
    fn test_unmount_drops_namespace() {
        let config = SchedulerConfig::default();
        let mut loader = WidgetLoader::new(FakeEmbed::default());
        let _ = loader.mount(&config).unwrap();
        let other = EmbedCall::Init {
            namespace: "15min".to_string(),
            origin: config.origin.clone(),
        };
        loader.call(other.clone()).unwrap();

        loader.unmount("30min");
        assert_eq!(loader.pending().collect::<Vec<_>>(), vec![&other]);
        assert_eq!(loader.backend().forgotten, vec!["30min".to_string()]);

        // a load after the section went away only replays what's left
        assert_eq!(loader.script_loaded(), 1);
        assert_eq!(loader.backend().dispatched, vec![other]);
    }

    #[test]
    fn test_failed_load_allows_retry() {
        let config = SchedulerConfig::default();
        let mut loader = WidgetLoader::new(FakeEmbed::default());
        let _ = loader.mount(&config).unwrap();

        loader.script_failed(EmbedError::ScriptLoad);
        assert_eq!(loader.status(), LoadStatus::Absent);
        assert_eq!(loader.pending().count(), 0);

        assert_eq!(loader.backend().discarded, 1);
        assert!(!loader.backend().present);

        assert!(matches!(loader.mount(&config).unwrap(), Mount::Pending(_)));
        assert_eq!(loader.backend().injected.len(), 2);
        assert!(loader.backend().dispatched.is_empty());
    }

    #[test]
    fn test_injection_error_leaves_loader_absent() {
        let config = SchedulerConfig::default();
        let mut loader = WidgetLoader::new(FakeEmbed {
            fail_injection: true,
            ..Default::default()
        });
        let res = loader.mount(&config);
        assert!(matches!(res, Err(EmbedError::ScriptInjection(_))));
        assert_eq!(loader.status(), LoadStatus::Absent);
        assert_eq!(loader.pending().count(), 0);
    }

    #[test]
    fn test_payload_shape() {
        let [init, inline, ui] = SchedulerConfig::default().init_sequence();
        assert_eq!(init.payload(), json!({ "origin": "https://app.cal.com" }));
        assert_eq!(
            inline.payload(),
            json!({
                "elementOrSelector": "#cal-embed-container",
                "config": { "layout": "month_view" },
                "calLink": "kunal-bhandari/30min",
            })
        );
        assert_eq!(
            ui.payload(),
            json!({ "hideEventTypeDetails": false, "layout": "month_view" })
        );
        assert_eq!(ui.namespace(), "30min");
    }

    #[tokio::test]
    async fn test_pending_future_resolves() {
        let mut loader = WidgetLoader::new(FakeEmbed::default());
        let Mount::Pending(loaded) = loader.mount(&SchedulerConfig::default()).unwrap() else {
            panic!("first mount should inject");
        };
        assert_eq!(loaded.await, Ok(()));
        assert_eq!(loader.script_loaded(), 3);
    }
}
