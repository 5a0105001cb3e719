//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use nav_order::{HttpOrderApi, ResolvedConfig};

use crate::models::{Notice, NoticeKind};

/// How long a notice stays on screen
const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Endpoint and CSRF settings read from the page
    config: StoredValue<ResolvedConfig>,
    /// Current notification - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Current notification - write
    set_notice: WriteSignal<Option<Notice>>,
    next_seq: StoredValue<u32>,
}

impl AppContext {
    pub fn new(config: ResolvedConfig) -> Self {
        let (notice, set_notice) = signal(None::<Notice>);
        Self {
            config: StoredValue::new(config),
            notice,
            set_notice,
            next_seq: StoredValue::new(0),
        }
    }

    /// Client for the order endpoint
    pub fn order_api(&self) -> HttpOrderApi {
        HttpOrderApi::new(self.config.get_value())
    }

    /// Show a notice and dismiss it after a few seconds
    pub fn notify(&self, kind: NoticeKind, text: impl Into<String>) {
        let seq = self.next_seq.get_value().wrapping_add(1);
        self.next_seq.set_value(seq);
        self.set_notice.set(Some(Notice { seq, kind, text: text.into() }));

        let set_notice = self.set_notice;
        Timeout::new(NOTICE_TIMEOUT_MS, move || {
            set_notice.update(|current| {
                if current.as_ref().map(|n| n.seq) == Some(seq) {
                    *current = None;
                }
            });
        })
        .forget();
    }

    pub fn dismiss(&self) {
        self.set_notice.set(None);
    }
}
