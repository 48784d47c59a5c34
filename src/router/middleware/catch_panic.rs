use std::{
    any::Any,
    backtrace::Backtrace,
    cell::RefCell,
    fmt,
    panic::AssertUnwindSafe,
    pin::Pin,
    sync::OnceLock,
};

use axum::{
    body::{Body, BoxBody},
    extract::State,
    http::{Request, Response},
    middleware::{FromFnLayer, Next},
};
use futures::{Future, FutureExt};
use tracing_error::SpanTrace;

use super::RequestMetadata;

#[derive(Debug)]
pub struct CaughtPanic {
    payload: Box<dyn Any + Send + 'static>,
    info: PanicInfo,
}

impl CaughtPanic {
    pub fn payload_str(&self) -> Option<&str> {
        if let Some(s) = self.payload.downcast_ref::<String>() {
            Some(s.as_str())
        } else if let Some(s) = self.payload.downcast_ref::<&str>() {
            Some(s)
        } else {
            None
        }
    }

    pub fn location(&self) -> Option<&Location> {
        self.info.location.as_ref()
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.info.backtrace
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.info.span_trace
    }
}

#[derive(Debug)]
struct PanicInfo {
    location: Option<Location>,
    backtrace: Backtrace,
    span_trace: SpanTrace,
}

impl PanicInfo {
    /// Used when the panic hook did not record anything, e.g. because another
    /// hook replaced ours.
    fn unrecorded() -> Self {
        Self {
            location: None,
            backtrace: Backtrace::capture(),
            span_trace: SpanTrace::capture(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    file: String,
    line: u32,
    column: u32,
}

impl Location {
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

impl<'a> From<&'a std::panic::Location<'a>> for Location {
    fn from(location: &'a std::panic::Location<'a>) -> Self {
        Self {
            file: location.file().to_string(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}:{}:{}", self.file, self.line, self.column)
    }
}

thread_local! {
    /// The most recent panic on this thread, written by the panic hook and
    /// taken by the middleware on the same thread once the panic is caught.
    static LAST_PANIC: RefCell<Option<PanicInfo>> = RefCell::new(None);
}

static PANIC_HOOK: OnceLock<()> = OnceLock::new();

/// Chains a hook recording panic details in [`LAST_PANIC`] in front of the
/// current one. Only the first call has any effect.
fn install_panic_hook() {
    PANIC_HOOK.get_or_init(|| {
        let previous_hook = std::panic::take_hook();

        std::panic::set_hook(Box::new(move |info| {
            let recorded = PanicInfo {
                location: info.location().map(Location::from),
                backtrace: Backtrace::force_capture(),
                span_trace: SpanTrace::capture(),
            };

            // Slot is unavailable during thread teardown.
            let _ = LAST_PANIC.try_with(|slot| {
                if let Ok(mut slot) = slot.try_borrow_mut() {
                    *slot = Some(recorded);
                }
            });

            previous_hook(info)
        }));
    });
}

fn take_last_panic() -> PanicInfo {
    LAST_PANIC
        .try_with(|slot| slot.borrow_mut().take())
        .ok()
        .flatten()
        .unwrap_or_else(PanicInfo::unrecorded)
}

pub type CatchPanicHandler = fn(RequestMetadata, CaughtPanic) -> Response<BoxBody>;

type CatchPanicFn = fn(
    State<CatchPanicHandler>,
    RequestMetadata,
    Request<Body>,
    Next<Body>,
) -> Pin<Box<dyn Future<Output = Response<BoxBody>> + Send + 'static>>;

/// Layer turning panics in inner services into `handler`'s response.
///
/// The process wide panic hook is installed on first use and shared by every
/// layer built afterwards.
pub fn catch_panic_layer<T>(
    handler: CatchPanicHandler,
) -> FromFnLayer<CatchPanicFn, CatchPanicHandler, T> {
    install_panic_hook();

    axum::middleware::from_fn_with_state(handler, catch_panic as CatchPanicFn)
}

/// Like [`tower_http::catch_panic::CatchPanicLayer`], but hands the request
/// metadata and the recorded location, backtrace and span trace to the
/// handler.
fn catch_panic(
    State(handler): State<CatchPanicHandler>,
    request_meta: RequestMetadata,
    req: Request<Body>,
    next: Next<Body>,
) -> Pin<Box<dyn Future<Output = Response<BoxBody>> + Send + 'static>> {
    Box::pin(async move {
        // Panics while building the future, then while polling it. Either way
        // the hook ran on the thread that observes the unwind.
        let payload = match std::panic::catch_unwind(AssertUnwindSafe(move || next.run(req))) {
            Ok(future) => match AssertUnwindSafe(future).catch_unwind().await {
                Ok(response) => return response,
                Err(payload) => payload,
            },
            Err(payload) => payload,
        };

        let info = take_last_panic();

        handler(request_meta, CaughtPanic { payload, info })
    })
}
