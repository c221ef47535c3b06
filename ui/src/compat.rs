//! Per-platform shims.
//!
//! Only one thing differs between targets here: handing a URI such as
//! `tel:19888` to whatever the host uses to open it. Every target exports
//! the same two items, `ROUTE` and `open_uri`.

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use self::wasm32::*;

#[cfg(target_os = "android")]
pub use self::android::*;

#[cfg(not(any(target_arch = "wasm32", target_os = "android")))]
pub use self::native::*;

/// How a URI leaves the app on the current target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriRoute {
    /// The page navigates to it; the browser picks the handler.
    Browser,
    /// An `Intent` is started from the app's activity.
    AndroidIntent,
    /// The OS scheme handler (`open` crate; `UIApplication` on iOS).
    OsHandler,
}

/// # WebAssembly Implementation
/// Navigating the page to a `tel:` URI hands it to the browser's dialer.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod wasm32 {
    use dioxus_logger::tracing::warn;

    use super::UriRoute;

    pub const ROUTE: UriRoute = UriRoute::Browser;

    pub fn open_uri(uri: &str) {
        let Some(window) = web_sys::window() else {
            warn!("no window; cannot open {uri}");
            return;
        };
        if let Err(e) = window.location().set_href(uri) {
            warn!("failed to open {uri}: {e:?}");
        }
    }
}

/// # Android Implementation
/// The webview would try to load `tel:` itself, so the intent is started
/// directly: `ACTION_DIAL` for `tel:`, `ACTION_VIEW` for anything else.
#[cfg(target_os = "android")]
mod android {
    use dioxus_logger::tracing::warn;
    use jni::objects::JObject;
    use jni::objects::JValue;
    use jni::JavaVM;

    use super::UriRoute;

    pub const ROUTE: UriRoute = UriRoute::AndroidIntent;

    const ACTION_DIAL: &str = "android.intent.action.DIAL";
    const ACTION_VIEW: &str = "android.intent.action.VIEW";
    const FLAG_ACTIVITY_NEW_TASK: i32 = 0x1000_0000;

    pub fn open_uri(uri: &str) {
        if let Err(e) = start_activity(uri) {
            warn!("failed to open {uri}: {e}");
        }
    }

    fn start_activity(uri: &str) -> jni::errors::Result<()> {
        let ctx = ndk_context::android_context();
        // SAFETY: ndk-context holds the process JavaVM and the activity for
        // as long as the app runs.
        let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }?;
        let context = unsafe { JObject::from_raw(ctx.context().cast()) };
        let mut env = vm.attach_current_thread()?;

        let action = if uri.starts_with("tel:") {
            ACTION_DIAL
        } else {
            ACTION_VIEW
        };

        let mut launch = || -> jni::errors::Result<()> {
            let action = env.new_string(action)?;
            let uri = env.new_string(uri)?;
            let parsed = env
                .call_static_method(
                    "android/net/Uri",
                    "parse",
                    "(Ljava/lang/String;)Landroid/net/Uri;",
                    &[JValue::Object(&uri)],
                )?
                .l()?;
            let intent = env.new_object(
                "android/content/Intent",
                "(Ljava/lang/String;Landroid/net/Uri;)V",
                &[JValue::Object(&action), JValue::Object(&parsed)],
            )?;
            // needed when the context is not an activity
            env.call_method(
                &intent,
                "addFlags",
                "(I)Landroid/content/Intent;",
                &[JValue::Int(FLAG_ACTIVITY_NEW_TASK)],
            )?;
            env.call_method(
                &context,
                "startActivity",
                "(Landroid/content/Intent;)V",
                &[JValue::Object(&intent)],
            )?;
            Ok(())
        };
        let result = launch();

        // ActivityNotFoundException when no dialer is installed.
        if env.exception_check()? {
            env.exception_clear()?;
        }
        result
    }
}

/// # Desktop and iOS Implementation
/// Defers to the OS handler registered for the scheme.
#[cfg(not(any(target_arch = "wasm32", target_os = "android")))]
mod native {
    use dioxus_logger::tracing::warn;

    use super::UriRoute;

    pub const ROUTE: UriRoute = UriRoute::OsHandler;

    pub fn open_uri(uri: &str) {
        if let Err(e) = open::that(uri) {
            warn!("failed to open {uri}: {e}");
        }
    }
}
