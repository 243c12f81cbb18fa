//! Interrupt handling
//!
//! Ctrl+C does not kill the process from inside the signal handler. The
//! handler only raises a flag, and a Bevy system turns that flag into an
//! `AppExit` with status 1 so the event loop unwinds normally.
//!
//! While idle the loop sleeps for the whole slow period, so the handler also
//! wakes it through the winit event loop proxy once one is registered.

use anyhow::{Context, Result};
use bevy::prelude::*;
use bevy::winit::{EventLoopProxyWrapper, WakeUp};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Exit status reported after an interrupt
pub const INTERRUPT_EXIT_CODE: u8 = 1;

type Waker = Box<dyn Fn() + Send>;

/// Shared flag raised by the interrupt handler
#[derive(Resource, Clone, Default)]
pub struct ShutdownRequest {
    requested: Arc<AtomicBool>,
    waker: Arc<Mutex<Option<Waker>>>,
}

impl ShutdownRequest {
    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
        if let Ok(waker) = self.waker.lock() {
            if let Some(wake) = waker.as_ref() {
                wake();
            }
        }
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Sets the callback that wakes the event loop on [`Self::request`]
    pub fn set_waker(&self, wake: impl Fn() + Send + 'static) {
        if let Ok(mut waker) = self.waker.lock() {
            *waker = Some(Box::new(wake));
        }
    }

    pub fn has_waker(&self) -> bool {
        self.waker.lock().is_ok_and(|waker| waker.is_some())
    }
}

impl fmt::Debug for ShutdownRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShutdownRequest")
            .field("requested", &self.is_requested())
            .field("has_waker", &self.has_waker())
            .finish()
    }
}

/// Installs the process-wide Ctrl+C handler.
///
/// Must run before Bevy's default plugins are added so that Bevy's own
/// handler, which would exit with status 0, finds the slot taken.
pub fn install_interrupt_handler() -> Result<ShutdownRequest> {
    let request = ShutdownRequest::default();
    let handler_request = request.clone();
    ctrlc::set_handler(move || handler_request.request())
        .context("Failed to install the Ctrl+C handler")?;
    Ok(request)
}

/// Hands the winit event loop proxy to the interrupt handler.
///
/// Headless apps have no proxy; their interrupts are seen on the next update.
pub fn register_interrupt_waker(
    request: Res<ShutdownRequest>,
    proxy: Option<Res<EventLoopProxyWrapper<WakeUp>>>,
) {
    let Some(proxy) = proxy else {
        debug!("No event loop proxy, interrupts wait for the next wake-up");
        return;
    };
    let proxy = (**proxy).clone();
    request.set_waker(move || {
        // Fails only once the loop is gone, which is the goal anyway
        let _ = proxy.send_event(WakeUp);
    });
}

/// Requests loop termination once an interrupt was received
pub fn exit_on_interrupt(request: Res<ShutdownRequest>, mut exit: EventWriter<AppExit>) {
    if request.is_requested() {
        info!("Interrupt received, shutting down");
        exit.write(AppExit::from_code(INTERRUPT_EXIT_CODE));
    }
}

/// Requests a normal exit when Escape is pressed while the overlay has focus
pub fn exit_on_esc(keyboard_input: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

pub struct ShutdownPlugin {
    pub request: ShutdownRequest,
}

impl Plugin for ShutdownPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.request.clone())
            .add_event::<AppExit>()
            .add_systems(Startup, register_interrupt_waker)
            .add_systems(Last, exit_on_interrupt);
    }
}
