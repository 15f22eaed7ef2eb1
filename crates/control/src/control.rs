//! Lifecycle contract between a host runtime and a field control.
//!
//! This module defines the [`FieldControl`] trait every embeddable field
//! widget implements. A control owns only its internal state and the
//! elements it appends to the mount; event routing, rendering cadence, and
//! output collection all belong to the host.

use crossterm::event::KeyEvent;
use splitfield_types::Outputs;

use crate::context::Context;
use crate::host::HostServices;
use crate::mount::Mount;

/// A field control driven entirely by its host.
///
/// # Lifecycle
///
/// 1. **Initialization**: `init()` runs exactly once per mounted instance
///    and builds the control's element tree
/// 2. **Host refresh**: `update_view()` runs whenever the host re-syncs
///    bound values or layout
/// 3. **Output collection**: `outputs()` is pulled by the host after the
///    control signals [`HostServices::output_changed`]
/// 4. **Teardown**: `destroy()` runs once before the host discards the
///    instance
///
/// Key events reach a focused control through [`FieldControl::handle_key`];
/// controls without interactive elements keep the default no-op.
pub trait FieldControl {
    /// Build the control's element tree and capture initial state.
    ///
    /// Called exactly once per instance, before any other lifecycle method.
    ///
    /// # Arguments
    ///
    /// * `context` - Named parameters resolved by the host
    /// * `host` - Callback channel for change notification and faults
    /// * `mount` - Host-owned attachment point for the control's elements
    fn init(&mut self, context: &Context, host: &mut dyn HostServices, mount: &mut Mount);

    /// React to a host-side refresh of bound values or layout.
    fn update_view(&mut self, context: &Context);

    /// Hand the current bound output values back to the host.
    fn outputs(&self) -> Outputs;

    /// Release anything held before the host discards the instance.
    fn destroy(&mut self);

    /// Handle a key event while the control has focus.
    ///
    /// The default implementation ignores the event.
    fn handle_key(&mut self, _key: KeyEvent, _host: &mut dyn HostServices, _mount: &mut Mount) {}
}
