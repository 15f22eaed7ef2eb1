//! Host-supplied context handed to a control at initialization.

use splitfield_types::ParameterBag;

/// Read-only view of the host environment for one control instance.
///
/// The context carries the named parameter bag the hosting form resolved
/// for this instance. Hosts pass the same context shape to
/// [`crate::FieldControl::init`] and to every later
/// [`crate::FieldControl::update_view`] call.
#[derive(Debug, Clone, Default)]
pub struct Context {
    parameters: ParameterBag,
}

impl Context {
    /// Wraps a resolved parameter bag for delivery to a control.
    pub fn new(parameters: ParameterBag) -> Self {
        Self { parameters }
    }

    /// The named parameters supplied by the host.
    pub fn parameters(&self) -> &ParameterBag {
        &self.parameters
    }
}
