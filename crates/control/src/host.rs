//! Host-side services a mounted control calls back into.

use splitfield_types::ControlError;

/// Callbacks the host provides to a mounted control.
///
/// Output collection is pull-based: the control signals
/// [`HostServices::output_changed`] and the host decides when to read
/// [`crate::FieldControl::outputs`]. Faults travel through
/// [`HostServices::report_error`] so the host chooses how to surface them;
/// a control never blocks on a fault.
pub trait HostServices {
    /// Signal that the control's bound outputs changed.
    fn output_changed(&mut self);

    /// Report a recoverable fault. The control keeps running after this.
    fn report_error(&mut self, error: ControlError);
}
