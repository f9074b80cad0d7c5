/// The wizard's top-level mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Entering host, user and password.
    #[default]
    FormInput,
    /// Waiting for the connection attempt to resolve.
    Connecting,
    /// The last connection attempt failed; retry or edit.
    ConnectionFailed,
    /// Connected, no menu item highlighted yet.
    Welcome,
    /// Connected, Upload highlighted.
    MenuUpload,
    /// Connected, Download highlighted.
    MenuDownload,
}
